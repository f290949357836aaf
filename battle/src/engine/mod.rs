//! Battle decision engine
//!
//! Given a [`BattleState`] and a [`Strategy`], enumerates the legal actions,
//! scores each one and returns the best. Deterministic: the same state,
//! strategy and tuning always produce the same [`Decision`], and ties go to
//! the action enumerated first (moves by slot, switches by party order, then
//! flee, then catch).

mod action;
mod damage;
mod error;
mod speed;
mod state;
mod strategy;
mod tuning;

pub use action::{Action, Decision, ScoredAction};
pub use damage::{DamageEstimate, crit_chance, effectiveness, estimate, hit_chance};
pub use error::EngineError;
pub use speed::{effective_speed, outspeeds};
pub use state::{BattleState, Side, TurnContext};
pub use strategy::{Matchup, MoveScore, Phase, Strategy, Threat};
pub use tuning::Tuning;

use crate::data::GameData;
use crate::types::Battler;

/// Scores actions against injected game data
#[derive(Debug, Clone)]
pub struct Engine<'d> {
    data: &'d GameData,
    tuning: Tuning,
}

fn actives(state: &BattleState) -> Result<(&Battler, &Battler), EngineError> {
    let player = state
        .player
        .active()
        .ok_or(EngineError::MissingBattler(Side::Player))?;
    let opponent = state
        .opponent
        .active()
        .ok_or(EngineError::MissingBattler(Side::Opponent))?;
    Ok((player, opponent))
}

impl<'d> Engine<'d> {
    pub fn new(data: &'d GameData) -> Self {
        Self::with_tuning(data, Tuning::default())
    }

    pub fn with_tuning(data: &'d GameData, tuning: Tuning) -> Self {
        Self { data, tuning }
    }

    pub fn data(&self) -> &GameData {
        self.data
    }

    pub fn tuning(&self) -> &Tuning {
        &self.tuning
    }

    /// Phase of the battle as `strategy` sees it
    pub fn phase(&self, state: &BattleState, strategy: Strategy) -> Result<Phase, EngineError> {
        let (player, opponent) = actives(state)?;
        Ok(Phase::assess(
            strategy,
            player,
            opponent,
            state.is_wild(),
            state.context.turn,
            &self.tuning,
        ))
    }

    /// Actions available this turn, in tie-breaking order.
    ///
    /// With a fainted active battler only switches are listed.
    pub fn legal_actions(&self, state: &BattleState) -> Result<Vec<Action>, EngineError> {
        let (player, _) = actives(state)?;
        let switches = state.player.bench().map(|(index, _)| Action::Switch { index });
        if player.is_fainted() {
            return Ok(switches.collect());
        }

        let mut actions: Vec<Action> = player
            .usable_moves()
            .map(|(slot, m)| Action::UseMove { slot, move_id: m.id })
            .collect();
        if state.can_switch() {
            actions.extend(switches);
        }
        if state.can_flee() && state.context.flee_attempts < self.tuning.max_flee_attempts {
            actions.push(Action::Flee);
        }
        if state.is_wild() && state.context.poke_balls > 0 {
            actions.push(Action::Catch);
        }
        Ok(actions)
    }

    /// Turn order of the active battlers, fastest first; ties favor the player
    pub fn speed_order(&self, state: &BattleState) -> Vec<Side> {
        let weather = state.effective_weather();
        let mut order: Vec<(Side, f32)> = [
            (Side::Player, state.player.active()),
            (Side::Opponent, state.opponent.active()),
        ]
        .into_iter()
        .filter_map(|(side, battler)| battler.map(|b| (side, effective_speed(b, weather))))
        .collect();
        order.sort_by(|a, b| b.1.total_cmp(&a.1));
        order.into_iter().map(|(side, _)| side).collect()
    }

    fn matchup<'s>(&self, state: &'s BattleState, strategy: Strategy) -> Result<Matchup<'s>, EngineError> {
        let (player, opponent) = actives(state)?;
        let weather = state.effective_weather();
        Ok(Matchup {
            player,
            opponent,
            weather,
            phase: self.phase(state, strategy)?,
            turn: state.context.turn,
            wild: state.is_wild(),
            can_flee: state.can_flee() && state.context.flee_attempts < self.tuning.max_flee_attempts,
            player_speed: effective_speed(player, weather),
            opponent_speed: effective_speed(opponent, weather),
            threat: Threat::assess(self.data, opponent, player, weather),
        })
    }

    fn score_action(&self, state: &BattleState, strategy: Strategy, m: &Matchup<'_>, action: Action) -> ScoredAction {
        let (score, lethal) = match action {
            Action::UseMove { slot, move_id } => {
                let pp = m.player.moves.get(slot).map_or(0, |s| s.pp);
                let mv = self.data.move_or_placeholder(move_id);
                let scored = strategy.score_move(&mv, pp, m, &self.tuning);
                (scored.score, scored.lethal)
            }
            Action::Switch { index } => {
                let score = state
                    .player
                    .get_pokemon(index)
                    .map_or(0.0, |c| strategy.score_switch(c, m, self.data, &self.tuning));
                (score, false)
            }
            Action::Flee => (strategy.score_flee(m, &self.tuning), false),
            Action::Catch => (strategy.score_catch(m, &self.tuning), false),
        };
        ScoredAction {
            action,
            score,
            lethal,
        }
    }

    /// Score one move slot of the player's active battler
    pub fn score_move(&self, state: &BattleState, strategy: Strategy, slot: usize) -> Result<Option<ScoredAction>, EngineError> {
        let m = self.matchup(state, strategy)?;
        Ok(m.player.moves.get(slot).map(|s| {
            self.score_action(state, strategy, &m, Action::UseMove { slot, move_id: s.id })
        }))
    }

    /// Score sending in the party member at `index`
    pub fn score_switch(&self, state: &BattleState, strategy: Strategy, index: usize) -> Result<Option<ScoredAction>, EngineError> {
        let m = self.matchup(state, strategy)?;
        if !state.player.can_switch_to(index) {
            return Ok(None);
        }
        Ok(Some(self.score_action(state, strategy, &m, Action::Switch { index })))
    }

    /// Choose the best action for this turn
    pub fn decide(&self, state: &BattleState, strategy: Strategy) -> Result<Decision, EngineError> {
        let (player, _) = actives(state)?;
        let phase = self.phase(state, strategy)?;

        if player.is_fainted() {
            let index = state
                .context
                .switch_target
                .ok_or(EngineError::ForcedSwitchRequired)?;
            if !state.player.can_switch_to(index) {
                return Err(EngineError::InvalidSwitchTarget(index));
            }
            let action = Action::Switch { index };
            tracing::debug!(%strategy, %action, "forced switch after faint");
            return Ok(Decision {
                action,
                scores: vec![ScoredAction {
                    action,
                    score: 0.0,
                    lethal: false,
                }],
                phase,
            });
        }

        let actions = self.legal_actions(state)?;
        if !actions.iter().any(|a| matches!(a, Action::UseMove { .. })) {
            return Err(EngineError::NoLegalAction);
        }

        let m = self.matchup(state, strategy)?;
        let scores: Vec<ScoredAction> = actions
            .into_iter()
            .map(|action| self.score_action(state, strategy, &m, action))
            .collect();
        for scored in &scores {
            tracing::trace!(action = %scored.action, score = scored.score, lethal = scored.lethal, "candidate");
        }

        let mut best = scores[0];
        for scored in &scores[1..] {
            if scored.score > best.score {
                best = *scored;
            }
        }

        tracing::debug!(
            %strategy,
            %phase,
            action = %best.action,
            score = best.score,
            lethal = best.lethal,
            "battle decision"
        );
        Ok(Decision {
            action: best.action,
            scores,
            phase,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Ability;
    use crate::types::{SideState, Status, Type, Volatile, Weather};
    use hoenn_codec::{BattleTypeFlags, Stats};

    fn stats(hp: u16, atk: u16, def: u16, spe: u16, spa: u16, spd: u16) -> Stats {
        Stats {
            hp,
            atk,
            def,
            spe,
            spa,
            spd,
        }
    }

    fn mudkip() -> Battler {
        Battler::new(283, "MUDKIP", 5, &[Type::Water], stats(21, 13, 11, 9, 11, 10))
            .with_ability(Ability::Torrent)
            .with_moves(&[(33, 35), (45, 40)])
    }

    fn poochyena() -> Battler {
        Battler::new(286, "POOCHYENA", 2, &[Type::Dark], stats(9, 7, 4, 6, 5, 5))
            .with_ability(Ability::RunAway)
            .with_moves(&[(33, 35)])
    }

    fn wild(player: Vec<Battler>, opponent: Battler) -> BattleState {
        BattleState::new(BattleTypeFlags::empty(), SideState::new(player), SideState::single(opponent))
    }

    fn trainer(player: Vec<Battler>, opponent: Battler) -> BattleState {
        BattleState::new(BattleTypeFlags::TRAINER, SideState::new(player), SideState::single(opponent))
    }

    fn context(turn: u32) -> TurnContext {
        TurnContext {
            turn,
            ..TurnContext::default()
        }
    }

    fn blaziken() -> Battler {
        Battler::new(282, "BLAZIKEN", 36, &[Type::Fire, Type::Fighting], stats(110, 100, 60, 70, 95, 60))
            .with_ability(Ability::Blaze)
            .with_moves(&[(299, 10), (327, 15), (24, 30), (163, 20)])
    }

    fn flygon() -> Battler {
        Battler::new(334, "FLYGON", 35, &[Type::Ground, Type::Dragon], stats(105, 90, 75, 90, 75, 75))
            .with_ability(Ability::Levitate)
            .with_moves(&[(89, 10), (44, 25)])
    }

    fn swellow() -> Battler {
        Battler::new(277, "SWELLOW", 30, &[Type::Normal, Type::Flying], stats(80, 70, 50, 100, 45, 50))
            .with_moves(&[(17, 35), (332, 20)])
    }

    fn manectric() -> Battler {
        Battler::new(310, "MANECTRIC", 30, &[Type::Electric], stats(70, 60, 50, 95, 80, 60))
            .with_moves(&[(85, 15), (44, 25)])
    }

    #[test]
    fn test_mudkip_tackles_poochyena() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let state = wild(vec![mudkip()], poochyena());

        let decision = engine.decide(&state, Strategy::Aggressive).unwrap();
        assert_eq!(decision.action, Action::UseMove { slot: 0, move_id: 33 });
        assert!(decision.is_lethal());
        assert!(decision.chosen().unwrap().score > 1000.0);
        assert_eq!(decision.phase, Phase::Opening);
        // Tackle, Growl, Flee; no balls so no Catch
        assert_eq!(decision.scores.len(), 3);
        assert_eq!(decision.score_of(Action::Flee), Some(0.0));
    }

    #[test]
    fn test_decisions_are_deterministic() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let state = trainer(vec![blaziken(), manectric(), swellow()], flygon()).with_context(context(3));
        for strategy in Strategy::ALL {
            let first = engine.decide(&state, strategy).unwrap();
            let second = engine.decide(&state, strategy).unwrap();
            assert_eq!(first, second);
        }
    }

    #[test]
    fn test_safe_switches_out_of_earthquake() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let state = trainer(vec![blaziken(), manectric(), swellow()], flygon()).with_context(context(1));

        let decision = engine.decide(&state, Strategy::Safe).unwrap();
        assert_eq!(decision.action, Action::Switch { index: 2 });

        let to_swellow = decision.score_of(Action::Switch { index: 2 }).unwrap();
        let to_manectric = decision.score_of(Action::Switch { index: 1 }).unwrap();
        assert!(to_swellow > to_manectric);
        let best_move = decision
            .scores
            .iter()
            .filter(|s| matches!(s.action, Action::UseMove { .. }))
            .map(|s| s.score)
            .fold(0.0, f32::max);
        assert!(to_swellow > best_move);
    }

    #[test]
    fn test_speedrun_never_switches() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let state = trainer(vec![blaziken(), manectric(), swellow()], flygon()).with_context(context(1));
        let decision = engine.decide(&state, Strategy::Speedrun).unwrap();
        assert!(matches!(decision.action, Action::UseMove { .. }));
        assert_eq!(decision.score_of(Action::Switch { index: 2 }), Some(0.0));
    }

    #[test]
    fn test_speedrun_flees_wild_battles() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let state = wild(vec![mudkip()], poochyena());
        let decision = engine.decide(&state, Strategy::Speedrun).unwrap();
        assert_eq!(decision.action, Action::Flee);

        // out of attempts, fall back to the lethal move
        let state = state.with_context(TurnContext {
            flee_attempts: 3,
            ..TurnContext::default()
        });
        let decision = engine.decide(&state, Strategy::Speedrun).unwrap();
        assert_eq!(decision.action, Action::UseMove { slot: 0, move_id: 33 });
        assert_eq!(decision.score_of(Action::Flee), None);
    }

    #[test]
    fn test_forced_switch_after_faint() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let fainted = blaziken().with_hp(0);
        let mut state = trainer(vec![fainted, manectric(), swellow().with_hp(0)], flygon());

        assert_eq!(engine.decide(&state, Strategy::Aggressive), Err(EngineError::ForcedSwitchRequired));
        assert_eq!(engine.legal_actions(&state).unwrap(), vec![Action::Switch { index: 1 }]);

        state.context.switch_target = Some(2);
        assert_eq!(engine.decide(&state, Strategy::Aggressive), Err(EngineError::InvalidSwitchTarget(2)));

        state.context.switch_target = Some(1);
        let decision = engine.decide(&state, Strategy::Aggressive).unwrap();
        assert_eq!(decision.action, Action::Switch { index: 1 });
    }

    #[test]
    fn test_no_usable_moves() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let empty = mudkip().with_moves(&[(33, 0), (45, 0)]);
        let state = wild(vec![empty], poochyena());
        assert_eq!(engine.decide(&state, Strategy::Aggressive), Err(EngineError::NoLegalAction));
    }

    #[test]
    fn test_missing_battlers() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let state = BattleState::new(BattleTypeFlags::empty(), SideState::default(), SideState::single(poochyena()));
        assert_eq!(
            engine.decide(&state, Strategy::Aggressive),
            Err(EngineError::MissingBattler(Side::Player))
        );
        let state = BattleState::new(BattleTypeFlags::empty(), SideState::single(mudkip()), SideState::default());
        assert_eq!(
            engine.decide(&state, Strategy::Aggressive),
            Err(EngineError::MissingBattler(Side::Opponent))
        );
    }

    #[test]
    fn test_trapping_removes_switch_and_flee() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let trapper = poochyena().with_ability(Ability::ShadowTag);
        let state = wild(vec![mudkip(), swellow()], trapper);
        let actions = engine.legal_actions(&state).unwrap();
        assert_eq!(
            actions,
            vec![
                Action::UseMove { slot: 0, move_id: 33 },
                Action::UseMove { slot: 1, move_id: 45 },
            ]
        );

        let mut wrapped = mudkip();
        wrapped.volatiles = Volatile::WRAPPED;
        let state = wild(vec![wrapped.with_ability(Ability::RunAway), swellow()], poochyena());
        let actions = engine.legal_actions(&state).unwrap();
        assert!(actions.contains(&Action::Flee));
        assert!(!actions.contains(&Action::Switch { index: 1 }));
    }

    #[test]
    fn test_flee_offered_only_in_wild_battles() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let state = trainer(vec![mudkip()], poochyena());
        assert!(!engine.legal_actions(&state).unwrap().contains(&Action::Flee));
    }

    #[test]
    fn test_low_hp_aggressive_considers_running() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let tough = Battler::new(1, "ZIGZAGOON", 5, &[Type::Normal], stats(40, 10, 40, 20, 10, 40))
            .with_moves(&[(33, 35)]);
        let state = wild(vec![mudkip().with_hp(3)], tough).with_context(context(2));
        let decision = engine.decide(&state, Strategy::Aggressive).unwrap();
        assert_eq!(decision.score_of(Action::Flee), Some(80.0));
    }

    #[test]
    fn test_catch_strategy() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let target = poochyena().with_status(Status::Sleep);
        let mut state = wild(vec![mudkip()], target.clone().with_hp(2)).with_context(TurnContext {
            turn: 3,
            poke_balls: 5,
            ..TurnContext::default()
        });

        let decision = engine.decide(&state, Strategy::Catch).unwrap();
        assert_eq!(decision.phase, Phase::Catching);
        assert_eq!(decision.action, Action::Catch);
        assert_eq!(decision.score_of(Action::Catch), Some(300.0));
        // Tackle would knock it out
        assert_eq!(decision.score_of(Action::UseMove { slot: 0, move_id: 33 }), Some(0.0));

        state.context.poke_balls = 0;
        let decision = engine.decide(&state, Strategy::Catch).unwrap();
        assert_eq!(decision.score_of(Action::Catch), None);
    }

    #[test]
    fn test_speed_order() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let state = trainer(vec![blaziken()], flygon());
        assert_eq!(engine.speed_order(&state), vec![Side::Opponent, Side::Player]);

        let state = trainer(vec![blaziken()], flygon().with_status(Status::Paralysis));
        assert_eq!(engine.speed_order(&state), vec![Side::Player, Side::Opponent]);

        let tied = Battler::new(1, "TIE", 30, &[Type::Normal], stats(50, 50, 50, 70, 50, 50));
        let state = trainer(vec![blaziken()], tied);
        assert_eq!(engine.speed_order(&state), vec![Side::Player, Side::Opponent]);
    }

    #[test]
    fn test_weather_and_air_lock_reach_scoring() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let target = Battler::new(1, "T", 20, &[Type::Normal], stats(200, 30, 30, 30, 30, 30)).with_moves(&[(33, 35)]);
        let swimmer = Battler::new(1, "S", 20, &[Type::Water], stats(60, 30, 30, 30, 40, 30)).with_moves(&[(55, 25)]);
        let state = trainer(vec![swimmer.clone()], target.clone()).with_context(context(1));
        let dry = engine.score_move(&state, Strategy::Aggressive, 0).unwrap().unwrap();
        let rain = engine
            .score_move(&state.clone().with_weather(Weather::Rain), Strategy::Aggressive, 0)
            .unwrap()
            .unwrap();
        assert!(rain.score > dry.score);

        let locked = trainer(vec![swimmer], target.with_ability(Ability::AirLock))
            .with_context(context(1))
            .with_weather(Weather::Rain);
        let suppressed = engine.score_move(&locked, Strategy::Aggressive, 0).unwrap().unwrap();
        assert_eq!(suppressed.score, dry.score);
        assert_eq!(engine.score_move(&locked, Strategy::Aggressive, 3).unwrap(), None);
    }

    #[test]
    fn test_score_switch_rejects_active_and_fainted() {
        let data = GameData::gen3();
        let engine = Engine::new(&data);
        let state = trainer(vec![blaziken(), manectric().with_hp(0), swellow()], flygon()).with_context(context(1));
        assert_eq!(engine.score_switch(&state, Strategy::Safe, 0).unwrap(), None);
        assert_eq!(engine.score_switch(&state, Strategy::Safe, 1).unwrap(), None);
        assert!(engine.score_switch(&state, Strategy::Safe, 2).unwrap().unwrap().score > 0.0);
    }

    #[test]
    fn test_custom_tuning_limits_flee() {
        let data = GameData::gen3();
        let tuning = Tuning {
            max_flee_attempts: 1,
            ..Tuning::default()
        };
        let engine = Engine::with_tuning(&data, tuning);
        let state = wild(vec![mudkip()], poochyena()).with_context(TurnContext {
            flee_attempts: 1,
            ..TurnContext::default()
        });
        assert!(!engine.legal_actions(&state).unwrap().contains(&Action::Flee));
    }
}
