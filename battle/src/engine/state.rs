//! Engine input: both sides plus caller-threaded turn context

use hoenn_codec::{BattleKind, BattleSnapshot, BattleTypeFlags, Party, Stats};

use super::error::EngineError;
use crate::data::{Ability, GameData};
use crate::types::{Battler, SideState, Type, Weather};

/// Which side of the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Side {
    Player,
    Opponent,
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => write!(f, "player"),
            Side::Opponent => write!(f, "opponent"),
        }
    }
}

/// Multi-turn memory the caller carries between decisions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TurnContext {
    /// Turns completed in this battle; 0 on the first decision
    pub turn: u32,
    /// Flee attempts already made
    pub flee_attempts: u8,
    /// Poke Balls in the bag
    pub poke_balls: u16,
    /// Party slot to send in after a faint
    pub switch_target: Option<usize>,
}

/// Everything the engine looks at for one decision
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleState {
    pub flags: BattleTypeFlags,
    pub weather: Option<Weather>,
    pub player: SideState,
    pub opponent: SideState,
    pub context: TurnContext,
}

impl BattleState {
    pub fn new(flags: BattleTypeFlags, player: SideState, opponent: SideState) -> Self {
        Self {
            flags,
            weather: None,
            player,
            opponent,
            context: TurnContext::default(),
        }
    }

    pub fn with_weather(mut self, weather: Weather) -> Self {
        self.weather = Some(weather);
        self
    }

    pub fn with_context(mut self, context: TurnContext) -> Self {
        self.context = context;
        self
    }

    /// Build from codec output.
    ///
    /// Battler 0 is the player's active Pokemon and battler 1 the opponent's.
    /// The player side holds the whole party in slot order; the active member
    /// is matched by personality and replaced by its in-battle view. Slots that
    /// failed to decode become fainted placeholders so indices stay aligned
    /// with party slots.
    pub fn from_snapshot(
        snapshot: &BattleSnapshot,
        party: &Party,
        data: &GameData,
        context: TurnContext,
    ) -> Result<Self, EngineError> {
        let player_mon = snapshot
            .player()
            .ok_or(EngineError::MissingBattler(Side::Player))?;
        let opponent_mon = snapshot
            .opponent()
            .ok_or(EngineError::MissingBattler(Side::Opponent))?;

        let mut members: Vec<Battler> = (0..party.len())
            .map(|slot| match party.get(slot) {
                Some(record) => {
                    let types = data.species_types(record.species());
                    Battler::from_record(record, &types).unwrap_or_else(|| unreadable_slot(slot))
                }
                None => {
                    tracing::debug!(slot, "party slot unreadable, marking fainted");
                    unreadable_slot(slot)
                }
            })
            .collect();

        let active = Battler::from_battle_mon(player_mon);
        let active_index = match members.iter().position(|m| m.personality == active.personality) {
            Some(index) => {
                members[index] = active;
                index
            }
            None => {
                members.push(active);
                members.len() - 1
            }
        };

        Ok(Self {
            flags: snapshot.flags,
            weather: Weather::from_flags(snapshot.weather),
            player: SideState::new(members).with_active(active_index),
            opponent: SideState::single(Battler::from_battle_mon(opponent_mon)),
            context,
        })
    }

    pub fn kind(&self) -> BattleKind {
        self.flags.kind()
    }

    pub fn is_wild(&self) -> bool {
        self.flags.is_wild()
    }

    /// Weather unless an active Cloud Nine or Air Lock cancels it
    pub fn effective_weather(&self) -> Option<Weather> {
        let suppressed = [self.player.active(), self.opponent.active()]
            .into_iter()
            .flatten()
            .any(|b| b.ability.is_some_and(|a| a.suppresses_weather()));
        if suppressed { None } else { self.weather }
    }

    /// Whether the player's active battler is prevented from leaving
    pub fn player_trapped(&self) -> bool {
        let (Some(player), Some(opponent)) = (self.player.active(), self.opponent.active()) else {
            return false;
        };
        if player.volatiles.prevents_escape() {
            return true;
        }
        match opponent.ability {
            Some(Ability::ShadowTag) => true,
            Some(Ability::ArenaTrap) => player.is_grounded(),
            Some(Ability::MagnetPull) => player.has_type(Type::Steel),
            _ => false,
        }
    }

    /// Whether running is allowed this turn, ignoring the attempt budget
    pub fn can_flee(&self) -> bool {
        if !self.is_wild() || self.flags.is_safari() {
            return false;
        }
        let run_away = self
            .player
            .active()
            .is_some_and(|p| p.has_ability(Ability::RunAway));
        run_away || !self.player_trapped()
    }

    /// Whether switching is allowed this turn
    pub fn can_switch(&self) -> bool {
        !self.player_trapped()
    }
}

fn unreadable_slot(slot: usize) -> Battler {
    Battler::new(0, format!("Slot#{slot}"), 0, &[], Stats::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Volatile;
    use hoenn_codec::{
        Attacks, BattleMon, BattleStats, BattleWeatherFlags, Growth, Ivs, Misc, PokemonRecord,
        Substructures, decode_party,
    };

    fn stats(hp: u16) -> Stats {
        Stats {
            hp,
            atk: 20,
            def: 20,
            spe: 20,
            spa: 20,
            spd: 20,
        }
    }

    fn record(species: u16, personality: u32, level: u8, hp: u16) -> PokemonRecord {
        let growth = Growth {
            species,
            held_item: 0,
            experience: 100,
            pp_bonuses: 0,
            friendship: 70,
        };
        let attacks = Attacks {
            moves: [33, 0, 0, 0],
            pp: [35, 0, 0, 0],
        };
        let misc = Misc {
            pokerus: 0,
            met_location: 0,
            origins: 0,
            ivs: Ivs::default(),
            is_egg: false,
            ability_slot: 0,
            ribbons: 0,
        };
        PokemonRecord {
            personality,
            ot_id: 0x0001_E240,
            nickname: "MON".to_string(),
            language: 2,
            ot_name: "MAY".to_string(),
            markings: 0,
            checksum: 0,
            substructures: Substructures::from_blocks(
                growth.to_block(),
                attacks.to_block(),
                [0u8; 12],
                misc.to_block(),
            ),
            battle: Some(BattleStats {
                status: 0,
                level,
                pokerus_remaining: 0,
                current_hp: hp,
                stats: stats(hp.max(1)),
            }),
        }
    }

    fn battle_mon(species: u16, personality: u32, types: [u8; 2], hp: u16, ability: u8) -> BattleMon {
        let mut raw = vec![0u8; hoenn_codec::battle::BATTLE_MON_SIZE];
        raw[0x00..0x02].copy_from_slice(&species.to_le_bytes());
        raw[0x0C..0x0E].copy_from_slice(&33u16.to_le_bytes());
        raw[0x18..0x20].copy_from_slice(&[6; 8]);
        raw[0x20] = ability;
        raw[0x21] = types[0];
        raw[0x22] = types[1];
        raw[0x24] = 30;
        raw[0x28..0x2A].copy_from_slice(&hp.to_le_bytes());
        raw[0x2A] = 10;
        raw[0x2C..0x2E].copy_from_slice(&hp.to_le_bytes());
        raw[0x48..0x4C].copy_from_slice(&personality.to_le_bytes());
        BattleMon::parse(&raw).unwrap()
    }

    fn party_of(records: &[PokemonRecord]) -> Party {
        let bytes: Vec<u8> = records.iter().flat_map(|r| r.encode()).collect();
        decode_party(records.len() as u32, &bytes).unwrap()
    }

    #[test]
    fn test_from_snapshot_matches_active_by_personality() {
        let party = party_of(&[record(283, 0x11, 10, 30), record(277, 0x22, 12, 35)]);
        let snapshot = BattleSnapshot {
            flags: BattleTypeFlags::TRAINER,
            weather: BattleWeatherFlags::RAIN_TEMPORARY,
            battlers: vec![
                Some(battle_mon(277, 0x22, [0, 2], 35, 0)),
                Some(battle_mon(286, 0x99, [17, 17], 20, 50)),
            ],
        };
        let state =
            BattleState::from_snapshot(&snapshot, &party, &GameData::gen3(), TurnContext::default())
                .unwrap();

        assert_eq!(state.player.active_index, Some(1));
        assert_eq!(state.player.pokemon.len(), 2);
        assert_eq!(state.player.pokemon[0].types, vec![Type::Water]);
        assert_eq!(
            state.player.active().unwrap().types,
            vec![Type::Normal, Type::Flying]
        );
        assert_eq!(state.opponent.active().unwrap().ability, Some(Ability::RunAway));
        assert_eq!(state.weather, Some(Weather::Rain));
        assert_eq!(state.kind(), BattleKind::Trainer);
    }

    #[test]
    fn test_from_snapshot_unknown_active_is_appended() {
        let party = party_of(&[record(283, 0x11, 10, 30)]);
        let snapshot = BattleSnapshot {
            flags: BattleTypeFlags::empty(),
            weather: BattleWeatherFlags::empty(),
            battlers: vec![
                Some(battle_mon(277, 0x77, [0, 2], 35, 0)),
                Some(battle_mon(286, 0x99, [17, 17], 20, 0)),
            ],
        };
        let state =
            BattleState::from_snapshot(&snapshot, &party, &GameData::gen3(), TurnContext::default())
                .unwrap();
        assert_eq!(state.player.active_index, Some(1));
        assert!(state.is_wild());
        assert_eq!(state.weather, None);
    }

    #[test]
    fn test_from_snapshot_missing_battlers() {
        let party = party_of(&[record(283, 0x11, 10, 30)]);
        let data = GameData::gen3();
        let mut snapshot = BattleSnapshot {
            flags: BattleTypeFlags::empty(),
            weather: BattleWeatherFlags::empty(),
            battlers: vec![None, Some(battle_mon(286, 0x99, [17, 17], 20, 0))],
        };
        assert_eq!(
            BattleState::from_snapshot(&snapshot, &party, &data, TurnContext::default()),
            Err(EngineError::MissingBattler(Side::Player))
        );
        snapshot.battlers = vec![Some(battle_mon(283, 0x11, [11, 11], 30, 0))];
        assert_eq!(
            BattleState::from_snapshot(&snapshot, &party, &data, TurnContext::default()),
            Err(EngineError::MissingBattler(Side::Opponent))
        );
    }

    #[test]
    fn test_unreadable_slot_keeps_indices() {
        let good = record(283, 0x11, 10, 30).encode();
        let mut bytes = good.clone();
        bytes.extend(vec![0u8; 100]); // species 0 decodes as an empty slot
        bytes.extend(record(277, 0x22, 12, 35).encode());
        let party = decode_party(3, &bytes).unwrap();
        let snapshot = BattleSnapshot {
            flags: BattleTypeFlags::empty(),
            weather: BattleWeatherFlags::empty(),
            battlers: vec![
                Some(battle_mon(283, 0x11, [11, 11], 30, 0)),
                Some(battle_mon(286, 0x99, [17, 17], 20, 0)),
            ],
        };
        let state =
            BattleState::from_snapshot(&snapshot, &party, &GameData::gen3(), TurnContext::default())
                .unwrap();
        assert_eq!(state.player.pokemon.len(), 3);
        assert!(state.player.pokemon[1].is_fainted());
        assert!(state.player.can_switch_to(2));
    }

    fn simple_state(player: Battler, opponent: Battler, flags: BattleTypeFlags) -> BattleState {
        BattleState::new(flags, SideState::single(player), SideState::single(opponent))
    }

    #[test]
    fn test_trapping_rules() {
        let mudkip = Battler::new(283, "MUDKIP", 5, &[Type::Water], stats(20));
        let swellow = Battler::new(277, "SWELLOW", 30, &[Type::Normal, Type::Flying], stats(80));
        let dugtrio = Battler::new(51, "DUGTRIO", 30, &[Type::Ground], stats(60))
            .with_ability(Ability::ArenaTrap);

        let state = simple_state(mudkip.clone(), dugtrio.clone(), BattleTypeFlags::empty());
        assert!(state.player_trapped());
        assert!(!state.can_flee());
        assert!(!state.can_switch());

        let state = simple_state(swellow, dugtrio, BattleTypeFlags::empty());
        assert!(!state.player_trapped());

        let wobbuffet = Battler::new(202, "WOBBUFFET", 20, &[Type::Psychic], stats(80))
            .with_ability(Ability::ShadowTag);
        let state = simple_state(mudkip.clone(), wobbuffet, BattleTypeFlags::empty());
        assert!(state.player_trapped());

        let magnezone = Battler::new(82, "MAGNETON", 30, &[Type::Electric, Type::Steel], stats(50))
            .with_ability(Ability::MagnetPull);
        let skarmory = Battler::new(227, "SKARMORY", 30, &[Type::Steel, Type::Flying], stats(60));
        let state = simple_state(skarmory, magnezone.clone(), BattleTypeFlags::empty());
        assert!(state.player_trapped());
        let state = simple_state(mudkip.clone(), magnezone, BattleTypeFlags::empty());
        assert!(!state.player_trapped());

        let mut wrapped = mudkip;
        wrapped.volatiles = Volatile::WRAPPED;
        let zigzagoon = Battler::new(288, "ZIGZAGOON", 3, &[Type::Normal], stats(15));
        let state = simple_state(wrapped, zigzagoon, BattleTypeFlags::empty());
        assert!(state.player_trapped());
    }

    #[test]
    fn test_run_away_ignores_trapping() {
        let poochyena = Battler::new(286, "POOCHYENA", 5, &[Type::Dark], stats(20))
            .with_ability(Ability::RunAway);
        let wobbuffet = Battler::new(202, "WOBBUFFET", 20, &[Type::Psychic], stats(80))
            .with_ability(Ability::ShadowTag);
        let state = simple_state(poochyena, wobbuffet, BattleTypeFlags::empty());
        assert!(state.can_flee());
        assert!(!state.can_switch());
    }

    #[test]
    fn test_no_flee_from_trainers_or_safari() {
        let a = Battler::new(283, "MUDKIP", 5, &[Type::Water], stats(20));
        let b = Battler::new(286, "POOCHYENA", 2, &[Type::Dark], stats(9));
        assert!(!simple_state(a.clone(), b.clone(), BattleTypeFlags::TRAINER).can_flee());
        assert!(!simple_state(a.clone(), b.clone(), BattleTypeFlags::SAFARI).can_flee());
        assert!(simple_state(a, b, BattleTypeFlags::empty()).can_flee());
    }

    #[test]
    fn test_air_lock_suppresses_weather() {
        let a = Battler::new(283, "MUDKIP", 5, &[Type::Water], stats(20));
        let rayquaza = Battler::new(406, "RAYQUAZA", 70, &[Type::Dragon, Type::Flying], stats(200))
            .with_ability(Ability::AirLock);
        let state = simple_state(a.clone(), rayquaza, BattleTypeFlags::empty()).with_weather(Weather::Rain);
        assert_eq!(state.effective_weather(), None);
        let b = Battler::new(286, "POOCHYENA", 2, &[Type::Dark], stats(9));
        let state = simple_state(a, b, BattleTypeFlags::empty()).with_weather(Weather::Rain);
        assert_eq!(state.effective_weather(), Some(Weather::Rain));
    }
}
