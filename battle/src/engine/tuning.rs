//! Scoring thresholds, overridable from config

/// Numbers the strategies score against
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Tuning {
    /// Flee stops being offered after this many attempts
    pub max_flee_attempts: u8,
    /// Opponent HP percent at or below which catching starts
    pub catch_hp_percent: f32,
    /// Opponent HP percent at or below which the battle is in cleanup
    pub cleanup_hp_percent: f32,
    /// Own HP percent at or below which the battle is in its endgame
    pub endgame_hp_percent: f32,
    /// Switch score needed at healthy HP
    pub switch_threshold: f32,
    /// Switch score needed below 40% HP
    pub switch_threshold_hurt: f32,
    /// Switch score needed below 20% HP
    pub switch_threshold_critical: f32,
    /// Switch score needed when a faster opponent threatens a KO
    pub switch_threshold_threatened: f32,
    /// Added to every switch-in when a faster opponent threatens a KO
    pub threatened_switch_bonus: f32,
    /// Own HP percent below which Aggressive and Safe consider running
    pub flee_low_hp_percent: f32,
    pub flee_low_hp_score: f32,
    /// Speedrun's wild-battle flee score; its moves stay below it
    pub speedrun_flee_score: f32,
    /// Safe's multiplier for non-priority moves when outsped and threatened
    pub safe_threat_discount: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            max_flee_attempts: 3,
            catch_hp_percent: 30.0,
            cleanup_hp_percent: 20.0,
            endgame_hp_percent: 25.0,
            switch_threshold: 50.0,
            switch_threshold_hurt: 35.0,
            switch_threshold_critical: 20.0,
            switch_threshold_threatened: 15.0,
            threatened_switch_bonus: 30.0,
            flee_low_hp_percent: 20.0,
            flee_low_hp_score: 80.0,
            speedrun_flee_score: 500.0,
            safe_threat_discount: 0.25,
        }
    }
}

impl Tuning {
    /// Switch score a bench member must beat at the given own-HP percent
    pub fn switch_threshold_for(&self, hp_percent: f32) -> f32 {
        if hp_percent < 20.0 {
            self.switch_threshold_critical
        } else if hp_percent < 40.0 {
            self.switch_threshold_hurt
        } else {
            self.switch_threshold
        }
    }
}
