//! In-battle stat stages

/// Stats that carry a battle stage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Stat {
    Atk,
    Def,
    Spa,
    Spd,
    Spe,
    Accuracy,
    Evasion,
}

const MIN_STAGE: i8 = -6;
const MAX_STAGE: i8 = 6;

/// `gStatStageRatios`: numerator/denominator per stage, index = stage + 6
const STAT_RATIOS: [(u8, u8); 13] = [
    (10, 40),
    (10, 35),
    (10, 30),
    (10, 25),
    (10, 20),
    (10, 15),
    (10, 10),
    (15, 10),
    (20, 10),
    (25, 10),
    (30, 10),
    (35, 10),
    (40, 10),
];

/// `sAccuracyStageRatios`, in hundredths, index = accuracy - evasion + 6
const ACCURACY_RATIOS: [u16; 13] = [33, 36, 43, 50, 60, 75, 100, 133, 166, 200, 233, 266, 300];

fn ratio_index(stage: i16) -> usize {
    (stage.clamp(MIN_STAGE.into(), MAX_STAGE.into()) - i16::from(MIN_STAGE)) as usize
}

/// Stages for one battler, each in -6..=6
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StatStages {
    pub atk: i8,
    pub def: i8,
    pub spa: i8,
    pub spd: i8,
    pub spe: i8,
    pub accuracy: i8,
    pub evasion: i8,
}

impl StatStages {
    pub fn new() -> Self {
        Self::default()
    }

    /// From the `statStages` bytes of a battle mon
    /// (hp, atk, def, spe, spa, spd, acc, eva) where 6 is neutral.
    /// Out-of-range bytes clamp to +6.
    pub fn from_raw(raw: [u8; 8]) -> Self {
        let [_, atk, def, spe, spa, spd, accuracy, evasion] = raw.map(|b| b.min(12) as i8 + MIN_STAGE);
        Self {
            atk,
            def,
            spa,
            spd,
            spe,
            accuracy,
            evasion,
        }
    }

    fn slot(&mut self, stat: Stat) -> &mut i8 {
        match stat {
            Stat::Atk => &mut self.atk,
            Stat::Def => &mut self.def,
            Stat::Spa => &mut self.spa,
            Stat::Spd => &mut self.spd,
            Stat::Spe => &mut self.spe,
            Stat::Accuracy => &mut self.accuracy,
            Stat::Evasion => &mut self.evasion,
        }
    }

    pub fn get(&self, stat: Stat) -> i8 {
        match stat {
            Stat::Atk => self.atk,
            Stat::Def => self.def,
            Stat::Spa => self.spa,
            Stat::Spd => self.spd,
            Stat::Spe => self.spe,
            Stat::Accuracy => self.accuracy,
            Stat::Evasion => self.evasion,
        }
    }

    pub fn set(&mut self, stat: Stat, stage: i8) {
        *self.slot(stat) = stage.clamp(MIN_STAGE, MAX_STAGE);
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_clear(&self) -> bool {
        *self == Self::default()
    }

    /// Stat multiplier for a stage: +1 is 1.5x, -1 is 2/3, +6 is 4x
    pub fn multiplier(stage: i8) -> f32 {
        let (num, den) = STAT_RATIOS[ratio_index(stage.into())];
        f32::from(num) / f32::from(den)
    }

    /// Hit-chance multiplier for the attacker's accuracy stage against the
    /// defender's evasion stage
    pub fn accuracy_multiplier(accuracy: i8, evasion: i8) -> f32 {
        let combined = i16::from(accuracy) - i16::from(evasion);
        f32::from(ACCURACY_RATIOS[ratio_index(combined)]) / 100.0
    }
}
