//! Event flag bitmap and gym badges

use crate::layout::GameVersion;

/// Check one flag: byte `id / 8`, bit `id % 8`.
/// Flags beyond the region read as unset.
pub fn is_flag_set(region: &[u8], flag_id: u16) -> bool {
    region
        .get(usize::from(flag_id / 8))
        .is_some_and(|byte| byte & (1 << (flag_id % 8)) != 0)
}

/// Read `count` consecutive flags starting at `base_flag_id`
pub fn read_badge_flags(region: &[u8], base_flag_id: u16, count: usize) -> Vec<bool> {
    (0..count)
        .map(|i| {
            u16::try_from(i)
                .ok()
                .and_then(|i| base_flag_id.checked_add(i))
                .is_some_and(|id| is_flag_set(region, id))
        })
        .collect()
}

/// Gym badges in the order they are usually earned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Badge {
    First,
    Second,
    Third,
    Fourth,
    Fifth,
    Sixth,
    Seventh,
    Eighth,
}

impl Badge {
    pub const ALL: [Badge; 8] = [
        Badge::First,
        Badge::Second,
        Badge::Third,
        Badge::Fourth,
        Badge::Fifth,
        Badge::Sixth,
        Badge::Seventh,
        Badge::Eighth,
    ];

    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Badge name in the given game
    pub fn name(&self, version: GameVersion) -> &'static str {
        const HOENN: [&str; 8] = [
            "Stone", "Knuckle", "Dynamo", "Heat", "Balance", "Feather", "Mind", "Rain",
        ];
        const KANTO: [&str; 8] = [
            "Boulder", "Cascade", "Thunder", "Rainbow", "Soul", "Marsh", "Volcano", "Earth",
        ];
        match version {
            GameVersion::FireRedLeafGreen => KANTO[self.index()],
            _ => HOENN[self.index()],
        }
    }
}

/// Eight badge booleans
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BadgeFlags {
    pub badges: [bool; 8],
}

impl BadgeFlags {
    /// Decode from the event flag region
    pub fn from_flags(region: &[u8], base_flag_id: u16) -> Self {
        let mut badges = [false; 8];
        for (slot, set) in badges.iter_mut().zip(read_badge_flags(region, base_flag_id, 8)) {
            *slot = set;
        }
        Self { badges }
    }

    pub fn has(&self, badge: Badge) -> bool {
        self.badges[badge.index()]
    }

    pub fn count(&self) -> usize {
        self.badges.iter().filter(|&&b| b).count()
    }

    pub fn earned(&self) -> impl Iterator<Item = Badge> + '_ {
        Badge::ALL.into_iter().filter(|b| self.has(*b))
    }
}
