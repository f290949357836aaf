//! The options byte in Save Block 2

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextSpeed {
    Slow,
    Mid,
    Fast,
}

impl TextSpeed {
    /// Raw values above 2 are treated as Fast
    pub fn from_raw(raw: u8) -> Self {
        match raw {
            0 => TextSpeed::Slow,
            1 => TextSpeed::Mid,
            _ => TextSpeed::Fast,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleStyle {
    /// Offered a switch when the opponent sends out a new Pokemon
    Shift,
    Set,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Sound {
    Mono,
    Stereo,
}

/// Bit positions inside the options byte
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OptionsLayout {
    pub text_speed_mask: u8,
    pub text_speed_shift: u8,
    /// Set means animations are off
    pub battle_scene_bit: u8,
    /// Set means Set style
    pub battle_style_bit: u8,
    /// Set means stereo
    pub sound_bit: u8,
}

impl Default for OptionsLayout {
    fn default() -> Self {
        Self {
            text_speed_mask: 0x07,
            text_speed_shift: 0,
            battle_scene_bit: 3,
            battle_style_bit: 4,
            sound_bit: 5,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameOptions {
    pub text_speed: TextSpeed,
    pub battle_scene: bool,
    pub battle_style: BattleStyle,
    pub sound: Sound,
    pub raw: u8,
}

impl GameOptions {
    /// Fast text, no animations, Set style
    pub fn is_optimal_for_automation(&self) -> bool {
        self.text_speed == TextSpeed::Fast && !self.battle_scene && self.battle_style == BattleStyle::Set
    }
}

/// Decode with the default bit layout
pub fn read_options(byte: u8) -> GameOptions {
    read_options_with(byte, &OptionsLayout::default())
}

/// Decode with an explicit bit layout. Every byte is valid.
pub fn read_options_with(byte: u8, layout: &OptionsLayout) -> GameOptions {
    let bit = |n: u8| byte.checked_shr(u32::from(n)).unwrap_or(0) & 1 == 1;
    let speed = byte.checked_shr(u32::from(layout.text_speed_shift)).unwrap_or(0) & layout.text_speed_mask;

    GameOptions {
        text_speed: TextSpeed::from_raw(speed),
        battle_scene: !bit(layout.battle_scene_bit),
        battle_style: if bit(layout.battle_style_bit) {
            BattleStyle::Set
        } else {
            BattleStyle::Shift
        },
        sound: if bit(layout.sound_bit) { Sound::Stereo } else { Sound::Mono },
        raw: byte,
    }
}
