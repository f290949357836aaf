//! Trainer card data from Save Block 2 and money from Save Block 1

use crate::bytes;
use crate::layout::MemoryLayout;
use crate::text::decode_text;
use crate::Result;

/// Name field width in bytes (7 glyphs + terminator)
pub const NAME_LEN: usize = 8;

mod offset {
    pub const NAME: usize = 0x00;
    pub const GENDER: usize = 0x08;
    pub const TRAINER_ID: usize = 0x0A;
    pub const SECRET_ID: usize = 0x0C;
    pub const PLAY_HOURS: usize = 0x0E;
    pub const PLAY_MINUTES: usize = 0x10;
    pub const PLAY_SECONDS: usize = 0x11;
    pub const PLAY_FRAMES: usize = 0x12;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Gender {
    Male,
    Female,
}

impl Gender {
    pub fn from_byte(b: u8) -> Self {
        if b == 1 { Gender::Female } else { Gender::Male }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayTime {
    pub hours: u16,
    pub minutes: u8,
    pub seconds: u8,
    pub frames: u8,
}

impl PlayTime {
    pub fn total_seconds(&self) -> u64 {
        u64::from(self.hours) * 3600 + u64::from(self.minutes) * 60 + u64::from(self.seconds)
    }
}

impl std::fmt::Display for PlayTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:03}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrainerInfo {
    pub name: String,
    pub gender: Gender,
    pub trainer_id: u16,
    pub secret_id: u16,
    pub play_time: PlayTime,
    pub money: u32,
    pub coins: u16,
}

/// Read the security key from Save Block 2.
///
/// Games without encryption use a key of 0, which makes unmasking a no-op.
pub fn security_key(sb2: &[u8], layout: &MemoryLayout) -> Result<u32> {
    match layout.security_key_offset {
        Some(offset) => bytes::u32_at(sb2, offset, "security key"),
        None => Ok(0),
    }
}

/// Unmask money. Applying it twice gives back the input.
pub fn decrypt_money(raw: u32, key: u32) -> u32 {
    raw ^ key
}

/// Unmask coins with the low half of the key
pub fn decrypt_coins(raw: u16, key: u32) -> u16 {
    raw ^ (key & 0xFFFF) as u16
}

impl TrainerInfo {
    /// Decode from both save blocks.
    ///
    /// Money and coins are unmasked with the key read from this same `sb2`.
    pub fn decode(sb2: &[u8], sb1: &[u8], layout: &MemoryLayout) -> Result<Self> {
        let what = "save block 2";
        let key = security_key(sb2, layout)?;

        Ok(Self {
            name: decode_text(bytes::slice(sb2, offset::NAME, NAME_LEN, what)?, NAME_LEN),
            gender: Gender::from_byte(bytes::u8_at(sb2, offset::GENDER, what)?),
            trainer_id: bytes::u16_at(sb2, offset::TRAINER_ID, what)?,
            secret_id: bytes::u16_at(sb2, offset::SECRET_ID, what)?,
            play_time: PlayTime {
                hours: bytes::u16_at(sb2, offset::PLAY_HOURS, what)?,
                minutes: bytes::u8_at(sb2, offset::PLAY_MINUTES, what)?,
                seconds: bytes::u8_at(sb2, offset::PLAY_SECONDS, what)?,
                frames: bytes::u8_at(sb2, offset::PLAY_FRAMES, what)?,
            },
            money: decrypt_money(bytes::u32_at(sb1, layout.money_offset, "money")?, key),
            coins: decrypt_coins(bytes::u16_at(sb1, layout.coins_offset, "coins")?, key),
        })
    }

    /// Public ID as shown on the trainer card
    pub fn display_id(&self) -> String {
        format!("{:05}", self.trainer_id)
    }

    /// Combined 32-bit ID as stored in Pokemon records
    pub fn full_id(&self) -> u32 {
        u32::from(self.secret_id) << 16 | u32::from(self.trainer_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::encode_text;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn blocks(layout: &MemoryLayout, key: u32, money: u32, coins: u16) -> (Vec<u8>, Vec<u8>) {
        let mut sb2 = vec![0u8; 0x1000];
        sb2[0..8].copy_from_slice(&encode_text("MAY", 8));
        sb2[offset::GENDER] = 1;
        sb2[offset::TRAINER_ID..offset::TRAINER_ID + 2].copy_from_slice(&54321u16.to_le_bytes());
        sb2[offset::SECRET_ID..offset::SECRET_ID + 2].copy_from_slice(&1234u16.to_le_bytes());
        sb2[offset::PLAY_HOURS..offset::PLAY_HOURS + 2].copy_from_slice(&12u16.to_le_bytes());
        sb2[offset::PLAY_MINUTES] = 34;
        sb2[offset::PLAY_SECONDS] = 56;
        sb2[offset::PLAY_FRAMES] = 7;
        if let Some(at) = layout.security_key_offset {
            sb2[at..at + 4].copy_from_slice(&key.to_le_bytes());
        }

        let mut sb1 = vec![0u8; 0x1000];
        let masked_money = money ^ key;
        let masked_coins = coins ^ key as u16;
        sb1[layout.money_offset..layout.money_offset + 4].copy_from_slice(&masked_money.to_le_bytes());
        sb1[layout.coins_offset..layout.coins_offset + 2].copy_from_slice(&masked_coins.to_le_bytes());
        (sb2, sb1)
    }

    #[test]
    fn test_decode_emerald_trainer() {
        let layout = MemoryLayout::emerald();
        let (sb2, sb1) = blocks(&layout, 0xA5A5_1234, 3000, 50);
        let trainer = TrainerInfo::decode(&sb2, &sb1, &layout).unwrap();

        assert_eq!(trainer.name, "MAY");
        assert_eq!(trainer.gender, Gender::Female);
        assert_eq!(trainer.trainer_id, 54321);
        assert_eq!(trainer.secret_id, 1234);
        assert_eq!(trainer.display_id(), "54321");
        assert_eq!(trainer.play_time.to_string(), "012:34:56");
        assert_eq!(trainer.play_time.frames, 7);
        assert_eq!(trainer.money, 3000);
        assert_eq!(trainer.coins, 50);
        assert_eq!(trainer.full_id(), (1234 << 16) | 54321);
    }

    #[test]
    fn test_ruby_sapphire_money_is_plain() {
        let layout = MemoryLayout::ruby_sapphire();
        let (sb2, sb1) = blocks(&layout, 0, 999_999, 9999);
        assert_eq!(security_key(&sb2, &layout).unwrap(), 0);
        let trainer = TrainerInfo::decode(&sb2, &sb1, &layout).unwrap();
        assert_eq!(trainer.money, 999_999);
        assert_eq!(trainer.coins, 9999);
    }

    #[test]
    fn test_fire_red_key_location() {
        let layout = MemoryLayout::fire_red_leaf_green();
        let (sb2, sb1) = blocks(&layout, 0x0F0F_F0F0, 123_456, 10);
        assert_eq!(security_key(&sb2, &layout).unwrap(), 0x0F0F_F0F0);
        assert_eq!(TrainerInfo::decode(&sb2, &sb1, &layout).unwrap().money, 123_456);
    }

    #[test]
    fn test_money_mask_is_self_inverse() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let value: u32 = rng.r#gen();
            let key: u32 = rng.r#gen();
            assert_eq!(decrypt_money(decrypt_money(value, key), key), value);
            let coins: u16 = rng.r#gen();
            assert_eq!(decrypt_coins(decrypt_coins(coins, key), key), coins);
        }
    }

    #[test]
    fn test_key_change_changes_money() {
        let layout = MemoryLayout::emerald();
        let (mut sb2, sb1) = blocks(&layout, 0x1111_1111, 500, 0);
        assert_eq!(TrainerInfo::decode(&sb2, &sb1, &layout).unwrap().money, 500);

        // A key from a different snapshot must not be mixed in
        let at = 0xAC;
        sb2[at..at + 4].copy_from_slice(&0x2222_2222u32.to_le_bytes());
        assert_ne!(TrainerInfo::decode(&sb2, &sb1, &layout).unwrap().money, 500);
    }

    #[test]
    fn test_short_block_is_truncated() {
        let layout = MemoryLayout::emerald();
        let sb2 = [0u8; 0x20];
        let sb1 = [0u8; 0x1000];
        assert!(TrainerInfo::decode(&sb2, &sb1, &layout).is_err());
    }
}
