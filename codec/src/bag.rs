//! Bag pockets in Save Block 1

use std::borrow::Cow;

use crate::Result;
use crate::bytes;
use crate::items::{self, ItemCategory};
use crate::layout::{BagLayout, PocketLayout};

/// An occupied bag slot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemSlot {
    pub item: u16,
    pub quantity: u16,
}

impl ItemSlot {
    pub fn name(&self) -> Cow<'static, str> {
        items::item_name(self.item)
    }

    pub fn category(&self) -> ItemCategory {
        items::categorize(self.item)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Pocket {
    Items,
    KeyItems,
    PokeBalls,
    TmsHms,
    Berries,
}

impl Pocket {
    pub const ALL: [Pocket; 5] = [
        Pocket::Items,
        Pocket::KeyItems,
        Pocket::PokeBalls,
        Pocket::TmsHms,
        Pocket::Berries,
    ];

    pub fn layout(&self, bag: &BagLayout) -> PocketLayout {
        match self {
            Pocket::Items => bag.items,
            Pocket::KeyItems => bag.key_items,
            Pocket::PokeBalls => bag.poke_balls,
            Pocket::TmsHms => bag.tms_hms,
            Pocket::Berries => bag.berries,
        }
    }
}

/// Master Ball (1) through Premier Ball (12)
pub fn is_poke_ball(item: u16) -> bool {
    (1..=12).contains(&item)
}

/// Decode one pocket. Quantities are masked with the low 16 bits of `key`;
/// empty (0) and unused (0xFFFF) item IDs are skipped.
pub fn decode_pocket(sb1: &[u8], pocket: PocketLayout, key: u32) -> Result<Vec<ItemSlot>> {
    let raw = bytes::slice(sb1, pocket.offset, pocket.byte_len(), "bag pocket")?;
    let mask = (key & 0xFFFF) as u16;
    Ok(raw
        .chunks_exact(4)
        .filter_map(|slot| {
            let item = u16::from_le_bytes([slot[0], slot[1]]);
            let quantity = u16::from_le_bytes([slot[2], slot[3]]) ^ mask;
            (item != 0 && item != 0xFFFF).then_some(ItemSlot { item, quantity })
        })
        .collect())
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bag {
    pub items: Vec<ItemSlot>,
    pub key_items: Vec<ItemSlot>,
    pub poke_balls: Vec<ItemSlot>,
    pub tms_hms: Vec<ItemSlot>,
    pub berries: Vec<ItemSlot>,
}

impl Bag {
    pub fn decode(sb1: &[u8], layout: &BagLayout, key: u32) -> Result<Self> {
        Ok(Self {
            items: decode_pocket(sb1, layout.items, key)?,
            key_items: decode_pocket(sb1, layout.key_items, key)?,
            poke_balls: decode_pocket(sb1, layout.poke_balls, key)?,
            tms_hms: decode_pocket(sb1, layout.tms_hms, key)?,
            berries: decode_pocket(sb1, layout.berries, key)?,
        })
    }

    pub fn pocket(&self, pocket: Pocket) -> &[ItemSlot] {
        match pocket {
            Pocket::Items => &self.items,
            Pocket::KeyItems => &self.key_items,
            Pocket::PokeBalls => &self.poke_balls,
            Pocket::TmsHms => &self.tms_hms,
            Pocket::Berries => &self.berries,
        }
    }

    /// Total quantity of an item across all pockets
    pub fn quantity_of(&self, item: u16) -> u32 {
        Pocket::ALL
            .iter()
            .flat_map(|p| self.pocket(*p))
            .filter(|slot| slot.item == item)
            .map(|slot| u32::from(slot.quantity))
            .sum()
    }

    /// Number of Poke Balls available to throw
    pub fn poke_ball_count(&self) -> u32 {
        self.poke_balls
            .iter()
            .filter(|slot| is_poke_ball(slot.item))
            .map(|slot| u32::from(slot.quantity))
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::MemoryLayout;

    fn put(sb1: &mut [u8], at: usize, item: u16, quantity: u16, key: u32) {
        sb1[at..at + 2].copy_from_slice(&item.to_le_bytes());
        sb1[at + 2..at + 4].copy_from_slice(&(quantity ^ key as u16).to_le_bytes());
    }

    #[test]
    fn test_decode_pocket_unmasks_and_skips_empty() {
        let key = 0xABCD_1234;
        let pocket = PocketLayout::new(0x10, 4);
        let mut sb1 = vec![0u8; 0x40];
        put(&mut sb1, 0x10, 13, 5, key); // Potion
        put(&mut sb1, 0x18, 0xFFFF, 1, key);
        put(&mut sb1, 0x1C, 20, 1, key);

        let slots = decode_pocket(&sb1, pocket, key).unwrap();
        assert_eq!(
            slots,
            vec![
                ItemSlot { item: 13, quantity: 5 },
                ItemSlot { item: 20, quantity: 1 },
            ]
        );
    }

    #[test]
    fn test_decode_bag_and_ball_count() {
        let layout = MemoryLayout::emerald();
        let key = 0x0000_7777;
        let mut sb1 = vec![0u8; 0x1000];
        let balls = layout.bag.poke_balls.offset;
        put(&mut sb1, balls, 4, 10, key); // Poke Ball
        put(&mut sb1, balls + 4, 3, 2, key); // Great Ball
        put(&mut sb1, layout.bag.items.offset, 13, 3, key);

        let bag = Bag::decode(&sb1, &layout.bag, key).unwrap();
        assert_eq!(bag.poke_ball_count(), 12);
        assert_eq!(bag.quantity_of(13), 3);
        assert_eq!(bag.pocket(Pocket::PokeBalls).len(), 2);
        assert!(bag.key_items.is_empty());
    }

    #[test]
    fn test_slot_names_and_categories() {
        let oran = ItemSlot { item: 139, quantity: 4 };
        assert_eq!(oran.name(), "Oran Berry");
        assert_eq!(oran.category(), ItemCategory::Berry);
        let junk = ItemSlot { item: 400, quantity: 1 };
        assert_eq!(junk.name(), "Item#400");
        assert_eq!(junk.category(), ItemCategory::Other);
    }

    #[test]
    fn test_short_save_block() {
        let layout = MemoryLayout::emerald();
        let sb1 = vec![0u8; 0x600];
        assert!(Bag::decode(&sb1, &layout.bag, 0).is_err());
    }

    #[test]
    fn test_is_poke_ball() {
        assert!(is_poke_ball(1));
        assert!(is_poke_ball(12));
        assert!(!is_poke_ball(0));
        assert!(!is_poke_ball(13));
    }
}
