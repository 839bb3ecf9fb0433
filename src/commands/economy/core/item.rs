//! The static shop catalog. Every purchasable item is a ring, and only
//! catalog rings can back a proposal.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ShopItem {
    /// Stable identifier stored in inventories and interaction ids.
    /// Lower-case ASCII letters, digits and `-` only.
    pub id: &'static str,
    pub display_name: &'static str,
    pub emoji: &'static str,
    pub price: i64,
}

pub const RINGS: &[ShopItem] = &[
    ShopItem {
        id: "silver",
        display_name: "Silver Ring",
        emoji: "💍",
        price: 500_000,
    },
    ShopItem {
        id: "gold",
        display_name: "Gold Ring",
        emoji: "💛",
        price: 2_000_000,
    },
    ShopItem {
        id: "diamond",
        display_name: "Diamond Ring",
        emoji: "💎",
        price: 5_000_000,
    },
    ShopItem {
        id: "eternal",
        display_name: "Eternal Ring",
        emoji: "💖",
        price: 10_000_000,
    },
];

/// All items in display order.
pub fn list() -> &'static [ShopItem] {
    RINGS
}

pub fn find_by_id(id: &str) -> Option<&'static ShopItem> {
    RINGS.iter().find(|item| item.id == id)
}

/// Distinct catalog items held in `inventory`, in catalog order.
pub fn held_rings(inventory: &[String]) -> Vec<&'static ShopItem> {
    RINGS
        .iter()
        .filter(|ring| inventory.iter().any(|i| i == ring.id))
        .collect()
}

/// True if `id` only uses characters that are safe inside an interaction id.
pub fn is_valid_id(id: &str) -> bool {
    !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

impl fmt::Display for ShopItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.emoji, self.display_name)
    }
}
