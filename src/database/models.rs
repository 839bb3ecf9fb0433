//! Contains the data structures that map to the `accounts` table.

use crate::constants::STARTING_BALANCE;
use serenity::model::id::UserId;
use sqlx::types::chrono::{DateTime, Utc};

/// A user's economic and relationship state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Account {
    pub user_id: UserId,
    pub balance: i64,
    pub last_daily_at: Option<DateTime<Utc>>,
    pub partner_id: Option<UserId>,
    pub married_at: Option<DateTime<Utc>>,
    pub affection: i64,
    pub last_affection_at: Option<DateTime<Utc>>,
    /// Catalog item ids in acquisition order; duplicates allowed.
    pub inventory: Vec<String>,
    pub couple_photo: Option<String>,
}

impl Account {
    /// The record a first-time user starts with.
    pub fn new(user_id: UserId) -> Self {
        Self {
            user_id,
            balance: STARTING_BALANCE,
            last_daily_at: None,
            partner_id: None,
            married_at: None,
            affection: 0,
            last_affection_at: None,
            inventory: Vec::new(),
            couple_photo: None,
        }
    }

    pub fn is_married(&self) -> bool {
        self.partner_id.is_some()
    }

    pub fn count_of(&self, item_id: &str) -> usize {
        self.inventory.iter().filter(|i| i.as_str() == item_id).count()
    }

    /// Removes exactly one instance of `item_id`. Returns false if none was held.
    pub fn remove_one(&mut self, item_id: &str) -> bool {
        match self.inventory.iter().position(|i| i == item_id) {
            Some(idx) => {
                self.inventory.remove(idx);
                true
            }
            None => false,
        }
    }

    /// Clears every relationship-scoped field. Balance and inventory survive.
    pub fn clear_relationship(&mut self) {
        self.partner_id = None;
        self.married_at = None;
        self.affection = 0;
        self.couple_photo = None;
    }
}

/// Raw row shape of the `accounts` table.
#[derive(sqlx::FromRow, Debug, Clone)]
pub struct AccountRow {
    pub user_id: i64,
    pub balance: i64,
    pub last_daily_at: Option<DateTime<Utc>>,
    pub partner_id: Option<i64>,
    pub married_at: Option<DateTime<Utc>>,
    pub affection: i64,
    pub last_affection_at: Option<DateTime<Utc>>,
    pub inventory: Vec<String>,
    pub couple_photo: Option<String>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Self {
            user_id: UserId::new(row.user_id as u64),
            balance: row.balance,
            last_daily_at: row.last_daily_at,
            partner_id: row.partner_id.map(|p| UserId::new(p as u64)),
            married_at: row.married_at,
            affection: row.affection,
            last_affection_at: row.last_affection_at,
            inventory: row.inventory,
            couple_photo: row.couple_photo,
        }
    }
}

/// Numeric account fields that support atomic increments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Counter {
    Balance,
    Affection,
}

impl Counter {
    pub fn column(&self) -> &'static str {
        match self {
            Counter::Balance => "balance",
            Counter::Affection => "affection",
        }
    }

    pub fn get(&self, account: &Account) -> i64 {
        match self {
            Counter::Balance => account.balance,
            Counter::Affection => account.affection,
        }
    }

    pub fn get_mut<'a>(&self, account: &'a mut Account) -> &'a mut i64 {
        match self {
            Counter::Balance => &mut account.balance,
            Counter::Affection => &mut account.affection,
        }
    }
}

/// A set of field assignments. `None` leaves a field untouched; for nullable
/// columns the inner `Option` is the value written.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AccountPatch {
    pub balance: Option<i64>,
    pub last_daily_at: Option<Option<DateTime<Utc>>>,
    pub partner_id: Option<Option<UserId>>,
    pub married_at: Option<Option<DateTime<Utc>>>,
    pub affection: Option<i64>,
    pub last_affection_at: Option<Option<DateTime<Utc>>>,
    pub inventory: Option<Vec<String>>,
    pub couple_photo: Option<Option<String>>,
}

impl AccountPatch {
    /// The patch that turns `before` into `after`.
    pub fn diff(before: &Account, after: &Account) -> Self {
        fn changed<T: PartialEq + Clone>(a: &T, b: &T) -> Option<T> {
            (a != b).then(|| b.clone())
        }
        Self {
            balance: changed(&before.balance, &after.balance),
            last_daily_at: changed(&before.last_daily_at, &after.last_daily_at),
            partner_id: changed(&before.partner_id, &after.partner_id),
            married_at: changed(&before.married_at, &after.married_at),
            affection: changed(&before.affection, &after.affection),
            last_affection_at: changed(&before.last_affection_at, &after.last_affection_at),
            inventory: changed(&before.inventory, &after.inventory),
            couple_photo: changed(&before.couple_photo, &after.couple_photo),
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    pub fn apply(&self, account: &mut Account) {
        if let Some(v) = self.balance {
            account.balance = v;
        }
        if let Some(v) = self.last_daily_at {
            account.last_daily_at = v;
        }
        if let Some(v) = self.partner_id {
            account.partner_id = v;
        }
        if let Some(v) = self.married_at {
            account.married_at = v;
        }
        if let Some(v) = self.affection {
            account.affection = v;
        }
        if let Some(v) = self.last_affection_at {
            account.last_affection_at = v;
        }
        if let Some(v) = &self.inventory {
            account.inventory = v.clone();
        }
        if let Some(v) = &self.couple_photo {
            account.couple_photo = v.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn married(user: u64, partner: u64) -> Account {
        let mut account = Account::new(UserId::new(user));
        account.partner_id = Some(UserId::new(partner));
        account.married_at = Some(Utc.with_ymd_and_hms(2025, 2, 14, 18, 0, 0).unwrap());
        account.affection = 150;
        account.couple_photo = Some("https://example.com/us.png".into());
        account.inventory = vec!["silver".into(), "gold".into(), "silver".into()];
        account
    }

    #[test]
    fn remove_one_takes_a_single_copy() {
        let mut account = married(1, 2);
        assert!(account.remove_one("silver"));
        assert_eq!(account.count_of("silver"), 1);
        assert_eq!(account.inventory, vec!["gold".to_string(), "silver".to_string()]);
        assert!(!account.remove_one("diamond"));
        assert_eq!(account.inventory.len(), 2);
    }

    #[test]
    fn clearing_a_relationship_keeps_money_and_rings() {
        let mut account = married(1, 2);
        account.balance = 1234;
        account.clear_relationship();
        assert!(!account.is_married());
        assert_eq!(account.married_at, None);
        assert_eq!(account.affection, 0);
        assert_eq!(account.couple_photo, None);
        assert_eq!(account.balance, 1234);
        assert_eq!(account.inventory.len(), 3);
    }

    #[test]
    fn diff_only_lists_changed_fields_and_applies_back() {
        let before = married(1, 2);
        let mut after = before.clone();
        after.clear_relationship();
        after.balance -= 10;

        let patch = AccountPatch::diff(&before, &after);
        assert_eq!(patch.balance, Some(before.balance - 10));
        assert_eq!(patch.partner_id, Some(None));
        assert_eq!(patch.inventory, None);
        assert_eq!(patch.last_daily_at, None);

        let mut replay = before.clone();
        patch.apply(&mut replay);
        assert_eq!(replay, after);
        assert!(AccountPatch::diff(&after, &after).is_empty());
    }
}
