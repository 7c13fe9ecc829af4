//! Typed access to the cached session and profile stats

use super::{KeyValueStore, StoreError};
use crate::game::{GameResult, Rank};
use serde::Serialize;
use serde_json::{Value, json};

const ACCESS_TOKEN: &str = "access_token";
const USER_ID: &str = "user_id";
const PLAYER_ID: &str = "player_id";
const USERNAME: &str = "username";
const WINS: &str = "wins";
const WINS_PVP: &str = "wins_pvp";
const WINS_TOURNAMENT: &str = "wins_tournament";
const XP: &str = "xp";
const RANK: &str = "rank";

/// Snapshot of the cached stats
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProfileStats {
    pub username: Option<String>,
    pub wins: u64,
    pub wins_pvp: u64,
    pub wins_tournament: u64,
    pub xp: u64,
    pub rank: Rank,
}

/// Session token and profile cache over any key/value backend
pub struct Profile {
    store: Box<dyn KeyValueStore>,
}

impl Profile {
    pub fn new(store: impl KeyValueStore + 'static) -> Self {
        Self {
            store: Box::new(store),
        }
    }

    fn text(&self, key: &str) -> Option<String> {
        match self.store.get(key)? {
            Value::String(s) if !s.is_empty() => Some(s),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        }
    }

    /// Read a counter, accepting numbers stored as strings; missing or unreadable is 0
    fn count(&self, key: &str) -> u64 {
        match self.store.get(key) {
            Some(Value::Number(n)) => n.as_u64().unwrap_or(0),
            Some(Value::String(s)) => s.trim().parse().unwrap_or(0),
            _ => 0,
        }
    }

    fn increment(&mut self, key: &str, by: u64) -> Result<u64, StoreError> {
        let value = self.count(key).saturating_add(by);
        self.store.set(key, json!(value))?;
        Ok(value)
    }

    #[must_use]
    pub fn access_token(&self) -> Option<String> {
        self.text(ACCESS_TOKEN)
    }

    /// # Errors
    /// Returns `StoreError` if the backend cannot persist the change.
    pub fn set_access_token(&mut self, token: &str) -> Result<(), StoreError> {
        self.store.set(ACCESS_TOKEN, json!(token))
    }

    #[must_use]
    pub fn is_signed_in(&self) -> bool {
        self.access_token().is_some()
    }

    #[must_use]
    pub fn user_id(&self) -> Option<String> {
        self.text(USER_ID)
    }

    /// # Errors
    /// Returns `StoreError` if the backend cannot persist the change.
    pub fn set_user_id(&mut self, user_id: &str) -> Result<(), StoreError> {
        self.store.set(USER_ID, json!(user_id))
    }

    #[must_use]
    pub fn player_id(&self) -> Option<String> {
        self.text(PLAYER_ID)
    }

    /// # Errors
    /// Returns `StoreError` if the backend cannot persist the change.
    pub fn set_player_id(&mut self, player_id: &str) -> Result<(), StoreError> {
        self.store.set(PLAYER_ID, json!(player_id))
    }

    #[must_use]
    pub fn username(&self) -> Option<String> {
        self.text(USERNAME)
    }

    /// # Errors
    /// Returns `StoreError` if the backend cannot persist the change.
    pub fn set_username(&mut self, username: &str) -> Result<(), StoreError> {
        self.store.set(USERNAME, json!(username))
    }

    #[must_use]
    pub fn wins(&self) -> u64 {
        self.count(WINS)
    }

    /// # Errors
    /// Returns `StoreError` if the backend cannot persist the change.
    pub fn increment_wins(&mut self) -> Result<u64, StoreError> {
        self.increment(WINS, 1)
    }

    #[must_use]
    pub fn wins_pvp(&self) -> u64 {
        self.count(WINS_PVP)
    }

    #[must_use]
    pub fn wins_tournament(&self) -> u64 {
        self.count(WINS_TOURNAMENT)
    }

    #[must_use]
    pub fn xp(&self) -> u64 {
        self.count(XP)
    }

    /// Set XP and refresh the cached rank
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot persist the change.
    pub fn set_xp(&mut self, xp: u64) -> Result<(), StoreError> {
        self.store.set(XP, json!(xp))?;
        self.store.set(RANK, json!(Rank::from_xp(xp).as_str()))
    }

    /// Add XP and refresh the cached rank
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot persist the change.
    pub fn add_xp(&mut self, amount: u64) -> Result<u64, StoreError> {
        let xp = self.xp().saturating_add(amount);
        self.set_xp(xp)?;
        Ok(xp)
    }

    /// Rank implied by the XP total
    ///
    /// The cached `rank` entry is written alongside XP but never read back.
    #[must_use]
    pub fn rank(&self) -> Rank {
        Rank::from_xp(self.xp())
    }

    /// Fold a finished round into the cached stats
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot persist the change.
    pub fn record_result(&mut self, result: &GameResult) -> Result<(), StoreError> {
        if result.win {
            self.increment_wins()?;
        }
        if result.xp > 0 {
            self.add_xp(result.xp)?;
        }
        Ok(())
    }

    #[must_use]
    pub fn stats(&self) -> ProfileStats {
        ProfileStats {
            username: self.username(),
            wins: self.wins(),
            wins_pvp: self.wins_pvp(),
            wins_tournament: self.wins_tournament(),
            xp: self.xp(),
            rank: self.rank(),
        }
    }

    /// Forget everything, including the session token
    ///
    /// # Errors
    /// Returns `StoreError` if the backend cannot persist the change.
    pub fn destroy_all(&mut self) -> Result<(), StoreError> {
        self.store.clear()
    }
}

impl std::fmt::Debug for Profile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Profile")
            .field("signed_in", &self.is_signed_in())
            .field("stats", &self.stats())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn result(win: bool, xp: u64) -> GameResult {
        GameResult {
            word: "crane".to_string(),
            attempts: 3,
            time: 40,
            win,
            xp,
        }
    }

    #[test]
    fn empty_profile_defaults() {
        let profile = Profile::new(MemoryStore::new());
        assert!(!profile.is_signed_in());
        assert_eq!(
            profile.stats(),
            ProfileStats {
                username: None,
                wins: 0,
                wins_pvp: 0,
                wins_tournament: 0,
                xp: 0,
                rank: Rank::Iron,
            }
        );
    }

    #[test]
    fn session_fields_round_trip() {
        let mut profile = Profile::new(MemoryStore::new());
        profile.set_access_token("tok").unwrap();
        profile.set_user_id("17").unwrap();
        profile.set_player_id("4").unwrap();
        profile.set_username("ana").unwrap();

        assert!(profile.is_signed_in());
        assert_eq!(profile.user_id().as_deref(), Some("17"));
        assert_eq!(profile.player_id().as_deref(), Some("4"));
        assert_eq!(profile.username().as_deref(), Some("ana"));
    }

    #[test]
    fn counters_increment_from_zero() {
        let mut profile = Profile::new(MemoryStore::new());
        assert_eq!(profile.increment_wins().unwrap(), 1);
        assert_eq!(profile.increment_wins().unwrap(), 2);
        assert_eq!(profile.wins(), 2);
    }

    #[test]
    fn counters_accept_string_values() {
        let mut store = MemoryStore::new();
        store.set("wins", json!("7")).unwrap();
        store.set("xp", json!("oops")).unwrap();
        let profile = Profile::new(store);
        assert_eq!(profile.wins(), 7);
        assert_eq!(profile.xp(), 0);
    }

    #[test]
    fn xp_updates_rank() {
        let mut profile = Profile::new(MemoryStore::new());
        profile.set_xp(1_900).unwrap();
        assert_eq!(profile.rank(), Rank::Iron);

        assert_eq!(profile.add_xp(200).unwrap(), 2_100);
        assert_eq!(profile.rank(), Rank::Bronze);

        profile.set_xp(14_000).unwrap();
        assert_eq!(profile.rank(), Rank::Platinum);
    }

    #[test]
    fn stale_cached_rank_is_ignored() {
        let mut store = MemoryStore::new();
        store.set("xp", json!(12_000)).unwrap();
        store.set("rank", json!("PLATINUM")).unwrap();
        let profile = Profile::new(store);
        assert_eq!(profile.rank(), Rank::Gold);
        assert_eq!(profile.stats().rank, Rank::Gold);
    }

    #[test]
    fn record_result_counts_wins_and_xp() {
        let mut profile = Profile::new(MemoryStore::new());
        profile.record_result(&result(true, 300)).unwrap();
        profile.record_result(&result(false, 0)).unwrap();
        profile.record_result(&result(true, 250)).unwrap();

        assert_eq!(profile.wins(), 2);
        assert_eq!(profile.xp(), 550);
    }

    #[test]
    fn destroy_all_signs_out() {
        let mut profile = Profile::new(MemoryStore::new());
        profile.set_access_token("tok").unwrap();
        profile.add_xp(5_000).unwrap();
        profile.destroy_all().unwrap();

        assert!(!profile.is_signed_in());
        assert_eq!(profile.xp(), 0);
        assert_eq!(profile.rank(), Rank::Iron);
    }
}
