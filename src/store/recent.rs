//! Bounded, de-duplicated list of recently searched cities
//!
//! The list is most-recent-first, unique under case-insensitive comparison,
//! capped at five entries, and written back to durable storage on every
//! mutation so the in-memory and persisted lists never drift apart.

use super::KeyValueStore;

/// Maximum number of recent searches kept
const MAX_RECENT_SEARCHES: usize = 5;

/// Fixed storage key for the persisted list
const STORAGE_KEY: &str = "recent_searches";

/// Recently searched cities, backed by a [`KeyValueStore`]
///
/// Storage problems are absorbed here: a missing or malformed persisted list
/// loads as empty, and write failures leave the in-memory list authoritative
/// for the session. Nothing in this type ever errors toward the caller.
#[derive(Debug)]
pub struct RecentSearches<S: KeyValueStore> {
    store: S,
    list: Vec<String>,
}

impl<S: KeyValueStore> RecentSearches<S> {
    /// Loads the persisted list from the given store
    ///
    /// A missing or malformed stored value initializes an empty list.
    pub fn load(store: S) -> Self {
        let list = store
            .get(STORAGE_KEY)
            .and_then(|raw| serde_json::from_str::<Vec<String>>(&raw).ok())
            .unwrap_or_default();
        Self { store, list }
    }

    /// The current list, most recent first
    pub fn list(&self) -> &[String] {
        &self.list
    }

    /// Records a successful search
    ///
    /// Empty or whitespace-only input is a no-op. Otherwise any entry equal
    /// to `city` under case-insensitive comparison is removed, the new value
    /// is prepended with its original casing, the list is truncated to the
    /// five most recent, and the result is persisted before returning.
    pub fn add(&mut self, city: &str) -> &[String] {
        let trimmed = city.trim();
        if trimmed.is_empty() {
            return &self.list;
        }

        self.list
            .retain(|existing| !existing.eq_ignore_ascii_case(trimmed));
        self.list.insert(0, trimmed.to_string());
        self.list.truncate(MAX_RECENT_SEARCHES);
        self.persist();
        &self.list
    }

    /// Removes entries matching `city` under case-insensitive comparison
    pub fn remove(&mut self, city: &str) -> &[String] {
        self.list
            .retain(|existing| !existing.eq_ignore_ascii_case(city));
        self.persist();
        &self.list
    }

    /// Empties the list and erases the persisted entry
    pub fn clear(&mut self) {
        self.list.clear();
        let _ = self.store.remove(STORAGE_KEY);
    }

    /// Writes the current list back to storage
    fn persist(&mut self) {
        if let Ok(json) = serde_json::to_string(&self.list) {
            let _ = self.store.set(STORAGE_KEY, &json);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn empty_store() -> RecentSearches<MemoryStore> {
        RecentSearches::load(MemoryStore::new())
    }

    /// Reads the list back out of the underlying store
    fn persisted(recent: &RecentSearches<MemoryStore>) -> Vec<String> {
        recent
            .store
            .get(STORAGE_KEY)
            .map(|raw| serde_json::from_str(&raw).expect("persisted list should be JSON"))
            .unwrap_or_default()
    }

    #[test]
    fn test_load_from_empty_store_is_empty() {
        let recent = empty_store();
        assert!(recent.list().is_empty());
    }

    #[test]
    fn test_load_malformed_stored_value_resets_to_empty() {
        let mut store = MemoryStore::new();
        store
            .set(STORAGE_KEY, "{ not json [")
            .expect("set should succeed");

        let recent = RecentSearches::load(store);
        assert!(recent.list().is_empty());
    }

    #[test]
    fn test_load_existing_list() {
        let mut store = MemoryStore::new();
        store
            .set(STORAGE_KEY, r#"["Paris","London"]"#)
            .expect("set should succeed");

        let recent = RecentSearches::load(store);
        assert_eq!(recent.list(), ["Paris", "London"]);
    }

    #[test]
    fn test_add_prepends_most_recent() {
        let mut recent = empty_store();
        recent.add("London");
        recent.add("Tokyo");

        assert_eq!(recent.list(), ["Tokyo", "London"]);
    }

    #[test]
    fn test_add_dedupes_case_insensitively_latest_casing_wins() {
        let mut recent = empty_store();
        recent.add("Paris");
        recent.add("paris");

        assert_eq!(recent.list(), ["paris"]);
    }

    #[test]
    fn test_add_moves_repeat_search_to_front() {
        let mut recent = empty_store();
        recent.add("London");
        recent.add("Tokyo");
        recent.add("LONDON");

        assert_eq!(recent.list(), ["LONDON", "Tokyo"]);
    }

    #[test]
    fn test_add_caps_at_five_most_recent() {
        let mut recent = empty_store();
        for city in ["London", "Tokyo", "Paris", "Berlin", "Rome", "Madrid"] {
            recent.add(city);
        }

        assert_eq!(
            recent.list(),
            ["Madrid", "Rome", "Berlin", "Paris", "Tokyo"]
        );
    }

    #[test]
    fn test_add_blank_input_is_a_no_op() {
        let mut recent = empty_store();
        recent.add("");
        recent.add("   ");
        recent.add("\t\n");

        assert!(recent.list().is_empty());
        assert!(recent.store.get(STORAGE_KEY).is_none());
    }

    #[test]
    fn test_add_trims_surrounding_whitespace() {
        let mut recent = empty_store();
        recent.add("  Oslo  ");

        assert_eq!(recent.list(), ["Oslo"]);
    }

    #[test]
    fn test_remove_is_case_insensitive() {
        let mut recent = empty_store();
        recent.add("London");
        recent.add("Tokyo");

        recent.remove("LONDON");

        assert_eq!(recent.list(), ["Tokyo"]);
    }

    #[test]
    fn test_remove_absent_city_leaves_list_unchanged() {
        let mut recent = empty_store();
        recent.add("London");

        recent.remove("Tokyo");

        assert_eq!(recent.list(), ["London"]);
    }

    #[test]
    fn test_clear_empties_list_and_erases_storage() {
        let mut recent = empty_store();
        recent.add("London");
        recent.add("Tokyo");

        recent.clear();

        assert!(recent.list().is_empty());
        assert!(recent.store.get(STORAGE_KEY).is_none());
    }

    #[test]
    fn test_persisted_list_matches_memory_after_every_mutation() {
        let mut recent = empty_store();

        recent.add("London");
        assert_eq!(persisted(&recent), recent.list());

        recent.add("Tokyo");
        assert_eq!(persisted(&recent), recent.list());

        recent.remove("London");
        assert_eq!(persisted(&recent), recent.list());
    }

    #[test]
    fn test_list_survives_reload_from_same_store() {
        let mut recent = empty_store();
        recent.add("London");
        recent.add("Tokyo");

        let store = recent.store.clone();
        let reloaded = RecentSearches::load(store);

        assert_eq!(reloaded.list(), ["Tokyo", "London"]);
    }
}
