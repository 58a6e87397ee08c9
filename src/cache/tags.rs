//! Tag Index Module
//!
//! Reverse index from tag to member keys. It never looks at entry liveness;
//! the cache decides when a tag is dead.

use std::collections::{HashMap, HashSet};

// == Tag Index ==
/// Maps each tag to the set of keys stored under it.
#[derive(Debug, Default)]
pub struct TagIndex {
    tags: HashMap<String, HashSet<String>>,
}

impl TagIndex {
    /// Creates an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `key` to `tag`, creating the tag on first use.
    pub fn add(&mut self, tag: &str, key: &str) {
        self.tags
            .entry(tag.to_string())
            .or_default()
            .insert(key.to_string());
    }

    /// Returns the member keys of `tag`, empty if the tag is unknown.
    pub fn keys(&self, tag: &str) -> Vec<String> {
        self.tags
            .get(tag)
            .map(|keys| keys.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// Removes `tag` and hands back its members.
    pub fn remove(&mut self, tag: &str) -> HashSet<String> {
        self.tags.remove(tag).unwrap_or_default()
    }

    /// Collects the tags for which `is_live` holds for no member.
    pub fn dead_tags<F>(&self, mut is_live: F) -> Vec<String>
    where
        F: FnMut(&str) -> bool,
    {
        self.tags
            .iter()
            .filter(|(_, keys)| !keys.iter().any(|key| is_live(key)))
            .map(|(tag, _)| tag.clone())
            .collect()
    }

    /// Returns the number of tags, empty ones included.
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns true if no tag is stored.
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_add_deduplicates() {
        let mut index = TagIndex::new();
        index.add("tag", "k1");
        index.add("tag", "k1");
        index.add("tag", "k2");

        let mut keys = index.keys("tag");
        keys.sort();
        assert_eq!(keys, vec!["k1", "k2"]);
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn test_keys_unknown_tag() {
        let index = TagIndex::new();
        assert!(index.keys("missing").is_empty());
    }

    #[test]
    fn test_remove_returns_members() {
        let mut index = TagIndex::new();
        index.add("tag", "k1");

        let removed = index.remove("tag");
        assert!(removed.contains("k1"));
        assert!(index.is_empty());
        assert!(index.remove("tag").is_empty());
    }

    #[test]
    fn test_dead_tags_needs_every_member_dead() {
        let mut index = TagIndex::new();
        index.add("mixed", "live");
        index.add("mixed", "dead");
        index.add("gone", "dead");

        let dead = index.dead_tags(|key| key == "live");
        assert_eq!(dead, vec!["gone".to_string()]);
    }
}
