use core::fmt;

use ahash::RandomState;
use indexmap::IndexMap;
use indexmap::map::{IntoIter, Iter, IterMut, Keys, Values, ValuesMut};

use crate::prelude_internal::*;

/// An insertion-ordered map with a display name.
///
/// Keys keep the position of their first insertion: [`BetterMap::set`] on an existing key
/// replaces the value in place, a new key is appended.
#[derive(Clone)]
pub struct BetterMap<K, V> {
    pub(crate) name: String,
    pub(crate) entries: IndexMap<K, V, RandomState>,
}

impl<K, V> Default for BetterMap<K, V> {
    fn default() -> Self {
        Self::with_config(Config::default())
    }
}

impl<K, V> BetterMap<K, V> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::with_config(Config::named(name))
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            name: config.name,
            entries: IndexMap::with_capacity_and_hasher(config.capacity, RandomState::new()),
        }
    }

    /// Config that reproduces this map's name, sized for its current length.
    pub fn config(&self) -> Config {
        Config {
            name: self.name.clone(),
            capacity: self.len(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn iter(&self) -> Iter<'_, K, V> {
        self.entries.iter()
    }

    pub fn iter_mut(&mut self) -> IterMut<'_, K, V> {
        self.entries.iter_mut()
    }

    pub fn keys(&self) -> Keys<'_, K, V> {
        self.entries.keys()
    }

    pub fn values(&self) -> Values<'_, K, V> {
        self.entries.values()
    }

    pub fn values_mut(&mut self) -> ValuesMut<'_, K, V> {
        self.entries.values_mut()
    }

    /// Values in insertion order.
    pub fn array(&self) -> Vec<&V> {
        self.values().collect()
    }

    /// Keys in insertion order.
    pub fn array_keys(&self) -> Vec<&K> {
        self.keys().collect()
    }

    pub fn for_each<F>(&self, mut f: F)
    where
        F: FnMut(&V, &K),
    {
        for (k, v) in self.iter() {
            f(v, k);
        }
    }

    pub fn as_index_map(&self) -> &IndexMap<K, V, RandomState> {
        &self.entries
    }

    pub fn into_index_map(self) -> IndexMap<K, V, RandomState> {
        self.entries
    }

    /// Empty map carrying this map's name, for derived results.
    pub(crate) fn derived<T>(&self) -> BetterMap<K, T> {
        BetterMap::with_config(self.config())
    }
}

impl<K: Hash + Eq, V> BetterMap<K, V> {
    /// Insert or update. An existing key keeps its position.
    pub fn set(&mut self, key: K, value: V) -> &mut Self {
        self.entries.insert(key, value);
        self
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &K) -> Option<&mut V> {
        self.entries.get_mut(key)
    }

    pub fn has(&self, key: &K) -> bool {
        self.entries.contains_key(key)
    }

    /// O(n) removal, preserves the order of the remaining entries.
    pub fn delete(&mut self, key: &K) -> bool {
        self.entries.shift_remove(key).is_some()
    }
}

impl<K: Clone, V: Clone> BetterMap<K, V> {
    pub(crate) fn cloned_entries(&self) -> impl Iterator<Item = (K, V)> + '_ {
        self.iter().map(|(k, v)| (k.clone(), v.clone()))
    }
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for BetterMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BetterMap")
            .field("name", &self.name)
            .field("entries", &self.entries)
            .finish()
    }
}

impl<K, V> fmt::Display for BetterMap<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[BetterMap[{}] of <{}>]", self.len(), self.name)
    }
}

// Order-sensitive, unlike `IndexMap`'s own equality. Names are labels and not compared.
impl<K: PartialEq, V: PartialEq> PartialEq for BetterMap<K, V> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().eq(other.iter())
    }
}

impl<K: Eq, V: Eq> Eq for BetterMap<K, V> {}

impl<K: Hash + Eq, V> FromIterator<(K, V)> for BetterMap<K, V> {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut map = Self::new();
        map.extend(iter);
        map
    }
}

impl<K: Hash + Eq, V> Extend<(K, V)> for BetterMap<K, V> {
    fn extend<T: IntoIterator<Item = (K, V)>>(&mut self, iter: T) {
        self.entries.extend(iter);
    }
}

impl<K, V> IntoIterator for BetterMap<K, V> {
    type Item = (K, V);
    type IntoIter = IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a BetterMap<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl<'a, K, V> IntoIterator for &'a mut BetterMap<K, V> {
    type Item = (&'a K, &'a mut V);
    type IntoIter = IterMut<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter_mut()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn people() -> BetterMap<&'static str, i32> {
        let mut map = BetterMap::named("People");
        map.set("Doraemon", 10).set("Dora", 28).set("Pikachu", 7);
        map
    }

    #[test]
    fn test_default_name() {
        let map: BetterMap<String, i32> = BetterMap::new();
        assert_eq!(map.name(), "unknown items");
        assert!(map.is_empty());
    }

    #[test]
    fn test_set_appends_new_keys_in_order() {
        let map = people();
        assert_eq!(map.array_keys(), vec![&"Doraemon", &"Dora", &"Pikachu"]);
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_set_existing_key_keeps_position() {
        let mut map = people();
        map.set("Doraemon", 99);
        assert_eq!(map.array_keys(), vec![&"Doraemon", &"Dora", &"Pikachu"]);
        assert_eq!(map.get(&"Doraemon"), Some(&99));
        assert_eq!(map.len(), 3);
    }

    #[test]
    fn test_delete_preserves_order() {
        let mut map = people();
        assert!(map.delete(&"Doraemon"));
        assert!(!map.delete(&"Doraemon"));
        assert!(!map.has(&"Doraemon"));
        assert_eq!(map.array_keys(), vec![&"Dora", &"Pikachu"]);
        assert_eq!(map.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut map = people();
        map.clear();
        assert_eq!(map.len(), 0);
        assert_eq!(map.get(&"Dora"), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(people().to_string(), "[BetterMap[3] of <People>]");
        let empty: BetterMap<u8, u8> = BetterMap::new();
        assert_eq!(format!("{}", empty), "[BetterMap[0] of <unknown items>]");
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let forward: BetterMap<_, _> = [("a", 1), ("b", 2)].into_iter().collect();
        let backward: BetterMap<_, _> = [("b", 2), ("a", 1)].into_iter().collect();
        assert_ne!(forward, backward);

        let mut renamed = forward.clone();
        renamed.set_name("other");
        assert_eq!(forward, renamed);
    }

    #[test]
    fn test_for_each_visits_value_then_key() {
        let mut seen = Vec::new();
        people().for_each(|v, k| seen.push(format!("{k}{v}")));
        assert_eq!(seen, vec!["Doraemon10", "Dora28", "Pikachu7"]);
    }

    #[test]
    fn test_values_mut() {
        let mut map = people();
        for v in map.values_mut() {
            *v += 1;
        }
        assert_eq!(map.array(), vec![&11, &29, &8]);
    }

    #[test]
    fn test_get_mut_updates_in_place() {
        let mut map = people();
        if let Some(age) = map.get_mut(&"Dora") {
            *age = 29;
        }
        assert_eq!(map.get_mut(&"Nobita"), None);
        assert_eq!(map.array(), vec![&10, &29, &7]);
    }

    #[test]
    fn test_iter_mut_keeps_order() {
        let mut map = people();
        for (k, v) in map.iter_mut() {
            if k.starts_with("Dora") {
                *v = 0;
            }
        }
        for (_, v) in &mut map {
            *v += 1;
        }
        assert_eq!(map.array(), vec![&1, &1, &8]);
    }

    #[test]
    fn test_into_index_map_keeps_order() {
        let inner = people().into_index_map();
        let keys: Vec<&str> = inner.keys().copied().collect();
        assert_eq!(keys, vec!["Doraemon", "Dora", "Pikachu"]);
        assert_eq!(inner.get("Pikachu"), Some(&7));
    }

    #[test]
    fn test_with_config() {
        let map: BetterMap<u32, u32> = BetterMap::with_config(Config {
            name: "Sized".to_string(),
            capacity: 64,
        });
        assert_eq!(map.name(), "Sized");
        assert!(map.as_index_map().capacity() >= 64);
    }
}
