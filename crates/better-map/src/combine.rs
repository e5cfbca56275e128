use std::collections::{BTreeMap, HashMap};

use indexmap::IndexMap;

use crate::prelude_internal::*;

impl<K: Hash + Eq, V, S> From<IndexMap<K, V, S>> for BetterMap<K, V> {
    fn from(map: IndexMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Hash + Eq, V, S> From<HashMap<K, V, S>> for BetterMap<K, V> {
    fn from(map: HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Hash + Eq, V> From<BTreeMap<K, V>> for BetterMap<K, V> {
    fn from(map: BTreeMap<K, V>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Hash + Eq, V> From<Vec<(K, V)>> for BetterMap<K, V> {
    fn from(pairs: Vec<(K, V)>) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Hash + Eq, V, const N: usize> From<[(K, V); N]> for BetterMap<K, V> {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K: Hash + Eq, V> BetterMap<K, V> {
    /// Adds every entry whose key is not present yet. Earlier maps win over later ones.
    pub fn combine<M, I>(&mut self, maps: I) -> &mut Self
    where
        I: IntoIterator<Item = M>,
        M: Into<BetterMap<K, V>>,
    {
        let before = self.len();
        for map in maps {
            self.absorb(map.into());
        }
        debug!(name = %self.name, added = self.len() - before, len = self.len(), "combined maps");
        self
    }

    fn absorb(&mut self, other: BetterMap<K, V>) {
        for (k, v) in other {
            self.entries.entry(k).or_insert(v);
        }
    }

    /// Key-based union. The first map seeds the result and keeps its name;
    /// later maps only contribute keys not seen yet.
    pub fn union<M, I>(maps: I) -> BetterMap<K, V>
    where
        I: IntoIterator<Item = M>,
        M: Into<BetterMap<K, V>>,
    {
        let mut maps = maps.into_iter().map(Into::<BetterMap<K, V>>::into);
        let Some(mut result) = maps.next() else {
            return BetterMap::new();
        };
        for map in maps {
            result.absorb(map);
        }
        debug!(name = %result.name, len = result.len(), "built union");
        result
    }

    /// Entries of the first map whose key is present in every other map.
    /// Values always come from the first map.
    pub fn intersect<M, I>(maps: I) -> BetterMap<K, V>
    where
        I: IntoIterator<Item = M>,
        M: Into<BetterMap<K, V>>,
    {
        let mut maps = maps.into_iter().map(Into::<BetterMap<K, V>>::into);
        let Some(first) = maps.next() else {
            return BetterMap::new();
        };
        let others: Vec<BetterMap<K, V>> = maps.collect();
        let mut result = first.derived();
        result.extend(
            first
                .into_iter()
                .filter(|(k, _)| others.iter().all(|other| other.has(k))),
        );
        debug!(name = %result.name, len = result.len(), "built intersection");
        result
    }
}
