use crate::prelude_internal::*;

impl<K, V> BetterMap<K, V> {
    /// True if `f` holds for every entry. Stops at the first failure.
    pub fn every<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.iter().all(|(k, v)| f(v, k))
    }

    /// True if `f` holds for at least one entry. Stops at the first match.
    pub fn some<F>(&self, mut f: F) -> bool
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.iter().any(|(k, v)| f(v, k))
    }

    pub fn find<F>(&self, mut f: F) -> Option<&V>
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.iter().find(|&(k, v)| f(v, k)).map(|(_, v)| v)
    }

    pub fn find_key<F>(&self, mut f: F) -> Option<&K>
    where
        F: FnMut(&V, &K) -> bool,
    {
        self.iter().find(|&(k, v)| f(v, k)).map(|(k, _)| k)
    }

    /// Projects each entry, in order, into a plain `Vec`.
    pub fn map<T, F>(&self, mut f: F) -> Vec<T>
    where
        F: FnMut(&V, &K) -> T,
    {
        self.iter().map(|(k, v)| f(v, k)).collect()
    }

    /// Left fold over `(key, value)` pairs, seeded with `initial`.
    pub fn reduce<T, F>(&self, mut f: F, initial: T) -> T
    where
        F: FnMut(T, (&K, &V)) -> T,
    {
        self.iter().fold(initial, |acc, entry| f(acc, entry))
    }
}

impl<K: Clone + Hash + Eq, V: Clone> BetterMap<K, V> {
    pub fn filter<F>(&self, mut f: F) -> BetterMap<K, V>
    where
        F: FnMut(&V, &K) -> bool,
    {
        let mut out = self.derived();
        out.extend(self.cloned_entries().filter(|(k, v)| f(v, k)));
        out
    }

    /// Same keys, values replaced by `f`.
    pub fn transform<T, F>(&self, mut f: F) -> BetterMap<K, T>
    where
        F: FnMut(&V, &K) -> T,
    {
        let mut out = self.derived();
        out.extend(self.iter().map(|(k, v)| (k.clone(), f(v, k))));
        out
    }

    /// Unseeded fold: starts from a copy of the first entry and folds the rest into it.
    ///
    /// Returns `None` for an empty map.
    pub fn reduce_entries<F>(&self, mut f: F) -> Option<(K, V)>
    where
        F: FnMut((K, V), (&K, &V)) -> (K, V),
    {
        let mut iter = self.iter();
        let (k, v) = iter.next()?;
        Some(iter.fold((k.clone(), v.clone()), |acc, entry| f(acc, entry)))
    }

    /// Partitions into `(passed, failed)`, each keeping the original order.
    pub fn split<F>(&self, mut f: F) -> (BetterMap<K, V>, BetterMap<K, V>)
    where
        F: FnMut(&V, &K) -> bool,
    {
        let mut passed = self.derived();
        let mut failed = self.derived();
        for (k, v) in self.cloned_entries() {
            if f(&v, &k) {
                passed.set(k, v);
            } else {
                failed.set(k, v);
            }
        }
        (passed, failed)
    }
}
