use core::cmp::Ordering;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::prelude_internal::*;

impl<K, V> BetterMap<K, V> {
    fn random_index<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<usize> {
        if self.is_empty() {
            return None;
        }
        Some(rng.gen_range(0..self.len()))
    }

    /// A uniformly chosen value, or `None` when empty.
    pub fn random(&self) -> Option<&V> {
        self.random_with(&mut rand::thread_rng())
    }

    pub fn random_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&V> {
        let index = self.random_index(rng)?;
        self.entries.get_index(index).map(|(_, v)| v)
    }

    pub fn random_key(&self) -> Option<&K> {
        self.random_key_with(&mut rand::thread_rng())
    }

    pub fn random_key_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&K> {
        let index = self.random_index(rng)?;
        self.entries.get_index(index).map(|(k, _)| k)
    }

    /// `count` independent draws. The same value can come up more than once.
    pub fn random_n(&self, count: usize) -> Vec<&V> {
        self.random_n_with(count, &mut rand::thread_rng())
    }

    pub fn random_n_with<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&V> {
        trace!(name = %self.name, count, "sampling values with replacement");
        (0..count).filter_map(|_| self.random_with(&mut *rng)).collect()
    }

    /// `count` independent key draws, with replacement.
    pub fn random_keys(&self, count: usize) -> Vec<&K> {
        self.random_keys_with(count, &mut rand::thread_rng())
    }

    pub fn random_keys_with<R: Rng + ?Sized>(&self, count: usize, rng: &mut R) -> Vec<&K> {
        trace!(name = %self.name, count, "sampling keys with replacement");
        (0..count).filter_map(|_| self.random_key_with(&mut *rng)).collect()
    }
}

impl<K: Clone + Hash + Eq, V: Clone> BetterMap<K, V> {
    /// Copy in the current order.
    pub fn sort(&self) -> BetterMap<K, V> {
        self.sort_by(|_, _, _, _| Ordering::Equal)
    }

    /// Stable sort with a comparator over `(v1, v2, k1, k2)`.
    pub fn sort_by<F>(&self, mut compare: F) -> BetterMap<K, V>
    where
        F: FnMut(&V, &V, &K, &K) -> Ordering,
    {
        let mut items: Vec<(K, V)> = self.cloned_entries().collect();
        items.sort_by(|(k1, v1), (k2, v2)| compare(v1, v2, k1, k2));
        let mut out = self.derived();
        out.extend(items);
        out
    }

    /// Copy in a uniformly random order.
    pub fn shuffle(&self) -> BetterMap<K, V> {
        self.shuffle_with(&mut rand::thread_rng())
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&self, rng: &mut R) -> BetterMap<K, V> {
        trace!(name = %self.name, len = self.len(), "shuffling");
        let mut items: Vec<(K, V)> = self.cloned_entries().collect();
        items.shuffle(rng);
        let mut out = self.derived();
        out.extend(items);
        out
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn people() -> BetterMap<&'static str, i32> {
        let mut map = BetterMap::named("People");
        map.set("Doraemon", 10).set("Dora", 28).set("Pikachu", 7);
        map
    }

    #[test]
    fn test_random_on_empty() {
        let empty: BetterMap<&str, i32> = BetterMap::new();
        assert_eq!(empty.random(), None);
        assert_eq!(empty.random_key(), None);
        assert!(empty.random_n(5).is_empty());
        assert!(empty.random_keys(5).is_empty());
    }

    #[test]
    fn test_random_returns_members() {
        let map = people();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            let value = map.random_with(&mut rng).unwrap();
            assert!(map.some(|v, _| v == value));
            let key = map.random_key_with(&mut rng).unwrap();
            assert!(map.has(key));
        }
    }

    #[test]
    fn test_random_n_draws_with_replacement() {
        let map = people();
        let mut rng = StdRng::seed_from_u64(42);
        let drawn = map.random_n_with(30, &mut rng);
        assert_eq!(drawn.len(), 30);

        let keys = map.random_keys_with(30, &mut rng);
        assert_eq!(keys.len(), 30);
        assert!(keys.iter().all(|k| map.has(k)));
    }

    #[test]
    fn test_single_entry_always_drawn() {
        let mut map = BetterMap::new();
        map.set("only", 1);
        assert_eq!(map.random(), Some(&1));
        assert_eq!(map.random_keys(3), vec![&"only"; 3]);
    }

    #[test]
    fn test_sort_by_value_descending() {
        let mut map = BetterMap::new();
        map.set("x", 1).set("y", 2).set("z", 3);
        let sorted = map.sort_by(|v1, v2, _, _| v2.cmp(v1));
        assert_eq!(sorted.array_keys(), vec![&"z", &"y", &"x"]);
        assert_eq!(map.array_keys(), vec![&"x", &"y", &"z"]);
    }

    #[test]
    fn test_sort_by_key_and_name() {
        let map = people();
        let sorted = map.sort_by(|_, _, k1, k2| k1.cmp(k2));
        assert_eq!(sorted.array_keys(), vec![&"Dora", &"Doraemon", &"Pikachu"]);
        assert_eq!(sorted.name(), "People");
    }

    #[test]
    fn test_sort_is_stable() {
        let mut map = BetterMap::new();
        map.set("a", 1).set("b", 0).set("c", 1).set("d", 0);
        let sorted = map.sort_by(|v1, v2, _, _| v1.cmp(v2));
        assert_eq!(sorted.array_keys(), vec![&"b", &"d", &"a", &"c"]);
    }

    #[test]
    fn test_default_sort_keeps_order() {
        let map = people();
        assert_eq!(map.sort(), map);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let map = people();
        let mut rng = StdRng::seed_from_u64(3);
        let shuffled = map.shuffle_with(&mut rng);
        assert_eq!(shuffled.len(), map.len());
        assert!(map.every(|v, k| shuffled.get(k) == Some(v)));
        assert_eq!(shuffled.name(), "People");
    }
}
