use crate::prelude_internal::*;

/// Resolves `pos` against a map of `len` entries.
///
/// Positions past the end wrap by `len - 1`, not `len`: on a map of three entries
/// `at(3)` is index 1 and `at(-2)` lands on 3, which is absent. A single-entry map
/// resolves every position to its only entry.
pub(crate) fn wrap_position(pos: isize, len: usize) -> Option<usize> {
    match len {
        0 => None,
        1 => Some(0),
        _ => {
            let len = len as isize;
            let last = len - 1;
            let mut pos = pos;
            if pos > last {
                pos %= last;
            }
            if pos < 0 {
                pos = len + pos % last;
            }
            (pos < len).then_some(pos as usize)
        }
    }
}

/// Left-rotation offset for `shift`, in `0..=len`.
fn shift_offset(n: isize, len: usize) -> usize {
    if len <= 1 {
        return 0;
    }
    let len = len as isize;
    let last = len - 1;
    let mut n = n;
    if n > last {
        n %= last;
    }
    if n < 0 {
        n = len + n % last;
    }
    n as usize
}

/// Sequence-slice bound: negative counts from the end, then clipped to `0..=len`.
fn slice_bound(i: isize, len: usize) -> usize {
    if i < 0 {
        len.saturating_sub(i.unsigned_abs())
    } else {
        (i as usize).min(len)
    }
}

fn value<'a, K, V>((_, v): (&'a K, &'a V)) -> &'a V {
    v
}

fn key<'a, K, V>((k, _): (&'a K, &'a V)) -> &'a K {
    k
}

impl<K, V> BetterMap<K, V> {
    fn head<'a, T>(&'a self, n: usize, project: fn((&'a K, &'a V)) -> T) -> Option<Vec<T>> {
        if n > self.len() {
            return None;
        }
        Some(self.iter().take(n).map(project).collect())
    }

    fn tail<'a, T>(&'a self, n: usize, project: fn((&'a K, &'a V)) -> T) -> Option<Vec<T>> {
        if n > self.len() {
            return None;
        }
        let mut all: Vec<T> = self.iter().map(project).collect();
        Some(all.split_off(all.len() - n))
    }

    /// Value at `pos`, negative positions counting from the end.
    pub fn at(&self, pos: isize) -> Option<&V> {
        let index = wrap_position(pos, self.len())?;
        self.entries.get_index(index).map(value)
    }

    /// Key at `pos`, with the same wrapping as [`BetterMap::at`].
    pub fn key_at(&self, pos: isize) -> Option<&K> {
        let index = wrap_position(pos, self.len())?;
        self.entries.get_index(index).map(key)
    }

    pub fn first(&self) -> Option<&V> {
        self.entries.first().map(value)
    }

    pub fn first_key(&self) -> Option<&K> {
        self.entries.first().map(key)
    }

    /// The first `n` values, or `None` if the map holds fewer than `n`.
    /// A negative `n` takes from the end instead.
    pub fn first_n(&self, n: isize) -> Option<Vec<&V>> {
        if n < 0 {
            return self.tail(n.unsigned_abs(), value);
        }
        self.head(n as usize, value)
    }

    pub fn first_keys(&self, n: isize) -> Option<Vec<&K>> {
        if n < 0 {
            return self.tail(n.unsigned_abs(), key);
        }
        self.head(n as usize, key)
    }

    pub fn last(&self) -> Option<&V> {
        self.entries.last().map(value)
    }

    pub fn last_key(&self) -> Option<&K> {
        self.entries.last().map(key)
    }

    /// The last `n` values in insertion order, or `None` if the map holds fewer than `n`.
    /// A negative `n` takes from the front instead.
    ///
    /// Unlike slicing from the end, asking for more than `len()` does not clamp to the
    /// whole map; it mirrors [`BetterMap::first_n`].
    pub fn last_n(&self, n: isize) -> Option<Vec<&V>> {
        if n < 0 {
            return self.head(n.unsigned_abs(), value);
        }
        self.tail(n as usize, value)
    }

    pub fn last_keys(&self, n: isize) -> Option<Vec<&K>> {
        if n < 0 {
            return self.head(n.unsigned_abs(), key);
        }
        self.tail(n as usize, key)
    }
}

impl<K: Clone + Hash + Eq, V: Clone> BetterMap<K, V> {
    /// Entries in the half-open range `[start, end)`; `end` defaults to the length.
    ///
    /// The result is a fresh map with the default name.
    pub fn slice(&self, start: isize, end: Option<isize>) -> BetterMap<K, V> {
        let len = self.len();
        let start = slice_bound(start, len);
        let end = end.map_or(len, |end| slice_bound(end, len));
        self.cloned_entries()
            .skip(start)
            .take(end.saturating_sub(start))
            .collect()
    }

    /// Rotates entries `n` places to the left, wrapping the front onto the back.
    /// Negative `n` rotates to the right.
    pub fn shift(&self, n: isize) -> BetterMap<K, V> {
        let mut rotated: Vec<(K, V)> = self.cloned_entries().collect();
        let offset = shift_offset(n, rotated.len());
        rotated.rotate_left(offset);
        let mut out = self.derived();
        out.extend(rotated);
        out
    }
}
