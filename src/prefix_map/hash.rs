use super::PrefixMap;
use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::collections::HashMap;
use std::hash::{BuildHasher, Hash};

/// A prefix map that buckets keys by length, with a hash map per bucket
///
/// This is the default backing of the symbol table when the `qp-trie` feature is disabled.
/// Finding the longest prefix probes at most one bucket per key length, from longest to shortest,
/// so a lookup costs `O(longest_key)` hashes.
///
/// # Example
/// ```
/// use asciimath_mathml::prefix_map::{HashPrefixMap, PrefixMap};
/// use asciimath_mathml::{Symbol, ASCIIMATH_SYMBOLS};
///
/// let symbols = HashPrefixMap::from_iter(ASCIIMATH_SYMBOLS);
/// let (len, entry) = symbols.get_longest_prefix("-><-").unwrap();
/// assert_eq!(len, 2);
/// assert_eq!(entry.symbol, Some(Symbol::To));
/// ```
#[derive(Debug, Clone)]
pub struct HashPrefixMap<K, V, S = RandomState> {
    buckets: Box<[HashMap<K, V, S>]>,
}

impl<K, V, S> HashPrefixMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher + Default,
{
    /// Create from an iterator of entries with a custom hasher
    ///
    /// Later entries replace earlier entries with the same key.
    pub fn from_iter_hasher<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = (K, V)>,
    {
        let mut buckets: Vec<HashMap<K, V, S>> = Vec::new();
        for (key, val) in iter {
            let len = key.borrow().len();
            if buckets.len() <= len {
                buckets.resize_with(len + 1, HashMap::default);
            }
            buckets[len].insert(key, val);
        }
        HashPrefixMap {
            buckets: buckets.into(),
        }
    }

    /// The length of the longest key
    pub fn max_key_len(&self) -> usize {
        self.buckets.len().saturating_sub(1)
    }
}

impl<K, V> FromIterator<(K, V)> for HashPrefixMap<K, V>
where
    K: Borrow<str> + Hash + Eq,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_iter_hasher(iter)
    }
}

impl<K, V, S> PrefixMap<V> for HashPrefixMap<K, V, S>
where
    K: Borrow<str> + Hash + Eq,
    S: BuildHasher,
{
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)> {
        let inp = inp.as_ref();
        let longest = inp.len().min(self.buckets.len().saturating_sub(1));
        (0..=longest)
            .rev()
            .filter(|&len| inp.is_char_boundary(len))
            .find_map(|len| {
                self.buckets
                    .get(len)
                    .and_then(|bucket| bucket.get(&inp[..len]))
                    .map(|val| (len, val))
            })
    }
}
