use super::PrefixMap;
use std::borrow::Borrow;

/// A prefix map that scans its keys from longest to shortest
///
/// Lookups cost `O(num_keys)`, but construction is cheap and the map needs nothing beyond string
/// equality. Good for small custom symbol tables, and as the reference the other backends are
/// tested against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinearPrefixMap<K, V> {
    entries: Box<[(K, V)]>,
}

impl<K, V> LinearPrefixMap<K, V>
where
    K: Borrow<str> + Eq,
{
    /// Create from a vector of entries
    ///
    /// Later entries replace earlier entries with the same key.
    pub fn from_vec<B>(inp: B) -> Self
    where
        B: Into<Vec<(K, V)>>,
    {
        let mut entries = inp.into();
        // stable, so duplicate keys keep their insertion order
        entries.sort_by(|(left, _), (right, _)| {
            let left: &str = left.borrow();
            let right: &str = right.borrow();
            right.len().cmp(&left.len()).then_with(|| left.cmp(right))
        });
        super::dedup_keep_last(&mut entries);
        LinearPrefixMap {
            entries: entries.into(),
        }
    }

    /// Iterate over the keys, longest first
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| key.borrow())
    }
}

impl<K, V> FromIterator<(K, V)> for LinearPrefixMap<K, V>
where
    K: Borrow<str> + Eq,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_vec(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<K: Borrow<str>, V> PrefixMap<V> for LinearPrefixMap<K, V> {
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)> {
        let inp = inp.as_ref();
        self.entries.iter().find_map(|(key, val)| {
            let key: &str = key.borrow();
            inp.starts_with(key).then_some((key.len(), val))
        })
    }
}
