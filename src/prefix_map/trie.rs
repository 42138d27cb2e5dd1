use super::PrefixMap;
use qp_trie::Trie;
use std::borrow::Borrow;

/// Lets string keys be stored in a byte trie
#[derive(Debug, PartialEq, Eq, Clone)]
struct ByteKey<K>(K);

impl<K> Borrow<[u8]> for ByteKey<K>
where
    K: Borrow<str>,
{
    fn borrow(&self) -> &[u8] {
        self.0.borrow().as_bytes()
    }
}

/// A prefix map backed by a qp-trie
///
/// This is the default backing of the symbol table and requires the `qp-trie` feature (enabled by
/// default). A lookup walks the trie one byte at a time and stops as soon as no key continues the
/// input, so it costs `O(longest_match)`.
///
/// # Example
/// ```
/// use asciimath_mathml::prefix_map::{PrefixMap, QpTriePrefixMap};
/// use asciimath_mathml::{Symbol, TokenClass, ASCIIMATH_SYMBOLS};
///
/// let symbols = QpTriePrefixMap::from_iter(ASCIIMATH_SYMBOLS);
/// let (len, entry) = symbols.get_longest_prefix("sqrtx").unwrap();
/// assert_eq!(len, 4);
/// assert_eq!(entry.class, TokenClass::Unary);
/// assert_eq!(entry.symbol, Some(Symbol::Sqrt));
/// ```
#[derive(Debug, Clone)]
pub struct QpTriePrefixMap<K: Clone, V>(Trie<ByteKey<K>, V>);

impl<K, V> FromIterator<(K, V)> for QpTriePrefixMap<K, V>
where
    K: Borrow<str> + Clone,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        QpTriePrefixMap(
            iter.into_iter()
                .map(|(key, val)| (ByteKey(key), val))
                .collect(),
        )
    }
}

impl<K, V> PrefixMap<V> for QpTriePrefixMap<K, V>
where
    K: Borrow<str> + Clone,
{
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)> {
        let bytes = inp.as_ref().as_bytes();
        let mut found = self.0.get(&[][..]).map(|val| (0, val));
        let mut subtrie = self.0.subtrie(&[][..]);
        for len in 1..=bytes.len() {
            let prefix = &bytes[..len];
            subtrie = subtrie.subtrie(prefix);
            if subtrie.is_empty() {
                break;
            }
            if let Some(val) = subtrie.get(prefix) {
                found = Some((len, val));
            }
        }
        found
    }
}
