//! Prefix maps are string keyed maps that can find the value of the longest key prefixing an input
//!
//! The tokenizer uses them to find the longest symbol lexeme at the front of the remaining input.
//! Every token that isn't a number or text passes through one of these lookups, so the choice of
//! backend matters for overall conversion time.
//!
//! On asciimath-like random input the `qp-trie` backed map is the fastest, and it's the default
//! backing of the standard symbol table. An `fnv` backed [HashPrefixMap] is a close second and
//! becomes the natural choice when `qp-trie` is disabled.
//!
//! # Example
//!
//! ```
//! use asciimath_mathml::prefix_map::LinearPrefixMap;
//! use asciimath_mathml::{parse_tokens, Tokenizer, ASCIIMATH_SYMBOLS};
//!
//! let symbols = LinearPrefixMap::from_vec(ASCIIMATH_SYMBOLS);
//! let tokens = Tokenizer::with_symbols("sum_i x_i", &symbols);
//! assert!(parse_tokens(tokens).is_some());
//! ```

#[cfg(feature = "fst")]
mod fst;
mod hash;
mod linear;
#[cfg(feature = "qp-trie")]
mod trie;

#[cfg(feature = "fst")]
pub use self::fst::FstPrefixMap;
#[cfg(feature = "fnv")]
use ::fnv::FnvBuildHasher;
pub use hash::HashPrefixMap;
pub use linear::LinearPrefixMap;
#[cfg(feature = "qp-trie")]
pub use trie::QpTriePrefixMap;

/// A hash prefix map using the fnv hasher
///
/// Requires the `fnv` feature.
///
/// # Example
/// ```
/// use asciimath_mathml::prefix_map::{FnvHashPrefixMap, PrefixMap};
/// use asciimath_mathml::{Symbol, ASCIIMATH_SYMBOLS};
///
/// let symbols = FnvHashPrefixMap::from_iter_hasher(ASCIIMATH_SYMBOLS);
/// let (len, entry) = symbols.get_longest_prefix("alphabet").unwrap();
/// assert_eq!(len, 5);
/// assert_eq!(entry.symbol, Some(Symbol::Alpha));
/// ```
#[cfg(feature = "fnv")]
pub type FnvHashPrefixMap<K, V> = HashPrefixMap<K, V, FnvBuildHasher>;

/// A map that supports lookups on the prefix of an input
pub trait PrefixMap<V> {
    /// Get the length and value of the longest key that prefixes `inp`
    ///
    /// # Example
    /// ```
    /// use asciimath_mathml::prefix_map::{HashPrefixMap, PrefixMap};
    ///
    /// let map = HashPrefixMap::from_iter([("o", 1), ("o+", 2), ("oint", 3)]);
    /// assert_eq!(map.get_longest_prefix("o+x"), Some((2, &2)));
    /// assert_eq!(map.get_longest_prefix("oin"), Some((1, &1)));
    /// ```
    fn get_longest_prefix<P: AsRef<str>>(&self, inp: P) -> Option<(usize, &V)>;

    /// Get the value whose key is exactly `inp`
    ///
    /// # Example
    /// ```
    /// use asciimath_mathml::prefix_map::{LinearPrefixMap, PrefixMap};
    ///
    /// let map = LinearPrefixMap::from_vec([("o", 1), ("o+", 2)]);
    /// assert_eq!(map.get("o+"), Some(&2));
    /// assert_eq!(map.get("o+x"), None);
    /// ```
    fn get<P: AsRef<str>>(&self, inp: P) -> Option<&V> {
        let inp = inp.as_ref();
        match self.get_longest_prefix(inp) {
            Some((len, val)) if len == inp.len() => Some(val),
            _ => None,
        }
    }
}

/// Remove entries with equal keys from a key-sorted vec, keeping the last of each run
///
/// Later entries override earlier ones, the same as inserting into a hash map.
fn dedup_keep_last<K, V>(entries: &mut Vec<(K, V)>)
where
    K: Eq,
{
    entries.dedup_by(|later, kept| {
        let dup = later.0 == kept.0;
        if dup {
            std::mem::swap(later, kept);
        }
        dup
    });
}
