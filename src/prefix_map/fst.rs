use super::PrefixMap;
use fst::{Automaton, IntoStreamer, Map, MapBuilder, Streamer};
use std::borrow::Borrow;
use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::hash::Hash;

/// Matches every key that is a prefix of the wrapped input
#[derive(Debug, Clone)]
struct PrefixOf<'a>(&'a [u8]);

#[derive(Debug, Clone, Copy)]
enum PrefixState {
    Matched(usize),
    Diverged,
}

impl<'a> Automaton for PrefixOf<'a> {
    type State = PrefixState;

    fn start(&self) -> Self::State {
        PrefixState::Matched(0)
    }

    fn is_match(&self, state: &Self::State) -> bool {
        matches!(state, PrefixState::Matched(_))
    }

    fn can_match(&self, state: &Self::State) -> bool {
        self.is_match(state)
    }

    fn accept(&self, state: &Self::State, byte: u8) -> Self::State {
        match *state {
            PrefixState::Matched(ind) if self.0.get(ind) == Some(&byte) => {
                PrefixState::Matched(ind + 1)
            }
            _ => PrefixState::Diverged,
        }
    }
}

/// A prefix map backed by a finite state transducer
///
/// Requires the `fst` feature. Keys are stored very compactly, and distinct values are stored
/// once, so symbol entries shared between aliases aren't repeated. Lookups are markedly slower
/// than the other backends.
///
/// # Example
/// ```
/// use asciimath_mathml::prefix_map::{FstPrefixMap, PrefixMap};
/// use asciimath_mathml::{Symbol, ASCIIMATH_SYMBOLS};
///
/// let symbols = FstPrefixMap::from_iter(ASCIIMATH_SYMBOLS);
/// let (len, entry) = symbols.get_longest_prefix("xx y").unwrap();
/// assert_eq!(len, 2);
/// assert_eq!(entry.symbol, Some(Symbol::Times));
/// ```
#[derive(Debug, Clone)]
pub struct FstPrefixMap<V> {
    map: Map<Vec<u8>>,
    values: Box<[V]>,
}

impl<V> FstPrefixMap<V>
where
    V: Hash + Eq,
{
    /// Create from a vector of entries
    ///
    /// Later entries replace earlier entries with the same key.
    pub fn from_vec<K, B>(inp: B) -> Self
    where
        K: Borrow<str> + Eq,
        B: Into<Vec<(K, V)>>,
    {
        let mut ordered = inp.into();
        ordered.sort_by(|(left, _), (right, _)| {
            left.borrow().as_bytes().cmp(right.borrow().as_bytes())
        });
        super::dedup_keep_last(&mut ordered);

        let mut builder = MapBuilder::memory();
        let mut indices: HashMap<V, usize> = HashMap::new();
        for (key, val) in ordered {
            let next = indices.len();
            let index = match indices.entry(val) {
                Entry::Occupied(ent) => *ent.get(),
                Entry::Vacant(ent) => *ent.insert(next),
            };
            builder
                .insert(key.borrow().as_bytes(), index as u64)
                .expect("keys are sorted and unique");
        }

        let mut values: Vec<_> = indices.into_iter().collect();
        values.sort_unstable_by_key(|&(_, index)| index);
        FstPrefixMap {
            map: builder.into_map(),
            values: values.into_iter().map(|(val, _)| val).collect(),
        }
    }
}

impl<K, V> FromIterator<(K, V)> for FstPrefixMap<V>
where
    K: Borrow<str> + Eq,
    V: Hash + Eq,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        Self::from_vec(iter.into_iter().collect::<Vec<_>>())
    }
}

impl<V> PrefixMap<V> for FstPrefixMap<V> {
    fn get_longest_prefix<P>(&self, inp: P) -> Option<(usize, &V)>
    where
        P: AsRef<str>,
    {
        let mut stream = self
            .map
            .search(PrefixOf(inp.as_ref().as_bytes()))
            .into_stream();
        // the stream doesn't reliably yield the empty key
        let mut longest = self.map.get(b"").map(|index| (0, index));
        // keys stream in lexicographic order, so every later prefix is longer
        while let Some((key, index)) = stream.next() {
            if !key.is_empty() {
                longest = Some((key.len(), index));
            }
        }
        longest.map(|(len, index)| (len, &self.values[index as usize]))
    }
}
