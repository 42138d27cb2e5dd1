#![feature(test)]

mod examples;

extern crate test;

#[cfg(feature = "fnv")]
use asciimath_mathml::prefix_map::FnvHashPrefixMap;
#[cfg(feature = "fst")]
use asciimath_mathml::prefix_map::FstPrefixMap;
#[cfg(feature = "qp-trie")]
use asciimath_mathml::prefix_map::QpTriePrefixMap;
use asciimath_mathml::prefix_map::{HashPrefixMap, LinearPrefixMap};
use asciimath_mathml::{Tokenizer, ASCIIMATH_SYMBOLS};
use examples::{EXAMPLES, RANDOM_EXAMPLES};
use std::hint::black_box;
use test::Bencher;

macro_rules! make_bench {
    ($name:ident, $struct:ident, $factory:ident) => {
        mod $name {
            use super::*;

            #[bench]
            fn example_tokens(bench: &mut Bencher) {
                let symbols = $struct::$factory(ASCIIMATH_SYMBOLS);
                bench.iter(|| {
                    for example in EXAMPLES {
                        for token in Tokenizer::with_symbols(black_box(example), &symbols) {
                            black_box(token);
                        }
                    }
                });
            }

            #[bench]
            fn random_tokens(bench: &mut Bencher) {
                let symbols = $struct::$factory(ASCIIMATH_SYMBOLS);
                let examples = &*RANDOM_EXAMPLES; // generate outside of the bench
                bench.iter(|| {
                    for example in examples {
                        for token in Tokenizer::with_symbols(black_box(example), &symbols) {
                            black_box(token);
                        }
                    }
                });
            }
        }
    };
}

make_bench! {linear, LinearPrefixMap, from_vec}
make_bench! {hash, HashPrefixMap, from_iter}
#[cfg(feature = "fst")]
make_bench! {fst, FstPrefixMap, from_vec}
#[cfg(feature = "fnv")]
make_bench! {fnv, FnvHashPrefixMap, from_iter_hasher}
#[cfg(feature = "qp-trie")]
make_bench! {qptrie, QpTriePrefixMap, from_iter}
