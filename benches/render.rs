#![feature(test)]

mod examples;

extern crate test;

use asciimath_mathml::{parse, render, to_mathml, RenderOptions, RowMode};
use examples::{EXAMPLES, RANDOM_EXAMPLES};
use std::hint::black_box;
use test::Bencher;

#[bench]
fn example_parse(bench: &mut Bencher) {
    bench.iter(|| {
        for example in EXAMPLES {
            black_box(parse(black_box(example)));
        }
    });
}

#[bench]
fn random_parse(bench: &mut Bencher) {
    let examples = &*RANDOM_EXAMPLES;
    bench.iter(|| {
        for example in examples {
            black_box(parse(black_box(example)));
        }
    });
}

#[bench]
fn example_render(bench: &mut Bencher) {
    let parsed: Vec<_> = EXAMPLES.iter().map(|example| parse(example)).collect();
    let options = RenderOptions::default();
    bench.iter(|| {
        for node in &parsed {
            black_box(render(black_box(node.as_ref()), &options));
        }
    });
}

#[bench]
fn random_to_mathml(bench: &mut Bencher) {
    let examples = &*RANDOM_EXAMPLES;
    let options = RenderOptions {
        row_mode: RowMode::Force,
        ..RenderOptions::default()
    };
    bench.iter(|| {
        for example in examples {
            black_box(to_mathml(black_box(example), &options));
        }
    });
}
