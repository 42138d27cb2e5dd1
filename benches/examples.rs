use asciimath_mathml::ASCIIMATH_SYMBOLS;
use lazy_static::lazy_static;
use rand::distributions::{Alphanumeric, Slice};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::WeightedIndex;

pub const EXAMPLES: [&str; 4] = [
    "sum_(i=1)^n i^3=((n(n+1))/2)^2",
    "x = (-b+-sqrt(b^2-4ac))/(2a)",
    "((a_(11), cdots , a_(1n)),(vdots, ddots, vdots),(a_(m1), cdots , a_(mn)))",
    "color(red)(x) hat(ab) \"text\" int_0^(pi/2) g(x) dx",
];

fn random_string<V>(rng: &mut impl Rng, symbols: &[(&str, V)]) -> String {
    let symbol = Slice::new(symbols).unwrap();
    let punct = Slice::new(b"()[]{},|/_^").unwrap();
    let choice = WeightedIndex::new([1, 1, 1, 3]).unwrap();

    let mut res = String::new();
    for _ in 0..30 {
        match rng.sample(&choice) {
            0 => res.push(' '),
            1 => res.push(rng.sample(Alphanumeric).into()),
            2 => res.push((*rng.sample(&punct)).into()),
            3 => res.push_str(rng.sample(&symbol).0),
            _ => unreachable!(),
        }
    }
    res
}

lazy_static! {
    pub static ref RANDOM_EXAMPLES: [String; 30] = {
        let mut rng = StdRng::from_seed([0; 32]);
        [(); 30].map(|_| random_string(&mut rng, &ASCIIMATH_SYMBOLS))
    };
}
