//! A fast asciimath to MathML converter
//!
//! Conversion happens in two stages: [`parse`] produces a [`Node`] tree that borrows its text from
//! the input, and [`render`] writes that tree as presentation MathML. [`to_mathml`] does both.
//!
//! ## Usage
//!
//! ```sh
//! cargo add asciimath-mathml
//! ```
//!
//! then
//!
//! ```
//! use asciimath_mathml::{to_mathml, RenderOptions};
//!
//! let mathml = to_mathml("sqrt(x+1)", &RenderOptions::default());
//! assert_eq!(
//!     mathml,
//!     "<math><msqrt><mrow><mi>x</mi><mo>+</mo><mn>1</mn></mrow></msqrt></math>"
//! );
//! ```
//!
//! ## Dialect
//!
//! Asciimath aims for fault-tolerant input that looks close to what you'd type in ascii anyway.
//! Nothing is ever a syntax error: unknown characters become identifiers, unterminated text runs
//! to the end of input, and unmatched brackets are kept as written. Only empty input parses to
//! `None`.
//!
//! The grammar is roughly
//!
//! ```txt
//! v ::= any char | number | "text" | symbol  leaves
//! u ::= sqrt | abs | hat | bb | ...          unary operators
//! b ::= frac | root | color | ...            binary operators
//! l ::= ( | [ | { | (: | {: | ...            left brackets
//! r ::= ) | ] | } | :) | :} | ...            right brackets
//! d ::= |                                    left-right brackets
//! S ::= v | lEr | dEd | uS | bSS             Simple expression
//! I ::= S | S_S | S^S | S_S^S                Intermediate expression
//! E ::= I | I/I | IE                         Expression
//! ```
//!
//! There is no operator precedence, `a+b*c` is just a sequence of five nodes. Brackets around an
//! operand, script or fraction part are dropped in the output, so `(a+b)/2` renders as a fraction
//! of `a+b` and `2`. A bracketed list of bracketed comma separated rows, e.g. `[(a,b),(c,d)]`,
//! becomes a [matrix][tree::Matrix], and rows may have different lengths.
//!
//! Several spellings can name the same [`Symbol`], e.g. `**` and `ast`, and they always render
//! the same way.
//!
//! ## Rendering
//!
//! [`RenderOptions`] control the output:
//!
//! - the `display` and `title` attributes of the `<math>` element
//! - whether non-ascii characters are written as character references
//! - how eagerly operands are wrapped in `<mrow>`, see [`RowMode`]
//! - which of `phi` and `varphi` is the straight form
//!
//! ```
//! use asciimath_mathml::{to_mathml, RenderOptions, RowMode};
//!
//! let options = RenderOptions {
//!     escape_non_ascii: false,
//!     row_mode: RowMode::Force,
//!     ..RenderOptions::default()
//! };
//! assert_eq!(
//!     to_mathml("x^2", &options),
//!     "<math><msup><mrow><mi>x</mi></mrow><mrow><mn>2</mn></mrow></msup></math>"
//! );
//! ```
//!
//! [`write_mathml`] streams into any [`fmt::Write`][std::fmt::Write] instead of allocating a new
//! string.
//!
//! ## Custom Symbols
//!
//! [`parse`] uses the standard symbol table, backed by the fastest enabled
//! [prefix map][prefix_map]. [`parse_tokens`] accepts a [`Tokenizer`] over any prefix map, which
//! can hold a modified symbol table:
//!
//! ```
//! use asciimath_mathml::prefix_map::HashPrefixMap;
//! use asciimath_mathml::{
//!     parse_tokens, render, RenderOptions, Symbol, SymbolEntry, TokenClass, Tokenizer,
//!     ASCIIMATH_SYMBOLS,
//! };
//!
//! let symbols: HashPrefixMap<_, _> = ASCIIMATH_SYMBOLS
//!     .into_iter()
//!     .chain([("dagger", SymbolEntry::new(Some(Symbol::Ast), TokenClass::Symbol))])
//!     .collect();
//! let parsed = parse_tokens(Tokenizer::with_symbols("x dagger", &symbols));
//! assert_eq!(
//!     render(parsed.as_ref(), &RenderOptions::default()),
//!     "<math><mi>x</mi><mo>*</mo></math>"
//! );
//! ```
//!
//! ## Tree Structure
//!
//! The tree is a single owned [`Node`] enum. Leaves borrow their text from the input, and the
//! composite variants own their children, see [`tree`] for details. Trees can also be built by
//! hand and rendered:
//!
//! ```
//! use asciimath_mathml::tree::{Node, SubSup};
//! use asciimath_mathml::{render, RenderOptions};
//!
//! let node: Node = SubSup::with_sub(Node::Identifier("a"), Node::Identifier("n")).into();
//! assert_eq!(
//!     render(Some(&node), &RenderOptions::default()),
//!     "<math><msub><mi>a</mi><mi>n</mi></msub></math>"
//! );
//! ```
#![warn(missing_docs)]
mod color;
mod display;
mod mathml;
mod parse;
pub mod prefix_map;
mod symbols;
mod tokenizer;
pub mod tree;

pub use color::{color_by_name, COLOR_NAMES};
pub use mathml::{render, write_mathml, DisplayAttribute, RenderOptions, RowMode};
pub use parse::{parse, parse_tokens};
pub use symbols::{
    lookup, DefaultSymbols, OperandConverter, Symbol, SymbolEntry, TokenClass, Transform,
    ASCIIMATH_SYMBOLS, MAX_KEY_LENGTH,
};
pub use tokenizer::{Token, Tokenizer};
pub use tree::Node;

/// Convert an asciimath string to MathML
///
/// Empty input converts to an empty string.
///
/// # Example
/// ```
/// use asciimath_mathml::{to_mathml, RenderOptions};
///
/// let options = RenderOptions {
///     escape_non_ascii: false,
///     ..RenderOptions::default()
/// };
/// assert_eq!(
///     to_mathml("a xx b", &options),
///     "<math><mi>a</mi><mo>\u{00D7}</mo><mi>b</mi></math>"
/// );
/// assert_eq!(to_mathml("", &options), "");
/// ```
pub fn to_mathml(inp: &str, options: &RenderOptions) -> String {
    log::debug!("converting {} bytes of asciimath", inp.len());
    render(parse(inp).as_ref(), options)
}
