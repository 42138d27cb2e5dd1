use crate::prefix_map::PrefixMap;
use crate::symbols::{
    DefaultSymbols, OperandConverter, Symbol, SymbolEntry, TokenClass, DEFAULT_SYMBOLS,
    MAX_KEY_LENGTH,
};
use std::iter::FusedIterator;

/// A classified slice of the input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Token<'a> {
    /// How the parser treats the token
    pub class: TokenClass,
    /// The raw text, without quotes for text tokens
    pub text: &'a str,
    /// The recognized symbol, if any
    pub symbol: Option<Symbol>,
    /// Operand transforms of the symbol, if any
    pub converter: Option<OperandConverter>,
}

impl<'a> Token<'a> {
    /// Create a token without a symbol
    pub fn new(class: TokenClass, text: &'a str) -> Self {
        Token {
            class,
            text,
            symbol: None,
            converter: None,
        }
    }

    /// Create a token from a symbol table entry
    pub fn from_entry(text: &'a str, entry: &SymbolEntry) -> Self {
        Token {
            class: entry.class,
            text,
            symbol: entry.symbol,
            converter: entry.converter,
        }
    }

    /// The end of input
    pub fn eof() -> Self {
        Token::new(TokenClass::Eof, "")
    }

    /// True if the token is the infix `symbol`, e.g. `_` is infix [`Symbol::Sub`]
    pub fn is_infix(&self, symbol: Symbol) -> bool {
        self.class == TokenClass::Infix && self.symbol == Some(symbol)
    }
}

/// Split a number off the front of `inp`
///
/// Numbers are ascii digits, optionally followed by a `.` and more digits. A `.` with no digits
/// after it isn't part of the number.
fn strip_number(inp: &str) -> Option<(&str, &str)> {
    let bytes = inp.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if int_len == 0 {
        return None;
    }
    let frac_len = match &bytes[int_len..] {
        [b'.', tail @ ..] => match tail.iter().take_while(|b| b.is_ascii_digit()).count() {
            0 => 0,
            digits => digits + 1,
        },
        _ => 0,
    };
    Some(inp.split_at(int_len + frac_len))
}

/// Split the contents of `open`...`close` off the front of `inp`
///
/// Unterminated text runs to the end of input.
fn strip_delimited<'a>(inp: &'a str, open: &str, close: char) -> Option<(&'a str, &'a str)> {
    let body = inp.strip_prefix(open)?;
    Some(match body.find(close) {
        Some(end) => (&body[..end], &body[end + close.len_utf8()..]),
        None => (body, ""),
    })
}

/// Split quoted text off the front of `inp`
fn strip_text(inp: &str) -> Option<(&str, &str)> {
    strip_delimited(inp, "\"", '"')
}

/// Split `text(...)` off the front of `inp`
fn strip_text_command(inp: &str) -> Option<(&str, &str)> {
    strip_delimited(inp, "text(", ')')
}

/// The longest slice of `inp` that could hold a symbol
///
/// Symbols never contain whitespace or numerals, except that a backslash escapes the character
/// after it, e.g. `\ ` is a symbol. The result has at most [`MAX_KEY_LENGTH`] characters, plus one
/// if it ends with an escape.
fn symbol_candidate(inp: &str) -> &str {
    let mut chars = inp.char_indices().peekable();
    let mut count = 0;
    let mut end = 0;
    while count < MAX_KEY_LENGTH {
        let Some((ind, chr)) = chars.next() else {
            break;
        };
        if chr == '\\' {
            if let Some(&(next_ind, next)) = chars.peek() {
                if next.is_whitespace() || next.is_numeric() {
                    chars.next();
                    end = next_ind + next.len_utf8();
                    count += 2;
                    continue;
                }
            }
        }
        if chr.is_whitespace() || chr.is_numeric() {
            break;
        }
        end = ind + chr.len_utf8();
        count += 1;
    }
    &inp[..end]
}

/// A tokenizer for asciimath with one token of pushback
///
/// Tokens are numbers, quoted or `text(...)` text, the longest known symbol, or else a single
/// character identifier, so every token consumes some input.
///
/// # Example
/// ```
/// use asciimath_mathml::{Symbol, TokenClass, Tokenizer};
///
/// let tokens: Vec<_> = Tokenizer::new("xx_12")
///     .map(|token| (token.text, token.class, token.symbol))
///     .collect();
/// assert_eq!(
///     tokens,
///     [
///         ("xx", TokenClass::Symbol, Some(Symbol::Times)),
///         ("_", TokenClass::Infix, Some(Symbol::Sub)),
///         ("12", TokenClass::Number, None),
///     ]
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tokenizer<'a, 'b, T> {
    remaining: &'a str,
    symbols: &'b T,
    pushed_back: Option<Token<'a>>,
}

impl<'a> Tokenizer<'a, 'static, DefaultSymbols> {
    /// Create a new tokenizer with the standard symbols
    ///
    /// Ignoring performance differences, this achieves the same result as:
    /// ```
    /// use asciimath_mathml::prefix_map::HashPrefixMap;
    /// use asciimath_mathml::{Tokenizer, ASCIIMATH_SYMBOLS};
    ///
    /// Tokenizer::with_symbols("...", &HashPrefixMap::from_iter(ASCIIMATH_SYMBOLS));
    /// ```
    pub fn new(inp: &'a str) -> Self {
        Self::with_symbols(inp, &DEFAULT_SYMBOLS)
    }
}

impl<'a, 'b, T> Tokenizer<'a, 'b, T> {
    /// Create a new tokenizer with a custom symbol map
    pub fn with_symbols(inp: &'a str, symbols: &'b T) -> Self {
        Tokenizer {
            remaining: inp,
            symbols,
            pushed_back: None,
        }
    }

    /// The input that hasn't been tokenized yet
    pub fn remaining(&self) -> &'a str {
        self.remaining
    }

    /// Return a token so that it's produced by the next call to
    /// [`next_token`][Tokenizer::next_token]
    ///
    /// Pushing back [`TokenClass::Eof`] does nothing, since the end of input is produced again
    /// anyway. Only one token can be pushed back at a time.
    pub fn push_back(&mut self, token: Token<'a>) {
        if token.class != TokenClass::Eof {
            debug_assert!(
                self.pushed_back.is_none(),
                "only one token can be pushed back"
            );
            self.pushed_back = Some(token);
        }
    }

    fn split_off(&mut self, len: usize) -> &'a str {
        let (pref, rem) = self.remaining.split_at(len);
        self.remaining = rem;
        pref
    }
}

impl<'a, 'b, T> Tokenizer<'a, 'b, T>
where
    T: PrefixMap<SymbolEntry>,
{
    /// Produce the next token, [`TokenClass::Eof`] once the input is exhausted
    pub fn next_token(&mut self) -> Token<'a> {
        if let Some(token) = self.pushed_back.take() {
            return token;
        }
        self.remaining = self.remaining.trim_start();
        let token = self.scan();
        log::trace!("token {:?} {:?}", token.class, token.text);
        token
    }

    fn scan(&mut self) -> Token<'a> {
        if self.remaining.is_empty() {
            return Token::eof();
        }
        if let Some((text, rem)) =
            strip_text(self.remaining).or_else(|| strip_text_command(self.remaining))
        {
            self.remaining = rem;
            return Token::new(TokenClass::Text, text);
        }
        if let Some((num, rem)) = strip_number(self.remaining) {
            self.remaining = rem;
            return Token::new(TokenClass::Number, num);
        }
        let symbols = self.symbols;
        match symbols.get_longest_prefix(symbol_candidate(self.remaining)) {
            Some((len, &entry)) if len > 0 => Token::from_entry(self.split_off(len), &entry),
            _ => {
                // non-empty after the eof check
                let len = self.remaining.chars().next().map_or(0, char::len_utf8);
                Token::new(TokenClass::Identifier, self.split_off(len))
            }
        }
    }
}

impl<'a, 'b, T> Iterator for Tokenizer<'a, 'b, T>
where
    T: PrefixMap<SymbolEntry>,
{
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        (token.class != TokenClass::Eof).then_some(token)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pushed = usize::from(self.pushed_back.is_some());
        (pushed, Some(self.remaining.len() + pushed))
    }
}

impl<'a, 'b, T> FusedIterator for Tokenizer<'a, 'b, T> where T: PrefixMap<SymbolEntry> {}

#[cfg(test)]
mod tests {
    use super::{strip_number, symbol_candidate, Token};
    use crate::prefix_map::HashPrefixMap;
    use crate::symbols::{Symbol, SymbolEntry, TokenClass};
    use crate::Tokenizer;

    fn classes(inp: &str) -> Vec<(&str, TokenClass)> {
        Tokenizer::new(inp)
            .map(|token| (token.text, token.class))
            .collect()
    }

    #[test]
    fn mixed_tokens() {
        assert_eq!(
            classes(r#"frac (abs x) xy / 7^2.5 "text with spaces""#),
            [
                ("frac", TokenClass::Binary),
                ("(", TokenClass::LeftParen),
                ("abs", TokenClass::Unary),
                ("x", TokenClass::Identifier),
                (")", TokenClass::RightParen),
                ("x", TokenClass::Identifier),
                ("y", TokenClass::Identifier),
                ("/", TokenClass::Infix),
                ("7", TokenClass::Number),
                ("^", TokenClass::Infix),
                ("2.5", TokenClass::Number),
                ("text with spaces", TokenClass::Text),
            ]
        );
    }

    #[test]
    fn longest_symbol_wins() {
        assert_eq!(
            classes("->>|->sinh"),
            [
                ("->>", TokenClass::Symbol),
                ("|->", TokenClass::Symbol),
                ("sinh", TokenClass::Symbol),
            ]
        );
    }

    #[test]
    fn numbers() {
        assert_eq!(strip_number("12.5x"), Some(("12.5", "x")));
        assert_eq!(strip_number("12.x"), Some(("12", ".x")));
        assert_eq!(strip_number("12."), Some(("12", ".")));
        assert_eq!(strip_number("3.14.15"), Some(("3.14", ".15")));
        assert_eq!(strip_number(".5"), None);
        assert_eq!(strip_number("-1"), None);
        assert_eq!(
            classes("-1.5"),
            [("-", TokenClass::Symbol), ("1.5", TokenClass::Number)]
        );
    }

    #[test]
    fn text() {
        assert_eq!(
            classes(r#"text("foo") "a)b"text(open"#),
            [
                (r#""foo""#, TokenClass::Text),
                ("a)b", TokenClass::Text),
                ("open", TokenClass::Text),
            ]
        );
        assert_eq!(classes(r#""unterminated"#), [("unterminated", TokenClass::Text)]);
        assert_eq!(
            classes("tex"),
            [
                ("t", TokenClass::Identifier),
                ("e", TokenClass::Identifier),
                ("x", TokenClass::Identifier),
            ]
        );
    }

    #[test]
    fn candidates() {
        assert_eq!(symbol_candidate("abc def"), "abc");
        assert_eq!(symbol_candidate("x2"), "x");
        assert_eq!(symbol_candidate("a\\ b"), "a\\ b");
        assert_eq!(symbol_candidate("\\3x"), "\\3x");
        assert_eq!(symbol_candidate("\\\\x"), "\\\\x");
        assert_eq!(symbol_candidate("½"), "");
        assert_eq!(symbol_candidate(&"a".repeat(40)).len(), 21);
    }

    #[test]
    fn escapes() {
        let tokens: Vec<_> = Tokenizer::new("a\\ b \\\\ c")
            .map(|token| (token.text, token.symbol))
            .collect();
        assert_eq!(
            tokens,
            [
                ("a", None),
                ("\\ ", Some(Symbol::Nbsp)),
                ("b", None),
                ("\\\\", Some(Symbol::Backslash)),
                ("c", None),
            ]
        );
    }

    #[test]
    fn unicode_identifiers() {
        assert_eq!(
            classes("½αβ"),
            [
                ("½", TokenClass::Identifier),
                ("α", TokenClass::Identifier),
                ("β", TokenClass::Identifier),
            ]
        );
    }

    #[test]
    fn push_back() {
        let mut tokens = Tokenizer::new("a b");
        let first = tokens.next_token();
        assert_eq!(first.text, "a");
        tokens.push_back(first);
        assert_eq!(tokens.next_token(), first);
        assert_eq!(tokens.next_token().text, "b");
        let eof = tokens.next_token();
        assert_eq!(eof, Token::eof());
        tokens.push_back(eof);
        assert_eq!(tokens.next_token(), Token::eof());
        assert_eq!(tokens.next(), None);
    }

    #[test]
    #[should_panic(expected = "only one token")]
    #[cfg(debug_assertions)]
    fn double_push_back() {
        let mut tokens = Tokenizer::new("a b");
        let first = tokens.next_token();
        let second = tokens.next_token();
        tokens.push_back(second);
        tokens.push_back(first);
    }

    #[test]
    fn custom_symbols() {
        let symbols = HashPrefixMap::from_iter([
            ("ab", SymbolEntry::new(Some(Symbol::Alpha), TokenClass::Symbol)),
            (",", SymbolEntry::new(None, TokenClass::RightParen)),
        ]);
        let tokens: Vec<_> = Tokenizer::with_symbols("abc,", &symbols)
            .map(|token| (token.text, token.class))
            .collect();
        assert_eq!(
            tokens,
            [
                ("ab", TokenClass::Symbol),
                ("c", TokenClass::Identifier),
                (",", TokenClass::RightParen),
            ]
        );
    }

    #[test]
    fn whitespace_only() {
        let mut tokens = Tokenizer::new(" \t\n ");
        assert_eq!(tokens.next_token(), Token::eof());
        assert_eq!(tokens.remaining(), "");
    }
}
