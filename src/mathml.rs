//! Rendering parsed expressions as presentation MathML
use crate::display::{self, Category, DisplayDetail, Position};
use crate::tree::{BinaryOp, InfixOp, Matrix, Node, Paren, SubSup, SymbolNode, UnaryOp};
use std::fmt::{self, Write};

/// The `display` attribute of the `<math>` element
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DisplayAttribute {
    /// No attribute
    #[default]
    None,
    /// `display="block"`
    Block,
    /// `display="inline"`
    Inline,
}

impl DisplayAttribute {
    fn value(self) -> Option<&'static str> {
        match self {
            DisplayAttribute::None => None,
            DisplayAttribute::Block => Some("block"),
            DisplayAttribute::Inline => Some("inline"),
        }
    }
}

/// When expressions get wrapped in `<mrow>`
#[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RowMode {
    /// Never wrap sequences
    Omit,
    /// Wrap sequences that aren't empty
    #[default]
    Avoid,
    /// Wrap everything, which some editors need to keep operands together
    Force,
}

/// Options for rendering MathML
///
/// # Example
/// ```
/// use asciimath_mathml::{to_mathml, DisplayAttribute, RenderOptions};
///
/// let options = RenderOptions {
///     display: DisplayAttribute::Block,
///     title: Some("x"),
///     ..RenderOptions::default()
/// };
/// assert_eq!(
///     to_mathml("x", &options),
///     r#"<math display="block" title="x"><mi>x</mi></math>"#
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RenderOptions<'s> {
    /// The `display` attribute
    pub display: DisplayAttribute,
    /// The `title` attribute, usually the asciimath source
    pub title: Option<&'s str>,
    /// Write every non-ascii character as a character reference
    pub escape_non_ascii: bool,
    /// How operands are wrapped
    pub row_mode: RowMode,
    /// Render `phi` as the straight ϕ and `varphi` as the curly φ
    pub fix_phi: bool,
}

impl Default for RenderOptions<'_> {
    fn default() -> Self {
        RenderOptions {
            display: DisplayAttribute::None,
            title: None,
            escape_non_ascii: true,
            row_mode: RowMode::Avoid,
            fix_phi: true,
        }
    }
}

fn write_escaped<W: Write>(out: &mut W, text: &str, non_ascii: bool, quotes: bool) -> fmt::Result {
    for chr in text.chars() {
        match chr {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' if quotes => out.write_str("&quot;")?,
            chr if non_ascii && !chr.is_ascii() => write!(out, "&#x{:X};", u32::from(chr))?,
            chr => out.write_char(chr)?,
        }
    }
    Ok(())
}

struct MathMlWriter<'w, 'o, W> {
    out: &'w mut W,
    options: &'o RenderOptions<'o>,
}

impl<W: Write> MathMlWriter<'_, '_, W> {
    fn detail(&self, symbol: &SymbolNode) -> Option<DisplayDetail> {
        symbol
            .symbol
            .map(|symbol| display::detail(symbol, self.options.fix_phi))
    }

    fn operator_detail(&self, node: &Node) -> Option<DisplayDetail> {
        match node {
            Node::Symbol(symbol) => self.detail(symbol),
            Node::UnaryOp(op) => self.detail(&op.operator),
            _ => None,
        }
    }

    fn is_accent(&self, node: &Node) -> bool {
        self.operator_detail(node)
            .map_or(false, |detail| detail.is_accent())
    }

    fn is_under_over(&self, node: &Node) -> bool {
        self.operator_detail(node)
            .map_or(false, |detail| detail.under_over)
    }

    /// The glyph of an optional delimiter
    fn delimiter(&self, symbol: Option<SymbolNode>) -> &'static str {
        symbol
            .and_then(|symbol| self.detail(&symbol))
            .map_or("", |detail| detail.text)
    }

    fn leaf(&mut self, tag: &str, text: &str) -> fmt::Result {
        write!(self.out, "<{tag}>")?;
        write_escaped(self.out, text, self.options.escape_non_ascii, false)?;
        write!(self.out, "</{tag}>")
    }

    /// Bare text is an operator if it starts with punctuation, otherwise an identifier
    fn identifier_or_operator(&mut self, text: &str) -> fmt::Result {
        match text.chars().next() {
            Some(first) if !first.is_alphanumeric() => self.leaf("mo", text),
            _ => self.leaf("mi", text),
        }
    }

    fn symbol(&mut self, symbol: &SymbolNode) -> fmt::Result {
        match self.detail(symbol) {
            Some(detail) if !detail.text.is_empty() => match detail.category {
                Category::Operator
                | Category::Accent(_)
                | Category::LeftParen
                | Category::RightParen
                | Category::LeftRightParen => self.leaf("mo", detail.text),
                Category::Text => self.leaf("mtext", detail.text),
                _ => self.leaf("mi", detail.text),
            },
            _ => self.identifier_or_operator(symbol.text),
        }
    }

    /// Surround `body` with delimiters, if there are any
    fn fenced<F>(&mut self, left: &str, right: &str, body: F) -> fmt::Result
    where
        F: FnOnce(&mut Self) -> fmt::Result,
    {
        if left.is_empty() && right.is_empty() {
            return body(self);
        }
        self.out.write_str("<mrow>")?;
        if !left.is_empty() {
            self.leaf("mo", left)?;
        }
        body(self)?;
        if !right.is_empty() {
            self.leaf("mo", right)?;
        }
        self.out.write_str("</mrow>")
    }

    fn node(&mut self, node: &Node, mode: RowMode) -> fmt::Result {
        if mode == RowMode::Force {
            self.out.write_str("<mrow>")?;
            match node {
                Node::Sequence(nodes) => self.nodes(nodes)?,
                node => self.node(node, RowMode::Avoid)?,
            }
            return self.out.write_str("</mrow>");
        }

        match node {
            Node::Empty | Node::Color(_) => Ok(()),
            Node::Number(num) => self.leaf("mn", num),
            Node::Text(text) => self.leaf("mtext", text),
            Node::Identifier(text) => self.identifier_or_operator(text),
            Node::Symbol(symbol) => self.symbol(symbol),
            Node::Sequence(nodes) if mode == RowMode::Omit || nodes.is_empty() => self.nodes(nodes),
            Node::Sequence(nodes) => {
                self.out.write_str("<mrow>")?;
                self.nodes(nodes)?;
                self.out.write_str("</mrow>")
            }
            Node::Group(paren) => match paren.body() {
                Some(body) => self.node(body, RowMode::Avoid),
                None => Ok(()),
            },
            Node::Paren(paren) => self.paren(paren),
            Node::Matrix(matrix) => self.matrix(matrix),
            Node::UnaryOp(op) => self.unary(op),
            Node::BinaryOp(op) => self.binary(op),
            Node::InfixOp(op) => self.infix(op),
            Node::SubSup(scripted) => self.scripts(scripted),
        }
    }

    fn nodes(&mut self, nodes: &[Node]) -> fmt::Result {
        for node in nodes {
            self.node(node, RowMode::Avoid)?;
        }
        Ok(())
    }

    fn paren(&mut self, paren: &Paren) -> fmt::Result {
        let left = self.delimiter(paren.left);
        let right = self.delimiter(paren.right);
        self.fenced(left, right, |this| match paren.body() {
            Some(body) => this.node(body, RowMode::Avoid),
            None => Ok(()),
        })
    }

    fn matrix(&mut self, matrix: &Matrix) -> fmt::Result {
        let left = self.delimiter(Some(matrix.left));
        let right = self.delimiter(Some(matrix.right));
        self.fenced(left, right, |this| {
            this.out.write_str("<mtable>")?;
            for row in matrix.rows() {
                this.out.write_str("<mtr>")?;
                for cell in row.iter() {
                    this.out.write_str("<mtd>")?;
                    this.node(cell, RowMode::Avoid)?;
                    this.out.write_str("</mtd>")?;
                }
                this.out.write_str("</mtr>")?;
            }
            this.out.write_str("</mtable>")
        })
    }

    fn fraction(&mut self, num: &Node, den: &Node) -> fmt::Result {
        let mode = self.options.row_mode;
        self.out.write_str("<mfrac>")?;
        self.node(num, mode)?;
        self.node(den, mode)?;
        self.out.write_str("</mfrac>")
    }

    fn under_over(&mut self, base: &Node, under: Option<&Node>, over: Option<&Node>) -> fmt::Result {
        let mode = self.options.row_mode;
        let under_accent = under.map_or(false, |under| self.is_accent(under));
        let over_accent = over.map_or(false, |over| self.is_accent(over));
        let tag = match (under, over) {
            (Some(_), Some(_)) => "munderover",
            (Some(_), None) => "munder",
            (None, Some(_)) => "mover",
            (None, None) => return self.node(base, mode),
        };

        write!(self.out, "<{tag}")?;
        if over_accent {
            self.out.write_str(" accent=\"true\"")?;
        }
        if under_accent {
            self.out.write_str(" accentunder=\"true\"")?;
        }
        self.out.write_char('>')?;
        self.node(base, mode)?;
        // accents are never wrapped
        if let Some(under) = under {
            self.node(under, if under_accent { RowMode::Avoid } else { mode })?;
        }
        if let Some(over) = over {
            self.node(over, if over_accent { RowMode::Avoid } else { mode })?;
        }
        write!(self.out, "</{tag}>")
    }

    fn scripts(&mut self, scripted: &SubSup) -> fmt::Result {
        let base = scripted.base();
        if self.is_under_over(base) {
            return self.under_over(base, scripted.sub(), scripted.sup());
        }

        let mode = self.options.row_mode;
        let tag = match (scripted.sub(), scripted.sup()) {
            (Some(_), Some(_)) => "msubsup",
            (Some(_), None) => "msub",
            _ => "msup",
        };
        write!(self.out, "<{tag}>")?;
        self.node(base, mode)?;
        for script in [scripted.sub(), scripted.sup()].into_iter().flatten() {
            self.node(script, mode)?;
        }
        write!(self.out, "</{tag}>")
    }

    fn unary(&mut self, op: &UnaryOp) -> fmt::Result {
        let Some(symbol) = op.operator.symbol else {
            return Ok(());
        };
        let detail = display::detail(symbol, self.options.fix_phi);
        let mode = self.options.row_mode;
        let operand = op.operand();
        match detail.category {
            Category::Identifier | Category::Operator => {
                let tag = if detail.category == Category::Identifier {
                    "mi"
                } else {
                    "mo"
                };
                self.out.write_str("<mrow>")?;
                self.leaf(tag, detail.text)?;
                self.node(operand, mode)?;
                self.out.write_str("</mrow>")
            }
            Category::Wrap(left, right) => {
                self.fenced(left, right, |this| this.node(operand, RowMode::Avoid))
            }
            Category::Accent(position) => {
                let glyph = Node::Symbol(op.operator);
                match position {
                    Position::Over => self.under_over(operand, None, Some(&glyph)),
                    Position::Under => self.under_over(operand, Some(&glyph), None),
                }
            }
            Category::Font => {
                write!(self.out, "<mstyle mathvariant=\"{}\">", detail.text)?;
                self.node(operand, RowMode::Avoid)?;
                self.out.write_str("</mstyle>")
            }
            Category::Cancel => {
                self.out
                    .write_str("<menclose notation=\"updiagonalstrike\">")?;
                self.node(operand, RowMode::Omit)?;
                self.out.write_str("</menclose>")
            }
            Category::Sqrt => {
                self.out.write_str("<msqrt>")?;
                self.node(operand, mode)?;
                self.out.write_str("</msqrt>")
            }
            category => panic!(
                "{} can't be rendered as a unary operator ({category:?})",
                symbol.name()
            ),
        }
    }

    fn binary(&mut self, op: &BinaryOp) -> fmt::Result {
        let Some(symbol) = op.operator.symbol else {
            return Ok(());
        };
        let detail = display::detail(symbol, self.options.fix_phi);
        let mode = self.options.row_mode;
        match (detail.category, op.first()) {
            (Category::Over, first) => self.under_over(op.second(), None, Some(first)),
            (Category::Under, first) => self.under_over(op.second(), Some(first), None),
            (Category::Root, index) => {
                self.out.write_str("<mroot>")?;
                self.node(op.second(), mode)?;
                self.node(index, mode)?;
                self.out.write_str("</mroot>")
            }
            (Category::Color, Node::Color(color)) => {
                write!(
                    self.out,
                    "<mstyle mathcolor=\"#{:02x}{:02x}{:02x}\">",
                    color.r, color.g, color.b
                )?;
                self.node(op.second(), RowMode::Avoid)?;
                self.out.write_str("</mstyle>")
            }
            (Category::Frac, first) => self.fraction(first, op.second()),
            (category, _) => panic!(
                "{} can't be rendered as a binary operator ({category:?})",
                symbol.name()
            ),
        }
    }

    fn infix(&mut self, op: &InfixOp) -> fmt::Result {
        let Some(symbol) = op.operator.symbol else {
            return Ok(());
        };
        match display::detail(symbol, self.options.fix_phi).category {
            Category::Frac => self.fraction(op.first(), op.second()),
            category => panic!(
                "{} can't be rendered as an infix operator ({category:?})",
                symbol.name()
            ),
        }
    }
}

/// Write a parsed expression as MathML into any writer
///
/// Nothing is written for `None`.
///
/// # Example
/// ```
/// use asciimath_mathml::{parse, write_mathml, RenderOptions};
///
/// let mut out = String::from("<p>");
/// write_mathml(&mut out, parse("1/x").as_ref(), &RenderOptions::default()).unwrap();
/// out.push_str("</p>");
/// assert_eq!(out, "<p><math><mfrac><mn>1</mn><mi>x</mi></mfrac></math></p>");
/// ```
pub fn write_mathml<W: Write>(
    out: &mut W,
    node: Option<&Node>,
    options: &RenderOptions,
) -> fmt::Result {
    let Some(node) = node else {
        return Ok(());
    };
    out.write_str("<math")?;
    if let Some(display) = options.display.value() {
        write!(out, " display=\"{display}\"")?;
    }
    if let Some(title) = options.title {
        out.write_str(" title=\"")?;
        write_escaped(out, title, options.escape_non_ascii, true)?;
        out.write_char('"')?;
    }
    out.write_char('>')?;
    MathMlWriter { out, options }.node(node, RowMode::Omit)?;
    out.write_str("</math>")
}

/// Render a parsed expression as a MathML string
///
/// `None`, i.e. empty input, renders as an empty string.
pub fn render(node: Option<&Node>, options: &RenderOptions) -> String {
    let mut out = String::new();
    write_mathml(&mut out, node, options).expect("writing to a string can't fail");
    out
}

#[cfg(test)]
mod tests {
    use super::{render, write_escaped, DisplayAttribute, RenderOptions, RowMode};
    use crate::parse;
    use crate::symbols::{Symbol, TokenClass};
    use crate::tree::{Node, SymbolNode, UnaryOp};

    fn body(inp: &str, options: &RenderOptions) -> String {
        let out = render(parse(inp).as_ref(), options);
        out.strip_prefix("<math>")
            .and_then(|out| out.strip_suffix("</math>"))
            .unwrap_or(&out)
            .to_owned()
    }

    fn plain(inp: &str) -> String {
        let options = RenderOptions {
            escape_non_ascii: false,
            ..RenderOptions::default()
        };
        body(inp, &options)
    }

    #[test]
    fn empty() {
        assert_eq!(render(None, &RenderOptions::default()), "");
        assert_eq!(render(parse("   ").as_ref(), &RenderOptions::default()), "");
    }

    #[test]
    fn escaping() {
        let mut out = String::new();
        write_escaped(&mut out, "a<b & \"c\" > é𝔸", true, false).unwrap();
        assert_eq!(out, "a&lt;b &amp; \"c\" &gt; &#xE9;&#x1D538;");

        let mut out = String::new();
        write_escaped(&mut out, "\"é\"", false, true).unwrap();
        assert_eq!(out, "&quot;é&quot;");
    }

    #[test]
    fn non_ascii_escaped_by_default() {
        assert_eq!(
            body("x in A", &RenderOptions::default()),
            "<mi>x</mi><mo>&#x2208;</mo><mi>A</mi>"
        );
        assert_eq!(plain("x in A"), "<mi>x</mi><mo>\u{2208}</mo><mi>A</mi>");
    }

    #[test]
    fn attributes() {
        let options = RenderOptions {
            display: DisplayAttribute::Inline,
            title: Some("a<\"b\""),
            ..RenderOptions::default()
        };
        assert_eq!(
            render(parse("a").as_ref(), &options),
            "<math display=\"inline\" title=\"a&lt;&quot;b&quot;\"><mi>a</mi></math>"
        );
    }

    #[test]
    fn identifier_or_operator() {
        assert_eq!(plain("a , 1"), "<mi>a</mi><mo>,</mo><mn>1</mn>");
        assert_eq!(plain("é"), "<mi>é</mi>");
        assert_eq!(plain("sqrt"), "<msqrt><mi></mi></msqrt>");
    }

    #[test]
    fn structural_symbols_fall_back_to_source() {
        assert_eq!(plain("/a"), "<mo>/</mo><mi>a</mi>");
        assert_eq!(plain("_"), "<mo>_</mo>");
    }

    #[test]
    fn symbol_elements() {
        assert_eq!(plain("sin"), "<mi>sin</mi>");
        assert_eq!(plain("and"), "<mtext>and</mtext>");
        assert_eq!(plain("alpha"), "<mi>\u{03B1}</mi>");
        assert_eq!(plain("Gamma"), "<mo>\u{0393}</mo>");
        assert_eq!(plain(")"), "<mo>)</mo>");
    }

    #[test]
    fn phi() {
        assert_eq!(plain("phi"), "<mi>\u{03D5}</mi>");
        let options = RenderOptions {
            escape_non_ascii: false,
            fix_phi: false,
            ..RenderOptions::default()
        };
        assert_eq!(body("phi", &options), "<mi>\u{03C6}</mi>");
    }

    #[test]
    fn row_modes() {
        assert_eq!(plain("sqrt(a b)"), "<msqrt><mrow><mi>a</mi><mi>b</mi></mrow></msqrt>");
        assert_eq!(plain("sqrt a"), "<msqrt><mi>a</mi></msqrt>");

        let options = RenderOptions {
            row_mode: RowMode::Force,
            ..RenderOptions::default()
        };
        assert_eq!(
            body("sqrt a", &options),
            "<msqrt><mrow><mi>a</mi></mrow></msqrt>"
        );
        // the group's own row is kept inside the forced one
        assert_eq!(
            body("sqrt(a b)", &options),
            "<msqrt><mrow><mrow><mi>a</mi><mi>b</mi></mrow></mrow></msqrt>"
        );

        let options = RenderOptions {
            row_mode: RowMode::Omit,
            ..RenderOptions::default()
        };
        assert_eq!(
            body("sqrt(a b)", &options),
            "<msqrt><mrow><mi>a</mi><mi>b</mi></mrow></msqrt>"
        );
        assert_eq!(
            body("(a b)/c", &options),
            "<mfrac><mrow><mi>a</mi><mi>b</mi></mrow><mi>c</mi></mfrac>"
        );
    }

    #[test]
    fn cancel_omits_rows() {
        assert_eq!(
            plain("cancel(a b)"),
            "<menclose notation=\"updiagonalstrike\"><mrow><mi>a</mi><mi>b</mi></mrow></menclose>"
        );
        assert_eq!(
            plain("cancel a"),
            "<menclose notation=\"updiagonalstrike\"><mi>a</mi></menclose>"
        );
    }

    #[test]
    fn operator_without_symbol_renders_nothing() {
        let op = UnaryOp::new(
            SymbolNode::new(None, "custom", TokenClass::Unary),
            Node::Identifier("x"),
        );
        assert_eq!(
            render(Some(&op.into()), &RenderOptions::default()),
            "<math></math>"
        );
    }

    #[test]
    #[should_panic(expected = "Frac can't be rendered as a unary operator")]
    fn unrenderable_unary() {
        let op = UnaryOp::new(
            SymbolNode::new(Some(Symbol::Frac), "frac", TokenClass::Unary),
            Node::Identifier("x"),
        );
        render(Some(&op.into()), &RenderOptions::default());
    }
}
