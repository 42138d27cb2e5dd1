//! The structures that make up a parsed asciimath expression
//!
//! Parsing produces a single [`Node`]. Most variants are leaves that borrow their text from the
//! input, the rest own their children:
//!
//! - [`Node::Sequence`] - horizontal concatenation, never directly nested in another sequence
//! - [`Paren`] - a bracketed expression, which [`Node::Group`] reuses for brackets that were
//!   already resolved and shouldn't be rendered
//! - [`Matrix`] - a bracketed list of bracketed comma-separated rows
//! - [`UnaryOp`], [`BinaryOp`] and [`InfixOp`] - operator applications
//! - [`SubSup`] - an expression with attached scripts
//! - [`Color`] - a resolved color, only produced as the first operand of `color`
use crate::symbols::{Symbol, TokenClass};
use crate::tokenizer::Token;
use std::ops::{Deref, Index};

/// A recognized symbol together with the text and class it was parsed from
///
/// Delimiters and operators keep their class so rendering can tell how they were used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolNode<'a> {
    /// The symbol, absent for pass-through brackets like `{:`
    pub symbol: Option<Symbol>,
    /// The raw input text
    pub text: &'a str,
    /// How the symbol was tokenized
    pub class: TokenClass,
}

impl<'a> SymbolNode<'a> {
    /// Create a new symbol node
    pub fn new(symbol: Option<Symbol>, text: &'a str, class: TokenClass) -> Self {
        SymbolNode {
            symbol,
            text,
            class,
        }
    }

    /// True if this is `symbol` with exactly the raw `text`
    pub fn is(&self, symbol: Symbol, text: &str) -> bool {
        self.symbol == Some(symbol) && self.text == text
    }
}

impl<'a> From<Token<'a>> for SymbolNode<'a> {
    fn from(token: Token<'a>) -> Self {
        SymbolNode::new(token.symbol, token.text, token.class)
    }
}

/// A bracketed expression
///
/// Either bracket can be missing, e.g. `(a` has no right bracket, and `{:a:}` brackets carry no
/// symbol.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Paren<'a> {
    /// The left bracket
    pub left: Option<SymbolNode<'a>>,
    body: Option<Box<Node<'a>>>,
    /// The right bracket
    pub right: Option<SymbolNode<'a>>,
}

impl<'a> Paren<'a> {
    /// Create a bracketed expression, `body` is `None` for empty brackets
    pub fn new(
        left: Option<SymbolNode<'a>>,
        body: Option<Node<'a>>,
        right: Option<SymbolNode<'a>>,
    ) -> Self {
        Paren {
            left,
            body: body.map(Box::new),
            right,
        }
    }

    /// The bracketed expression
    pub fn body(&self) -> Option<&Node<'a>> {
        self.body.as_deref()
    }

    /// Take the bracketed expression
    pub fn into_body(self) -> Option<Node<'a>> {
        self.body.map(|body| *body)
    }

    /// True when neither bracket is shared between opening and closing, e.g. not `|`
    ///
    /// Only such brackets can be dropped around operands.
    pub fn is_unwrappable(&self) -> bool {
        self.left
            .map_or(true, |left| left.class == TokenClass::LeftParen)
            && self
                .right
                .map_or(true, |right| right.class == TokenClass::RightParen)
    }
}

/// A row of matrix cells
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub struct Row<'a>(Vec<Node<'a>>);

impl<'a> Row<'a> {
    /// Create a row from its cells
    pub fn new<T, N>(cells: T) -> Self
    where
        T: IntoIterator<Item = N>,
        N: Into<Node<'a>>,
    {
        Row(cells.into_iter().map(Into::into).collect())
    }
}

impl<'a> Deref for Row<'a> {
    type Target = [Node<'a>];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// A matrix e.g. `[(a, b), (c, d)]`
///
/// Rows don't need the same number of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Matrix<'a> {
    /// The matrix's left bracket
    pub left: SymbolNode<'a>,
    rows: Vec<Row<'a>>,
    /// The matrix's right bracket
    pub right: SymbolNode<'a>,
}

impl<'a> Matrix<'a> {
    /// Create a new matrix from its brackets and rows
    pub fn new<T>(left: SymbolNode<'a>, rows: T, right: SymbolNode<'a>) -> Self
    where
        T: IntoIterator<Item = Row<'a>>,
    {
        Matrix {
            left,
            rows: rows.into_iter().collect(),
            right,
        }
    }

    /// The rows, top-down
    pub fn rows(&self) -> &[Row<'a>] {
        &self.rows
    }

    /// The number of rows
    pub fn num_rows(&self) -> usize {
        self.rows.len()
    }
}

/// usize indices get rows
impl<'a> Index<usize> for Matrix<'a> {
    type Output = Row<'a>;

    fn index(&self, row: usize) -> &Self::Output {
        &self.rows[row]
    }
}

/// 2D indices `[row, col]` get cells
impl<'a> Index<[usize; 2]> for Matrix<'a> {
    type Output = Node<'a>;

    fn index(&self, idx: [usize; 2]) -> &Self::Output {
        let [row, col] = idx;
        &self.rows[row][col]
    }
}

/// A unary operator like `sqrt` applied to its operand
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryOp<'a> {
    /// The operator
    pub operator: SymbolNode<'a>,
    operand: Box<Node<'a>>,
}

impl<'a> UnaryOp<'a> {
    /// Create a unary operation
    ///
    /// # Panics
    /// When `operator` wasn't tokenized as [`TokenClass::Unary`].
    pub fn new<N>(operator: SymbolNode<'a>, operand: N) -> Self
    where
        N: Into<Node<'a>>,
    {
        assert_eq!(
            operator.class,
            TokenClass::Unary,
            "{:?} is not a unary operator",
            operator.text
        );
        UnaryOp {
            operator,
            operand: Box::new(operand.into()),
        }
    }

    /// The operand
    pub fn operand(&self) -> &Node<'a> {
        &self.operand
    }
}

/// A binary operator like `frac` applied to its operands
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryOp<'a> {
    /// The operator
    pub operator: SymbolNode<'a>,
    first: Box<Node<'a>>,
    second: Box<Node<'a>>,
}

impl<'a> BinaryOp<'a> {
    /// Create a binary operation
    ///
    /// # Panics
    /// When `operator` wasn't tokenized as [`TokenClass::Binary`].
    pub fn new<F, S>(operator: SymbolNode<'a>, first: F, second: S) -> Self
    where
        F: Into<Node<'a>>,
        S: Into<Node<'a>>,
    {
        assert_eq!(
            operator.class,
            TokenClass::Binary,
            "{:?} is not a binary operator",
            operator.text
        );
        BinaryOp {
            operator,
            first: Box::new(first.into()),
            second: Box::new(second.into()),
        }
    }

    /// The first operand
    pub fn first(&self) -> &Node<'a> {
        &self.first
    }

    /// The second operand
    pub fn second(&self) -> &Node<'a> {
        &self.second
    }
}

/// An operator between its operands, i.e. a `/` fraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfixOp<'a> {
    /// The operator
    pub operator: SymbolNode<'a>,
    first: Box<Node<'a>>,
    second: Box<Node<'a>>,
}

impl<'a> InfixOp<'a> {
    /// Create an infix operation
    ///
    /// # Panics
    /// When `operator` wasn't tokenized as [`TokenClass::Infix`].
    pub fn new<F, S>(operator: SymbolNode<'a>, first: F, second: S) -> Self
    where
        F: Into<Node<'a>>,
        S: Into<Node<'a>>,
    {
        assert_eq!(
            operator.class,
            TokenClass::Infix,
            "{:?} is not an infix operator",
            operator.text
        );
        InfixOp {
            operator,
            first: Box::new(first.into()),
            second: Box::new(second.into()),
        }
    }

    /// The left operand
    pub fn first(&self) -> &Node<'a> {
        &self.first
    }

    /// The right operand
    pub fn second(&self) -> &Node<'a> {
        &self.second
    }
}

/// An expression with a subscript, a superscript or both
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubSup<'a> {
    base: Box<Node<'a>>,
    sub: Option<Box<Node<'a>>>,
    sup: Option<Box<Node<'a>>>,
}

impl<'a> SubSup<'a> {
    /// Attach scripts to a base
    ///
    /// # Panics
    /// When both scripts are `None`.
    pub fn new<B>(base: B, sub: Option<Node<'a>>, sup: Option<Node<'a>>) -> Self
    where
        B: Into<Node<'a>>,
    {
        assert!(
            sub.is_some() || sup.is_some(),
            "a scripted expression needs at least one script"
        );
        SubSup {
            base: Box::new(base.into()),
            sub: sub.map(Box::new),
            sup: sup.map(Box::new),
        }
    }

    /// Create with only a subscript
    pub fn with_sub<B, S>(base: B, sub: S) -> Self
    where
        B: Into<Node<'a>>,
        S: Into<Node<'a>>,
    {
        Self::new(base, Some(sub.into()), None)
    }

    /// Create with only a superscript
    pub fn with_sup<B, S>(base: B, sup: S) -> Self
    where
        B: Into<Node<'a>>,
        S: Into<Node<'a>>,
    {
        Self::new(base, None, Some(sup.into()))
    }

    /// The scripted expression
    pub fn base(&self) -> &Node<'a> {
        &self.base
    }

    /// The subscript
    pub fn sub(&self) -> Option<&Node<'a>> {
        self.sub.as_deref()
    }

    /// The superscript
    pub fn sup(&self) -> Option<&Node<'a>> {
        self.sup.as_deref()
    }
}

/// A resolved color
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Color {
    /// The flattened source text the color was resolved from
    pub text: String,
    /// Red
    pub r: u8,
    /// Green
    pub g: u8,
    /// Blue
    pub b: u8,
}

impl Color {
    /// Create a color from its source text and components
    pub fn new<S: Into<String>>(text: S, r: u8, g: u8, b: u8) -> Self {
        Color {
            text: text.into(),
            r,
            g,
            b,
        }
    }
}

/// A node of a parsed expression
#[derive(Default, Debug, Clone, PartialEq, Eq)]
pub enum Node<'a> {
    /// Explicitly nothing, e.g. an empty matrix cell
    #[default]
    Empty,
    /// A raw number
    Number(&'a str),
    /// Raw text
    Text(&'a str),
    /// Anything unrecognized, usually a single character
    Identifier(&'a str),
    /// A recognized symbol
    Symbol(SymbolNode<'a>),
    /// Expressions next to each other
    Sequence(Vec<Node<'a>>),
    /// A bracketed expression
    Paren(Paren<'a>),
    /// Brackets that only grouped their body and are not rendered
    Group(Paren<'a>),
    /// A matrix
    Matrix(Matrix<'a>),
    /// A unary operator application
    UnaryOp(UnaryOp<'a>),
    /// A binary operator application
    BinaryOp(BinaryOp<'a>),
    /// An infix operator application
    InfixOp(InfixOp<'a>),
    /// Sub- and superscripts
    SubSup(SubSup<'a>),
    /// A resolved color
    Color(Color),
}

impl<'a> Node<'a> {
    /// Concatenate two nodes into a flat sequence
    ///
    /// # Example
    /// ```
    /// use asciimath_mathml::Node;
    ///
    /// let seq = Node::Identifier("a").concat(Node::Identifier("b"));
    /// let seq = seq.concat(Node::Sequence(vec![Node::Number("1"), Node::Number("2")]));
    /// assert_eq!(
    ///     seq,
    ///     Node::Sequence(vec![
    ///         Node::Identifier("a"),
    ///         Node::Identifier("b"),
    ///         Node::Number("1"),
    ///         Node::Number("2"),
    ///     ])
    /// );
    /// ```
    pub fn concat(self, other: Node<'a>) -> Node<'a> {
        match (self, other) {
            (Node::Sequence(mut left), Node::Sequence(right)) => {
                left.extend(right);
                Node::Sequence(left)
            }
            (Node::Sequence(mut left), right) => {
                left.push(right);
                Node::Sequence(left)
            }
            (left, Node::Sequence(mut right)) => {
                right.insert(0, left);
                Node::Sequence(right)
            }
            (left, right) => Node::Sequence(vec![left, right]),
        }
    }

    /// Turn redundant brackets into a [`Group`][Node::Group]
    ///
    /// Only brackets with a dedicated opening and closing form are redundant, so `|x|` keeps its
    /// bars.
    pub fn unwrap_paren(self) -> Node<'a> {
        match self {
            Node::Paren(paren) if paren.is_unwrappable() => Node::Group(paren),
            node => node,
        }
    }

    /// The symbol if this is a symbol node
    pub fn as_symbol(&self) -> Option<&SymbolNode<'a>> {
        match self {
            Node::Symbol(symbol) => Some(symbol),
            _ => None,
        }
    }
}

// macro to derive from for component types
macro_rules! node_from {
    ($from:ty => $to:ident) => {
        impl<'a> From<$from> for Node<'a> {
            fn from(inp: $from) -> Self {
                Node::$to(inp)
            }
        }
    };
}

node_from!(SymbolNode<'a> => Symbol);
node_from!(Matrix<'a> => Matrix);
node_from!(UnaryOp<'a> => UnaryOp);
node_from!(BinaryOp<'a> => BinaryOp);
node_from!(InfixOp<'a> => InfixOp);
node_from!(SubSup<'a> => SubSup);
node_from!(Color => Color);

impl<'a> From<Paren<'a>> for Node<'a> {
    fn from(paren: Paren<'a>) -> Self {
        Node::Paren(paren)
    }
}

impl<'a> FromIterator<Node<'a>> for Node<'a> {
    /// Collect into a flat sequence
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Node<'a>>,
    {
        Node::Sequence(iter.into_iter().fold(Vec::new(), |mut acc, node| {
            match node {
                Node::Sequence(nodes) => acc.extend(nodes),
                node => acc.push(node),
            }
            acc
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::{BinaryOp, Matrix, Node, Paren, Row, SubSup, SymbolNode, UnaryOp};
    use crate::symbols::{Symbol, TokenClass};

    fn sym(symbol: Symbol, text: &str, class: TokenClass) -> SymbolNode<'_> {
        SymbolNode::new(Some(symbol), text, class)
    }

    #[test]
    fn concat_flattens() {
        let left = Node::Sequence(vec![Node::Identifier("a"), Node::Identifier("b")]);
        let right = Node::Sequence(vec![Node::Identifier("c")]);
        assert_eq!(
            Node::Number("0").concat(left.concat(right)),
            Node::Sequence(vec![
                Node::Number("0"),
                Node::Identifier("a"),
                Node::Identifier("b"),
                Node::Identifier("c"),
            ])
        );
    }

    #[test]
    fn collect_flattens() {
        let seq: Node = [
            Node::Identifier("x"),
            Node::Sequence(vec![Node::Identifier("y"), Node::Identifier("z")]),
        ]
        .into_iter()
        .collect();
        assert_eq!(
            seq,
            Node::Sequence(vec![
                Node::Identifier("x"),
                Node::Identifier("y"),
                Node::Identifier("z"),
            ])
        );
    }

    #[test]
    fn unwrap_paren() {
        let lparen = sym(Symbol::LParen, "(", TokenClass::LeftParen);
        let rparen = sym(Symbol::RParen, ")", TokenClass::RightParen);
        let vbar = sym(Symbol::VBar, "|", TokenClass::LeftRightParen);

        let paren = Paren::new(Some(lparen), Some(Node::Identifier("x")), Some(rparen));
        assert_eq!(
            Node::Paren(paren.clone()).unwrap_paren(),
            Node::Group(paren)
        );

        let open = Paren::new(Some(lparen), Some(Node::Identifier("x")), None);
        assert!(matches!(Node::Paren(open).unwrap_paren(), Node::Group(_)));

        let bars = Node::Paren(Paren::new(Some(vbar), None, Some(vbar)));
        assert_eq!(bars.clone().unwrap_paren(), bars);

        assert_eq!(Node::Number("1").unwrap_paren(), Node::Number("1"));
    }

    #[test]
    fn matrix_indexing() {
        let matrix = Matrix::new(
            sym(Symbol::LBracket, "[", TokenClass::LeftParen),
            [
                Row::new([Node::Number("1"), Node::Number("2")]),
                Row::new([Node::Empty]),
            ],
            sym(Symbol::RBracket, "]", TokenClass::RightParen),
        );
        assert_eq!(matrix.num_rows(), 2);
        assert_eq!(matrix[[0, 1]], Node::Number("2"));
        assert_eq!(matrix[1].len(), 1);
        assert_eq!(matrix[[1, 0]], Node::Empty);
    }

    #[test]
    #[should_panic(expected = "not a unary operator")]
    fn unary_checks_class() {
        UnaryOp::new(sym(Symbol::Frac, "frac", TokenClass::Binary), Node::Empty);
    }

    #[test]
    #[should_panic(expected = "not a binary operator")]
    fn binary_checks_class() {
        BinaryOp::new(
            sym(Symbol::Sqrt, "sqrt", TokenClass::Unary),
            Node::Empty,
            Node::Empty,
        );
    }

    #[test]
    #[should_panic(expected = "at least one script")]
    fn subsup_needs_a_script() {
        SubSup::new(Node::Identifier("x"), None, None);
    }

    #[test]
    fn subsup_accessors() {
        let scripted = SubSup::with_sup(Node::Identifier("x"), Node::Number("2"));
        assert_eq!(scripted.base(), &Node::Identifier("x"));
        assert_eq!(scripted.sub(), None);
        assert_eq!(scripted.sup(), Some(&Node::Number("2")));
    }
}
