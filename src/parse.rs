use crate::color;
use crate::prefix_map::PrefixMap;
use crate::symbols::{Symbol, SymbolEntry, TokenClass, Transform};
use crate::tokenizer::{Token, Tokenizer};
use crate::tree::{BinaryOp, InfixOp, Matrix, Node, Paren, Row, SubSup, SymbolNode, UnaryOp};

fn concat<'a>(expr: Option<Node<'a>>, next: Node<'a>) -> Node<'a> {
    match expr {
        Some(expr) => expr.concat(next),
        None => next,
    }
}

fn convert<'a>(node: Node<'a>, transform: Option<Transform>) -> Node<'a> {
    match transform {
        Some(Transform::ResolveColor) => Node::Color(color::resolve(&node)),
        None => node,
    }
}

fn is_separator(node: &Node) -> bool {
    matches!(node, Node::Identifier(","))
}

/// Rows must be bracketed by exactly `(`...`)` or `[`...`]`
fn is_matrix_row(paren: &Paren) -> bool {
    match (paren.left, paren.right) {
        (Some(left), Some(right)) => {
            left.class == TokenClass::LeftParen
                && right.class == TokenClass::RightParen
                && ((left.is(Symbol::LParen, "(") && right.is(Symbol::RParen, ")"))
                    || (left.is(Symbol::LBracket, "[") && right.is(Symbol::RBracket, "]")))
        }
        _ => false,
    }
}

/// Check that a bracket body is rows separated by commas
///
/// A body that is a single bracketed expression counts as one row.
fn is_matrix(body: &Node) -> bool {
    let (rows, seps): (Vec<&Node>, Vec<&Node>) = match body {
        Node::Sequence(nodes) => (
            nodes.iter().step_by(2).collect(),
            nodes.iter().skip(1).step_by(2).collect(),
        ),
        Node::Paren(_) => (vec![body], Vec::new()),
        _ => return false,
    };
    !rows.is_empty()
        && rows.len() > seps.len()
        && seps.iter().all(|sep| is_separator(sep))
        && rows
            .iter()
            .all(|row| matches!(row, Node::Paren(paren) if is_matrix_row(paren)))
}

fn matrix_cell(mut chunk: Vec<Node<'_>>) -> Node<'_> {
    match chunk.len() {
        0 => Node::Empty,
        1 => chunk.remove(0),
        _ => Node::Sequence(chunk),
    }
}

/// Split a row's contents into comma separated cells
fn matrix_row(row: Node<'_>) -> Row<'_> {
    let content = match row {
        Node::Paren(paren) | Node::Group(paren) => paren.into_body(),
        _ => None,
    };
    match content {
        Some(Node::Sequence(nodes)) => {
            let mut cells = Vec::new();
            let mut chunk = Vec::new();
            for node in nodes {
                if is_separator(&node) {
                    cells.push(matrix_cell(std::mem::take(&mut chunk)));
                } else {
                    chunk.push(node);
                }
            }
            cells.push(matrix_cell(chunk));
            Row::new(cells)
        }
        Some(cell) => Row::new([cell]),
        None => Row::new([Node::Empty]),
    }
}

/// Build a closed bracket expression, converting it to a matrix if it looks like one
fn into_matrix<'a>(left: SymbolNode<'a>, body: Option<Node<'a>>, right: SymbolNode<'a>) -> Node<'a> {
    let body = match body {
        Some(body) if is_matrix(&body) => body,
        body => return Paren::new(Some(left), body, Some(right)).into(),
    };
    let rows: Vec<_> = match body {
        Node::Sequence(nodes) => nodes.into_iter().step_by(2).map(matrix_row).collect(),
        row => vec![matrix_row(row)],
    };
    log::trace!(
        "matrix {}{}: {} rows",
        left.text,
        right.text,
        rows.len()
    );
    Matrix::new(left, rows, right).into()
}

fn next_paren<'a, T>(tokens: &mut Tokenizer<'a, '_, T>, open: Token<'a>) -> Node<'a>
where
    T: PrefixMap<SymbolEntry>,
{
    let close = if open.class == TokenClass::LeftParen {
        TokenClass::RightParen
    } else {
        TokenClass::LeftRightParen
    };

    let token = tokens.next_token();
    if token.class == close {
        return Paren::new(Some(open.into()), None, Some(token.into())).into();
    }
    tokens.push_back(token);

    let body = next_expression(tokens, Some(close));
    let token = tokens.next_token();
    if token.class == close {
        into_matrix(open.into(), body, token.into())
    } else {
        tokens.push_back(token);
        if open.class == TokenClass::LeftRightParen {
            // an unmatched `|` is just a symbol
            let bar = SymbolNode::from(open).into();
            match body {
                Some(body) => concat(Some(bar), body),
                None => bar,
            }
        } else {
            Paren::new(Some(open.into()), body, None).into()
        }
    }
}

fn next_operand<'a, T>(tokens: &mut Tokenizer<'a, '_, T>, close: Option<TokenClass>) -> Node<'a>
where
    T: PrefixMap<SymbolEntry>,
{
    next_simple(tokens, close).map_or(Node::Identifier(""), Node::unwrap_paren)
}

fn next_simple<'a, T>(
    tokens: &mut Tokenizer<'a, '_, T>,
    close: Option<TokenClass>,
) -> Option<Node<'a>>
where
    T: PrefixMap<SymbolEntry>,
{
    let token = tokens.next_token();
    match token.class {
        TokenClass::Eof => None,
        TokenClass::LeftParen | TokenClass::LeftRightParen => Some(next_paren(tokens, token)),
        TokenClass::RightParen if close.is_some() => {
            tokens.push_back(token);
            None
        }
        TokenClass::Unary => {
            let operand = next_operand(tokens, close);
            let operand = convert(operand, token.converter.and_then(|conv| conv.operand));
            Some(UnaryOp::new(token.into(), operand).into())
        }
        TokenClass::Binary => {
            let first = next_operand(tokens, close);
            let second = next_operand(tokens, close);
            let conv = token.converter;
            let first = convert(first, conv.and_then(|conv| conv.first));
            let second = convert(second, conv.and_then(|conv| conv.second));
            Some(BinaryOp::new(token.into(), first, second).into())
        }
        TokenClass::Number => Some(Node::Number(token.text)),
        TokenClass::Text => Some(Node::Text(token.text)),
        TokenClass::Identifier => Some(Node::Identifier(token.text)),
        TokenClass::Symbol | TokenClass::Infix | TokenClass::RightParen => {
            Some(SymbolNode::from(token).into())
        }
    }
}

fn next_intermediate<'a, T>(
    tokens: &mut Tokenizer<'a, '_, T>,
    close: Option<TokenClass>,
) -> Option<Node<'a>>
where
    T: PrefixMap<SymbolEntry>,
{
    let base = next_simple(tokens, close)?;
    let token = tokens.next_token();
    let (sub, sup) = if token.is_infix(Symbol::Sub) {
        let sub = next_simple(tokens, close);
        let sup = if sub.is_some() {
            let probe = tokens.next_token();
            if probe.is_infix(Symbol::Sup) {
                next_simple(tokens, close)
            } else {
                tokens.push_back(probe);
                None
            }
        } else {
            None
        };
        (sub, sup)
    } else if token.is_infix(Symbol::Sup) {
        (None, next_simple(tokens, close))
    } else {
        tokens.push_back(token);
        (None, None)
    };

    Some(if sub.is_none() && sup.is_none() {
        base
    } else {
        SubSup::new(
            base,
            sub.map(Node::unwrap_paren),
            sup.map(Node::unwrap_paren),
        )
        .into()
    })
}

fn next_expression<'a, T>(
    tokens: &mut Tokenizer<'a, '_, T>,
    close: Option<TokenClass>,
) -> Option<Node<'a>>
where
    T: PrefixMap<SymbolEntry>,
{
    let mut expr = None;
    while let Some(first) = next_intermediate(tokens, close) {
        let token = tokens.next_token();
        if token.is_infix(Symbol::Frac) {
            // a trailing `/` is dropped
            let node = match next_intermediate(tokens, close) {
                Some(second) => {
                    InfixOp::new(token.into(), first.unwrap_paren(), second.unwrap_paren()).into()
                }
                None => first,
            };
            expr = Some(concat(expr, node));
        } else if token.class == TokenClass::Eof {
            expr = Some(concat(expr, first));
            break;
        } else {
            expr = Some(concat(expr, first));
            tokens.push_back(token);
            if Some(token.class) == close {
                break;
            }
        }
    }
    expr
}

/// Parse tokens from a tokenizer with any symbol map
///
/// Returns `None` when there are no tokens.
///
/// # Example
/// ```
/// use asciimath_mathml::prefix_map::LinearPrefixMap;
/// use asciimath_mathml::{parse_tokens, Node, Tokenizer, ASCIIMATH_SYMBOLS};
///
/// let symbols = LinearPrefixMap::from_vec(ASCIIMATH_SYMBOLS);
/// let parsed = parse_tokens(Tokenizer::with_symbols("x y", &symbols));
/// assert_eq!(
///     parsed,
///     Some(Node::Sequence(vec![Node::Identifier("x"), Node::Identifier("y")]))
/// );
/// ```
pub fn parse_tokens<'a, T>(mut tokens: Tokenizer<'a, '_, T>) -> Option<Node<'a>>
where
    T: PrefixMap<SymbolEntry>,
{
    next_expression(&mut tokens, None)
}

/// Parse an asciimath string with the standard symbols
///
/// Returns `None` for empty or whitespace-only input, any other input parses to some tree.
pub fn parse(inp: &str) -> Option<Node<'_>> {
    parse_tokens(Tokenizer::new(inp))
}

#[cfg(test)]
mod tests {
    use super::parse;
    use crate::symbols::{Symbol, TokenClass};
    use crate::tree::{
        BinaryOp, Color, InfixOp, Matrix, Node, Paren, Row, SubSup, SymbolNode, UnaryOp,
    };

    fn sym(symbol: Symbol, text: &str, class: TokenClass) -> SymbolNode<'_> {
        SymbolNode::new(Some(symbol), text, class)
    }

    fn lparen() -> SymbolNode<'static> {
        sym(Symbol::LParen, "(", TokenClass::LeftParen)
    }

    fn rparen() -> SymbolNode<'static> {
        sym(Symbol::RParen, ")", TokenClass::RightParen)
    }

    fn ident(text: &str) -> Node<'_> {
        Node::Identifier(text)
    }

    #[test]
    fn empty() {
        assert_eq!(parse(""), None);
        assert_eq!(parse("  \n"), None);
    }

    #[test]
    fn no_precedence() {
        assert_eq!(
            parse("a+b*c"),
            Some(Node::Sequence(vec![
                ident("a"),
                sym(Symbol::Plus, "+", TokenClass::Symbol).into(),
                ident("b"),
                sym(Symbol::Cdot, "*", TokenClass::Symbol).into(),
                ident("c"),
            ]))
        );
    }

    #[test]
    fn sub_sup() {
        assert_eq!(
            parse("x_i^2"),
            Some(SubSup::new(ident("x"), Some(ident("i")), Some(Node::Number("2"))).into())
        );
        assert_eq!(
            parse("x^2_i"),
            Some(Node::Sequence(vec![
                SubSup::with_sup(ident("x"), Node::Number("2")).into(),
                sym(Symbol::Sub, "_", TokenClass::Infix).into(),
                ident("i"),
            ]))
        );
    }

    #[test]
    fn missing_scripts() {
        assert_eq!(parse("a_"), Some(ident("a")));
        assert_eq!(parse("a^"), Some(ident("a")));
        assert_eq!(
            parse("_a"),
            Some(Node::Sequence(vec![
                sym(Symbol::Sub, "_", TokenClass::Infix).into(),
                ident("a"),
            ]))
        );
    }

    #[test]
    fn scripts_unwrap_parens() {
        let group = Node::Group(Paren::new(
            Some(lparen()),
            Some(Node::Sequence(vec![
                ident("n"),
                sym(Symbol::Eq, "=", TokenClass::Symbol).into(),
                Node::Number("0"),
            ])),
            Some(rparen()),
        ));
        assert_eq!(
            parse("x_(n=0)"),
            Some(SubSup::with_sub(ident("x"), group).into())
        );
    }

    #[test]
    fn infix_fraction() {
        let frac = sym(Symbol::Frac, "/", TokenClass::Infix);
        assert_eq!(
            parse("a/b c"),
            Some(Node::Sequence(vec![
                InfixOp::new(frac, ident("a"), ident("b")).into(),
                ident("c"),
            ]))
        );
        assert_eq!(parse("a/"), Some(ident("a")));
        let group = |body| Node::Group(Paren::new(Some(lparen()), Some(body), Some(rparen())));
        assert_eq!(
            parse("(a)/(b)"),
            Some(InfixOp::new(frac, group(ident("a")), group(ident("b"))).into())
        );
    }

    #[test]
    fn stray_fraction() {
        assert_eq!(
            parse("/a"),
            Some(Node::Sequence(vec![
                sym(Symbol::Frac, "/", TokenClass::Infix).into(),
                ident("a"),
            ]))
        );
    }

    #[test]
    fn unary_operands() {
        let sqrt = sym(Symbol::Sqrt, "sqrt", TokenClass::Unary);
        assert_eq!(parse("sqrt x"), Some(UnaryOp::new(sqrt, ident("x")).into()));
        assert_eq!(parse("sqrt"), Some(UnaryOp::new(sqrt, ident("")).into()));
        assert_eq!(
            parse("sqrt(x)"),
            Some(
                UnaryOp::new(
                    sqrt,
                    Node::Group(Paren::new(Some(lparen()), Some(ident("x")), Some(rparen())))
                )
                .into()
            )
        );
    }

    #[test]
    fn binary_operands() {
        let frac = sym(Symbol::Frac, "frac", TokenClass::Binary);
        assert_eq!(
            parse("frac a b"),
            Some(BinaryOp::new(frac, ident("a"), ident("b")).into())
        );
        assert_eq!(
            parse("frac a"),
            Some(BinaryOp::new(frac, ident("a"), ident("")).into())
        );
    }

    #[test]
    fn color_is_resolved() {
        let color = sym(Symbol::Color, "color", TokenClass::Binary);
        assert_eq!(
            parse("color(red)(x)"),
            Some(
                BinaryOp::new(
                    color,
                    Color::new("red", 255, 0, 0),
                    Node::Group(Paren::new(Some(lparen()), Some(ident("x")), Some(rparen())))
                )
                .into()
            )
        );
        assert_eq!(
            parse("color(#0f0) y"),
            Some(BinaryOp::new(color, Color::new("#0f0", 0, 255, 0), ident("y")).into())
        );
    }

    #[test]
    fn unmatched_brackets() {
        assert_eq!(
            parse("(a"),
            Some(Paren::new(Some(lparen()), Some(ident("a")), None).into())
        );
        assert_eq!(
            parse("a)"),
            Some(Node::Sequence(vec![ident("a"), rparen().into()]))
        );
        let vbar = sym(Symbol::VBar, "|", TokenClass::LeftRightParen);
        assert_eq!(
            parse("|a"),
            Some(Node::Sequence(vec![vbar.into(), ident("a")]))
        );
    }

    #[test]
    fn open_close_brackets() {
        let vbar = sym(Symbol::VBar, "|", TokenClass::LeftRightParen);
        assert_eq!(
            parse("|x|"),
            Some(Paren::new(Some(vbar), Some(ident("x")), Some(vbar)).into())
        );
        assert_eq!(
            parse("||"),
            Some(Paren::new(Some(vbar), None, Some(vbar)).into())
        );
    }

    #[test]
    fn empty_brackets() {
        assert_eq!(
            parse("()"),
            Some(Paren::new(Some(lparen()), None, Some(rparen())).into())
        );
    }

    #[test]
    fn pass_through_brackets() {
        let open = SymbolNode::new(None, "{:", TokenClass::LeftParen);
        let close = SymbolNode::new(None, ":}", TokenClass::RightParen);
        assert_eq!(
            parse("{:x:}"),
            Some(Paren::new(Some(open), Some(ident("x")), Some(close)).into())
        );
    }

    #[test]
    fn matrix() {
        let parsed = parse("[(1,2),(3,4)]");
        let expected = Matrix::new(
            sym(Symbol::LBracket, "[", TokenClass::LeftParen),
            [
                Row::new([Node::Number("1"), Node::Number("2")]),
                Row::new([Node::Number("3"), Node::Number("4")]),
            ],
            sym(Symbol::RBracket, "]", TokenClass::RightParen),
        );
        assert_eq!(parsed, Some(expected.into()));
    }

    #[test]
    fn jagged_matrix() {
        let parsed = parse("((1,2),(3))");
        let expected = Matrix::new(
            lparen(),
            [
                Row::new([Node::Number("1"), Node::Number("2")]),
                Row::new([Node::Number("3")]),
            ],
            rparen(),
        );
        assert_eq!(parsed, Some(expected.into()));
    }

    #[test]
    fn matrix_cells() {
        let Some(Node::Matrix(matrix)) = parse("((a+b,,),[c])") else {
            panic!("not a matrix");
        };
        assert_eq!(matrix.num_rows(), 2);
        assert_eq!(
            matrix[0].to_vec(),
            [
                Node::Sequence(vec![
                    ident("a"),
                    sym(Symbol::Plus, "+", TokenClass::Symbol).into(),
                    ident("b"),
                ]),
                Node::Empty,
                Node::Empty,
            ]
        );
        assert_eq!(matrix[[1, 0]], ident("c"));
    }

    #[test]
    fn single_row_matrix() {
        let parsed = parse("[(a,b)]");
        let expected = Matrix::new(
            sym(Symbol::LBracket, "[", TokenClass::LeftParen),
            [Row::new([ident("a"), ident("b")])],
            sym(Symbol::RBracket, "]", TokenClass::RightParen),
        );
        assert_eq!(parsed, Some(expected.into()));
    }

    #[test]
    fn not_matrices() {
        // separators must be commas
        assert!(matches!(parse("((1);(2))"), Some(Node::Paren(_))));
        // rows must use plain brackets
        assert!(matches!(parse("({1,2},{3,4})"), Some(Node::Paren(_))));
        assert!(matches!(parse("(left(1,2right),(3,4))"), Some(Node::Paren(_))));
        // rows must alternate with separators
        assert!(matches!(parse("((1,2)(3,4))"), Some(Node::Paren(_))));
        assert!(matches!(parse("(1,2)"), Some(Node::Paren(_))));
    }
}
