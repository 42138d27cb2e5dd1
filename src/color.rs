//! Color names and the resolution of `color` operands
use crate::tree::{Color, Node};

/// The named colors understood by `color`
pub const COLOR_NAMES: [(&str, (u8, u8, u8)); 16] = [
    ("aqua", (0, 255, 255)),
    ("black", (0, 0, 0)),
    ("blue", (0, 0, 255)),
    ("fuchsia", (255, 0, 255)),
    ("gray", (128, 128, 128)),
    ("green", (0, 128, 0)),
    ("lime", (0, 255, 0)),
    ("maroon", (128, 0, 0)),
    ("navy", (0, 0, 128)),
    ("olive", (128, 128, 0)),
    ("purple", (128, 0, 128)),
    ("red", (255, 0, 0)),
    ("silver", (192, 192, 192)),
    ("teal", (0, 128, 128)),
    ("white", (255, 255, 255)),
    ("yellow", (255, 255, 0)),
];

/// Get the rgb components of a named color, ignoring case
///
/// # Example
/// ```
/// use asciimath_mathml::color_by_name;
///
/// assert_eq!(color_by_name("Teal"), Some((0, 128, 128)));
/// assert_eq!(color_by_name("orange"), None);
/// ```
pub fn color_by_name(name: &str) -> Option<(u8, u8, u8)> {
    COLOR_NAMES
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|&(_, rgb)| rgb)
}

fn hex_digit(byte: u8) -> Option<u8> {
    // to_digit only yields values below 16
    (byte as char).to_digit(16).map(|digit| digit as u8)
}

/// Parse `#rgb` or `#rrggbb`
fn parse_hex(text: &str) -> Option<(u8, u8, u8)> {
    let digits = text.strip_prefix('#')?.as_bytes();
    let digits: Vec<u8> = digits.iter().map(|&b| hex_digit(b)).collect::<Option<_>>()?;
    match digits[..] {
        [r, g, b] => Some(((r << 4) | r, (g << 4) | g, (b << 4) | b)),
        [r1, r2, g1, g2, b1, b2] => Some(((r1 << 4) | r2, (g1 << 4) | g2, (b1 << 4) | b2)),
        _ => None,
    }
}

/// Append the source text of every leaf of `node`, depth first
fn flatten_text(node: &Node, out: &mut String) {
    match node {
        Node::Empty | Node::Color(_) | Node::Matrix(_) => {}
        Node::Number(text) | Node::Text(text) | Node::Identifier(text) => out.push_str(text),
        Node::Symbol(symbol) => out.push_str(symbol.text),
        Node::Sequence(nodes) => {
            for node in nodes {
                flatten_text(node, out);
            }
        }
        Node::Group(paren) => {
            if let Some(body) = paren.body() {
                flatten_text(body, out);
            }
        }
        Node::Paren(paren) => {
            if let Some(left) = paren.left {
                out.push_str(left.text);
            }
            if let Some(body) = paren.body() {
                flatten_text(body, out);
            }
            if let Some(right) = paren.right {
                out.push_str(right.text);
            }
        }
        Node::UnaryOp(op) => {
            out.push_str(op.operator.text);
            flatten_text(op.operand(), out);
        }
        Node::BinaryOp(op) => {
            out.push_str(op.operator.text);
            flatten_text(op.first(), out);
            flatten_text(op.second(), out);
        }
        Node::InfixOp(op) => {
            flatten_text(op.first(), out);
            out.push_str(op.operator.text);
            flatten_text(op.second(), out);
        }
        Node::SubSup(scripted) => {
            flatten_text(scripted.base(), out);
            if let Some(sub) = scripted.sub() {
                flatten_text(sub, out);
            }
            if let Some(sup) = scripted.sup() {
                flatten_text(sup, out);
            }
        }
    }
}

/// Resolve an operand to a color
///
/// The operand is flattened back to text and read as `#rgb`, `#rrggbb` or a [color
/// name][COLOR_NAMES]. Anything else is black.
pub(crate) fn resolve(node: &Node) -> Color {
    let mut text = String::new();
    flatten_text(node, &mut text);
    let (r, g, b) = parse_hex(&text)
        .or_else(|| color_by_name(&text))
        .unwrap_or((0, 0, 0));
    log::trace!("resolved color {text:?} to ({r}, {g}, {b})");
    Color::new(text, r, g, b)
}
