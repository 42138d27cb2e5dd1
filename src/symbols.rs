//! The asciimath symbol table
//!
//! Every recognized lexeme maps to a [`SymbolEntry`] that tells the tokenizer which
//! [`TokenClass`] to emit, which semantic [`Symbol`] the lexeme stands for, and whether the
//! parser should transform the operands of the operator. Several lexemes can share a symbol, e.g.
//! `"**"` and `"ast"` are both [`Symbol::Ast`].
#[cfg(not(feature = "qp-trie"))]
use crate::prefix_map::HashPrefixMap;
use crate::prefix_map::PrefixMap;
#[cfg(feature = "qp-trie")]
use crate::prefix_map::QpTriePrefixMap;
use lazy_static::lazy_static;
use strum_macros::{EnumIter, IntoStaticStr};

/// The semantic identity of a recognized symbol
///
/// Display metadata is keyed by this, so two spellings of the same symbol always render the same
/// way.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Symbol {
    // operations
    Plus,
    Minus,
    Cdot,
    Ast,
    Star,
    Slash,
    Backslash,
    Setminus,
    Times,
    Ltimes,
    Rtimes,
    Bowtie,
    Div,
    Circ,
    Oplus,
    Otimes,
    Odot,
    Sum,
    Prod,
    Wedge,
    BigWedge,
    Vee,
    BigVee,
    Cap,
    BigCap,
    Cup,
    BigCup,
    // relations
    Eq,
    Ne,
    Assign,
    Lt,
    Mlt,
    Gt,
    Mgt,
    Le,
    Ge,
    Prec,
    Succ,
    Preceq,
    Succeq,
    In,
    NotIn,
    Subset,
    Supset,
    SubsetEq,
    SupsetEq,
    Equiv,
    Sim,
    Cong,
    Approx,
    Propto,
    // logic
    And,
    Or,
    Not,
    Implies,
    If,
    Iff,
    Forall,
    Exists,
    Bot,
    Top,
    Vdash,
    Models,
    // brackets
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    VBar,
    LAngle,
    RAngle,
    // misc
    Integral,
    Dx,
    Dy,
    Dz,
    Dt,
    ContourIntegral,
    Partial,
    Nabla,
    Pm,
    Mp,
    EmptySet,
    Infty,
    Aleph,
    Ellipsis,
    Therefore,
    Because,
    Angle,
    Triangle,
    Prime,
    Tilde,
    Nbsp,
    Frown,
    Quad,
    Qquad,
    Cdots,
    Vdots,
    Ddots,
    Diamond,
    Square,
    LFloor,
    RFloor,
    LCeiling,
    RCeiling,
    DoubleStruckC,
    DoubleStruckN,
    DoubleStruckQ,
    DoubleStruckR,
    DoubleStruckZ,
    F,
    G,
    // functions
    Lim,
    CapitalLim,
    Min,
    Max,
    Sin,
    CapitalSin,
    Cos,
    CapitalCos,
    Tan,
    CapitalTan,
    Sinh,
    CapitalSinh,
    Cosh,
    CapitalCosh,
    Tanh,
    CapitalTanh,
    Cot,
    CapitalCot,
    Sec,
    CapitalSec,
    Csc,
    CapitalCsc,
    Arcsin,
    Arccos,
    Arctan,
    Coth,
    Sech,
    Csch,
    Exp,
    Abs,
    Norm,
    Floor,
    Ceil,
    Log,
    CapitalLog,
    Ln,
    CapitalLn,
    Det,
    Dim,
    Ker,
    Mod,
    Gcd,
    Lcm,
    Lub,
    Glb,
    // arrows
    UpArrow,
    DownArrow,
    RightArrow,
    To,
    RightArrowTail,
    TwoHeadRightArrow,
    TwoHeadRightArrowTail,
    MapsTo,
    LeftArrow,
    LeftRightArrow,
    DoubleRightArrow,
    DoubleLeftArrow,
    DoubleLeftRightArrow,
    // operator tags
    Sqrt,
    Root,
    Frac,
    Stackrel,
    Overset,
    Underset,
    Color,
    Sub,
    Sup,
    Cancel,
    // accents
    Hat,
    Overline,
    Vec,
    Dot,
    Ddot,
    Overarc,
    Underline,
    Underbrace,
    Overbrace,
    // fonts
    Bold,
    DoubleStruck,
    Italic,
    BoldItalic,
    Script,
    BoldScript,
    Monospace,
    Fraktur,
    BoldFraktur,
    SansSerif,
    BoldSansSerif,
    SansSerifItalic,
    SansSerifBoldItalic,
    Roman,
    // greek
    Alpha,
    CapitalAlpha,
    Beta,
    CapitalBeta,
    Gamma,
    CapitalGamma,
    Delta,
    CapitalDelta,
    Epsilon,
    CapitalEpsilon,
    VarEpsilon,
    Zeta,
    CapitalZeta,
    Eta,
    CapitalEta,
    Theta,
    CapitalTheta,
    VarTheta,
    Iota,
    CapitalIota,
    Kappa,
    CapitalKappa,
    Lambda,
    CapitalLambda,
    Mu,
    CapitalMu,
    Nu,
    CapitalNu,
    Xi,
    CapitalXi,
    Omicron,
    CapitalOmicron,
    Pi,
    CapitalPi,
    Rho,
    CapitalRho,
    Sigma,
    CapitalSigma,
    Tau,
    CapitalTau,
    Upsilon,
    CapitalUpsilon,
    Phi,
    CapitalPhi,
    VarPhi,
    Chi,
    CapitalChi,
    Psi,
    CapitalPsi,
    Omega,
    CapitalOmega,
}

impl Symbol {
    /// The variant name, used for diagnostics
    pub fn name(self) -> &'static str {
        self.into()
    }
}

/// The parse role of a token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenClass {
    /// A symbol with no special parse role
    Symbol,
    /// Quoted or `text(...)` text
    Text,
    /// A number
    Number,
    /// An unrecognized character
    Identifier,
    /// An operator that takes one operand, e.g. `sqrt`
    Unary,
    /// An operator that takes two operands, e.g. `frac`
    Binary,
    /// An operator between its operands, e.g. `/`, `_` and `^`
    Infix,
    /// An opening bracket
    LeftParen,
    /// A closing bracket
    RightParen,
    /// A bracket that can open or close, e.g. `|`
    LeftRightParen,
    /// The end of input
    Eof,
}

/// A named transform the parser applies to an operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Transform {
    /// Flatten the operand to text and resolve it to a [`Color`][crate::tree::Color]
    ResolveColor,
}

/// Transforms applied to the operands of an operator at parse time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct OperandConverter {
    /// Applied to the operand of a unary operator
    pub operand: Option<Transform>,
    /// Applied to the first operand of a binary operator
    pub first: Option<Transform>,
    /// Applied to the second operand of a binary operator
    pub second: Option<Transform>,
}

impl OperandConverter {
    /// The converter of `color`, which resolves its first operand
    pub const COLOR: Self = OperandConverter {
        operand: None,
        first: Some(Transform::ResolveColor),
        second: None,
    };
}

/// What a lexeme in the symbol table means
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SymbolEntry {
    /// The semantic symbol, absent for pass-through brackets like `{:`
    pub symbol: Option<Symbol>,
    /// How the parser treats the token
    pub class: TokenClass,
    /// Operand transforms, if any
    pub converter: Option<OperandConverter>,
}

impl SymbolEntry {
    /// Create an entry without operand transforms
    pub const fn new(symbol: Option<Symbol>, class: TokenClass) -> Self {
        SymbolEntry {
            symbol,
            class,
            converter: None,
        }
    }

    /// Create an entry with operand transforms
    pub const fn with_converter(
        symbol: Symbol,
        class: TokenClass,
        converter: OperandConverter,
    ) -> Self {
        SymbolEntry {
            symbol: Some(symbol),
            class,
            converter: Some(converter),
        }
    }
}

macro_rules! entry {
    ($class:ident, _) => {
        SymbolEntry::new(None, TokenClass::$class)
    };
    ($class:ident, ($symbol:ident, $converter:ident)) => {
        SymbolEntry::with_converter(
            Symbol::$symbol,
            TokenClass::$class,
            OperandConverter::$converter,
        )
    };
    ($class:ident, $symbol:ident) => {
        SymbolEntry::new(Some(Symbol::$symbol), TokenClass::$class)
    };
}

macro_rules! symbols {
    ($($class:ident { $($($lexeme:literal)|+ => $symbol:tt),+ $(,)? })+) => {
        [
            $(
                $(
                    $(
                        ($lexeme, entry!($class, $symbol)),
                    )+
                )+
            )+
        ]
    };
}

/// The symbols of standard asciimath
///
/// This is exported so alternate [prefix maps][crate::prefix_map] can be built from it, or
/// extended with custom symbols.
pub const ASCIIMATH_SYMBOLS: [(&str, SymbolEntry); 366] = symbols! {
    Symbol {
        // operations
        "+" => Plus,
        "-" => Minus,
        "*" | "cdot" => Cdot,
        "**" | "ast" => Ast,
        "***" | "star" => Star,
        "//" => Slash,
        "\\\\" | "backslash" => Backslash,
        "setminus" => Setminus,
        "xx" | "times" => Times,
        "|><" | "ltimes" => Ltimes,
        "><|" | "rtimes" => Rtimes,
        "|><|" | "bowtie" => Bowtie,
        "-:" | "div" | "divide" => Div,
        "@" | "circ" => Circ,
        "o+" | "oplus" => Oplus,
        "ox" | "otimes" => Otimes,
        "o." | "odot" => Odot,
        "sum" => Sum,
        "prod" => Prod,
        "^^" | "wedge" => Wedge,
        "^^^" | "bigwedge" => BigWedge,
        "vv" | "vee" => Vee,
        "vvv" | "bigvee" => BigVee,
        "nn" | "cap" => Cap,
        "nnn" | "bigcap" => BigCap,
        "uu" | "cup" => Cup,
        "uuu" | "bigcup" => BigCup,
        // relations
        "=" => Eq,
        "!=" | "ne" => Ne,
        ":=" => Assign,
        "<" | "lt" => Lt,
        "mlt" | "ll" => Mlt,
        ">" | "gt" => Gt,
        "mgt" | "gg" => Mgt,
        "<=" | "le" | "leq" => Le,
        ">=" | "ge" | "geq" => Ge,
        "-<" | "-lt" | "prec" => Prec,
        ">-" | "succ" => Succ,
        "-<=" | "preceq" => Preceq,
        ">-=" | "succeq" => Succeq,
        "in" => In,
        "!in" | "notin" => NotIn,
        "sub" | "subset" => Subset,
        "sup" | "supset" => Supset,
        "sube" | "subseteq" => SubsetEq,
        "supe" | "supseteq" => SupsetEq,
        "-=" | "equiv" => Equiv,
        "~" | "sim" => Sim,
        "~=" | "cong" => Cong,
        "~~" | "approx" => Approx,
        "prop" | "propto" => Propto,
        // logic
        "and" => And,
        "or" => Or,
        "not" | "neg" => Not,
        "=>" | "implies" => Implies,
        "if" => If,
        "<=>" | "iff" => Iff,
        "AA" | "forall" => Forall,
        "EE" | "exists" => Exists,
        "_|_" | "bot" => Bot,
        "TT" | "top" => Top,
        "|--" | "vdash" => Vdash,
        "|==" | "models" => Models,
        ":|:" => VBar,
        // misc
        "int" => Integral,
        "dx" => Dx,
        "dy" => Dy,
        "dz" => Dz,
        "dt" => Dt,
        "oint" => ContourIntegral,
        "del" | "partial" => Partial,
        "grad" | "nabla" => Nabla,
        "+-" | "pm" => Pm,
        "-+" | "mp" => Mp,
        "O/" | "emptyset" => EmptySet,
        "oo" | "infty" => Infty,
        "aleph" => Aleph,
        "..." | "ldots" => Ellipsis,
        ":." | "therefore" => Therefore,
        ":'" | "because" => Because,
        "/_" | "angle" => Angle,
        "/_\\" | "triangle" => Triangle,
        "'" | "prime" => Prime,
        "\\ " => Nbsp,
        "frown" => Frown,
        "quad" => Quad,
        "qquad" => Qquad,
        "cdots" => Cdots,
        "vdots" => Vdots,
        "ddots" => Ddots,
        "diamond" => Diamond,
        "square" => Square,
        "|__" | "lfloor" => LFloor,
        "__|" | "rfloor" => RFloor,
        "|~" | "lceiling" => LCeiling,
        "~|" | "rceiling" => RCeiling,
        "CC" => DoubleStruckC,
        "NN" => DoubleStruckN,
        "QQ" => DoubleStruckQ,
        "RR" => DoubleStruckR,
        "ZZ" => DoubleStruckZ,
        "f" => F,
        "g" => G,
        // functions
        "lim" => Lim,
        "Lim" => CapitalLim,
        "min" => Min,
        "max" => Max,
        "sin" => Sin,
        "Sin" => CapitalSin,
        "cos" => Cos,
        "Cos" => CapitalCos,
        "tan" => Tan,
        "Tan" => CapitalTan,
        "sinh" => Sinh,
        "Sinh" => CapitalSinh,
        "cosh" => Cosh,
        "Cosh" => CapitalCosh,
        "tanh" => Tanh,
        "Tanh" => CapitalTanh,
        "cot" => Cot,
        "Cot" => CapitalCot,
        "sec" => Sec,
        "Sec" => CapitalSec,
        "csc" => Csc,
        "Csc" => CapitalCsc,
        "arcsin" => Arcsin,
        "arccos" => Arccos,
        "arctan" => Arctan,
        "coth" => Coth,
        "sech" => Sech,
        "csch" => Csch,
        "exp" => Exp,
        "log" => Log,
        "Log" => CapitalLog,
        "ln" => Ln,
        "Ln" => CapitalLn,
        "det" => Det,
        "dim" => Dim,
        "ker" => Ker,
        "mod" => Mod,
        "gcd" => Gcd,
        "lcm" => Lcm,
        "lub" => Lub,
        "glb" => Glb,
        // arrows
        "uarr" | "uparrow" => UpArrow,
        "darr" | "downarrow" => DownArrow,
        "rarr" | "rightarrow" => RightArrow,
        "->" | "to" => To,
        ">->" | "rightarrowtail" => RightArrowTail,
        "->>" | "twoheadrightarrow" => TwoHeadRightArrow,
        ">->>" | "twoheadrightarrowtail" => TwoHeadRightArrowTail,
        "|->" | "mapsto" => MapsTo,
        "larr" | "leftarrow" => LeftArrow,
        "harr" | "leftrightarrow" => LeftRightArrow,
        "rArr" | "Rightarrow" => DoubleRightArrow,
        "lArr" | "Leftarrow" => DoubleLeftArrow,
        "hArr" | "Leftrightarrow" => DoubleLeftRightArrow,
        // greek
        "alpha" => Alpha,
        "Alpha" => CapitalAlpha,
        "beta" => Beta,
        "Beta" => CapitalBeta,
        "gamma" => Gamma,
        "Gamma" => CapitalGamma,
        "delta" => Delta,
        "Delta" => CapitalDelta,
        "epsi" | "epsilon" => Epsilon,
        "Epsilon" => CapitalEpsilon,
        "varepsilon" => VarEpsilon,
        "zeta" => Zeta,
        "Zeta" => CapitalZeta,
        "eta" => Eta,
        "Eta" => CapitalEta,
        "theta" => Theta,
        "Theta" => CapitalTheta,
        "vartheta" => VarTheta,
        "iota" => Iota,
        "Iota" => CapitalIota,
        "kappa" => Kappa,
        "Kappa" => CapitalKappa,
        "lambda" | "lamda" => Lambda,
        "Lambda" | "Lamda" => CapitalLambda,
        "mu" => Mu,
        "Mu" => CapitalMu,
        "nu" => Nu,
        "Nu" => CapitalNu,
        "xi" => Xi,
        "Xi" => CapitalXi,
        "omicron" => Omicron,
        "Omicron" => CapitalOmicron,
        "pi" => Pi,
        "Pi" => CapitalPi,
        "rho" => Rho,
        "Rho" => CapitalRho,
        "sigma" => Sigma,
        "Sigma" => CapitalSigma,
        "tau" => Tau,
        "Tau" => CapitalTau,
        "upsilon" => Upsilon,
        "Upsilon" => CapitalUpsilon,
        "phi" => Phi,
        "Phi" => CapitalPhi,
        "varphi" => VarPhi,
        "chi" => Chi,
        "Chi" => CapitalChi,
        "psi" => Psi,
        "Psi" => CapitalPsi,
        "omega" => Omega,
        "Omega" => CapitalOmega,
    }
    LeftParen {
        "(" | "left(" => LParen,
        "[" | "left[" => LBracket,
        "{" => LBrace,
        "|:" => VBar,
        "(:" | "<<" | "langle" => LAngle,
        "{:" => _,
    }
    RightParen {
        ")" | "right)" => RParen,
        "]" | "right]" => RBracket,
        "}" => RBrace,
        ":|" => VBar,
        ":)" | ">>" | "rangle" => RAngle,
        ":}" => _,
    }
    LeftRightParen {
        "|" => VBar,
    }
    Unary {
        "sqrt" => Sqrt,
        "abs" | "Abs" => Abs,
        "norm" => Norm,
        "floor" => Floor,
        "ceil" => Ceil,
        "tilde" => Tilde,
        "cancel" => Cancel,
        // accents
        "hat" => Hat,
        "bar" => Overline,
        "vec" => Vec,
        "dot" => Dot,
        "ddot" => Ddot,
        "overarc" | "overparen" => Overarc,
        "ul" | "underline" => Underline,
        "ubrace" | "underbrace" => Underbrace,
        "obrace" | "overbrace" => Overbrace,
        // fonts
        "bb" | "mathbf" => Bold,
        "bbb" | "mathbb" => DoubleStruck,
        "ii" => Italic,
        "bii" => BoldItalic,
        "cc" | "mathcal" => Script,
        "bcc" => BoldScript,
        "tt" | "mathtt" => Monospace,
        "fr" | "mathfrak" => Fraktur,
        "bfr" => BoldFraktur,
        "sf" | "mathsf" => SansSerif,
        "bsf" => BoldSansSerif,
        "sfi" => SansSerifItalic,
        "sfbi" => SansSerifBoldItalic,
        "rm" => Roman,
    }
    Binary {
        "root" => Root,
        "frac" => Frac,
        "stackrel" => Stackrel,
        "overset" => Overset,
        "underset" => Underset,
        "color" => (Color, COLOR),
    }
    Infix {
        "/" => Frac,
        "_" => Sub,
        "^" => Sup,
    }
};

const fn max_key_length(symbols: &[(&str, SymbolEntry)]) -> usize {
    let mut max = 0;
    let mut ind = 0;
    while ind < symbols.len() {
        let len = symbols[ind].0.len();
        if len > max {
            max = len;
        }
        ind += 1;
    }
    max
}

/// The length of the longest lexeme in [`ASCIIMATH_SYMBOLS`]
///
/// The tokenizer never considers a symbol candidate longer than this.
pub const MAX_KEY_LENGTH: usize = max_key_length(&ASCIIMATH_SYMBOLS);

/// The prefix map used by [`Tokenizer::new`][crate::Tokenizer::new]
#[cfg(feature = "qp-trie")]
pub type DefaultSymbols = QpTriePrefixMap<&'static str, SymbolEntry>;
/// The prefix map used by [`Tokenizer::new`][crate::Tokenizer::new]
#[cfg(not(feature = "qp-trie"))]
pub type DefaultSymbols = HashPrefixMap<&'static str, SymbolEntry>;

lazy_static! {
    pub(crate) static ref DEFAULT_SYMBOLS: DefaultSymbols =
        DefaultSymbols::from_iter(ASCIIMATH_SYMBOLS);
}

/// Look up the exact lexeme `text` in the standard symbol table
///
/// # Example
/// ```
/// use asciimath_mathml::{lookup, Symbol, TokenClass};
///
/// let entry = lookup("ast").unwrap();
/// assert_eq!(entry.symbol, Some(Symbol::Ast));
/// assert_eq!(entry.class, TokenClass::Symbol);
/// assert_eq!(lookup("as"), None);
/// ```
pub fn lookup(text: &str) -> Option<SymbolEntry> {
    DEFAULT_SYMBOLS.get(text).copied()
}
