//! How each symbol is displayed
//!
//! Display metadata is kept apart from the lexeme table so that every spelling of a symbol shares
//! one rendering.
use crate::symbols::Symbol;

/// Where an accent sits relative to its operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Position {
    Over,
    Under,
}

/// The rendering role of a symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Category {
    Operator,
    Identifier,
    Text,
    LeftParen,
    RightParen,
    LeftRightParen,
    Accent(Position),
    /// A font variant, the display text is the `mathvariant`
    Font,
    /// Brackets drawn around the operand
    Wrap(&'static str, &'static str),
    Cancel,
    Sqrt,
    Over,
    Under,
    Root,
    Color,
    Frac,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) struct DisplayDetail {
    /// The glyph, empty for symbols only used structurally
    pub text: &'static str,
    pub category: Category,
    /// Scripts go under and over instead of to the side
    pub under_over: bool,
}

impl DisplayDetail {
    const fn new(text: &'static str, category: Category) -> Self {
        DisplayDetail {
            text,
            category,
            under_over: false,
        }
    }

    const fn limits(self) -> Self {
        DisplayDetail {
            under_over: true,
            ..self
        }
    }

    /// True for the glyph of an accent
    pub fn is_accent(&self) -> bool {
        matches!(self.category, Category::Accent(_))
    }
}

const fn op(text: &'static str) -> DisplayDetail {
    DisplayDetail::new(text, Category::Operator)
}

const fn ident(text: &'static str) -> DisplayDetail {
    DisplayDetail::new(text, Category::Identifier)
}

const fn over(text: &'static str) -> DisplayDetail {
    DisplayDetail::new(text, Category::Accent(Position::Over))
}

const fn under(text: &'static str) -> DisplayDetail {
    DisplayDetail::new(text, Category::Accent(Position::Under))
}

const fn font(variant: &'static str) -> DisplayDetail {
    DisplayDetail::new(variant, Category::Font)
}

const fn wrap(left: &'static str, right: &'static str) -> DisplayDetail {
    DisplayDetail::new("", Category::Wrap(left, right))
}

const fn tag(category: Category) -> DisplayDetail {
    DisplayDetail::new("", category)
}

/// The display metadata of `symbol`
///
/// `fix_phi` swaps `phi` and `varphi` so that `phi` is the straight form.
pub(crate) fn detail(symbol: Symbol, fix_phi: bool) -> DisplayDetail {
    use Symbol::*;
    match symbol {
        // operations
        Plus => op("+"),
        Minus => op("\u{2212}"),
        Cdot => op("\u{22C5}"),
        Ast => op("*"),
        Star => op("\u{22C6}"),
        Slash => op("/"),
        Backslash | Setminus => op("\\"),
        Times => op("\u{00D7}"),
        Ltimes => op("\u{22C9}"),
        Rtimes => op("\u{22CA}"),
        Bowtie => op("\u{22C8}"),
        Div => op("\u{00F7}"),
        Circ => op("\u{26AC}"),
        Oplus => op("\u{2295}"),
        Otimes => op("\u{2297}"),
        Odot => op("\u{2299}"),
        Sum => op("\u{2211}").limits(),
        Prod => op("\u{220F}").limits(),
        Wedge => op("\u{2227}"),
        BigWedge => op("\u{22C0}").limits(),
        Vee => op("\u{2228}"),
        BigVee => op("\u{22C1}").limits(),
        Cap => op("\u{2229}"),
        BigCap => op("\u{22C2}").limits(),
        Cup => op("\u{222A}"),
        BigCup => op("\u{22C3}").limits(),
        // relations
        Eq => op("="),
        Ne => op("\u{2260}"),
        Assign => op("\u{2254}"),
        Lt => op("<"),
        Mlt => op("\u{226A}"),
        Gt => op(">"),
        Mgt => op("\u{226B}"),
        Le => op("\u{2264}"),
        Ge => op("\u{2265}"),
        Prec => op("\u{227A}"),
        Succ => op("\u{227B}"),
        Preceq => op("\u{2AAF}"),
        Succeq => op("\u{2AB0}"),
        In => op("\u{2208}"),
        NotIn => op("\u{2209}"),
        Subset => op("\u{2282}"),
        Supset => op("\u{2283}"),
        SubsetEq => op("\u{2286}"),
        SupsetEq => op("\u{2287}"),
        Equiv => op("\u{2261}"),
        Sim => op("\u{223C}"),
        Cong => op("\u{2245}"),
        Approx => op("\u{2248}"),
        Propto => op("\u{221D}"),
        // logic
        And => DisplayDetail::new("and", Category::Text),
        Or => DisplayDetail::new("or", Category::Text),
        Not => op("\u{00AC}"),
        Implies => op("\u{21D2}"),
        If => op("if"),
        Iff => op("\u{21D4}"),
        Forall => op("\u{2200}"),
        Exists => op("\u{2203}"),
        Bot => op("\u{22A5}"),
        Top => op("\u{22A4}"),
        Vdash => op("\u{22A2}"),
        Models => op("\u{22A8}"),
        // brackets
        LParen => DisplayDetail::new("(", Category::LeftParen),
        RParen => DisplayDetail::new(")", Category::RightParen),
        LBracket => DisplayDetail::new("[", Category::LeftParen),
        RBracket => DisplayDetail::new("]", Category::RightParen),
        LBrace => DisplayDetail::new("{", Category::LeftParen),
        RBrace => DisplayDetail::new("}", Category::RightParen),
        VBar => DisplayDetail::new("|", Category::LeftRightParen),
        LAngle => DisplayDetail::new("\u{2329}", Category::LeftParen),
        RAngle => DisplayDetail::new("\u{232A}", Category::RightParen),
        // misc
        Integral => op("\u{222B}"),
        Dx => ident("dx"),
        Dy => ident("dy"),
        Dz => ident("dz"),
        Dt => ident("dt"),
        ContourIntegral => op("\u{222E}"),
        Partial => op("\u{2202}"),
        Nabla => op("\u{2207}"),
        Pm => op("\u{00B1}"),
        Mp => op("\u{2213}"),
        EmptySet => op("\u{2205}"),
        Infty => op("\u{221E}"),
        Aleph => op("\u{2135}"),
        Ellipsis => op("\u{2026}"),
        Therefore => op("\u{2234}"),
        Because => op("\u{2235}"),
        Angle => op("\u{2220}"),
        Triangle => op("\u{25B3}"),
        Prime => op("\u{2032}"),
        Tilde => over("~"),
        Nbsp => op("\u{00A0}"),
        Frown => op("\u{2322}"),
        Quad => op("\u{00A0}\u{00A0}"),
        Qquad => op("\u{00A0}\u{00A0}\u{00A0}\u{00A0}"),
        Cdots => op("\u{22EF}"),
        Vdots => op("\u{22EE}"),
        Ddots => op("\u{22F1}"),
        Diamond => op("\u{22C4}"),
        Square => op("\u{25A1}"),
        LFloor => op("\u{230A}"),
        RFloor => op("\u{230B}"),
        LCeiling => op("\u{2308}"),
        RCeiling => op("\u{2309}"),
        DoubleStruckC => op("\u{2102}"),
        DoubleStruckN => op("\u{2115}"),
        DoubleStruckQ => op("\u{211A}"),
        DoubleStruckR => op("\u{211D}"),
        DoubleStruckZ => op("\u{2124}"),
        F => ident("f"),
        G => ident("g"),
        // functions
        Lim => op("lim").limits(),
        CapitalLim => op("Lim").limits(),
        Min => op("min").limits(),
        Max => op("max").limits(),
        Sin => ident("sin"),
        CapitalSin => ident("Sin"),
        Cos => ident("cos"),
        CapitalCos => ident("Cos"),
        Tan => ident("tan"),
        CapitalTan => ident("Tan"),
        Sinh => ident("sinh"),
        CapitalSinh => ident("Sinh"),
        Cosh => ident("cosh"),
        CapitalCosh => ident("Cosh"),
        Tanh => ident("tanh"),
        CapitalTanh => ident("Tanh"),
        Cot => ident("cot"),
        CapitalCot => ident("Cot"),
        Sec => ident("sec"),
        CapitalSec => ident("Sec"),
        Csc => ident("csc"),
        CapitalCsc => ident("Csc"),
        Arcsin => ident("arcsin"),
        Arccos => ident("arccos"),
        Arctan => ident("arctan"),
        Coth => ident("coth"),
        Sech => ident("sech"),
        Csch => ident("csch"),
        Exp => ident("exp"),
        Log => ident("log"),
        CapitalLog => ident("Log"),
        Ln => ident("ln"),
        CapitalLn => ident("Ln"),
        Det => ident("det"),
        Dim => ident("dim"),
        Ker => ident("ker"),
        Mod => ident("mod"),
        Gcd => ident("gcd"),
        Lcm => ident("lcm"),
        Lub => ident("lub"),
        Glb => ident("glb"),
        Abs => wrap("|", "|"),
        Norm => wrap("\u{2225}", "\u{2225}"),
        Floor => wrap("\u{230A}", "\u{230B}"),
        Ceil => wrap("\u{2308}", "\u{2309}"),
        // arrows
        UpArrow => op("\u{2191}"),
        DownArrow => op("\u{2193}"),
        RightArrow | To => op("\u{2192}"),
        RightArrowTail => op("\u{21A3}"),
        TwoHeadRightArrow => op("\u{21A0}"),
        TwoHeadRightArrowTail => op("\u{2916}"),
        MapsTo => op("\u{21A6}"),
        LeftArrow => op("\u{2190}"),
        LeftRightArrow => op("\u{2194}"),
        DoubleRightArrow => op("\u{21D2}"),
        DoubleLeftArrow => op("\u{21D0}"),
        DoubleLeftRightArrow => op("\u{21D4}"),
        // structural
        Sqrt => tag(Category::Sqrt),
        Cancel => tag(Category::Cancel),
        Root => tag(Category::Root),
        Frac => tag(Category::Frac),
        Stackrel | Overset => tag(Category::Over),
        Underset => tag(Category::Under),
        Color => tag(Category::Color),
        Sub => op("_"),
        Sup => op("^"),
        // accents
        Hat => over("^"),
        Overline => over("\u{00AF}"),
        Vec => over("\u{2192}"),
        Dot => over("."),
        Ddot => over(".."),
        Overarc => over("\u{23DC}"),
        Underline => under("_"),
        Underbrace => under("\u{23DF}").limits(),
        Overbrace => over("\u{23DE}").limits(),
        // fonts
        Bold => font("bold"),
        DoubleStruck => font("double-struck"),
        Italic => font("italic"),
        BoldItalic => font("bold-italic"),
        Script => font("script"),
        BoldScript => font("bold-script"),
        Monospace => font("monospace"),
        Fraktur => font("fraktur"),
        BoldFraktur => font("bold-fraktur"),
        SansSerif => font("sans-serif"),
        BoldSansSerif => font("bold-sans-serif"),
        SansSerifItalic => font("sans-serif-italic"),
        SansSerifBoldItalic => font("sans-serif-bold-italic"),
        Roman => font("normal"),
        // greek
        Alpha => ident("\u{03B1}"),
        CapitalAlpha => ident("\u{0391}"),
        Beta => ident("\u{03B2}"),
        CapitalBeta => ident("\u{0392}"),
        Gamma => ident("\u{03B3}"),
        CapitalGamma => op("\u{0393}"),
        Delta => ident("\u{03B4}"),
        CapitalDelta => op("\u{0394}"),
        Epsilon => ident("\u{03B5}"),
        CapitalEpsilon => ident("\u{0395}"),
        VarEpsilon => ident("\u{025B}"),
        Zeta => ident("\u{03B6}"),
        CapitalZeta => ident("\u{0396}"),
        Eta => ident("\u{03B7}"),
        CapitalEta => ident("\u{0397}"),
        Theta => ident("\u{03B8}"),
        CapitalTheta => op("\u{0398}"),
        VarTheta => ident("\u{03D1}"),
        Iota => ident("\u{03B9}"),
        CapitalIota => ident("\u{0399}"),
        Kappa => ident("\u{03BA}"),
        CapitalKappa => ident("\u{039A}"),
        Lambda => ident("\u{03BB}"),
        CapitalLambda => op("\u{039B}"),
        Mu => ident("\u{03BC}"),
        CapitalMu => ident("\u{039C}"),
        Nu => ident("\u{03BD}"),
        CapitalNu => ident("\u{039D}"),
        Xi => ident("\u{03BE}"),
        CapitalXi => op("\u{039E}"),
        Omicron => ident("\u{03BF}"),
        CapitalOmicron => ident("\u{039F}"),
        Pi => ident("\u{03C0}"),
        CapitalPi => op("\u{03A0}"),
        Rho => ident("\u{03C1}"),
        CapitalRho => ident("\u{03A1}"),
        Sigma => ident("\u{03C3}"),
        CapitalSigma => op("\u{03A3}"),
        Tau => ident("\u{03C4}"),
        CapitalTau => ident("\u{03A4}"),
        Upsilon => ident("\u{03C5}"),
        CapitalUpsilon => ident("\u{03A5}"),
        Phi if fix_phi => ident("\u{03D5}"),
        Phi => ident("\u{03C6}"),
        VarPhi if fix_phi => ident("\u{03C6}"),
        VarPhi => ident("\u{03D5}"),
        CapitalPhi => ident("\u{03A6}"),
        Chi => ident("\u{03C7}"),
        CapitalChi => ident("\u{03A7}"),
        Psi => ident("\u{03C8}"),
        CapitalPsi => ident("\u{03A8}"),
        Omega => ident("\u{03C9}"),
        CapitalOmega => op("\u{03A9}"),
    }
}
