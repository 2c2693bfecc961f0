//! Operator vocabulary.
//!
//! This module defines the canonical operator set along with the metadata the parser needs for precedence
//! climbing: fixity, associativity and binding [`Precedence`].
//!
//! ## Notes
//! - Lookup via [`from_str`] is **case-sensitive** and exact.
//! - `-` is both a prefix and an infix operator; its [`OperatorInfo::fixity`] lists both.
//! - `=` is an operator token but not an expression operator: it only appears inside `let` statements, so it has no
//!   fixity and binds at [`Precedence::Lowest`].
//!
//! ## Examples
//! ```rust
//! use monkey_core::lang::operators::{self, OperatorId, Precedence};
//!
//! assert_eq!(operators::from_str("+"), Some(OperatorId::Plus));
//! assert_eq!(operators::infix_precedence(OperatorId::Asterisk), Some(Precedence::Product));
//! assert!(operators::infix_precedence(OperatorId::Bang).is_none());
//! ```

use super::registry::{Since, Stability, TokenTag};

/// Binding power of an expression position, lowest to highest.
///
/// The derived ordering is the precedence ladder: `Equals < LessGreater < Sum < Product < Prefix < Call`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Precedence {
    Lowest,
    /// `==`, `!=`
    Equals,
    /// `<`, `>`
    LessGreater,
    /// `+`, `-`
    Sum,
    /// `*`, `/`
    Product,
    /// `-x`, `!x`
    Prefix,
    /// Call and grouping.
    Call,
}

impl Precedence {
    /// The next level down the ladder; [`Precedence::Lowest`] stays put.
    ///
    /// A right-associative operator parses its right operand here so that an equal-precedence operator to its right
    /// binds first.
    pub const fn lower(self) -> Self {
        match self {
            Precedence::Lowest | Precedence::Equals => Precedence::Lowest,
            Precedence::LessGreater => Precedence::Equals,
            Precedence::Sum => Precedence::LessGreater,
            Precedence::Product => Precedence::Sum,
            Precedence::Prefix => Precedence::Product,
            Precedence::Call => Precedence::Prefix,
        }
    }
}

/// Define how operators associate when chained.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Associativity {
    Left,
    Right,
    None,
}

/// Define whether an operator is infix (binary) or prefix (unary).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Fixity {
    Infix,
    Prefix,
}

/// Stable identifier for every operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorId {
    // Binding
    Assign,

    // Arithmetic
    Plus,
    Minus,
    Asterisk,
    Slash,

    // Logical
    Bang,

    // Comparison
    Lt,
    Gt,
    EqEq,
    NotEq,
}

/// Metadata for an operator.
///
/// ## Notes
/// - `precedence` is the binding power when the operator appears in infix position. Prefix operators always parse
///   their operand at [`Precedence::Prefix`].
#[derive(Debug, Clone, Copy)]
pub struct OperatorInfo {
    pub id: OperatorId,
    pub spelling: &'static str,
    pub tag: TokenTag,
    pub precedence: Precedence,
    pub associativity: Associativity,
    pub fixity: &'static [Fixity],
    pub since: Since,
    pub stability: Stability,
}

/// Registry of all operators.
pub const OPERATORS: &[OperatorInfo] = &[
    // Binding
    op(
        OperatorId::Assign,
        "=",
        "ASSIGN",
        Precedence::Lowest,
        Associativity::None,
        &[],
    ),
    // Arithmetic
    op(
        OperatorId::Plus,
        "+",
        "PLUS",
        Precedence::Sum,
        Associativity::Left,
        &[Fixity::Infix],
    ),
    op(
        OperatorId::Minus,
        "-",
        "MINUS",
        Precedence::Sum,
        Associativity::Left,
        &[Fixity::Prefix, Fixity::Infix],
    ),
    op(
        OperatorId::Asterisk,
        "*",
        "ASTERISK",
        Precedence::Product,
        Associativity::Left,
        &[Fixity::Infix],
    ),
    op(
        OperatorId::Slash,
        "/",
        "SLASH",
        Precedence::Product,
        Associativity::Left,
        &[Fixity::Infix],
    ),
    // Logical
    op(
        OperatorId::Bang,
        "!",
        "BANG",
        Precedence::Prefix,
        Associativity::Right,
        &[Fixity::Prefix],
    ),
    // Comparison
    op(
        OperatorId::Lt,
        "<",
        "LT",
        Precedence::LessGreater,
        Associativity::Left,
        &[Fixity::Infix],
    ),
    op(
        OperatorId::Gt,
        ">",
        "GT",
        Precedence::LessGreater,
        Associativity::Left,
        &[Fixity::Infix],
    ),
    op(
        OperatorId::EqEq,
        "==",
        "EQ",
        Precedence::Equals,
        Associativity::Left,
        &[Fixity::Infix],
    ),
    op(
        OperatorId::NotEq,
        "!=",
        "NOT_EQ",
        Precedence::Equals,
        Associativity::Left,
        &[Fixity::Infix],
    ),
];

/// Return the full metadata entry for an operator.
///
/// ## Panics
/// - If the registry is missing an entry for `id` (this indicates a programming error).
pub fn info_for(id: OperatorId) -> &'static OperatorInfo {
    OPERATORS.iter().find(|o| o.id == id).expect("operator info missing")
}

/// Return the spelling of an operator (e.g. `"!="`).
pub fn as_str(id: OperatorId) -> &'static str {
    info_for(id).spelling
}

/// Return the token-kind tag of an operator (e.g. `"NOT_EQ"`).
pub fn tag(id: OperatorId) -> TokenTag {
    info_for(id).tag
}

/// Return the infix binding precedence, or `None` if the operator cannot appear between two operands.
pub fn infix_precedence(id: OperatorId) -> Option<Precedence> {
    let info = info_for(id);
    info.fixity.contains(&Fixity::Infix).then_some(info.precedence)
}

/// Return how the operator associates when chained with itself.
pub fn associativity(id: OperatorId) -> Associativity {
    info_for(id).associativity
}

/// Return `true` if the operator may start an expression (`!x`, `-x`).
pub fn is_prefix(id: OperatorId) -> bool {
    info_for(id).fixity.contains(&Fixity::Prefix)
}

/// Resolve an operator spelling to its identifier.
///
/// ## Notes
/// - Matching is **case-sensitive** and exact; `"=="` resolves to [`OperatorId::EqEq`], never to two `=`.
pub fn from_str(spelling: &str) -> Option<OperatorId> {
    OPERATORS.iter().find(|o| o.spelling == spelling).map(|o| o.id)
}

// --- helpers -----------------------------------------------------------------

const fn op(
    id: OperatorId,
    spelling: &'static str,
    tag: TokenTag,
    precedence: Precedence,
    associativity: Associativity,
    fixity: &'static [Fixity],
) -> OperatorInfo {
    OperatorInfo {
        id,
        spelling,
        tag,
        precedence,
        associativity,
        fixity,
        since: Since(0, 1),
        stability: Stability::Stable,
    }
}
