//! Operator precedence ranks for generated JavaScript.

/// Binding strength of a generated JS expression.
///
/// Higher binds tighter. A fragment only needs parentheses when it is placed
/// into a context that requires a higher rank than its own.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Precedence(i32);

impl Precedence {
    /// Comma operator.
    pub const COMMA: Precedence = Precedence(1);
    /// Assignment and arrow functions.
    pub const ASSIGNMENT: Precedence = Precedence(2);
    /// `a ? b : c`
    pub const CONDITIONAL: Precedence = Precedence(3);
    /// `||` and `??`
    pub const LOGICAL_OR: Precedence = Precedence(4);
    /// `&&`
    pub const LOGICAL_AND: Precedence = Precedence(5);
    /// `==`, `!=`, `===`, `!==`
    pub const EQUALITY: Precedence = Precedence(9);
    /// `<`, `>`, `<=`, `>=`, `in`, `instanceof`
    pub const RELATIONAL: Precedence = Precedence(10);
    /// `+`, `-`
    pub const ADDITIVE: Precedence = Precedence(12);
    /// `*`, `/`, `%`
    pub const MULTIPLICATIVE: Precedence = Precedence(13);
    /// `!`, unary `-`, `typeof`
    pub const UNARY: Precedence = Precedence(15);
    /// Calls and `new` with arguments.
    pub const CALL: Precedence = Precedence(17);
    /// Member access.
    pub const MEMBER: Precedence = Precedence(18);
    /// Never needs surrounding parentheses.
    pub const MAX: Precedence = Precedence(i32::MAX);

    /// Create a precedence from a raw rank.
    pub const fn new(rank: i32) -> Self {
        Precedence(rank)
    }

    /// The raw rank.
    pub const fn rank(self) -> i32 {
        self.0
    }
}
