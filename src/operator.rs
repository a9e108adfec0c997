/// A binary arithmetic operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Floating-point remainder (`%`)
    Mod,
    /// Exponentiation (`^`)
    Pow,
}

/// A prefix operator applied to a single operand.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Unary plus (e.g. `+x`), the identity.
    Plus,
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

/// What an operator does, split by the number of operands it takes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperatorKind {
    Binary(BinaryOperator),
    Unary(UnaryOperator),
}

/// Number of operands an operator consumes.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum OperatorArity {
    Unary,
    Binary,
}

/// Grouping of repeated operators with equal precedence.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `a ^ b ^ c` groups as `a ^ (b ^ c)`.
    Right,
}

/// Static description of an operator: its symbol and how tightly it binds.
#[derive(Debug, PartialEq, Eq)]
pub struct Operator {
    pub kind:          OperatorKind,
    pub symbol:        char,
    /// Higher binds tighter.
    pub precedence:    u8,
    pub associativity: Associativity,
}

/// The operator catalog.
///
/// `+` and `-` appear twice: once as binary operators and once as unary
/// operators that bind tighter than anything else.
pub static OPERATORS: [Operator; 8] = [
    Operator { kind:          OperatorKind::Binary(BinaryOperator::Add),
               symbol:        '+',
               precedence:    1,
               associativity: Associativity::Left, },
    Operator { kind:          OperatorKind::Binary(BinaryOperator::Sub),
               symbol:        '-',
               precedence:    1,
               associativity: Associativity::Left, },
    Operator { kind:          OperatorKind::Binary(BinaryOperator::Mul),
               symbol:        '*',
               precedence:    2,
               associativity: Associativity::Left, },
    Operator { kind:          OperatorKind::Binary(BinaryOperator::Div),
               symbol:        '/',
               precedence:    2,
               associativity: Associativity::Left, },
    Operator { kind:          OperatorKind::Binary(BinaryOperator::Mod),
               symbol:        '%',
               precedence:    2,
               associativity: Associativity::Left, },
    Operator { kind:          OperatorKind::Binary(BinaryOperator::Pow),
               symbol:        '^',
               precedence:    3,
               associativity: Associativity::Right, },
    Operator { kind:          OperatorKind::Unary(UnaryOperator::Plus),
               symbol:        '+',
               precedence:    4,
               associativity: Associativity::Right, },
    Operator { kind:          OperatorKind::Unary(UnaryOperator::Negate),
               symbol:        '-',
               precedence:    4,
               associativity: Associativity::Right, },
];

impl Operator {
    /// Finds the catalog entry for `symbol` used with the given arity.
    ///
    /// # Example
    /// ```
    /// use yardcalc::operator::{Operator, OperatorArity};
    ///
    /// let minus = Operator::lookup('-', OperatorArity::Unary).unwrap();
    /// assert_eq!(minus.precedence, 4);
    /// assert!(Operator::lookup('*', OperatorArity::Unary).is_none());
    /// ```
    #[must_use]
    pub fn lookup(symbol: char, arity: OperatorArity) -> Option<&'static Self> {
        OPERATORS.iter()
                 .find(|op| op.symbol == symbol && op.arity() == arity)
    }

    #[must_use]
    pub const fn arity(&self) -> OperatorArity {
        match self.kind {
            OperatorKind::Binary(_) => OperatorArity::Binary,
            OperatorKind::Unary(_) => OperatorArity::Unary,
        }
    }

    #[must_use]
    pub const fn is_unary(&self) -> bool {
        matches!(self.kind, OperatorKind::Unary(_))
    }

    /// Returns `true` if `other`, sitting on the operator stack, must be
    /// emitted before `self` is pushed.
    ///
    /// Left-associative operators yield to anything of equal or higher
    /// precedence; right-associative operators only to strictly higher.
    #[must_use]
    pub const fn yields_to(&self, other: &Self) -> bool {
        match self.associativity {
            Associativity::Left => self.precedence <= other.precedence,
            Associativity::Right => self.precedence < other.precedence,
        }
    }
}

impl std::fmt::Display for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_unary() {
            write!(f, "u{}", self.symbol)
        } else {
            write!(f, "{}", self.symbol)
        }
    }
}
