//! Binary and unary operators with their canonical symbols and precedence.

/// Binding strength of expression forms, higher binds tighter
pub mod level {
    pub const ASSIGNMENT: u8 = 2;
    pub const TERNARY: u8 = 3;
    pub const LOGICAL_OR: u8 = 4;
    pub const LOGICAL_AND: u8 = 5;
    pub const BITWISE_OR: u8 = 6;
    pub const BITWISE_XOR: u8 = 7;
    pub const BITWISE_AND: u8 = 8;
    pub const EQUALITY: u8 = 9;
    pub const RELATIONAL: u8 = 10;
    pub const SHIFT: u8 = 11;
    pub const ADDITIVE: u8 = 12;
    pub const MULTIPLICATIVE: u8 = 13;
    pub const PREFIX: u8 = 14;
    pub const POSTFIX: u8 = 15;
    pub const PRIMARY: u8 = 16;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add, Sub, Mul, Div, Mod,
    Lt, Le, Gt, Ge, Eq, Ne,
    And, Or, Xor, LShift, RShift, URShift,
    LogicalAnd, LogicalOr,
    Assign, AddAssign, SubAssign, MulAssign, DivAssign, ModAssign,
    AndAssign, OrAssign, XorAssign, LShiftAssign, RShiftAssign, URShiftAssign,
}

impl BinaryOp {
    pub const ALL: [BinaryOp; 31] = [
        BinaryOp::Add, BinaryOp::Sub, BinaryOp::Mul, BinaryOp::Div, BinaryOp::Mod,
        BinaryOp::Lt, BinaryOp::Le, BinaryOp::Gt, BinaryOp::Ge, BinaryOp::Eq, BinaryOp::Ne,
        BinaryOp::And, BinaryOp::Or, BinaryOp::Xor, BinaryOp::LShift, BinaryOp::RShift, BinaryOp::URShift,
        BinaryOp::LogicalAnd, BinaryOp::LogicalOr,
        BinaryOp::Assign, BinaryOp::AddAssign, BinaryOp::SubAssign, BinaryOp::MulAssign,
        BinaryOp::DivAssign, BinaryOp::ModAssign, BinaryOp::AndAssign, BinaryOp::OrAssign,
        BinaryOp::XorAssign, BinaryOp::LShiftAssign, BinaryOp::RShiftAssign, BinaryOp::URShiftAssign,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::And => "&",
            BinaryOp::Or => "|",
            BinaryOp::Xor => "^",
            BinaryOp::LShift => "<<",
            BinaryOp::RShift => ">>",
            BinaryOp::URShift => ">>>",
            BinaryOp::LogicalAnd => "&&",
            BinaryOp::LogicalOr => "||",
            BinaryOp::Assign => "=",
            BinaryOp::AddAssign => "+=",
            BinaryOp::SubAssign => "-=",
            BinaryOp::MulAssign => "*=",
            BinaryOp::DivAssign => "/=",
            BinaryOp::ModAssign => "%=",
            BinaryOp::AndAssign => "&=",
            BinaryOp::OrAssign => "|=",
            BinaryOp::XorAssign => "^=",
            BinaryOp::LShiftAssign => "<<=",
            BinaryOp::RShiftAssign => ">>=",
            BinaryOp::URShiftAssign => ">>>=",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|op| op.symbol() == symbol)
    }

    pub fn precedence(self) -> u8 {
        match self {
            BinaryOp::Mul | BinaryOp::Div | BinaryOp::Mod => level::MULTIPLICATIVE,
            BinaryOp::Add | BinaryOp::Sub => level::ADDITIVE,
            BinaryOp::LShift | BinaryOp::RShift | BinaryOp::URShift => level::SHIFT,
            BinaryOp::Lt | BinaryOp::Le | BinaryOp::Gt | BinaryOp::Ge => level::RELATIONAL,
            BinaryOp::Eq | BinaryOp::Ne => level::EQUALITY,
            BinaryOp::And => level::BITWISE_AND,
            BinaryOp::Xor => level::BITWISE_XOR,
            BinaryOp::Or => level::BITWISE_OR,
            BinaryOp::LogicalAnd => level::LOGICAL_AND,
            BinaryOp::LogicalOr => level::LOGICAL_OR,
            _ => level::ASSIGNMENT,
        }
    }

    pub fn is_assignment(self) -> bool {
        self.precedence() == level::ASSIGNMENT
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Plus, Minus, Not, BitNot, PreInc, PreDec, PostInc, PostDec,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Minus => "-",
            UnaryOp::Not => "!",
            UnaryOp::BitNot => "~",
            UnaryOp::PreInc | UnaryOp::PostInc => "++",
            UnaryOp::PreDec | UnaryOp::PostDec => "--",
        }
    }

    pub fn is_postfix(self) -> bool {
        matches!(self, UnaryOp::PostInc | UnaryOp::PostDec)
    }

    /// Look up an operator from its symbol and position; `+` has no postfix form
    pub fn from_symbol(symbol: &str, postfix: bool) -> Option<Self> {
        let op = match (symbol, postfix) {
            ("+", false) => UnaryOp::Plus,
            ("-", false) => UnaryOp::Minus,
            ("!", false) => UnaryOp::Not,
            ("~", false) => UnaryOp::BitNot,
            ("++", false) => UnaryOp::PreInc,
            ("--", false) => UnaryOp::PreDec,
            ("++", true) => UnaryOp::PostInc,
            ("--", true) => UnaryOp::PostDec,
            _ => return None,
        };
        Some(op)
    }

    pub fn precedence(self) -> u8 {
        if self.is_postfix() {
            level::POSTFIX
        } else {
            level::PREFIX
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symbols_round_trip() {
        for op in BinaryOp::ALL {
            assert_eq!(BinaryOp::from_symbol(op.symbol()), Some(op));
        }
        assert_eq!(BinaryOp::from_symbol("**"), None);
    }

    #[test]
    fn precedence_order() {
        assert!(BinaryOp::Mul.precedence() > BinaryOp::Add.precedence());
        assert!(BinaryOp::LogicalAnd.precedence() > BinaryOp::LogicalOr.precedence());
        assert!(BinaryOp::URShiftAssign.is_assignment());
        assert!(!BinaryOp::Ge.is_assignment());
    }

    #[test]
    fn unary_position_matters() {
        assert_eq!(UnaryOp::from_symbol("++", true), Some(UnaryOp::PostInc));
        assert_eq!(UnaryOp::from_symbol("++", false), Some(UnaryOp::PreInc));
        assert_eq!(UnaryOp::from_symbol("!", true), None);
        assert!(UnaryOp::PostDec.is_postfix());
        assert_eq!(UnaryOp::PostDec.symbol(), "--");
    }
}
