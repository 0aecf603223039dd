#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Variable {
        name: String,
        id: usize,
    },
    Unary {
        op: UnaryOp,
        expr: Box<Expr>,
    },
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
    Not,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    And,
    Xor,
    Or,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Not => "!",
        }
    }

    pub fn apply(self, value: bool) -> bool {
        match self {
            UnaryOp::Not => !value,
        }
    }
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::And => "&",
            BinaryOp::Xor => "^",
            BinaryOp::Or => "|",
        }
    }

    // Operands arrive right-first; all current operators are commutative, but
    // a non-commutative addition must keep this argument order.
    pub fn apply(self, right: bool, left: bool) -> bool {
        match self {
            BinaryOp::And => right & left,
            BinaryOp::Xor => right ^ left,
            BinaryOp::Or => right | left,
        }
    }
}
