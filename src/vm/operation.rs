use std::collections::HashMap;
use std::fmt;

lazy_static! {
  static ref OPERATION_TABLE: HashMap<&'static str, ArithmeticOperation> = {
    let mut map = HashMap::new();
    for op in ArithmeticOperation::ALL {
      map.insert(op.to_vm_string(), op);
    }
    map
  };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ArithmeticOperation {
  Add,
  Sub,
  Neg,
  Eq,
  Gt,
  Lt,
  And,
  Or,
  Not,
}

/// Codegen shape of an operation, carrying the literal Hack fragment it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperatorKind {
  /// `comp` computing `left op right` with `D` = right and `M` = left.
  BinaryInfix(&'static str),
  /// `comp` rewriting `M` in place.
  UnaryPrefix(&'static str),
  /// Jump mnemonic taken on `left - right`.
  Comparison(&'static str),
}

impl ArithmeticOperation {
  pub const ALL: [ArithmeticOperation; 9] = [
    Self::Add,
    Self::Sub,
    Self::Neg,
    Self::Eq,
    Self::Gt,
    Self::Lt,
    Self::And,
    Self::Or,
    Self::Not,
  ];

  pub fn from_name(name: &str) -> Option<Self> {
    OPERATION_TABLE.get(name).copied()
  }

  pub fn to_vm_string(&self) -> &'static str {
    match self {
      Self::Add => "add",
      Self::Sub => "sub",
      Self::Neg => "neg",
      Self::Eq => "eq",
      Self::Gt => "gt",
      Self::Lt => "lt",
      Self::And => "and",
      Self::Or => "or",
      Self::Not => "not",
    }
  }
}

impl fmt::Display for ArithmeticOperation {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.to_vm_string())
  }
}

pub fn operator_code(op: ArithmeticOperation) -> OperatorKind {
  match op {
    ArithmeticOperation::Add => OperatorKind::BinaryInfix("D+M"),
    ArithmeticOperation::Sub => OperatorKind::BinaryInfix("M-D"),
    ArithmeticOperation::And => OperatorKind::BinaryInfix("D&M"),
    ArithmeticOperation::Or => OperatorKind::BinaryInfix("D|M"),
    ArithmeticOperation::Neg => OperatorKind::UnaryPrefix("-M"),
    ArithmeticOperation::Not => OperatorKind::UnaryPrefix("!M"),
    ArithmeticOperation::Eq => OperatorKind::Comparison("JEQ"),
    ArithmeticOperation::Gt => OperatorKind::Comparison("JGT"),
    ArithmeticOperation::Lt => OperatorKind::Comparison("JLT"),
  }
}
