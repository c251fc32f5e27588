use std::fmt;

use crate::vm::operation::ArithmeticOperation;
use crate::vm::segment_type::Segment;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
  Push(Segment, u16),
  Pop(Segment, u16),
  Arithmetic(ArithmeticOperation),
}

impl fmt::Display for Command {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      Command::Push(seg, idx) => write!(f, "push {} {}", seg, idx),
      Command::Pop(seg, idx) => write!(f, "pop {} {}", seg, idx),
      Command::Arithmetic(op) => write!(f, "{}", op),
    }
  }
}
