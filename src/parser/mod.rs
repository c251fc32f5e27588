pub mod error;
pub mod vm;

pub use error::{SyntaxError, SyntaxErrorKind};
pub use vm::{parse, Parser};
