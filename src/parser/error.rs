use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SyntaxErrorKind {
  #[error("unknown syntax error")]
  Unknown,
  #[error("unrecognised command `{0}`")]
  UnrecognisedCommand(String),
  #[error("expected {expected} argument(s), found {} {:?}", .args.len(), .args)]
  InvalidArgumentCount { args: Vec<String>, expected: usize },
  #[error("invalid segment `{0}`")]
  InvalidSegment(String),
  #[error("invalid index `{0}`")]
  InvalidIndex(String),
}

/// A parse failure on a 1-based source line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("line {line}: {kind}")]
pub struct SyntaxError {
  pub line: usize,
  pub kind: SyntaxErrorKind,
}

impl SyntaxError {
  pub fn new(line: usize, kind: SyntaxErrorKind) -> Self {
    Self { line, kind }
  }
}
