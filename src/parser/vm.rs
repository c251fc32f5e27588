use std::iter::Iterator;

use log::debug;

use crate::parser::error::{SyntaxError, SyntaxErrorKind};
use crate::vm::commands::Command;
use crate::vm::operation::ArithmeticOperation;
use crate::vm::segment_type::Segment;

/// Largest value a Hack A-instruction can load.
pub const MAX_INDEX: u16 = 32767;

/// Splits on `\n`, `\r\n` or a lone `\r`.
struct SourceLines<'a> {
  rest: Option<&'a str>,
}

impl<'a> Iterator for SourceLines<'a> {
  type Item = &'a str;

  fn next(&mut self) -> Option<&'a str> {
    let rest = self.rest?;
    match rest.find(|c: char| c == '\n' || c == '\r') {
      Some(pos) => {
        let skip = if rest[pos..].starts_with("\r\n") { 2 } else { 1 };
        self.rest = Some(&rest[pos + skip..]);
        Some(&rest[..pos])
      }
      None => {
        self.rest = None;
        Some(rest)
      }
    }
  }
}

/// Yields one parsed command per significant source line.
pub struct Parser<'a> {
  lines: SourceLines<'a>,
  cur_line: usize,
}

impl<'a> Parser<'a> {
  pub fn new(source: &'a str) -> Self {
    Self {
      lines: SourceLines { rest: Some(source) },
      cur_line: 0,
    }
  }

  fn strip_comment(line: &str) -> &str {
    let code = match line.find("//") {
      Some(pos) => &line[..pos],
      None => line,
    };
    code.trim()
  }

  fn parse_index(token: &str) -> Result<u16, SyntaxErrorKind> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
      return Err(SyntaxErrorKind::InvalidIndex(token.to_string()));
    }
    match token.parse::<u16>() {
      Ok(idx) if idx <= MAX_INDEX => Ok(idx),
      _ => Err(SyntaxErrorKind::InvalidIndex(token.to_string())),
    }
  }

  fn parse_line(cmd_str: &str) -> Result<Command, SyntaxErrorKind> {
    let tokens: Vec<&str> = cmd_str.split_whitespace().collect();
    let (cmd, args) = match tokens.split_first() {
      Some(split) => split,
      None => return Err(SyntaxErrorKind::Unknown),
    };
    let tail = || -> Vec<String> { args.iter().map(|arg| arg.to_string()).collect() };
    match *cmd {
      "push" | "pop" => {
        if args.len() != 2 {
          return Err(SyntaxErrorKind::InvalidArgumentCount {
            args: tail(),
            expected: 2,
          });
        }
        let seg = Segment::from_name(args[0])
          .ok_or_else(|| SyntaxErrorKind::InvalidSegment(args[0].to_string()))?;
        let idx = Self::parse_index(args[1])?;
        Ok(if *cmd == "push" {
          Command::Push(seg, idx)
        } else {
          Command::Pop(seg, idx)
        })
      }
      _ => {
        let op = ArithmeticOperation::from_name(cmd)
          .ok_or_else(|| SyntaxErrorKind::UnrecognisedCommand(cmd.to_string()))?;
        if !args.is_empty() {
          return Err(SyntaxErrorKind::InvalidArgumentCount {
            args: tail(),
            expected: 0,
          });
        }
        Ok(Command::Arithmetic(op))
      }
    }
  }
}

impl<'a> Iterator for Parser<'a> {
  type Item = Result<Command, SyntaxError>;

  fn next(&mut self) -> Option<Self::Item> {
    loop {
      let line = self.lines.next()?;
      self.cur_line += 1;
      let cmd = Self::strip_comment(line);
      if cmd.is_empty() {
        continue;
      }
      let parsed = Self::parse_line(cmd).map_err(|kind| SyntaxError::new(self.cur_line, kind));
      if let Ok(command) = &parsed {
        debug!("parsed line {}: {}", self.cur_line, command);
      }
      return Some(parsed);
    }
  }
}

/// Parses the whole source, stopping at the first malformed line.
pub fn parse(source: &str) -> Result<Vec<Command>, SyntaxError> {
  Parser::new(source).collect()
}
