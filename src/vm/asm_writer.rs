use std::fmt;

/// One Hack instruction line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AsmLine {
  Comment(String),
  /// `@value`
  Address(String),
  /// `dest=comp;jump`
  Compute {
    dest: Option<&'static str>,
    comp: &'static str,
    jump: Option<&'static str>,
  },
  /// `(NAME)`
  Label(String),
}

impl fmt::Display for AsmLine {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self {
      AsmLine::Comment(text) => write!(f, "// {}", text),
      AsmLine::Address(value) => write!(f, "@{}", value),
      AsmLine::Compute { dest, comp, jump } => {
        if let Some(dest) = dest {
          write!(f, "{}=", dest)?;
        }
        f.write_str(comp)?;
        if let Some(jump) = jump {
          write!(f, ";{}", jump)?;
        }
        Ok(())
      }
      AsmLine::Label(name) => write!(f, "({})", name),
    }
  }
}

/// Ordered instructions emitted for a single VM command.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct AsmBlock {
  lines: Vec<AsmLine>,
}

impl AsmBlock {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn comment<T: ToString>(&mut self, text: T) -> &mut Self {
    self.lines.push(AsmLine::Comment(text.to_string()));
    self
  }

  pub fn at<T: ToString>(&mut self, value: T) -> &mut Self {
    self.lines.push(AsmLine::Address(value.to_string()));
    self
  }

  /// `dest=comp`
  pub fn set(&mut self, dest: &'static str, comp: &'static str) -> &mut Self {
    self.lines.push(AsmLine::Compute {
      dest: Some(dest),
      comp,
      jump: None,
    });
    self
  }

  /// `comp;jump`
  pub fn jump(&mut self, comp: &'static str, jump: &'static str) -> &mut Self {
    self.lines.push(AsmLine::Compute {
      dest: None,
      comp,
      jump: Some(jump),
    });
    self
  }

  pub fn label<T: ToString>(&mut self, name: T) -> &mut Self {
    self.lines.push(AsmLine::Label(name.to_string()));
    self
  }

  pub fn append(&mut self, other: &mut AsmBlock) -> &mut Self {
    self.lines.append(&mut other.lines);
    self
  }

  pub fn lines(&self) -> &[AsmLine] {
    &self.lines
  }

  pub fn len(&self) -> usize {
    self.lines.len()
  }

  pub fn is_empty(&self) -> bool {
    self.lines.is_empty()
  }
}

impl fmt::Display for AsmBlock {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    for line in &self.lines {
      writeln!(f, "{}", line)?;
    }
    Ok(())
  }
}
