use std::collections::HashMap;
use std::fmt;

const ARGUMENT: &str = "argument";
const LOCAL: &str = "local";
const STATIC: &str = "static";
const CONSTANT: &str = "constant";
const THIS: &str = "this";
const THAT: &str = "that";
const POINTER: &str = "pointer";
const TEMP: &str = "temp";

lazy_static! {
  static ref SEGMENT_TABLE: HashMap<&'static str, Segment> = {
    let mut map = HashMap::new();
    map.insert(ARGUMENT, Segment::Argument);
    map.insert(LOCAL, Segment::Local);
    map.insert(STATIC, Segment::Static);
    map.insert(CONSTANT, Segment::Constant);
    map.insert(THIS, Segment::This);
    map.insert(THAT, Segment::That);
    map.insert(POINTER, Segment::Pointer);
    map.insert(TEMP, Segment::Temp);
    map
  };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Segment {
  Local,
  Argument,
  This,
  That,
  Pointer,
  Static,
  Temp,
  Constant,
}

/// How a `(segment, index)` pair turns into a target address.
#[derive(Debug, Clone, PartialEq)]
pub enum AddressingStrategy<'a> {
  /// `RAM[base_pointer] + index`
  Indirect(&'static str),
  /// `base + index`
  Direct(u16),
  /// The index is the value itself.
  Constant,
  /// `<namespace>.<index>`
  StaticVar(&'a str),
}

impl Segment {
  pub fn from_name(seg: &str) -> Option<Self> {
    SEGMENT_TABLE.get(seg).copied()
  }

  pub fn to_vm_string(&self) -> &'static str {
    match self {
      Self::Argument => ARGUMENT,
      Self::Local => LOCAL,
      Self::Static => STATIC,
      Self::Constant => CONSTANT,
      Self::This => THIS,
      Self::That => THAT,
      Self::Pointer => POINTER,
      Self::Temp => TEMP,
    }
  }
}

impl fmt::Display for Segment {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.to_vm_string())
  }
}

pub fn addressing_strategy(segment: Segment, namespace: &str) -> AddressingStrategy<'_> {
  match segment {
    Segment::Local => AddressingStrategy::Indirect("LCL"),
    Segment::Argument => AddressingStrategy::Indirect("ARG"),
    Segment::This => AddressingStrategy::Indirect("THIS"),
    Segment::That => AddressingStrategy::Indirect("THAT"),
    // this:3 that:4
    Segment::Pointer => AddressingStrategy::Direct(3),
    Segment::Temp => AddressingStrategy::Direct(5),
    Segment::Static => AddressingStrategy::StaticVar(namespace),
    Segment::Constant => AddressingStrategy::Constant,
  }
}
