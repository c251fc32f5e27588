#[macro_use]
extern crate lazy_static;

pub mod common;
pub mod logger;
pub mod parser;
pub mod vm;

use crate::parser::SyntaxError;
use crate::vm::vm_translator::AssembleCodeGenerator;

/// Parses the whole source, then generates assembly for it. Nothing is
/// generated if any line fails to parse.
pub fn translate(source: &str, namespace: &str) -> Result<String, SyntaxError> {
  let commands = parser::parse(source)?;
  Ok(AssembleCodeGenerator::new().generate(&commands, namespace))
}
