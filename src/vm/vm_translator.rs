use log::{debug, warn};

use crate::vm::asm_writer::AsmBlock;
use crate::vm::commands::Command;
use crate::vm::operation::{operator_code, ArithmeticOperation, OperatorKind};
use crate::vm::segment_type::{addressing_strategy, AddressingStrategy, Segment};

const STACK_BASE: u16 = 256;
const CMP_TRUE: &str = "CMPTRUE";
const CMP_END: &str = "CMPEND";

/// Translates VM commands into Hack assembly, one block per command.
///
/// The only state carried between commands is the comparison counter, so two
/// fresh generators given the same input produce identical text.
pub struct AssembleCodeGenerator {
  cmp_counter: usize,
}

impl Default for AssembleCodeGenerator {
  fn default() -> Self {
    Self::new()
  }
}

impl AssembleCodeGenerator {
  pub fn new() -> Self {
    Self { cmp_counter: 0 }
  }

  fn get_current_cmp_str(&mut self) -> (String, String) {
    self.cmp_counter += 1;
    (
      format!("{}.{}", CMP_TRUE, self.cmp_counter),
      format!("{}.{}", CMP_END, self.cmp_counter),
    )
  }

  /// SP = 256
  pub fn init_env() -> AsmBlock {
    let mut ret = AsmBlock::new();
    ret
      .comment("bootstrap")
      .at(STACK_BASE)
      .set("D", "A")
      .at("SP")
      .set("M", "D");
    ret
  }

  pub fn generate(&mut self, commands: &[Command], namespace: &str) -> String {
    commands
      .iter()
      .map(|cmd| self.get_asm(cmd, namespace).to_string())
      .collect::<Vec<_>>()
      .join("\n")
  }

  pub fn get_asm(&mut self, cmd: &Command, namespace: &str) -> AsmBlock {
    let mut ret = AsmBlock::new();
    ret.comment(cmd);
    let mut body = match cmd {
      Command::Push(seg, idx) => Self::handle_push(*seg, *idx, namespace),
      Command::Pop(seg, idx) => Self::handle_pop(*seg, *idx, namespace),
      Command::Arithmetic(op) => self.handle_arithmetic(*op),
    };
    ret.append(&mut body);
    debug!("{} -> {} instructions", cmd, ret.len() - 1);
    ret
  }

  fn forward_sp() -> AsmBlock {
    let mut ret = AsmBlock::new();
    ret.at("SP").set("M", "M+1");
    ret
  }

  fn backward_sp() -> AsmBlock {
    let mut ret = AsmBlock::new();
    ret.at("SP").set("M", "M-1");
    ret
  }

  // mem[sp]--
  // D = mem[mem[sp]]
  fn load_sp_to_d() -> AsmBlock {
    let mut ret = Self::backward_sp();
    ret.set("A", "M").set("D", "M");
    ret
  }

  // mem[mem[sp]] = D
  // mem[sp]++
  fn set_d_to_sp() -> AsmBlock {
    let mut ret = AsmBlock::new();
    ret.at("SP").set("A", "M").set("M", "D");
    ret.append(&mut Self::forward_sp());
    ret
  }

  fn handle_push(seg: Segment, idx: u16, namespace: &str) -> AsmBlock {
    let mut ret = AsmBlock::new();
    match addressing_strategy(seg, namespace) {
      // D = mem[mem[base] + i]
      AddressingStrategy::Indirect(base) => {
        ret
          .at(base)
          .set("D", "M")
          .at(idx)
          .set("A", "D+A")
          .set("D", "M");
      }
      // D = mem[base + i]
      AddressingStrategy::Direct(base) => {
        ret
          .at(idx)
          .set("D", "A")
          .at(base)
          .set("A", "D+A")
          .set("D", "M");
      }
      // D = i
      AddressingStrategy::Constant => {
        ret.at(idx).set("D", "A");
      }
      // D = namespace.i
      AddressingStrategy::StaticVar(ns) => {
        ret.at(format!("{}.{}", ns, idx)).set("D", "M");
      }
    }
    ret.append(&mut Self::set_d_to_sp());
    ret
  }

  fn handle_pop(seg: Segment, idx: u16, namespace: &str) -> AsmBlock {
    let mut ret = AsmBlock::new();
    let has_target = match addressing_strategy(seg, namespace) {
      // D = mem[base] + i
      AddressingStrategy::Indirect(base) => {
        ret.at(base).set("D", "M").at(idx).set("D", "D+A");
        true
      }
      AddressingStrategy::Direct(base) => {
        ret.at(idx).set("D", "A").at(base).set("D", "D+A");
        true
      }
      AddressingStrategy::StaticVar(ns) => {
        ret.at(format!("{}.{}", ns, idx)).set("D", "A");
        true
      }
      AddressingStrategy::Constant => {
        warn!("pop constant {} has no target address, value is discarded", idx);
        false
      }
    };
    if has_target {
      ret.at("R13").set("M", "D");
    }
    ret.append(&mut Self::load_sp_to_d());
    if has_target {
      // mem[R13] = D
      ret.at("R13").set("A", "M").set("M", "D");
    }
    ret
  }

  fn handle_arithmetic(&mut self, op: ArithmeticOperation) -> AsmBlock {
    let mut ret = AsmBlock::new();
    match operator_code(op) {
      OperatorKind::BinaryInfix(comp) => {
        // D = right, A -> left, left = left op right
        ret
          .at("SP")
          .set("AM", "M-1")
          .set("D", "M")
          .set("A", "A-1")
          .set("M", comp);
      }
      OperatorKind::UnaryPrefix(comp) => {
        ret.at("SP").set("A", "M-1").set("M", comp);
      }
      OperatorKind::Comparison(jump) => {
        let (on_true, end) = self.get_current_cmp_str();
        ret
          .at("SP")
          .set("AM", "M-1")
          .set("D", "M")
          .set("A", "A-1")
          .set("D", "M-D")
          .at(&on_true)
          .jump("D", jump)
          .at("SP")
          .set("A", "M-1")
          .set("M", "0")
          .at(&end)
          .jump("0", "JMP")
          .label(&on_true)
          .at("SP")
          .set("A", "M-1")
          .set("M", "-1")
          .label(&end);
      }
    }
    ret
  }
}
