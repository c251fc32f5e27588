//! Minimal Hack CPU used to execute translator output in tests.

use std::collections::HashMap;

pub const RAM_SIZE: usize = 32768;
const MAX_STEPS: usize = 100_000;

#[derive(Debug, Clone)]
enum Instruction {
  Address(i16),
  Compute {
    dest: String,
    comp: String,
    jump: Option<String>,
  },
}

pub struct Hack {
  pub ram: Vec<i16>,
  a: i16,
  d: i16,
}

fn predefined(symbol: &str) -> Option<i16> {
  let value = match symbol {
    "SP" => 0,
    "LCL" => 1,
    "ARG" => 2,
    "THIS" => 3,
    "THAT" => 4,
    "SCREEN" => 16384,
    "KBD" => 24576,
    _ => {
      let reg = symbol.strip_prefix('R')?.parse::<i16>().ok()?;
      if (0..16).contains(&reg) {
        reg
      } else {
        return None;
      }
    }
  };
  Some(value)
}

fn assemble(text: &str) -> Vec<Instruction> {
  let lines: Vec<&str> = text
    .lines()
    .map(|line| line.split("//").next().unwrap_or("").trim())
    .filter(|line| !line.is_empty())
    .collect();

  let mut labels = HashMap::new();
  let mut count = 0;
  for line in &lines {
    if let Some(name) = line.strip_prefix('(').and_then(|l| l.strip_suffix(')')) {
      assert!(
        labels.insert(name.to_string(), count as i16).is_none(),
        "duplicate label {}",
        name
      );
    } else {
      count += 1;
    }
  }

  let mut variables = HashMap::new();
  let mut next_var = 16;
  let mut program = vec![];
  for line in lines {
    if line.starts_with('(') {
      continue;
    }
    if let Some(symbol) = line.strip_prefix('@') {
      let value = if let Ok(v) = symbol.parse::<u16>() {
        assert!(v < 32768, "constant out of range: {}", v);
        v as i16
      } else if let Some(v) = predefined(symbol) {
        v
      } else if let Some(v) = labels.get(symbol) {
        *v
      } else {
        *variables.entry(symbol.to_string()).or_insert_with(|| {
          next_var += 1;
          next_var - 1
        })
      };
      program.push(Instruction::Address(value));
    } else {
      let (rest, jump) = match line.split_once(';') {
        Some((rest, jump)) => (rest, Some(jump.to_string())),
        None => (line, None),
      };
      let (dest, comp) = match rest.split_once('=') {
        Some((dest, comp)) => (dest.to_string(), comp.to_string()),
        None => (String::new(), rest.to_string()),
      };
      program.push(Instruction::Compute { dest, comp, jump });
    }
  }
  program
}

impl Hack {
  pub fn new() -> Self {
    let mut ram = vec![0; RAM_SIZE];
    ram[0] = 256;
    Self { ram, a: 0, d: 0 }
  }

  fn m(&self) -> i16 {
    self.ram[self.a as u16 as usize]
  }

  fn comp(&self, comp: &str) -> i16 {
    let (a, d, m) = (self.a, self.d, self.m());
    match comp {
      "0" => 0,
      "1" => 1,
      "-1" => -1,
      "D" => d,
      "A" => a,
      "M" => m,
      "!D" => !d,
      "!A" => !a,
      "!M" => !m,
      "-D" => d.wrapping_neg(),
      "-A" => a.wrapping_neg(),
      "-M" => m.wrapping_neg(),
      "D+1" => d.wrapping_add(1),
      "A+1" => a.wrapping_add(1),
      "M+1" => m.wrapping_add(1),
      "D-1" => d.wrapping_sub(1),
      "A-1" => a.wrapping_sub(1),
      "M-1" => m.wrapping_sub(1),
      "D+A" | "A+D" => d.wrapping_add(a),
      "D+M" | "M+D" => d.wrapping_add(m),
      "D-A" => d.wrapping_sub(a),
      "D-M" => d.wrapping_sub(m),
      "A-D" => a.wrapping_sub(d),
      "M-D" => m.wrapping_sub(d),
      "D&A" | "A&D" => d & a,
      "D&M" | "M&D" => d & m,
      "D|A" | "A|D" => d | a,
      "D|M" | "M|D" => d | m,
      _ => panic!("unsupported comp {}", comp),
    }
  }

  fn taken(value: i16, jump: &str) -> bool {
    match jump {
      "JGT" => value > 0,
      "JEQ" => value == 0,
      "JGE" => value >= 0,
      "JLT" => value < 0,
      "JNE" => value != 0,
      "JLE" => value <= 0,
      "JMP" => true,
      _ => panic!("unsupported jump {}", jump),
    }
  }

  /// Assembles `text` and runs it until the program counter falls off the end.
  pub fn run(&mut self, text: &str) {
    let program = assemble(text);
    let mut pc = 0;
    let mut steps = 0;
    while pc < program.len() {
      steps += 1;
      assert!(steps < MAX_STEPS, "program did not terminate");
      match &program[pc] {
        Instruction::Address(value) => {
          self.a = *value;
          pc += 1;
        }
        Instruction::Compute { dest, comp, jump } => {
          let value = self.comp(comp);
          let target = self.a;
          if dest.contains('M') {
            self.ram[target as u16 as usize] = value;
          }
          if dest.contains('A') {
            self.a = value;
          }
          if dest.contains('D') {
            self.d = value;
          }
          match jump {
            Some(jump) if Self::taken(value, jump) => pc = target as u16 as usize,
            _ => pc += 1,
          }
        }
      }
    }
  }

  pub fn sp(&self) -> usize {
    self.ram[0] as usize
  }

  /// Values between the stack base and SP, bottom first.
  pub fn stack(&self) -> Vec<i16> {
    self.ram[256..self.sp()].to_vec()
  }
}
