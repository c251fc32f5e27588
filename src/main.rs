use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use log::info;

use vm_translator::common::{default_output_path, namespace_for, new_output};
use vm_translator::logger;
use vm_translator::parser::parse;
use vm_translator::vm::vm_translator::AssembleCodeGenerator;

#[derive(Parser, Debug)]
#[clap(about, version, author)]
struct Args {
  /// VM file to translate.
  path: PathBuf,

  /// Output file, defaults to the input path with an `.asm` extension.
  #[clap(short, long)]
  output: Option<PathBuf>,

  /// Print the assembly instead of writing a file.
  #[clap(long, conflicts_with = "output")]
  stdout: bool,

  /// Prepend a block initialising SP to 256.
  #[clap(long)]
  init_sp: bool,

  #[clap(long, default_value = "info")]
  log_level: String,
}

fn main() -> Result<()> {
  let args = Args::parse();
  logger::setup(&args.log_level).map_err(|e| anyhow!("install logger: {}", e))?;

  let source = std::fs::read_to_string(&args.path)
    .with_context(|| format!("read {}", args.path.display()))?;
  let namespace = namespace_for(&args.path);
  let commands = parse(&source).with_context(|| format!("parse {}", args.path.display()))?;
  info!("parsed {} commands from {}", commands.len(), args.path.display());

  let mut text = String::new();
  if args.init_sp {
    text.push_str(&AssembleCodeGenerator::init_env().to_string());
    if !commands.is_empty() {
      text.push('\n');
    }
  }
  text.push_str(&AssembleCodeGenerator::new().generate(&commands, &namespace));

  let out_path = if args.stdout {
    None
  } else {
    Some(args.output.unwrap_or_else(|| default_output_path(&args.path)))
  };
  let target = out_path.as_deref();
  let mut output = new_output(target).with_context(|| {
    format!("open {}", target.unwrap_or_else(|| Path::new("stdout")).display())
  })?;
  output.write_all(text.as_bytes())?;
  output.flush()?;
  if let Some(path) = out_path {
    info!("wrote {}", path.display());
  }
  Ok(())
}
