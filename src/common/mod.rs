use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

/// Where the generated assembly goes.
pub enum OutputTarget {
  File(BufWriter<File>),
  Stdout(io::Stdout),
}

pub fn new_output(target: Option<&Path>) -> io::Result<OutputTarget> {
  match target {
    Some(path) => Ok(OutputTarget::File(BufWriter::new(File::create(path)?))),
    None => Ok(OutputTarget::Stdout(io::stdout())),
  }
}

impl Write for OutputTarget {
  fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
    match self {
      OutputTarget::File(writer) => writer.write(buf),
      OutputTarget::Stdout(writer) => writer.write(buf),
    }
  }

  fn flush(&mut self) -> io::Result<()> {
    match self {
      OutputTarget::File(writer) => writer.flush(),
      OutputTarget::Stdout(writer) => writer.flush(),
    }
  }
}

const DEFAULT_NAMESPACE: &str = "Static";

/// Static symbols are qualified with the source's base file name.
pub fn namespace_for(source: &Path) -> String {
  source
    .file_stem()
    .map(|stem| stem.to_string_lossy().into_owned())
    .filter(|stem| !stem.is_empty())
    .unwrap_or_else(|| DEFAULT_NAMESPACE.to_string())
}

/// `dir/Foo.vm` -> `dir/Foo.asm`
pub fn default_output_path(source: &Path) -> PathBuf {
  source.with_extension("asm")
}
