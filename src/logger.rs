use log::{LevelFilter, Metadata, SetLoggerError};

use std::str::FromStr;

// Level filtering goes through `log::max_level()`, so the logger itself is stateless.
struct StderrLogger;

impl log::Log for StderrLogger {
  fn enabled(&self, metadata: &Metadata) -> bool {
    metadata.level() <= log::max_level()
  }
  fn log(&self, rec: &log::Record) {
    if !self.enabled(rec.metadata()) {
      return;
    }
    let log_str = format!(
      "[{}] {}:{} {}",
      rec.level(),
      rec.file().unwrap_or("unknown file"),
      rec.line().unwrap_or(0),
      rec.args()
    );
    eprintln!("{}", log_str)
  }
  fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

pub fn parse_level(level_str: &str) -> LevelFilter {
  LevelFilter::from_str(level_str).unwrap_or(LevelFilter::Info)
}

pub fn setup(level_str: &str) -> Result<(), SetLoggerError> {
  let level_filter = parse_level(level_str);
  log::set_logger(&LOGGER).map(|()| log::set_max_level(level_filter))
}
