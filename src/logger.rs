use colored::{Color, Colorize};
use log::{Level, LevelFilter, Log, Metadata, Record};

struct StderrLogger;

static LOGGER: StderrLogger = StderrLogger;

impl Log for StderrLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= log::max_level()
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}

		let level_color = match record.level() {
			Level::Error => Color::Red,
			Level::Warn => Color::Yellow,
			Level::Info => Color::Green,
			Level::Debug => Color::Blue,
			Level::Trace => Color::Magenta,
		};

		eprintln!("[{}] {}", record.level().as_str().color(level_color), record.args());
	}

	fn flush(&self) {}
}

/// Routes the `log` macros to stderr. Debug messages are only shown in debug mode.
pub(crate) fn init(debug: bool) {
	if log::set_logger(&LOGGER).is_ok() {
		log::set_max_level(if debug { LevelFilter::Debug } else { LevelFilter::Warn });
	}
}
