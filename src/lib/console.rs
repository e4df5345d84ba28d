use std::fmt::{Display, Formatter};
use std::io::{BufRead, Write};

/// A prompt-driven line reader paired with a line-oriented writer.
///
/// Works over any reader/writer pair, so the interactive programs can run against
/// stdin/stdout as well as in-memory buffers.
pub struct Console<R, W> {
	reader: R,
	writer: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
	pub fn new(reader: R, writer: W) -> Self {
		Self { reader, writer }
	}

	pub fn print<S: AsRef<str>>(&mut self, s: S) -> Result<(), ConsoleError> {
		self.writer.write_all(s.as_ref().as_bytes())?;
		self.writer.flush()?;
		Ok(())
	}

	pub fn println<S: AsRef<str>>(&mut self, s: S) -> Result<(), ConsoleError> {
		writeln!(self.writer, "{}", s.as_ref())?;
		Ok(())
	}

	/// Prints the prompt and reads one line without its line terminator.
	pub fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
		self.print(prompt)?;

		let mut line = String::new();
		if self.reader.read_line(&mut line)? == 0 {
			return Err(ConsoleError::Eof);
		}

		let trimmed_len = line.trim_end_matches(['\n', '\r']).len();
		line.truncate(trimmed_len);
		Ok(line)
	}

	pub fn read_int(&mut self, prompt: &str) -> Result<i64, ConsoleError> {
		let line = self.read_line(prompt)?;
		let trimmed = line.trim();
		trimmed.parse::<i64>().map_err(|e| ConsoleError::InvalidNumber {
			input: trimmed.to_string(),
			msg: e.to_string(),
		})
	}

	pub fn read_double(&mut self, prompt: &str) -> Result<f64, ConsoleError> {
		let line = self.read_line(prompt)?;
		let trimmed = line.trim();
		trimmed.parse::<f64>().map_err(|e| ConsoleError::InvalidNumber {
			input: trimmed.to_string(),
			msg: e.to_string(),
		})
	}

	pub fn writer(&self) -> &W {
		&self.writer
	}
}

#[derive(Debug)]
pub enum ConsoleError {
	Eof,
	InvalidNumber { input: String, msg: String },
	IoErr(std::io::Error),
}

impl Display for ConsoleError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			ConsoleError::Eof => write!(f, "Reached the end of the input"),
			ConsoleError::InvalidNumber { input, msg } => write!(f, "\"{input}\" is not a valid number: {msg}"),
			ConsoleError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for ConsoleError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			ConsoleError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for ConsoleError {
	fn from(e: std::io::Error) -> Self {
		ConsoleError::IoErr(e)
	}
}
