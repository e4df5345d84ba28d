use std::collections::HashMap;
use std::fmt::{Display, Formatter};
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::colors::color::Color;
use crate::colors::plot::{Canvas, PlottedPoint};
use crate::colors::RECORD_LINES;

/// Every color name from a naming survey data file, each mapped to all RGB triplets
/// that were given that name, in file order.
///
/// The data file consists of 4-line records (name, red, green, blue) with no header.
/// An atlas can only be built by loading such a file and is read-only afterwards.
#[derive(Clone, Default, Debug, PartialEq)]
pub struct ColorAtlas {
	colors: HashMap<String, Vec<Color>>,
	samples: usize,
}

/// Case-folds a color name the same way for loading and for lookups.
pub fn normalize_name(name: &str) -> String {
	name.trim().to_lowercase()
}

fn parse_component(s: &str, line: usize, channel: &str) -> Result<u8, LoadError> {
	let trimmed = s.trim();
	let value = trimmed.parse::<i64>()
		.map_err(|_| LoadError::InvalidComponent { line, msg: format!("Invalid {channel} value \"{trimmed}\"") })?;

	u8::try_from(value).map_err(|_| LoadError::ComponentOutOfRange { line, value })
}

impl ColorAtlas {
	fn from_atlas_internal<R: BufRead>(reader: R) -> Result<ColorAtlas, LoadError> {
		let mut colors: HashMap<String, Vec<Color>> = HashMap::new();
		let mut samples = 0;

		let mut lines = reader.lines();
		let mut first_line = 1;

		loop {
			let mut record: Vec<String> = Vec::with_capacity(RECORD_LINES);
			for line in lines.by_ref().take(RECORD_LINES) {
				record.push(line?);
			}

			// a partial record at the end of the file is dropped, not reported
			if record.len() < RECORD_LINES {
				if !record.is_empty() {
					log::debug!("ignoring {} trailing line(s) starting at line {first_line}", record.len());
				}
				break;
			}

			let color = Color::from([
				parse_component(&record[1], first_line + 1, "red")?,
				parse_component(&record[2], first_line + 2, "green")?,
				parse_component(&record[3], first_line + 3, "blue")?,
			]);

			colors.entry(normalize_name(&record[0])).or_default().push(color);
			samples += 1;
			first_line += RECORD_LINES;
		}

		log::debug!("loaded {samples} color samples for {} names", colors.len());

		Ok(ColorAtlas { colors, samples })
	}

	pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<ColorAtlas, LoadError> {
		let f = File::open(path)?;
		let reader = BufReader::new(f);
		Self::from_atlas_internal(reader)
	}

	pub fn from_reader<R: BufRead>(reader: R) -> Result<ColorAtlas, LoadError> {
		Self::from_atlas_internal(reader)
	}

	pub fn from_string<S: Into<String>>(s: S) -> Result<ColorAtlas, LoadError> {
		let s = s.into();
		let reader = BufReader::new(s.as_bytes());
		Self::from_atlas_internal(reader)
	}

	/// Returns all samples for a name. Unknown names yield an empty slice.
	pub fn lookup(&self, name: &str) -> &[Color] {
		self.colors
			.get(&normalize_name(name))
			.map(Vec::as_slice)
			.unwrap_or_default()
	}

	pub fn contains(&self, name: &str) -> bool {
		!self.lookup(name).is_empty()
	}

	/// The number of distinct color names.
	pub fn len(&self) -> usize {
		self.colors.len()
	}

	pub fn is_empty(&self) -> bool {
		self.colors.is_empty()
	}

	/// The number of RGB triplets across all names.
	pub fn sample_count(&self) -> usize {
		self.samples
	}

	/// All stored names in alphabetical order.
	pub fn names(&self) -> Vec<&str> {
		let mut names = self.colors.keys().map(String::as_str).collect::<Vec<&str>>();
		names.sort_unstable();
		names
	}

	/// Calls `plot` once for every sample of `name` with the sample and its position on `canvas`.
	pub fn plot_all<F: FnMut(Color, f64, f64)>(&self, name: &str, canvas: &Canvas, mut plot: F) {
		for &color in self.lookup(name) {
			let (x, y) = canvas.position(color);
			plot(color, x, y);
		}
	}

	pub fn points(&self, name: &str, canvas: &Canvas) -> Vec<PlottedPoint> {
		let mut points = Vec::with_capacity(self.lookup(name).len());
		self.plot_all(name, canvas, |color, x, y| points.push(PlottedPoint { color, x, y }));
		points
	}
}

#[derive(Debug)]
pub enum LoadError {
	InvalidComponent { line: usize, msg: String },
	ComponentOutOfRange { line: usize, value: i64 },
	IoErr(std::io::Error),
}

impl Display for LoadError {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			LoadError::InvalidComponent { line, msg } => write!(f, "Invalid data in line {line}: {msg}"),
			LoadError::ComponentOutOfRange { line, value } => write!(f, "Invalid data in line {line}: {value} is outside the range [0;255]"),
			LoadError::IoErr(e) => write!(f, "io error: {e}"),
		}
	}
}

impl std::error::Error for LoadError {
	fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
		match self {
			LoadError::IoErr(e) => Some(e),
			_ => None,
		}
	}
}

impl From<std::io::Error> for LoadError {
	fn from(e: std::io::Error) -> Self {
		LoadError::IoErr(e)
	}
}
