use std::io::{BufRead, Write};

use colored::Colorize;
use serde::Serialize;

use crate::colors::atlas::{normalize_name, ColorAtlas};
use crate::colors::plot::{Canvas, Circle, PlottedPoint};
use crate::console::{Console, ConsoleError};
use crate::enums::PlotFormat;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct NamedPlot {
	pub name: String,
	pub points: Vec<PlottedPoint>,
}

/// The JSON document: the canvas, its outline circle, and one entry per requested name.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PlotReport {
	pub canvas: Canvas,
	pub circle: Circle,
	pub plots: Vec<NamedPlot>,
}

fn write_swatches(out: &mut dyn Write, name: &str, points: &[PlottedPoint]) -> Result<(), ConsoleError> {
	for p in points {
		let swatch = "██".truecolor(p.color.r, p.color.g, p.color.b);
		writeln!(out, "{swatch} {} at ({:.1}, {:.1})", p.color, p.x, p.y)?;
	}

	if !points.is_empty() {
		let noun = if points.len() == 1 { "sample" } else { "samples" };
		writeln!(out, "{} {noun} named \"{}\"", points.len(), name.trim())?;
	}

	Ok(())
}

/// Plots every name in `names`, or every name read from `console` if there are none.
///
/// Prompts and notes about unknown names go to the console. Plot output goes to `out`,
/// so it can be piped or redirected on its own. Returns the number of plotted points.
pub fn run<R: BufRead, W: Write>(
	console: &mut Console<R, W>, atlas: &ColorAtlas, canvas: &Canvas,
	names: &[String], format: &PlotFormat, out: &mut dyn Write,
) -> Result<usize, ConsoleError> {
	let mut plots: Vec<NamedPlot> = Vec::new();
	let mut plotted = 0;

	let mut plot_name = |console: &mut Console<R, W>, out: &mut dyn Write, name: &str| -> Result<(), ConsoleError> {
		let points = atlas.points(name, canvas);
		log::debug!("plotting {} samples for \"{}\"", points.len(), name.trim());
		plotted += points.len();

		if points.is_empty() {
			console.println(format!("NOTE: There is no color named \"{}\"", name.trim()))?;
		}

		match format {
			PlotFormat::Swatch => {
				write_swatches(out, name, &points)?;
				out.flush()?;
			}
			PlotFormat::Json => plots.push(NamedPlot { name: normalize_name(name), points }),
		}

		Ok(())
	};

	if names.is_empty() {
		loop {
			let name = match console.read_line("Color: ") {
				Ok(name) => name,
				Err(ConsoleError::Eof) => break,
				Err(e) => return Err(e),
			};

			if name.trim().is_empty() {
				continue;
			}

			plot_name(&mut *console, &mut *out, &name)?;
		}
	} else {
		for name in names {
			plot_name(&mut *console, &mut *out, name)?;
		}
	}

	if format == &PlotFormat::Json {
		let report = PlotReport { canvas: *canvas, circle: canvas.bounding_circle(), plots };
		serde_json::to_writer_pretty(&mut *out, &report).map_err(std::io::Error::from)?;
		writeln!(out)?;
	}

	out.flush()?;
	Ok(plotted)
}
