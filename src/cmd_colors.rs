use std::fs::File;
use std::io;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{anyhow, Context, Result};

use lectures_rs::colors::atlas::ColorAtlas;
use lectures_rs::colors::plot::Canvas;
use lectures_rs::colors::session::run;
use lectures_rs::console::Console;

use crate::commands::ColorsArgs;

fn load_atlas(path: &Path) -> Result<ColorAtlas> {
	let atlas = ColorAtlas::load_from_file(path)
		.map_err(|e| anyhow!(e))
		.with_context(|| format!("Couldn't load colors from \"{}\"", path.display()))?;

	log::debug!("{} names, {} samples in {}", atlas.len(), atlas.sample_count(), path.display());
	if atlas.is_empty() {
		eprintln!("NOTE: The color file contains no colors!")
	}

	Ok(atlas)
}

pub(crate) fn plot_colors(args: &ColorsArgs) -> Result<()> {
	let canvas = Canvas::new(args.width, args.height);
	if !canvas.is_drawable() {
		anyhow::bail!("The canvas size must be positive, got {}×{}", args.width, args.height);
	}

	let atlas = load_atlas(&args.colors_file)?;

	let mut out: Box<dyn Write> = match &args.output {
		Some(path) => {
			// no escape codes in files
			colored::control::set_override(false);
			let f = File::create(path).with_context(|| format!("Couldn't create \"{}\"", path.display()))?;
			Box::new(BufWriter::new(f))
		}
		None => Box::new(io::stdout()),
	};

	// prompts and notes stay out of the plot output
	let stdin = io::stdin();
	let mut console = Console::new(stdin.lock(), io::stderr());

	let plotted = run(&mut console, &atlas, &canvas, &args.names, &args.format, &mut *out)?;
	log::debug!("plotted {plotted} points");

	Ok(())
}
