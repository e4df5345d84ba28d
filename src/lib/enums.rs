#[derive(clap::ValueEnum, Clone, Default, Debug, PartialEq)]
pub enum Strictness {
	/// Compares the text character by character.
	#[default] Exact,
	/// Ignores case, whitespace, and punctuation.
	Loose,
}

#[derive(clap::ValueEnum, Clone, Default, Debug, PartialEq)]
pub enum PlotFormat {
	/// One colored line per plotted point.
	#[default] Swatch,
	/// The canvas, its bounding circle, and all plotted points as JSON.
	Json,
}
