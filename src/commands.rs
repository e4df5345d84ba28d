use clap::Parser;
use clap::Subcommand;
use const_format::formatcp;
use std::path::PathBuf;

use lectures_rs::enums::{PlotFormat, Strictness};

const GIT_HASH: &str = env!("GIT_HASH");
const GIT_BRANCH: &str = env!("GIT_BRANCH");
const GIT_VERSION: &str = env!("GIT_VERSION");
const BUILD_DATE: &str = env!("BUILD_DATE");

const CLAP_VERSION: &str = formatcp!("{GIT_VERSION} [{GIT_BRANCH}, {GIT_HASH}, {BUILD_DATE}]");

#[derive(Parser, Debug, Clone)]
#[command(version = CLAP_VERSION, about = "Small programs from an introductory programming lecture")]
pub(crate) struct Cli {
	#[command(subcommand)]
	pub command: Option<Commands>,

	#[arg(long, global = true, help = "Prints diagnostic messages to stderr.")]
	pub debug: bool,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct ColorsArgs {
	#[arg(short = 'f', long = "file", help = "The color data file. (4 lines per color: name, red, green, blue)", default_value = "xkcd-colors.txt")]
	pub colors_file: PathBuf,

	#[arg(help = "The color names to plot. Prompts for names if none are given.")]
	pub names: Vec<String>,

	#[arg(long = "vw", help = "Sets the canvas width.", default_value_t = 500.0)]
	pub width: f64,
	#[arg(long = "vh", help = "Sets the canvas height.", default_value_t = 500.0)]
	pub height: f64,

	#[arg(short = 'F', long, value_enum, help = "Sets the output format.", default_value_t = PlotFormat::default())]
	pub format: PlotFormat,
	#[arg(short, long, help = "Writes the output to a file instead of stdout.")]
	pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct CarbonArgs {
	#[arg(short, long, help = "The amount of C14 in the sample in dpm. Prompts for it if not given.")]
	pub amount: Option<f64>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct GuessArgs {
	#[arg(long, help = "Uses a fixed secret number instead of a random one.", value_parser = clap::value_parser!(u32).range(0..100))]
	pub secret: Option<u32>,
}

#[derive(Parser, Debug, Clone)]
pub(crate) struct PalindromeArgs {
	#[arg(short, long, value_enum, help = "Sets how strictly texts are compared.", default_value_t = Strictness::default())]
	pub strictness: Strictness,
}

#[derive(Subcommand, Debug, Clone)]
pub(crate) enum Commands {
	#[command(about = "Plots named colors from the xkcd color survey on a hue/saturation wheel")]
	Colors(ColorsArgs),

	#[command(about = "Calculates the age of a sample from its remaining C14")]
	Carbon(CarbonArgs),

	#[command(about = "Guess a number between 0 and 99")]
	Guess(GuessArgs),

	#[command(about = "Checks whether texts are palindromes")]
	Palindrome(PalindromeArgs),
}
