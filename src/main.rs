use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use humansize::DECIMAL;

use crate::cmd_carbon::carbon_dating;
use crate::cmd_colors::plot_colors;
use crate::cmd_guess::guess_my_number;
use crate::cmd_palindrome::check_palindromes;
use crate::commands::{Cli, Commands};

mod cmd_carbon;
mod cmd_colors;
mod cmd_guess;
mod cmd_palindrome;
mod commands;
mod logger;

fn main() -> ExitCode {
	let cli = Cli::parse();
	logger::init(cli.debug);

	let mut output: Option<&PathBuf> = None;

	let result = match &cli.command {
		Some(Commands::Colors(args)) => {
			output = args.output.as_ref();
			plot_colors(args)
		}
		Some(Commands::Carbon(args)) => carbon_dating(args),
		Some(Commands::Guess(args)) => guess_my_number(args),
		Some(Commands::Palindrome(args)) => check_palindromes(args),
		None => {
			eprintln!("No command given, see --help");
			return ExitCode::FAILURE;
		}
	};

	match result {
		Ok(_) => {
			if let Some(output) = output {
				match fs::metadata(output) {
					Ok(m) => {
						let size = humansize::format_size(m.len(), DECIMAL);
						println!("Output file size: {size}");
					}
					Err(err) => {
						eprintln!("Can't determine output file size: {err}");
					}
				}
			}
			ExitCode::SUCCESS
		}
		Err(e) => {
			eprintln!("execution failed: {e:#}");
			ExitCode::FAILURE
		}
	}
}
