use std::io;

use anyhow::Result;

use lectures_rs::carbon::{print_age, print_introduction, run, sample_age};
use lectures_rs::console::Console;

use crate::commands::CarbonArgs;

pub(crate) fn carbon_dating(args: &CarbonArgs) -> Result<()> {
	let stdin = io::stdin();
	let mut console = Console::new(stdin.lock(), io::stdout());

	let age = match args.amount {
		Some(amount) => {
			print_introduction(&mut console)?;
			let age = sample_age(amount);
			print_age(&mut console, age)?;
			age
		}
		None => run(&mut console)?,
	};

	log::debug!("computed sample age: {age:.3} years");

	if !age.is_finite() {
		eprintln!("NOTE: The amount of C14 needs to be greater than 0!")
	} else if age < 0.0 {
		eprintln!("NOTE: The sample contains more C14 than a living organism!")
	}

	Ok(())
}
