use std::io;

use anyhow::Result;

use lectures_rs::console::Console;
use lectures_rs::guess::{run, GuessGame};

use crate::commands::GuessArgs;

pub(crate) fn guess_my_number(args: &GuessArgs) -> Result<()> {
	let mut game = match args.secret {
		Some(secret) => GuessGame::new(secret),
		None => GuessGame::random(),
	};
	log::debug!("the secret number is {}", game.secret());

	let stdin = io::stdin();
	let mut console = Console::new(stdin.lock(), io::stdout());

	let attempts = run(&mut console, &mut game)?;
	log::debug!("guessed after {attempts} attempts");

	Ok(())
}
