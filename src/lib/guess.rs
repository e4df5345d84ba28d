use std::cmp::Ordering;
use std::io::{BufRead, Write};

use rand::Rng;

use crate::console::{Console, ConsoleError};

/// Secrets are drawn from `0..SECRET_LIMIT`.
pub const SECRET_LIMIT: u32 = 100;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Verdict {
	TooLow,
	TooHigh,
	Correct,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GuessGame {
	secret: u32,
	attempts: u32,
}

impl GuessGame {
	/// Starts a game with a known secret. Values past the limit are wrapped into range.
	pub fn new(secret: u32) -> Self {
		Self { secret: secret % SECRET_LIMIT, attempts: 0 }
	}

	pub fn random() -> Self {
		Self::new(rand::thread_rng().gen_range(0..SECRET_LIMIT))
	}

	pub fn secret(&self) -> u32 {
		self.secret
	}

	pub fn attempts(&self) -> u32 {
		self.attempts
	}

	pub fn judge(&mut self, guess: i64) -> Verdict {
		self.attempts += 1;

		match guess.cmp(&(self.secret as i64)) {
			Ordering::Less => Verdict::TooLow,
			Ordering::Greater => Verdict::TooHigh,
			Ordering::Equal => Verdict::Correct,
		}
	}
}

/// Plays one round until the secret is guessed. Returns the number of guesses it took.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, game: &mut GuessGame) -> Result<u32, ConsoleError> {
	console.println(format!("I am thinking of a number between 0 and {}...", SECRET_LIMIT - 1))?;

	let mut guess = console.read_int("Enter a guess: ")?;
	loop {
		match game.judge(guess) {
			Verdict::Correct => break,
			Verdict::TooLow => console.println("Your guess is too low")?,
			Verdict::TooHigh => console.println("Your guess is too high")?,
		}

		console.println("")?;
		guess = console.read_int("Enter a new number: ")?;
	}

	console.println(format!("Congrats! The number was: {}", game.secret()))?;
	Ok(game.attempts())
}
