use std::io::{BufRead, Write};
use std::sync::LazyLock;

use regex::Regex;

use crate::console::{Console, ConsoleError};
use crate::enums::Strictness;

static NOT_ALPHANUMERIC: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[^\p{L}\p{N}]").unwrap());

pub fn reverse(text: &str) -> String {
	text.chars().rev().collect()
}

pub fn is_palindrome(text: &str, strictness: &Strictness) -> bool {
	let text = match strictness {
		Strictness::Exact => text.to_string(),
		Strictness::Loose => NOT_ALPHANUMERIC.replace_all(&text.to_lowercase(), "").into_owned(),
	};

	text == reverse(&text)
}

/// Keeps checking texts until the input runs out. Returns how many texts were checked.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>, strictness: &Strictness) -> Result<usize, ConsoleError> {
	let mut checked = 0;

	loop {
		let original = match console.read_line("Enter text: ") {
			Ok(line) => line,
			Err(ConsoleError::Eof) => break,
			Err(e) => return Err(e),
		};

		if is_palindrome(&original, strictness) {
			console.println("Is a palindrome!")?;
		} else {
			console.println("Is not a palindrome")?;
		}

		checked += 1;
	}

	Ok(checked)
}
