use std::io;

use anyhow::Result;

use lectures_rs::console::Console;
use lectures_rs::palindrome::run;

use crate::commands::PalindromeArgs;

pub(crate) fn check_palindromes(args: &PalindromeArgs) -> Result<()> {
	log::debug!("comparing texts in {} mode", args.strictness);

	let stdin = io::stdin();
	let mut console = Console::new(stdin.lock(), io::stdout());

	let checked = run(&mut console, &args.strictness)?;
	log::debug!("checked {checked} texts");

	Ok(())
}
