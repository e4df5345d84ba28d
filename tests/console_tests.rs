use std::io::Cursor;

use lectures_rs::carbon::{sample_age, HALF_LIFE_YEARS};
use lectures_rs::console::{Console, ConsoleError};
use lectures_rs::enums::Strictness;
use lectures_rs::guess::{GuessGame, Verdict};
use lectures_rs::palindrome::{is_palindrome, reverse};
use lectures_rs::{carbon, guess, palindrome};

fn console(input: &str) -> Console<Cursor<Vec<u8>>, Vec<u8>> {
	Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn transcript(console: &Console<Cursor<Vec<u8>>, Vec<u8>>) -> String {
	String::from_utf8(console.writer().clone()).unwrap()
}

#[test]
fn console_reading() {
	let mut c = console("hello world\r\n 42 \n3.5\n");

	assert_eq!(c.read_line("> ").unwrap(), "hello world");
	assert_eq!(c.read_int("int? ").unwrap(), 42);
	assert_eq!(c.read_double("double? ").unwrap(), 3.5);
	assert!(matches!(c.read_line("> "), Err(ConsoleError::Eof)));

	assert_eq!(transcript(&c), "> int? double? > ");
}

#[test]
fn console_invalid_number() {
	let mut c = console("forty-two\n");

	match c.read_int("Enter a guess: ") {
		Err(ConsoleError::InvalidNumber { input, .. }) => assert_eq!(input, "forty-two"),
		other => panic!("unexpected result: {other:?}"),
	}
}

#[test]
fn carbon_sample_age() {
	assert_eq!(sample_age(13.6), 0.0);
	assert_eq!(sample_age(6.8), HALF_LIFE_YEARS);
	assert_eq!(sample_age(3.4), 2.0 * HALF_LIFE_YEARS);
	assert!(sample_age(27.2) < 0.0);
	assert!(sample_age(0.0).is_infinite());
}

#[test]
fn carbon_session() {
	let mut c = console("6.8\n");
	let age = carbon::run(&mut c).unwrap();

	assert_eq!(age, 5730.0);
	assert_eq!(
		transcript(&c),
		"Radioactive molecule = C14\n\
		Halflife = 5730 years\n\
		C14 in living organisms = 13.6 dpm\n\
		-----\n\
		\n\
		How much c14 in your sample? Your sample is 5730 years old\n"
	);
}

#[test]
fn guess_verdicts() {
	let mut game = GuessGame::new(42);

	assert_eq!(game.judge(0), Verdict::TooLow);
	assert_eq!(game.judge(-5), Verdict::TooLow);
	assert_eq!(game.judge(99), Verdict::TooHigh);
	assert_eq!(game.judge(42), Verdict::Correct);
	assert_eq!(game.attempts(), 4);
}

#[test]
fn guess_random_secret_in_range() {
	for _ in 0..100 {
		assert!(GuessGame::random().secret() < guess::SECRET_LIMIT);
	}
}

#[test]
fn guess_session() {
	let mut c = console("50\n10\n42\n");
	let mut game = GuessGame::new(42);

	let attempts = guess::run(&mut c, &mut game).unwrap();

	assert_eq!(attempts, 3);
	assert_eq!(
		transcript(&c),
		"I am thinking of a number between 0 and 99...\n\
		Enter a guess: Your guess is too high\n\
		\n\
		Enter a new number: Your guess is too low\n\
		\n\
		Enter a new number: Congrats! The number was: 42\n"
	);
}

#[test]
fn guess_session_runs_out_of_input() {
	let mut c = console("1\n");
	let mut game = GuessGame::new(2);

	assert!(matches!(guess::run(&mut c, &mut game), Err(ConsoleError::Eof)));
}

#[test]
fn palindrome_checks() {
	assert_eq!(reverse("stressed"), "desserts");
	assert_eq!(reverse("añb"), "bña");

	assert!(is_palindrome("racecar", &Strictness::Exact));
	assert!(is_palindrome("", &Strictness::Exact));
	assert!(is_palindrome("x", &Strictness::Exact));
	assert!(!is_palindrome("Racecar", &Strictness::Exact));
	assert!(!is_palindrome("never odd or even", &Strictness::Exact));

	assert!(is_palindrome("Racecar", &Strictness::Loose));
	assert!(is_palindrome("never odd or even", &Strictness::Loose));
	assert!(is_palindrome("A man, a plan, a canal: Panama!", &Strictness::Loose));
	assert!(!is_palindrome("hello, world", &Strictness::Loose));
}

#[test]
fn palindrome_session() {
	let input = "racecar\nhello\nNo lemon, no melon\n";

	let mut c = console(input);
	assert_eq!(palindrome::run(&mut c, &Strictness::Exact).unwrap(), 3);
	assert_eq!(
		transcript(&c),
		"Enter text: Is a palindrome!\n\
		Enter text: Is not a palindrome\n\
		Enter text: Is not a palindrome\n\
		Enter text: "
	);

	let mut c = console(input);
	assert_eq!(palindrome::run(&mut c, &Strictness::Loose).unwrap(), 3);
	assert!(transcript(&c).ends_with("Enter text: Is a palindrome!\nEnter text: "));
}
