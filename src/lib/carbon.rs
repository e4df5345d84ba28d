use std::io::{BufRead, Write};

use crate::console::{Console, ConsoleError};

// http://hyperphysics.phy-astr.gsu.edu/hbase/Nuclear/cardat.html

pub const HALF_LIFE_YEARS: f64 = 5730.0;
pub const LIVING_C14_DPM: f64 = 13.6;

/// Estimates the age of a sample in years from its remaining C14 activity in decays per minute.
/// That's the number of half-lives needed to decay from the living level down to `amount_dpm`.
pub fn sample_age(amount_dpm: f64) -> f64 {
	(LIVING_C14_DPM / amount_dpm).log2() * HALF_LIFE_YEARS
}

pub fn print_introduction<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<(), ConsoleError> {
	console.println("Radioactive molecule = C14")?;
	console.println(format!("Halflife = {HALF_LIFE_YEARS} years"))?;
	console.println(format!("C14 in living organisms = {LIVING_C14_DPM} dpm"))?;
	console.println("-----")?;
	console.println("")
}

pub fn print_age<R: BufRead, W: Write>(console: &mut Console<R, W>, age: f64) -> Result<(), ConsoleError> {
	console.println(format!("Your sample is {age} years old"))
}

/// Asks for the amount of C14 in a sample and prints its age. Returns the age.
pub fn run<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<f64, ConsoleError> {
	print_introduction(console)?;

	let amount = console.read_double("How much c14 in your sample? ")?;
	let age = sample_age(amount);
	print_age(console, age)?;

	Ok(age)
}
