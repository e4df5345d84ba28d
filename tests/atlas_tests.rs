use std::io::{BufReader, Write};
use std::path::PathBuf;

use lectures_rs::colors::atlas::{ColorAtlas, LoadError};
use lectures_rs::colors::color::Color;

fn test_file(name: &str) -> PathBuf {
	PathBuf::from(env!("CARGO_MANIFEST_DIR")).join(format!("tests/colors/{name}"))
}

#[test]
fn atlas_loading() {
	let atlas = ColorAtlas::load_from_file(test_file("colors.txt")).unwrap();

	assert_eq!(atlas.len(), 4);
	assert_eq!(atlas.sample_count(), 6);
	assert_eq!(atlas.names(), vec!["blue", "gray", "green", "red"]);

	// samples keep their file order, no matter how the name was capitalized
	assert_eq!(
		atlas.lookup("red"),
		&[Color::new(255, 0, 0), Color::new(229, 0, 0), Color::new(200, 10, 20)]
	);
	assert_eq!(atlas.lookup("blue"), &[Color::new(0, 0, 255)]);
	assert_eq!(atlas.lookup("green"), &[Color::new(21, 176, 26)]);
}

#[test]
fn atlas_lookup_ignores_case() {
	let atlas = ColorAtlas::from_string("red\n255\n0\n0\n").unwrap();

	assert_eq!(atlas.lookup("RED"), &[Color::new(255, 0, 0)]);
	assert_eq!(atlas.lookup("Red"), &[Color::new(255, 0, 0)]);
	assert_eq!(atlas.lookup("  red "), &[Color::new(255, 0, 0)]);
	assert!(atlas.contains("rEd"));
}

#[test]
fn atlas_lookup_unknown_name() {
	let atlas = ColorAtlas::load_from_file(test_file("colors.txt")).unwrap();

	assert!(atlas.lookup("burnt sienna").is_empty());
	assert!(atlas.lookup("").is_empty());
	assert!(!atlas.contains("burnt sienna"));
}

#[test]
fn atlas_truncated_record_is_dropped() {
	let atlas = ColorAtlas::load_from_file(test_file("colors_truncated.txt")).unwrap();

	assert_eq!(atlas.len(), 2);
	assert_eq!(atlas.lookup("teal"), &[Color::new(2, 147, 134)]);
	assert!(atlas.lookup("purple").is_empty());
	assert!(atlas.lookup("126").is_empty());
}

#[test]
fn atlas_empty_input() {
	let atlas = ColorAtlas::from_string("").unwrap();
	assert!(atlas.is_empty());
	assert_eq!(atlas.sample_count(), 0);

	// three lines are not a full record
	let atlas = ColorAtlas::from_string("red\n255\n0\n").unwrap();
	assert!(atlas.is_empty());
}

#[test]
fn atlas_accepts_crlf_and_padding() {
	let atlas = ColorAtlas::from_string("Pale Blue\r\n 208\r\n254 \r\n254\r\n").unwrap();
	assert_eq!(atlas.lookup("pale blue"), &[Color::new(208, 254, 254)]);
}

#[test]
fn atlas_loading_from_reader() {
	let data = b"cerulean\n4\n133\n209\n";
	let atlas = ColorAtlas::from_reader(BufReader::new(&data[..])).unwrap();
	assert_eq!(atlas.lookup("Cerulean"), &[Color::new(4, 133, 209)]);
}

#[test]
fn atlas_loading_from_temp_file() {
	let mut f = tempfile::NamedTempFile::new().unwrap();
	write!(f, "dark teal\n1\n77\n78\nDark Teal\n4\n60\n70\n").unwrap();
	f.flush().unwrap();

	let atlas = ColorAtlas::load_from_file(f.path()).unwrap();
	assert_eq!(atlas.len(), 1);
	assert_eq!(atlas.lookup("DARK TEAL"), &[Color::new(1, 77, 78), Color::new(4, 60, 70)]);
}

#[test]
fn atlas_loading_missing_file() {
	let result = ColorAtlas::load_from_file(test_file("does_not_exist.txt"));
	assert!(matches!(result, Err(LoadError::IoErr(_))));
}

#[test]
#[should_panic(expected = "InvalidComponent { line: 7, msg: \"Invalid green value \\\"abc\\\"\" }")]
fn atlas_loading_broken() {
	println!("Testing non-integer component…");
	ColorAtlas::load_from_file(test_file("colors_broken.txt")).unwrap();
}

#[test]
#[should_panic(expected = "ComponentOutOfRange { line: 2, value: 256 }")]
fn atlas_loading_out_of_range() {
	println!("Testing out of range component…");
	ColorAtlas::load_from_file(test_file("colors_out_of_range.txt")).unwrap();
}

#[test]
fn load_error_messages() {
	let err = ColorAtlas::from_string("white\n-1\n0\n0\n").unwrap_err();
	assert_eq!(err.to_string(), "Invalid data in line 2: -1 is outside the range [0;255]");

	let err = ColorAtlas::from_string("white\n1\n2\nthree\n").unwrap_err();
	assert_eq!(err.to_string(), "Invalid data in line 4: Invalid blue value \"three\"");
}
