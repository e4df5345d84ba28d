use std::fmt::{Display, Formatter};

use serde::Serialize;

#[derive(Clone, Copy, Default, Debug, PartialEq, Eq, Hash, Serialize)]
pub struct Color {
	pub r: u8,
	pub g: u8,
	pub b: u8,
}

impl Color {
	pub const fn new(r: u8, g: u8, b: u8) -> Self {
		Self { r, g, b }
	}

	/// Converts the color to hue, saturation, and brightness, each in the range [0;1].
	/// Hue wraps around, so it never actually reaches 1.
	pub fn to_hsb(&self) -> Hsb {
		let (r, g, b) = (self.r as f64, self.g as f64, self.b as f64);
		let c_max = r.max(g).max(b);
		let c_min = r.min(g).min(b);
		let delta = c_max - c_min;

		let brightness = c_max / 255.0;
		let saturation = if c_max != 0.0 { delta / c_max } else { 0.0 };

		if saturation == 0.0 {
			return Hsb { hue: 0.0, saturation, brightness };
		}

		let red_c = (c_max - r) / delta;
		let green_c = (c_max - g) / delta;
		let blue_c = (c_max - b) / delta;

		let mut hue = if r == c_max {
			blue_c - green_c
		} else if g == c_max {
			2.0 + red_c - blue_c
		} else {
			4.0 + green_c - red_c
		};

		hue /= 6.0;
		if hue < 0.0 {
			hue += 1.0;
		}

		Hsb { hue, saturation, brightness }
	}
}

impl From<[u8; 3]> for Color {
	fn from([r, g, b]: [u8; 3]) -> Self {
		Self::new(r, g, b)
	}
}

impl Display for Color {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
	}
}

#[derive(Clone, Copy, Default, Debug, PartialEq)]
pub struct Hsb {
	pub hue: f64,
	pub saturation: f64,
	pub brightness: f64,
}
