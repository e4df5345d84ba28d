use std::f64::consts::TAU;

use serde::Serialize;

use crate::colors::color::Color;

/// Fraction of the largest possible radius that the color wheel actually uses.
const RADIUS_MODIFIER: f64 = 0.95;

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Canvas {
	pub width: f64,
	pub height: f64,
}

impl Default for Canvas {
	fn default() -> Self {
		Self::new(500.0, 500.0)
	}
}

impl Canvas {
	pub fn new(width: f64, height: f64) -> Self {
		Self { width, height }
	}

	/// Whether both dimensions are finite and positive.
	pub fn is_drawable(&self) -> bool {
		self.width.is_finite() && self.width > 0.0 && self.height.is_finite() && self.height > 0.0
	}

	pub fn center(&self) -> (f64, f64) {
		(self.width / 2.0, self.height / 2.0)
	}

	/// The radius of the outermost circle, slightly less than half the smaller canvas dimension.
	pub fn radius(&self) -> f64 {
		self.width.min(self.height) / 2.0 * RADIUS_MODIFIER
	}

	/// Places a color on the wheel: hue picks the angle, saturation the distance from the center.
	/// The y axis points down, like screen coordinates.
	pub fn position(&self, color: Color) -> (f64, f64) {
		let hsb = color.to_hsb();
		let radius = self.radius() * hsb.saturation;
		let theta = hsb.hue * TAU;

		let (cx, cy) = self.center();
		(cx + radius * theta.cos(), cy - radius * theta.sin())
	}

	pub fn bounding_circle(&self) -> Circle {
		let r = self.radius();
		let (cx, cy) = self.center();
		Circle { x: cx - r, y: cy - r, diameter: 2.0 * r }
	}
}

/// An outline circle given by its bounding box's top left corner and its diameter.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Circle {
	pub x: f64,
	pub y: f64,
	pub diameter: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PlottedPoint {
	pub color: Color,
	pub x: f64,
	pub y: f64,
}
