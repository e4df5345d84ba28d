use std::fmt;

use crate::enums::*;

impl fmt::Display for Strictness {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			Strictness::Exact => write!(f, "exact"),
			Strictness::Loose => write!(f, "loose"),
		}
	}
}

impl fmt::Display for PlotFormat {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		match self {
			PlotFormat::Swatch => write!(f, "swatch"),
			PlotFormat::Json => write!(f, "json"),
		}
	}
}
