pub mod atlas;
pub mod color;
pub mod plot;
pub mod session;

/// Lines per record in a color data file: name, red, green, blue.
const RECORD_LINES: usize = 4;
