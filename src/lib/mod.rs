pub mod carbon;
pub mod colors;
pub mod console;
pub mod enums;
pub mod enums_impl;
pub mod guess;
pub mod palindrome;
