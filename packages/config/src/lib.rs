// ABOUTME: Configuration constants shared by the QnA packages
// ABOUTME: Environment variable names and their defaults

pub mod constants;

pub use constants::*;
