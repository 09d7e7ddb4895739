pub mod parse;
pub mod submission;
