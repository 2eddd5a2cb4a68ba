pub mod parser;
pub mod payload;
