pub mod api;
pub mod config;
pub mod errors;
pub mod input;
pub mod materialize;
pub mod parser;
pub mod preview;
pub mod prompt;
pub mod tree;
