pub mod archive;
pub mod config;
pub mod diag;
pub mod parse;
pub mod render;
