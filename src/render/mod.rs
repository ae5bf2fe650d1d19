// src/render/mod.rs
pub mod pages;
pub mod table;

pub use pages::render_site;
