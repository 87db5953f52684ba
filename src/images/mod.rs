//! Theme image rendering.
//!
//! - `manifest`: the fixed list of template assets and how each is fitted
//! - `recolor`: pure pixel operations (key-color replacement, fitting, backdrops)
//! - `generator`: the per-file skip/render decisions and disk writes

pub mod generator;
pub mod manifest;
pub mod recolor;

pub use generator::ImageGenerator;
