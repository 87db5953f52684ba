/// Directory bootstrap and the gui/minimal generation entry points.
pub mod bootstrap;

/// Handles argument parsing.
pub mod cli;

/// Colors, parsed and written in script literal form.
pub mod color;

/// Constants used throughout guigen.
pub mod constants;

/// Defines custom error types.
pub mod error;

/// Processes .guiignore files to exclude specific paths.
pub mod ignore;

/// Theme image rendering.
pub mod images;

/// A set of helpers for working with the file system.
pub mod ioutils;

/// Per-file decisions and the reports that collect them.
pub mod operation;

/// Validated generation parameters.
pub mod params;

/// Template parsing and rendering functionality.
pub mod renderer;

/// Script generation and block-level reconciliation.
pub mod template;

/// Translation and host capability queries.
pub mod translate;
