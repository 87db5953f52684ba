use crate::constants::{EPHEMERAL_DIRS, GENERATED_SCRIPTS, IGNORE_FILE, STARTER_SCRIPT};
use crate::error::{Error, Result};
use crate::ioutils::read_optional;
use globset::{Glob, GlobSet, GlobSetBuilder};
use log::debug;
use std::path::Path;

/// Patterns, relative to the template root, that are never copied verbatim.
const DEFAULT_IGNORE_PATTERNS: &[&str] = &[
    "**/*.rpyc",
    "**/*.rpymc",
    "**/*.bak",
    "**/.DS_Store",
    ".guiignore",
];

/// Builds the set of template paths `copy_files` must skip.
///
/// Includes the defaults, the ephemeral directories, the generated and
/// starter scripts, `extra` (the image manifest) and any patterns listed in
/// the template's `.guiignore`. Patterns match paths relative to the
/// template root. A `.guiignore` that exists but cannot be read is an
/// `IoFailure`.
pub fn parse_guiignore_file<P: AsRef<Path>>(template_root: P, extra: &[String]) -> Result<GlobSet> {
    let template_root = template_root.as_ref();
    let mut patterns: Vec<String> =
        DEFAULT_IGNORE_PATTERNS.iter().map(|p| (*p).to_string()).collect();

    for dir in EPHEMERAL_DIRS {
        patterns.push((*dir).to_string());
        patterns.push(format!("{dir}/**"));
    }
    patterns.extend(GENERATED_SCRIPTS.iter().map(|s| (*s).to_string()));
    patterns.push(STARTER_SCRIPT.to_string());
    patterns.extend(extra.iter().cloned());

    let ignore_path = template_root.join(IGNORE_FILE);
    if let Some(contents) = read_optional(&ignore_path)? {
        patterns.extend(
            contents
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty() && !line.starts_with('#'))
                .map(str::to_string),
        );
    } else {
        debug!("No {IGNORE_FILE} file found, using default patterns.");
    }

    let mut builder = GlobSetBuilder::new();
    for pattern in &patterns {
        debug!("Adding ignore pattern: {pattern} to globset");
        let glob = Glob::new(pattern).map_err(|e| {
            Error::ConfigError(format!("bad pattern '{pattern}' in {IGNORE_FILE}: {e}"))
        })?;
        builder.add(glob);
    }
    builder
        .build()
        .map_err(|e| Error::ConfigError(format!("cannot build ignore set: {e}")))
}
