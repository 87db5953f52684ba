//! Parameter-only variation matching.
//!
//! Each template block is rendered with its tokens replaced by wildcard
//! sentinels. The literal text around them must match exactly, and each
//! sentinel matches only the values its kind of token can render as, so an
//! edited expression on a token's line is not mistaken for a new value.

use indexmap::IndexMap;
use regex::Regex;

use super::blocks::Script;
use crate::error::{Error, Result};
use crate::renderer::Wildcard;

#[derive(Debug, Clone)]
pub struct BlockPattern {
    regex: Regex,
}

impl BlockPattern {
    pub fn new(wildcard_text: &str) -> Result<Self> {
        let mut body = String::new();
        let mut literal = String::new();
        for c in wildcard_text.chars() {
            match Wildcard::from_char(c) {
                Some(kind) => {
                    body.push_str(&regex::escape(&literal));
                    body.push_str(kind.pattern());
                    literal.clear();
                }
                None => literal.push(c),
            }
        }
        body.push_str(&regex::escape(&literal));

        let regex = Regex::new(&format!(r"\A{body}\z"))
            .map_err(|e| Error::Other(anyhow::anyhow!("cannot build block pattern: {e}")))?;
        Ok(Self { regex })
    }

    pub fn matches(&self, text: &str) -> bool {
        self.regex.is_match(text)
    }
}

/// Patterns for every block of one template, keyed by block identity.
#[derive(Debug, Clone, Default)]
pub struct TemplatePatterns {
    patterns: IndexMap<String, Vec<BlockPattern>>,
}

impl TemplatePatterns {
    /// Collects block patterns from wildcard renders of the same template
    /// (one per light/dark branch).
    pub fn from_renders<S: AsRef<str>>(renders: &[S]) -> Result<Self> {
        let mut patterns: IndexMap<String, Vec<BlockPattern>> = IndexMap::new();
        for render in renders {
            for block in Script::parse(render.as_ref()).blocks() {
                patterns
                    .entry(block.identity.clone())
                    .or_default()
                    .push(BlockPattern::new(&block.text)?);
            }
        }
        Ok(Self { patterns })
    }

    /// Whether `text` is a render of block `identity` under some parameters.
    pub fn is_parameter_only(&self, identity: &str, text: &str) -> bool {
        self.patterns
            .get(identity)
            .is_some_and(|patterns| patterns.iter().any(|p| p.matches(text)))
    }
}
