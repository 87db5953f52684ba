//! Block-level reconciliation of a fresh render against an existing file.
//!
//! Pure text in, text out; the caller owns every file system effect.

use std::collections::HashSet;

use super::blocks::{Block, Script, Section, Segment};
use super::pattern::TemplatePatterns;

/// Which sections a reconciliation pass may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    All,
    Only(Section),
}

impl Scope {
    pub fn contains(&self, section: Section) -> bool {
        match self {
            Scope::All => true,
            Scope::Only(only) => *only == section,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockAction {
    /// Existing block already equals the fresh render.
    Unchanged,
    /// Existing block was a parameter-only variation and now holds the fresh render.
    Refreshed,
    /// Existing block was hand-edited and was kept as is.
    Preserved,
    /// Block was new in the template and was added.
    Inserted,
    /// Block is no longer in the template and was kept.
    Retained,
    /// Block lies outside the reconciled section.
    OutOfScope,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDecision {
    pub identity: String,
    pub action: BlockAction,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MergeOutcome {
    pub text: String,
    pub decisions: Vec<BlockDecision>,
}

impl MergeOutcome {
    /// Identities of hand-edited blocks that were kept.
    pub fn preserved(&self) -> impl Iterator<Item = &str> {
        self.decisions
            .iter()
            .filter(|d| d.action == BlockAction::Preserved)
            .map(|d| d.identity.as_str())
    }
}

/// Merges `rendered` into `existing` block by block.
///
/// Existing blocks keep their position and the text around them is left
/// untouched. Template blocks missing from `existing` are inserted after the
/// block that precedes them in the template, or appended when that block is
/// absent too.
pub fn reconcile(
    existing: &str,
    rendered: &str,
    patterns: &TemplatePatterns,
    scope: Scope,
) -> MergeOutcome {
    let current = Script::parse(existing);
    let fresh = Script::parse(rendered);
    let fresh_blocks = fresh.block_map();

    let mut decisions = Vec::new();
    let mut segments = Vec::with_capacity(current.segments().len());

    for segment in current.segments() {
        let Segment::Block(block) = segment else {
            segments.push(segment.clone());
            continue;
        };

        let (action, text) = if !scope.contains(block.section) {
            (BlockAction::OutOfScope, None)
        } else {
            match fresh_blocks.get(block.identity.as_str()) {
                None => (BlockAction::Retained, None),
                Some(new) if new.text == block.text => (BlockAction::Unchanged, None),
                Some(new) if patterns.is_parameter_only(&block.identity, &block.text) => {
                    (BlockAction::Refreshed, Some(new.text.clone()))
                }
                Some(_) => (BlockAction::Preserved, None),
            }
        };

        decisions.push(BlockDecision { identity: block.identity.clone(), action });
        segments.push(Segment::Block(Block {
            text: text.unwrap_or_else(|| block.text.clone()),
            ..block.clone()
        }));
    }

    let mut present: HashSet<String> =
        current.blocks().map(|block| block.identity.clone()).collect();
    let mut previous: Option<&str> = None;

    for (identity, block) in &fresh_blocks {
        if scope.contains(block.section) && !present.contains(*identity) {
            let at = previous
                .and_then(|anchor| position_of(&segments, anchor))
                .map(|index| index + 1)
                .unwrap_or(segments.len());
            insert_block(&mut segments, at, (*block).clone());
            present.insert((*identity).to_string());
            decisions.push(BlockDecision {
                identity: (*identity).to_string(),
                action: BlockAction::Inserted,
            });
        }
        if present.contains(*identity) {
            previous = Some(*identity);
        }
    }

    MergeOutcome { text: Script::from_segments(segments).to_text(), decisions }
}

fn position_of(segments: &[Segment], identity: &str) -> Option<usize> {
    segments
        .iter()
        .position(|s| matches!(s, Segment::Block(b) if b.identity == identity))
}

/// Inserts `block` at `at`, separated from its neighbours by a blank line.
fn insert_block(segments: &mut Vec<Segment>, at: usize, mut block: Block) {
    let mut separator = String::new();
    match at.checked_sub(1).map(|i| segments[i].text()) {
        Some(before) if !before.ends_with('\n') => separator.push_str("\n\n"),
        Some(before) if before.ends_with("\n\n") => {}
        Some(_) => separator.push('\n'),
        None => {}
    }
    if at < segments.len() && !block.text.ends_with('\n') {
        block.text.push('\n');
    }

    let mut inserted = Vec::with_capacity(2);
    if !separator.is_empty() {
        inserted.push(Segment::Text(separator));
    }
    inserted.push(Segment::Block(block));
    segments.splice(at..at, inserted);
}
