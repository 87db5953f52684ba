//! Block structure of a script file.
//!
//! A script is a sequence of top-level blocks (one statement with its
//! indented body) and the interstitial text between them. Concatenating the
//! segments reproduces the input byte for byte.

use indexmap::IndexMap;

/// Which logical part of a file a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    /// `define` and `default` statements.
    Defines,
    /// Screens, styles, transforms and every other statement.
    Declarations,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    pub identity: String,
    pub section: Section,
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    Block(Block),
}

impl Segment {
    pub fn text(&self) -> &str {
        match self {
            Segment::Text(text) => text,
            Segment::Block(block) => &block.text,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Script {
    segments: Vec<Segment>,
}

impl Script {
    pub fn parse(text: &str) -> Self {
        let mut parser = Parser::default();
        for line in text.split_inclusive('\n') {
            parser.feed(line);
        }
        parser.finish()
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn into_segments(self) -> Vec<Segment> {
        self.segments
    }

    pub fn blocks(&self) -> impl Iterator<Item = &Block> {
        self.segments.iter().filter_map(|segment| match segment {
            Segment::Block(block) => Some(block),
            Segment::Text(_) => None,
        })
    }

    /// Blocks keyed by identity, in file order.
    pub fn block_map(&self) -> IndexMap<&str, &Block> {
        self.blocks().map(|block| (block.identity.as_str(), block)).collect()
    }

    pub fn to_text(&self) -> String {
        self.segments.iter().map(Segment::text).collect()
    }
}

#[derive(Default)]
struct Parser {
    segments: Vec<Segment>,
    text: String,
    block: Option<(String, String)>,
    pending_blank: String,
    seen: IndexMap<String, usize>,
}

impl Parser {
    fn feed(&mut self, line: &str) {
        let blank = line.trim().is_empty();
        let indented = line.starts_with(' ') || line.starts_with('\t');

        if let Some((_, body)) = self.block.as_mut() {
            if blank {
                self.pending_blank.push_str(line);
                return;
            }
            if indented {
                body.push_str(&self.pending_blank);
                body.push_str(line);
                self.pending_blank.clear();
                return;
            }
            self.close_block();
        }

        if blank || indented || line.trim_start().starts_with('#') {
            self.text.push_str(line);
        } else {
            self.flush_text();
            self.block = Some((line.trim().to_string(), line.to_string()));
        }
    }

    fn close_block(&mut self) {
        if let Some((header, body)) = self.block.take() {
            let base = identity_of(&header);
            let count = self.seen.entry(base.clone()).or_insert(0);
            *count += 1;
            let identity = if *count == 1 { base } else { format!("{base} #{count}") };

            self.segments.push(Segment::Block(Block {
                identity,
                section: section_of(&header),
                text: body,
            }));
            self.text.push_str(&self.pending_blank);
            self.pending_blank.clear();
        }
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.segments.push(Segment::Text(std::mem::take(&mut self.text)));
        }
    }

    fn finish(mut self) -> Script {
        self.close_block();
        self.flush_text();
        Script { segments: self.segments }
    }
}

/// Statement header up to its first `:`, `=` or `(`, whitespace normalised.
pub fn identity_of(header: &str) -> String {
    let end = header.find([':', '=', '(']).unwrap_or(header.len());
    header[..end].split_whitespace().collect::<Vec<_>>().join(" ")
}

fn section_of(header: &str) -> Section {
    match header.split_whitespace().next() {
        Some("define") | Some("default") => Section::Defines,
        _ => Section::Declarations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCRIPT: &str = "\
## Colors
define gui.accent_color = \"#00b8c3\"
define gui.idle_color = \"#888888\"

style button_text is gui_button_text
style button_text:
    color gui.idle_color

    hover_color gui.hover_color


screen say(who, what):
    window:
        id \"window\"
init python:
    pass
init python:
    x = 1";

    #[test]
    fn segments_round_trip_byte_for_byte() {
        let script = Script::parse(SCRIPT);
        assert_eq!(script.to_text(), SCRIPT);
        assert_eq!(Script::parse("").to_text(), "");
        assert_eq!(Script::parse("\n\n# only comments\n").to_text(), "\n\n# only comments\n");
    }

    #[test]
    fn identities_and_sections() {
        let script = Script::parse(SCRIPT);
        let ids: Vec<(&str, Section)> =
            script.blocks().map(|b| (b.identity.as_str(), b.section)).collect();
        assert_eq!(
            ids,
            vec![
                ("define gui.accent_color", Section::Defines),
                ("define gui.idle_color", Section::Defines),
                ("style button_text is gui_button_text", Section::Declarations),
                ("style button_text", Section::Declarations),
                ("screen say", Section::Declarations),
                ("init python", Section::Declarations),
                ("init python #2", Section::Declarations),
            ]
        );
    }

    #[test]
    fn inner_blank_lines_stay_in_block_and_trailing_ones_do_not() {
        let script = Script::parse(SCRIPT);
        let style = script.block_map()["style button_text"].text.clone();
        assert_eq!(style, "style button_text:\n    color gui.idle_color\n\n    hover_color gui.hover_color\n");
        assert!(script
            .segments()
            .iter()
            .any(|s| matches!(s, Segment::Text(t) if t == "\n\n")));
    }

    #[test]
    fn comments_are_interstitial() {
        let script = Script::parse(SCRIPT);
        assert_eq!(script.segments()[0], Segment::Text("## Colors\n".into()));
    }

    #[test]
    fn identity_normalises_whitespace() {
        assert_eq!(identity_of("define   gui.text_size=22"), "define gui.text_size");
        assert_eq!(identity_of("screen navigation():"), "screen navigation");
        assert_eq!(identity_of("label start:"), "label start");
    }
}
