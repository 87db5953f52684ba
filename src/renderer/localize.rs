//! Localization pass over rendered script text.
//!
//! Comment bodies and `_("...")` string bodies are looked up through the
//! translator; anything without a translation is left as it was.

use regex::{Captures, Regex};
use std::sync::OnceLock;

use crate::translate::Translator;

fn translatable_string() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r#"_\("((?:[^"\\]|\\.)*)"\)"#).expect("translatable string pattern is valid")
    })
}

/// Translates comments and marked strings in `text` into `language`.
pub fn localize(text: &str, language: &str, translator: &dyn Translator) -> String {
    text.split_inclusive('\n')
        .map(|line| localize_line(line, language, translator))
        .collect()
}

fn localize_line(line: &str, language: &str, translator: &dyn Translator) -> String {
    let trimmed = line.trim_start();

    if trimmed.starts_with('#') {
        let indent = &line[..line.len() - trimmed.len()];
        let body_start = trimmed.len() - trimmed.trim_start_matches('#').len();
        let (marker, rest) = trimmed.split_at(body_start);
        let (body, newline) = match rest.strip_suffix('\n') {
            Some(body) => (body, "\n"),
            None => (rest, ""),
        };
        let text = body.trim();
        if text.is_empty() {
            return line.to_string();
        }
        let leading = &body[..body.len() - body.trim_start().len()];
        return format!("{indent}{marker}{leading}{}{newline}", translator.translate(text, language));
    }

    translatable_string()
        .replace_all(line, |caps: &Captures| {
            format!("_(\"{}\")", translator.translate(&caps[1], language))
        })
        .into_owned()
}
