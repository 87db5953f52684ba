//! Script template rendering.
//!
//! - `interface`: the engine trait
//! - `minijinja`: the MiniJinja-backed engine
//! - `filters`: functions and filters exposed to templates
//! - `localize`: the translation pass applied after rendering

pub mod filters;
pub mod interface;
pub mod localize;
pub mod minijinja;

pub use interface::TemplateRenderer;
pub use minijinja::MiniJinjaRenderer;

use crate::error::Result;
use crate::params::ParameterSet;
use crate::translate::{NoTranslation, Translator};

/// Kind of value a token renders as, used to build match patterns.
///
/// Each kind is written as its own private-use code point, so it cannot
/// collide with template text, and matches only the shapes its values take.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Wildcard {
    /// A quoted `"#rrggbb"` or `"#rrggbbaa"` color literal.
    Color,
    /// A size or scaled size.
    Integer,
    /// The body of a string literal.
    Text,
}

impl Wildcard {
    pub const fn sentinel(self) -> &'static str {
        match self {
            Wildcard::Color => "\u{e000}",
            Wildcard::Integer => "\u{e001}",
            Wildcard::Text => "\u{e002}",
        }
    }

    /// Regex matching every value of this kind.
    pub const fn pattern(self) -> &'static str {
        match self {
            Wildcard::Color => r##""#[0-9a-fA-F]{6}(?:[0-9a-fA-F]{2})?""##,
            Wildcard::Integer => r"-?\d+",
            Wildcard::Text => r#"(?:[^"\\\n]|\\.)*"#,
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '\u{e000}' => Some(Wildcard::Color),
            '\u{e001}' => Some(Wildcard::Integer),
            '\u{e002}' => Some(Wildcard::Text),
            _ => None,
        }
    }
}

/// Renders script templates against one parameter set.
pub struct ScriptRenderer<'a> {
    engine: &'a dyn TemplateRenderer,
    params: &'a ParameterSet,
    translator: &'a dyn Translator,
    context: serde_json::Value,
}

impl<'a> ScriptRenderer<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        params: &'a ParameterSet,
        translator: &'a dyn Translator,
    ) -> Self {
        Self { engine, params, translator, context: params.context() }
    }

    /// Renders `template` with concrete values, then localizes it.
    pub fn render(&self, name: &str, template: &str) -> Result<String> {
        let text = self.engine.render(template, &self.context, Some(name))?;
        Ok(self.localize(text))
    }

    /// Renders `template` with every token replaced by its [`Wildcard`]
    /// sentinel, taking the light or dark branch of conditional sections.
    pub fn render_wildcard(&self, name: &str, template: &str, light: bool) -> Result<String> {
        let context = ParameterSet::wildcard_context(light);
        let text = self.engine.render(template, &context, Some(name))?;
        Ok(self.localize(text))
    }

    fn localize(&self, text: String) -> String {
        match self.params.target_language() {
            Some(language) => localize::localize(&text, language, self.translator),
            None => text,
        }
    }
}

/// Renders `template_text` with `params` using the stock engine and no
/// translation table.
///
/// # Examples
/// ```no_run
/// use guigen::params::{GuiOptions, ParameterSet};
///
/// let params = ParameterSet::new("gui/game", "out/game", "demo", GuiOptions::default()).unwrap();
/// let text = guigen::renderer::render("define gui.accent_color = {{ accent_color }}\n", &params).unwrap();
/// assert_eq!(text, "define gui.accent_color = \"#00b8c3\"\n");
/// ```
pub fn render(template_text: &str, params: &ParameterSet) -> Result<String> {
    let engine = MiniJinjaRenderer::new();
    let translator = NoTranslation::default();
    ScriptRenderer::new(&engine, params, &translator).render("template", template_text)
}
