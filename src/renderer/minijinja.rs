use super::filters::{scale, string_filter};
use crate::{
    error::{Error, Result},
    renderer::interface::TemplateRenderer,
};
use minijinja::{Environment, UndefinedBehavior};

/// MiniJinja-based template rendering engine.
///
/// Undefined tokens are errors, and block tags own their whole line so
/// `{% if light %}` sections select lines without leaving blank ones behind.
pub struct MiniJinjaRenderer {
    /// MiniJinja environment instance
    env: Environment<'static>,
}

impl MiniJinjaRenderer {
    /// Creates a new MiniJinjaRenderer instance with default environment.
    pub fn new() -> Self {
        let mut env = Environment::new();
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.set_keep_trailing_newline(true);
        env.set_trim_blocks(true);
        env.set_lstrip_blocks(true);

        env.add_function("scale", scale);
        env.add_filter("string", string_filter);

        Self { env }
    }
}

impl Default for MiniJinjaRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TemplateRenderer for MiniJinjaRenderer {
    fn render(
        &self,
        template: &str,
        context: &serde_json::Value,
        template_name: Option<&str>,
    ) -> Result<String> {
        let name = template_name.unwrap_or("temp");
        self.env
            .render_named_str(name, template, context)
            .map_err(|e| Error::template(name, &e))
    }
}
