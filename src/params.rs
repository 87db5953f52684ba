//! Generation parameters.
//!
//! `GuiOptions` is the raw, possibly partial input gathered from the command
//! line and an optional options file. `ParameterSet` is the validated,
//! immutable record every generator reads from.

use serde::Deserialize;
use serde_json::{json, Value};
use std::path::{Path, PathBuf};

use crate::color::Color;
use crate::constants::{authored, defaults, limits, JSON_EXTENSIONS, YAML_EXTENSIONS};
use crate::error::{Error, Result};
use crate::renderer::Wildcard;

/// Raw options; every field is optional so sources can be layered.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct GuiOptions {
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub accent: Option<String>,
    #[serde(alias = "boring")]
    pub background: Option<String>,
    pub light: Option<bool>,
    pub language: Option<String>,
    pub replace_images: Option<bool>,
    pub replace_code: Option<bool>,
    pub update_code: Option<bool>,
}

impl GuiOptions {
    /// Loads options from a `.json`, `.yaml` or `.yml` file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or_default();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io(path, e))?;

        if JSON_EXTENSIONS.contains(&extension) {
            Ok(serde_json::from_str(&content)?)
        } else if YAML_EXTENSIONS.contains(&extension) {
            Ok(serde_yaml::from_str(&content)?)
        } else {
            Err(Error::ConfigError(format!(
                "'{}' is neither a JSON nor a YAML file",
                path.display()
            )))
        }
    }

    /// Fills every unset field of `self` from `other`.
    pub fn or(self, other: GuiOptions) -> GuiOptions {
        GuiOptions {
            width: self.width.or(other.width),
            height: self.height.or(other.height),
            accent: self.accent.or(other.accent),
            background: self.background.or(other.background),
            light: self.light.or(other.light),
            language: self.language.or(other.language),
            replace_images: self.replace_images.or(other.replace_images),
            replace_code: self.replace_code.or(other.replace_code),
            update_code: self.update_code.or(other.update_code),
        }
    }
}

/// Validated generation parameters. Never mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    output_root: PathBuf,
    template_root: PathBuf,
    width: u32,
    height: u32,
    accent_color: Color,
    background_color: Color,
    is_light_theme: bool,
    target_language: Option<String>,
    overwrite_images: bool,
    overwrite_code: bool,
    merge_code: bool,
    project_name: String,
}

impl ParameterSet {
    /// Validates `options` and builds the parameter set.
    ///
    /// # Errors
    /// * `InvalidParameter` - a size outside `1..=MAX_SIZE`, an unparseable
    ///   color, or a template root that is not an existing directory.
    pub fn new<P: Into<PathBuf>>(
        template_root: P,
        output_root: P,
        project_name: &str,
        options: GuiOptions,
    ) -> Result<Self> {
        let template_root = template_root.into();
        let output_root = output_root.into();

        let width = dimension("width", options.width.unwrap_or(i64::from(defaults::WIDTH)))?;
        let height = dimension("height", options.height.unwrap_or(i64::from(defaults::HEIGHT)))?;
        let accent_color =
            Color::parse(options.accent.as_deref().unwrap_or(defaults::ACCENT))?;
        let background_color =
            Color::parse(options.background.as_deref().unwrap_or(defaults::BACKGROUND))?;

        if !template_root.is_dir() {
            return Err(Error::InvalidParameter(format!(
                "template directory '{}' does not exist",
                template_root.display()
            )));
        }

        let target_language = options.language.filter(|l| !l.trim().is_empty());

        Ok(Self {
            output_root,
            template_root,
            width,
            height,
            accent_color,
            background_color,
            is_light_theme: options.light.unwrap_or(false),
            target_language,
            overwrite_images: options.replace_images.unwrap_or(false),
            overwrite_code: options.replace_code.unwrap_or(false),
            merge_code: options.update_code.unwrap_or(false),
            project_name: project_name.to_string(),
        })
    }

    pub fn output_root(&self) -> &Path {
        &self.output_root
    }

    pub fn template_root(&self) -> &Path {
        &self.template_root
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn accent_color(&self) -> Color {
        self.accent_color
    }

    pub fn background_color(&self) -> Color {
        self.background_color
    }

    pub fn is_light_theme(&self) -> bool {
        self.is_light_theme
    }

    pub fn target_language(&self) -> Option<&str> {
        self.target_language.as_deref()
    }

    pub fn overwrite_images(&self) -> bool {
        self.overwrite_images
    }

    pub fn overwrite_code(&self) -> bool {
        self.overwrite_code
    }

    pub fn merge_code(&self) -> bool {
        self.merge_code
    }

    pub fn project_name(&self) -> &str {
        &self.project_name
    }

    /// Ratio between the requested height and the authored one.
    pub fn scale_factor(&self) -> f64 {
        f64::from(self.height) / f64::from(authored::HEIGHT)
    }

    /// The color palette derived from accent, background and polarity.
    pub fn palette(&self) -> Palette {
        Palette::derive(self.accent_color, self.background_color, self.is_light_theme)
    }

    /// Template context with every token bound to its concrete value.
    ///
    /// Sizes are bound as text so they behave the same as in the wildcard
    /// context: they can be printed but not computed with. Derived sizes go
    /// through `scale()`.
    pub fn context(&self) -> Value {
        let mut context = self.palette().context();
        if let Value::Object(map) = &mut context {
            map.insert("width".into(), json!(self.width.to_string()));
            map.insert("height".into(), json!(self.height.to_string()));
            map.insert("_scale".into(), json!(self.scale_factor()));
            map.insert("light".into(), json!(self.is_light_theme));
            map.insert("dark".into(), json!(!self.is_light_theme));
            map.insert("theme".into(), json!(theme_name(self.is_light_theme)));
            map.insert("project_name".into(), json!(self.project_name));
            map.insert(
                "language".into(),
                json!(self.target_language.as_deref().unwrap_or("english")),
            );
        }
        context
    }

    /// Template context with every substituted value replaced by the
    /// sentinel of its kind, keeping only the light/dark branch selection
    /// concrete.
    pub fn wildcard_context(light: bool) -> Value {
        let mut map = serde_json::Map::new();
        for (token, kind) in TOKENS {
            map.insert((*token).to_string(), json!(kind.sentinel()));
        }
        map.insert("_scale".into(), json!(Wildcard::Integer.sentinel()));
        map.insert("light".into(), json!(light));
        map.insert("dark".into(), json!(!light));
        map.insert("theme".into(), json!(theme_name(light)));
        Value::Object(map)
    }
}

/// Tokens whose values vary with the parameters, with the kind of value each
/// renders as.
pub const TOKENS: &[(&str, Wildcard)] = &[
    ("width", Wildcard::Integer),
    ("height", Wildcard::Integer),
    ("accent_color", Wildcard::Color),
    ("background_color", Wildcard::Color),
    ("hover_color", Wildcard::Color),
    ("muted_color", Wildcard::Color),
    ("hover_muted_color", Wildcard::Color),
    ("idle_color", Wildcard::Color),
    ("idle_small_color", Wildcard::Color),
    ("selected_color", Wildcard::Color),
    ("insensitive_color", Wildcard::Color),
    ("text_color", Wildcard::Color),
    ("interface_text_color", Wildcard::Color),
    ("menu_color", Wildcard::Color),
    ("project_name", Wildcard::Text),
    ("language", Wildcard::Text),
];

fn theme_name(light: bool) -> &'static str {
    if light {
        "light"
    } else {
        "dark"
    }
}

fn dimension(name: &str, value: i64) -> Result<u32> {
    if value <= 0 {
        return Err(Error::InvalidParameter(format!("{name} must be positive, got {value}")));
    }
    match u32::try_from(value) {
        Ok(size) if size <= limits::MAX_SIZE => Ok(size),
        _ => Err(Error::InvalidParameter(format!(
            "{name} {value} is too large, the maximum is {}",
            limits::MAX_SIZE
        ))),
    }
}

/// Colors derived for the generated script.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Palette {
    pub accent: Color,
    pub background: Color,
    pub hover: Color,
    pub muted: Color,
    pub hover_muted: Color,
    pub idle: Color,
    pub idle_small: Color,
    pub selected: Color,
    pub insensitive: Color,
    pub text: Color,
    pub interface_text: Color,
    pub menu: Color,
}

impl Palette {
    pub fn derive(accent: Color, background: Color, light: bool) -> Self {
        if light {
            Palette {
                accent,
                background,
                hover: accent,
                muted: accent.tint(0.6),
                hover_muted: accent.tint(0.4),
                idle: Color::rgb(0x70, 0x70, 0x70),
                idle_small: Color::rgb(0x60, 0x60, 0x60),
                selected: Color::rgb(0x55, 0x55, 0x55),
                insensitive: Color::rgb(0x70, 0x70, 0x70).with_alpha(0x7f),
                text: Color::rgb(0x40, 0x40, 0x40),
                interface_text: Color::rgb(0x40, 0x40, 0x40),
                menu: background.tint(0.8),
            }
        } else {
            Palette {
                accent,
                background,
                hover: accent,
                muted: accent.shade(0.4),
                hover_muted: accent.shade(0.6),
                idle: Color::rgb(0x88, 0x88, 0x88),
                idle_small: Color::rgb(0xaa, 0xaa, 0xaa),
                selected: Color::WHITE,
                insensitive: Color::rgb(0x88, 0x88, 0x88).with_alpha(0x7f),
                text: Color::WHITE,
                interface_text: Color::WHITE,
                menu: background.shade(0.8),
            }
        }
    }

    fn context(&self) -> Value {
        json!({
            "accent_color": self.accent.to_literal(),
            "background_color": self.background.to_literal(),
            "hover_color": self.hover.to_literal(),
            "muted_color": self.muted.to_literal(),
            "hover_muted_color": self.hover_muted.to_literal(),
            "idle_color": self.idle.to_literal(),
            "idle_small_color": self.idle_small.to_literal(),
            "selected_color": self.selected.to_literal(),
            "insensitive_color": self.insensitive.to_literal(),
            "text_color": self.text.to_literal(),
            "interface_text_color": self.interface_text.to_literal(),
            "menu_color": self.menu.to_literal(),
        })
    }
}
