use crate::constants::{exit_codes, verbosity};
use crate::params::GuiOptions;
use clap::{error::ErrorKind, CommandFactory, Parser};
use log::LevelFilter;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = r#"{about-section}
{usage-heading} {usage}

{all-args}
{after-help}
"#;

/// CLI arguments for guigen.
#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Generates or re-themes a game's gui", long_about = None)]
pub struct Args {
    /// Project directory to create or re-theme.
    #[arg(value_name = "TARGET")]
    pub target: PathBuf,

    /// Screen width in pixels.
    #[arg(long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Screen height in pixels.
    #[arg(long, allow_negative_numbers = true)]
    pub height: Option<i64>,

    /// Accent color, as #rgb or #rrggbb.
    #[arg(long, value_name = "COLOR")]
    pub accent: Option<String>,

    /// Background color of the menus.
    #[arg(long = "boring", value_name = "COLOR")]
    pub background: Option<String>,

    /// Use the light theme.
    #[arg(long, conflicts_with = "dark")]
    pub light: bool,

    /// Use the dark theme, even if the options file asks for light.
    #[arg(long)]
    pub dark: bool,

    /// Template project, whose `game` directory is read. Defaults to `gui`.
    #[arg(long, value_name = "DIR")]
    pub template: Option<PathBuf>,

    /// Language generated comments and strings are translated into.
    #[arg(long)]
    pub language: Option<String>,

    /// Regenerate everything: images, and scripts replaced and updated.
    #[arg(long)]
    pub start: bool,

    /// Overwrite images that already exist.
    #[arg(long = "replace-images")]
    pub replace_images: bool,

    /// Overwrite scripts that already exist.
    #[arg(long = "replace-code")]
    pub replace_code: bool,

    /// Update existing scripts block by block, keeping hand edits.
    #[arg(long = "update-code")]
    pub update_code: bool,

    /// Clone the template into a new project and regenerate only its scripts.
    #[arg(long)]
    pub minimal: bool,

    /// Options file (.json, .yaml or .yml). Command-line values win.
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase logging verbosity (`-v`, `-vv`, `-vvv`).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Preview actions without touching the filesystem.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Args {
    /// Options given on the command line. Unset flags stay `None` so an
    /// options file can still provide them.
    pub fn options(&self) -> GuiOptions {
        let flag = |set: bool| set.then_some(true);
        GuiOptions {
            width: self.width,
            height: self.height,
            accent: self.accent.clone(),
            background: self.background.clone(),
            light: match (self.light, self.dark) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            },
            language: self.language.clone(),
            replace_images: flag(self.replace_images || self.start),
            replace_code: flag(self.replace_code || self.start || self.minimal),
            update_code: flag(self.update_code || self.start || self.minimal),
        }
    }
}

/// Parse command line arguments with custom handling for missing required inputs.
pub fn get_args() -> Args {
    Args::try_parse().unwrap_or_else(|e| {
        if e.kind() == ErrorKind::MissingRequiredArgument {
            let mut command = Args::command().help_template(HELP_TEMPLATE);
            if let Err(print_err) = command.print_help() {
                eprintln!("Failed to display help information: {print_err}");
            } else {
                println!();
            }
            std::process::exit(exit_codes::FAILURE);
        } else {
            e.exit();
        }
    })
}

/// Map `-v` counts to the appropriate log level.
pub fn get_log_level_from_verbose(verbose_count: u8) -> LevelFilter {
    match verbose_count {
        verbosity::OFF => LevelFilter::Error,
        verbosity::INFO => LevelFilter::Info,
        verbosity::DEBUG => LevelFilter::Debug,
        verbosity::TRACE.. => LevelFilter::Trace,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_verbose_flags_to_log_filters() {
        assert_eq!(get_log_level_from_verbose(verbosity::OFF), LevelFilter::Error);
        assert_eq!(get_log_level_from_verbose(verbosity::INFO), LevelFilter::Info);
        assert_eq!(get_log_level_from_verbose(verbosity::DEBUG), LevelFilter::Debug);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE), LevelFilter::Trace);
        assert_eq!(get_log_level_from_verbose(verbosity::TRACE + 1), LevelFilter::Trace);
    }

    #[test]
    fn parses_minimal_args() {
        let args = Args::parse_from(["guigen", "my_game"]);
        assert_eq!(args.target, PathBuf::from("my_game"));
        assert_eq!(args.options(), GuiOptions::default());
    }

    #[test]
    fn parses_full_feature_flags() {
        let args = Args::parse_from([
            "guigen",
            "my_game",
            "--width",
            "1920",
            "--height",
            "1080",
            "--accent",
            "#ff0000",
            "--boring",
            "#101010",
            "--light",
            "--template",
            "themes/gui",
            "--language",
            "french",
            "--update-code",
            "-vv",
            "--dry-run",
        ]);
        let options = args.options();
        assert_eq!(options.width, Some(1920));
        assert_eq!(options.height, Some(1080));
        assert_eq!(options.accent.as_deref(), Some("#ff0000"));
        assert_eq!(options.background.as_deref(), Some("#101010"));
        assert_eq!(options.light, Some(true));
        assert_eq!(options.language.as_deref(), Some("french"));
        assert_eq!(options.update_code, Some(true));
        assert_eq!(options.replace_code, None);
        assert_eq!(args.template, Some(PathBuf::from("themes/gui")));
        assert_eq!(args.verbose, 2);
        assert!(args.dry_run);
    }

    #[test]
    fn start_and_minimal_force_policies() {
        let start = Args::parse_from(["guigen", "my_game", "--start"]).options();
        assert_eq!(
            (start.replace_images, start.replace_code, start.update_code),
            (Some(true), Some(true), Some(true))
        );

        let minimal = Args::parse_from(["guigen", "my_game", "--minimal"]).options();
        assert_eq!(
            (minimal.replace_images, minimal.replace_code, minimal.update_code),
            (None, Some(true), Some(true))
        );
    }

    #[test]
    fn negative_sizes_reach_validation() {
        let args = Args::parse_from(["guigen", "my_game", "--width", "-5"]);
        assert_eq!(args.width, Some(-5));
    }

    #[test]
    fn dark_overrides_a_light_options_file() {
        let file = GuiOptions { light: Some(true), ..Default::default() };
        let dark = Args::parse_from(["guigen", "my_game", "--dark"]).options();
        assert_eq!(dark.light, Some(false));
        assert_eq!(dark.or(file.clone()).light, Some(false));

        let unset = Args::parse_from(["guigen", "my_game"]).options();
        assert_eq!(unset.or(file).light, Some(true));

        assert!(Args::try_parse_from(["guigen", "my_game", "--light", "--dark"]).is_err());
    }
}
