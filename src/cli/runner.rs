use crate::{
    bootstrap::Bootstrapper,
    cli::Args,
    constants::{defaults, GAME_DIR},
    error::{Error, Result},
    ioutils::get_output_dir,
    operation::GenerationReport,
    params::{GuiOptions, ParameterSet},
    renderer::MiniJinjaRenderer,
    translate::TableTranslator,
};
use std::path::{Path, PathBuf};

/// Main CLI runner that resolves the project layout and drives generation
pub struct Runner {
    args: Args,
}

impl Runner {
    pub fn new(args: Args) -> Self {
        Self { args }
    }

    /// Executes the complete generation workflow
    pub fn run(self) -> Result<GenerationReport> {
        let output_root = self.output_root()?;
        let template_root = self.template_root();
        let options = self.load_options()?;

        let params = ParameterSet::new(
            template_root,
            output_root,
            &project_name(&self.args.target),
            options,
        )?;

        let engine = MiniJinjaRenderer::new();
        let translator =
            TableTranslator::load(params.template_root(), params.target_language(), true)?;
        let bootstrap =
            Bootstrapper::new(&params, &engine, &translator).with_dry_run(self.args.dry_run);

        let report = if self.args.minimal {
            bootstrap.generate_minimal()?
        } else {
            bootstrap.generate_gui()?
        };

        let kept = report.advisories().len();
        if kept > 0 {
            println!("{kept} customized block(s) were kept, run with -v for details.");
        }
        println!("Gui generation completed successfully in {}.", params.output_root().display());
        Ok(report)
    }

    /// Resolves `TARGET/game`, checking it fits the selected mode
    fn output_root(&self) -> Result<PathBuf> {
        let target = &self.args.target;
        if self.args.minimal {
            return Ok(get_output_dir(target, false)?.join(GAME_DIR));
        }

        let game = target.join(GAME_DIR);
        if target.exists() && !game.is_dir() {
            return Err(Error::InvalidParameter(format!(
                "'{}' does not appear to be a game directory",
                target.display()
            )));
        }
        Ok(game)
    }

    fn template_root(&self) -> PathBuf {
        let template = self.args.template.clone().unwrap_or_else(|| defaults::TEMPLATE.into());
        template.join(GAME_DIR)
    }

    /// Layers command-line options over the options file, if any
    fn load_options(&self) -> Result<GuiOptions> {
        let file = match &self.args.config {
            Some(path) => {
                log::debug!("Loading options from '{}'", path.display());
                GuiOptions::from_file(path)?
            }
            None => GuiOptions::default(),
        };
        Ok(self.args.options().or(file))
    }
}

/// Display name of the project: the last component of `target`.
fn project_name(target: &Path) -> String {
    target
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| target.display().to_string())
}

/// Main entry point for CLI execution
pub fn run(args: Args) -> Result<GenerationReport> {
    let runner = Runner::new(args);
    runner.run()
}
