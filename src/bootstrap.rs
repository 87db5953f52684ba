//! Directory bootstrap and the two generation entry points.
//!
//! `generate_gui` themes an existing (or empty) game directory in place.
//! `generate_minimal` clones the whole template first and then regenerates
//! only the scripts. Both end with `finish`, which creates the expected
//! directories and seeds housekeeping files.

use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::constants::{
    EPHEMERAL_DIRS, EXPECTED_DIRS, GENERATED_SCRIPTS, GITIGNORE_TARGET, GITIGNORE_TEMPLATE,
    GUI_SCRIPT, LIBS_DIR, LIBS_README, LIBS_TXT, OPTIONS_SCRIPT, SCREENS_SCRIPT, STARTER_SCRIPT,
};
use crate::error::{Error, Result};
use crate::images::ImageGenerator;
use crate::ioutils::{copy_file, create_dir_all, remove_path, write_file};
use crate::operation::{GenerationReport, Operation, Resolution};
use crate::params::ParameterSet;
use crate::renderer::TemplateRenderer;
use crate::template::CodeGenerator;
use crate::translate::Translator;

pub struct Bootstrapper<'a> {
    params: &'a ParameterSet,
    engine: &'a dyn TemplateRenderer,
    translator: &'a dyn Translator,
    dry_run: bool,
}

impl<'a> Bootstrapper<'a> {
    pub fn new(
        params: &'a ParameterSet,
        engine: &'a dyn TemplateRenderer,
        translator: &'a dyn Translator,
    ) -> Self {
        Self { params, engine, translator, dry_run: false }
    }

    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    fn code_generator(&self) -> Result<CodeGenerator<'a>> {
        Ok(CodeGenerator::new(self.engine, self.params, self.translator)?
            .with_dry_run(self.dry_run))
    }

    /// Renders the images and scripts into the output root, then copies
    /// the remaining template files and finishes the directory layout.
    ///
    /// `gui.rpy` is reconciled only in its define statements and
    /// `screens.rpy` only in its other declarations. `options.rpy` is
    /// reconciled as a whole.
    pub fn generate_gui(&self) -> Result<GenerationReport> {
        let mut report = ImageGenerator::new(self.params)
            .with_dry_run(self.dry_run)
            .generate_all()?;

        let code = self.code_generator()?;
        report.extend(code.generate_gui(GUI_SCRIPT, true)?);
        report.extend(code.generate_gui(SCREENS_SCRIPT, false)?);
        report.extend(code.generate_code(OPTIONS_SCRIPT)?);
        report.extend(code.copy_script(STARTER_SCRIPT)?);
        report.extend(code.copy_files()?);
        report.extend(self.finish()?);
        Ok(report)
    }

    /// Clones the template into the output root, drops ephemeral content
    /// and the generated scripts, then regenerates those scripts.
    pub fn generate_minimal(&self) -> Result<GenerationReport> {
        let mut report = self.clone_template()?;
        report.extend(self.prune()?);

        let code = self.code_generator()?;
        for script in GENERATED_SCRIPTS {
            report.extend(code.generate_code(script)?);
        }
        report.extend(code.copy_files()?);
        report.extend(self.finish()?);
        Ok(report)
    }

    fn clone_template(&self) -> Result<GenerationReport> {
        let template_root = self.params.template_root();
        let mut report = GenerationReport::new();

        for dir_entry in WalkDir::new(template_root).sort_by_file_name() {
            let dir_entry = dir_entry.map_err(|e| {
                let path = e.path().unwrap_or(template_root).to_path_buf();
                Error::io(path, e.into())
            })?;
            if !dir_entry.file_type().is_file() {
                continue;
            }
            let source = dir_entry.path();
            let Ok(relative) = source.strip_prefix(template_root) else {
                continue;
            };

            let target = self.params.output_root().join(relative);
            let target_exists = target.exists();
            if !target_exists && !self.dry_run {
                copy_file(source, target.as_path())?;
            }
            report.record(
                Operation::Copy { source: source.to_path_buf(), target, target_exists },
                self.dry_run,
            );
        }
        Ok(report)
    }

    /// Removes the ephemeral directories and generated scripts a fresh
    /// clone brought along.
    fn prune(&self) -> Result<GenerationReport> {
        let mut report = GenerationReport::new();
        let names = EPHEMERAL_DIRS.iter().chain(GENERATED_SCRIPTS);

        for name in names {
            let target = self.params.output_root().join(name);
            // A dry run never cloned, so look at what the clone would have brought.
            let present = if self.dry_run {
                target.exists() || self.params.template_root().join(name).exists()
            } else {
                remove_path(&target)?
            };
            if present {
                report.record(Operation::Delete { target }, self.dry_run);
            }
        }
        Ok(report)
    }

    /// Creates the expected directories, writes `libs/libs.txt` when the
    /// host declares library support, and seeds the project `.gitignore`.
    pub fn finish(&self) -> Result<GenerationReport> {
        let mut report = GenerationReport::new();

        for dir in EXPECTED_DIRS {
            let target = self.params.output_root().join(dir);
            let target_exists = target.is_dir();
            if !target_exists && !self.dry_run {
                create_dir_all(&target)?;
            }
            report.record(Operation::CreateDirectory { target, target_exists }, self.dry_run);
        }

        if self.translator.libs_declared() {
            report.record(self.write_libs_readme()?, self.dry_run);
        }

        if let Some(op) = self.seed_gitignore()? {
            report.record(op, self.dry_run);
        }
        Ok(report)
    }

    fn write_libs_readme(&self) -> Result<Operation> {
        let target = self.params.output_root().join(LIBS_DIR).join(LIBS_README);
        if target.exists() {
            return Ok(Operation::Generate {
                target,
                resolution: Resolution::SkippedPreserved,
                decisions: Vec::new(),
                changed: false,
            });
        }

        let text = match self.params.target_language() {
            Some(language) => self.translator.translate(LIBS_TXT, language),
            None => LIBS_TXT.to_string(),
        };
        if !self.dry_run {
            write_file(&text, &target)?;
        }
        Ok(Operation::Generate {
            target,
            resolution: Resolution::WrittenFresh,
            decisions: Vec::new(),
            changed: true,
        })
    }

    fn seed_gitignore(&self) -> Result<Option<Operation>> {
        let (Some(source), Some(target)) = (
            sibling(self.params.template_root(), GITIGNORE_TEMPLATE),
            sibling(self.params.output_root(), GITIGNORE_TARGET),
        ) else {
            return Ok(None);
        };
        if !source.is_file() {
            debug!("No '{}' in the template, not seeding .gitignore", source.display());
            return Ok(None);
        }

        let target_exists = target.exists();
        if !target_exists && !self.dry_run {
            copy_file(source.as_path(), target.as_path())?;
        }
        Ok(Some(Operation::Copy { source, target, target_exists }))
    }
}

/// `name` next to `dir`, in `dir`'s parent.
fn sibling(dir: &Path, name: &str) -> Option<PathBuf> {
    dir.parent().map(|parent| parent.join(name))
}
