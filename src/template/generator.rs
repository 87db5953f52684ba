use globset::GlobSet;
use log::debug;
use std::path::Path;
use walkdir::WalkDir;

use super::pattern::TemplatePatterns;
use super::reconcile::{reconcile, Scope};
use super::blocks::Section;
use crate::error::{Error, Result};
use crate::ignore::parse_guiignore_file;
use crate::images::manifest::manifest_paths;
use crate::ioutils::{copy_file, read_optional, read_to_string, write_file};
use crate::operation::{GenerationReport, Operation, Resolution};
use crate::params::ParameterSet;
use crate::renderer::{ScriptRenderer, TemplateRenderer};
use crate::translate::Translator;

/// Renders script templates into the output tree and reconciles them with
/// whatever is already there.
pub struct CodeGenerator<'a> {
    /// Dependencies
    renderer: ScriptRenderer<'a>,
    ignore: GlobSet,

    /// Other
    params: &'a ParameterSet,
    dry_run: bool,
}

impl<'a> CodeGenerator<'a> {
    pub fn new(
        engine: &'a dyn TemplateRenderer,
        params: &'a ParameterSet,
        translator: &'a dyn Translator,
    ) -> Result<Self> {
        let ignore = parse_guiignore_file(params.template_root(), &manifest_paths())?;
        Ok(Self {
            renderer: ScriptRenderer::new(engine, params, translator),
            ignore,
            params,
            dry_run: false,
        })
    }

    /// Computes and reports every decision without touching disk.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Renders `filename` and reconciles the whole file.
    pub fn generate_code(&self, filename: &str) -> Result<GenerationReport> {
        self.generate(filename, Scope::All)
    }

    /// Renders `filename` and reconciles only its define statements when
    /// `defines` is set, or only its other declarations otherwise.
    pub fn generate_gui(&self, filename: &str, defines: bool) -> Result<GenerationReport> {
        let section = if defines { Section::Defines } else { Section::Declarations };
        self.generate(filename, Scope::Only(section))
    }

    fn generate(&self, filename: &str, scope: Scope) -> Result<GenerationReport> {
        let source = self.params.template_root().join(filename);
        let target = self.params.output_root().join(filename);

        let template = read_to_string(&source)?;
        let rendered = self.renderer.render(filename, &template)?;
        let existing = read_optional(&target)?;

        let (resolution, text, decisions) = match existing.as_deref() {
            None => (Resolution::WrittenFresh, Some(rendered), Vec::new()),
            Some(current) if self.params.merge_code() => {
                let patterns = self.patterns(filename, &template)?;
                let outcome = reconcile(current, &rendered, &patterns, scope);
                (Resolution::UpdatedInPlace, Some(outcome.text), outcome.decisions)
            }
            Some(_) if self.params.overwrite_code() => {
                (Resolution::Replaced, Some(rendered), Vec::new())
            }
            Some(_) => (Resolution::SkippedPreserved, None, Vec::new()),
        };

        let changed = match (&text, &existing) {
            (Some(new), Some(old)) => new != old,
            (Some(_), None) => true,
            (None, _) => false,
        };

        if changed && !self.dry_run {
            if let Some(text) = &text {
                write_file(text, &target)?;
            }
        }

        let mut report = GenerationReport::new();
        report.record(
            Operation::Generate { target, resolution, decisions, changed },
            self.dry_run,
        );
        Ok(report)
    }

    fn patterns(&self, filename: &str, template: &str) -> Result<TemplatePatterns> {
        let renders = [
            self.renderer.render_wildcard(filename, template, true)?,
            self.renderer.render_wildcard(filename, template, false)?,
        ];
        TemplatePatterns::from_renders(&renders)
    }

    /// Copies a script verbatim if the output does not have it yet.
    pub fn copy_script(&self, filename: &str) -> Result<GenerationReport> {
        let source = self.params.template_root().join(filename);
        let target = self.params.output_root().join(filename);
        let mut report = GenerationReport::new();
        report.record(self.copy_if_absent(&source, &target)?, self.dry_run);
        Ok(report)
    }

    /// Copies every non-generated template file that the output lacks.
    pub fn copy_files(&self) -> Result<GenerationReport> {
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
            let relative = source.strip_prefix(template_root).map_err(|e| {
                Error::Other(anyhow::anyhow!("'{}' escapes the template: {e}", source.display()))
            })?;
            if self.ignore.is_match(relative) {
                debug!("Ignoring '{}' (matches ignore pattern)", relative.display());
                continue;
            }

            let target = self.params.output_root().join(relative);
            report.record(self.copy_if_absent(source, &target)?, self.dry_run);
        }
        Ok(report)
    }

    fn copy_if_absent(&self, source: &Path, target: &Path) -> Result<Operation> {
        if !source.is_file() {
            return Err(Error::io(
                source,
                std::io::Error::new(std::io::ErrorKind::NotFound, "template file not found"),
            ));
        }
        let target_exists = target.exists();
        if !target_exists && !self.dry_run {
            copy_file(source, target)?;
        }
        Ok(Operation::Copy {
            source: source.to_path_buf(),
            target: target.to_path_buf(),
            target_exists,
        })
    }
}
