#![allow(dead_code)]

use guigen::bootstrap::Bootstrapper;
use guigen::error::Result;
use guigen::images::manifest::{Fit, MANIFEST};
use guigen::operation::GenerationReport;
use guigen::params::{GuiOptions, ParameterSet};
use guigen::renderer::MiniJinjaRenderer;
use guigen::translate::TableTranslator;
use image::{Rgba, RgbaImage};
use log::debug;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;
use walkdir::WalkDir;

/// Template fixture checked into the repository.
pub const FIXTURE: &str = "tests/templates/gui";

/// Accent key color painted into the synthetic template art.
pub const ACCENT_KEY: Rgba<u8> = Rgba([0xff, 0x00, 0xff, 0xff]);

/// A scratch directory holding a copy of the template project at `gui/` and
/// the generated project at `my_game/`.
pub struct Workspace {
    dir: TempDir,
}

impl Workspace {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        copy_tree(Path::new(FIXTURE), &dir.path().join("gui"));
        paint_manifest(&dir.path().join("gui/game"));
        Self { dir }
    }

    pub fn template(&self) -> PathBuf {
        self.dir.path().join("gui/game")
    }

    pub fn target(&self) -> PathBuf {
        self.dir.path().join("my_game")
    }

    pub fn game(&self) -> PathBuf {
        self.target().join("game")
    }

    pub fn read(&self, relative: &str) -> String {
        fs::read_to_string(self.game().join(relative)).unwrap()
    }

    pub fn write(&self, relative: &str, content: &str) {
        let path = self.game().join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    pub fn read_template(&self, relative: &str) -> String {
        fs::read_to_string(self.template().join(relative)).unwrap()
    }

    pub fn write_template(&self, relative: &str, content: &str) {
        fs::write(self.template().join(relative), content).unwrap();
    }

    pub fn params(&self, options: GuiOptions) -> ParameterSet {
        ParameterSet::new(self.template(), self.game(), "my_game", options).unwrap()
    }

    /// Runs the full gui generation the way the command line does.
    pub fn generate(&self, options: GuiOptions) -> Result<GenerationReport> {
        self.generate_with(options, false)
    }

    pub fn generate_with(&self, options: GuiOptions, dry_run: bool) -> Result<GenerationReport> {
        let params = ParameterSet::new(self.template(), self.game(), "my_game", options)?;
        let engine = MiniJinjaRenderer::new();
        let translator =
            TableTranslator::load(params.template_root(), params.target_language(), true)?;
        Bootstrapper::new(&params, &engine, &translator)
            .with_dry_run(dry_run)
            .generate_gui()
    }

    /// Copies the generated project aside for later comparison.
    pub fn snapshot(&self) -> TempDir {
        let snapshot = TempDir::new().unwrap();
        copy_tree(&self.target(), snapshot.path());
        snapshot
    }
}

/// Options shared by most tests: a small resolution keeps image work cheap.
pub fn options() -> GuiOptions {
    GuiOptions { width: Some(640), height: Some(360), ..Default::default() }
}

pub fn copy_tree(from: &Path, to: &Path) {
    for entry in WalkDir::new(from).into_iter().filter_map(|e| e.ok()) {
        let relative = entry.path().strip_prefix(from).unwrap();
        let target = to.join(relative);
        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).unwrap();
        } else {
            fs::copy(entry.path(), &target).unwrap();
        }
    }
}

/// Writes synthetic art for every manifest entry: accent key on the left,
/// translucent grey on the right.
pub fn paint_manifest(template_game: &Path) {
    for asset in MANIFEST {
        let (width, height) = match asset.fit {
            Fit::Keep => (16, 16),
            _ => (32, 18),
        };
        let image = RgbaImage::from_fn(width, height, |x, _| {
            if x < width / 2 {
                ACCENT_KEY
            } else {
                Rgba([0x40, 0x40, 0x40, 0x80])
            }
        });
        let path = template_game.join(asset.path);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        image.save(&path).unwrap();
    }
}

/// Prints a diff of files and their contents between two directories.
/// Shows files only present in one directory and content differences for files present in both.
///
/// # Arguments
/// * `dir1` - The first directory to compare (actual output).
/// * `dir2` - The second directory to compare (expected output).
pub fn print_dir_diff(dir1: &Path, dir2: &Path) {
    let files = |dir: &Path| -> std::collections::BTreeSet<PathBuf> {
        WalkDir::new(dir)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_file())
            .map(|e| e.path().strip_prefix(dir).unwrap().to_path_buf())
            .collect()
    };
    let (files1, files2) = (files(dir1), files(dir2));

    println!("\n=== Directory Comparison ===");
    println!("Actual output:   {:?}", dir1);
    println!("Expected output: {:?}", dir2);

    for file in files1.difference(&files2) {
        println!("  + {:?}", file);
    }
    for file in files2.difference(&files1) {
        println!("  - {:?}", file);
    }
    for file in files1.intersection(&files2) {
        let content1 = fs::read(dir1.join(file)).unwrap();
        let content2 = fs::read(dir2.join(file)).unwrap();
        if content1 != content2 {
            println!("\n  File: {:?}", file);
            match (String::from_utf8(content1), String::from_utf8(content2)) {
                (Ok(actual), Ok(expected)) => {
                    println!("  --- Actual content:\n{actual}");
                    println!("  --- Expected content:\n{expected}");
                }
                _ => println!("  (binary content differs)"),
            }
        }
    }
    println!("=== End of Comparison ===\n");
}

/// Asserts two trees are byte-identical, printing the differences first.
pub fn assert_same_tree(actual: &Path, expected: &Path) {
    match dir_diff::is_different(actual, expected) {
        Ok(true) => {
            print_dir_diff(actual, expected);
            panic!("Directories differ. See above for details.");
        }
        Ok(false) => {}
        Err(e) => {
            debug!("Error comparing directories: {e:?}");
            panic!("Could not compare directories");
        }
    }
}
