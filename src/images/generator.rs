use image::{ImageOutputFormat, RgbaImage};
use log::debug;
use std::io::Cursor;
use std::path::{Path, PathBuf};

use super::manifest::{Asset, MANIFEST};
use super::recolor::render_asset;
use crate::error::{Error, Result};
use crate::ioutils::write_file;
use crate::operation::{GenerationReport, ImageAction, Operation};
use crate::params::ParameterSet;

/// Renders the manifest's theme images into the output tree.
pub struct ImageGenerator<'a> {
    params: &'a ParameterSet,
    manifest: &'a [Asset],
    dry_run: bool,
}

impl<'a> ImageGenerator<'a> {
    pub fn new(params: &'a ParameterSet) -> Self {
        Self { params, manifest: MANIFEST, dry_run: false }
    }

    /// Uses `manifest` instead of the built-in one.
    pub fn with_manifest(mut self, manifest: &'a [Asset]) -> Self {
        self.manifest = manifest;
        self
    }

    /// Computes and reports every decision without touching disk.
    pub fn with_dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Renders every manifest asset, skipping outputs that already exist
    /// unless images are being replaced.
    ///
    /// # Errors
    /// * `AssetMissing` - checked for the whole manifest before anything is written
    /// * `ImageError` / `IoFailure` - decoding, encoding or writing failed
    pub fn generate_all(&self) -> Result<GenerationReport> {
        self.check_manifest()?;

        let mut report = GenerationReport::new();
        for asset in self.manifest {
            report.record(self.generate(asset)?, self.dry_run);
        }
        Ok(report)
    }

    fn source_path(&self, asset: &Asset) -> PathBuf {
        self.params.template_root().join(asset.path)
    }

    fn check_manifest(&self) -> Result<()> {
        match self.manifest.iter().find(|asset| !self.source_path(asset).is_file()) {
            Some(asset) => Err(Error::AssetMissing {
                asset: asset.path.to_string(),
                path: self.source_path(asset),
            }),
            None => Ok(()),
        }
    }

    fn generate(&self, asset: &Asset) -> Result<Operation> {
        let target = self.params.output_root().join(asset.path);

        if target.exists() && !self.params.overwrite_images() {
            return Ok(Operation::Image { target, action: ImageAction::Skipped, changed: false });
        }

        let source = load(&self.source_path(asset))?;
        let rendered = render_asset(&source, asset, self.params);
        let bytes = encode_png(&rendered, &target)?;

        let changed = match std::fs::read(&target) {
            Ok(current) => current != bytes,
            Err(_) => true,
        };
        if changed && !self.dry_run {
            debug!("Writing {} bytes to '{}'", bytes.len(), target.display());
            write_file(&bytes, &target)?;
        }

        Ok(Operation::Image { target, action: ImageAction::Rendered, changed })
    }
}

fn load(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path)
        .map_err(|source| Error::ImageError { path: path.to_path_buf(), source })?;
    Ok(image.to_rgba8())
}

fn encode_png(image: &RgbaImage, target: &Path) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    image
        .write_to(&mut cursor, ImageOutputFormat::Png)
        .map_err(|source| Error::ImageError { path: target.to_path_buf(), source })?;
    Ok(cursor.into_inner())
}
