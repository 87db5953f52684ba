use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use super::manifest::{Asset, Fit};
use crate::color::Color;
use crate::constants::{authored, keys};
use crate::params::ParameterSet;

fn is_key(pixel: &Rgba<u8>, key: [u8; 3]) -> bool {
    pixel.0[..3]
        .iter()
        .zip(key)
        .all(|(channel, k)| channel.abs_diff(k) <= keys::TOLERANCE)
}

/// Replaces accent and background key pixels with the configured colors,
/// scaling the configured alpha by the pixel's own. With `invert`, every
/// other pixel is channel-inverted.
pub fn recolor(image: &mut RgbaImage, accent: Color, background: Color, invert: bool) {
    for pixel in image.pixels_mut() {
        let alpha = pixel.0[3];
        let replacement = if is_key(pixel, keys::ACCENT) {
            Some(accent)
        } else if is_key(pixel, keys::BACKGROUND) {
            Some(background)
        } else {
            None
        };

        *pixel = match replacement {
            Some(color) => {
                let [r, g, b, a] = color.rgba().0;
                let a = ((u16::from(a) * u16::from(alpha) + 127) / 255) as u8;
                Rgba([r, g, b, a])
            }
            None if invert => Color(*pixel).invert().rgba(),
            None => *pixel,
        };
    }
}

fn scaled(value: u32, target: u32, authored: u32) -> u32 {
    let value = (f64::from(value) * f64::from(target) / f64::from(authored)).round() as u32;
    value.max(1)
}

/// Output dimensions of an asset whose template art is `source` sized.
pub fn target_size(fit: Fit, source: (u32, u32), params: &ParameterSet) -> (u32, u32) {
    let (width, height) = (params.width(), params.height());
    match fit {
        Fit::Screen => (width, height),
        Fit::Band { height: band } => (width, scaled(band, height, authored::HEIGHT)),
        Fit::Scaled => (
            scaled(source.0, width, authored::WIDTH),
            scaled(source.1, height, authored::HEIGHT),
        ),
        Fit::Keep => source,
    }
}

/// Renders one asset: recolor, fit, then composite over the backdrop.
pub fn render_asset(source: &RgbaImage, asset: &Asset, params: &ParameterSet) -> RgbaImage {
    let mut image = source.clone();
    let invert = params.is_light_theme() != authored::LIGHT;
    recolor(&mut image, params.accent_color(), params.background_color(), invert);

    let (width, height) = target_size(asset.fit, image.dimensions(), params);
    if image.dimensions() != (width, height) {
        image = imageops::resize(&image, width, height, FilterType::Triangle);
    }

    if asset.backdrop {
        let fill = params.background_color().with_alpha(255).rgba();
        let mut base = RgbaImage::from_pixel(width, height, fill);
        imageops::overlay(&mut base, &image, 0, 0);
        image = base;
    }
    image
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::GuiOptions;
    use tempfile::TempDir;

    const ACCENT_KEY: Rgba<u8> = Rgba([0xff, 0x00, 0xff, 0xff]);
    const BACKGROUND_KEY: Rgba<u8> = Rgba([0x00, 0xff, 0x00, 0x80]);

    fn params(light: bool, width: i64, height: i64) -> (TempDir, ParameterSet) {
        let dir = TempDir::new().unwrap();
        let opts = GuiOptions {
            accent: Some("#00b8c3".into()),
            background: Some("#102030".into()),
            light: Some(light),
            width: Some(width),
            height: Some(height),
            ..Default::default()
        };
        let p = ParameterSet::new(dir.path(), dir.path(), "demo", opts).unwrap();
        (dir, p)
    }

    #[test]
    fn recolor_replaces_keys_and_keeps_alpha() {
        let mut image = RgbaImage::from_fn(3, 1, |x, _| match x {
            0 => ACCENT_KEY,
            1 => BACKGROUND_KEY,
            _ => Rgba([10, 20, 30, 255]),
        });
        recolor(&mut image, Color::rgb(0, 0xb8, 0xc3), Color::rgb(0x10, 0x20, 0x30), false);
        assert_eq!(*image.get_pixel(0, 0), Rgba([0, 0xb8, 0xc3, 0xff]));
        assert_eq!(*image.get_pixel(1, 0), Rgba([0x10, 0x20, 0x30, 0x80]));
        assert_eq!(*image.get_pixel(2, 0), Rgba([10, 20, 30, 255]));
    }

    #[test]
    fn recolor_inverts_non_key_pixels_when_polarity_flips() {
        let mut image =
            RgbaImage::from_fn(2, 1, |x, _| if x == 0 { ACCENT_KEY } else { Rgba([0, 0, 0, 200]) });
        recolor(&mut image, Color::rgb(1, 2, 3), Color::BLACK, true);
        assert_eq!(*image.get_pixel(0, 0), Rgba([1, 2, 3, 255]));
        assert_eq!(*image.get_pixel(1, 0), Rgba([255, 255, 255, 200]));
    }

    #[test]
    fn key_match_tolerates_small_drift() {
        assert!(is_key(&Rgba([0xfa, 0x04, 0xfb, 0xff]), keys::ACCENT));
        assert!(!is_key(&Rgba([0xe0, 0x00, 0xff, 0xff]), keys::ACCENT));
    }

    #[test]
    fn target_sizes_follow_fit_rules() {
        let (_dir, p) = params(false, 1920, 1080);
        assert_eq!(target_size(Fit::Screen, (10, 10), &p), (1920, 1080));
        assert_eq!(target_size(Fit::Band { height: 185 }, (1280, 185), &p), (1920, 278));
        assert_eq!(target_size(Fit::Scaled, (100, 50), &p), (150, 75));
        assert_eq!(target_size(Fit::Keep, (64, 64), &p), (64, 64));
        assert_eq!(target_size(Fit::Scaled, (1, 1), &params(false, 100, 100).1), (1, 1));
    }

    #[test]
    fn backdrop_fills_transparent_areas_with_background() {
        let (_dir, p) = params(false, 4, 2);
        let source = RgbaImage::from_pixel(4, 2, Rgba([0, 0, 0, 0]));
        let asset = Asset { path: "gui/main_menu.png", fit: Fit::Screen, backdrop: true };
        let out = render_asset(&source, &asset, &p);
        assert_eq!(out.dimensions(), (4, 2));
        assert_eq!(*out.get_pixel(3, 1), Rgba([0x10, 0x20, 0x30, 0xff]));
    }

    #[test]
    fn light_theme_inverts_dark_template_art() {
        let (_dir, p) = params(true, 2, 1);
        let source = RgbaImage::from_pixel(2, 1, Rgba([0, 0, 0, 255]));
        let asset = Asset { path: "gui/frame.png", fit: Fit::Keep, backdrop: false };
        let out = render_asset(&source, &asset, &p);
        assert_eq!(*out.get_pixel(0, 0), Rgba([255, 255, 255, 255]));
    }
}
