/// How a template asset is sized for the requested resolution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Fit {
    /// Exactly the screen size.
    Screen,
    /// Full screen width, `height` authored lines tall.
    Band { height: u32 },
    /// Both axes scaled by the resolution ratio.
    Scaled,
    /// Left at its authored size.
    Keep,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Asset {
    /// Path relative to both the template and the output game directory.
    pub path: &'static str,
    pub fit: Fit,
    /// Composite the art over a background-color fill.
    pub backdrop: bool,
}

const fn asset(path: &'static str, fit: Fit) -> Asset {
    Asset { path, fit, backdrop: false }
}

const fn backdrop(path: &'static str, fit: Fit) -> Asset {
    Asset { path, fit, backdrop: true }
}

pub const MANIFEST: &[Asset] = &[
    asset("gui/window_icon.png", Fit::Keep),
    asset("gui/textbox.png", Fit::Band { height: 185 }),
    asset("gui/namebox.png", Fit::Scaled),
    asset("gui/frame.png", Fit::Scaled),
    asset("gui/notify.png", Fit::Scaled),
    asset("gui/skip.png", Fit::Scaled),
    asset("gui/nvl.png", Fit::Screen),
    backdrop("gui/main_menu.png", Fit::Screen),
    backdrop("gui/game_menu.png", Fit::Screen),
    asset("gui/overlay/main_menu.png", Fit::Screen),
    asset("gui/overlay/game_menu.png", Fit::Screen),
    asset("gui/overlay/confirm.png", Fit::Screen),
    asset("gui/button/idle_background.png", Fit::Scaled),
    asset("gui/button/hover_background.png", Fit::Scaled),
    asset("gui/button/choice_idle_background.png", Fit::Scaled),
    asset("gui/button/choice_hover_background.png", Fit::Scaled),
    asset("gui/bar/left.png", Fit::Scaled),
    asset("gui/bar/right.png", Fit::Scaled),
    asset("gui/bar/top.png", Fit::Scaled),
    asset("gui/bar/bottom.png", Fit::Scaled),
    asset("gui/slider/horizontal_idle_bar.png", Fit::Scaled),
    asset("gui/slider/horizontal_hover_bar.png", Fit::Scaled),
    asset("gui/slider/horizontal_idle_thumb.png", Fit::Scaled),
    asset("gui/slider/horizontal_hover_thumb.png", Fit::Scaled),
    asset("gui/scrollbar/vertical_idle_bar.png", Fit::Scaled),
    asset("gui/scrollbar/vertical_hover_bar.png", Fit::Scaled),
    asset("gui/scrollbar/vertical_idle_thumb.png", Fit::Scaled),
    asset("gui/scrollbar/vertical_hover_thumb.png", Fit::Scaled),
];

/// Manifest paths, for excluding them from verbatim copies.
pub fn manifest_paths() -> Vec<String> {
    MANIFEST.iter().map(|asset| asset.path.to_string()).collect()
}
