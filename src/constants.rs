//! Constants used throughout guigen

/// Options file names accepted by `--config`, by extension.
pub const JSON_EXTENSIONS: &[&str] = &["json"];
pub const YAML_EXTENSIONS: &[&str] = &["yaml", "yml"];

/// Template scripts that are rendered and reconciled rather than copied.
pub const GUI_SCRIPT: &str = "gui.rpy";
pub const SCREENS_SCRIPT: &str = "screens.rpy";
pub const OPTIONS_SCRIPT: &str = "options.rpy";
pub const GENERATED_SCRIPTS: &[&str] = &[GUI_SCRIPT, SCREENS_SCRIPT, OPTIONS_SCRIPT];

/// Starter script, copied if absent and never rendered.
pub const STARTER_SCRIPT: &str = "script.rpy";

/// Game directory inside both the target project and the template project.
pub const GAME_DIR: &str = "game";

/// Directories that hold ephemeral or regenerable content.
pub const EPHEMERAL_DIRS: &[&str] = &["cache", "saves", "tl"];

/// Directories `finish` makes sure exist under the output root.
pub const EXPECTED_DIRS: &[&str] = &["images", "audio", "libs"];

/// Ignore file looked up in the template root.
pub const IGNORE_FILE: &str = ".guiignore";

/// Master copy of the project ignore file, next to the template's game dir.
pub const GITIGNORE_TEMPLATE: &str = "gitignore.txt";
/// Seeded project ignore file, next to the output game dir.
pub const GITIGNORE_TARGET: &str = ".gitignore";

pub const LIBS_DIR: &str = "libs";
pub const LIBS_README: &str = "libs.txt";

/// Text placed in `libs/libs.txt` when the host declares library support.
pub const LIBS_TXT: &str = "This directory holds third-party libraries. \
Each library should be placed in its own subdirectory.\n";

/// Resolution and polarity the template art and scripts were authored at.
pub mod authored {
    pub const WIDTH: u32 = 1280;
    pub const HEIGHT: u32 = 720;
    pub const LIGHT: bool = false;
}

/// Built-in defaults for the options surface.
pub mod defaults {
    pub const WIDTH: u32 = 1280;
    pub const HEIGHT: u32 = 720;
    pub const ACCENT: &str = "#00b8c3";
    pub const BACKGROUND: &str = "#000000";
    pub const TEMPLATE: &str = "gui";
}

/// Bounds on the options surface.
pub mod limits {
    /// Largest accepted width or height, in pixels.
    pub const MAX_SIZE: u32 = 16384;
}

/// Placeholder colors painted into template art.
pub mod keys {
    pub const ACCENT: [u8; 3] = [0xff, 0x00, 0xff];
    pub const BACKGROUND: [u8; 3] = [0x00, 0xff, 0x00];
    /// Max per-channel distance for a pixel to count as a key color.
    pub const TOLERANCE: u8 = 8;
}

/// Exit codes
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const FAILURE: i32 = 1;
}

/// Verbosity levels
pub mod verbosity {
    pub const OFF: u8 = 0;
    pub const INFO: u8 = 1;
    pub const DEBUG: u8 = 2;
    pub const TRACE: u8 = 3;
}
