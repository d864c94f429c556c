use std::path::PathBuf;

pub const APP_DIR: &str = "cmus-waybar";

pub fn config_dir() -> PathBuf {
    // On macOS and Linux, always use ~/.config/cmus-waybar/
    // (avoid macOS Application Support folder for consistency)
    #[cfg(unix)]
    {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config")
            .join(APP_DIR)
    }

    #[cfg(not(unix))]
    {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(APP_DIR)
    }
}
