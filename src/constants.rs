use std::path::PathBuf;

use dirs::config_dir;

pub fn base_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("hexmaze"))
}
