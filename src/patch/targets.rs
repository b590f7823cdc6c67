//! The three files this tool maintains, resolved against a config root.

use std::env;
use std::ffi::OsString;
use std::path::{Path, PathBuf};

/// Environment variable overriding the default config root.
pub const CONFIG_DIR_ENV: &str = "WAYBAR_CONFIG_DIR";

/// Relative path of the JSONC config under the root
pub const CONFIG_FILE: &str = "config.jsonc";
/// Relative path of the stylesheet under the root
pub const STYLE_FILE: &str = "style.css";
/// Relative path of the generated toggle script under the root
pub const SCRIPT_FILE: &str = "scripts/vpn-toggle.sh";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Targets {
    pub config: PathBuf,
    pub style: PathBuf,
    pub script: PathBuf,
}

impl Targets {
    pub fn in_root(root: &Path) -> Targets {
        Targets {
            config: root.join(CONFIG_FILE),
            style: root.join(STYLE_FILE),
            script: root.join(SCRIPT_FILE),
        }
    }

    /// Resolve the config root: explicit override first, then
    /// `$WAYBAR_CONFIG_DIR`, then the conventional user config directory.
    ///
    /// Returns `None` only when no override is given and the platform has no
    /// user config directory.
    pub fn resolve(override_dir: Option<&Path>) -> Option<Targets> {
        Targets::resolve_with_env(override_dir, env::var_os(CONFIG_DIR_ENV))
    }

    // Takes the env lookup as a value so the precedence is testable without
    // touching process-global state
    fn resolve_with_env(override_dir: Option<&Path>, env_dir: Option<OsString>) -> Option<Targets> {
        let root = match override_dir {
            Some(dir) => dir.to_path_buf(),
            None => match env_dir {
                Some(dir) => PathBuf::from(dir),
                None => dirs::config_dir()?.join("waybar"),
            },
        };
        Some(Targets::in_root(&root))
    }
}
