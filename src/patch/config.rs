//! Textual insertion into config.jsonc.
//!
//! The config is edited as text so comments, key order, and formatting
//! survive. Parsing (see `jsonc`) only decides what is already present and
//! validates that the insertion anchors exist.

use std::path::Path;

use serde_json::Value;

use crate::patch::error::PatchError;
use crate::patch::jsonc;

/// Module key registered in the config.
pub const MODULE_KEY: &str = "custom/vpn";
/// Array the module must be listed in. Its absence is a malformed config.
pub const MODULES_ARRAY: &str = "modules-right";
/// Preferred neighbour: the module slots in right after the tray expander.
const TRAY_ANCHOR: &str = "\"group/tray-expander\"";

const MODULE_DEFINITION: &str = r#"
  "custom/vpn": {
    "format": "{}",
    "return-type": "json",
    "exec": "~/.config/waybar/scripts/vpn-toggle.sh",
    "on-click": "~/.config/waybar/scripts/vpn-toggle.sh toggle",
    "interval": 5
  }"#;

/// Which halves of the customisation a config already carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigState {
    /// `"custom/vpn"` is listed in the modules-right array
    pub in_modules: bool,
    /// The root object has a `"custom/vpn"` definition
    pub has_definition: bool,
}

impl ConfigState {
    pub fn configured(self) -> bool {
        self.in_modules && self.has_definition
    }
}

/// Inspect the parsed config for the two halves of the customisation.
pub fn inspect(path: &Path, content: &str) -> Result<ConfigState, PatchError> {
    let value = jsonc::parse(content).map_err(|e| PatchError::MalformedTarget {
        file: path.to_path_buf(),
        reason: format!("not valid JSONC: {}", e),
    })?;

    let modules = value
        .get(MODULES_ARRAY)
        .and_then(Value::as_array)
        .ok_or_else(|| PatchError::MalformedTarget {
            file: path.to_path_buf(),
            reason: format!("no \"{}\" array", MODULES_ARRAY),
        })?;

    Ok(ConfigState {
        in_modules: modules.iter().any(|m| m.as_str() == Some(MODULE_KEY)),
        has_definition: value.get(MODULE_KEY).is_some(),
    })
}

/// Insert whichever halves are missing, returning the new content.
/// Each half is inserted independently so a config with only one half
/// present gets the other added.
pub fn insert(path: &Path, content: &str, state: ConfigState) -> Result<String, PatchError> {
    let mut content = content.to_string();

    if !state.in_modules {
        content = insert_module_entry(path, &content)?;
    }
    if !state.has_definition {
        content = insert_definition(path, &content)?;
    }

    Ok(content)
}

/// Add `"custom/vpn"` to the modules-right array: right after the tray
/// expander when that anchor exists, otherwise at the head of the array.
fn insert_module_entry(path: &Path, content: &str) -> Result<String, PatchError> {
    if let Some(pos) = content.find(TRAY_ANCHOR) {
        let after_anchor = pos + TRAY_ANCHOR.len();
        let rest = &content[after_anchor..];
        let ws: usize = rest
            .chars()
            .take_while(|c| c.is_whitespace())
            .map(char::len_utf8)
            .sum();
        if rest[ws..].starts_with(',') {
            let insert_at = after_anchor + ws + 1;
            let mut result = String::with_capacity(content.len() + 32);
            result.push_str(&content[..insert_at]);
            result.push_str("\n    \"custom/vpn\",");
            result.push_str(&content[insert_at..]);
            return Ok(result);
        }
    }

    let insert_at =
        find_modules_array_start(content).ok_or_else(|| PatchError::MalformedTarget {
            file: path.to_path_buf(),
            reason: format!("no \"{}\" array", MODULES_ARRAY),
        })?;
    let mut result = String::with_capacity(content.len() + 32);
    result.push_str(&content[..insert_at]);
    result.push_str("\"custom/vpn\",\n    ");
    result.push_str(&content[insert_at..]);
    Ok(result)
}

/// Find the position just inside the modules-right array, past the opening
/// bracket and any whitespace after it.
fn find_modules_array_start(content: &str) -> Option<usize> {
    let key = format!("\"{}\"", MODULES_ARRAY);
    let mut i = content.find(&key)? + key.len();
    let bytes = content.as_bytes();

    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if i >= bytes.len() || bytes[i] != b':' {
        return None;
    }
    i += 1;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    if i >= bytes.len() || bytes[i] != b'[' {
        return None;
    }
    i += 1;
    while i < bytes.len() && bytes[i].is_ascii_whitespace() {
        i += 1;
    }
    Some(i)
}

/// Add the module definition object before the final closing brace of the
/// root object, with a leading comma only when one is not already there.
fn insert_definition(path: &Path, content: &str) -> Result<String, PatchError> {
    let brace = content.rfind('}').ok_or_else(|| PatchError::MalformedTarget {
        file: path.to_path_buf(),
        reason: "no closing brace".to_string(),
    })?;

    let needs_comma = !content[..brace].trim_end().ends_with(',');

    let mut result = String::with_capacity(content.len() + MODULE_DEFINITION.len() + 2);
    result.push_str(&content[..brace]);
    if needs_comma {
        result.push(',');
    }
    result.push_str(MODULE_DEFINITION);
    result.push('\n');
    result.push_str(&content[brace..]);
    Ok(result)
}
