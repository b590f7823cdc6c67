//! The #custom-vpn rule in style.css.

/// Selector the module styling hangs off. Presence of this selector anywhere
/// in the sheet counts as configured, so a sheet the update process has
/// reformatted is not patched twice.
pub const SELECTOR: &str = "#custom-vpn";

const RULE_BLOCK: &str = "
#custom-vpn {
  min-width: 12px;
  margin-left: 7.5px;
  margin-right: 17px;
}
";

pub fn has_rule(content: &str) -> bool {
    content.contains(SELECTOR)
}

/// Append the rule block at the end of the sheet.
pub fn append_rule(content: &str) -> String {
    let mut result = String::with_capacity(content.len() + RULE_BLOCK.len());
    result.push_str(content);
    result.push_str(RULE_BLOCK);
    result
}
