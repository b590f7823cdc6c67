//! The generated vpn-toggle.sh.
//!
//! This file is wholly owned by the patcher: it is created if absent and
//! rewritten whenever its content drifts from the generated form. The status
//! bar invokes it on an interval for state (Waybar JSON on stdout) and with
//! a `toggle` argument on click.

use crate::utils::hash::hash_bytes;

/// Nerd Font codepoints for the two VPN states
/// (nf-md-lock and nf-md-lock_open_outline).
const ICON_LOCK: char = '\u{F033E}';
const ICON_LOCK_OPEN: char = '\u{F0FC6}';

/// Full content of the toggle script.
pub fn content() -> String {
    format!(
        r#"#!/bin/bash
INTERFACE="home"

if ip link show "$INTERFACE" 2>/dev/null | grep -q "state UP"; then
    if [[ "$1" == "toggle" ]]; then
        sudo wg-quick down "$INTERFACE"
    else
        echo '{{"text": "{lock}", "tooltip": "VPN: Connected", "class": "connected"}}'
    fi
else
    if [[ "$1" == "toggle" ]]; then
        sudo wg-quick up "$INTERFACE"
    else
        echo '{{"text": "{open}", "tooltip": "VPN: Disconnected", "class": "disconnected"}}'
    fi
fi
"#,
        lock = ICON_LOCK,
        open = ICON_LOCK_OPEN
    )
}

/// True when the existing bytes are exactly the generated script.
pub fn is_current(existing: &[u8]) -> bool {
    hash_bytes(existing) == hash_bytes(content().as_bytes())
}
