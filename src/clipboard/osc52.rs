//! OSC 52 clipboard backend
//!
//! Write-only clipboard access through terminal escape sequences, for
//! sessions where the system clipboard is out of reach (SSH, tmux).

use base64::{Engine as _, engine::general_purpose::STANDARD};
use std::io::{self, Write};

use super::backend::{ClipboardError, ClipboardResult};

const OSC52_PREFIX: &str = "\x1b]52;c;";
const BEL: &str = "\x07";

pub fn copy(text: &str) -> ClipboardResult {
    copy_to(&mut io::stdout(), text)
}

fn copy_to(out: &mut impl Write, text: &str) -> ClipboardResult {
    out.write_all(encode_osc52(text).as_bytes())
        .and_then(|_| out.flush())
        .map_err(|_| ClipboardError::WriteError)
}

/// `ESC ] 52 ; c ; <base64> BEL`, targeting the `c` (clipboard) selection.
pub fn encode_osc52(text: &str) -> String {
    format!("{}{}{}", OSC52_PREFIX, STANDARD.encode(text), BEL)
}
