// texture-resizer/src/utils/mod.rs
pub mod prompt;

use std::path::Path;

pub use prompt::{confirm_continue, is_cancel_answer};

/// Case-insensitive extension match; `ext` may carry a leading dot.
pub fn has_extension(path: &Path, ext: &str) -> bool {
    let wanted = ext.trim_start_matches('.');
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case(wanted))
        .unwrap_or(false)
}

/// File name for status lines, falling back to the whole path.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn format_dimensions((width, height): (u32, u32)) -> String {
    format!("{}x{}", width, height)
}
