/// Stem used when a single-mode text trims to nothing.
pub const FALLBACK_STEM: &str = "generated-image";

/// Single-mode file name: the trimmed text, or [`FALLBACK_STEM`] when the
/// trim is empty, with a `.png` extension.
pub fn single_file_name(text: &str) -> String {
    let stem = text.trim();
    if stem.is_empty() {
        format!("{FALLBACK_STEM}.png")
    } else {
        format!("{stem}.png")
    }
}

/// Archive entry name for one batch item.
///
/// `stem` is the item's trimmed text and `position` its 1-based index among
/// surviving items. Blank items are filtered before naming, so the indexed
/// fallback only covers a caller handing in an empty stem directly.
pub fn entry_name(stem: &str, position: usize) -> String {
    if stem.is_empty() {
        format!("image-{position}.png")
    } else {
        format!("{stem}.png")
    }
}
