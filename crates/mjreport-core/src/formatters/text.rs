/// `"  1. a"`, `"  2. b"`, ... for each item in order.
pub fn numbered_lines<S: AsRef<str>>(items: &[S]) -> Vec<String> {
    items
        .iter()
        .enumerate()
        .map(|(i, item)| format!("  {}. {}", i + 1, item.as_ref()))
        .collect()
}

pub fn dimensions(width: &str, height: &str) -> String {
    format!("{}x{}", width, height)
}

/// Keep the first `max_chars` characters and append `...`.
///
/// The suffix is written even when `text` already fits.
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    let head: String = text.chars().take(max_chars).collect();
    format!("{}...", head)
}
