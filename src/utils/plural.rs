//! Pluralization utilities.

/// Return "s" suffix for plural counts
///
/// # Examples
///
/// - `plural_s(0)` -> `"s"` (0 links)
/// - `plural_s(1)` -> `""` (1 link)
/// - `plural_s(5)` -> `"s"` (5 links)
#[inline]
pub fn plural_s(n: usize) -> &'static str {
    if n == 1 { "" } else { "s" }
}
