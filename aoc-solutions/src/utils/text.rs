//! Line and substring helpers

use anyhow::anyhow;

/// Every start position of `needle` in `haystack`, overlapping matches included
///
/// After a match at `p` the search resumes at the next character after `p`,
/// so `"oneight"` contains both `"one"` (at 0) and `"eight"` (at 2).
/// An empty needle matches nowhere.
pub fn find_all_overlapping<'a>(
    haystack: &'a str,
    needle: &'a str,
) -> impl Iterator<Item = usize> + 'a {
    let mut from = 0;
    std::iter::from_fn(move || {
        if needle.is_empty() {
            return None;
        }
        let pos = from + haystack.get(from..)?.find(needle)?;
        let step = haystack[pos..].chars().next().map_or(1, char::len_utf8);
        from = pos + step;
        Some(pos)
    })
}

/// Apply `f` to every line, prefixing any error with its 1-based line number
///
/// Stops at the first failing line.
pub fn map_lines<'a, T, F>(lines: impl IntoIterator<Item = &'a str>, mut f: F) -> anyhow::Result<Vec<T>>
where
    F: FnMut(&'a str) -> anyhow::Result<T>,
{
    lines
        .into_iter()
        .enumerate()
        .map(|(line_idx, line)| f(line).map_err(|e| anyhow!("(line {}) {}", line_idx + 1, e)))
        .collect()
}
