//! Base directory normalization shared by every save path and the options form.

/// Normalizes a user-supplied base directory into a relative fragment.
///
/// - Converts `\` to `/`
/// - Trims surrounding whitespace
/// - Strips a leading drive letter (`C:`, `C:/`, `c:\`)
/// - Strips leading and trailing `/` runs
///
/// The steps repeat until the value stops changing, so the result is safe to
/// join with a filename through a single `/` and normalizing it again is a no-op.
pub fn normalize_base_directory(raw: &str) -> String {
    let mut current = raw.replace('\\', "/");
    loop {
        let next = strip_once(&current);
        if next == current {
            return next;
        }
        current = next;
    }
}

fn strip_once(s: &str) -> String {
    let s = strip_drive_prefix(s.trim());
    s.trim_matches('/').trim().to_string()
}

/// Removes one ASCII letter + `:` + optional `/` from the front of `s`.
fn strip_drive_prefix(s: &str) -> &str {
    let mut chars = s.chars();
    match (chars.next(), chars.next()) {
        (Some(letter), Some(':')) if letter.is_ascii_alphabetic() => {
            let rest = chars.as_str();
            rest.strip_prefix('/').unwrap_or(rest)
        }
        _ => s,
    }
}
