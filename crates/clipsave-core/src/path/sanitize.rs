//! Filesystem-safe filename sanitization.

/// Characters rejected by common filesystems (Windows being the strictest).
pub const RESERVED_CHARS: &[char] = &['\\', '/', ':', '*', '?', '"', '<', '>', '|'];

/// Longest filename most filesystems accept, in bytes.
const NAME_MAX: usize = 255;

/// Extensions longer than this are treated as part of the stem when capping.
const MAX_KEPT_EXTENSION: usize = 32;

/// Replaces every reserved (and control) character with `_`.
///
/// Whitespace is left alone; callers decide whether to trim.
pub fn replace_reserved_chars(name: &str) -> String {
    name.chars()
        .map(|c| if RESERVED_CHARS.contains(&c) || c.is_control() { '_' } else { c })
        .collect()
}

/// Caps `name` at 255 bytes, shortening the stem so a short extension survives.
pub fn cap_name_length(name: &str) -> String {
    if name.len() <= NAME_MAX {
        return name.to_string();
    }
    match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() && !ext.is_empty() && ext.len() <= MAX_KEPT_EXTENSION => {
            let stem = truncate_on_char_boundary(stem, NAME_MAX - ext.len() - 1);
            format!("{stem}.{ext}")
        }
        _ => truncate_on_char_boundary(name, NAME_MAX).to_string(),
    }
}

fn truncate_on_char_boundary(s: &str, max: usize) -> &str {
    if s.len() <= max {
        return s;
    }
    let mut take = max;
    while take > 0 && !s.is_char_boundary(take) {
        take -= 1;
    }
    &s[..take]
}
