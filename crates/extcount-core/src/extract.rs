//! Extension extraction from URL-like strings.

use crate::allowlist::AllowList;

/// Longest accepted extension, dot included.
pub const MAX_EXTENSION_LEN: usize = 9;

/// Returns the trailing `.ext` of `url` (query string excluded) if it is
/// well-formed, without consulting an allow-list. Case is preserved.
///
/// Rejected: no dot, a dot as the final character, more than
/// [`MAX_EXTENSION_LEN`] characters, or any character outside
/// `[A-Za-z0-9._-]`.
pub fn candidate_extension(url: &str) -> Option<&str> {
    let path = match url.find('?') {
        Some(pos) => &url[..pos],
        None => url,
    };
    let dot = path.rfind('.')?;
    let ext = &path[dot..];
    if ext.len() == 1 || ext.len() > MAX_EXTENSION_LEN {
        return None;
    }
    if !ext.bytes().all(is_extension_byte) {
        return None;
    }
    Some(ext)
}

/// Lower-cased extension of `url` if it is well-formed and on the allow-list.
///
/// ```
/// use extcount_core::allowlist::AllowList;
/// use extcount_core::extract::extract_extension;
///
/// let allowed: AllowList = [".jpg", ".png"].into_iter().collect();
/// assert_eq!(extract_extension("a.JPG?x=.png", &allowed).as_deref(), Some(".jpg"));
/// assert_eq!(extract_extension("notes.txt", &allowed), None);
/// ```
pub fn extract_extension(url: &str, allowed: &AllowList) -> Option<String> {
    let ext = candidate_extension(url)?.to_ascii_lowercase();
    allowed.contains(&ext).then_some(ext)
}

fn is_extension_byte(b: u8) -> bool {
    b.is_ascii_alphanumeric() || matches!(b, b'.' | b'-' | b'_')
}
