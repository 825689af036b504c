//! Charset name checks and lookup.
//!
//! Names are resolved against the WHATWG encoding registry as implemented by
//! [`encoding_rs`], which accepts every label in the Encoding Standard
//! (`utf-8`, `utf8`, `latin1`, `shift_jis`, ...), case-insensitively.

use encoding_rs::Encoding;

use crate::error::CharsetError;

/// Returns `true` if `name` is a structurally legal charset name: it starts
/// with an ASCII letter or digit and contains only letters, digits, and the
/// characters `-`, `+`, `:`, `_`, and `.`.
///
/// # Example
///
/// ```rust
/// use media_type::charset::is_legal_name;
///
/// assert!(is_legal_name("utf-8"));
/// assert!(is_legal_name("utf-wtf"));
/// assert!(!is_legal_name("!@#$%^&*()"));
/// assert!(!is_legal_name(""));
/// ```
pub fn is_legal_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphanumeric() => {
            chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '+' | ':' | '_' | '.'))
        }
        _ => false
    }
}

/// Resolves `name` to a supported encoding.
///
/// Fails with [`CharsetError::IllegalName`] if `name` isn't a legal charset
/// name and with [`CharsetError::Unsupported`] if it is legal but unknown.
///
/// Names are looked up in the WHATWG Encoding Standard registry, which maps
/// some labels differently from their IANA meaning: `us-ascii` and
/// `iso-8859-1` resolve to windows-1252, and `utf-16` resolves to UTF-16LE
/// rather than a byte-order-mark sniffing UTF-16.
///
/// # Example
///
/// ```rust
/// use media_type::charset;
/// use media_type::error::CharsetError;
///
/// assert_eq!(charset::resolve("UTF-8"), Ok(encoding_rs::UTF_8));
/// assert!(matches!(charset::resolve("utf-wtf"), Err(CharsetError::Unsupported(_))));
/// ```
pub fn resolve(name: &str) -> Result<&'static Encoding, CharsetError> {
    if !is_legal_name(name) {
        return Err(CharsetError::IllegalName(name.to_string()));
    }

    Encoding::for_label(name.as_bytes())
        .ok_or_else(|| CharsetError::Unsupported(name.to_string()))
}

#[cfg(test)]
mod test {
    use super::{is_legal_name, resolve};
    use crate::error::CharsetError;

    #[test]
    fn legal_names() {
        for name in &["utf-8", "UTF-16", "iso-8859-1", "x-user:defined", "a_b.c+d", "8bit"] {
            assert!(is_legal_name(name), "{:?} should be legal", name);
        }

        for name in &["", "-utf8", ".x", "utf 8", "utf/8", "\"utf-8\"", "ütf-8"] {
            assert!(!is_legal_name(name), "{:?} should be illegal", name);
        }
    }

    #[test]
    fn resolves_known_labels() {
        assert_eq!(resolve("utf-8"), Ok(encoding_rs::UTF_8));
        assert_eq!(resolve("utf8"), Ok(encoding_rs::UTF_8));
        assert_eq!(resolve("utf-16"), Ok(encoding_rs::UTF_16LE));
        assert_eq!(resolve("utf-16be"), Ok(encoding_rs::UTF_16BE));
        assert_eq!(resolve("latin1"), Ok(encoding_rs::WINDOWS_1252));
        assert_eq!(resolve("shift_jis"), Ok(encoding_rs::SHIFT_JIS));
    }

    #[test]
    fn uses_whatwg_label_mapping() {
        assert_eq!(resolve("us-ascii"), Ok(encoding_rs::WINDOWS_1252));
        assert_eq!(resolve("US-ASCII"), Ok(encoding_rs::WINDOWS_1252));
        assert_eq!(resolve("iso-8859-1"), Ok(encoding_rs::WINDOWS_1252));
        assert_eq!(resolve("utf-16"), Ok(encoding_rs::UTF_16LE));
    }

    #[test]
    fn reports_bad_names() {
        assert_eq!(resolve("!@#$%^&*()"), Err(CharsetError::IllegalName("!@#$%^&*()".into())));
        assert_eq!(resolve("utf-wtf"), Err(CharsetError::Unsupported("utf-wtf".into())));
    }
}
