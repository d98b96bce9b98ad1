//! Secret masking for display.
//!
//! Keeps just enough of a secret for an operator to recognise which one was
//! loaded, without ever revealing it.

use crate::core::constants::{EMPTY_PLACEHOLDER, MASK, SHORT_SECRET_CHARS, VISIBLE_CHARS};

/// Mask a secret for display.
///
/// - empty: `[empty]`
/// - up to four characters: `****`, independent of content and length
/// - longer: first two characters, `****`, last two characters
///
/// Lengths are counted in chars, so multi-byte input is never split.
///
/// ```
/// use unseal::core::mask::mask_secret;
///
/// assert_eq!(mask_secret(""), "[empty]");
/// assert_eq!(mask_secret("ab"), "****");
/// assert_eq!(mask_secret("sk_live_51Hx9ABC123xyz"), "sk****yz");
/// ```
pub fn mask_secret(secret: &str) -> String {
    let len = secret.chars().count();
    if len == 0 {
        return EMPTY_PLACEHOLDER.to_string();
    }
    if len <= SHORT_SECRET_CHARS {
        return MASK.to_string();
    }

    let head: String = secret.chars().take(VISIBLE_CHARS).collect();
    let tail: String = secret.chars().skip(len - VISIBLE_CHARS).collect();
    format!("{}{}{}", head, MASK, tail)
}
