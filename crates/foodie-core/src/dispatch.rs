//! WhatsApp deep-link construction.
//!
//! The message is percent-encoded with the `encodeURIComponent` character set,
//! which leaves `*` alone. A second pass then rewrites every `**` bold marker
//! to `%2a`, so the messaging platform receives its own single-`*` bold
//! syntax. The general pass only emits uppercase hex, so a lowercase `%2a` in
//! the output can only come from the second pass and the whole thing stays
//! reversible.

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::DispatchError;

const DISPATCH_BASE_URL: &str = "https://wa.me/";

/// Characters `encodeURIComponent` leaves unescaped besides alphanumerics.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

const BOLD_DELIMITER: &str = "**";
const ENCODED_BOLD_DELIMITER: &str = "%2a";

/// Encode `message` for the `text` query parameter of a dispatch URL.
#[must_use]
pub fn encode_message(message: &str) -> String {
    utf8_percent_encode(message, URI_COMPONENT)
        .to_string()
        .replace(BOLD_DELIMITER, ENCODED_BOLD_DELIMITER)
}

/// Digits of `phone` only; `+`, spaces and dashes are dropped.
#[must_use]
pub fn sanitize_phone(phone: &str) -> String {
    phone.chars().filter(char::is_ascii_digit).collect()
}

/// `https://wa.me/<phone>?text=<encoded message>`.
///
/// Pure; opening the link is left to the caller.
#[must_use]
pub fn build_dispatch_url(message: &str, phone: &str) -> String {
    format!(
        "{DISPATCH_BASE_URL}{}?text={}",
        sanitize_phone(phone),
        encode_message(message)
    )
}

/// Recover the original message from a dispatch URL built by
/// [`build_dispatch_url`].
///
/// # Errors
///
/// Returns [`DispatchError::MissingText`] when the URL has no `text=`
/// parameter and [`DispatchError::InvalidUtf8`] when the decoded bytes are not
/// UTF-8.
pub fn decode_dispatch_message(url: &str) -> Result<String, DispatchError> {
    let (_, encoded) = url
        .split_once("?text=")
        .ok_or_else(|| DispatchError::MissingText {
            url: url.to_string(),
        })?;

    let restored = encoded.replace(ENCODED_BOLD_DELIMITER, BOLD_DELIMITER);
    percent_decode_str(&restored)
        .decode_utf8()
        .map(std::borrow::Cow::into_owned)
        .map_err(|e| DispatchError::InvalidUtf8(e.to_string()))
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn encode_leaves_uri_component_safe_characters() {
        assert_eq!(encode_message("a-b_c.d!e~f*g'h(i)j"), "a-b_c.d!e~f*g'h(i)j");
    }

    #[test]
    fn encode_escapes_spaces_newlines_and_unicode() {
        assert_eq!(encode_message("x 1\n"), "x%201%0A");
        assert_eq!(encode_message("•"), "%E2%80%A2");
        assert_eq!(encode_message("€"), "%E2%82%AC");
    }

    #[test]
    fn encode_rewrites_bold_delimiter_after_general_encoding() {
        assert_eq!(encode_message("**Total**"), "%2aTotal%2a");
        // A lone asterisk survives untouched.
        assert_eq!(encode_message("5 * 2"), "5%20*%202");
        // Three in a row: the leading pair is rewritten, the last stays.
        assert_eq!(encode_message("***"), "%2a*");
    }

    #[test]
    fn sanitize_phone_keeps_digits_only() {
        assert_eq!(sanitize_phone("+353 83 029-7520"), "353830297520");
        assert_eq!(sanitize_phone("353830297520"), "353830297520");
    }

    #[test]
    fn build_dispatch_url_shape() {
        let url = build_dispatch_url("**Order #042**\nHi", "+353830297520");
        assert_eq!(url, "https://wa.me/353830297520?text=%2aOrder%20%23042%2a%0AHi");
    }

    #[test]
    fn decode_round_trips_messages() {
        let messages = [
            "**Pedido #123**\n15 de octubre de 2026, 14:30\n\n• Café x2 - $3.00\n",
            "plain",
            "***bold-ish***",
            "literal %2a and %2A and 100% off",
            "a*b**c***d****",
            "",
        ];
        for message in messages {
            let url = build_dispatch_url(message, "123");
            assert_eq!(
                decode_dispatch_message(&url).unwrap(),
                message,
                "round-trip failed for {message:?} via {url}"
            );
        }
    }

    #[test]
    fn distinct_messages_yield_distinct_urls() {
        let messages = [
            "*", "**", "***", "%2a", "%2A", "* *", "** ", " **", "a", "A", "",
        ];
        let urls: HashSet<String> = messages
            .iter()
            .map(|m| build_dispatch_url(m, "123"))
            .collect();
        assert_eq!(urls.len(), messages.len());
    }

    #[test]
    fn decode_without_text_parameter_fails() {
        let err = decode_dispatch_message("https://wa.me/123").unwrap_err();
        assert!(matches!(err, DispatchError::MissingText { .. }));
    }

    #[test]
    fn decode_invalid_utf8_fails() {
        let err = decode_dispatch_message("https://wa.me/1?text=%FF").unwrap_err();
        assert!(matches!(err, DispatchError::InvalidUtf8(_)));
    }
}
