//! Pointer text parsing.

use std::borrow::Cow;

use crate::types::{Pointer, Token, ValueKind};
use crate::util::{is_integer, percent_decode, unescape_component};
use crate::validate::{validate_depth, validate_pointer_text};
use crate::PointerError;

/// Parse pointer text into a [`Pointer`].
///
/// Accepts plain form (`/a/b`) and URI-fragment form (`#/a/b`, percent
/// escapes decoded). The empty string and a bare `#` denote the root
/// pointer. The final segment may carry a `::tag` type constraint.
///
/// # Errors
///
/// - `PointerError::PointerInvalid` - non-empty text without a leading `/`,
///   or a malformed percent escape
/// - `PointerError::InvalidIndex` - an index token evaluating to zero
/// - `PointerError::UnsupportedType` - an unrecognized `::tag`
///
/// # Example
///
/// ```
/// use typed_json_pointer::{parse, Token, ValueKind};
///
/// let p = parse("/users/1/name::string").unwrap();
/// assert_eq!(
///     p.tokens(),
///     &[Token::key("users"), Token::Index(1), Token::key("name")]
/// );
/// assert_eq!(p.kind(), ValueKind::String);
/// ```
pub fn parse(pointer: &str) -> Result<Pointer, PointerError> {
    parse_with(pointer, false)
}

/// Parse with shift-by-one compatibility: incoming integer tokens are
/// incremented before the positivity check, so `/0` yields `Index(1)`.
pub fn parse_shifted(pointer: &str) -> Result<Pointer, PointerError> {
    parse_with(pointer, true)
}

fn parse_with(pointer: &str, shift_index: bool) -> Result<Pointer, PointerError> {
    let decoded: Cow<'_, str> = match pointer.strip_prefix('#') {
        Some(fragment) => Cow::Owned(percent_decode(fragment)?),
        None => Cow::Borrowed(pointer),
    };
    validate_pointer_text(&decoded)?;
    if decoded.is_empty() {
        return Ok(Pointer::root());
    }

    let mut segments: Vec<&str> = decoded[1..].split('/').collect();
    validate_depth(segments.len())?;

    // The type constraint rides on the final segment, split at its last "::".
    let mut kind = ValueKind::Any;
    if let Some(last) = segments.last_mut() {
        let segment = *last;
        if let Some(at) = segment.rfind("::") {
            kind = ValueKind::from_tag(&segment[at + 2..])?;
            *last = &segment[..at];
        }
    }

    let mut tokens = Vec::with_capacity(segments.len());
    for segment in segments {
        tokens.push(classify(segment, shift_index)?);
    }
    Ok(Pointer::from_tokens(tokens).with_kind(kind))
}

/// Classify one segment, first match wins: digits => index, `\` + digits
/// => literal key, contains `~` => unescaped key, otherwise verbatim key.
fn classify(segment: &str, shift_index: bool) -> Result<Token, PointerError> {
    if is_integer(segment) {
        let parsed: usize = segment
            .parse()
            .map_err(|_| PointerError::InvalidIndex(segment.to_string()))?;
        let index = if shift_index {
            parsed
                .checked_add(1)
                .ok_or_else(|| PointerError::InvalidIndex(segment.to_string()))?
        } else {
            parsed
        };
        if index == 0 {
            return Err(PointerError::InvalidIndex(segment.to_string()));
        }
        return Ok(Token::Index(index));
    }
    if let Some(rest) = segment.strip_prefix('\\') {
        if is_integer(rest) {
            return Ok(Token::Key(rest.to_string()));
        }
    }
    Ok(Token::Key(unescape_component(segment)))
}
