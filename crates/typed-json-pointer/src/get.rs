//! Read-side navigation: `exists`, `read`, `get`.

use serde_json::Value;

use crate::types::{Pointer, Token};
use crate::PointerError;

/// Check whether `pointer` resolves inside `doc`. Never errors.
///
/// The root pointer always exists. Any token/container disagreement
/// short-circuits to `false`.
///
/// # Example
///
/// ```
/// use typed_json_pointer::{exists, parse};
/// use serde_json::json;
///
/// let doc = json!({"a": [10, 20]});
/// assert!(exists(&doc, &parse("/a/2").unwrap()));
/// assert!(!exists(&doc, &parse("/a/3").unwrap()));
/// assert!(!exists(&doc, &parse("/a/b").unwrap()));
/// ```
pub fn exists(doc: &Value, pointer: &Pointer) -> bool {
    let mut current = doc;
    for token in pointer.tokens() {
        current = match (current, token) {
            (Value::Object(map), Token::Key(key)) => match map.get(key) {
                Some(value) => value,
                None => return false,
            },
            (Value::Array(arr), Token::Index(index)) => {
                match index.checked_sub(1).and_then(|at| arr.get(at)) {
                    Some(value) => value,
                    None => return false,
                }
            }
            _ => return false,
        };
    }
    true
}

/// Resolve `pointer` inside `doc`, failing on the first token that cannot
/// be applied.
///
/// The root pointer returns `doc` itself. Errors carry the offending
/// token and a clone of the container it could not be applied to.
///
/// # Errors
///
/// - `PointerError::NotFound` - key absent from an object
/// - `PointerError::OutOfBounds` - index past the end of an array
/// - `PointerError::Mismatch` - token kind against the wrong container
///   kind, or a scalar where a container is needed
pub fn read<'a>(doc: &'a Value, pointer: &Pointer) -> Result<&'a Value, PointerError> {
    let mut current = doc;
    for token in pointer.tokens() {
        current = match (current, token) {
            (Value::Object(map), Token::Key(key)) => match map.get(key) {
                Some(value) => value,
                None => {
                    return Err(PointerError::NotFound {
                        token: token.clone(),
                        container: current.clone(),
                    })
                }
            },
            (Value::Array(arr), Token::Index(index)) => {
                // Parse guarantees index >= 1, but programmatic pointers
                // can hold Index(0); it never addresses a slot.
                match index.checked_sub(1) {
                    Some(at) if at < arr.len() => &arr[at],
                    Some(_) => {
                        return Err(PointerError::OutOfBounds {
                            index: *index,
                            len: arr.len(),
                        })
                    }
                    None => {
                        return Err(PointerError::Mismatch {
                            token: token.clone(),
                            container: current.clone(),
                        })
                    }
                }
            }
            _ => {
                return Err(PointerError::Mismatch {
                    token: token.clone(),
                    container: current.clone(),
                })
            }
        };
    }
    Ok(current)
}

/// [`read`] with a fallback: returns `default` when the pointer does not
/// resolve. Never errors.
///
/// # Example
///
/// ```
/// use typed_json_pointer::{get, parse};
/// use serde_json::json;
///
/// let doc = json!({"a": 1});
/// let fallback = json!(10000);
/// assert_eq!(get(&doc, &parse("/a").unwrap(), &fallback), &json!(1));
/// assert_eq!(get(&doc, &parse("/missing/path").unwrap(), &fallback), &fallback);
/// ```
pub fn get<'a>(doc: &'a Value, pointer: &Pointer, default: &'a Value) -> &'a Value {
    match read(doc, pointer) {
        Ok(value) => value,
        Err(_) => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use serde_json::json;

    #[test]
    fn test_root_identity() {
        let docs = [json!(123), json!("x"), json!({"a": 1}), json!([1, 2])];
        let root = parse("").unwrap();
        for doc in docs {
            assert!(exists(&doc, &root));
            assert_eq!(read(&doc, &root).unwrap(), &doc);
        }
    }

    #[test]
    fn test_exists() {
        let doc = json!({"foo": {"bar": [10, null]}});
        assert!(exists(&doc, &parse("/foo").unwrap()));
        assert!(exists(&doc, &parse("/foo/bar/1").unwrap()));
        assert!(exists(&doc, &parse("/foo/bar/2").unwrap())); // explicit null exists
        assert!(!exists(&doc, &parse("/foo/bar/3").unwrap()));
        assert!(!exists(&doc, &parse("/foo/baz").unwrap()));
        // Wrong token kind for the container short-circuits.
        assert!(!exists(&doc, &parse("/foo/1").unwrap()));
        assert!(!exists(&doc, &parse("/foo/bar/key").unwrap()));
        // Scalar container
        assert!(!exists(&doc, &parse("/foo/bar/1/deeper").unwrap()));
    }

    #[test]
    fn test_read_nested() {
        let doc = json!({"a": {"b": [1, 2, 3]}});
        assert_eq!(read(&doc, &parse("/a/b/2").unwrap()).unwrap(), &json!(2));
    }

    #[test]
    fn test_read_one_based_scenario() {
        let doc = json!([[10, 20, 30, ["me"]]]);
        assert_eq!(read(&doc, &parse("/1/4/1").unwrap()).unwrap(), &json!("me"));
    }

    #[test]
    fn test_read_missing_key() {
        let doc = json!({"a": 1});
        let err = read(&doc, &parse("/b").unwrap()).unwrap_err();
        match err {
            PointerError::NotFound { token, container } => {
                assert_eq!(token, Token::key("b"));
                assert_eq!(container, doc);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_read_out_of_bounds() {
        let doc = json!([1, 2]);
        let err = read(&doc, &parse("/3").unwrap()).unwrap_err();
        assert_eq!(err, PointerError::OutOfBounds { index: 3, len: 2 });
    }

    #[test]
    fn test_read_kind_mismatch() {
        let doc = json!({"a": [1, 2]});
        // Key token against an array.
        assert!(matches!(
            read(&doc, &parse("/a/x").unwrap()),
            Err(PointerError::Mismatch { .. })
        ));
        // Index token against an object.
        assert!(matches!(
            read(&doc, &parse("/1").unwrap()),
            Err(PointerError::Mismatch { .. })
        ));
        // Descent into a scalar.
        assert!(matches!(
            read(&doc, &parse("/a/1/deep").unwrap()),
            Err(PointerError::Mismatch { .. })
        ));
    }

    #[test]
    fn test_get_default() {
        let doc = json!({"a": 1});
        let fallback = json!(10000);
        assert_eq!(
            get(&doc, &parse("/missing/path").unwrap(), &fallback),
            &fallback
        );
        assert_eq!(get(&doc, &parse("/a").unwrap(), &fallback), &json!(1));
        assert_eq!(get(&doc, &parse("").unwrap(), &fallback), &doc);
    }

    #[test]
    fn test_zero_index_token_never_resolves() {
        // Pointer::from_tokens bypasses the parse-time positivity check.
        let doc = json!([1, 2]);
        let p = Pointer::from_tokens(vec![Token::Index(0)]);
        assert!(!exists(&doc, &p));
        assert!(matches!(
            read(&doc, &p),
            Err(PointerError::Mismatch { token: Token::Index(0), .. })
        ));

        let doc = json!({"a": [1]});
        let p = Pointer::from_tokens(vec![Token::key("a"), Token::Index(0)]);
        assert!(!exists(&doc, &p));
        assert!(read(&doc, &p).is_err());
    }

    #[test]
    fn test_read_empty_string_key() {
        let doc = json!({"": {"x": 7}});
        assert_eq!(read(&doc, &parse("//x").unwrap()).unwrap(), &json!(7));
    }
}
