//! Write-side navigation: autovivifying `write` and construction sugar.

use serde_json::{Map, Value};

use crate::types::{Pointer, Token, ValueKind};
use crate::PointerError;

/// Write `value` at `pointer` inside `doc`, creating missing intermediate
/// containers on demand.
///
/// Arrays grow by appending `null` slots until the target index is in
/// range; growth never moves existing elements. A `null` slot on the way
/// down is materialized as an empty array when the next token is an index
/// and an empty object when it is a key. A caller-supplied `Value::Null`
/// means "absent" and is replaced by the constraint's null value. The
/// root pointer replaces the whole tree.
///
/// No rollback on failure: a failed deep write may leave containers that
/// were created before the error.
///
/// # Errors
///
/// - `PointerError::InvalidTarget` - key token against an array, index
///   token against an object, or descent into a scalar
/// - `PointerError::TypeMismatch` - the value conflicts with the
///   pointer's type constraint and cannot be coerced
///
/// # Example
///
/// ```
/// use typed_json_pointer::{parse, write};
/// use serde_json::json;
///
/// let mut doc = json!({});
/// write(&mut doc, &parse("/a/1/b").unwrap(), json!(1)).unwrap();
/// write(&mut doc, &parse("/a/2/b").unwrap(), json!(2)).unwrap();
/// assert_eq!(doc, json!({"a": [{"b": 1}, {"b": 2}]}));
/// ```
pub fn write(doc: &mut Value, pointer: &Pointer, value: Value) -> Result<(), PointerError> {
    let value = convert(pointer, value)?;
    if pointer.is_root() {
        *doc = value;
        return Ok(());
    }
    let tokens = pointer.tokens();
    let last = tokens.len() - 1;
    let mut current: &mut Value = doc;
    for (depth, token) in tokens[..last].iter().enumerate() {
        current = descend(current, token, &tokens[depth + 1])?;
    }
    assign(current, &tokens[last], value)
}

/// Build a document from `(pointer, value)` pairs, starting from an empty
/// object and applying [`write`] in order. Later pairs can overwrite or
/// extend structure created by earlier ones.
///
/// # Example
///
/// ```
/// use typed_json_pointer::{build_object, parse};
/// use serde_json::json;
///
/// let doc = build_object([
///     (parse("/name").unwrap(), json!("ana")),
///     (parse("/tags/1").unwrap(), json!("admin")),
/// ]).unwrap();
/// assert_eq!(doc, json!({"name": "ana", "tags": ["admin"]}));
/// ```
pub fn build_object<I>(pairs: I) -> Result<Value, PointerError>
where
    I: IntoIterator<Item = (Pointer, Value)>,
{
    let mut doc = Value::Object(Map::new());
    for (pointer, value) in pairs {
        write(&mut doc, &pointer, value)?;
    }
    Ok(doc)
}

/// One interior step: apply `token` to `current`, materializing the slot
/// as a container chosen by `next` when it holds `null`.
fn descend<'a>(
    current: &'a mut Value,
    token: &Token,
    next: &Token,
) -> Result<&'a mut Value, PointerError> {
    match (current, token) {
        (Value::Object(map), Token::Key(key)) => {
            let slot = map.entry(key.clone()).or_insert(Value::Null);
            if slot.is_null() {
                *slot = empty_container(next);
            }
            Ok(slot)
        }
        (Value::Array(arr), Token::Index(index)) => {
            let at = match index.checked_sub(1) {
                Some(at) => at,
                None => {
                    return Err(PointerError::InvalidTarget {
                        token: token.clone(),
                        container: Value::Array(arr.clone()),
                    })
                }
            };
            grow(arr, *index);
            let slot = &mut arr[at];
            if slot.is_null() {
                *slot = empty_container(next);
            }
            Ok(slot)
        }
        (other, token) => Err(PointerError::InvalidTarget {
            token: token.clone(),
            container: other.clone(),
        }),
    }
}

/// Final step: place `value` under `token` in `current`.
fn assign(current: &mut Value, token: &Token, value: Value) -> Result<(), PointerError> {
    match (current, token) {
        (Value::Object(map), Token::Key(key)) => {
            map.insert(key.clone(), value);
            Ok(())
        }
        (Value::Array(arr), Token::Index(index)) => {
            let at = match index.checked_sub(1) {
                Some(at) => at,
                None => {
                    return Err(PointerError::InvalidTarget {
                        token: token.clone(),
                        container: Value::Array(arr.clone()),
                    })
                }
            };
            grow(arr, *index);
            arr[at] = value;
            Ok(())
        }
        (other, token) => Err(PointerError::InvalidTarget {
            token: token.clone(),
            container: other.clone(),
        }),
    }
}

/// Append `null` slots until `index` is in range. Never truncates, never
/// inserts in the middle.
fn grow(arr: &mut Vec<Value>, index: usize) {
    while arr.len() < index {
        arr.push(Value::Null);
    }
}

fn empty_container(next: &Token) -> Value {
    match next {
        Token::Key(_) => Value::Object(Map::new()),
        Token::Index(_) => Value::Array(Vec::new()),
    }
}

/// Apply the pointer's type constraint to a caller-supplied value:
/// `null` becomes the constraint's null value, matching kinds pass
/// through, and the narrow coercions (string to number when it parses,
/// number/boolean to string) are attempted before rejecting.
fn convert(pointer: &Pointer, value: Value) -> Result<Value, PointerError> {
    let kind = pointer.kind();
    if value.is_null() {
        return Ok(kind.null_value());
    }
    if kind.matches(&value) {
        return Ok(value);
    }
    match (kind, &value) {
        (ValueKind::Number, Value::String(text)) => {
            if let Some(number) = parse_number(text) {
                return Ok(Value::Number(number));
            }
        }
        (ValueKind::String, Value::Number(number)) => {
            return Ok(Value::String(number.to_string()));
        }
        (ValueKind::String, Value::Bool(flag)) => {
            return Ok(Value::String(flag.to_string()));
        }
        _ => {}
    }
    Err(PointerError::TypeMismatch {
        expected: kind,
        value,
        pointer: pointer.clone(),
    })
}

fn parse_number(text: &str) -> Option<serde_json::Number> {
    if let Ok(n) = text.parse::<i64>() {
        return Some(n.into());
    }
    if let Ok(n) = text.parse::<u64>() {
        return Some(n.into());
    }
    text.parse::<f64>().ok().and_then(serde_json::Number::from_f64)
}
