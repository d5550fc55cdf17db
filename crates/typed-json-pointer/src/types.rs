//! Core types: path tokens, the pointer itself, and the type constraint.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::str::FromStr;

use serde_json::{Map, Value};

use crate::util::{escape_component, is_integer};
use crate::PointerError;

/// One step of a pointer path.
///
/// A step is either an object member name or a 1-based array position.
/// A segment that textually looks like an integer but carries the `\`
/// literal escape parses as a [`Token::Key`], never as an index.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// An object member name, after un-escaping.
    Key(String),
    /// A 1-based array position. Always >= 1.
    Index(usize),
}

impl Token {
    /// Build a key token.
    pub fn key(name: impl Into<String>) -> Self {
        Token::Key(name.into())
    }

    /// The member name, if this is a key token.
    pub fn as_key(&self) -> Option<&str> {
        match self {
            Token::Key(key) => Some(key),
            Token::Index(_) => None,
        }
    }

    /// The 1-based position, if this is an index token.
    pub fn as_index(&self) -> Option<usize> {
        match self {
            Token::Key(_) => None,
            Token::Index(index) => Some(*index),
        }
    }
}

impl fmt::Display for Token {
    /// Renders the token as one escaped pointer segment.
    ///
    /// Digit-only keys get the `\` literal prefix so they survive a
    /// parse round-trip as keys rather than indices.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Key(key) if is_integer(key) => write!(f, "\\{key}"),
            Token::Key(key) => f.write_str(&escape_component(key)),
            Token::Index(index) => write!(f, "{index}"),
        }
    }
}

/// The closed set of type-constraint tags a pointer can carry.
///
/// `Any` is the absent constraint; it never appears in pointer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValueKind {
    #[default]
    Any,
    String,
    Number,
    Object,
    Array,
    Boolean,
    Null,
}

impl ValueKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Any => "any",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
        }
    }

    /// Resolve a `::tag` suffix. Only the six JSON kinds are recognized.
    pub fn from_tag(tag: &str) -> Result<Self, PointerError> {
        match tag {
            "string" => Ok(ValueKind::String),
            "number" => Ok(ValueKind::Number),
            "object" => Ok(ValueKind::Object),
            "array" => Ok(ValueKind::Array),
            "boolean" => Ok(ValueKind::Boolean),
            "null" => Ok(ValueKind::Null),
            _ => Err(PointerError::UnsupportedType(tag.to_string())),
        }
    }

    /// Does `value`'s runtime kind satisfy this constraint?
    pub fn matches(&self, value: &Value) -> bool {
        match self {
            ValueKind::Any => true,
            ValueKind::String => value.is_string(),
            ValueKind::Number => value.is_number(),
            ValueKind::Object => value.is_object(),
            ValueKind::Array => value.is_array(),
            ValueKind::Boolean => value.is_boolean(),
            ValueKind::Null => value.is_null(),
        }
    }

    /// The default substituted on write when the caller supplies an
    /// absent value.
    pub fn null_value(&self) -> Value {
        match self {
            ValueKind::String => Value::String(String::new()),
            ValueKind::Number => Value::Number(0.into()),
            ValueKind::Object => Value::Object(Map::new()),
            ValueKind::Array => Value::Array(Vec::new()),
            ValueKind::Boolean => Value::Bool(false),
            ValueKind::Null | ValueKind::Any => Value::Null,
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A parsed, immutable pointer: an ordered token sequence plus an
/// optional type constraint on the final token.
///
/// Equality and hashing cover the token sequence only; two pointers with
/// the same path but different constraints compare equal.
///
/// # Example
///
/// ```
/// use typed_json_pointer::{parse, Pointer, Token, ValueKind};
///
/// let p = parse("/foo/2/bar::number").unwrap();
/// assert_eq!(
///     p.tokens(),
///     &[Token::key("foo"), Token::Index(2), Token::key("bar")]
/// );
/// assert_eq!(p.kind(), ValueKind::Number);
/// assert_eq!(p.to_string(), "/foo/2/bar::number");
/// ```
#[derive(Debug, Clone)]
pub struct Pointer {
    tokens: Vec<Token>,
    kind: ValueKind,
}

impl Pointer {
    /// The distinguished root pointer: no tokens, unconstrained.
    pub fn root() -> Self {
        Pointer {
            tokens: Vec::new(),
            kind: ValueKind::Any,
        }
    }

    /// Build a pointer programmatically from tokens, unconstrained.
    ///
    /// Index tokens are expected to honor the 1-based invariant; an
    /// `Index(0)` smuggled in here never resolves on read and is
    /// rejected by the write path.
    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Pointer {
            tokens,
            kind: ValueKind::Any,
        }
    }

    /// Attach a type constraint.
    pub fn with_kind(mut self, kind: ValueKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn kind(&self) -> ValueKind {
        self.kind
    }

    /// A root pointer denotes the whole tree and always exists.
    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    /// The pointer with the final token removed. `None` for the root.
    ///
    /// The constraint belongs to the final token and is not inherited.
    pub fn parent(&self) -> Option<Pointer> {
        if self.tokens.is_empty() {
            return None;
        }
        Some(Pointer::from_tokens(
            self.tokens[..self.tokens.len() - 1].to_vec(),
        ))
    }

    /// Is `self` strictly below `parent` in the tree?
    pub fn is_child_of(&self, parent: &Pointer) -> bool {
        parent.tokens.len() < self.tokens.len()
            && self.tokens[..parent.tokens.len()] == parent.tokens[..]
    }
}

impl PartialEq for Pointer {
    fn eq(&self, other: &Self) -> bool {
        self.tokens == other.tokens
    }
}

impl Eq for Pointer {}

impl Hash for Pointer {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.tokens.hash(state);
    }
}

impl fmt::Display for Pointer {
    /// Formats back to pointer text: `""` for the root, otherwise
    /// `/`-joined escaped segments with the `::tag` suffix when a
    /// constraint is present.
    ///
    /// One dialect ambiguity: a programmatic final key containing `::`
    /// has no faithful text form when the pointer is unconstrained --
    /// its rendering re-parses as a type tag. With a constraint present
    /// the trailing tag disambiguates and the round-trip holds.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for token in &self.tokens {
            write!(f, "/{token}")?;
        }
        if !self.tokens.is_empty() && self.kind != ValueKind::Any {
            write!(f, "::{}", self.kind)?;
        }
        Ok(())
    }
}

impl FromStr for Pointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}
