use crate::command::mention::Mention;
use serde::Serialize;

/// A parsed argument value
///
/// Any parser whose output converts into a `Value` can back a command
/// argument. There is deliberately no conversion from `Option`: optional
/// arguments are declared with [`optional`](crate::optional::optional) and an
/// absent one becomes [`Value::Null`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Str(String),
    Int(i64),
    Nat(u64),
    Char(char),
    Mention(Mention),
    List(Vec<Value>),
}

impl Value {
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(text) => Some(text),
            _ => None,
        }
    }

    /// Signed view of a numeric value
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Int(value) => Some(value),
            Value::Nat(value) => i64::try_from(value).ok(),
            _ => None,
        }
    }

    pub fn as_nat(&self) -> Option<u64> {
        match *self {
            Value::Nat(value) => Some(value),
            Value::Int(value) => u64::try_from(value).ok(),
            _ => None,
        }
    }

    pub fn as_mention(&self) -> Option<Mention> {
        match *self {
            Value::Mention(mention) => Some(mention),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(values) => Some(values),
            _ => None,
        }
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<char> for Value {
    fn from(value: char) -> Self {
        Value::Char(value)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<u64> for Value {
    fn from(value: u64) -> Self {
        Value::Nat(value)
    }
}

impl From<Mention> for Value {
    fn from(value: Mention) -> Self {
        Value::Mention(value)
    }
}

impl<T> From<Vec<T>> for Value
where
    T: Into<Value>,
{
    fn from(values: Vec<T>) -> Self {
        Value::List(values.into_iter().map(Into::into).collect())
    }
}
