use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use serde::{Deserialize, Serialize};
use crate::core::{KvError, Result};

/// Scalar stored under a key by the command layer.
///
/// Deserializes from plain JSON scalars, so `{"a": 1, "b": "x"}` maps onto
/// `Integer` and `Text` without a tag.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Text(String),
}

impl Value {
    /// Parse a command-line token.
    ///
    /// Integers win over finite floats, `true`/`false` (any case) become
    /// booleans, everything else is kept as text. `nan` and `inf` stay text
    /// since JSON has no representation for them.
    pub fn parse(token: &str) -> Result<Self> {
        if token.is_empty() {
            return Err(KvError::InvalidValue("empty value".into()));
        }

        if let Ok(i) = token.parse::<i64>() {
            return Ok(Self::Integer(i));
        }
        if let Ok(f) = token.parse::<f64>()
            && f.is_finite()
        {
            return Ok(Self::Float(f));
        }
        if token.eq_ignore_ascii_case("true") {
            return Ok(Self::Boolean(true));
        }
        if token.eq_ignore_ascii_case("false") {
            return Ok(Self::Boolean(false));
        }

        Ok(Self::Text(token.to_string()))
    }
}

impl FromStr for Value {
    type Err = KvError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// The `i64` a float holds exactly, if any
fn exact_integer(f: f64) -> Option<i64> {
    // 2^63 itself is out of range for i64
    const LIMIT: f64 = 9_223_372_036_854_775_808.0;
    if f.fract() == 0.0 && (-LIMIT..LIMIT).contains(&f) {
        Some(f as i64)
    } else {
        None
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Text(a), Self::Text(b)) => a == b,
            (Self::Boolean(a), Self::Boolean(b)) => a == b,
            // COUNT 1 matches an entry holding 1.0
            (Self::Integer(i), Self::Float(f)) | (Self::Float(f), Self::Integer(i)) => {
                exact_integer(*f) == Some(*i)
            }
            _ => false,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Integer(i), Self::Float(f)) => match exact_integer(*f) {
                Some(j) => i.partial_cmp(&j),
                None => (*i as f64).partial_cmp(f),
            },
            (Self::Float(f), Self::Integer(i)) => match exact_integer(*f) {
                Some(j) => j.partial_cmp(i),
                None => f.partial_cmp(&(*i as f64)),
            },

            (Self::Text(a), Self::Text(b)) => a.partial_cmp(b),
            (Self::Boolean(a), Self::Boolean(b)) => a.partial_cmp(b),

            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(fl) => {
                if fl.is_nan() {
                    write!(f, "NaN")
                } else if fl.is_infinite() {
                    if *fl > 0.0 {
                        write!(f, "Infinity")
                    } else {
                        write!(f, "-Infinity")
                    }
                } else {
                    write!(f, "{}", fl)
                }
            }
            Self::Text(s) => write!(f, "{}", s),
            Self::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Self::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}
