//! Fact value representation.
//!
//! Values are a tagged union rather than runtime type probing: similarity
//! and drift computations match on the tag.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single scalar observation — text or number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
#[serde(rename_all = "snake_case")]
pub enum Scalar {
    Text(String),
    Number(f64),
}

impl Scalar {
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(_) => None,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Text(s) => write!(f, "{s}"),
            Scalar::Number(n) => write!(f, "{n}"),
        }
    }
}

impl From<&str> for Scalar {
    fn from(s: &str) -> Self {
        Scalar::Text(s.to_string())
    }
}

impl From<f64> for Scalar {
    fn from(n: f64) -> Self {
        Scalar::Number(n)
    }
}

/// The value slot of an evidence record: a scalar or a list of scalars.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
#[serde(rename_all = "snake_case")]
pub enum FactValue {
    Scalar(Scalar),
    List(Vec<Scalar>),
}

impl FactValue {
    pub fn text(s: &str) -> Self {
        FactValue::Scalar(Scalar::Text(s.to_string()))
    }

    pub fn number(n: f64) -> Self {
        FactValue::Scalar(Scalar::Number(n))
    }

    pub fn list<I: IntoIterator<Item = Scalar>>(items: I) -> Self {
        FactValue::List(items.into_iter().collect())
    }

    /// The numeric value, when this is a single number.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FactValue::Scalar(s) => s.as_number(),
            FactValue::List(_) => None,
        }
    }

    pub fn is_numeric(&self) -> bool {
        self.as_number().is_some()
    }
}

impl fmt::Display for FactValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FactValue::Scalar(s) => write!(f, "{s}"),
            FactValue::List(items) => {
                let joined: Vec<String> = items.iter().map(|s| s.to_string()).collect();
                write!(f, "{}", joined.join(", "))
            }
        }
    }
}
