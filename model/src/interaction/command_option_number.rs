use serde::{Deserialize, Serialize};
use std::fmt;

/// A numeric option value. Integers and floats are kept apart so that re-encoding an integer
/// never produces a trailing `.0`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(untagged)]
pub enum CommandOptionNumber {
    Integer(i64),
    Float(f64),
}

impl CommandOptionNumber {
    pub fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(i) => *i as f64,
            Self::Float(f) => *f,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Integer(i) => Some(*i),
            Self::Float(_) => None,
        }
    }
}

impl From<i64> for CommandOptionNumber {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for CommandOptionNumber {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl fmt::Display for CommandOptionNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(i) => write!(f, "{}", i),
            Self::Float(x) => write!(f, "{}", x),
        }
    }
}
