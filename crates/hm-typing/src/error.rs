use itertools::Itertools;
use std::fmt;
use std::result;
use thiserror::Error;

/// A type constructor as it appears in a mismatch report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constructor {
    pub name: String,
    pub arity: usize,
}

impl Constructor {
    pub fn new(name: impl Into<String>, arity: usize) -> Self {
        Self {
            name: name.into(),
            arity,
        }
    }
}

impl fmt::Display for Constructor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypeError {
    #[error("{form}: {message}")]
    Shape { form: String, message: String },
    #[error("unknown symbol '{name}', available are {}", .available.iter().join(", "))]
    UnboundSymbol {
        name: String,
        available: Vec<String>,
    },
    #[error("recursive unification between '{variable}' and '{term}'")]
    OccursCheck { variable: String, term: String },
    #[error("{}", mismatch_message(.left, .right))]
    TypeMismatch {
        left: Constructor,
        right: Constructor,
    },
}

impl TypeError {
    pub fn shape(form: impl Into<String>, message: impl Into<String>) -> Self {
        TypeError::Shape {
            form: form.into(),
            message: message.into(),
        }
    }

    pub fn mismatch(left: Constructor, right: Constructor) -> Self {
        TypeError::TypeMismatch { left, right }
    }
}

fn mismatch_message(left: &Constructor, right: &Constructor) -> String {
    if left.name == right.name {
        format!(
            "type operator arity mismatch for '{}': {} vs {}",
            left.name, left.arity, right.arity
        )
    } else {
        format!("can't unify different types '{}' and '{}'", left, right)
    }
}

pub type Result<T> = result::Result<T, TypeError>;
