//! Text formatting and parsing of vectors, points and quaternions.
//!
//! Every type is displayed as its components in parentheses, for example
//! `(1, -2.5, 3)`. Quaternions separate the real part with a semicolon, as in
//! `(w; x, y, z)`. Formatting options like precision are applied to each
//! component.
//!
//! Parsing accepts the displayed form, and more generally components
//! separated by commas and/or whitespace, optionally enclosed in parentheses
//! or brackets.

use crate::{
    point::{IPoint2, IPoint3, UPoint2},
    quaternion::Quaternion,
    vector::{Vector2, Vector3, Vector4},
};
use std::{
    fmt,
    num::{ParseFloatError, ParseIntError},
    str::FromStr,
};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("No components to parse")]
    Empty,

    #[error("Expected {expected} components but found {found}")]
    WrongComponentCount { expected: usize, found: usize },

    #[error("Invalid floating point component {token:?}")]
    InvalidFloat {
        token: String,
        source: ParseFloatError,
    },

    #[error("Invalid integer component {token:?}")]
    InvalidInteger { token: String, source: ParseIntError },
}

/// A scalar type that components can be parsed into.
trait Component: FromStr + Copy {
    fn parse_token(token: &str) -> Result<Self, ParseError>;
}

impl Component for f32 {
    fn parse_token(token: &str) -> Result<Self, ParseError> {
        token.parse().map_err(|source| ParseError::InvalidFloat {
            token: token.to_string(),
            source,
        })
    }
}

impl Component for i32 {
    fn parse_token(token: &str) -> Result<Self, ParseError> {
        token.parse().map_err(|source| ParseError::InvalidInteger {
            token: token.to_string(),
            source,
        })
    }
}

impl Component for u32 {
    fn parse_token(token: &str) -> Result<Self, ParseError> {
        token.parse().map_err(|source| ParseError::InvalidInteger {
            token: token.to_string(),
            source,
        })
    }
}

macro_rules! impl_text_format {
    ($t:ty, $scalar:ty, $n:literal) => {
        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("(")?;
                write_components(f, &self.to_array())?;
                f.write_str(")")
            }
        }

        impl FromStr for $t {
            type Err = ParseError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_components::<$scalar, $n>(s).map(Self::from)
            }
        }
    };
}

impl_text_format!(Vector2, f32, 2);
impl_text_format!(Vector3, f32, 3);
impl_text_format!(Vector4, f32, 4);
impl_text_format!(UPoint2, u32, 2);
impl_text_format!(IPoint2, i32, 2);
impl_text_format!(IPoint3, i32, 3);

impl fmt::Display for Quaternion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("(")?;
        fmt::Display::fmt(&self.w(), f)?;
        f.write_str("; ")?;
        write_components(f, &[self.x(), self.y(), self.z()])?;
        f.write_str(")")
    }
}

impl FromStr for Quaternion {
    type Err = ParseError;

    /// Parses the components in the order `w, x, y, z`. The real part may be
    /// separated from the imaginary parts by a semicolon.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let [w, x, y, z] = parse_components::<f32, 4>(&s.replacen(';', ",", 1))?;
        Ok(Self::from_xyzw(x, y, z, w))
    }
}

fn write_components<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    components: &[T],
) -> fmt::Result {
    for (idx, component) in components.iter().enumerate() {
        if idx > 0 {
            f.write_str(", ")?;
        }
        fmt::Display::fmt(component, f)?;
    }
    Ok(())
}

fn strip_enclosing(s: &str) -> &str {
    for (open, close) in [('(', ')'), ('[', ']')] {
        if let Some(inner) = s.strip_prefix(open).and_then(|s| s.strip_suffix(close)) {
            return inner;
        }
    }
    s
}

fn parse_components<T: Component, const N: usize>(s: &str) -> Result<[T; N], ParseError> {
    let tokens: Vec<&str> = strip_enclosing(s.trim())
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .collect();

    if tokens.is_empty() {
        return Err(ParseError::Empty);
    }
    if tokens.len() != N {
        return Err(ParseError::WrongComponentCount {
            expected: N,
            found: tokens.len(),
        });
    }

    let components = tokens
        .into_iter()
        .map(T::parse_token)
        .collect::<Result<Vec<_>, _>>()?;

    <[T; N]>::try_from(components).map_err(|components| ParseError::WrongComponentCount {
        expected: N,
        found: components.len(),
    })
}
