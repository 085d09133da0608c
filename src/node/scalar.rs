use std::fmt;

/// A scalar value carried by a text node or an attribute.
///
/// Values are stored as `Option<Scalar>` in the tree, `None` being the absent case.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// A string value.
    Str(String),

    /// An integer value.
    Int(i64),

    /// A floating point value.
    Float(f64),

    /// A boolean value.
    Bool(bool),
}
impl Scalar {
    /// Returns true if the value should be rendered at all.
    ///
    /// Empty strings, `false` and `NaN` count as absent. Every other number, including zero, is present.
    #[must_use]
    pub fn is_something(&self) -> bool {
        match self {
            Self::Str(s) => !s.is_empty(),
            Self::Int(_) => true,
            Self::Float(f) => !f.is_nan(),
            Self::Bool(b) => *b,
        }
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Str(s) => f.write_str(s),
            Self::Int(i) => write!(f, "{i}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Float(v) => {
                if v.is_nan() {
                    f.write_str("NaN")
                } else if v.is_infinite() {
                    f.write_str(if *v > 0.0 { "Infinity" } else { "-Infinity" })
                } else if *v == 0.0 {
                    // Covers -0.0 as well
                    f.write_str("0")
                } else if v.abs() >= 1e21 || v.abs() < 1e-6 {
                    write_exponent(f, *v)
                } else {
                    write!(f, "{v}")
                }
            }
        }
    }
}

/// Writes `1.5e+21` / `1e-7` style exponent notation.
fn write_exponent(f: &mut fmt::Formatter<'_>, v: f64) -> fmt::Result {
    let formatted = format!("{v:e}");
    match formatted.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            write!(f, "{mantissa}e+{exponent}")
        }
        _ => f.write_str(&formatted),
    }
}

impl From<&str> for Scalar {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}
impl From<String> for Scalar {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}
impl From<&String> for Scalar {
    fn from(value: &String) -> Self {
        Self::Str(value.clone())
    }
}
impl From<bool> for Scalar {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}
impl From<f64> for Scalar {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}
impl From<f32> for Scalar {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                fn from(value: $t) -> Self {
                    Self::Int(i64::from(value))
                }
            }
        )*
    };
}
impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Integers outside the `i64` range become floats, losing precision like any script number would.
macro_rules! impl_from_wide_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Scalar {
                #[allow(clippy::cast_precision_loss)]
                fn from(value: $t) -> Self {
                    i64::try_from(value).map_or(Self::Float(value as f64), Self::Int)
                }
            }
        )*
    };
}
impl_from_wide_int!(u64, usize, isize, i128, u128);
