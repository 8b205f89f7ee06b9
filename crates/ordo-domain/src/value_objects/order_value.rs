//! Comparable order value

use std::cmp::Ordering;
use std::fmt;

/// 2^127 as a float; the smallest magnitude outside the `i128` range
const I128_LIMIT: f64 = 170_141_183_460_469_231_731_687_303_715_884_105_728.0;

/// A totally ordered value used to sort providers of the same service
///
/// Numbers compare by magnitude: integers against integers, floats with
/// [`f64::total_cmp`], and integers against floats exactly (no rounding
/// through `f64`). An integer and a float of equal magnitude order the
/// integer first. Text compares lexically and sequences element by element.
/// Values of different kinds order by kind: numbers, then text, then
/// sequences.
#[derive(Debug, Clone)]
pub enum OrderValue {
    /// Integer key, wide enough for every primitive integer up to `u64`
    Int(i128),
    /// Floating point key
    Float(f64),
    /// Lexically ordered key
    Text(String),
    /// Composite key compared element by element
    Seq(Vec<OrderValue>),
}

impl OrderValue {
    fn rank(&self) -> u8 {
        match self {
            Self::Int(_) | Self::Float(_) => 0,
            Self::Text(_) => 1,
            Self::Seq(_) => 2,
        }
    }

    /// Integer payload, if this is an `Int`
    pub fn as_int(&self) -> Option<i128> {
        match self {
            Self::Int(value) => Some(*value),
            _ => None,
        }
    }

    /// Float payload, if this is a `Float`
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(value) => Some(*value),
            _ => None,
        }
    }

    /// Text payload, if this is a `Text`
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(value) => Some(value),
            _ => None,
        }
    }
}

/// Exact comparison of an integer against a float
///
/// NaN sits where `total_cmp` puts it: a negative NaN below every integer, a
/// positive NaN above. Equal magnitudes compare `Equal`.
fn cmp_int_float(int: i128, float: f64) -> Ordering {
    if float.is_nan() {
        return if float.is_sign_negative() {
            Ordering::Greater
        } else {
            Ordering::Less
        };
    }
    let whole = float.trunc();
    if whole >= I128_LIMIT {
        return Ordering::Less;
    }
    if whole < -I128_LIMIT {
        return Ordering::Greater;
    }
    // |whole| < 2^127 and integral, so the cast is exact
    #[allow(clippy::cast_possible_truncation)]
    let whole_int = whole as i128;
    match int.cmp(&whole_int) {
        // Fractional part decides once the integral parts agree
        Ordering::Equal => {
            let fraction = float - whole;
            if fraction > 0.0 {
                Ordering::Less
            } else if fraction < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
        unequal => unequal,
    }
}

impl Ord for OrderValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Self::Int(a), Self::Int(b)) => a.cmp(b),
            (Self::Float(a), Self::Float(b)) => a.total_cmp(b),
            // Integers go first among numerically equal values
            (Self::Int(a), Self::Float(b)) => cmp_int_float(*a, *b).then(Ordering::Less),
            (Self::Float(a), Self::Int(b)) => cmp_int_float(*b, *a).reverse().then(Ordering::Greater),
            (Self::Text(a), Self::Text(b)) => a.cmp(b),
            (Self::Seq(a), Self::Seq(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

impl PartialOrd for OrderValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for OrderValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for OrderValue {}

impl fmt::Display for OrderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(value) => write!(f, "{value}"),
            Self::Float(value) => write!(f, "{value}"),
            Self::Text(value) => write!(f, "{value:?}"),
            Self::Seq(values) => {
                write!(f, "(")?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{value}")?;
                }
                write!(f, ")")
            }
        }
    }
}

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for OrderValue {
                fn from(value: $ty) -> Self {
                    Self::Int(i128::from(value))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, bool);

impl From<usize> for OrderValue {
    fn from(value: usize) -> Self {
        // usize is at most 64 bits on every supported target
        Self::Int(i128::try_from(value).unwrap_or(i128::MAX))
    }
}

impl From<isize> for OrderValue {
    fn from(value: isize) -> Self {
        Self::Int(i128::try_from(value).unwrap_or(i128::MAX))
    }
}

impl From<f64> for OrderValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for OrderValue {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<&str> for OrderValue {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

impl From<String> for OrderValue {
    fn from(value: String) -> Self {
        Self::Text(value)
    }
}

impl From<&String> for OrderValue {
    fn from(value: &String) -> Self {
        Self::Text(value.clone())
    }
}

impl From<char> for OrderValue {
    fn from(value: char) -> Self {
        Self::Text(value.to_string())
    }
}

impl<A, B> From<(A, B)> for OrderValue
where
    A: Into<OrderValue>,
    B: Into<OrderValue>,
{
    fn from((a, b): (A, B)) -> Self {
        Self::Seq(vec![a.into(), b.into()])
    }
}

impl<T: Into<OrderValue>> From<Vec<T>> for OrderValue {
    fn from(values: Vec<T>) -> Self {
        Self::Seq(values.into_iter().map(Into::into).collect())
    }
}
