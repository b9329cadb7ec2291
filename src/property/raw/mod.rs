use std::borrow::Cow;
use std::fmt;

use crate::property::{Decimal, format_f32, format_f64};

/// Untyped input handed to a property before classification.
#[derive(Debug, Clone, PartialEq)]
pub enum RawValue {
	/// Absent value; normalized to empty text before classification.
	Null,
	/// UTF-8 text.
	Text(String),
	/// 32-bit float scalar.
	F32(f32),
	/// 64-bit float scalar.
	F64(f64),
	/// Fixed-point decimal scalar.
	Decimal(Decimal),
	/// Signed integer up to 64 bits.
	I64(i64),
	/// Unsigned integer up to 64 bits.
	U64(u64),
	/// Signed 128-bit integer.
	I128(i128),
	/// Unsigned 128-bit integer.
	U128(u128),
	/// Boolean scalar.
	Bool(bool),
	/// Single-level sequence of items.
	List(Vec<RawValue>),
	/// Default textual form of a value with no dedicated variant.
	Other(String),
}

impl RawValue {
	/// Capture the textual form of a value that has no dedicated variant.
	pub fn other(value: impl fmt::Display) -> Self {
		Self::Other(value.to_string())
	}

	/// Build a sequence value from any iterator of convertible items.
	pub fn list<I>(items: I) -> Self
	where
		I: IntoIterator,
		I::Item: Into<RawValue>,
	{
		Self::List(items.into_iter().map(Into::into).collect())
	}

	/// Whether this is the absent marker.
	pub fn is_null(&self) -> bool {
		matches!(self, Self::Null)
	}
}

/// Default textual form, used as the fallback rendering.
impl fmt::Display for RawValue {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Null => Ok(()),
			Self::Text(v) | Self::Other(v) => f.write_str(v),
			Self::F32(v) => f.write_str(&format_f32(*v)),
			Self::F64(v) => f.write_str(&format_f64(*v)),
			Self::Decimal(v) => write!(f, "{v}"),
			Self::I64(v) => write!(f, "{v}"),
			Self::U64(v) => write!(f, "{v}"),
			Self::I128(v) => write!(f, "{v}"),
			Self::U128(v) => write!(f, "{v}"),
			Self::Bool(v) => write!(f, "{v}"),
			Self::List(items) => {
				f.write_str("[")?;
				for (idx, item) in items.iter().enumerate() {
					if idx > 0 {
						f.write_str(", ")?;
					}
					write!(f, "{item}")?;
				}
				f.write_str("]")
			}
		}
	}
}

impl From<String> for RawValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&str> for RawValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_owned())
	}
}

impl From<&String> for RawValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl From<Cow<'_, str>> for RawValue {
	fn from(value: Cow<'_, str>) -> Self {
		Self::Text(value.into_owned())
	}
}

impl From<char> for RawValue {
	fn from(value: char) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<f32> for RawValue {
	fn from(value: f32) -> Self {
		Self::F32(value)
	}
}

impl From<f64> for RawValue {
	fn from(value: f64) -> Self {
		Self::F64(value)
	}
}

impl From<Decimal> for RawValue {
	fn from(value: Decimal) -> Self {
		Self::Decimal(value)
	}
}

impl From<bool> for RawValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

macro_rules! impl_from_int {
	($variant:ident: $wide:ty => $($narrow:ty),+) => {
		$(
			impl From<$narrow> for RawValue {
				fn from(value: $narrow) -> Self {
					Self::$variant(<$wide>::from(value))
				}
			}
		)+
	};
}

impl_from_int!(I64: i64 => i8, i16, i32, i64);
impl_from_int!(U64: u64 => u8, u16, u32, u64);
impl_from_int!(I128: i128 => i128);
impl_from_int!(U128: u128 => u128);

impl From<isize> for RawValue {
	fn from(value: isize) -> Self {
		i64::try_from(value).map_or_else(|_| Self::I128(value as i128), Self::I64)
	}
}

impl From<usize> for RawValue {
	fn from(value: usize) -> Self {
		u64::try_from(value).map_or_else(|_| Self::U128(value as u128), Self::U64)
	}
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
	fn from(value: Option<T>) -> Self {
		value.map_or(Self::Null, Into::into)
	}
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
	fn from(items: Vec<T>) -> Self {
		Self::list(items)
	}
}

impl<T: Clone + Into<RawValue>> From<&[T]> for RawValue {
	fn from(items: &[T]) -> Self {
		Self::list(items.iter().cloned())
	}
}

impl<T: Into<RawValue>, const N: usize> From<[T; N]> for RawValue {
	fn from(items: [T; N]) -> Self {
		Self::list(items)
	}
}
