//! Canonical numeric formatting for `Double` properties.
//!
//! Output is always plain positional notation: no exponent marker, however
//! large or small the magnitude.

use std::fmt;
use std::str::FromStr;

use crate::property::{PropertyError, Result};

/// Render an `f64` as the shortest round-tripping plain decimal.
pub fn format_f64(value: f64) -> String {
	if let Some(text) = non_finite(value.is_nan(), value.is_infinite(), value.is_sign_negative()) {
		return text.to_owned();
	}
	// `Display` for floats never switches to exponent form.
	format!("{value}")
}

/// Render an `f32` as the shortest plain decimal at `f32` precision.
pub fn format_f32(value: f32) -> String {
	if let Some(text) = non_finite(value.is_nan(), value.is_infinite(), value.is_sign_negative()) {
		return text.to_owned();
	}
	format!("{value}")
}

fn non_finite(nan: bool, infinite: bool, negative: bool) -> Option<&'static str> {
	match (nan, infinite, negative) {
		(true, _, _) => Some("NaN"),
		(false, true, false) => Some("Infinity"),
		(false, true, true) => Some("-Infinity"),
		_ => None,
	}
}

/// Largest supported scale, the digit capacity of `i128`.
pub const MAX_SCALE: u32 = 38;

/// Fixed-point decimal: `unscaled * 10^-scale`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Decimal {
	unscaled: i128,
	scale: u32,
}

impl Decimal {
	/// Build a decimal from its unscaled digits and scale.
	///
	/// A scale above [`MAX_SCALE`] is clamped, truncating the digits that
	/// fall past it toward zero.
	pub fn new(unscaled: i128, scale: u32) -> Self {
		if scale <= MAX_SCALE {
			return Self { unscaled, scale };
		}
		let unscaled = match 10_i128.checked_pow(scale - MAX_SCALE) {
			Some(divisor) => unscaled / divisor,
			None => 0,
		};
		Self { unscaled, scale: MAX_SCALE }
	}

	/// Unscaled integer digits.
	pub fn unscaled(self) -> i128 {
		self.unscaled
	}

	/// Number of digits after the decimal point.
	pub fn scale(self) -> u32 {
		self.scale
	}
}

impl fmt::Display for Decimal {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		let digits = self.unscaled.unsigned_abs().to_string();
		let scale = self.scale as usize;
		if self.unscaled < 0 {
			f.write_str("-")?;
		}
		if scale == 0 {
			return f.write_str(&digits);
		}

		let padded = if digits.len() <= scale {
			format!("{}{digits}", "0".repeat(scale + 1 - digits.len()))
		} else {
			digits
		};
		let (int_part, frac_part) = padded.split_at(padded.len() - scale);
		write!(f, "{int_part}.{frac_part}")
	}
}

impl FromStr for Decimal {
	type Err = PropertyError;

	/// Parse plain (`-12.50`) or exponent (`1.5E-7`) notation, keeping scale.
	fn from_str(s: &str) -> Result<Self> {
		parse_decimal(s).ok_or_else(|| PropertyError::InvalidDecimal { input: s.to_owned() })
	}
}

fn parse_decimal(input: &str) -> Option<Decimal> {
	let (negative, body) = match input.as_bytes().first()? {
		b'-' => (true, &input[1..]),
		b'+' => (false, &input[1..]),
		_ => (false, input),
	};

	let (mantissa, exponent) = match body.find(['e', 'E']) {
		Some(at) => (&body[..at], body[at + 1..].parse::<i64>().ok()?),
		None => (body, 0),
	};
	let (int_part, frac_part) = mantissa.split_once('.').unwrap_or((mantissa, ""));
	if int_part.is_empty() && frac_part.is_empty() {
		return None;
	}
	if !int_part.bytes().chain(frac_part.bytes()).all(|byte| byte.is_ascii_digit()) {
		return None;
	}

	let mut unscaled: i128 = 0;
	for byte in int_part.bytes().chain(frac_part.bytes()) {
		unscaled = unscaled.checked_mul(10)?.checked_add(i128::from(byte - b'0'))?;
	}

	let mut scale = i64::try_from(frac_part.len()).ok()?.checked_sub(exponent)?;
	if scale < 0 && unscaled == 0 {
		scale = 0;
	} else if scale < 0 {
		let shift = u32::try_from(-scale).ok()?;
		unscaled = unscaled.checked_mul(10_i128.checked_pow(shift)?)?;
		scale = 0;
	}

	let scale = u32::try_from(scale).ok().filter(|scale| *scale <= MAX_SCALE)?;
	Some(Decimal::new(if negative { -unscaled } else { unscaled }, scale))
}

#[cfg(test)]
mod tests;
