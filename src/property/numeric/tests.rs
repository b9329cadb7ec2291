use crate::property::{Decimal, MAX_SCALE, PropertyError, format_f32, format_f64};

#[test]
fn tiny_and_huge_doubles_stay_positional() {
	assert_eq!(format_f64(0.0000001), "0.0000001");
	assert_eq!(format_f64(0.0000000001), "0.0000000001");
	assert_eq!(format_f64(1e21), "1000000000000000000000");
	assert_eq!(format_f64(-2.5e-8), "-0.000000025");
	assert!(!format_f64(f64::MIN_POSITIVE).contains(['e', 'E']));
	assert!(!format_f64(f64::MAX).contains(['e', 'E']));
}

#[test]
fn doubles_use_shortest_round_trip_digits() {
	assert_eq!(format_f64(0.1), "0.1");
	assert_eq!(format_f64(98.6), "98.6");
	assert_eq!(format_f64(8.0), "8");
	assert_eq!(format_f64(-0.0), "-0");
}

#[test]
fn floats_render_at_their_own_width() {
	assert_eq!(format_f32(0.1), "0.1");
	assert_eq!(format_f32(1.5), "1.5");
	assert_eq!(format_f32(1e-10), "0.0000000001");
}

#[test]
fn non_finite_values_have_fixed_labels() {
	assert_eq!(format_f64(f64::NAN), "NaN");
	assert_eq!(format_f64(f64::INFINITY), "Infinity");
	assert_eq!(format_f64(f64::NEG_INFINITY), "-Infinity");
	assert_eq!(format_f32(f32::NEG_INFINITY), "-Infinity");
}

#[test]
fn decimal_display_keeps_scale() {
	assert_eq!(Decimal::new(12345, 2).to_string(), "123.45");
	assert_eq!(Decimal::new(-5, 3).to_string(), "-0.005");
	assert_eq!(Decimal::new(100, 2).to_string(), "1.00");
	assert_eq!(Decimal::new(7, 0).to_string(), "7");
	assert_eq!(Decimal::new(0, 4).to_string(), "0.0000");
	assert_eq!(Decimal::new(1, 12).to_string(), "0.000000000001");
}

#[test]
fn decimal_parses_plain_and_exponent_forms() {
	let parsed: Decimal = "2.50".parse().expect("plain decimal parses");
	assert_eq!((parsed.unscaled(), parsed.scale()), (250, 2));

	let parsed: Decimal = "1.5E-7".parse().expect("exponent decimal parses");
	assert_eq!((parsed.unscaled(), parsed.scale()), (15, 8));
	assert_eq!(parsed.to_string(), "0.00000015");

	let parsed: Decimal = "1e3".parse().expect("positive exponent parses");
	assert_eq!(parsed.to_string(), "1000");

	let parsed: Decimal = "-.25".parse().expect("bare fraction parses");
	assert_eq!(parsed.to_string(), "-0.25");

	let parsed: Decimal = "+3".parse().expect("explicit sign parses");
	assert_eq!(parsed.to_string(), "3");
}

#[test]
fn decimal_rejects_malformed_input() {
	for input in ["", "-", ".", "abc", "1.2.3", "1e", "1e3.5", "12a", "1e99", "1e-39", "1e-50000000", "1e-4294967295"] {
		let err = input.parse::<Decimal>().expect_err("malformed decimal should fail");
		assert!(matches!(err, PropertyError::InvalidDecimal { .. }), "input {input:?}");
	}
}

#[test]
fn zero_mantissa_accepts_any_positive_exponent() {
	let parsed: Decimal = "0e40".parse().expect("zero with large exponent parses");
	assert_eq!((parsed.unscaled(), parsed.scale()), (0, 0));
	assert_eq!(parsed.to_string(), "0");
}

#[test]
fn scale_is_capped() {
	let parsed: Decimal = "1e-38".parse().expect("maximum scale parses");
	assert_eq!(parsed.scale(), MAX_SCALE);
	assert_eq!(parsed.to_string().len(), 40);

	let clamped = Decimal::new(123_456, MAX_SCALE + 3);
	assert_eq!((clamped.unscaled(), clamped.scale()), (123, MAX_SCALE));
	let clamped = Decimal::new(i128::MAX, u32::MAX);
	assert_eq!((clamped.unscaled(), clamped.scale()), (0, MAX_SCALE));
}
