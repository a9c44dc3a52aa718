/// Render a float identically on every platform and locale.
///
/// Finite values use the shortest representation that round-trips (`1`, `0.5`,
/// `-0.25`); non-finite values use `NaN`, `Infinity`, and `-Infinity`.
pub fn format_float(value: f32) -> String {
	if value.is_nan() {
		return "NaN".to_owned();
	}
	if value.is_infinite() {
		return if value.is_sign_positive() { "Infinity" } else { "-Infinity" }.to_owned();
	}
	format!("{value}")
}
