use std::io;

/// A 64-bit floating-point constant, the pool's sole element type.
pub type Value = f64;

const SIGNIFICANT_DIGITS: usize = 6;

/// Renders `value` the way diagnostic dumps expect: at most six significant
/// digits, compact decimal for mid-magnitude finite numbers, scientific
/// notation otherwise. A pure function of the value; not guaranteed to
/// round-trip.
///
/// ```
/// use value_pool::format_value;
///
/// assert_eq!(format_value(3.5), "3.5");
/// assert_eq!(format_value(1e20), "1e20");
/// assert_eq!(format_value(f64::NAN), "NaN");
/// ```
pub fn format_value(value: Value) -> String {
    if !value.is_finite() {
        // "NaN", "inf", "-inf"
        return value.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0".into() } else { "0".into() };
    }

    // Render once in scientific form, then pick the final shape from the
    // decimal exponent, like `printf("%g", ..)` does.
    let sci = format!("{:.*e}", SIGNIFICANT_DIGITS - 1, value);
    let (mantissa, exp) = sci.split_once('e').unwrap_or((&sci, "0"));
    let exp: i32 = exp.parse().unwrap_or(0);

    if (-4..SIGNIFICANT_DIGITS as i32).contains(&exp) {
        let precision = (SIGNIFICANT_DIGITS as i32 - 1 - exp).max(0) as usize;
        trim_trailing_zeros(format!("{value:.precision$}"))
    } else {
        let mantissa = trim_trailing_zeros(mantissa.to_string());
        format!("{mantissa}e{exp}")
    }
}

/// Writes the rendering of `value` to a diagnostic sink.
pub fn print_value(out: &mut dyn io::Write, value: Value) -> io::Result<()> {
    out.write_all(format_value(value).as_bytes())
}

fn trim_trailing_zeros(mut rendered: String) -> String {
    if rendered.contains('.') {
        while rendered.ends_with('0') {
            rendered.pop();
        }
        if rendered.ends_with('.') {
            rendered.pop();
        }
    }
    rendered
}
