use crate::math::Real;

const PRECISION: i32 = 6;

/// Formats a number the way a default-configured C++ output stream does (`%g` with six
/// significant digits).
///
/// # Example
///
/// ```
/// use inertial3d::exporter::format_float;
///
/// assert_eq!(format_float(0.1), "0.1");
/// assert_eq!(format_float(1.0 / 3.0), "0.333333");
/// assert_eq!(format_float(1234567.0), "1.23457e+06");
/// assert_eq!(format_float(-2.0), "-2");
/// ```
pub fn format_float(val: Real) -> String {
    if val.is_nan() {
        return if val.is_sign_negative() { "-nan" } else { "nan" }.to_string();
    }

    if val.is_infinite() {
        return if val < 0.0 { "-inf" } else { "inf" }.to_string();
    }

    if val == 0.0 {
        return if val.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    // Rounding to the target precision first gives the exponent `%g` decides on.
    let sci = format!("{:.*e}", (PRECISION - 1) as usize, val);
    let (mantissa, exponent) = match sci.split_once('e') {
        Some(parts) => parts,
        None => return sci,
    };
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..PRECISION).contains(&exponent) {
        let decimals = (PRECISION - 1 - exponent) as usize;
        strip_trailing_zeros(&format!("{:.*}", decimals, val)).to_string()
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            strip_trailing_zeros(mantissa),
            sign,
            exponent.abs()
        )
    }
}

fn strip_trailing_zeros(s: &str) -> &str {
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.')
    } else {
        s
    }
}

#[cfg(test)]
mod test {
    use super::format_float;

    #[test]
    fn fixed_notation() {
        assert_eq!(format_float(1.0), "1");
        assert_eq!(format_float(-0.5), "-0.5");
        assert_eq!(format_float(123456.0), "123456");
        assert_eq!(format_float(3.14159265), "3.14159");
        assert_eq!(format_float(0.0001), "0.0001");
        assert_eq!(format_float(99.99999), "100");
        assert_eq!(format_float(0.0), "0");
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(format_float(1.0e6), "1e+06");
        assert_eq!(format_float(999999.5), "1e+06");
        assert_eq!(format_float(0.00001), "1e-05");
        assert_eq!(format_float(-1.5e-7), "-1.5e-07");
        assert_eq!(format_float(6.02214076e23), "6.02214e+23");
        assert_eq!(format_float(1.0e-100), "1e-100");
    }

    #[test]
    fn special_values() {
        assert_eq!(format_float(f64::INFINITY), "inf");
        assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
        assert_eq!(format_float(f64::NAN), "nan");
    }
}
