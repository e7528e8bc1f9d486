//! Numeric formatting and lenient parsing helpers
//!
//! WKT and PROJ strings carry numbers as text. These helpers print doubles
//! the way the C `%.Ng` conversion does and parse numeric prefixes the way
//! `atof`/`atoi` do, so values survive a round trip without spurious digits.

/// Format a value like the C `%.{precision}g` conversion
///
/// # Arguments
/// * `value` - The value to format
/// * `precision` - Number of significant digits (at least 1)
///
/// # Returns
/// The formatted string, with trailing zeros removed
pub fn format_g(value: f64, precision: usize) -> String {
    let precision = precision.max(1);

    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf".to_string() } else { "-inf".to_string() };
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0".to_string() } else { "0".to_string() };
    }

    // Rounding to `precision` digits decides the exponent, so format in
    // scientific notation first and read it back.
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((m, e)) => (m.to_string(), e.parse::<i32>().unwrap_or(0)),
        None => (scientific.clone(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let mantissa = trim_fraction_zeros(&mantissa);
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", mantissa, sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction_zeros(&format!("{:.*}", decimals, value))
    }
}

/// Format with `%.16g`, the precision used for PROJ strings
pub fn format_g16(value: f64) -> String {
    format_g(value, 16)
}

/// Print a double with 16 significant digits, dropping to 15 when the
/// last six digits look like round-off noise
pub fn print_double(value: f64) -> String {
    let text = format_g(value, 16);
    if text.len() > 15 && (text.ends_with("999999") || text.ends_with("000001")) {
        return format_g(value, 15);
    }
    text
}

/// Print a value for storage in a node: integral values without a
/// fraction, everything else through `print_double`
pub fn print_node_value(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() <= i32::MAX as f64 {
        format!("{}", value as i32)
    } else {
        print_double(value)
    }
}

fn trim_fraction_zeros(text: &str) -> String {
    if !text.contains('.') {
        return text.to_string();
    }
    text.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Parse the longest numeric prefix of `text`, returning 0.0 when there is none
pub fn atof(text: &str) -> f64 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    let mut seen_digit = false;
    let mut seen_dot = false;

    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    while end < bytes.len() {
        match bytes[end] {
            b'0'..=b'9' => seen_digit = true,
            b'.' if !seen_dot => seen_dot = true,
            _ => break,
        }
        end += 1;
    }
    if !seen_digit {
        return 0.0;
    }

    // Optional exponent, only consumed when it is complete
    if end < bytes.len() && (bytes[end] == b'e' || bytes[end] == b'E') {
        let mut exp_end = end + 1;
        if exp_end < bytes.len() && (bytes[exp_end] == b'+' || bytes[exp_end] == b'-') {
            exp_end += 1;
        }
        let digits_start = exp_end;
        while exp_end < bytes.len() && bytes[exp_end].is_ascii_digit() {
            exp_end += 1;
        }
        if exp_end > digits_start {
            end = exp_end;
        }
    }

    trimmed[..end].parse::<f64>().unwrap_or(0.0)
}

/// Parse the leading integer of `text`, returning 0 when there is none
pub fn atoi(text: &str) -> i32 {
    let trimmed = text.trim_start();
    let bytes = trimmed.as_bytes();
    let mut end = 0;
    if end < bytes.len() && (bytes[end] == b'+' || bytes[end] == b'-') {
        end += 1;
    }
    let digits_start = end;
    while end < bytes.len() && bytes[end].is_ascii_digit() {
        end += 1;
    }
    if end == digits_start {
        return 0;
    }
    trimmed[..end].parse::<i64>().map(|v| v as i32).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_g_matches_c_printf() {
        assert_eq!(format_g(6378137.0, 16), "6378137");
        assert_eq!(format_g(298.257223563, 16), "298.257223563");
        assert_eq!(format_g(0.0174532925199433, 16), "0.0174532925199433");
        assert_eq!(format_g(0.9996, 16), "0.9996");
        assert_eq!(format_g(-117.0, 16), "-117");
        assert_eq!(format_g(1e-7, 16), "1e-07");
        assert_eq!(format_g(1.5e20, 16), "1.5e+20");
        assert_eq!(format_g(0.0001, 16), "0.0001");
        assert_eq!(format_g(10000000.0, 16), "10000000");
    }

    #[test]
    fn test_print_double_trims_round_off() {
        assert_eq!(print_double(0.1 + 0.2), "0.3");
        assert_eq!(print_double(500000.0), "500000");
    }

    #[test]
    fn test_print_node_value() {
        assert_eq!(print_node_value(1.0), "1");
        assert_eq!(print_node_value(0.3048), "0.3048");
        assert_eq!(print_node_value(-183.0), "-183");
    }

    #[test]
    fn test_atof_prefix() {
        assert_eq!(atof("12.5abc"), 12.5);
        assert_eq!(atof("  -3e2"), -300.0);
        assert_eq!(atof("1e"), 1.0);
        assert_eq!(atof("abc"), 0.0);
        assert_eq!(atoi("4326xyz"), 4326);
        assert_eq!(atoi(""), 0);
    }
}
