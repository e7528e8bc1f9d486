//! Degree/minute/second angle parsing
//!
//! Accepts plain decimal numbers as well as forms such as `2d20'14.025"E`,
//! `17d40'W` or `-9d07'54.862"`.

use crate::utils::number_format::atof;

/// Convert a DMS or decimal angle string to decimal degrees
///
/// Hemisphere suffixes `S` and `W` negate the result. Text that is not a
/// recognisable DMS expression falls back to its numeric prefix.
pub fn dms_to_decimal(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let mut chars = trimmed.chars().peekable();
    let mut negative = false;
    if let Some(&c) = chars.peek() {
        if c == '-' || c == '+' {
            negative = c == '-';
            chars.next();
        }
    }

    let mut components = [0.0_f64; 3];
    let mut slot = 0;
    let mut number = String::new();
    let mut saw_marker = false;

    while let Some(c) = chars.next() {
        match c {
            '0'..='9' | '.' => number.push(c),
            'd' | 'D' | '\u{b0}' => {
                components[0] = atof(&number);
                number.clear();
                slot = 1;
                saw_marker = true;
            }
            '\'' => {
                if slot > 1 {
                    return atof(trimmed);
                }
                components[1] = atof(&number);
                number.clear();
                slot = 2;
                saw_marker = true;
            }
            '"' => {
                components[2] = atof(&number);
                number.clear();
                slot = 3;
                saw_marker = true;
            }
            'N' | 'n' | 'E' | 'e' | 'S' | 's' | 'W' | 'w' => {
                // An `e` directly after digits with no marker yet is an exponent
                if !saw_marker && (c == 'e' || c == 'E') && chars.peek().is_some() {
                    return atof(trimmed);
                }
                if matches!(c, 'S' | 's' | 'W' | 'w') {
                    negative = !negative;
                }
                break;
            }
            _ => return atof(trimmed),
        }
    }

    if !number.is_empty() {
        match slot {
            0 => components[0] = atof(&number),
            1 => components[1] = atof(&number),
            2 => components[2] = atof(&number),
            _ => {}
        }
    }

    let value = components[0] + components[1] / 60.0 + components[2] / 3600.0;
    if negative { -value } else { value }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_numbers() {
        assert_eq!(dms_to_decimal("45.5"), 45.5);
        assert_eq!(dms_to_decimal("-117"), -117.0);
        assert_eq!(dms_to_decimal("1e3"), 1000.0);
    }

    #[test]
    fn test_dms_forms() {
        assert!((dms_to_decimal("2d20'14.025\"E") - 2.337229166666667).abs() < 1e-12);
        assert!((dms_to_decimal("17d40'W") + 17.666666666666668).abs() < 1e-12);
        assert!((dms_to_decimal("9d07'54.862\"W") + 9.131906111111112).abs() < 1e-12);
        assert_eq!(dms_to_decimal("0dE"), 0.0);
    }
}
