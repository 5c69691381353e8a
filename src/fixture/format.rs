//! C `%.{P}g` general number formatting.
//!
//! `P` significant digits, scientific notation when the decimal exponent is
//! below `-4` or at least `P`, trailing zeros (and a bare trailing point)
//! removed, exponents written with a sign and at least two digits.

use alloc::string::String;
use core::fmt::{self, Write};

/// Format `value` with `precision` significant digits, `%g` style.
///
/// ```
/// use simdref::fixture::format_general;
///
/// assert_eq!(format_general(0.1, 17), "0.10000000000000001");
/// assert_eq!(format_general(1e15, 17), "1000000000000000");
/// assert_eq!(format_general(1e17, 17), "1e+17");
/// assert_eq!(format_general(0.0001, 17), "0.0001");
/// assert_eq!(format_general(1e-5, 9), "1e-05");
/// assert_eq!(format_general(-0.0, 17), "-0");
/// assert_eq!(format_general(f64::NEG_INFINITY, 17), "-inf");
/// ```
pub fn format_general(value: f64, precision: usize) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = write_general(&mut out, value, precision);
    out
}

/// [`format_general`] into any `fmt::Write` sink.
pub fn write_general<W: Write>(w: &mut W, value: f64, precision: usize) -> fmt::Result {
    if value.is_nan() {
        return w.write_str(if value.is_sign_negative() { "-nan" } else { "nan" });
    }
    if value.is_infinite() {
        return w.write_str(if value < 0.0 { "-inf" } else { "inf" });
    }

    let p = precision.max(1);
    let mut sci = String::new();
    write!(sci, "{:.*e}", p - 1, value)?;

    // Rust renders `d.ddd…e<exp>`, exponent without a sign for positives.
    let (mantissa, exp) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exp: i32 = exp.parse().unwrap_or(0);
    let (negative, mantissa) = match mantissa.strip_prefix('-') {
        Some(m) => (true, m),
        None => (false, mantissa),
    };

    let mut digits = String::with_capacity(p);
    digits.extend(mantissa.chars().filter(char::is_ascii_digit));

    if negative {
        w.write_char('-')?;
    }

    if exp < -4 || exp >= p as i32 {
        let (lead, rest) = digits.split_at(1);
        w.write_str(lead)?;
        let rest = rest.trim_end_matches('0');
        if !rest.is_empty() {
            w.write_char('.')?;
            w.write_str(rest)?;
        }
        let sign = if exp < 0 { '-' } else { '+' };
        write!(w, "e{}{:02}", sign, exp.unsigned_abs())
    } else if exp >= 0 {
        let (int, frac) = digits.split_at(exp as usize + 1);
        w.write_str(int)?;
        let frac = frac.trim_end_matches('0');
        if !frac.is_empty() {
            w.write_char('.')?;
            w.write_str(frac)?;
        }
        Ok(())
    } else {
        let frac = digits.trim_end_matches('0');
        w.write_str("0.")?;
        for _ in 0..(-exp - 1) {
            w.write_char('0')?;
        }
        w.write_str(frac)
    }
}
