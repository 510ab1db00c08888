//! Display helpers shared by the token dump and the value model.

/// Formats a float the way the language prints it: integral values keep a
/// trailing `.0` so they stay visibly floats.
///
/// # Examples
///
/// ```
/// use laki_util::fmt::float_repr;
///
/// assert_eq!(float_repr(3.0), "3.0");
/// assert_eq!(float_repr(2.5), "2.5");
/// ```
pub fn float_repr(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 {
        format!("{value:.1}")
    } else {
        value.to_string()
    }
}
