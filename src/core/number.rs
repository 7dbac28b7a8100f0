//! Conversions between display text and numbers.

/// Parse display text as a number.
///
/// Every `,` is read as a decimal point. Text that does not parse, or
/// parses to an infinity or NaN, yields `None`.
///
/// # Example
///
/// ```rust
/// use keycalc::core::normalize;
///
/// assert_eq!(normalize("12,5"), Some(12.5));
/// assert_eq!(normalize("7."), Some(7.0));
/// assert_eq!(normalize("."), None);
/// assert_eq!(normalize("inf"), None);
/// ```
pub fn normalize(text: &str) -> Option<f64> {
    text.replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
}

/// Render a number for the display.
///
/// Whole numbers render without a fractional part.
///
/// # Example
///
/// ```rust
/// use keycalc::core::format_number;
///
/// assert_eq!(format_number(10.0), "10");
/// assert_eq!(format_number(0.25), "0.25");
/// assert_eq!(format_number(-3.0), "-3");
/// ```
pub fn format_number(value: f64) -> String {
    let rendered = value.to_string();
    match rendered.strip_suffix(".0") {
        Some(whole) => whole.to_string(),
        None => rendered,
    }
}
