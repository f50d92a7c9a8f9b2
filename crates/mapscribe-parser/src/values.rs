//! Parsers for attribute values found on captured diagram elements.
//!
//! - [`numeric_tokens`] - signed decimals of path data, in order
//! - [`parse_translate`] - the offset of a `translate(x, y)` transform
//! - [`parse_length`] - leading number of a length such as `120` or `120px`
//! - [`style_property`] - one declaration of an inline `style`

use winnow::{
    Parser as _,
    ascii::{digit0, digit1, float, multispace0},
    combinator::{alt, opt, preceded, repeat},
    error::ModalResult,
    token::any,
};

use mapscribe_core::geometry::Point;

type Input<'src> = &'src str;

/// `-?\d+(\.\d*)?`
fn signed_decimal(input: &mut Input<'_>) -> ModalResult<f64> {
    (opt('-'), digit1, opt(('.', digit0)))
        .take()
        .try_map(|number: &str| number.parse::<f64>())
        .parse_next(input)
}

fn numeric_stream(input: &mut Input<'_>) -> ModalResult<Vec<Option<f64>>> {
    repeat(0.., alt((signed_decimal.map(Some), any.value(None)))).parse_next(input)
}

/// Extracts every signed decimal from path data, in document order.
///
/// Path commands, separators and anything else between numbers are skipped;
/// no path semantics are applied. A leading `.` is not part of a number and
/// exponents split into two numbers.
///
/// # Examples
///
/// ```
/// # use mapscribe_parser::values::numeric_tokens;
/// assert_eq!(
///     numeric_tokens("M100,20C150,20 150,-60.5 200,-60.5"),
///     vec![100.0, 20.0, 150.0, 20.0, 150.0, -60.5, 200.0, -60.5]
/// );
/// ```
pub fn numeric_tokens(data: &str) -> Vec<f64> {
    let mut input = data;
    numeric_stream(&mut input)
        .map(|tokens| tokens.into_iter().flatten().collect())
        .unwrap_or_default()
}

fn translate_arguments(input: &mut Input<'_>) -> ModalResult<Point> {
    (
        preceded(multispace0, float),
        preceded((multispace0, opt(','), multispace0), float),
        preceded(multispace0, ')'),
    )
        .map(|(x, y, _): (f64, f64, char)| Point::new(x, y))
        .parse_next(input)
}

/// Parses the offset of the first `translate(x, y)` in a transform list.
///
/// The arguments may be separated by a comma, whitespace or both. A
/// single-argument, non-finite or otherwise malformed translate yields
/// `None`.
///
/// # Examples
///
/// ```
/// # use mapscribe_parser::values::parse_translate;
/// let p = parse_translate("translate(12.5, -40)").unwrap();
/// assert_eq!((p.x(), p.y()), (12.5, -40.0));
///
/// assert!(parse_translate("scale(2) translate(1 2)").is_some());
/// assert!(parse_translate("rotate(45)").is_none());
/// ```
pub fn parse_translate(transform: &str) -> Option<Point> {
    const PREFIX: &str = "translate(";
    let start = transform.find(PREFIX)? + PREFIX.len();
    let mut input = &transform[start..];
    translate_arguments(&mut input)
        .ok()
        .filter(|offset| offset.x().is_finite() && offset.y().is_finite())
}

fn leading_float(input: &mut Input<'_>) -> ModalResult<f64> {
    preceded(multispace0, float).parse_next(input)
}

/// Parses the leading number of a length attribute, ignoring any unit.
///
/// # Examples
///
/// ```
/// # use mapscribe_parser::values::parse_length;
/// assert_eq!(parse_length("120"), Some(120.0));
/// assert_eq!(parse_length(" 42.5px"), Some(42.5));
/// assert_eq!(parse_length("auto"), None);
/// ```
pub fn parse_length(value: &str) -> Option<f64> {
    let mut input = value;
    leading_float(&mut input).ok().filter(|length| length.is_finite())
}

/// Returns the trimmed value of `property` in an inline style declaration list.
///
/// # Examples
///
/// ```
/// # use mapscribe_parser::values::style_property;
/// assert_eq!(style_property("stroke: #000; fill:#ffcc00", "fill"), Some("#ffcc00"));
/// assert_eq!(style_property("stroke: #000", "fill"), None);
/// ```
pub fn style_property<'a>(style: &'a str, property: &str) -> Option<&'a str> {
    style
        .split(';')
        .filter_map(|declaration| declaration.split_once(':'))
        .find(|(name, _)| name.trim().eq_ignore_ascii_case(property))
        .map(|(_, value)| value.trim())
        .filter(|value| !value.is_empty())
}
