//! Input Parser: extraction and validation of the `number` query parameter.

use serde::Deserialize;

use crate::error::CoreError;

/// Name of the query parameter carrying the number to classify.
pub const NUMBER_PARAM: &str = "number";

/// Raw query parameters of `GET /api/classify-number`.
///
/// Kept as an untyped string so that a non-integer value reaches
/// [`ClassificationRequest::parse`] instead of being rejected by the
/// query extractor with a generic message.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct ClassificationRequest {
    pub number: Option<String>,
}

impl ClassificationRequest {
    /// Validate the raw parameter and convert it to an integer.
    pub fn parse(&self) -> Result<i64, CoreError> {
        parse_number(self.number.as_deref())
    }
}

/// Parse a raw, optional query value as a signed base-10 integer.
///
/// - `None` or `""` is [`CoreError::MissingParameter`].
/// - Surrounding whitespace is ignored; an optional leading `+`/`-` is
///   accepted. Anything else, including values outside the `i64` range,
///   is [`CoreError::InvalidParameter`].
pub fn parse_number(raw: Option<&str>) -> Result<i64, CoreError> {
    let raw = match raw {
        Some(value) if !value.is_empty() => value,
        _ => return Err(CoreError::MissingParameter { name: NUMBER_PARAM }),
    };

    raw.trim()
        .parse::<i64>()
        .map_err(|_| CoreError::InvalidParameter {
            name: NUMBER_PARAM,
            value: raw.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn parses_plain_integer() {
        assert_eq!(parse_number(Some("153")), Ok(153));
    }

    #[test]
    fn parses_signed_integers() {
        assert_eq!(parse_number(Some("-7")), Ok(-7));
        assert_eq!(parse_number(Some("+28")), Ok(28));
    }

    #[test]
    fn ignores_surrounding_whitespace() {
        assert_eq!(parse_number(Some(" 42 ")), Ok(42));
    }

    #[test]
    fn missing_value_is_missing_parameter() {
        assert_matches!(
            parse_number(None),
            Err(CoreError::MissingParameter { name: "number" })
        );
    }

    #[test]
    fn empty_value_is_missing_parameter() {
        assert_matches!(
            parse_number(Some("")),
            Err(CoreError::MissingParameter { .. })
        );
    }

    #[test]
    fn whitespace_only_is_invalid() {
        assert_matches!(
            parse_number(Some("   ")),
            Err(CoreError::InvalidParameter { .. })
        );
    }

    #[test]
    fn non_numeric_value_is_invalid_and_echoed() {
        assert_matches!(
            parse_number(Some("abc")),
            Err(CoreError::InvalidParameter { name: "number", value }) if value == "abc"
        );
    }

    #[test]
    fn decimal_value_is_invalid() {
        assert_matches!(
            parse_number(Some("3.5")),
            Err(CoreError::InvalidParameter { .. })
        );
    }

    #[test]
    fn out_of_range_value_is_invalid() {
        assert_matches!(
            parse_number(Some("99999999999999999999")),
            Err(CoreError::InvalidParameter { .. })
        );
    }

    #[test]
    fn i64_bounds_are_accepted() {
        assert_eq!(parse_number(Some("9223372036854775807")), Ok(i64::MAX));
        assert_eq!(parse_number(Some("-9223372036854775808")), Ok(i64::MIN));
    }

    #[test]
    fn request_parse_delegates_to_parse_number() {
        let request = ClassificationRequest {
            number: Some("10".to_string()),
        };
        assert_eq!(request.parse(), Ok(10));
        assert_matches!(
            ClassificationRequest::default().parse(),
            Err(CoreError::MissingParameter { .. })
        );
    }
}
