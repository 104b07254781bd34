use crate::error::ParseError;

use super::model::Metric;

/// Parse a formatted numeric cell: thousands separators and surrounding
/// whitespace are stripped first, so `" 1,234.5 "` parses as `1234.5`.
pub fn parse_numeric(raw: &str) -> Result<f64, ParseError> {
    let cleaned: String = raw.trim().chars().filter(|c| *c != ',').collect();
    if cleaned.is_empty() {
        return Err(ParseError::Empty);
    }
    let value: f64 = cleaned
        .parse()
        .map_err(|_| ParseError::Invalid(raw.to_string()))?;
    if !value.is_finite() {
        return Err(ParseError::NonFinite(raw.to_string()));
    }
    Ok(value)
}

/// Normalize a cell into a [`Metric`]. Parse failures are not fatal; they
/// become [`Metric::Unparseable`].
pub fn normalize(raw: &str) -> Metric {
    match parse_numeric(raw) {
        Ok(v) => Metric::Value(v),
        Err(e) => {
            log::trace!("unparseable cell: {e}");
            Metric::Unparseable
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_thousands_separators() {
        assert_eq!(normalize("1,234.5"), Metric::Value(1234.5));
        assert_eq!(normalize("  12,000 "), Metric::Value(12000.0));
        assert_eq!(normalize("-3.25"), Metric::Value(-3.25));
    }

    #[test]
    fn malformed_cells_are_unparseable_not_zero() {
        assert_eq!(normalize("n/a"), Metric::Unparseable);
        assert_eq!(normalize(""), Metric::Unparseable);
        assert_eq!(normalize("   "), Metric::Unparseable);
        assert_eq!(normalize("12%"), Metric::Unparseable);
    }

    #[test]
    fn non_finite_values_are_rejected() {
        assert_eq!(parse_numeric("NaN"), Err(ParseError::NonFinite("NaN".into())));
        assert_eq!(parse_numeric("inf"), Err(ParseError::NonFinite("inf".into())));
        assert_eq!(normalize("-inf"), Metric::Unparseable);
    }

    #[test]
    fn parse_errors_name_the_cell() {
        assert_eq!(parse_numeric(""), Err(ParseError::Empty));
        assert_eq!(parse_numeric("abc"), Err(ParseError::Invalid("abc".into())));
    }
}
