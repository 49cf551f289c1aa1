// src/domain/amount.rs

/// A spreadsheet cell normalized into a number or nothing.
///
/// Spreadsheets hand us prices as `425000`, `"$425,000"`, `" 425000.00 "` or an
/// empty cell. Everything is funnelled through `Amount::parse` once at
/// ingestion so the metric functions only ever see this type.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Amount {
    #[default]
    Missing,
    Value(f64),
}

impl Amount {
    /// Strips `$`, `,` and surrounding whitespace, then parses.
    /// Empty, unparseable and non-finite input all become `Missing`.
    pub fn parse(raw: &str) -> Self {
        Self::parse_stripping(raw, &['$', ','])
    }

    /// Like `parse`, but also accepts a trailing percent sign (`"82.5%"`).
    pub fn parse_percent(raw: &str) -> Self {
        Self::parse_stripping(raw, &['$', ',', '%'])
    }

    fn parse_stripping(raw: &str, strip: &[char]) -> Self {
        let cleaned: String = raw
            .trim()
            .chars()
            .filter(|c| !strip.contains(c))
            .collect();

        match cleaned.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => Amount::Value(v),
            _ => Amount::Missing,
        }
    }

    pub fn value(self) -> Option<f64> {
        match self {
            Amount::Value(v) => Some(v),
            Amount::Missing => None,
        }
    }

    /// The value when it is present and not zero. Zero and missing are
    /// interchangeable everywhere a metric asks "is there an amount here?".
    pub fn nonzero(self) -> Option<f64> {
        self.value().filter(|v| *v != 0.0)
    }

    pub fn is_missing(self) -> bool {
        matches!(self, Amount::Missing)
    }
}

impl From<f64> for Amount {
    fn from(v: f64) -> Self {
        if v.is_finite() {
            Amount::Value(v)
        } else {
            Amount::Missing
        }
    }
}

impl From<Option<f64>> for Amount {
    fn from(v: Option<f64>) -> Self {
        v.map(Amount::from).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_plain_and_currency_strings() {
        assert_eq!(Amount::parse("250000"), Amount::Value(250000.0));
        assert_eq!(Amount::parse("$123,456"), Amount::Value(123456.0));
        assert_eq!(Amount::parse("  $1,000.50 "), Amount::Value(1000.5));
        assert_eq!(Amount::parse("$ 5,000"), Amount::Value(5000.0));
    }

    #[test]
    fn empty_and_garbage_are_missing() {
        assert!(Amount::parse("").is_missing());
        assert!(Amount::parse("   ").is_missing());
        assert!(Amount::parse("n/a").is_missing());
        assert!(Amount::parse("NaN").is_missing());
        assert!(Amount::parse("inf").is_missing());
    }

    #[test]
    fn percent_is_only_stripped_when_asked() {
        assert!(Amount::parse("85%").is_missing());
        assert_eq!(Amount::parse_percent("85%"), Amount::Value(85.0));
        assert_eq!(Amount::parse_percent("12.5 %"), Amount::Value(12.5));
    }

    #[test]
    fn zero_is_present_but_not_nonzero() {
        let zero = Amount::parse("$0");
        assert_eq!(zero.value(), Some(0.0));
        assert_eq!(zero.nonzero(), None);
        assert_eq!(Amount::from(f64::NAN), Amount::Missing);
    }
}
