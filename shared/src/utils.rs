// Formatting and parsing helpers shared by the engine and any UI host.

/// Brazilian number and date conventions: `.` groups thousands, `,` marks
/// decimals, dates are written day first.
pub mod brazilian_format {
    use anyhow::{anyhow, Result};
    use chrono::{Month, NaiveDate, NaiveDateTime};
    use std::str::FromStr;

    // Two-digit years come first: `%Y` would read "23" as the year 23, while
    // `%y` maps 00-69 to 20xx and 70-99 to 19xx and rejects four digits.
    const DATE_FORMATS: [&str; 7] = [
        "%d/%m/%y",
        "%d-%m-%y",
        "%d.%m.%y",
        "%d/%m/%Y",
        "%d-%m-%Y",
        "%d.%m.%Y",
        "%Y-%m-%d",
    ];

    const DATETIME_FORMATS: [&str; 16] = [
        "%d/%m/%y %H:%M:%S",
        "%d/%m/%y %H:%M",
        "%d-%m-%y %H:%M:%S",
        "%d-%m-%y %H:%M",
        "%d.%m.%y %H:%M:%S",
        "%d.%m.%y %H:%M",
        "%d/%m/%Y %H:%M:%S",
        "%d/%m/%Y %H:%M",
        "%d-%m-%Y %H:%M:%S",
        "%d-%m-%Y %H:%M",
        "%d.%m.%Y %H:%M:%S",
        "%d.%m.%Y %H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
    ];

    // Parses decimals like "1.234,56" or "123,45" into f64.
    // The dot is always treated as a thousands separator, so "1234.50"
    // becomes 123450.0.
    pub fn parse_decimal(s: &str) -> Result<f64> {
        let normalized = s
            .trim()
            .replace('.', "") // Remove thousand separators
            .replace(',', "."); // Replace decimal separator

        f64::from_str(&normalized).map_err(|e| anyhow!("Failed to parse decimal '{}': {}", s, e))
    }

    /// Same as [`parse_decimal`] but never fails: anything unparseable,
    /// including NaN, reads as 0.0.
    pub fn parse_decimal_lenient(s: &str) -> f64 {
        parse_decimal(s).ok().filter(|v| !v.is_nan()).unwrap_or(0.0)
    }

    /// Renders `value` with `decimals` fraction digits, `.` between thousands
    /// groups and `,` before the fraction: `1234.5` -> `"1.234,50"`.
    pub fn format_decimal(value: f64, decimals: usize) -> String {
        if !value.is_finite() {
            return value.to_string();
        }

        let formatted = format!("{:.decimals$}", value, decimals = decimals);
        // Negatives that round to zero keep their sign: -0.001 -> "-0,00".
        let (sign, digits) = match formatted.strip_prefix('-') {
            Some(digits) => ("-", digits),
            None => ("", formatted.as_str()),
        };
        let (int_part, frac_part) = match digits.split_once('.') {
            Some((int_part, frac_part)) => (int_part, Some(frac_part)),
            None => (digits, None),
        };

        let mut out = String::with_capacity(formatted.len() + int_part.len() / 3);
        out.push_str(sign);
        for (i, ch) in int_part.chars().enumerate() {
            if i > 0 && (int_part.len() - i) % 3 == 0 {
                out.push('.');
            }
            out.push(ch);
        }
        if let Some(frac_part) = frac_part {
            out.push(',');
            out.push_str(frac_part);
        }
        out
    }

    /// Currency string for display: `"R$ 1.234,50"`.
    pub fn format_brl(value: f64) -> String {
        format!("R$ {}", format_decimal(value, 2))
    }

    // Parses a day-first date such as "15/03/2023", optionally followed by a
    // time of day. ISO "2023-03-15" is accepted as well.
    pub fn parse_date(s: &str) -> Result<NaiveDate> {
        let s = s.trim();
        DATE_FORMATS
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s, fmt).ok())
            .or_else(|| {
                DATETIME_FORMATS
                    .iter()
                    .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
                    .map(|dt| dt.date())
            })
            .ok_or_else(|| anyhow!("Failed to parse date '{}'", s))
    }

    /// Dashboard label of a month: two-digit number plus English
    /// abbreviation, the same text `%m/%b` yields for a date in that month.
    pub fn month_label(month: u32) -> String {
        match u8::try_from(month).ok().and_then(|m| Month::try_from(m).ok()) {
            Some(m) => format!("{:02}/{}", month, &m.name()[..3]),
            None => format!("{:02}", month),
        }
    }

}
