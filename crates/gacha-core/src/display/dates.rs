//! Date labels for the week plan and the oracle.

use std::fmt;

use jiff::civil::Date;

/// Day and month, e.g. `06.05.`
pub struct ShortDate<'a>(pub &'a Date);

impl fmt::Display for ShortDate<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%d.%m."))
    }
}

/// Day and month without padding, e.g. `6.5.`, as in week headers.
pub struct DayMonth<'a>(pub &'a Date);

impl fmt::Display for DayMonth<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.", self.0.day(), self.0.month())
    }
}

/// Abbreviated weekday followed by the short date, e.g. `Mon 06.05.`
pub struct DayLabel<'a>(pub &'a Date);

impl fmt::Display for DayLabel<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.strftime("%a %d.%m."))
    }
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;

    use super::*;

    #[test]
    fn test_date_labels() {
        let d = date(2024, 5, 6);
        assert_eq!(ShortDate(&d).to_string(), "06.05.");
        assert_eq!(DayLabel(&d).to_string(), "Mon 06.05.");
        assert_eq!(DayMonth(&d).to_string(), "6.5.");
        assert_eq!(DayMonth(&date(2024, 12, 30)).to_string(), "30.12.");
    }
}
