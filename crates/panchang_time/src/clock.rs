//! 12-hour clock rendering for display layers.

use chrono::{DateTime, FixedOffset, Utc};

/// Meridiem style for 12-hour clock output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeLocale {
    /// Indian English: `02:00 am`.
    #[default]
    EnIn,
    /// US English: `02:00 AM`.
    EnUs,
}

impl TimeLocale {
    /// Pick a locale from a BCP 47 tag; unknown tags fall back to `en-IN`.
    pub fn from_tag(tag: &str) -> Self {
        match tag.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "en-us" => Self::EnUs,
            _ => Self::EnIn,
        }
    }

    /// BCP 47 tag for this locale.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::EnIn => "en-IN",
            Self::EnUs => "en-US",
        }
    }

    const fn pattern(self) -> &'static str {
        match self {
            Self::EnIn => "%I:%M %P",
            Self::EnUs => "%I:%M %p",
        }
    }
}

/// Render an instant as `hh:mm am` in the given time zone.
pub fn format_clock(instant: DateTime<Utc>, offset: FixedOffset, locale: TimeLocale) -> String {
    instant
        .with_timezone(&offset)
        .format(locale.pattern())
        .to_string()
}

/// Render `[start, end]` as `hh:mm am - hh:mm am` in the given time zone.
pub fn format_clock_range(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    offset: FixedOffset,
    locale: TimeLocale,
) -> String {
    format!(
        "{} - {}",
        format_clock(start, offset, locale),
        format_clock(end, offset, locale)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ist;
    use chrono::TimeZone;

    #[test]
    fn en_in_lowercase_meridiem() {
        let t = Utc.with_ymd_and_hms(2025, 10, 2, 20, 30, 0).unwrap();
        assert_eq!(format_clock(t, ist(), TimeLocale::EnIn), "02:00 am");
    }

    #[test]
    fn en_us_uppercase_meridiem() {
        let t = Utc.with_ymd_and_hms(2025, 10, 3, 12, 6, 0).unwrap();
        assert_eq!(format_clock(t, ist(), TimeLocale::EnUs), "05:36 PM");
    }

    #[test]
    fn range_joins_with_dash() {
        let a = Utc.with_ymd_and_hms(2025, 10, 2, 20, 30, 0).unwrap();
        let b = Utc.with_ymd_and_hms(2025, 10, 2, 22, 6, 0).unwrap();
        assert_eq!(
            format_clock_range(a, b, ist(), TimeLocale::EnUs),
            "02:00 AM - 03:36 AM"
        );
    }

    #[test]
    fn tag_parsing() {
        assert_eq!(TimeLocale::from_tag("en-US"), TimeLocale::EnUs);
        assert_eq!(TimeLocale::from_tag("en_us"), TimeLocale::EnUs);
        assert_eq!(TimeLocale::from_tag("en-IN"), TimeLocale::EnIn);
        assert_eq!(TimeLocale::from_tag("te-IN"), TimeLocale::EnIn);
        assert_eq!(TimeLocale::from_tag(""), TimeLocale::EnIn);
    }

    #[test]
    fn tag_round_trip() {
        for locale in [TimeLocale::EnIn, TimeLocale::EnUs] {
            assert_eq!(TimeLocale::from_tag(locale.tag()), locale);
        }
        assert_eq!(TimeLocale::from_tag("fr-FR").tag(), "en-IN");
    }

    #[test]
    fn midnight_and_noon() {
        let midnight = Utc.with_ymd_and_hms(2025, 10, 2, 18, 30, 0).unwrap();
        let noon = Utc.with_ymd_and_hms(2025, 10, 3, 6, 30, 0).unwrap();
        assert_eq!(format_clock(midnight, ist(), TimeLocale::EnUs), "12:00 AM");
        assert_eq!(format_clock(noon, ist(), TimeLocale::EnUs), "12:00 PM");
    }
}
