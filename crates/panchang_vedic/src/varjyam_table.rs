//! Varjyam start positions per nakshatra.
//!
//! Varjyam begins a fixed number of ghatikas into the nakshatra, out of the
//! 60 ghatikas of a nominal 24-hour nakshatra, and lasts 4 ghatikas
//! (96 minutes per 24 hours). The table is compiled in and read-only.

use crate::nakshatra::{ALL_NAKSHATRAS_27, Nakshatra};

/// Ghatikas in one nominal nakshatra (one day).
pub const GHATIKAS_PER_DAY: u8 = 60;

/// Nominal nakshatra length the Varjyam length is scaled from (24 h).
pub const REFERENCE_DURATION_MINUTES: f64 = 1440.0;

/// Varjyam length for a nakshatra of [`REFERENCE_DURATION_MINUTES`] (4 ghatikas).
pub const REFERENCE_VARJYAM_MINUTES: f64 = 96.0;

/// Ghatika at which Varjyam starts, indexed Ashwini..Revati.
const VARJYAM_START_GHATIKA: [u8; 27] = [
    50, // Ashwini
    24, // Bharani
    30, // Krittika
    40, // Rohini
    14, // Mrigashira
    21, // Ardra
    30, // Punarvasu
    20, // Pushya
    32, // Ashlesha
    30, // Magha
    20, // Purva Phalguni
    18, // Uttara Phalguni
    21, // Hasta
    20, // Chitra
    14, // Swati
    14, // Vishakha
    10, // Anuradha
    14, // Jyeshtha
    56, // Mula
    24, // Purva Ashadha
    20, // Uttara Ashadha
    10, // Shravana
    10, // Dhanishtha
    18, // Shatabhisha
    16, // Purva Bhadrapada
    24, // Uttara Bhadrapada
    30, // Revati
];

/// Ghatika (0..60) at which Varjyam starts.
pub const fn varjyam_start_ghatika(nakshatra: Nakshatra) -> u8 {
    VARJYAM_START_GHATIKA[nakshatra.index() as usize]
}

/// Fraction of the nakshatra span elapsed before Varjyam starts, in (0, 1).
pub fn varjyam_fraction(nakshatra: Nakshatra) -> f64 {
    f64::from(varjyam_start_ghatika(nakshatra)) / f64::from(GHATIKAS_PER_DAY)
}

/// Fraction for a free-form name, `None` if the name is unknown.
pub fn varjyam_fraction_for_name(name: &str) -> Option<f64> {
    Nakshatra::resolve(name).map(varjyam_fraction)
}

/// `(nakshatra, fraction)` for all 27 entries, in order.
pub fn varjyam_fraction_table() -> impl Iterator<Item = (Nakshatra, f64)> {
    ALL_NAKSHATRAS_27
        .into_iter()
        .map(|n| (n, varjyam_fraction(n)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fractions_strictly_inside_unit_interval() {
        for (n, f) in varjyam_fraction_table() {
            assert!(f > 0.0 && f < 1.0, "{n}: {f}");
        }
    }

    #[test]
    fn reference_varjyam_is_four_ghatikas() {
        let ghatika_minutes = REFERENCE_DURATION_MINUTES / f64::from(GHATIKAS_PER_DAY);
        assert!((REFERENCE_VARJYAM_MINUTES - 4.0 * ghatika_minutes).abs() < 1e-12);
    }

    #[test]
    fn start_plus_length_fits_in_day() {
        for n in ALL_NAKSHATRAS_27 {
            assert!(varjyam_start_ghatika(n) + 4 <= GHATIKAS_PER_DAY, "{n}");
        }
    }

    #[test]
    fn known_fractions() {
        assert!((varjyam_fraction(Nakshatra::Ashwini) - 5.0 / 6.0).abs() < 1e-15);
        assert!((varjyam_fraction(Nakshatra::Bharani) - 2.0 / 5.0).abs() < 1e-15);
        assert!((varjyam_fraction(Nakshatra::Krittika) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn alias_shares_canonical_fraction() {
        assert_eq!(
            varjyam_fraction_for_name("krthika"),
            varjyam_fraction_for_name("Krittika")
        );
        assert_eq!(varjyam_fraction_for_name("not_a_nakshatra"), None);
    }

    #[test]
    fn table_has_27_entries() {
        assert_eq!(varjyam_fraction_table().count(), 27);
    }
}
