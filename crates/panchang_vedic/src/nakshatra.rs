//! The 27 nakshatras and name resolution.
//!
//! Names arrive from ephemeris providers and users in many transliterations
//! ("Krittika", "krthika", "Kruthika"). Resolution is two-stage:
//!
//! 1. Normalise: trim, lowercase, and collapse runs of whitespace, hyphens,
//!    or underscores into a single `_`.
//! 2. Look the normalised key up in the name index (canonical keys, their
//!    compact forms without underscores, and the alias table). If that
//!    fails, retry once with underscores removed.
//!
//! Anything else is unknown and resolves to `None`.

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::Serialize;

use crate::error::VedicError;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS_27: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

/// Transliteration variants, already in normalised form.
///
/// Canonical keys and their underscore-free forms are indexed separately
/// and must not be repeated here.
pub const NAKSHATRA_ALIASES: &[(&str, Nakshatra)] = &[
    ("aswini", Nakshatra::Ashwini),
    ("ashvini", Nakshatra::Ashwini),
    ("asvini", Nakshatra::Ashwini),
    ("bharni", Nakshatra::Bharani),
    ("krthika", Nakshatra::Krittika),
    ("krithika", Nakshatra::Krittika),
    ("kritika", Nakshatra::Krittika),
    ("krttika", Nakshatra::Krittika),
    ("kruthika", Nakshatra::Krittika),
    ("karthika", Nakshatra::Krittika),
    ("rohani", Nakshatra::Rohini),
    ("mrigashirsha", Nakshatra::Mrigashira),
    ("mrigasira", Nakshatra::Mrigashira),
    ("mrigashirsa", Nakshatra::Mrigashira),
    ("mrigasirsha", Nakshatra::Mrigashira),
    ("mrugasira", Nakshatra::Mrigashira),
    ("mrigasheersha", Nakshatra::Mrigashira),
    ("arudra", Nakshatra::Ardra),
    ("aardra", Nakshatra::Ardra),
    ("aridra", Nakshatra::Ardra),
    ("punarvasam", Nakshatra::Punarvasu),
    ("pushyami", Nakshatra::Pushya),
    ("pusya", Nakshatra::Pushya),
    ("pushyam", Nakshatra::Pushya),
    ("aslesha", Nakshatra::Ashlesha),
    ("ashlesa", Nakshatra::Ashlesha),
    ("aslesa", Nakshatra::Ashlesha),
    ("ashresha", Nakshatra::Ashlesha),
    ("makha", Nakshatra::Magha),
    ("magam", Nakshatra::Magha),
    ("pubba", Nakshatra::PurvaPhalguni),
    ("purva_falguni", Nakshatra::PurvaPhalguni),
    ("poorva_phalguni", Nakshatra::PurvaPhalguni),
    ("poorvaphalguni", Nakshatra::PurvaPhalguni),
    ("uttara_falguni", Nakshatra::UttaraPhalguni),
    ("uthara_phalguni", Nakshatra::UttaraPhalguni),
    ("utthara_phalguni", Nakshatra::UttaraPhalguni),
    ("hastha", Nakshatra::Hasta),
    ("hastam", Nakshatra::Hasta),
    ("chitta", Nakshatra::Chitra),
    ("chithra", Nakshatra::Chitra),
    ("chittha", Nakshatra::Chitra),
    ("svati", Nakshatra::Swati),
    ("swathi", Nakshatra::Swati),
    ("svathi", Nakshatra::Swati),
    ("visakha", Nakshatra::Vishakha),
    ("vishaka", Nakshatra::Vishakha),
    ("visakam", Nakshatra::Vishakha),
    ("anuraadha", Nakshatra::Anuradha),
    ("anusham", Nakshatra::Anuradha),
    ("jyestha", Nakshatra::Jyeshtha),
    ("jyeshta", Nakshatra::Jyeshtha),
    ("jeshta", Nakshatra::Jyeshtha),
    ("moola", Nakshatra::Mula),
    ("moolam", Nakshatra::Mula),
    ("mool", Nakshatra::Mula),
    ("purvashadha", Nakshatra::PurvaAshadha),
    ("purvashada", Nakshatra::PurvaAshadha),
    ("poorvashadha", Nakshatra::PurvaAshadha),
    ("poorvashada", Nakshatra::PurvaAshadha),
    ("purva_shadha", Nakshatra::PurvaAshadha),
    ("purva_ashada", Nakshatra::PurvaAshadha),
    ("purva_shada", Nakshatra::PurvaAshadha),
    ("poorva_ashadha", Nakshatra::PurvaAshadha),
    ("poorva_shadha", Nakshatra::PurvaAshadha),
    ("poorva_ashada", Nakshatra::PurvaAshadha),
    ("poorva_shada", Nakshatra::PurvaAshadha),
    ("pooradam", Nakshatra::PurvaAshadha),
    ("uttarashadha", Nakshatra::UttaraAshadha),
    ("uttarashada", Nakshatra::UttaraAshadha),
    ("uthrashada", Nakshatra::UttaraAshadha),
    ("uthrashadha", Nakshatra::UttaraAshadha),
    ("uttara_shadha", Nakshatra::UttaraAshadha),
    ("uttara_ashada", Nakshatra::UttaraAshadha),
    ("uttara_shada", Nakshatra::UttaraAshadha),
    ("uthara_ashadha", Nakshatra::UttaraAshadha),
    ("uthara_shadha", Nakshatra::UttaraAshadha),
    ("uthara_ashada", Nakshatra::UttaraAshadha),
    ("uthara_shada", Nakshatra::UttaraAshadha),
    ("utthara_ashadha", Nakshatra::UttaraAshadha),
    ("utthara_shadha", Nakshatra::UttaraAshadha),
    ("utthara_ashada", Nakshatra::UttaraAshadha),
    ("utthara_shada", Nakshatra::UttaraAshadha),
    ("uthiradam", Nakshatra::UttaraAshadha),
    ("sravana", Nakshatra::Shravana),
    ("shravanam", Nakshatra::Shravana),
    ("sravanam", Nakshatra::Shravana),
    ("shravan", Nakshatra::Shravana),
    ("dhanishta", Nakshatra::Dhanishtha),
    ("dhanista", Nakshatra::Dhanishtha),
    ("shravishtha", Nakshatra::Dhanishtha),
    ("satabhisha", Nakshatra::Shatabhisha),
    ("shatabhishak", Nakshatra::Shatabhisha),
    ("satabhisham", Nakshatra::Shatabhisha),
    ("shatataraka", Nakshatra::Shatabhisha),
    ("shatabhishaj", Nakshatra::Shatabhisha),
    ("shathabhisha", Nakshatra::Shatabhisha),
    ("sathabhisha", Nakshatra::Shatabhisha),
    ("sadayam", Nakshatra::Shatabhisha),
    ("purvabhadra", Nakshatra::PurvaBhadrapada),
    ("poorvabhadra", Nakshatra::PurvaBhadrapada),
    ("purva_bhadra", Nakshatra::PurvaBhadrapada),
    ("poorva_bhadrapada", Nakshatra::PurvaBhadrapada),
    ("uttarabhadra", Nakshatra::UttaraBhadrapada),
    ("uttara_bhadra", Nakshatra::UttaraBhadrapada),
    ("uthrabhadra", Nakshatra::UttaraBhadrapada),
    ("uthrattathi", Nakshatra::UttaraBhadrapada),
    ("revathi", Nakshatra::Revati),
    ("revathy", Nakshatra::Revati),
];

/// Canonical keys and aliases, each also in compact form, built on first use.
static NAME_INDEX: Lazy<HashMap<String, Nakshatra>> = Lazy::new(|| {
    let names = ALL_NAKSHATRAS_27.len() + NAKSHATRA_ALIASES.len();
    let mut index = HashMap::with_capacity(2 * names);
    for n in ALL_NAKSHATRAS_27 {
        index.insert(n.key().to_string(), n);
        index.insert(n.key().replace('_', ""), n);
    }
    for &(alias, n) in NAKSHATRA_ALIASES {
        index.insert(alias.to_string(), n);
        index.insert(alias.replace('_', ""), n);
    }
    index
});

/// Lowercase and collapse separator runs (whitespace, `-`, `_`) to one `_`.
pub fn normalize_nakshatra_name(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut pending_sep = false;
    for ch in raw.trim().chars() {
        if ch.is_whitespace() || ch == '-' || ch == '_' {
            pending_sep = !out.is_empty();
        } else {
            if pending_sep {
                out.push('_');
                pending_sep = false;
            }
            out.extend(ch.to_lowercase());
        }
    }
    out
}

impl Nakshatra {
    /// Sanskrit name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishtha => "Dhanishtha",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Canonical lookup key: the normalised name (`"purva_phalguni"`).
    pub const fn key(self) -> &'static str {
        match self {
            Self::Ashwini => "ashwini",
            Self::Bharani => "bharani",
            Self::Krittika => "krittika",
            Self::Rohini => "rohini",
            Self::Mrigashira => "mrigashira",
            Self::Ardra => "ardra",
            Self::Punarvasu => "punarvasu",
            Self::Pushya => "pushya",
            Self::Ashlesha => "ashlesha",
            Self::Magha => "magha",
            Self::PurvaPhalguni => "purva_phalguni",
            Self::UttaraPhalguni => "uttara_phalguni",
            Self::Hasta => "hasta",
            Self::Chitra => "chitra",
            Self::Swati => "swati",
            Self::Vishakha => "vishakha",
            Self::Anuradha => "anuradha",
            Self::Jyeshtha => "jyeshtha",
            Self::Mula => "mula",
            Self::PurvaAshadha => "purva_ashadha",
            Self::UttaraAshadha => "uttara_ashadha",
            Self::Shravana => "shravana",
            Self::Dhanishtha => "dhanishtha",
            Self::Shatabhisha => "shatabhisha",
            Self::PurvaBhadrapada => "purva_bhadrapada",
            Self::UttaraBhadrapada => "uttara_bhadrapada",
            Self::Revati => "revati",
        }
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// All 27 nakshatras in order.
    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS_27
    }

    /// Resolve a free-form name to a nakshatra.
    pub fn resolve(name: &str) -> Option<Self> {
        let key = normalize_nakshatra_name(name);
        if key.is_empty() {
            return None;
        }
        NAME_INDEX
            .get(&key)
            .or_else(|| NAME_INDEX.get(&key.replace('_', "")))
            .copied()
    }
}

impl fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Nakshatra {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::resolve(s).ok_or_else(|| VedicError::UnknownNakshatra(s.to_string()))
    }
}
