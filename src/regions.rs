//! Supported countries, their province lists and WhatsApp number formats.
//!
//! Shared by server-side registration validation and the client filters.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Country {
    Indonesia,
    Malaysia,
    Philippines,
}

const INDONESIA_PROVINCES: &[&str] = &[
    "DKI Jakarta",
    "Jawa Barat",
    "Jawa Tengah",
    "Jawa Timur",
    "Banten",
    "Sumatera Utara",
    "Sumatera Barat",
    "Sumatera Selatan",
    "Riau",
    "Kepulauan Riau",
    "Bali",
    "Kalimantan Timur",
    "Kalimantan Barat",
    "Sulawesi Selatan",
    "Papua",
];

const MALAYSIA_PROVINCES: &[&str] = &[
    "Kuala Lumpur",
    "Selangor",
    "Johor",
    "Penang",
    "Perak",
    "Kedah",
    "Kelantan",
    "Terengganu",
    "Pahang",
    "Negeri Sembilan",
    "Melaka",
    "Sabah",
    "Sarawak",
];

const PHILIPPINES_PROVINCES: &[&str] = &[
    "Metro Manila",
    "Calabarzon",
    "Central Luzon",
    "Western Visayas",
    "Central Visayas",
    "Davao Region",
    "Northern Mindanao",
    "Ilocos Region",
    "Cagayan Valley",
    "Bicol Region",
    "Eastern Visayas",
    "Zamboanga Peninsula",
    "SOCCSKSARGEN",
];

static INDONESIA_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9,12}$").expect("valid phone pattern"));
static MALAYSIA_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{9,10}$").expect("valid phone pattern"));
static PHILIPPINES_PHONE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]{10}$").expect("valid phone pattern"));

impl Country {
    pub const ALL: [Country; 3] = [Country::Indonesia, Country::Malaysia, Country::Philippines];

    pub fn as_str(&self) -> &'static str {
        match self {
            Country::Indonesia => "Indonesia",
            Country::Malaysia => "Malaysia",
            Country::Philippines => "Philippines",
        }
    }

    pub fn provinces(&self) -> &'static [&'static str] {
        match self {
            Country::Indonesia => INDONESIA_PROVINCES,
            Country::Malaysia => MALAYSIA_PROVINCES,
            Country::Philippines => PHILIPPINES_PROVINCES,
        }
    }

    pub fn has_province(&self, province: &str) -> bool {
        self.provinces().contains(&province)
    }

    pub fn phone_prefix(&self) -> &'static str {
        match self {
            Country::Indonesia => "+62",
            Country::Malaysia => "+60",
            Country::Philippines => "+63",
        }
    }

    /// Example local number shown next to the WhatsApp input.
    pub fn phone_example(&self) -> &'static str {
        match self {
            Country::Indonesia => "8123456789",
            Country::Malaysia => "123456789",
            Country::Philippines => "9123456789",
        }
    }

    fn phone_pattern(&self) -> &'static Regex {
        match self {
            Country::Indonesia => &INDONESIA_PHONE,
            Country::Malaysia => &MALAYSIA_PHONE,
            Country::Philippines => &PHILIPPINES_PHONE,
        }
    }

    /// Normalizes a WhatsApp number to `<prefix><digits>`.
    ///
    /// Accepts either the bare local part or a number that already carries
    /// this country's prefix. Returns `None` when the local part does not
    /// match the country's digit pattern.
    pub fn normalize_whatsapp(&self, raw: &str) -> Option<String> {
        let compact: String = raw.chars().filter(|c| !c.is_whitespace() && *c != '-').collect();
        let local = compact.strip_prefix(self.phone_prefix()).unwrap_or(&compact);

        if self.phone_pattern().is_match(local) {
            Some(format!("{}{}", self.phone_prefix(), local))
        } else {
            None
        }
    }
}

impl std::fmt::Display for Country {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Country {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "Indonesia" => Ok(Country::Indonesia),
            "Malaysia" => Ok(Country::Malaysia),
            "Philippines" => Ok(Country::Philippines),
            other => Err(format!("Unsupported country: {}", other)),
        }
    }
}
