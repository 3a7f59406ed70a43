//! Registering jurisdictions (Indian states and union territories)
//!
//! Free-text state names coming from pages, query strings or the city
//! directory are normalized into a key (`"Tamil Nadu"` -> `"tamil-nadu"`)
//! and converted into a [`Jurisdiction`] before any rule lookup happens.
//! Anything that does not match a known key maps to [`Jurisdiction::Default`].

use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Jurisdiction {
    AndhraPradesh,
    ArunachalPradesh,
    Assam,
    Bihar,
    Chandigarh,
    Chhattisgarh,
    Delhi,
    Goa,
    Gujarat,
    Haryana,
    HimachalPradesh,
    JammuAndKashmir,
    Jharkhand,
    Karnataka,
    Kerala,
    MadhyaPradesh,
    Maharashtra,
    Manipur,
    Meghalaya,
    Mizoram,
    Nagaland,
    Odisha,
    Puducherry,
    Punjab,
    Rajasthan,
    Sikkim,
    TamilNadu,
    Telangana,
    Tripura,
    UttarPradesh,
    Uttarakhand,
    WestBengal,
    /// Fallback for unrecognized jurisdictions
    Default,
}

impl Jurisdiction {
    pub const ALL: [Jurisdiction; 32] = [
        Jurisdiction::AndhraPradesh,
        Jurisdiction::ArunachalPradesh,
        Jurisdiction::Assam,
        Jurisdiction::Bihar,
        Jurisdiction::Chandigarh,
        Jurisdiction::Chhattisgarh,
        Jurisdiction::Delhi,
        Jurisdiction::Goa,
        Jurisdiction::Gujarat,
        Jurisdiction::Haryana,
        Jurisdiction::HimachalPradesh,
        Jurisdiction::JammuAndKashmir,
        Jurisdiction::Jharkhand,
        Jurisdiction::Karnataka,
        Jurisdiction::Kerala,
        Jurisdiction::MadhyaPradesh,
        Jurisdiction::Maharashtra,
        Jurisdiction::Manipur,
        Jurisdiction::Meghalaya,
        Jurisdiction::Mizoram,
        Jurisdiction::Nagaland,
        Jurisdiction::Odisha,
        Jurisdiction::Puducherry,
        Jurisdiction::Punjab,
        Jurisdiction::Rajasthan,
        Jurisdiction::Sikkim,
        Jurisdiction::TamilNadu,
        Jurisdiction::Telangana,
        Jurisdiction::Tripura,
        Jurisdiction::UttarPradesh,
        Jurisdiction::Uttarakhand,
        Jurisdiction::WestBengal,
    ];

    /// Normalizes a free-text name into a lookup key.
    ///
    /// Lower-cases, trims, turns `&` into `and` and collapses every run of
    /// whitespace, underscores or hyphens into a single `-`.
    pub fn normalize_key(name: &str) -> String {
        let lowered = name.trim().to_lowercase().replace('&', " and ");

        lowered
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
            .filter(|part| !part.is_empty())
            .collect::<Vec<_>>()
            .join("-")
    }

    /// Resolves free text into a jurisdiction, falling back to `Default`
    pub fn from_name(name: &str) -> Self {
        Self::from_key(&Self::normalize_key(name)).unwrap_or(Jurisdiction::Default)
    }

    /// Looks up an already-normalized key, including historical aliases
    pub fn from_key(key: &str) -> Option<Self> {
        let jurisdiction = match key {
            "andhra-pradesh" => Jurisdiction::AndhraPradesh,
            "arunachal-pradesh" => Jurisdiction::ArunachalPradesh,
            "assam" => Jurisdiction::Assam,
            "bihar" => Jurisdiction::Bihar,
            "chandigarh" => Jurisdiction::Chandigarh,
            "chhattisgarh" | "chattisgarh" => Jurisdiction::Chhattisgarh,
            "delhi" | "new-delhi" | "nct-of-delhi" => Jurisdiction::Delhi,
            "goa" => Jurisdiction::Goa,
            "gujarat" => Jurisdiction::Gujarat,
            "haryana" => Jurisdiction::Haryana,
            "himachal-pradesh" => Jurisdiction::HimachalPradesh,
            "jammu-and-kashmir" | "jammu-kashmir" => Jurisdiction::JammuAndKashmir,
            "jharkhand" => Jurisdiction::Jharkhand,
            "karnataka" => Jurisdiction::Karnataka,
            "kerala" => Jurisdiction::Kerala,
            "madhya-pradesh" => Jurisdiction::MadhyaPradesh,
            "maharashtra" => Jurisdiction::Maharashtra,
            "manipur" => Jurisdiction::Manipur,
            "meghalaya" => Jurisdiction::Meghalaya,
            "mizoram" => Jurisdiction::Mizoram,
            "nagaland" => Jurisdiction::Nagaland,
            "odisha" | "orissa" => Jurisdiction::Odisha,
            "puducherry" | "pondicherry" => Jurisdiction::Puducherry,
            "punjab" => Jurisdiction::Punjab,
            "rajasthan" => Jurisdiction::Rajasthan,
            "sikkim" => Jurisdiction::Sikkim,
            "tamil-nadu" | "tamilnadu" => Jurisdiction::TamilNadu,
            "telangana" => Jurisdiction::Telangana,
            "tripura" => Jurisdiction::Tripura,
            "uttar-pradesh" => Jurisdiction::UttarPradesh,
            "uttarakhand" | "uttaranchal" => Jurisdiction::Uttarakhand,
            "west-bengal" => Jurisdiction::WestBengal,
            _ => return None,
        };

        Some(jurisdiction)
    }

    /// Canonical key, matching the serialized form
    pub fn key(&self) -> &'static str {
        match self {
            Jurisdiction::AndhraPradesh => "andhra-pradesh",
            Jurisdiction::ArunachalPradesh => "arunachal-pradesh",
            Jurisdiction::Assam => "assam",
            Jurisdiction::Bihar => "bihar",
            Jurisdiction::Chandigarh => "chandigarh",
            Jurisdiction::Chhattisgarh => "chhattisgarh",
            Jurisdiction::Delhi => "delhi",
            Jurisdiction::Goa => "goa",
            Jurisdiction::Gujarat => "gujarat",
            Jurisdiction::Haryana => "haryana",
            Jurisdiction::HimachalPradesh => "himachal-pradesh",
            Jurisdiction::JammuAndKashmir => "jammu-and-kashmir",
            Jurisdiction::Jharkhand => "jharkhand",
            Jurisdiction::Karnataka => "karnataka",
            Jurisdiction::Kerala => "kerala",
            Jurisdiction::MadhyaPradesh => "madhya-pradesh",
            Jurisdiction::Maharashtra => "maharashtra",
            Jurisdiction::Manipur => "manipur",
            Jurisdiction::Meghalaya => "meghalaya",
            Jurisdiction::Mizoram => "mizoram",
            Jurisdiction::Nagaland => "nagaland",
            Jurisdiction::Odisha => "odisha",
            Jurisdiction::Puducherry => "puducherry",
            Jurisdiction::Punjab => "punjab",
            Jurisdiction::Rajasthan => "rajasthan",
            Jurisdiction::Sikkim => "sikkim",
            Jurisdiction::TamilNadu => "tamil-nadu",
            Jurisdiction::Telangana => "telangana",
            Jurisdiction::Tripura => "tripura",
            Jurisdiction::UttarPradesh => "uttar-pradesh",
            Jurisdiction::Uttarakhand => "uttarakhand",
            Jurisdiction::WestBengal => "west-bengal",
            Jurisdiction::Default => "default",
        }
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl From<&str> for Jurisdiction {
    fn from(name: &str) -> Self {
        Jurisdiction::from_name(name)
    }
}
