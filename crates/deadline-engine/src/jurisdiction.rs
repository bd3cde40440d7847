//! Jurisdiction types for lien deadline calculation
//!
//! Covers the 50 states plus the District of Columbia. Claim inputs
//! (project type, claimant role) live here as well since every rule
//! lookup is keyed on them.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeadlineError;

/// US state codes (plus DC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum State {
    AL,
    AK,
    AZ,
    AR,
    CA,
    CO,
    CT,
    DE,
    DC,
    FL,
    GA,
    HI,
    ID,
    IL,
    IN,
    IA,
    KS,
    KY,
    LA,
    ME,
    MD,
    MA,
    MI,
    MN,
    MS,
    MO,
    MT,
    NE,
    NV,
    NH,
    NJ,
    NM,
    NY,
    NC,
    ND,
    OH,
    OK,
    OR,
    PA,
    RI,
    SC,
    SD,
    TN,
    TX,
    UT,
    VT,
    VA,
    WA,
    WV,
    WI,
    WY,
}

const ALL_STATES: [State; 51] = [
    State::AL,
    State::AK,
    State::AZ,
    State::AR,
    State::CA,
    State::CO,
    State::CT,
    State::DE,
    State::DC,
    State::FL,
    State::GA,
    State::HI,
    State::ID,
    State::IL,
    State::IN,
    State::IA,
    State::KS,
    State::KY,
    State::LA,
    State::ME,
    State::MD,
    State::MA,
    State::MI,
    State::MN,
    State::MS,
    State::MO,
    State::MT,
    State::NE,
    State::NV,
    State::NH,
    State::NJ,
    State::NM,
    State::NY,
    State::NC,
    State::ND,
    State::OH,
    State::OK,
    State::OR,
    State::PA,
    State::RI,
    State::SC,
    State::SD,
    State::TN,
    State::TX,
    State::UT,
    State::VT,
    State::VA,
    State::WA,
    State::WV,
    State::WI,
    State::WY,
];

impl State {
    /// Every jurisdiction, alphabetical by name
    pub fn all() -> &'static [State] {
        &ALL_STATES
    }

    /// Get the full state name
    pub fn name(&self) -> &'static str {
        match self {
            State::AL => "Alabama",
            State::AK => "Alaska",
            State::AZ => "Arizona",
            State::AR => "Arkansas",
            State::CA => "California",
            State::CO => "Colorado",
            State::CT => "Connecticut",
            State::DE => "Delaware",
            State::DC => "District of Columbia",
            State::FL => "Florida",
            State::GA => "Georgia",
            State::HI => "Hawaii",
            State::ID => "Idaho",
            State::IL => "Illinois",
            State::IN => "Indiana",
            State::IA => "Iowa",
            State::KS => "Kansas",
            State::KY => "Kentucky",
            State::LA => "Louisiana",
            State::ME => "Maine",
            State::MD => "Maryland",
            State::MA => "Massachusetts",
            State::MI => "Michigan",
            State::MN => "Minnesota",
            State::MS => "Mississippi",
            State::MO => "Missouri",
            State::MT => "Montana",
            State::NE => "Nebraska",
            State::NV => "Nevada",
            State::NH => "New Hampshire",
            State::NJ => "New Jersey",
            State::NM => "New Mexico",
            State::NY => "New York",
            State::NC => "North Carolina",
            State::ND => "North Dakota",
            State::OH => "Ohio",
            State::OK => "Oklahoma",
            State::OR => "Oregon",
            State::PA => "Pennsylvania",
            State::RI => "Rhode Island",
            State::SC => "South Carolina",
            State::SD => "South Dakota",
            State::TN => "Tennessee",
            State::TX => "Texas",
            State::UT => "Utah",
            State::VT => "Vermont",
            State::VA => "Virginia",
            State::WA => "Washington",
            State::WV => "West Virginia",
            State::WI => "Wisconsin",
            State::WY => "Wyoming",
        }
    }

    /// Two-letter postal code
    pub fn code(&self) -> String {
        self.to_string()
    }

    /// Parse from state code or name (case-insensitive, surrounding whitespace ignored)
    pub fn parse_code(s: &str) -> Option<Self> {
        let normalized = s.trim().to_uppercase();
        ALL_STATES.iter().copied().find(|state| {
            format!("{:?}", state) == normalized || state.name().to_uppercase() == normalized
        })
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Kind of construction project the materials were furnished to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Residential,
    #[default]
    Commercial,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Residential => "residential",
            ProjectType::Commercial => "commercial",
        }
    }
}

impl FromStr for ProjectType {
    type Err = DeadlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "residential" => Ok(ProjectType::Residential),
            "commercial" => Ok(ProjectType::Commercial),
            _ => Err(DeadlineError::UnknownProjectType(s.to_string())),
        }
    }
}

/// Position of the lien claimant in the contracting chain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClaimantRole {
    #[default]
    Supplier,
    Subcontractor,
}

impl ClaimantRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimantRole::Supplier => "supplier",
            ClaimantRole::Subcontractor => "subcontractor",
        }
    }
}

impl FromStr for ClaimantRole {
    type Err = DeadlineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "supplier" => Ok(ClaimantRole::Supplier),
            "subcontractor" => Ok(ClaimantRole::Subcontractor),
            _ => Err(DeadlineError::UnknownRole(s.to_string())),
        }
    }
}
