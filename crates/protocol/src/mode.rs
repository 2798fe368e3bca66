use serde::{Deserialize, Serialize};

/// Classified travel activity for a leg or a GPS sample.
///
/// The wire form is the SCREAMING_SNAKE token the activity recognizer
/// emits (`"ON_BICYCLE"`, `"IN_VEHICLE"`, …). Parsing is total: any token
/// outside the known set maps to [`ActivityMode::Other`] so that a new or
/// misspelled mode degrades to the fallback style instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ActivityMode {
    #[serde(rename = "ON_BICYCLE")]
    OnBicycle,
    #[serde(rename = "WALKING")]
    Walking,
    #[serde(rename = "ON_FOOT")]
    OnFoot,
    #[serde(rename = "RUNNING")]
    Running,
    #[serde(rename = "IN_VEHICLE")]
    InVehicle,
    #[serde(rename = "TRAIN")]
    Train,
    #[serde(rename = "SUBWAY")]
    Subway,
    #[serde(rename = "TRAM")]
    Tram,
    #[serde(rename = "FERRY")]
    Ferry,
    #[serde(rename = "BUS")]
    Bus,
    #[serde(rename = "TILTING")]
    Tilting,
    #[serde(rename = "STILL")]
    Still,
    #[serde(rename = "UNKNOWN")]
    Unknown,
    #[serde(other, rename = "OTHER")]
    Other,
}

impl ActivityMode {
    /// Parse a mode token. Unrecognized tokens become `Other`.
    pub fn from_token(token: &str) -> Self {
        match token {
            "ON_BICYCLE" => Self::OnBicycle,
            "WALKING" => Self::Walking,
            "ON_FOOT" => Self::OnFoot,
            "RUNNING" => Self::Running,
            "IN_VEHICLE" => Self::InVehicle,
            "TRAIN" => Self::Train,
            "SUBWAY" => Self::Subway,
            "TRAM" => Self::Tram,
            "FERRY" => Self::Ferry,
            "BUS" => Self::Bus,
            "TILTING" => Self::Tilting,
            "STILL" => Self::Still,
            "UNKNOWN" => Self::Unknown,
            _ => Self::Other,
        }
    }

    /// The canonical wire token.
    pub fn as_token(self) -> &'static str {
        match self {
            Self::OnBicycle => "ON_BICYCLE",
            Self::Walking => "WALKING",
            Self::OnFoot => "ON_FOOT",
            Self::Running => "RUNNING",
            Self::InVehicle => "IN_VEHICLE",
            Self::Train => "TRAIN",
            Self::Subway => "SUBWAY",
            Self::Tram => "TRAM",
            Self::Ferry => "FERRY",
            Self::Bus => "BUS",
            Self::Tilting => "TILTING",
            Self::Still => "STILL",
            Self::Unknown => "UNKNOWN",
            Self::Other => "OTHER",
        }
    }
}

impl std::fmt::Display for ActivityMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_token())
    }
}
