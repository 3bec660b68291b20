use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::UnknownCode;

/// Race distance and stroke combination, stored by its short code (e.g. `100FR`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum Event {
    #[serde(rename = "50FR")]
    Free50,
    #[serde(rename = "100FR")]
    Free100,
    #[serde(rename = "200FR")]
    Free200,
    #[serde(rename = "400FR")]
    Free400,
    #[serde(rename = "800FR")]
    Free800,
    #[serde(rename = "1500FR")]
    Free1500,
    #[serde(rename = "50BK")]
    Back50,
    #[serde(rename = "100BK")]
    Back100,
    #[serde(rename = "200BK")]
    Back200,
    #[serde(rename = "50BR")]
    Breast50,
    #[serde(rename = "100BR")]
    Breast100,
    #[serde(rename = "200BR")]
    Breast200,
    #[serde(rename = "50FL")]
    Fly50,
    #[serde(rename = "100FL")]
    Fly100,
    #[serde(rename = "200FL")]
    Fly200,
    #[serde(rename = "200IM")]
    Medley200,
    #[serde(rename = "400IM")]
    Medley400,
}

impl Event {
    pub fn all() -> &'static [Event] {
        &[
            Self::Free50,
            Self::Free100,
            Self::Free200,
            Self::Free400,
            Self::Free800,
            Self::Free1500,
            Self::Back50,
            Self::Back100,
            Self::Back200,
            Self::Breast50,
            Self::Breast100,
            Self::Breast200,
            Self::Fly50,
            Self::Fly100,
            Self::Fly200,
            Self::Medley200,
            Self::Medley400,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Free50 => "50FR",
            Self::Free100 => "100FR",
            Self::Free200 => "200FR",
            Self::Free400 => "400FR",
            Self::Free800 => "800FR",
            Self::Free1500 => "1500FR",
            Self::Back50 => "50BK",
            Self::Back100 => "100BK",
            Self::Back200 => "200BK",
            Self::Breast50 => "50BR",
            Self::Breast100 => "100BR",
            Self::Breast200 => "200BR",
            Self::Fly50 => "50FL",
            Self::Fly100 => "100FL",
            Self::Fly200 => "200FL",
            Self::Medley200 => "200IM",
            Self::Medley400 => "400IM",
        }
    }
}

impl std::str::FromStr for Event {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|event| event.as_str() == s)
            .ok_or_else(|| UnknownCode {
                kind: "event code",
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_all_codes_round_trip_through_from_str() {
        assert_eq!(Event::all().len(), 17);
        for event in Event::all() {
            assert_eq!(Event::from_str(event.as_str()).unwrap(), *event);
        }
    }

    #[test]
    fn test_unknown_codes_are_rejected() {
        assert!(Event::from_str("100fr").is_err());
        assert!(Event::from_str("25FR").is_err());
        assert!(Event::from_str("").is_err());

        let err = "400MED".parse::<Event>().unwrap_err();
        assert_eq!(err.to_string(), "unknown event code: '400MED'");
    }

    #[test]
    fn test_serde_uses_short_codes() {
        let json = serde_json::to_string(&Event::Medley200).unwrap();
        assert_eq!(json, "\"200IM\"");
    }
}
