use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::UnknownCode;

/// Pool length a meet is swum in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
pub enum CourseType {
    /// Short course
    #[serde(rename = "25m")]
    Short,
    /// Long course
    #[serde(rename = "50m")]
    Long,
}

impl CourseType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Short => "25m",
            Self::Long => "50m",
        }
    }
}

impl std::str::FromStr for CourseType {
    type Err = UnknownCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "25m" => Ok(Self::Short),
            "50m" => Ok(Self::Long),
            _ => Err(UnknownCode {
                kind: "course type",
                value: s.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for CourseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
