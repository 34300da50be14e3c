use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Transmission medium of a link. Stored as uppercase text in the `links`
/// table (`meio` column) and restricted to these three values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MediaKind {
    #[serde(rename = "FIBRA")]
    Fibra,
    #[serde(rename = "RADIO")]
    Radio,
    #[serde(rename = "CABO")]
    Cabo,
}

#[derive(Debug, Error)]
#[error("unknown media kind: {0}")]
pub struct ParseMediaKindError(String);

impl FromStr for MediaKind {
    type Err = ParseMediaKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FIBRA" => Ok(MediaKind::Fibra),
            "RADIO" => Ok(MediaKind::Radio),
            "CABO" => Ok(MediaKind::Cabo),
            other => Err(ParseMediaKindError(other.to_owned())),
        }
    }
}

impl fmt::Display for MediaKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            MediaKind::Fibra => "FIBRA",
            MediaKind::Radio => "RADIO",
            MediaKind::Cabo => "CABO",
        };
        f.write_str(text)
    }
}

/// Role assigned to an authenticated user, mapped to the `user_role`
/// Postgres enum. Authorization only; the identity itself comes from the
/// external auth service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "user_role", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn media_kind_accepts_only_the_three_values() {
        assert_eq!("FIBRA".parse::<MediaKind>().unwrap(), MediaKind::Fibra);
        assert_eq!("RADIO".parse::<MediaKind>().unwrap(), MediaKind::Radio);
        assert_eq!("CABO".parse::<MediaKind>().unwrap(), MediaKind::Cabo);
        assert!("fibra".parse::<MediaKind>().is_err());
        assert!("".parse::<MediaKind>().is_err());
        assert!("SATELITE".parse::<MediaKind>().is_err());
    }

    #[test]
    fn media_kind_round_trips_through_display() {
        for kind in [MediaKind::Fibra, MediaKind::Radio, MediaKind::Cabo] {
            assert_eq!(kind.to_string().parse::<MediaKind>().unwrap(), kind);
        }
    }
}
