//! Constrained attributes of a mapping rule.
//!
//! Both enums carry an explicit empty variant because a spreadsheet cell may
//! be left blank. Parsing trims and ignores case; anything else is rejected.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FabricType {
    Knit,
    Woven,
    #[default]
    Unspecified,
}

impl FabricType {
    pub fn code(&self) -> &'static str {
        match self {
            FabricType::Knit => "knit",
            FabricType::Woven => "woven",
            FabricType::Unspecified => "",
        }
    }

    pub fn all() -> Vec<FabricType> {
        vec![FabricType::Knit, FabricType::Woven]
    }
}

impl FromStr for FabricType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "knit" => Ok(FabricType::Knit),
            "woven" => Ok(FabricType::Woven),
            "" => Ok(FabricType::Unspecified),
            other => Err(format!("소재타입은 knit 또는 woven이어야 합니다: '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Gender {
    Men,
    Women,
    #[default]
    Unspecified,
}

impl Gender {
    pub fn code(&self) -> &'static str {
        match self {
            Gender::Men => "men",
            Gender::Women => "women",
            Gender::Unspecified => "",
        }
    }

    pub fn all() -> Vec<Gender> {
        vec![Gender::Men, Gender::Women]
    }
}

impl FromStr for Gender {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "men" => Ok(Gender::Men),
            "women" => Ok(Gender::Women),
            "" => Ok(Gender::Unspecified),
            other => Err(format!("성별은 men 또는 women이어야 합니다: '{}'", other)),
        }
    }
}

macro_rules! code_serde {
    ($ty:ty) => {
        impl Serialize for $ty {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.code())
            }
        }

        impl<'de> Deserialize<'de> for $ty {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = Option::<String>::deserialize(deserializer)?.unwrap_or_default();
                raw.parse().map_err(serde::de::Error::custom)
            }
        }

        impl std::fmt::Display for $ty {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.code())
            }
        }
    };
}

code_serde!(FabricType);
code_serde!(Gender);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient() {
        assert_eq!(" Knit ".parse::<FabricType>(), Ok(FabricType::Knit));
        assert_eq!("".parse::<FabricType>(), Ok(FabricType::Unspecified));
        assert!("denim".parse::<FabricType>().is_err());
        assert_eq!("WOMEN".parse::<Gender>(), Ok(Gender::Women));
        assert!("kids".parse::<Gender>().is_err());
    }

    #[test]
    fn test_serde_codes() {
        assert_eq!(serde_json::to_string(&FabricType::Unspecified).unwrap(), "\"\"");
        assert_eq!(serde_json::from_str::<Gender>("null").unwrap(), Gender::Unspecified);
        assert_eq!(serde_json::from_str::<Gender>("\"men\"").unwrap(), Gender::Men);
    }
}
