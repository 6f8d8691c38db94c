use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::{fmt, str::FromStr};

use crate::error::SdkError;

/// Network identifier byte used by Sirius chain nodes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum NetworkType {
    MainNet = 0xb8,
    TestNet = 0xa8,
    Private = 0xc8,
    PrivateTest = 0xb0,
    Mijin = 0x60,
    MijinTest = 0x90,
}

impl NetworkType {
    pub const ALL: [NetworkType; 6] = [
        NetworkType::MainNet,
        NetworkType::TestNet,
        NetworkType::Private,
        NetworkType::PrivateTest,
        NetworkType::Mijin,
        NetworkType::MijinTest,
    ];

    pub fn id(self) -> u8 {
        self as u8
    }

    pub fn name(self) -> &'static str {
        match self {
            NetworkType::MainNet => "MainNet",
            NetworkType::TestNet => "TestNet",
            NetworkType::Private => "Private",
            NetworkType::PrivateTest => "PrivateTest",
            NetworkType::Mijin => "Mijin",
            NetworkType::MijinTest => "MijinTest",
        }
    }

    pub fn from_id(id: u8) -> Option<Self> {
        Self::ALL.into_iter().find(|network| network.id() == id)
    }
}

impl fmt::Display for NetworkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for NetworkType {
    type Err = SdkError;

    /// Accepts a network name (case-insensitive) or its numeric identifier
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(id) = trimmed.parse::<u8>() {
            return Self::from_id(id)
                .ok_or_else(|| SdkError::ConfigError(format!("Unknown network id: {id}")));
        }

        Self::ALL
            .into_iter()
            .find(|network| network.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| SdkError::ConfigError(format!("Unknown network type: {trimmed}")))
    }
}

impl Serialize for NetworkType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for NetworkType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Name(String),
            Id(u8),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Name(name) => name.parse().map_err(serde::de::Error::custom),
            Repr::Id(id) => Self::from_id(id)
                .ok_or_else(|| serde::de::Error::custom(format!("Unknown network id: {id}"))),
        }
    }
}
