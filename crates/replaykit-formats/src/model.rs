use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::RegistryError;

/// Replay encodings understood by the conversion engine.
///
/// The discriminant is the value exchanged with the engine and stored in
/// preference files. The first eight match the engine's own numbering; later
/// formats are appended and existing codes never move. Variants are declared in
/// presentation order, which is why codes are not sequential here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
#[repr(u32)]
pub enum Format {
    OmegaBot3 = 0,
    OmegaBot2 = 7,
    /// URL-encoded OmegaBot 1 replays.
    Url = 6,
    Tasbot = 2,
    MhrBinary = 3,
    MhrJson = 1,
    EchoOld = 8,
    EchoNewJson = 9,
    EchoNewBinary = 10,
    ZBot = 4,
    KdBot = 11,
    Rush = 12,
    ReplayBot = 13,
    Fembot = 14,
    XBot = 15,
    YBot1 = 16,
    YBot2 = 17,
    XdBot = 18,
    Gdr = 19,
    GdrJson = 20,
    Silicate = 21,
    PlainText = 5,
}

impl Format {
    /// Every format in presentation order. Ordering by [`Ord`] follows codes instead.
    pub const ALL: [Format; 22] = [
        Format::OmegaBot3,
        Format::OmegaBot2,
        Format::Url,
        Format::Tasbot,
        Format::MhrBinary,
        Format::MhrJson,
        Format::EchoOld,
        Format::EchoNewJson,
        Format::EchoNewBinary,
        Format::ZBot,
        Format::KdBot,
        Format::Rush,
        Format::ReplayBot,
        Format::Fembot,
        Format::XBot,
        Format::YBot1,
        Format::YBot2,
        Format::XdBot,
        Format::Gdr,
        Format::GdrJson,
        Format::Silicate,
        Format::PlainText,
    ];

    pub fn code(self) -> u32 {
        self as u32
    }

    /// Position in [`Format::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            Format::OmegaBot3 => 0,
            Format::OmegaBot2 => 1,
            Format::Url => 2,
            Format::Tasbot => 3,
            Format::MhrBinary => 4,
            Format::MhrJson => 5,
            Format::EchoOld => 6,
            Format::EchoNewJson => 7,
            Format::EchoNewBinary => 8,
            Format::ZBot => 9,
            Format::KdBot => 10,
            Format::Rush => 11,
            Format::ReplayBot => 12,
            Format::Fembot => 13,
            Format::XBot => 14,
            Format::YBot1 => 15,
            Format::YBot2 => 16,
            Format::XdBot => 17,
            Format::Gdr => 18,
            Format::GdrJson => 19,
            Format::Silicate => 20,
            Format::PlainText => 21,
        }
    }

    /// Stable command-line name.
    pub fn slug(self) -> &'static str {
        match self {
            Format::OmegaBot3 => "omegabot3",
            Format::OmegaBot2 => "omegabot2",
            Format::Url => "url",
            Format::Tasbot => "tasbot",
            Format::MhrBinary => "mhr-binary",
            Format::MhrJson => "mhr-json",
            Format::EchoOld => "echo-old",
            Format::EchoNewJson => "echo-new-json",
            Format::EchoNewBinary => "echo-new-binary",
            Format::ZBot => "zbot",
            Format::KdBot => "kdbot",
            Format::Rush => "rush",
            Format::ReplayBot => "replaybot",
            Format::Fembot => "fembot",
            Format::XBot => "xbot",
            Format::YBot1 => "ybot1",
            Format::YBot2 => "ybot2",
            Format::XdBot => "xdbot",
            Format::Gdr => "gdr",
            Format::GdrJson => "gdr-json",
            Format::Silicate => "silicate",
            Format::PlainText => "plain-text",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.slug())
    }
}

impl From<Format> for u32 {
    fn from(value: Format) -> Self {
        value.code()
    }
}

impl TryFrom<u32> for Format {
    type Error = RegistryError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        let format = match value {
            0 => Format::OmegaBot3,
            1 => Format::MhrJson,
            2 => Format::Tasbot,
            3 => Format::MhrBinary,
            4 => Format::ZBot,
            5 => Format::PlainText,
            6 => Format::Url,
            7 => Format::OmegaBot2,
            8 => Format::EchoOld,
            9 => Format::EchoNewJson,
            10 => Format::EchoNewBinary,
            11 => Format::KdBot,
            12 => Format::Rush,
            13 => Format::ReplayBot,
            14 => Format::Fembot,
            15 => Format::XBot,
            16 => Format::YBot1,
            17 => Format::YBot2,
            18 => Format::XdBot,
            19 => Format::Gdr,
            20 => Format::GdrJson,
            21 => Format::Silicate,
            other => return Err(RegistryError::UnknownFormatValue(other)),
        };
        Ok(format)
    }
}

impl FromStr for Format {
    type Err = RegistryError;

    /// Accepts a slug (case-insensitive, `_` or `-` separated) or an integer code.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<u32>() {
            return Format::try_from(code);
        }

        let normalized = trimmed.to_ascii_lowercase().replace('_', "-");
        Format::ALL
            .iter()
            .copied()
            .find(|format| format.slug() == normalized)
            .ok_or_else(|| RegistryError::UnknownFormatName(trimmed.to_string()))
    }
}

/// Data-format epoch of the game a replay was recorded for.
///
/// `Any` is a wildcard for formats that do not depend on the game version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
#[repr(u32)]
pub enum GameVersion {
    Any = 0,
    Version2113 = 1,
    Version2206 = 2,
}

impl GameVersion {
    pub const ALL: [GameVersion; 3] = [
        GameVersion::Any,
        GameVersion::Version2113,
        GameVersion::Version2206,
    ];

    pub fn code(self) -> u32 {
        self as u32
    }

    pub fn as_str(self) -> &'static str {
        match self {
            GameVersion::Any => "Any",
            GameVersion::Version2113 => "2.113",
            GameVersion::Version2206 => "2.206",
        }
    }

    pub fn is_wildcard(self) -> bool {
        matches!(self, GameVersion::Any)
    }

    /// Whether a format declared for `self` can be used with `target`.
    ///
    /// Non-wildcard epochs are distinct and only match themselves.
    pub fn accepts(self, target: GameVersion) -> bool {
        self.is_wildcard() || self == target
    }
}

impl fmt::Display for GameVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<u32> for GameVersion {
    type Error = RegistryError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        GameVersion::ALL
            .get(value as usize)
            .copied()
            .ok_or_else(|| RegistryError::UnknownGameVersion(value.to_string()))
    }
}

impl FromStr for GameVersion {
    type Err = RegistryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "any" | "*" => Ok(GameVersion::Any),
            "2.113" | "2113" => Ok(GameVersion::Version2113),
            "2.206" | "2206" => Ok(GameVersion::Version2206),
            other => Err(RegistryError::UnknownGameVersion(other.to_string())),
        }
    }
}

impl TryFrom<String> for GameVersion {
    type Error = RegistryError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<GameVersion> for String {
    fn from(value: GameVersion) -> Self {
        value.as_str().to_string()
    }
}
