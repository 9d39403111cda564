use serde::Serialize;

use crate::model::{Format, GameVersion};

/// Presentation metadata for one replay format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FormatDescriptor {
    pub format: Format,
    pub display_name: &'static str,
    /// Canonical extension without the leading dot. Empty when the format has none.
    pub extension: &'static str,
    pub min_game_version: GameVersion,
    /// Deprecated or alternate encoding of an otherwise equivalent format.
    /// Defaults to `false`.
    pub is_legacy: bool,
}

impl FormatDescriptor {
    pub const fn new(
        format: Format,
        display_name: &'static str,
        extension: &'static str,
        min_game_version: GameVersion,
    ) -> Self {
        Self {
            format,
            display_name,
            extension,
            min_game_version,
            is_legacy: false,
        }
    }

    pub const fn legacy(self) -> Self {
        Self {
            is_legacy: true,
            ..self
        }
    }

    pub fn has_extension(&self) -> bool {
        !self.extension.is_empty()
    }
}

/// Formats with no canonical file extension.
pub const EXTENSIONLESS_FORMATS: &[Format] = &[Format::YBot1];

const V2113: GameVersion = GameVersion::Version2113;
const V2206: GameVersion = GameVersion::Version2206;

pub(crate) const CANONICAL_DESCRIPTORS: &[FormatDescriptor] = &[
    FormatDescriptor::new(Format::OmegaBot3, "OmegaBot 3", "replay", V2113),
    FormatDescriptor::new(Format::OmegaBot2, "OmegaBot 2", "replay", V2113).legacy(),
    FormatDescriptor::new(Format::Url, "OmegaBot 1", "replay", V2113).legacy(),
    FormatDescriptor::new(Format::Tasbot, "TASBot", "json", V2113),
    FormatDescriptor::new(Format::MhrBinary, "MHR (Binary)", "mhr", V2113),
    FormatDescriptor::new(Format::MhrJson, "MHR (Json)", "mhr.json", V2113),
    FormatDescriptor::new(Format::EchoOld, "Echo (Old, Json)", "echo", V2113).legacy(),
    FormatDescriptor::new(Format::EchoNewJson, "Echo (New, Json)", "echo", V2113),
    FormatDescriptor::new(Format::EchoNewBinary, "Echo (New, Binary)", "echo", V2113),
    FormatDescriptor::new(Format::ZBot, "zBot", "zbf", V2113).legacy(),
    FormatDescriptor::new(Format::KdBot, "KD-Bot", "kd", V2113).legacy(),
    FormatDescriptor::new(Format::Rush, "Rush", "rsh", V2113).legacy(),
    FormatDescriptor::new(Format::ReplayBot, "ReplayBot", "replay", V2113).legacy(),
    FormatDescriptor::new(Format::Fembot, "Fembot", "freplay", V2113).legacy(),
    FormatDescriptor::new(Format::XBot, "xBot", "xbot", V2113).legacy(),
    FormatDescriptor::new(Format::YBot1, "yBot 1", "", V2113).legacy(),
    FormatDescriptor::new(Format::YBot2, "yBot 2", "ybot", V2206),
    FormatDescriptor::new(Format::XdBot, "XDBot", "xd", V2206),
    FormatDescriptor::new(Format::Gdr, "GDR", "gdr", V2206),
    FormatDescriptor::new(Format::GdrJson, "GDR (Json)", "gdr.json", V2206),
    FormatDescriptor::new(Format::Silicate, "Silicate", "slc", V2206),
    FormatDescriptor::new(Format::PlainText, "Plain Text", "txt", GameVersion::Any),
];
