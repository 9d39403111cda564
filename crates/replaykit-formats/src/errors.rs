use thiserror::Error;

use crate::model::{Format, GameVersion};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    #[error("no descriptor registered for format {format} (code {})", .format.code())]
    MissingDescriptor { format: Format },

    #[error("format {format} has more than one descriptor")]
    DuplicateDescriptor { format: Format },

    #[error("display name '{display_name}' is shared by {first} and {second}")]
    DuplicateDisplayName {
        display_name: String,
        first: Format,
        second: Format,
    },

    #[error("format {format} has an empty display name")]
    EmptyDisplayName { format: Format },

    #[error("format {format} has invalid extension '{extension}': {reason}")]
    InvalidExtension {
        format: Format,
        extension: String,
        reason: &'static str,
    },

    #[error("unknown format value {0}")]
    UnknownFormatValue(u32),

    #[error("unknown format name '{0}'")]
    UnknownFormatName(String),

    #[error("unknown game version '{0}'")]
    UnknownGameVersion(String),

    #[error("{format} requires game version {required}, replay targets {target}")]
    IncompatibleVersion {
        format: Format,
        required: GameVersion,
        target: GameVersion,
    },
}
