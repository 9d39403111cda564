pub mod convert;
pub mod descriptor;
pub mod errors;
pub mod model;
pub mod preferences;
mod registry;

pub use convert::{convert, ConversionEngine, ConvertError, Converter, ExportedReplay};
pub use descriptor::{FormatDescriptor, EXTENSIONLESS_FORMATS};
pub use errors::RegistryError;
pub use model::{Format, GameVersion};
pub use preferences::{Preferences, PreferencesError};
pub use registry::FormatRegistry;

#[cfg(test)]
mod tests;
