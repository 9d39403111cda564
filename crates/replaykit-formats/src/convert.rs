use std::error::Error as StdError;

use thiserror::Error;
use tracing::{debug, warn};

use crate::errors::RegistryError;
use crate::model::{Format, GameVersion};
use crate::registry::FormatRegistry;

/// Byte-level replay decoder/encoder.
///
/// Implementations receive the [`Format`] exactly as selected by the caller
/// and are the only authority on how each format is read and written.
pub trait ConversionEngine {
    type Error: StdError + Send + Sync + 'static;

    fn load(&mut self, data: &[u8], format: Format) -> Result<(), Self::Error>;

    /// Game version of the currently loaded replay. `Any` when the source
    /// format does not record one.
    fn game_version(&self) -> GameVersion;

    fn save(&self, format: Format) -> Result<Vec<u8>, Self::Error>;
}

#[derive(Debug, Error)]
pub enum ConvertError<E>
where
    E: StdError + 'static,
{
    #[error(transparent)]
    Registry(#[from] RegistryError),

    #[error("conversion engine failed for {format}: {source}")]
    Engine {
        format: Format,
        #[source]
        source: E,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedReplay {
    pub format: Format,
    pub file_name: String,
    pub bytes: Vec<u8>,
}

/// Routes load and save requests to an engine after checking them against
/// the registry.
pub struct Converter<'a, E> {
    registry: &'a FormatRegistry,
    engine: E,
    loaded: Option<Format>,
}

impl<'a, E: ConversionEngine> Converter<'a, E> {
    pub fn new(registry: &'a FormatRegistry, engine: E) -> Self {
        Self {
            registry,
            engine,
            loaded: None,
        }
    }

    pub fn load(&mut self, data: &[u8], format: Format) -> Result<(), ConvertError<E::Error>> {
        self.loaded = None;
        self.engine
            .load(data, format)
            .map_err(|source| ConvertError::Engine { format, source })?;
        debug!(
            format = self.registry.describe(format).display_name,
            bytes = data.len(),
            game_version = %self.engine.game_version(),
            "replay loaded"
        );
        self.loaded = Some(format);
        Ok(())
    }

    /// Format of the last successfully loaded replay.
    pub fn loaded_format(&self) -> Option<Format> {
        self.loaded
    }

    /// Encodes the loaded replay as `format`.
    ///
    /// Fails with [`RegistryError::IncompatibleVersion`] when the replay's game
    /// version is not accepted by the target format. A replay without a
    /// recorded version can be written in any format.
    pub fn export(
        &self,
        stem: &str,
        format: Format,
    ) -> Result<ExportedReplay, ConvertError<E::Error>> {
        let replay_version = self.engine.game_version();
        if !replay_version.is_wildcard() {
            self.registry.check_compatible(format, replay_version)?;
        }

        let descriptor = self.registry.describe(format);
        if descriptor.is_legacy {
            warn!(
                format = descriptor.display_name,
                "exporting to a legacy replay format"
            );
        }

        let bytes = self
            .engine
            .save(format)
            .map_err(|source| ConvertError::Engine { format, source })?;

        Ok(ExportedReplay {
            format,
            file_name: self.registry.export_file_name(stem, format),
            bytes,
        })
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_engine(self) -> E {
        self.engine
    }
}

/// Loads `data` as `from` and writes it back out as `to`.
pub fn convert<E: ConversionEngine>(
    registry: &FormatRegistry,
    engine: E,
    data: &[u8],
    from: Format,
    to: Format,
    stem: &str,
) -> Result<ExportedReplay, ConvertError<E::Error>> {
    let mut converter = Converter::new(registry, engine);
    converter.load(data, from)?;
    converter.export(stem, to)
}
