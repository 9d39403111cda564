use std::collections::HashMap;
use std::path::Path;

use tracing::debug;

use crate::descriptor::{FormatDescriptor, CANONICAL_DESCRIPTORS, EXTENSIONLESS_FORMATS};
use crate::errors::RegistryError;
use crate::model::{Format, GameVersion};

/// Immutable lookup table from [`Format`] to its [`FormatDescriptor`].
///
/// Construction checks that every format has exactly one descriptor and that
/// display names are unique, so lookups afterwards cannot fail.
#[derive(Debug, Clone)]
pub struct FormatRegistry {
    descriptors: Vec<FormatDescriptor>,
}

impl FormatRegistry {
    /// Builds the registry from the built-in descriptor table.
    pub fn canonical() -> Result<Self, RegistryError> {
        Self::from_entries(CANONICAL_DESCRIPTORS.iter().copied())
    }

    pub fn from_entries<I>(entries: I) -> Result<Self, RegistryError>
    where
        I: IntoIterator<Item = FormatDescriptor>,
    {
        let mut slots: Vec<Option<FormatDescriptor>> = vec![None; Format::ALL.len()];
        // Keyed case-insensitively, matching `find_by_display_name`.
        let mut names: HashMap<String, Format> = HashMap::new();

        for descriptor in entries {
            validate_descriptor(&descriptor)?;

            let slot = &mut slots[descriptor.format.index()];
            if slot.is_some() {
                return Err(RegistryError::DuplicateDescriptor {
                    format: descriptor.format,
                });
            }

            let name_key = descriptor.display_name.trim().to_ascii_lowercase();
            if let Some(&first) = names.get(&name_key) {
                return Err(RegistryError::DuplicateDisplayName {
                    display_name: descriptor.display_name.to_string(),
                    first,
                    second: descriptor.format,
                });
            }
            names.insert(name_key, descriptor.format);
            *slot = Some(descriptor);
        }

        let descriptors = Format::ALL
            .iter()
            .zip(slots)
            .map(|(&format, slot)| slot.ok_or(RegistryError::MissingDescriptor { format }))
            .collect::<Result<Vec<_>, _>>()?;

        debug!(formats = descriptors.len(), "format registry constructed");

        Ok(Self { descriptors })
    }

    pub fn describe(&self, format: Format) -> &FormatDescriptor {
        &self.descriptors[format.index()]
    }

    pub fn is_compatible(&self, format: Format, target: GameVersion) -> bool {
        self.describe(format).min_game_version.accepts(target)
    }

    /// Like [`is_compatible`](Self::is_compatible) but reports the mismatch.
    pub fn check_compatible(
        &self,
        format: Format,
        target: GameVersion,
    ) -> Result<(), RegistryError> {
        let required = self.describe(format).min_game_version;
        if required.accepts(target) {
            Ok(())
        } else {
            Err(RegistryError::IncompatibleVersion {
                format,
                required,
                target,
            })
        }
    }

    /// Canonical extension, or an empty string for extensionless formats.
    pub fn extension_for(&self, format: Format) -> &'static str {
        self.describe(format).extension
    }

    /// Every format in declaration order.
    pub fn all_formats(&self) -> &'static [Format] {
        &Format::ALL
    }

    pub fn descriptors(&self) -> &[FormatDescriptor] {
        &self.descriptors
    }

    pub fn compatible_formats(
        &self,
        target: GameVersion,
    ) -> impl Iterator<Item = &FormatDescriptor> + '_ {
        self.descriptors
            .iter()
            .filter(move |descriptor| descriptor.min_game_version.accepts(target))
    }

    pub fn find_by_display_name(&self, name: &str) -> Option<Format> {
        let name = name.trim();
        self.descriptors
            .iter()
            .find(|descriptor| descriptor.display_name.eq_ignore_ascii_case(name))
            .map(|descriptor| descriptor.format)
    }

    /// Formats whose canonical extension is `extension`. Several formats may
    /// share one extension.
    pub fn formats_for_extension(&self, extension: &str) -> Vec<Format> {
        let normalized = extension.trim().trim_start_matches('.').to_ascii_lowercase();
        if normalized.is_empty() {
            return Vec::new();
        }

        self.descriptors
            .iter()
            .filter(|descriptor| descriptor.extension == normalized)
            .map(|descriptor| descriptor.format)
            .collect()
    }

    /// Candidate formats for a file, matched on the longest registered
    /// extension the file name ends with (`run.gdr.json` is GDR Json, not TASBot).
    pub fn detect_from_path(&self, path: &Path) -> Vec<Format> {
        let Some(file_name) = path.file_name().and_then(|name| name.to_str()) else {
            return Vec::new();
        };
        let file_name = file_name.to_ascii_lowercase();

        let matches: Vec<&FormatDescriptor> = self
            .descriptors
            .iter()
            .filter(|descriptor| descriptor.has_extension())
            .filter(|descriptor| {
                file_name
                    .strip_suffix(descriptor.extension)
                    .is_some_and(|rest| rest.len() > 1 && rest.ends_with('.'))
            })
            .collect();

        let Some(longest) = matches.iter().map(|descriptor| descriptor.extension.len()).max()
        else {
            return Vec::new();
        };

        matches
            .into_iter()
            .filter(|descriptor| descriptor.extension.len() == longest)
            .map(|descriptor| descriptor.format)
            .collect()
    }

    /// File name to offer when exporting `stem` as `format`.
    pub fn export_file_name(&self, stem: &str, format: Format) -> String {
        match self.extension_for(format) {
            "" => stem.to_string(),
            extension => format!("{stem}.{extension}"),
        }
    }
}

fn validate_descriptor(descriptor: &FormatDescriptor) -> Result<(), RegistryError> {
    let format = descriptor.format;

    if descriptor.display_name.trim().is_empty() {
        return Err(RegistryError::EmptyDisplayName { format });
    }

    let extension = descriptor.extension;
    let invalid = |reason| RegistryError::InvalidExtension {
        format,
        extension: extension.to_string(),
        reason,
    };

    if extension.is_empty() {
        return if EXTENSIONLESS_FORMATS.contains(&format) {
            Ok(())
        } else {
            Err(invalid("only documented extensionless formats may omit an extension"))
        };
    }
    if extension.starts_with('.') || extension.ends_with('.') {
        return Err(invalid("must not start or end with a dot"));
    }
    if extension.chars().any(|ch| ch.is_ascii_uppercase()) {
        return Err(invalid("must be lowercase"));
    }
    if !extension
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || ch == '.')
    {
        return Err(invalid("may only contain ASCII letters, digits and dots"));
    }

    Ok(())
}
