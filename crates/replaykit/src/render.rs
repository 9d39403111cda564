use comfy_table::Table;
use replaykit_formats::{FormatDescriptor, FormatRegistry, GameVersion, Preferences};

/// Version filter for `list`: an explicit flag wins, otherwise the preferred
/// game version unless it is the wildcard.
pub fn listing_game_version(
    requested: Option<GameVersion>,
    preferences: &Preferences,
) -> Option<GameVersion> {
    requested.or_else(|| {
        (!preferences.game_version.is_wildcard()).then_some(preferences.game_version)
    })
}

/// Descriptors to show in a listing, in declaration order.
pub fn select_descriptors(
    registry: &FormatRegistry,
    game_version: Option<GameVersion>,
    show_legacy: bool,
) -> Vec<&FormatDescriptor> {
    registry
        .descriptors()
        .iter()
        .filter(|descriptor| game_version.map_or(true, |v| descriptor.min_game_version.accepts(v)))
        .filter(|descriptor| show_legacy || !descriptor.is_legacy)
        .collect()
}

pub fn descriptor_table(descriptors: &[&FormatDescriptor]) -> Table {
    let mut table = Table::new();
    table.set_header(vec!["Code", "Name", "Slug", "Extension", "Game version", "Legacy"]);

    for descriptor in descriptors {
        let extension = if descriptor.has_extension() {
            format!(".{}", descriptor.extension)
        } else {
            "(none)".to_string()
        };
        table.add_row(vec![
            descriptor.format.code().to_string(),
            descriptor.display_name.to_string(),
            descriptor.format.slug().to_string(),
            extension,
            descriptor.min_game_version.to_string(),
            if descriptor.is_legacy { "yes" } else { "no" }.to_string(),
        ]);
    }

    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use replaykit_formats::Format;

    fn registry() -> FormatRegistry {
        FormatRegistry::canonical().expect("canonical registry")
    }

    #[test]
    fn hides_legacy_formats_on_request() {
        let registry = registry();
        let shown = select_descriptors(&registry, Some(GameVersion::Version2113), false);
        let formats: Vec<Format> = shown.iter().map(|d| d.format).collect();
        assert_eq!(
            formats,
            vec![
                Format::OmegaBot3,
                Format::Tasbot,
                Format::MhrBinary,
                Format::MhrJson,
                Format::EchoNewJson,
                Format::EchoNewBinary,
                Format::PlainText,
            ]
        );
    }

    #[test]
    fn listing_falls_back_to_preferred_version() {
        let preferences = Preferences {
            game_version: GameVersion::Version2206,
            ..Preferences::default()
        };
        assert_eq!(
            listing_game_version(None, &preferences),
            Some(GameVersion::Version2206)
        );
        assert_eq!(
            listing_game_version(Some(GameVersion::Version2113), &preferences),
            Some(GameVersion::Version2113)
        );
        assert_eq!(listing_game_version(None, &Preferences::default()), None);
    }

    #[test]
    fn lists_everything_without_filters() {
        let registry = registry();
        assert_eq!(
            select_descriptors(&registry, None, true).len(),
            Format::ALL.len()
        );
    }

    #[test]
    fn table_marks_extensionless_formats() {
        let registry = registry();
        let rendered = descriptor_table(&[registry.describe(Format::YBot1)]).to_string();
        assert!(rendered.contains("yBot 1"));
        assert!(rendered.contains("(none)"));
    }
}
