use crate::descriptor::{FormatDescriptor, CANONICAL_DESCRIPTORS};
use crate::errors::RegistryError;
use crate::model::{Format, GameVersion};
use crate::registry::FormatRegistry;

fn canonical_without(format: Format) -> Vec<FormatDescriptor> {
    CANONICAL_DESCRIPTORS
        .iter()
        .copied()
        .filter(|descriptor| descriptor.format != format)
        .collect()
}

fn replace_entry(descriptor: FormatDescriptor) -> Vec<FormatDescriptor> {
    let mut entries = canonical_without(descriptor.format);
    entries.push(descriptor);
    entries
}

#[test]
fn canonical_table_is_in_declaration_order() {
    let formats: Vec<Format> = CANONICAL_DESCRIPTORS
        .iter()
        .map(|descriptor| descriptor.format)
        .collect();
    assert_eq!(formats, Format::ALL.to_vec());
}

#[test]
fn index_matches_position_in_all() {
    for (position, format) in Format::ALL.iter().enumerate() {
        assert_eq!(format.index(), position);
    }
}

#[test]
fn missing_entry_is_reported() {
    let err = FormatRegistry::from_entries(canonical_without(Format::Silicate))
        .expect_err("registry without Silicate should be rejected");
    assert_eq!(
        err,
        RegistryError::MissingDescriptor {
            format: Format::Silicate
        }
    );
}

#[test]
fn duplicate_entry_is_reported() {
    let mut entries = CANONICAL_DESCRIPTORS.to_vec();
    entries.push(CANONICAL_DESCRIPTORS[0]);
    let err = FormatRegistry::from_entries(entries).expect_err("duplicate entry accepted");
    assert_eq!(
        err,
        RegistryError::DuplicateDescriptor {
            format: Format::OmegaBot3
        }
    );
}

#[test]
fn duplicate_display_name_is_reported() {
    let entries = replace_entry(FormatDescriptor::new(
        Format::Silicate,
        "GDR",
        "slc",
        GameVersion::Version2206,
    ));
    let err = FormatRegistry::from_entries(entries).expect_err("duplicate name accepted");
    match err {
        RegistryError::DuplicateDisplayName {
            display_name,
            first,
            second,
        } => {
            assert_eq!(display_name, "GDR");
            assert_eq!(first, Format::Gdr);
            assert_eq!(second, Format::Silicate);
        }
        other => panic!("unexpected error: {other}"),
    }

    let entries = replace_entry(FormatDescriptor::new(
        Format::Silicate,
        "gdr",
        "slc",
        GameVersion::Version2206,
    ));
    let err = FormatRegistry::from_entries(entries).expect_err("names differing by case accepted");
    assert_eq!(
        err,
        RegistryError::DuplicateDisplayName {
            display_name: "gdr".to_string(),
            first: Format::Gdr,
            second: Format::Silicate,
        }
    );
}

#[test]
fn blank_display_name_is_rejected() {
    let entries = replace_entry(FormatDescriptor::new(
        Format::Rush,
        "  ",
        "rsh",
        GameVersion::Version2113,
    ));
    assert_eq!(
        FormatRegistry::from_entries(entries).unwrap_err(),
        RegistryError::EmptyDisplayName {
            format: Format::Rush
        }
    );
}

#[test]
fn malformed_extensions_are_rejected() {
    for extension in [".rsh", "RSH", "rsh.", "r sh"] {
        let entries = replace_entry(FormatDescriptor::new(
            Format::Rush,
            "Rush",
            extension,
            GameVersion::Version2113,
        ));
        let err = FormatRegistry::from_entries(entries).unwrap_err();
        assert!(
            matches!(err, RegistryError::InvalidExtension { format: Format::Rush, .. }),
            "extension {extension:?} produced {err:?}"
        );
    }
}

#[test]
fn empty_extension_only_allowed_for_extensionless_formats() {
    let entries = replace_entry(FormatDescriptor::new(
        Format::Rush,
        "Rush",
        "",
        GameVersion::Version2113,
    ));
    let err = FormatRegistry::from_entries(entries).unwrap_err();
    assert!(matches!(err, RegistryError::InvalidExtension { .. }));

    assert!(FormatRegistry::from_entries(CANONICAL_DESCRIPTORS.iter().copied()).is_ok());
}

#[test]
fn legacy_defaults_to_false() {
    let descriptor = FormatDescriptor::new(Format::Gdr, "GDR", "gdr", GameVersion::Version2206);
    assert!(!descriptor.is_legacy);
    assert!(descriptor.legacy().is_legacy);
}
