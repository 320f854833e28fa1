//! Mapping defaults loading tests

use std::io::Write;

use hbm_source::{LocalBindingContext, MappingDefaults, MappingError, Origin, SourceType};
use hbm_source::cascade::{CascadeStyle, interpret_cascade_styles};
use hbm_source::naming::determine_database_schema_name;

#[test]
fn test_load_defaults_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
packageName = "com.shop.model"
schemaName = "sales"
cascadeStyle = "persist,merge"
globallyQuotedIdentifiers = true
"#
    )
    .unwrap();

    let defaults = MappingDefaults::load(file.path()).unwrap();
    assert_eq!(defaults.package_name.as_deref(), Some("com.shop.model"));
    assert_eq!(defaults.property_accessor_name, "property");

    let context = LocalBindingContext::new(Origin::new(SourceType::File, "x.hbm.xml"), defaults);
    let schema = determine_database_schema_name(None, None, &context);
    let schema_id = schema.schema.unwrap();
    assert_eq!(schema_id.text(), "sales");
    assert!(schema_id.is_quoted());

    let cascades = interpret_cascade_styles(None, &context).unwrap();
    assert!(cascades.contains(&CascadeStyle::Persist));
    assert!(cascades.contains(&CascadeStyle::Merge));
}

#[test]
fn test_missing_file() {
    let dir = tempfile::tempdir().unwrap();
    let err = MappingDefaults::load(dir.path().join("missing.toml")).unwrap_err();
    assert!(matches!(err, MappingError::Io(_)));
}
