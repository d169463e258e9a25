use anyhow::Result;
use map_typegen::domain::model::{FieldDef, ModelDefinition};
use map_typegen::{
    generate_default, Generator, IndoorMapCatalog, ModelCatalog, TypegenError,
    DEFAULT_ALLOW_LIST,
};

const EXPECTED_DEFAULT_OUTPUT: &str = "\
export type Point2f = {
\tx: number
\ty: number
}

export type Map = {
\tid: number
\tpassword: string
\tname: string
\tbuildings: Building[]
\tnodes: MapNode[]
\tedges: NodeEdge[]
\tnorthAngle: number
\tDeleted: DeletedAt
}

export type Building = {
\tid: number
\tmapId: number
\tbuildingName: string
\tlocation: Point2f
\tfloors: Floor[]
}

export type Floor = {
\tid: number
\tbuildingId: number
\tfloorNumber: number
\tfloorName: string
\tlocation: Point2f
\trooms: Room[]
\tsensors: Sensor[]
}

export type Room = {
\tid: number
\tfloorId: number
\trotation: number
\tname: string
\tlocation: Point2f
\tdimensions: Point2f
\tindents: Indent[]
\tpolygon: Point2f[]
\twalls: *PairPoint2f[]
\tentrances: Entrance[]
}

export type Indent = {
\tid: number
\troomId: number
\twallKeyA: string
\twallKeyB: string
\tlocation: number
\tdimensions: Point2f
}

export type Sensor = {
\tid: number
\tsensorId: string
\tfloorId: number
\tlocation: Point2f
}

export type MapNode = {
\tid: number
\tmapId: number
\tlocation: Point2f
\trootNode: boolean
\tfloorIndex: number
\tbidirectional: boolean
}

export type NodeEdge = {
\tid: number
\tmapId: number
\tnode1Id: number
\tnode2Id: number
}

";

fn default_generator() -> Result<Generator> {
    let models = IndoorMapCatalog::new().resolve(DEFAULT_ALLOW_LIST)?;
    Ok(Generator::new(models))
}

/// 預設允許清單的完整輸出必須逐位元組一致
#[test]
fn test_default_allow_list_output() -> Result<()> {
    let output = default_generator()?.render_to_string()?;
    assert_eq!(output, EXPECTED_DEFAULT_OUTPUT);
    Ok(())
}

#[test]
fn test_default_entry_point_writes_expected_output() -> Result<()> {
    let mut out = Vec::new();
    let report = generate_default(&mut out)?;
    assert_eq!(String::from_utf8(out)?, EXPECTED_DEFAULT_OUTPUT);
    assert_eq!(report.declarations, DEFAULT_ALLOW_LIST.len());
    Ok(())
}

#[test]
fn test_two_runs_are_identical() -> Result<()> {
    let generator = default_generator()?;
    let first = generator.render_to_string()?;
    let second = generator.render_to_string()?;
    assert_eq!(first.as_bytes(), second.as_bytes());
    Ok(())
}

#[test]
fn test_default_run_report() -> Result<()> {
    let mut out = Vec::new();
    let report = default_generator()?.run(&mut out)?;

    assert_eq!(report.declarations, DEFAULT_ALLOW_LIST.len());
    // Map.Users, NodeEdge.Node1, NodeEdge.Node2
    assert_eq!(report.skipped_fields, 3);
    assert_eq!(
        report.foreign_references,
        vec!["DeletedAt", "PairPoint2f", "Entrance"]
    );
    Ok(())
}

#[test]
fn test_emitted_field_count_excludes_skipped() -> Result<()> {
    let catalog = IndoorMapCatalog::new();
    for model in catalog.models() {
        let skipped = model
            .fields
            .iter()
            .filter(|f| f.json_annotation().as_deref() == Some("-"))
            .count();
        match Generator::render_model(model) {
            Ok(declaration) => {
                assert_eq!(declaration.fields.len(), model.fields.len() - skipped, "{}", model.name)
            }
            Err(e) => panic!("{} failed: {}", model.name, e),
        }
    }
    Ok(())
}

#[test]
fn test_models_outside_allow_list_are_not_emitted() -> Result<()> {
    let output = default_generator()?.render_to_string()?;
    for name in ["PairPoint2f", "Pair2f", "Auth0User", "Entrance"] {
        assert!(!output.contains(&format!("export type {} ", name)), "{name}");
    }
    Ok(())
}

#[test]
fn test_unsupported_type_aborts_remaining_models() -> Result<()> {
    let catalog = IndoorMapCatalog::new();
    let mut models = catalog.resolve(&["Point2f", "Sensor"])?;
    models.insert(
        1,
        ModelDefinition::new("Signal")
            .field(FieldDef::new("Id", "int").tagged(r#"json:"id""#))
            .field(FieldDef::new("Phase", "complex128").tagged(r#"json:"phase""#)),
    );

    let mut out = Vec::new();
    let err = Generator::new(models).run(&mut out).unwrap_err();

    match err {
        TypegenError::UnsupportedType { signature } => assert_eq!(signature, "complex128"),
        other => panic!("unexpected error: {other:?}"),
    }

    let written = String::from_utf8(out)?;
    assert!(written.starts_with("export type Point2f = {"));
    assert!(!written.contains("Signal"));
    assert!(!written.contains("Sensor"));
    Ok(())
}

#[test]
fn test_skipped_field_with_unsupported_type_is_ignored() -> Result<()> {
    let model = ModelDefinition::new("Cache")
        .field(FieldDef::new("Key", "string").tagged(r#"json:"key""#))
        .field(FieldDef::new("Handle", "chan int").tagged(r#"json:"-""#));

    let output = Generator::new(vec![model]).render_to_string()?;
    assert_eq!(output, "export type Cache = {\n\tkey: string\n}\n\n");
    Ok(())
}

#[test]
fn test_duplicate_declared_names_rejected() -> Result<()> {
    let catalog = IndoorMapCatalog::new();
    let models = catalog.resolve(&["Room", "Point2f", "Room"])?;

    let mut out = Vec::new();
    let err = Generator::new(models).run(&mut out).unwrap_err();
    assert!(matches!(err, TypegenError::DuplicateModel { .. }));
    assert!(out.is_empty());
    Ok(())
}
