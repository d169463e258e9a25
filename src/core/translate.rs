use crate::domain::signature::{PrimitiveKind, TypeSignature};
use crate::utils::error::{Result, TypegenError};

/// Maps a declared field type to its TypeScript type name.
///
/// A signature carrying a package qualifier is a reference to a declaration emitted
/// elsewhere: the qualifier and any `[]` markers are removed and a single `[]` is
/// appended when the signature was a slice. Pointer and `[N]` markers are kept.
/// Otherwise pointers are dropped and the primitive is mapped; anything else fails
/// with [`TypegenError::UnsupportedType`].
pub fn translate(signature: &TypeSignature) -> Result<String> {
    if signature.is_foreign_reference() {
        let (mut bare, sequence) = signature.without_qualifiers();
        if sequence {
            bare.push_str("[]");
        }
        return Ok(bare);
    }

    match signature.strip_indirection() {
        TypeSignature::Primitive(kind) => Ok(primitive_to_ts(*kind).to_string()),
        bare => Err(TypegenError::UnsupportedType {
            signature: bare.to_string(),
        }),
    }
}

fn primitive_to_ts(kind: PrimitiveKind) -> &'static str {
    match kind {
        PrimitiveKind::Int | PrimitiveKind::Float64 => "number",
        PrimitiveKind::String => "string",
        PrimitiveKind::Bool => "boolean",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ts(raw: &str) -> Result<String> {
        translate(&TypeSignature::parse(raw))
    }

    #[test]
    fn test_primitive_mapping() {
        assert_eq!(ts("int").unwrap(), "number");
        assert_eq!(ts("float64").unwrap(), "number");
        assert_eq!(ts("string").unwrap(), "string");
        assert_eq!(ts("bool").unwrap(), "boolean");
    }

    #[test]
    fn test_pointer_drops_nullability() {
        assert_eq!(ts("*float64").unwrap(), "number");
        assert_eq!(ts("*int").unwrap(), ts("int").unwrap());
        assert_eq!(ts("*string").unwrap(), "string");
    }

    #[test]
    fn test_qualified_reference() {
        assert_eq!(ts("model.Point2f").unwrap(), "Point2f");
        assert_eq!(ts("gorm.DeletedAt").unwrap(), "DeletedAt");
    }

    #[test]
    fn test_qualified_reference_keeps_pointer_marker() {
        assert_eq!(ts("*model.MapNode").unwrap(), "*MapNode");
        assert_eq!(ts("[]*model.PairPoint2f").unwrap(), "*PairPoint2f[]");
    }

    #[test]
    fn test_qualified_sequence() {
        assert_eq!(ts("[]model.Building").unwrap(), "Building[]");
        // 巢狀 slice 只附加一次 []
        assert_eq!(ts("[][]model.Point2f").unwrap(), "Point2f[]");
    }

    #[test]
    fn test_fixed_array_of_qualified_type() {
        assert_eq!(ts("[4]model.Point2f").unwrap(), "[4]Point2f");
    }

    #[test]
    fn test_qualifier_inside_map() {
        assert_eq!(ts("map[string]model.Point2f").unwrap(), "map[string]Point2f");
    }

    #[test]
    fn test_unsupported_types_fail_with_signature() {
        for (raw, reported) in [
            ("complex128", "complex128"),
            ("*complex128", "complex128"),
            ("[]int", "[]int"),
            ("map[string]int", "map[string]int"),
            ("Point2f", "Point2f"),
            ("Model.Point2f", "Model.Point2f"),
        ] {
            match ts(raw) {
                Err(TypegenError::UnsupportedType { signature }) => assert_eq!(signature, reported),
                other => panic!("expected UnsupportedType for {raw}, got {other:?}"),
            }
        }
    }
}
