use regex::Regex;
use serde::{Serialize, Serializer};
use std::fmt;
use std::sync::LazyLock;

// 限定名稱: 小寫 package 名稱 + '.' + 型別名稱，例如 gorm.DeletedAt
static QUALIFIED: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([a-z][a-z0-9_]*)\.([A-Za-z_][A-Za-z0-9_]*)$")
        .expect("qualified name pattern is valid")
});

// 任意位置的 package 前綴，例如 map[string]model.Point2f 中的 "model."
static QUALIFIER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[a-z]+\.").expect("qualifier pattern is valid"));

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrimitiveKind {
    Int,
    Float64,
    String,
    Bool,
}

impl PrimitiveKind {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "int" => Some(PrimitiveKind::Int),
            "float64" => Some(PrimitiveKind::Float64),
            "string" => Some(PrimitiveKind::String),
            "bool" => Some(PrimitiveKind::Bool),
            _ => None,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            PrimitiveKind::Int => "int",
            PrimitiveKind::Float64 => "float64",
            PrimitiveKind::String => "string",
            PrimitiveKind::Bool => "bool",
        }
    }
}

/// A declared field type, parsed once when the model is defined.
///
/// Parsing never fails: shapes the generator does not understand are kept as
/// [`TypeSignature::Opaque`] and only rejected if a non-skipped field is translated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeSignature {
    Primitive(PrimitiveKind),
    Opaque(String),
    Qualified { package: String, name: String },
    Pointer(Box<TypeSignature>),
    Sequence {
        len: Option<usize>,
        element: Box<TypeSignature>,
    },
}

impl TypeSignature {
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();

        if let Some(inner) = raw.strip_prefix('*') {
            return TypeSignature::Pointer(Box::new(Self::parse(inner)));
        }

        if let Some(rest) = raw.strip_prefix('[') {
            if let Some((marker, element)) = rest.split_once(']') {
                if marker.is_empty() {
                    return TypeSignature::Sequence {
                        len: None,
                        element: Box::new(Self::parse(element)),
                    };
                }
                if let Ok(len) = marker.parse::<usize>() {
                    return TypeSignature::Sequence {
                        len: Some(len),
                        element: Box::new(Self::parse(element)),
                    };
                }
            }
            return TypeSignature::Opaque(raw.to_string());
        }

        if let Some(caps) = QUALIFIED.captures(raw) {
            return TypeSignature::Qualified {
                package: caps[1].to_string(),
                name: caps[2].to_string(),
            };
        }

        match PrimitiveKind::from_name(raw) {
            Some(kind) => TypeSignature::Primitive(kind),
            None => TypeSignature::Opaque(raw.to_string()),
        }
    }

    /// Bare name of the qualified reference nested anywhere in this signature.
    pub fn qualified_name(&self) -> Option<&str> {
        match self {
            TypeSignature::Qualified { name, .. } => Some(name.as_str()),
            TypeSignature::Pointer(inner) => inner.qualified_name(),
            TypeSignature::Sequence { element, .. } => element.qualified_name(),
            TypeSignature::Primitive(_) | TypeSignature::Opaque(_) => None,
        }
    }

    /// True when a package qualifier appears anywhere in the signature.
    pub fn is_foreign_reference(&self) -> bool {
        match self {
            TypeSignature::Qualified { .. } => true,
            TypeSignature::Opaque(raw) => QUALIFIER.is_match(raw),
            TypeSignature::Pointer(inner) | TypeSignature::Sequence { element: inner, .. } => {
                inner.is_foreign_reference()
            }
            TypeSignature::Primitive(_) => false,
        }
    }

    /// Source text with every package qualifier and every `[]` marker removed.
    ///
    /// The flag reports whether a `[]` marker was removed. Pointer markers and
    /// fixed-length `[N]` markers stay in place.
    pub fn without_qualifiers(&self) -> (String, bool) {
        match self {
            TypeSignature::Primitive(kind) => (kind.name().to_string(), false),
            TypeSignature::Qualified { name, .. } => (name.clone(), false),
            TypeSignature::Opaque(raw) => (
                QUALIFIER.replace_all(&raw.replace("[]", ""), "").into_owned(),
                raw.contains("[]"),
            ),
            TypeSignature::Pointer(inner) => {
                let (bare, sequence) = inner.without_qualifiers();
                (format!("*{}", bare), sequence)
            }
            TypeSignature::Sequence { len: None, element } => {
                let (bare, _) = element.without_qualifiers();
                (bare, true)
            }
            TypeSignature::Sequence {
                len: Some(len),
                element,
            } => {
                let (bare, sequence) = element.without_qualifiers();
                (format!("[{}]{}", len, bare), sequence)
            }
        }
    }

    /// Drops leading pointer markers.
    pub fn strip_indirection(&self) -> &TypeSignature {
        let mut current = self;
        while let TypeSignature::Pointer(inner) = current {
            current = &**inner;
        }
        current
    }
}

impl fmt::Display for TypeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeSignature::Primitive(kind) => f.write_str(kind.name()),
            TypeSignature::Opaque(raw) => f.write_str(raw),
            TypeSignature::Qualified { package, name } => write!(f, "{}.{}", package, name),
            TypeSignature::Pointer(inner) => write!(f, "*{}", inner),
            TypeSignature::Sequence { len: None, element } => write!(f, "[]{}", element),
            TypeSignature::Sequence {
                len: Some(len),
                element,
            } => write!(f, "[{}]{}", len, element),
        }
    }
}

impl Serialize for TypeSignature {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
