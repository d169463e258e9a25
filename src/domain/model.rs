use crate::domain::signature::TypeSignature;
use regex::Regex;
use serde::Serialize;
use std::fmt;
use std::sync::LazyLock;

static TAG_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"([A-Za-z_][A-Za-z0-9_]*):"((?:[^"\\]|\\.)*)""#).expect("tag pattern is valid")
});

/// 序列化時略過欄位的標記 (`json:"-"`)
pub const SKIP_SENTINEL: &str = "-";

/// Raw struct tag in the conventional `key:"value" key2:"value2"` layout.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StructTag(String);

impl StructTag {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    pub fn lookup(&self, key: &str) -> Option<String> {
        TAG_PAIR
            .captures_iter(&self.0)
            .find(|caps| &caps[1] == key)
            .map(|caps| caps[2].replace("\\\"", "\"").replace("\\\\", "\\"))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDef {
    pub name: String,
    pub signature: TypeSignature,
    pub tag: Option<StructTag>,
}

impl FieldDef {
    pub fn new(name: impl Into<String>, signature: &str) -> Self {
        Self {
            name: name.into(),
            signature: TypeSignature::parse(signature),
            tag: None,
        }
    }

    pub fn tagged(mut self, tag: &str) -> Self {
        self.tag = Some(StructTag::new(tag));
        self
    }

    pub fn json_annotation(&self) -> Option<String> {
        self.tag.as_ref().and_then(|tag| tag.lookup("json"))
    }
}

/// Static description of one backend data structure, fields in declaration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelDefinition {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

impl ModelDefinition {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn field(mut self, field: FieldDef) -> Self {
        self.fields.push(field);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldDescriptor {
    pub declared_name: String,
    pub emitted_name: String,
    pub signature: TypeSignature,
    pub skip: bool,
}

impl FieldDescriptor {
    pub fn from_field(field: &FieldDef) -> Self {
        let annotation = field.json_annotation();

        let skip = annotation.as_deref() == Some(SKIP_SENTINEL);
        // `omitempty` 之類的選項不影響名稱
        let emitted_name = annotation
            .as_deref()
            .filter(|_| !skip)
            .map(|value| value.split(',').next().unwrap_or_default())
            .filter(|name| !name.is_empty())
            .unwrap_or(field.name.as_str())
            .to_string();

        Self {
            declared_name: field.name.clone(),
            emitted_name,
            signature: field.signature.clone(),
            skip,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeclaredField {
    pub name: String,
    pub ts_type: String,
}

/// One emitted `export type` block.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Declaration {
    pub name: String,
    pub fields: Vec<DeclaredField>,
}

impl fmt::Display for Declaration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "export type {} = {{", self.name)?;
        for field in &self.fields {
            writeln!(f, "\t{}: {}", field.name, field.ts_type)?;
        }
        f.write_str("}")
    }
}
