use crate::core::{emit::emit, extract::extract, translate::translate};
use crate::domain::model::{Declaration, FieldDescriptor, ModelDefinition};
use crate::utils::error::Result;
use crate::utils::validation::{validate_allow_list, Validate};
use serde::Serialize;
use std::collections::HashSet;
use std::io::Write;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    pub declarations: usize,
    pub skipped_fields: usize,
    /// Qualified references whose target is not in the allow-list, first occurrence order.
    pub foreign_references: Vec<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ModelPlan {
    pub name: String,
    pub fields: Vec<FieldDescriptor>,
    pub skipped: Vec<String>,
}

/// Runs extraction, translation and emission over an explicit allow-list of models.
pub struct Generator {
    models: Vec<ModelDefinition>,
}

impl Generator {
    pub fn new(models: Vec<ModelDefinition>) -> Self {
        Self { models }
    }

    pub fn render_model(model: &ModelDefinition) -> Result<Declaration> {
        let (name, descriptors) = extract(model);

        let mut fields = Vec::with_capacity(descriptors.len());
        for descriptor in descriptors {
            let ts_type = translate(&descriptor.signature).inspect_err(|e| {
                tracing::error!(
                    "❌ {}.{} ({}): {}",
                    name,
                    descriptor.declared_name,
                    descriptor.signature,
                    e
                );
            })?;
            tracing::debug!(
                "{}.{}: {} -> {}",
                name,
                descriptor.declared_name,
                descriptor.signature,
                ts_type
            );
            fields.push((descriptor.emitted_name, ts_type));
        }

        Ok(emit(&name, fields))
    }

    /// 依允許清單順序寫出宣告，遇到第一個無法轉換的型別即停止
    pub fn run<W: Write>(&self, out: &mut W) -> Result<GenerationReport> {
        self.validate()?;
        tracing::info!("Generating {} declarations", self.models.len());

        let allowed: HashSet<&str> = self.models.iter().map(|m| m.name.as_str()).collect();
        let mut report = GenerationReport::default();

        for model in &self.models {
            let declaration = Self::render_model(model)?;

            for field in &model.fields {
                if FieldDescriptor::from_field(field).skip {
                    report.skipped_fields += 1;
                    continue;
                }
                if let Some(target) = field.signature.qualified_name() {
                    if !allowed.contains(target)
                        && !report.foreign_references.iter().any(|r| r == target)
                    {
                        tracing::warn!(
                            "⚠️ {}.{} references '{}', which is not in the allow-list",
                            model.name,
                            field.name,
                            target
                        );
                        report.foreign_references.push(target.to_string());
                    }
                }
            }

            write!(out, "{}\n\n", declaration)?;
            report.declarations += 1;
        }

        out.flush()?;
        tracing::info!(
            "✅ Wrote {} declarations ({} fields skipped)",
            report.declarations,
            report.skipped_fields
        );
        Ok(report)
    }

    pub fn render_to_string(&self) -> Result<String> {
        let mut buffer = Vec::new();
        self.run(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Extraction results for every model, without translating anything.
    pub fn plan(&self) -> Vec<ModelPlan> {
        self.models
            .iter()
            .map(|model| {
                let (name, fields) = extract(model);
                let skipped = model
                    .fields
                    .iter()
                    .filter(|field| FieldDescriptor::from_field(field).skip)
                    .map(|field| field.name.clone())
                    .collect();
                ModelPlan {
                    name,
                    fields,
                    skipped,
                }
            })
            .collect()
    }
}

impl Validate for Generator {
    fn validate(&self) -> Result<()> {
        let names: Vec<&str> = self.models.iter().map(|m| m.name.as_str()).collect();
        validate_allow_list(names.as_slice())
    }
}
