use crate::domain::model::{FieldDescriptor, ModelDefinition};

/// Walks a model's fields in declaration order, dropping fields tagged `json:"-"`.
pub fn extract(model: &ModelDefinition) -> (String, Vec<FieldDescriptor>) {
    let fields = model
        .fields
        .iter()
        .map(FieldDescriptor::from_field)
        .filter(|descriptor| {
            if descriptor.skip {
                tracing::debug!("Skipping {}.{}", model.name, descriptor.declared_name);
            }
            !descriptor.skip
        })
        .collect();

    (model.name.clone(), fields)
}
