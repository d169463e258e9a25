use crate::domain::model::ModelDefinition;
use crate::utils::error::{Result, TypegenError};

/// 外部模型層: 提供可供匯出的模型定義
pub trait ModelCatalog {
    fn models(&self) -> &[ModelDefinition];

    fn find(&self, name: &str) -> Option<&ModelDefinition> {
        self.models().iter().find(|model| model.name == name)
    }

    /// Resolves an ordered allow-list of model names into definitions, keeping the list order.
    fn resolve<S: AsRef<str>>(&self, names: &[S]) -> Result<Vec<ModelDefinition>>
    where
        Self: Sized,
    {
        names
            .iter()
            .map(|name| {
                self.find(name.as_ref())
                    .cloned()
                    .ok_or_else(|| TypegenError::UnknownModel {
                        name: name.as_ref().to_string(),
                    })
            })
            .collect()
    }
}

pub trait Storage {
    fn write_file(&self, path: &str, data: &[u8]) -> Result<()>;
}
