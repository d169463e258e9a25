use crate::domain::model::{Declaration, DeclaredField};

pub fn emit<I>(name: &str, fields: I) -> Declaration
where
    I: IntoIterator<Item = (String, String)>,
{
    Declaration {
        name: name.to_string(),
        fields: fields
            .into_iter()
            .map(|(name, ts_type)| DeclaredField { name, ts_type })
            .collect(),
    }
}
