use crate::utils::error::{Result, TypegenError};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(TypegenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(TypegenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(TypegenError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

/// 允許清單不可為空，且名稱不得重複
pub fn validate_allow_list<S: AsRef<str>>(names: &[S]) -> Result<()> {
    if names.is_empty() {
        return Err(TypegenError::EmptyAllowList);
    }

    let mut seen = HashSet::new();
    for name in names {
        let name = name.as_ref();
        validate_non_empty_string("models.allow_list", name)?;
        if !seen.insert(name) {
            return Err(TypegenError::DuplicateModel {
                name: name.to_string(),
            });
        }
    }

    Ok(())
}
