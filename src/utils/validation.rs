use crate::utils::error::{FilterError, Result};
use std::path::Path;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(FilterError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(FilterError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 輸出會被截斷，所以不能與輸入指向同一個檔案
pub fn validate_distinct_paths(input_path: &str, output_path: &str) -> Result<()> {
    let same = match (
        Path::new(input_path).canonicalize(),
        Path::new(output_path).canonicalize(),
    ) {
        (Ok(input), Ok(output)) => input == output,
        _ => Path::new(input_path) == Path::new(output_path),
    };

    if same {
        return Err(FilterError::InvalidConfigValue {
            field: "output_path".to_string(),
            value: output_path.to_string(),
            reason: "Output would overwrite the input file".to_string(),
        });
    }
    Ok(())
}

pub fn validate_parent_dir(field_name: &str, path: &str) -> Result<()> {
    let parent = match Path::new(path).parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => return Ok(()),
    };

    if !parent.is_dir() {
        return Err(FilterError::InvalidConfigValue {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: format!("Directory {} does not exist", parent.display()),
        });
    }
    Ok(())
}
