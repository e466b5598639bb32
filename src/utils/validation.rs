use crate::utils::error::{EtlError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.trim().is_empty() {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(EtlError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

/// 缺少必要參數時回傳 [`EtlError::MissingArgument`]
pub fn validate_required_field<T>(value: &Option<T>) -> Result<&T> {
    value.as_ref().ok_or(EtlError::MissingArgument)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_path() {
        assert!(validate_path("filename", "yelp_academic_dataset_user.json").is_ok());
        assert!(validate_path("filename", "").is_err());
        assert!(validate_path("filename", "   ").is_err());
        assert!(validate_path("filename", "bad\0name").is_err());
    }

    #[test]
    fn test_validate_required_field() {
        let present = Some("review.json".to_string());
        assert_eq!(validate_required_field(&present).unwrap(), "review.json");

        let absent: Option<String> = None;
        assert!(matches!(
            validate_required_field(&absent),
            Err(EtlError::MissingArgument)
        ));
    }
}
