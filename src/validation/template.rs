use crate::error::AppError;

pub fn validate_template_name(name: &str) -> Result<(), AppError> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(AppError::validation("template name is required"));
    }
    if trimmed.len() > 100 {
        return Err(AppError::validation(
            "template name must be 100 characters or fewer",
        ));
    }
    Ok(())
}
