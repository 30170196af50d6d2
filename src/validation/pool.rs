use crate::error::AppError;

pub fn validate_auto_close(
    auto_close_at: Option<chrono::DateTime<chrono::Utc>>,
) -> Result<(), AppError> {
    if let Some(deadline) = auto_close_at {
        if deadline <= chrono::Utc::now() {
            return Err(AppError::validation(
                "auto-close deadline must be in the future",
            ));
        }
    }
    Ok(())
}
