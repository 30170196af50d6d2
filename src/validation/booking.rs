use crate::error::AppError;

pub const MAX_SESSION: i32 = 4;
pub const MAX_RINKS: i32 = 8;

pub fn validate_booking_fields(
    session: i32,
    rink_count: i32,
    event_type: &str,
) -> Result<(), AppError> {
    if !(1..=MAX_SESSION).contains(&session) {
        return Err(AppError::validation(format!(
            "session must be between 1 and {}",
            MAX_SESSION
        )));
    }
    if !(1..=MAX_RINKS).contains(&rink_count) {
        return Err(AppError::validation(format!(
            "rink count must be between 1 and {}",
            MAX_RINKS
        )));
    }
    if event_type.trim().is_empty() {
        return Err(AppError::validation("event type is required"));
    }
    Ok(())
}
