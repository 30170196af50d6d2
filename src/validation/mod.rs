use axum::{
    async_trait,
    extract::FromRequest,
    http::{Request, StatusCode},
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::{
    db::models::api::{ApiResponse, ErrorDetail},
    error::AppError,
};

pub mod booking;
pub mod pool;
pub mod template;

/// 验证的 JSON 提取器
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S, axum::body::Body> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request<axum::body::Body>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|_| AppError::Validation { message: "Invalid JSON format".to_string() })?;

        value.validate().map_err(|errors| {
            let error_details: Vec<ErrorDetail> = errors
                .field_errors()
                .iter()
                .flat_map(|(field, field_errors)| {
                    field_errors.iter().map(move |error| ErrorDetail {
                        field: Some(field.to_string()),
                        code: error.code.to_string(),
                        message: error.message.as_ref()
                            .map(|m| m.to_string())
                            .unwrap_or_else(|| format!("Validation failed for field: {}", field)),
                    })
                })
                .collect();

            AppError::Validation { message: format!("Validation failed with {} errors", error_details.len()) }
        })?;

        Ok(ValidatedJson(value))
    }
}

/// 验证错误响应辅助函数
pub fn validation_error_response(errors: Vec<ErrorDetail>) -> (StatusCode, Json<ApiResponse<()>>) {
    let response = ApiResponse::validation_error(errors);
    (StatusCode::BAD_REQUEST, Json(response))
}

/// 常用验证规则
pub mod rules {
    use validator::ValidationError;

    /// 验证密码强度
    pub fn validate_password_strength(password: &str) -> Result<(), ValidationError> {
        let mut score = 0;

        // 长度检查
        if password.len() >= 8 {
            score += 1;
        }

        // 包含小写字母
        if password.chars().any(|c| c.is_lowercase()) {
            score += 1;
        }

        // 包含大写字母
        if password.chars().any(|c| c.is_uppercase()) {
            score += 1;
        }

        // 包含数字
        if password.chars().any(|c| c.is_numeric()) {
            score += 1;
        }

        // 包含特殊字符
        if password.chars().any(|c| "!@#$%^&*()_+-=[]{}|;:,.<>?".contains(c)) {
            score += 1;
        }

        if score < 3 {
            return Err(ValidationError::new("weak_password"));
        }

        Ok(())
    }

    /// 验证成员姓名格式
    pub fn validate_person_name(name: &str) -> Result<(), ValidationError> {
        let trimmed = name.trim();
        if trimmed.is_empty() || trimmed.len() > 100 {
            return Err(ValidationError::new("invalid_name_length"));
        }
        // 只允许字母、空格、连字符和撇号
        if !trimmed
            .chars()
            .all(|c| c.is_alphabetic() || c == ' ' || c == '-' || c == '\'')
        {
            return Err(ValidationError::new("invalid_name_format"));
        }
        Ok(())
    }
}
