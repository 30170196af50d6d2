use serde::Serialize;

// 统一API响应结构
#[derive(Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub code: u16,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ErrorDetail>>,
    pub timestamp: String,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
    pub code: String,
    pub message: String,
}

// 便捷构造函数
impl<T> ApiResponse<T> {
    pub fn success(data: T, message: &str) -> Self {
        Self {
            success: true,
            code: 200,
            message: message.to_string(),
            data: Some(data),
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn created(data: T, message: &str) -> Self {
        Self {
            success: true,
            code: 201,
            message: message.to_string(),
            data: Some(data),
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn ok(message: &str) -> Self {
        Self {
            success: true,
            code: 200,
            message: message.to_string(),
            data: None,
            errors: None,
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn error(code: u16, message: &str, errors: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            code,
            message: message.to_string(),
            data: None,
            errors: if errors.is_empty() {
                None
            } else {
                Some(errors)
            },
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn validation_error(errors: Vec<ErrorDetail>) -> Self {
        Self {
            success: false,
            code: 400,
            message: "Validation failed".to_string(),
            data: None,
            errors: Some(errors),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    pub fn unauthorized(message: &str) -> Self {
        Self::single_error(401, message, "UNAUTHORIZED")
    }

    pub fn forbidden(message: &str) -> Self {
        Self::single_error(403, message, "FORBIDDEN")
    }

    pub fn not_found(message: &str) -> Self {
        Self::single_error(404, message, "NOT_FOUND")
    }

    pub fn bad_request(message: &str) -> Self {
        Self::single_error(400, message, "BAD_REQUEST")
    }

    pub fn internal_error(message: &str) -> Self {
        Self::single_error(500, message, "INTERNAL_ERROR")
    }

    pub fn conflict(message: &str, field: Option<String>, error_code: &str) -> Self {
        Self {
            success: false,
            code: 409,
            message: message.to_string(),
            data: None,
            errors: Some(vec![ErrorDetail {
                field,
                code: error_code.to_string(),
                message: message.to_string(),
            }]),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }

    fn single_error(code: u16, message: &str, error_code: &str) -> Self {
        Self {
            success: false,
            code,
            message: message.to_string(),
            data: None,
            errors: Some(vec![ErrorDetail {
                field: None,
                code: error_code.to_string(),
                message: message.to_string(),
            }]),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

// 业务错误码常量
pub mod error_codes {
    // 认证相关
    pub const AUTH_INVALID_EMAIL: &str = "AUTH_001";
    pub const AUTH_WEAK_PASSWORD: &str = "AUTH_002";
    pub const AUTH_MEMBER_NOT_FOUND: &str = "AUTH_003";
    pub const AUTH_INVALID_PASSWORD: &str = "AUTH_004";
    pub const AUTH_MEMBER_INACTIVE: &str = "AUTH_005";
    pub const AUTH_INVALID_TOKEN: &str = "AUTH_006";

    // 会员相关
    pub const MEMBER_EMAIL_EXISTS: &str = "MEMBER_001";
    pub const MEMBER_NOT_ACTIVE: &str = "MEMBER_002";

    // 报名池相关
    pub const POOL_ALREADY_EXISTS: &str = "POOL_001";
    pub const POOL_CLOSED: &str = "POOL_002";
    pub const POOL_ALREADY_REGISTERED: &str = "POOL_003";

    // 队伍相关
    pub const TEAM_DUPLICATE_NAME: &str = "TEAM_001";
    pub const TEAM_INVALID_POSITION: &str = "TEAM_002";
    pub const TEAM_FORMAT_MISMATCH: &str = "TEAM_003";
    pub const TEAM_ALREADY_INSTANTIATED: &str = "TEAM_004";
    pub const TEAM_ALREADY_CONFIRMED: &str = "TEAM_005";
}
