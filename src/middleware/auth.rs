use crate::AppState;
use crate::db::models::auth::AuthMember;
use axum::{
    extract::State,
    http::{Request, StatusCode, header::AUTHORIZATION},
    middleware::Next,
    response::Response,
};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: uuid::Uuid, // member_id
    pub email: String,
    pub name: String,
    pub exp: u64,    // expiration time
    pub iat: u64,    // issued at
    pub jti: String, // JWT ID
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: uuid::Uuid, // member_id
    pub exp: u64,        // expiration time
    pub iat: u64,        // issued at
    pub jti: String,     // JWT ID
}

#[derive(Clone)]
pub struct AuthConfig {
    pub jwt_secret: String,
    pub jwt_expiration: Duration,
    pub refresh_expiration: Duration,
}

impl AuthConfig {
    pub fn from_config(config: &crate::config::Config) -> Self {
        Self {
            jwt_secret: config.jwt_secret.clone(),
            jwt_expiration: Duration::from_secs(config.jwt_access_token_expires_in),
            refresh_expiration: Duration::from_secs(config.jwt_refresh_token_expires_in),
        }
    }
}

#[derive(Clone)]
pub struct AuthService {
    config: AuthConfig,
}

/// 请求扩展中的当前成员信息
#[derive(Clone, Debug)]
pub struct AuthMemberInfo {
    pub member: AuthMember,
}

impl AuthService {
    pub fn new(config: AuthConfig) -> Self {
        Self { config }
    }

    pub fn access_expires_in(&self) -> u64 {
        self.config.jwt_expiration.as_secs()
    }

    pub fn generate_access_token(
        &self,
        member: &AuthMember,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let claims = Claims {
            sub: member.id,
            email: member.email.clone(),
            name: member.name.clone(),
            exp: now + self.config.jwt_expiration.as_secs(),
            iat: now,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_ref()),
        )
    }

    pub fn generate_refresh_token(
        &self,
        member_id: uuid::Uuid,
    ) -> Result<String, jsonwebtoken::errors::Error> {
        let now = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs();

        let claims = RefreshClaims {
            sub: member_id,
            exp: now + self.config.refresh_expiration.as_secs(),
            iat: now,
            jti: uuid::Uuid::new_v4().to_string(),
        };

        encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.config.jwt_secret.as_ref()),
        )
    }

    pub fn verify_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_ref()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }

    pub fn verify_refresh_token(
        &self,
        token: &str,
    ) -> Result<RefreshClaims, jsonwebtoken::errors::Error> {
        let token_data = decode::<RefreshClaims>(
            token,
            &DecodingKey::from_secret(self.config.jwt_secret.as_ref()),
            &Validation::default(),
        )?;

        Ok(token_data.claims)
    }
}

pub async fn auth_middleware(
    State(state): State<Arc<AppState>>,
    mut request: Request<axum::body::Body>,
    next: Next<axum::body::Body>,
) -> Result<Response, StatusCode> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|auth_header| auth_header.to_str().ok())
        .and_then(|auth_str| {
            if auth_str.starts_with("Bearer ") {
                Some(auth_str[7..].to_string())
            } else {
                None
            }
        });

    let token = auth_header.ok_or(StatusCode::UNAUTHORIZED)?;

    // 验证token
    let claims = state
        .auth_service
        .verify_token(&token)
        .map_err(|_| StatusCode::UNAUTHORIZED)?;

    // 先查缓存，未命中再查数据库
    let member = match state.member_cache.get_member(claims.sub).await {
        Some(member) => member,
        None => {
            let member = get_member_by_id(&state, claims.sub)
                .await
                .map_err(|_| StatusCode::UNAUTHORIZED)?;
            state.member_cache.cache_member(&member).await;
            member
        }
    };

    // 将成员信息添加到请求扩展中
    request.extensions_mut().insert(AuthMemberInfo { member });

    Ok(next.run(request).await)
}

async fn get_member_by_id(
    state: &Arc<AppState>,
    member_id: uuid::Uuid,
) -> Result<AuthMember, diesel::result::Error> {
    use crate::schema::members::dsl::*;
    use diesel::prelude::*;

    let mut conn = state
        .db
        .get()
        .map_err(|_| diesel::result::Error::NotFound)?;

    let member = members
        .filter(id.eq(member_id))
        .select(crate::db::models::Member::as_select())
        .first(&mut conn)?;

    Ok(AuthMember {
        id: member.id,
        email: member.email,
        name: member.name,
        status: member.status,
        role: member.role,
    })
}
