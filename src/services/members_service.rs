use bcrypt::{hash, verify};
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::enums::{MemberRole, MemberStatus},
    db::models::auth::{AuthMember, LoginRequest, LoginResponse, RegisterRequest},
    db::models::member::{Member, NewMember, UpdateMemberRequest},
    db::repositories::members::MembersRepo,
    error::AppError,
    middleware::auth::AuthService,
    services::AuditService,
    services::context::RequestContext,
};

pub struct MembersService;

impl MembersService {
    /// Self-service signup. New members start in pending until a manager
    /// approves them into a playing category.
    pub fn register(
        conn: &mut PgConnection,
        req: &RegisterRequest,
        bcrypt_cost: u32,
    ) -> Result<Member, AppError> {
        if MembersRepo::exists_by_email(conn, &req.email)? {
            return Err(AppError::validation("email is already registered"));
        }

        let password_hash = hash(&req.password, bcrypt_cost)?;
        let new_member = NewMember {
            name: req.name.trim().to_string(),
            email: req.email.trim().to_lowercase(),
            password_hash: Some(password_hash),
            phone: req.phone.clone(),
            status: MemberStatus::Pending,
            role: MemberRole::Member,
        };
        let member = MembersRepo::insert(conn, &new_member)?;

        AuditService::log_create(
            conn,
            Some(member.id),
            "member",
            member.id,
            format!("member {} registered", member.email),
            None,
        );
        Ok(member)
    }

    pub fn login(
        conn: &mut PgConnection,
        auth: &AuthService,
        req: &LoginRequest,
    ) -> Result<LoginResponse, AppError> {
        let member = MembersRepo::find_by_email(conn, &req.email.trim().to_lowercase())?
            .ok_or_else(|| AppError::auth("invalid email or password"))?;

        let stored_hash = member
            .password_hash
            .as_deref()
            .ok_or_else(|| AppError::auth("password login is not enabled for this account"))?;
        if !verify(&req.password, stored_hash)? {
            return Err(AppError::auth("invalid email or password"));
        }

        Self::issue_tokens(auth, &member)
    }

    pub fn refresh(
        conn: &mut PgConnection,
        auth: &AuthService,
        refresh_token: &str,
    ) -> Result<LoginResponse, AppError> {
        let claims = auth.verify_refresh_token(refresh_token)?;
        let member = MembersRepo::find_by_id(conn, claims.sub)?
            .ok_or_else(|| AppError::auth("member no longer exists"))?;
        Self::issue_tokens(auth, &member)
    }

    fn issue_tokens(auth: &AuthService, member: &Member) -> Result<LoginResponse, AppError> {
        let auth_member = AuthMember {
            id: member.id,
            email: member.email.clone(),
            name: member.name.clone(),
            status: member.status,
            role: member.role,
        };
        let access_token = auth.generate_access_token(&auth_member)?;
        let refresh_token = auth.generate_refresh_token(member.id)?;
        Ok(LoginResponse {
            access_token,
            refresh_token,
            token_type: "Bearer".to_string(),
            expires_in: auth.access_expires_in() as i64,
            member: auth_member,
        })
    }

    pub fn list(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        status: Option<&str>,
    ) -> Result<Vec<Member>, AppError> {
        let status_filter = match status {
            Some(raw) => Some(
                MemberStatus::from_str(raw)
                    .ok_or_else(|| AppError::validation(format!("unknown member status '{}'", raw)))?,
            ),
            None => None,
        };
        let list = MembersRepo::list(conn, status_filter)?;
        Ok(list)
    }

    pub fn get_by_id(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        member_id: Uuid,
    ) -> Result<Member, AppError> {
        let member = MembersRepo::find_by_id(conn, member_id)?
            .ok_or_else(|| AppError::not_found("member"))?;
        Ok(member)
    }

    /// Manager moves a member between membership categories (e.g. approves
    /// a pending signup into full membership).
    pub fn set_status(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        member_id: Uuid,
        new_status: MemberStatus,
    ) -> Result<Member, AppError> {
        ctx.require_manager()?;
        let existing = MembersRepo::find_by_id(conn, member_id)?
            .ok_or_else(|| AppError::not_found("member"))?;
        if existing.status == new_status {
            return Ok(existing);
        }
        let before = existing.status;
        let updated = MembersRepo::update_status(conn, existing.id, new_status)?;

        AuditService::log_transition(
            conn,
            Some(ctx.member_id),
            "member",
            updated.id,
            before.as_str(),
            new_status.as_str(),
        );
        Ok(updated)
    }

    pub fn update_profile(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        member_id: Uuid,
        req: &UpdateMemberRequest,
    ) -> Result<Member, AppError> {
        if member_id != ctx.member_id {
            ctx.require_manager()?;
        }
        let existing = MembersRepo::find_by_id(conn, member_id)?
            .ok_or_else(|| AppError::not_found("member"))?;
        let updated = MembersRepo::update_profile(
            conn,
            existing.id,
            req.name.as_deref(),
            req.phone.as_deref(),
        )?;

        AuditService::log_update(
            conn,
            Some(ctx.member_id),
            "member",
            updated.id,
            "member profile updated",
            None,
        );
        Ok(updated)
    }
}
