use crate::db::enums::{MemberRole, MemberStatus};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Member models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::members)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Member {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    #[serde(skip_serializing, default)]
    pub password_hash: Option<String>,
    pub phone: Option<String>,
    pub status: MemberStatus,
    pub role: MemberRole,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl Member {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::members)]
pub struct NewMember {
    pub name: String,
    pub email: String,
    pub password_hash: Option<String>,
    pub phone: Option<String>,
    pub status: MemberStatus,
    pub role: MemberRole,
}

// Member API DTOs
#[derive(Serialize, Deserialize, Clone)]
pub struct MemberBasicInfo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub status: MemberStatus,
    pub role: MemberRole,
}

impl From<&Member> for MemberBasicInfo {
    fn from(m: &Member) -> Self {
        Self {
            id: m.id,
            name: m.name.clone(),
            email: m.email.clone(),
            status: m.status,
            role: m.role,
        }
    }
}

#[derive(Deserialize)]
pub struct UpdateMemberRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
}

#[derive(Deserialize)]
pub struct ApproveMemberRequest {
    pub status: MemberStatus,
}

#[derive(Deserialize)]
pub struct MembersQuery {
    pub status: Option<String>,
}
