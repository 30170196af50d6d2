use crate::db::enums::RegistrationStatus;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Pool models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::pools)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Pool {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub is_open: bool,
    pub auto_close_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub closed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::pools)]
pub struct NewPool {
    pub booking_id: Uuid,
    pub is_open: bool,
    pub auto_close_at: Option<chrono::DateTime<chrono::Utc>>,
}

// Pool registration models
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::pool_registrations)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PoolRegistration {
    pub id: Uuid,
    pub pool_id: Uuid,
    pub member_id: Uuid,
    pub status: RegistrationStatus,
    pub registered_at: chrono::DateTime<chrono::Utc>,
    pub withdrawn_at: Option<chrono::DateTime<chrono::Utc>>,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::pool_registrations)]
pub struct NewPoolRegistration {
    pub pool_id: Uuid,
    pub member_id: Uuid,
    pub status: RegistrationStatus,
}

// Pool API DTOs
#[derive(Deserialize)]
pub struct OpenPoolRequest {
    pub auto_close_at: Option<chrono::DateTime<chrono::Utc>>,
}

#[derive(Deserialize)]
pub struct RegisterIntoPoolRequest {
    /// Defaults to the calling member; managers may register someone else.
    pub member_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct WithdrawRequest {
    pub member_id: Option<Uuid>,
}

#[derive(Deserialize)]
pub struct RegistrationStatusRequest {
    pub member_id: Uuid,
}

#[derive(Deserialize)]
pub struct RegistrationsQuery {
    pub status: Option<String>,
}

#[derive(Serialize)]
pub struct RegistrationInfo {
    pub id: Uuid,
    pub member: super::member::MemberBasicInfo,
    pub status: RegistrationStatus,
    pub registered_at: chrono::DateTime<chrono::Utc>,
    pub last_updated: chrono::DateTime<chrono::Utc>,
}

#[derive(Serialize)]
pub struct PoolWithRegistrations {
    pub pool: Pool,
    pub registrations: Vec<RegistrationInfo>,
}
