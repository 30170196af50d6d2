use crate::db::enums::{Availability, GameFormat};
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Team instance models. An instance is a dated snapshot of a template:
// lineage back to the template, never a live link.
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::team_instances)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TeamInstance {
    pub id: Uuid,
    pub template_id: Uuid,
    pub booking_id: Uuid,
    pub name: String,
    pub format: GameFormat,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::team_instances)]
pub struct NewTeamInstance {
    pub template_id: Uuid,
    pub booking_id: Uuid,
    pub name: String,
    pub format: GameFormat,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::assignments)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Assignment {
    pub id: Uuid,
    pub instance_id: Uuid,
    pub member_id: Uuid,
    pub position: String,
    pub position_order: i32,
    pub is_substitute: bool,
    pub availability: Availability,
    pub confirmed_at: Option<chrono::DateTime<chrono::Utc>>,
    pub substituted_at: Option<chrono::DateTime<chrono::Utc>>,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::assignments)]
pub struct NewAssignment {
    pub instance_id: Uuid,
    pub member_id: Uuid,
    pub position: String,
    pub position_order: i32,
    pub is_substitute: bool,
    pub availability: Availability,
}

// Substitution log rows are append-only.
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::substitutions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Substitution {
    pub id: Uuid,
    pub instance_id: Uuid,
    pub position: String,
    pub original_member_id: Uuid,
    pub substitute_member_id: Uuid,
    pub changed_by: Uuid,
    pub reason: Option<String>,
    pub created_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::substitutions)]
pub struct NewSubstitution {
    pub instance_id: Uuid,
    pub position: String,
    pub original_member_id: Uuid,
    pub substitute_member_id: Uuid,
    pub changed_by: Uuid,
    pub reason: Option<String>,
}

// Instance API DTOs
#[derive(Deserialize)]
pub struct ConfirmAvailabilityRequest {
    pub available: bool,
}

#[derive(Deserialize)]
pub struct SubstituteRequest {
    pub member_id: Uuid,
    pub reason: Option<String>,
}

#[derive(Serialize)]
pub struct InstanceWithAssignments {
    pub instance: TeamInstance,
    pub assignments: Vec<Assignment>,
    pub substitutions: Vec<Substitution>,
}
