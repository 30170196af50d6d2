use crate::db::enums::GameFormat;
use diesel::prelude::*;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// Team template models. A template is a reusable, date-independent team
// shape; instantiating it for a booking snapshots it into assignments.
#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::team_templates)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TeamTemplate {
    pub id: Uuid,
    pub booking_id: Uuid,
    pub name: String,
    pub format: GameFormat,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::team_templates)]
pub struct NewTeamTemplate {
    pub booking_id: Uuid,
    pub name: String,
    pub format: GameFormat,
}

#[derive(Queryable, Selectable, Serialize, Deserialize, Clone)]
#[diesel(table_name = crate::schema::template_positions)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct TemplatePosition {
    pub id: Uuid,
    pub template_id: Uuid,
    pub position: String,
    pub position_order: i32,
    pub member_id: Option<Uuid>,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::template_positions)]
pub struct NewTemplatePosition {
    pub template_id: Uuid,
    pub position: String,
    pub position_order: i32,
    pub member_id: Option<Uuid>,
}

// Template API DTOs
#[derive(Deserialize)]
pub struct CreateTemplateRequest {
    pub name: String,
}

#[derive(Deserialize)]
pub struct AssignPositionRequest {
    pub position: String,
    /// None clears the slot.
    pub member_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct TemplateWithPositions {
    pub template: TeamTemplate,
    pub positions: Vec<TemplatePosition>,
}
