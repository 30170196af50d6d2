use diesel::prelude::*;
use uuid::Uuid;

use crate::db::models::audit::{AuditLog, NewAuditLog};
use crate::db::repositories::audit::AuditRepo;
use crate::error::AppError;
use crate::services::context::RequestContext;

/// Fire-and-forget audit trail. Writes happen after the guarded transaction
/// has committed; a failed audit write must never fail the operation it
/// describes, so errors are logged and swallowed.
pub struct AuditService;

impl AuditService {
    pub fn log_create(
        conn: &mut PgConnection,
        actor_id: Option<Uuid>,
        entity_type: &str,
        entity_id: Uuid,
        description: impl Into<String>,
        changes: Option<serde_json::Value>,
    ) {
        Self::log(
            conn,
            actor_id,
            entity_type,
            entity_id,
            "create",
            description.into(),
            changes,
        );
    }

    pub fn log_update(
        conn: &mut PgConnection,
        actor_id: Option<Uuid>,
        entity_type: &str,
        entity_id: Uuid,
        description: impl Into<String>,
        changes: Option<serde_json::Value>,
    ) {
        Self::log(
            conn,
            actor_id,
            entity_type,
            entity_id,
            "update",
            description.into(),
            changes,
        );
    }

    pub fn log_delete(
        conn: &mut PgConnection,
        actor_id: Option<Uuid>,
        entity_type: &str,
        entity_id: Uuid,
        description: impl Into<String>,
    ) {
        Self::log(
            conn,
            actor_id,
            entity_type,
            entity_id,
            "delete",
            description.into(),
            None,
        );
    }

    /// Convenience for status transitions: records before/after in the
    /// changes payload.
    pub fn log_transition(
        conn: &mut PgConnection,
        actor_id: Option<Uuid>,
        entity_type: &str,
        entity_id: Uuid,
        before: &str,
        after: &str,
    ) {
        let changes = serde_json::json!({ "before": before, "after": after });
        Self::log(
            conn,
            actor_id,
            entity_type,
            entity_id,
            "update",
            format!("{} status changed from {} to {}", entity_type, before, after),
            Some(changes),
        );
    }

    fn log(
        conn: &mut PgConnection,
        actor_id: Option<Uuid>,
        entity_type: &str,
        entity_id: Uuid,
        action: &str,
        description: String,
        changes: Option<serde_json::Value>,
    ) {
        let new_log = NewAuditLog {
            entity_type: entity_type.to_string(),
            entity_id,
            action: action.to_string(),
            description,
            actor_id,
            changes,
        };
        if let Err(e) = AuditRepo::insert(conn, &new_log) {
            tracing::warn!(
                "audit write failed for {} {}: {}",
                entity_type,
                entity_id,
                e
            );
        }
    }

    pub fn list(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        entity_type: Option<&str>,
        entity_id: Option<Uuid>,
        limit: Option<i64>,
    ) -> Result<Vec<AuditLog>, AppError> {
        ctx.require_manager()?;
        let limit = limit.unwrap_or(100).clamp(1, 500);
        let logs = AuditRepo::list(conn, entity_type, entity_id, limit)?;
        Ok(logs)
    }
}
