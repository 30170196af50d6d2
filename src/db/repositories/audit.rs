use diesel::prelude::*;

use crate::db::models::audit::{AuditLog, NewAuditLog};

pub struct AuditRepo;

impl AuditRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_log: &NewAuditLog,
    ) -> Result<AuditLog, diesel::result::Error> {
        diesel::insert_into(crate::schema::audit_logs::table)
            .values(new_log)
            .get_result(conn)
    }

    pub fn list(
        conn: &mut PgConnection,
        entity_type_filter: Option<&str>,
        entity_id_filter: Option<uuid::Uuid>,
        limit: i64,
    ) -> Result<Vec<AuditLog>, diesel::result::Error> {
        use crate::schema::audit_logs::dsl::*;
        let mut query = audit_logs.into_boxed();
        if let Some(t) = entity_type_filter {
            query = query.filter(entity_type.eq(t.to_string()));
        }
        if let Some(eid) = entity_id_filter {
            query = query.filter(entity_id.eq(eid));
        }
        query
            .order(created_at.desc())
            .limit(limit)
            .load::<AuditLog>(conn)
    }
}
