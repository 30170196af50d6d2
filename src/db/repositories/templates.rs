use diesel::prelude::*;

use crate::db::models::team_template::{
    NewTeamTemplate, NewTemplatePosition, TeamTemplate, TemplatePosition,
};

pub struct TemplatesRepo;

impl TemplatesRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_template: &NewTeamTemplate,
    ) -> Result<TeamTemplate, diesel::result::Error> {
        diesel::insert_into(crate::schema::team_templates::table)
            .values(new_template)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        template_id: uuid::Uuid,
    ) -> Result<Option<TeamTemplate>, diesel::result::Error> {
        use crate::schema::team_templates::dsl::*;
        team_templates
            .filter(id.eq(template_id))
            .first::<TeamTemplate>(conn)
            .optional()
    }

    pub fn exists_by_name(
        conn: &mut PgConnection,
        booking: uuid::Uuid,
        template_name: &str,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::team_templates::dsl::*;
        let found = team_templates
            .filter(booking_id.eq(booking))
            .filter(name.eq(template_name))
            .select(id)
            .first::<uuid::Uuid>(conn)
            .optional()?;
        Ok(found.is_some())
    }

    pub fn list_by_booking(
        conn: &mut PgConnection,
        booking: uuid::Uuid,
    ) -> Result<Vec<TeamTemplate>, diesel::result::Error> {
        use crate::schema::team_templates::dsl::*;
        team_templates
            .filter(booking_id.eq(booking))
            .order(name.asc())
            .load::<TeamTemplate>(conn)
    }

    pub fn insert_positions(
        conn: &mut PgConnection,
        new_positions: &[NewTemplatePosition],
    ) -> Result<Vec<TemplatePosition>, diesel::result::Error> {
        diesel::insert_into(crate::schema::template_positions::table)
            .values(new_positions)
            .get_results(conn)
    }

    pub fn positions_for(
        conn: &mut PgConnection,
        template: uuid::Uuid,
    ) -> Result<Vec<TemplatePosition>, diesel::result::Error> {
        use crate::schema::template_positions::dsl::*;
        template_positions
            .filter(template_id.eq(template))
            .order(position_order.asc())
            .load::<TemplatePosition>(conn)
    }

    /// Targeted single-slot update. Never rewrites the whole position set;
    /// unrelated slots are untouched by construction.
    pub fn set_position_member(
        conn: &mut PgConnection,
        template: uuid::Uuid,
        position_name: &str,
        member: Option<uuid::Uuid>,
    ) -> Result<TemplatePosition, diesel::result::Error> {
        use crate::schema::template_positions::dsl as tp;
        diesel::update(
            tp::template_positions
                .filter(tp::template_id.eq(template))
                .filter(tp::position.eq(position_name)),
        )
        .set(tp::member_id.eq(member))
        .get_result(conn)
    }

    pub fn touch(
        conn: &mut PgConnection,
        template_id: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::team_templates::dsl as t;
        diesel::update(t::team_templates.filter(t::id.eq(template_id)))
            .set(t::updated_at.eq(chrono::Utc::now()))
            .execute(conn)
    }
}
