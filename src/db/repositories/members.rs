use diesel::prelude::*;

use crate::db::enums::MemberStatus;
use crate::db::models::member::{Member, NewMember};

pub struct MembersRepo;

impl MembersRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_member: &NewMember,
    ) -> Result<Member, diesel::result::Error> {
        diesel::insert_into(crate::schema::members::table)
            .values(new_member)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        member_id: uuid::Uuid,
    ) -> Result<Option<Member>, diesel::result::Error> {
        use crate::schema::members::dsl::*;
        members
            .filter(id.eq(member_id))
            .first::<Member>(conn)
            .optional()
    }

    pub fn find_by_email(
        conn: &mut PgConnection,
        member_email: &str,
    ) -> Result<Option<Member>, diesel::result::Error> {
        use crate::schema::members::dsl::*;
        members
            .filter(email.eq(member_email))
            .first::<Member>(conn)
            .optional()
    }

    pub fn exists_by_email(
        conn: &mut PgConnection,
        member_email: &str,
    ) -> Result<bool, diesel::result::Error> {
        use crate::schema::members::dsl::*;
        let found = members
            .filter(email.eq(member_email))
            .select(id)
            .first::<uuid::Uuid>(conn)
            .optional()?;
        Ok(found.is_some())
    }

    pub fn list(
        conn: &mut PgConnection,
        status_filter: Option<MemberStatus>,
    ) -> Result<Vec<Member>, diesel::result::Error> {
        use crate::schema::members::dsl::*;
        let mut query = members.into_boxed();
        if let Some(s) = status_filter {
            query = query.filter(status.eq(s));
        }
        query.order(name.asc()).load::<Member>(conn)
    }

    pub fn update_profile(
        conn: &mut PgConnection,
        member_id: uuid::Uuid,
        new_name: Option<&str>,
        new_phone: Option<&str>,
    ) -> Result<Member, diesel::result::Error> {
        use crate::schema::members::dsl as m;

        if let Some(name_val) = new_name {
            diesel::update(m::members.filter(m::id.eq(member_id)))
                .set(m::name.eq(name_val))
                .execute(conn)?;
        }
        if let Some(phone_val) = new_phone {
            diesel::update(m::members.filter(m::id.eq(member_id)))
                .set(m::phone.eq(phone_val))
                .execute(conn)?;
        }
        diesel::update(m::members.filter(m::id.eq(member_id)))
            .set(m::updated_at.eq(chrono::Utc::now()))
            .get_result(conn)
    }

    pub fn update_status(
        conn: &mut PgConnection,
        member_id: uuid::Uuid,
        new_status: MemberStatus,
    ) -> Result<Member, diesel::result::Error> {
        use crate::schema::members::dsl as m;
        diesel::update(m::members.filter(m::id.eq(member_id)))
            .set((
                m::status.eq(new_status),
                m::updated_at.eq(chrono::Utc::now()),
            ))
            .get_result(conn)
    }
}
