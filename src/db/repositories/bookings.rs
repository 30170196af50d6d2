use diesel::prelude::*;

use crate::db::models::booking::{Booking, NewBooking};

pub struct BookingsRepo;

impl BookingsRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_booking: &NewBooking,
    ) -> Result<Booking, diesel::result::Error> {
        diesel::insert_into(crate::schema::bookings::table)
            .values(new_booking)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        booking_id: uuid::Uuid,
    ) -> Result<Option<Booking>, diesel::result::Error> {
        use crate::schema::bookings::dsl::*;
        bookings
            .filter(id.eq(booking_id))
            .first::<Booking>(conn)
            .optional()
    }

    pub fn list(
        conn: &mut PgConnection,
        from: Option<chrono::NaiveDate>,
        to: Option<chrono::NaiveDate>,
    ) -> Result<Vec<Booking>, diesel::result::Error> {
        use crate::schema::bookings::dsl::*;
        let mut query = bookings.into_boxed();
        if let Some(from_date) = from {
            query = query.filter(booking_date.ge(from_date));
        }
        if let Some(to_date) = to {
            query = query.filter(booking_date.le(to_date));
        }
        query
            .order((booking_date.asc(), session.asc()))
            .load::<Booking>(conn)
    }

    pub fn instance_count(
        conn: &mut PgConnection,
        for_booking: uuid::Uuid,
    ) -> Result<i64, diesel::result::Error> {
        use crate::schema::team_instances::dsl::*;
        team_instances
            .filter(booking_id.eq(for_booking))
            .count()
            .get_result::<i64>(conn)
    }

    pub fn update_fields(
        conn: &mut PgConnection,
        booking_id: uuid::Uuid,
        req: &crate::db::models::booking::UpdateBookingRequest,
    ) -> Result<Booking, diesel::result::Error> {
        use crate::schema::bookings::dsl as b;

        diesel::update(b::bookings.filter(b::id.eq(booking_id)))
            .set((
                req.booking_date.map(|v| b::booking_date.eq(v)),
                req.session.map(|v| b::session.eq(v)),
                req.rink_count.map(|v| b::rink_count.eq(v)),
                req.format.map(|v| b::format.eq(v)),
                req.gender.map(|v| b::gender.eq(v)),
                req.event_type.clone().map(|v| b::event_type.eq(v)),
                req.notes.clone().map(|v| b::notes.eq(v)),
                b::updated_at.eq(chrono::Utc::now()),
            ))
            .get_result(conn)
    }

    /// Removes a booking and everything hanging off it. Callers wrap this in
    /// a transaction.
    pub fn delete_with_children(
        conn: &mut PgConnection,
        booking: uuid::Uuid,
    ) -> Result<usize, diesel::result::Error> {
        use crate::schema::*;

        let instance_ids: Vec<uuid::Uuid> = team_instances::table
            .filter(team_instances::booking_id.eq(booking))
            .select(team_instances::id)
            .load(conn)?;

        diesel::delete(
            substitutions::table.filter(substitutions::instance_id.eq_any(&instance_ids)),
        )
        .execute(conn)?;
        diesel::delete(assignments::table.filter(assignments::instance_id.eq_any(&instance_ids)))
            .execute(conn)?;
        diesel::delete(team_instances::table.filter(team_instances::booking_id.eq(booking)))
            .execute(conn)?;

        let template_ids: Vec<uuid::Uuid> = team_templates::table
            .filter(team_templates::booking_id.eq(booking))
            .select(team_templates::id)
            .load(conn)?;
        diesel::delete(
            template_positions::table.filter(template_positions::template_id.eq_any(&template_ids)),
        )
        .execute(conn)?;
        diesel::delete(team_templates::table.filter(team_templates::booking_id.eq(booking)))
            .execute(conn)?;

        let pool_ids: Vec<uuid::Uuid> = pools::table
            .filter(pools::booking_id.eq(booking))
            .select(pools::id)
            .load(conn)?;
        diesel::delete(
            pool_registrations::table.filter(pool_registrations::pool_id.eq_any(&pool_ids)),
        )
        .execute(conn)?;
        diesel::delete(pools::table.filter(pools::booking_id.eq(booking))).execute(conn)?;

        diesel::delete(bookings::table.filter(bookings::id.eq(booking))).execute(conn)
    }
}
