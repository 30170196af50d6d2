use diesel::prelude::*;

use crate::db::enums::RegistrationStatus;
use crate::db::models::pool::{NewPool, NewPoolRegistration, Pool, PoolRegistration};

pub struct PoolsRepo;

impl PoolsRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_pool: &NewPool,
    ) -> Result<Pool, diesel::result::Error> {
        diesel::insert_into(crate::schema::pools::table)
            .values(new_pool)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        pool_id: uuid::Uuid,
    ) -> Result<Option<Pool>, diesel::result::Error> {
        use crate::schema::pools::dsl::*;
        pools.filter(id.eq(pool_id)).first::<Pool>(conn).optional()
    }

    /// Locks the pool row for the rest of the transaction. Used by register
    /// so the open-check and the insert cannot race a concurrent close.
    pub fn find_by_id_locked(
        conn: &mut PgConnection,
        pool_id: uuid::Uuid,
    ) -> Result<Option<Pool>, diesel::result::Error> {
        use crate::schema::pools::dsl::*;
        pools
            .filter(id.eq(pool_id))
            .for_update()
            .first::<Pool>(conn)
            .optional()
    }

    pub fn find_by_booking(
        conn: &mut PgConnection,
        booking: uuid::Uuid,
    ) -> Result<Option<Pool>, diesel::result::Error> {
        use crate::schema::pools::dsl::*;
        pools
            .filter(booking_id.eq(booking))
            .first::<Pool>(conn)
            .optional()
    }

    pub fn close(
        conn: &mut PgConnection,
        pool_id: uuid::Uuid,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<Pool, diesel::result::Error> {
        use crate::schema::pools::dsl as p;
        diesel::update(p::pools.filter(p::id.eq(pool_id)))
            .set((
                p::is_open.eq(false),
                p::closed_at.eq(now),
                p::updated_at.eq(now),
            ))
            .get_result(conn)
    }

    /// Closes every open pool whose auto-close deadline has passed, returning
    /// the pools that were closed by this sweep.
    pub fn close_due(
        conn: &mut PgConnection,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<Vec<Pool>, diesel::result::Error> {
        use crate::schema::pools::dsl as p;
        diesel::update(
            p::pools
                .filter(p::is_open.eq(true))
                .filter(p::auto_close_at.is_not_null())
                .filter(p::auto_close_at.le(now)),
        )
        .set((
            p::is_open.eq(false),
            p::closed_at.eq(now),
            p::updated_at.eq(now),
        ))
        .get_results(conn)
    }
}

pub struct RegistrationsRepo;

impl RegistrationsRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_registration: &NewPoolRegistration,
    ) -> Result<PoolRegistration, diesel::result::Error> {
        diesel::insert_into(crate::schema::pool_registrations::table)
            .values(new_registration)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        registration_id: uuid::Uuid,
    ) -> Result<Option<PoolRegistration>, diesel::result::Error> {
        use crate::schema::pool_registrations::dsl::*;
        pool_registrations
            .filter(id.eq(registration_id))
            .first::<PoolRegistration>(conn)
            .optional()
    }

    pub fn find_by_pool_and_member(
        conn: &mut PgConnection,
        pool: uuid::Uuid,
        member: uuid::Uuid,
    ) -> Result<Option<PoolRegistration>, diesel::result::Error> {
        use crate::schema::pool_registrations::dsl::*;
        pool_registrations
            .filter(pool_id.eq(pool))
            .filter(member_id.eq(member))
            .first::<PoolRegistration>(conn)
            .optional()
    }

    pub fn update_status(
        conn: &mut PgConnection,
        registration_id: uuid::Uuid,
        new_status: RegistrationStatus,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<PoolRegistration, diesel::result::Error> {
        use crate::schema::pool_registrations::dsl as r;
        diesel::update(r::pool_registrations.filter(r::id.eq(registration_id)))
            .set((r::status.eq(new_status), r::last_updated.eq(now)))
            .get_result(conn)
    }

    pub fn mark_withdrawn(
        conn: &mut PgConnection,
        registration_id: uuid::Uuid,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<PoolRegistration, diesel::result::Error> {
        use crate::schema::pool_registrations::dsl as r;
        diesel::update(r::pool_registrations.filter(r::id.eq(registration_id)))
            .set((
                r::status.eq(RegistrationStatus::Withdrawn),
                r::withdrawn_at.eq(now),
                r::last_updated.eq(now),
            ))
            .get_result(conn)
    }

    /// Reactivates a withdrawn registration in place. The row id is kept so
    /// one (pool, member) pair never grows a second row.
    pub fn reactivate(
        conn: &mut PgConnection,
        registration_id: uuid::Uuid,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<PoolRegistration, diesel::result::Error> {
        use crate::schema::pool_registrations::dsl as r;
        diesel::update(r::pool_registrations.filter(r::id.eq(registration_id)))
            .set((
                r::status.eq(RegistrationStatus::Registered),
                r::withdrawn_at.eq(None::<chrono::DateTime<chrono::Utc>>),
                r::registered_at.eq(now),
                r::last_updated.eq(now),
            ))
            .get_result(conn)
    }

    pub fn list_by_pool(
        conn: &mut PgConnection,
        pool: uuid::Uuid,
        status_filter: Option<RegistrationStatus>,
    ) -> Result<Vec<PoolRegistration>, diesel::result::Error> {
        use crate::schema::pool_registrations::dsl::*;
        let mut query = pool_registrations.filter(pool_id.eq(pool)).into_boxed();
        if let Some(s) = status_filter {
            query = query.filter(status.eq(s));
        }
        query
            .order(registered_at.asc())
            .load::<PoolRegistration>(conn)
    }
}
