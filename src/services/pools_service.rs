use chrono::Utc;
use diesel::Connection;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::enums::RegistrationStatus,
    db::models::pool::{
        NewPool, NewPoolRegistration, OpenPoolRequest, Pool, PoolRegistration,
        PoolWithRegistrations, RegistrationInfo,
    },
    db::repositories::bookings::BookingsRepo,
    db::repositories::members::MembersRepo,
    db::repositories::pools::{PoolsRepo, RegistrationsRepo},
    error::AppError,
    services::AuditService,
    services::context::RequestContext,
    validation::pool::validate_auto_close,
};

pub struct PoolsService;

impl PoolsService {
    /// Opens the registration pool for a booking. A booking owns at most
    /// one pool.
    pub fn open_pool(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        booking_id: Uuid,
        req: &OpenPoolRequest,
    ) -> Result<Pool, AppError> {
        ctx.require_manager()?;
        validate_auto_close(req.auto_close_at)?;

        let pool = conn.transaction::<Pool, AppError, _>(|conn| {
            let booking = BookingsRepo::find_by_id(conn, booking_id)?
                .ok_or_else(|| AppError::not_found("booking"))?;

            if PoolsRepo::find_by_booking(conn, booking.id)?.is_some() {
                return Err(AppError::state_conflict(
                    "booking already has a registration pool",
                ));
            }

            let new_pool = NewPool {
                booking_id: booking.id,
                is_open: true,
                auto_close_at: req.auto_close_at,
            };
            Ok(PoolsRepo::insert(conn, &new_pool)?)
        })?;

        AuditService::log_create(
            conn,
            Some(ctx.member_id),
            "pool",
            pool.id,
            format!("pool opened for booking {}", pool.booking_id),
            None,
        );
        Ok(pool)
    }

    /// Registers a member into an open pool. The pool row is locked for the
    /// duration of the transaction so the open-check cannot race a
    /// concurrent close. A withdrawn registration is reactivated in place;
    /// a live one is rejected: one row per (pool, member), always.
    pub fn register(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        pool_id: Uuid,
        member_override: Option<Uuid>,
    ) -> Result<PoolRegistration, AppError> {
        let target = member_override.unwrap_or(ctx.member_id);
        if target != ctx.member_id {
            ctx.require_manager()?;
        }

        let (registration, reactivated) = super::with_concurrency_retry(conn, |conn| {
            conn.transaction::<(PoolRegistration, bool), AppError, _>(|conn| {
                let pool = PoolsRepo::find_by_id_locked(conn, pool_id)?
                    .ok_or_else(|| AppError::not_found("pool"))?;
                if !pool.is_open {
                    return Err(AppError::state_conflict("pool is closed"));
                }

                let member = MembersRepo::find_by_id(conn, target)?
                    .ok_or_else(|| AppError::not_found("member"))?;
                if !member.is_active() {
                    return Err(AppError::validation(
                        "member is not an active playing member",
                    ));
                }

                let now = Utc::now();
                match RegistrationsRepo::find_by_pool_and_member(conn, pool.id, target)? {
                    Some(existing) if existing.status == RegistrationStatus::Withdrawn => {
                        let row = RegistrationsRepo::reactivate(conn, existing.id, now)?;
                        Ok((row, true))
                    }
                    Some(_) => Err(AppError::state_conflict(
                        "member is already registered in this pool",
                    )),
                    None => {
                        let new_registration = NewPoolRegistration {
                            pool_id: pool.id,
                            member_id: target,
                            status: RegistrationStatus::Registered,
                        };
                        Ok((RegistrationsRepo::insert(conn, &new_registration)?, false))
                    }
                }
            })
        })?;

        if reactivated {
            AuditService::log_transition(
                conn,
                Some(ctx.member_id),
                "pool_registration",
                registration.id,
                RegistrationStatus::Withdrawn.as_str(),
                RegistrationStatus::Registered.as_str(),
            );
        } else {
            AuditService::log_create(
                conn,
                Some(ctx.member_id),
                "pool_registration",
                registration.id,
                format!("member {} registered into pool {}", target, pool_id),
                None,
            );
        }
        Ok(registration)
    }

    /// Withdraws a member's registration. Withdrawing twice is a no-op.
    pub fn withdraw(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        pool_id: Uuid,
        member_override: Option<Uuid>,
    ) -> Result<PoolRegistration, AppError> {
        let target = member_override.unwrap_or(ctx.member_id);
        if target != ctx.member_id {
            ctx.require_manager()?;
        }

        let (registration, before) =
            conn.transaction::<(PoolRegistration, RegistrationStatus), AppError, _>(|conn| {
                let existing = RegistrationsRepo::find_by_pool_and_member(conn, pool_id, target)?
                    .ok_or_else(|| AppError::not_found("registration"))?;
                if existing.status == RegistrationStatus::Withdrawn {
                    return Ok((existing, RegistrationStatus::Withdrawn));
                }
                let before = existing.status;
                let row = RegistrationsRepo::mark_withdrawn(conn, existing.id, Utc::now())?;
                Ok((row, before))
            })?;

        if before != RegistrationStatus::Withdrawn {
            AuditService::log_transition(
                conn,
                Some(ctx.member_id),
                "pool_registration",
                registration.id,
                before.as_str(),
                RegistrationStatus::Withdrawn.as_str(),
            );
        }
        Ok(registration)
    }

    /// Member confirms readiness: registered → available.
    pub fn mark_available(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        pool_id: Uuid,
        member_override: Option<Uuid>,
    ) -> Result<PoolRegistration, AppError> {
        let target = member_override.unwrap_or(ctx.member_id);
        if target != ctx.member_id {
            ctx.require_manager()?;
        }
        Self::transition(conn, ctx, pool_id, target, RegistrationStatus::Available)
    }

    /// Manager picks a member for a team: available → selected.
    pub fn select(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        pool_id: Uuid,
        member_id: Uuid,
    ) -> Result<PoolRegistration, AppError> {
        ctx.require_manager()?;
        Self::transition(conn, ctx, pool_id, member_id, RegistrationStatus::Selected)
    }

    /// Manager releases a selection: selected → available, nothing lost.
    pub fn unselect(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        pool_id: Uuid,
        member_id: Uuid,
    ) -> Result<PoolRegistration, AppError> {
        ctx.require_manager()?;
        Self::transition(conn, ctx, pool_id, member_id, RegistrationStatus::Available)
    }

    fn transition(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        pool_id: Uuid,
        member_id: Uuid,
        next: RegistrationStatus,
    ) -> Result<PoolRegistration, AppError> {
        let (registration, before) =
            conn.transaction::<(PoolRegistration, RegistrationStatus), AppError, _>(|conn| {
                let existing = RegistrationsRepo::find_by_pool_and_member(conn, pool_id, member_id)?
                    .ok_or_else(|| AppError::not_found("registration"))?;
                if !existing.status.can_transition_to(next) {
                    return Err(AppError::state_conflict(format!(
                        "registration cannot move from {} to {}",
                        existing.status, next
                    )));
                }
                let before = existing.status;
                let row = RegistrationsRepo::update_status(conn, existing.id, next, Utc::now())?;
                Ok((row, before))
            })?;

        AuditService::log_transition(
            conn,
            Some(ctx.member_id),
            "pool_registration",
            registration.id,
            before.as_str(),
            next.as_str(),
        );
        Ok(registration)
    }

    /// Closes a pool. Closing an already-closed pool is a no-op, not an
    /// error.
    pub fn close_pool(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        pool_id: Uuid,
    ) -> Result<Pool, AppError> {
        ctx.require_manager()?;

        let (pool, was_open) = conn.transaction::<(Pool, bool), AppError, _>(|conn| {
            let existing = PoolsRepo::find_by_id_locked(conn, pool_id)?
                .ok_or_else(|| AppError::not_found("pool"))?;
            if !existing.is_open {
                return Ok((existing, false));
            }
            let closed = PoolsRepo::close(conn, existing.id, Utc::now())?;
            Ok((closed, true))
        })?;

        if was_open {
            AuditService::log_update(
                conn,
                Some(ctx.member_id),
                "pool",
                pool.id,
                "pool closed",
                None,
            );
        }
        Ok(pool)
    }

    /// Sweep endpoint: closes every open pool whose auto-close deadline has
    /// passed. Invoked by an external scheduler.
    pub fn auto_close_due(
        conn: &mut PgConnection,
        ctx: &RequestContext,
    ) -> Result<Vec<Pool>, AppError> {
        ctx.require_manager()?;
        let closed = PoolsRepo::close_due(conn, Utc::now())?;
        for pool in &closed {
            AuditService::log_update(
                conn,
                Some(ctx.member_id),
                "pool",
                pool.id,
                "pool auto-closed past deadline",
                None,
            );
        }
        Ok(closed)
    }

    pub fn get_for_booking(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        booking_id: Uuid,
    ) -> Result<PoolWithRegistrations, AppError> {
        let pool = PoolsRepo::find_by_booking(conn, booking_id)?
            .ok_or_else(|| AppError::not_found("pool"))?;
        let registrations = Self::registration_infos(conn, pool.id, None)?;
        Ok(PoolWithRegistrations {
            pool,
            registrations,
        })
    }

    /// Read-only listing, optionally filtered to one status.
    pub fn list_by_status(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        pool_id: Uuid,
        status: Option<&str>,
    ) -> Result<Vec<RegistrationInfo>, AppError> {
        let status_filter = match status {
            Some(raw) => Some(RegistrationStatus::from_str(raw).ok_or_else(|| {
                AppError::validation(format!("unknown registration status '{}'", raw))
            })?),
            None => None,
        };
        let pool =
            PoolsRepo::find_by_id(conn, pool_id)?.ok_or_else(|| AppError::not_found("pool"))?;
        Self::registration_infos(conn, pool.id, status_filter)
    }

    fn registration_infos(
        conn: &mut PgConnection,
        pool_id: Uuid,
        status_filter: Option<RegistrationStatus>,
    ) -> Result<Vec<RegistrationInfo>, AppError> {
        use crate::schema::members;

        let registrations = RegistrationsRepo::list_by_pool(conn, pool_id, status_filter)?;
        let member_ids: Vec<Uuid> = registrations.iter().map(|r| r.member_id).collect();
        let members_list: Vec<crate::db::models::member::Member> = members::table
            .filter(members::id.eq_any(&member_ids))
            .load(conn)?;

        let infos = registrations
            .iter()
            .filter_map(|r| {
                members_list
                    .iter()
                    .find(|m| m.id == r.member_id)
                    .map(|m| RegistrationInfo {
                        id: r.id,
                        member: m.into(),
                        status: r.status,
                        registered_at: r.registered_at,
                        last_updated: r.last_updated,
                    })
            })
            .collect();
        Ok(infos)
    }
}
