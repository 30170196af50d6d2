use diesel::Connection;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::booking::{Booking, CreateBookingRequest, NewBooking, UpdateBookingRequest},
    db::repositories::bookings::BookingsRepo,
    error::AppError,
    services::AuditService,
    services::context::RequestContext,
    validation::booking::validate_booking_fields,
};

pub struct BookingsService;

impl BookingsService {
    pub fn list(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        from: Option<chrono::NaiveDate>,
        to: Option<chrono::NaiveDate>,
    ) -> Result<Vec<Booking>, AppError> {
        let list = BookingsRepo::list(conn, from, to)?;
        Ok(list)
    }

    pub fn get_by_id(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        booking_id: Uuid,
    ) -> Result<Booking, AppError> {
        let booking = BookingsRepo::find_by_id(conn, booking_id)?
            .ok_or_else(|| AppError::not_found("booking"))?;
        Ok(booking)
    }

    pub fn create(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        req: &CreateBookingRequest,
    ) -> Result<Booking, AppError> {
        ctx.require_manager()?;
        validate_booking_fields(req.session, req.rink_count, &req.event_type)?;

        let new_booking = NewBooking {
            booking_date: req.booking_date,
            session: req.session,
            rink_count: req.rink_count,
            format: req.format,
            gender: req.gender,
            event_type: req.event_type.trim().to_string(),
            notes: req.notes.clone(),
            organiser_id: ctx.member_id,
        };
        let booking = BookingsRepo::insert(conn, &new_booking)?;

        AuditService::log_create(
            conn,
            Some(ctx.member_id),
            "booking",
            booking.id,
            format!(
                "booking created for {} session {}",
                booking.booking_date, booking.session
            ),
            None,
        );
        Ok(booking)
    }

    /// Updates a booking. The format is locked down as soon as any team
    /// instance exists, because instance position counts derive from it.
    pub fn update(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        booking_id: Uuid,
        req: &UpdateBookingRequest,
    ) -> Result<Booking, AppError> {
        ctx.require_manager()?;
        if let (Some(session), Some(rinks)) = (req.session, req.rink_count) {
            validate_booking_fields(session, rinks, req.event_type.as_deref().unwrap_or("event"))?;
        }

        let updated = conn.transaction::<Booking, AppError, _>(|conn| {
            let existing = BookingsRepo::find_by_id(conn, booking_id)?
                .ok_or_else(|| AppError::not_found("booking"))?;

            if let Some(new_format) = req.format {
                if new_format != existing.format
                    && BookingsRepo::instance_count(conn, existing.id)? > 0
                {
                    return Err(AppError::state_conflict(
                        "format cannot change once teams have been instantiated",
                    ));
                }
            }

            Ok(BookingsRepo::update_fields(conn, existing.id, req)?)
        })?;

        AuditService::log_update(
            conn,
            Some(ctx.member_id),
            "booking",
            updated.id,
            "booking updated",
            None,
        );
        Ok(updated)
    }

    /// Deletes a booking and cascades through its pool, registrations,
    /// templates, instances, assignments and substitution entries.
    pub fn delete(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        booking_id: Uuid,
    ) -> Result<(), AppError> {
        ctx.require_manager()?;

        conn.transaction::<(), AppError, _>(|conn| {
            let existing = BookingsRepo::find_by_id(conn, booking_id)?
                .ok_or_else(|| AppError::not_found("booking"))?;
            BookingsRepo::delete_with_children(conn, existing.id)?;
            Ok(())
        })?;

        AuditService::log_delete(
            conn,
            Some(ctx.member_id),
            "booking",
            booking_id,
            "booking deleted with pool, templates and teams",
        );
        Ok(())
    }
}
