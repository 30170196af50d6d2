use chrono::Utc;
use diesel::Connection;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::enums::Availability,
    db::models::team_instance::{Assignment, NewSubstitution, SubstituteRequest},
    db::repositories::instances::InstancesRepo,
    error::AppError,
    services::AuditService,
    services::context::RequestContext,
    services::instances_service::InstancesService,
};

pub struct AvailabilityService;

impl AvailabilityService {
    /// Records a member's availability answer. Confirmation is one-way:
    /// once `confirmed_at` is set the row never accepts another confirm,
    /// and there is no unconfirm; a changed answer goes through a manager
    /// substitution.
    pub fn confirm(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        assignment_id: Uuid,
        available: bool,
    ) -> Result<Assignment, AppError> {
        let outcome = if available {
            Availability::Available
        } else {
            Availability::Unavailable
        };

        let updated = conn.transaction::<Assignment, AppError, _>(|conn| {
            let assignment = InstancesRepo::find_assignment_locked(conn, assignment_id)?
                .ok_or_else(|| AppError::not_found("assignment"))?;

            // Members answer for themselves; managers may record an answer
            // taken over the phone.
            if assignment.member_id != ctx.member_id {
                ctx.require_manager()?;
            }

            if assignment.confirmed_at.is_some() {
                return Err(AppError::state_conflict("availability is already confirmed"));
            }

            Ok(InstancesRepo::confirm_assignment(
                conn,
                assignment.id,
                outcome,
                Utc::now(),
            )?)
        })?;

        AuditService::log_transition(
            conn,
            Some(ctx.member_id),
            "assignment",
            updated.id,
            Availability::Pending.as_str(),
            outcome.as_str(),
        );
        Ok(updated)
    }

    /// Manager-directed replacement of a slot's occupant, permitted in any
    /// availability state. One transaction updates the assignment row and
    /// appends one substitution-log entry; a failure of either leaves both
    /// untouched.
    pub fn substitute(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        assignment_id: Uuid,
        req: &SubstituteRequest,
    ) -> Result<Assignment, AppError> {
        ctx.require_manager()?;

        let (updated, original_member) = super::with_concurrency_retry(conn, |conn| {
            conn.transaction::<(Assignment, Uuid), AppError, _>(|conn| {
                let assignment = InstancesRepo::find_assignment_locked(conn, assignment_id)?
                    .ok_or_else(|| AppError::not_found("assignment"))?;
                let instance = InstancesRepo::find_by_id(conn, assignment.instance_id)?
                    .ok_or_else(|| AppError::not_found("team instance"))?;

                if req.member_id == assignment.member_id {
                    return Err(AppError::validation(
                        "substitute must differ from the current occupant",
                    ));
                }

                InstancesService::check_members_eligible(
                    conn,
                    instance.booking_id,
                    &[req.member_id],
                    Some(assignment.id),
                )?;

                let now = Utc::now();
                let updated = InstancesRepo::replace_assignment_member(
                    conn,
                    assignment.id,
                    req.member_id,
                    now,
                )?;
                InstancesRepo::insert_substitution(
                    conn,
                    &NewSubstitution {
                        instance_id: instance.id,
                        position: assignment.position.clone(),
                        original_member_id: assignment.member_id,
                        substitute_member_id: req.member_id,
                        changed_by: ctx.member_id,
                        reason: req.reason.clone(),
                    },
                )?;

                Ok((updated, assignment.member_id))
            })
        })?;

        AuditService::log_update(
            conn,
            Some(ctx.member_id),
            "assignment",
            updated.id,
            format!(
                "position {} substituted: {} replaced by {}",
                updated.position, original_member, updated.member_id
            ),
            Some(serde_json::json!({
                "position": updated.position,
                "original_member": original_member,
                "substitute_member": updated.member_id,
                "reason": req.reason,
            })),
        );
        Ok(updated)
    }
}
