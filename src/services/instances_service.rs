use diesel::Connection;
use diesel::prelude::*;
use diesel::result::DatabaseErrorKind;
use uuid::Uuid;

use crate::{
    db::enums::Availability,
    db::models::team_instance::{InstanceWithAssignments, NewAssignment, NewTeamInstance},
    db::repositories::bookings::BookingsRepo,
    db::repositories::instances::InstancesRepo,
    db::repositories::templates::TemplatesRepo,
    error::AppError,
    services::AuditService,
    services::context::RequestContext,
};

pub struct InstancesService;

impl InstancesService {
    /// Copies a template into a team instance for its booking. The copy is
    /// all-or-nothing: every filled slot becomes an assignment row inside
    /// one transaction, starting at pending availability. Lineage only;
    /// later template edits never reach the instance.
    pub fn instantiate(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        template_id: Uuid,
    ) -> Result<InstanceWithAssignments, AppError> {
        ctx.require_manager()?;

        let result = super::with_concurrency_retry(conn, |conn| {
            conn.transaction::<InstanceWithAssignments, AppError, _>(|conn| {
                let template = TemplatesRepo::find_by_id(conn, template_id)?
                    .ok_or_else(|| AppError::not_found("template"))?;
                let booking = BookingsRepo::find_by_id(conn, template.booking_id)?
                    .ok_or_else(|| AppError::not_found("booking"))?;

                if template.format != booking.format {
                    return Err(AppError::validation(format!(
                        "template format {} does not match booking format {}",
                        template.format, booking.format
                    )));
                }

                if InstancesRepo::find_by_template_and_booking(conn, template.id, booking.id)?
                    .is_some()
                {
                    return Err(AppError::state_conflict(
                        "template is already instantiated for this booking",
                    ));
                }

                let slots = TemplatesRepo::positions_for(conn, template.id)?;
                let filled: Vec<(String, i32, Uuid)> = slots
                    .iter()
                    .filter_map(|slot| {
                        slot.member_id
                            .map(|member| (slot.position.clone(), slot.position_order, member))
                    })
                    .collect();

                let mut member_ids: Vec<Uuid> =
                    filled.iter().map(|(_, _, member)| *member).collect();
                member_ids.sort();
                let unique_count = {
                    let mut deduped = member_ids.clone();
                    deduped.dedup();
                    deduped.len()
                };
                if unique_count != member_ids.len() {
                    return Err(AppError::validation(
                        "a member occupies more than one position in this template",
                    ));
                }

                Self::check_members_eligible(conn, booking.id, &member_ids, None)?;

                let instance = InstancesRepo::insert(
                    conn,
                    &NewTeamInstance {
                        template_id: template.id,
                        booking_id: booking.id,
                        name: template.name.clone(),
                        format: template.format,
                    },
                )?;

                let new_assignments: Vec<NewAssignment> = filled
                    .into_iter()
                    .map(|(position, position_order, member)| NewAssignment {
                        instance_id: instance.id,
                        member_id: member,
                        position,
                        position_order,
                        is_substitute: false,
                        availability: Availability::Pending,
                    })
                    .collect();
                let assignments = InstancesRepo::insert_assignments(conn, &new_assignments)?;

                Ok(InstanceWithAssignments {
                    instance,
                    assignments,
                    substitutions: Vec::new(),
                })
            })
        });

        // A concurrent instantiate can slip past the pre-check; the unique
        // index on (template_id, booking_id) reports it as a conflict, not
        // a duplicate team.
        let result = match result {
            Err(AppError::Database(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _,
            ))) => Err(AppError::state_conflict(
                "template is already instantiated for this booking",
            )),
            other => other,
        }?;

        AuditService::log_create(
            conn,
            Some(ctx.member_id),
            "team_instance",
            result.instance.id,
            format!(
                "team '{}' instantiated from template {} with {} assignments",
                result.instance.name,
                template_id,
                result.assignments.len()
            ),
            None,
        );
        Ok(result)
    }

    /// Eligibility gate shared with substitution: every member must exist,
    /// be an active playing member, and not already hold an assignment in
    /// another team of the same booking.
    pub(crate) fn check_members_eligible(
        conn: &mut PgConnection,
        booking_id: Uuid,
        member_ids: &[Uuid],
        exclude_assignment: Option<Uuid>,
    ) -> Result<(), AppError> {
        use crate::schema::members;

        if member_ids.is_empty() {
            return Ok(());
        }

        let found: Vec<crate::db::models::member::Member> = members::table
            .filter(members::id.eq_any(member_ids))
            .load(conn)?;
        if found.len() != member_ids.len() {
            return Err(AppError::not_found("member"));
        }
        if let Some(inactive) = found.iter().find(|m| !m.is_active()) {
            return Err(AppError::validation(format!(
                "{} is not an active playing member",
                inactive.name
            )));
        }

        let clashes = InstancesRepo::members_already_assigned(
            conn,
            booking_id,
            member_ids,
            exclude_assignment,
        )?;
        if !clashes.is_empty() {
            return Err(AppError::validation(
                "member is already assigned to a team for this booking",
            ));
        }
        Ok(())
    }

    pub fn get_with_assignments(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        instance_id: Uuid,
    ) -> Result<InstanceWithAssignments, AppError> {
        let instance = InstancesRepo::find_by_id(conn, instance_id)?
            .ok_or_else(|| AppError::not_found("team instance"))?;
        let assignments = InstancesRepo::list_assignments(conn, instance.id)?;
        let substitutions = InstancesRepo::list_substitutions(conn, instance.id)?;
        Ok(InstanceWithAssignments {
            instance,
            assignments,
            substitutions,
        })
    }

    pub fn list_by_booking(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        booking_id: Uuid,
    ) -> Result<Vec<InstanceWithAssignments>, AppError> {
        let booking = BookingsRepo::find_by_id(conn, booking_id)?
            .ok_or_else(|| AppError::not_found("booking"))?;
        let instances = InstancesRepo::list_by_booking(conn, booking.id)?;
        let mut result = Vec::with_capacity(instances.len());
        for instance in instances {
            result.push(Self::get_with_assignments(conn, ctx, instance.id)?);
        }
        Ok(result)
    }
}
