use diesel::Connection;
use diesel::prelude::*;
use uuid::Uuid;

use crate::{
    db::models::team_template::{
        CreateTemplateRequest, NewTeamTemplate, NewTemplatePosition, TemplatePosition,
        TemplateWithPositions,
    },
    db::repositories::bookings::BookingsRepo,
    db::repositories::members::MembersRepo,
    db::repositories::templates::TemplatesRepo,
    error::AppError,
    services::AuditService,
    services::context::RequestContext,
    validation::template::validate_template_name,
};

pub struct TemplatesService;

impl TemplatesService {
    /// Creates a named template under a booking. Slots are created eagerly,
    /// one per canonical position of the booking's format, all empty.
    pub fn create(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        booking_id: Uuid,
        req: &CreateTemplateRequest,
    ) -> Result<TemplateWithPositions, AppError> {
        ctx.require_manager()?;
        validate_template_name(&req.name)?;
        let name = req.name.trim().to_string();

        let result = conn.transaction::<TemplateWithPositions, AppError, _>(|conn| {
            let booking = BookingsRepo::find_by_id(conn, booking_id)?
                .ok_or_else(|| AppError::not_found("booking"))?;

            if TemplatesRepo::exists_by_name(conn, booking.id, &name)? {
                return Err(AppError::validation(
                    "a template with this name already exists for this booking",
                ));
            }

            let template = TemplatesRepo::insert(
                conn,
                &NewTeamTemplate {
                    booking_id: booking.id,
                    name,
                    format: booking.format,
                },
            )?;

            let new_positions: Vec<NewTemplatePosition> = booking
                .format
                .positions()
                .iter()
                .enumerate()
                .map(|(order, position)| NewTemplatePosition {
                    template_id: template.id,
                    position: position.to_string(),
                    position_order: order as i32,
                    member_id: None,
                })
                .collect();
            let positions = TemplatesRepo::insert_positions(conn, &new_positions)?;

            Ok(TemplateWithPositions {
                template,
                positions,
            })
        })?;

        AuditService::log_create(
            conn,
            Some(ctx.member_id),
            "team_template",
            result.template.id,
            format!(
                "template '{}' created for booking {}",
                result.template.name, result.template.booking_id
            ),
            None,
        );
        Ok(result)
    }

    /// Fills or clears exactly one slot. The other slots of the template
    /// are never touched, so edits cannot silently drop unrelated
    /// assignments.
    pub fn assign_position(
        conn: &mut PgConnection,
        ctx: &RequestContext,
        template_id: Uuid,
        position: &str,
        member_id: Option<Uuid>,
    ) -> Result<TemplatePosition, AppError> {
        ctx.require_manager()?;

        let updated = conn.transaction::<TemplatePosition, AppError, _>(|conn| {
            let template = TemplatesRepo::find_by_id(conn, template_id)?
                .ok_or_else(|| AppError::not_found("template"))?;

            if !template.format.has_position(position) {
                return Err(AppError::validation(format!(
                    "'{}' is not a valid position for {} (expected one of: {})",
                    position,
                    template.format,
                    template.format.positions().join(", ")
                )));
            }

            if let Some(target) = member_id {
                let member = MembersRepo::find_by_id(conn, target)?
                    .ok_or_else(|| AppError::not_found("member"))?;
                if !member.is_active() {
                    return Err(AppError::validation(
                        "member is not an active playing member",
                    ));
                }
            }

            let row = TemplatesRepo::set_position_member(conn, template.id, position, member_id)?;
            TemplatesRepo::touch(conn, template.id)?;
            Ok(row)
        })?;

        AuditService::log_update(
            conn,
            Some(ctx.member_id),
            "team_template",
            template_id,
            format!("position {} updated", position),
            Some(serde_json::json!({
                "position": position,
                "member_id": member_id,
            })),
        );
        Ok(updated)
    }

    pub fn get_with_positions(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        template_id: Uuid,
    ) -> Result<TemplateWithPositions, AppError> {
        let template = TemplatesRepo::find_by_id(conn, template_id)?
            .ok_or_else(|| AppError::not_found("template"))?;
        let positions = TemplatesRepo::positions_for(conn, template.id)?;
        Ok(TemplateWithPositions {
            template,
            positions,
        })
    }

    pub fn list_by_booking(
        conn: &mut PgConnection,
        _ctx: &RequestContext,
        booking_id: Uuid,
    ) -> Result<Vec<TemplateWithPositions>, AppError> {
        let booking = BookingsRepo::find_by_id(conn, booking_id)?
            .ok_or_else(|| AppError::not_found("booking"))?;
        let templates = TemplatesRepo::list_by_booking(conn, booking.id)?;
        let mut result = Vec::with_capacity(templates.len());
        for template in templates {
            let positions = TemplatesRepo::positions_for(conn, template.id)?;
            result.push(TemplateWithPositions {
                template,
                positions,
            });
        }
        Ok(result)
    }
}
