use diesel::prelude::*;

use crate::db::enums::Availability;
use crate::db::models::team_instance::{
    Assignment, NewAssignment, NewSubstitution, NewTeamInstance, Substitution, TeamInstance,
};

pub struct InstancesRepo;

impl InstancesRepo {
    pub fn insert(
        conn: &mut PgConnection,
        new_instance: &NewTeamInstance,
    ) -> Result<TeamInstance, diesel::result::Error> {
        diesel::insert_into(crate::schema::team_instances::table)
            .values(new_instance)
            .get_result(conn)
    }

    pub fn find_by_id(
        conn: &mut PgConnection,
        instance_id: uuid::Uuid,
    ) -> Result<Option<TeamInstance>, diesel::result::Error> {
        use crate::schema::team_instances::dsl::*;
        team_instances
            .filter(id.eq(instance_id))
            .first::<TeamInstance>(conn)
            .optional()
    }

    pub fn find_by_template_and_booking(
        conn: &mut PgConnection,
        template: uuid::Uuid,
        booking: uuid::Uuid,
    ) -> Result<Option<TeamInstance>, diesel::result::Error> {
        use crate::schema::team_instances::dsl::*;
        team_instances
            .filter(template_id.eq(template))
            .filter(booking_id.eq(booking))
            .first::<TeamInstance>(conn)
            .optional()
    }

    pub fn list_by_booking(
        conn: &mut PgConnection,
        booking: uuid::Uuid,
    ) -> Result<Vec<TeamInstance>, diesel::result::Error> {
        use crate::schema::team_instances::dsl::*;
        team_instances
            .filter(booking_id.eq(booking))
            .order(name.asc())
            .load::<TeamInstance>(conn)
    }

    pub fn insert_assignments(
        conn: &mut PgConnection,
        new_assignments: &[NewAssignment],
    ) -> Result<Vec<Assignment>, diesel::result::Error> {
        diesel::insert_into(crate::schema::assignments::table)
            .values(new_assignments)
            .get_results(conn)
    }

    pub fn find_assignment(
        conn: &mut PgConnection,
        assignment_id: uuid::Uuid,
    ) -> Result<Option<Assignment>, diesel::result::Error> {
        use crate::schema::assignments::dsl::*;
        assignments
            .filter(id.eq(assignment_id))
            .first::<Assignment>(conn)
            .optional()
    }

    /// Row-locked read used by confirm and substitute so two mutations of
    /// the same slot serialize.
    pub fn find_assignment_locked(
        conn: &mut PgConnection,
        assignment_id: uuid::Uuid,
    ) -> Result<Option<Assignment>, diesel::result::Error> {
        use crate::schema::assignments::dsl::*;
        assignments
            .filter(id.eq(assignment_id))
            .for_update()
            .first::<Assignment>(conn)
            .optional()
    }

    pub fn list_assignments(
        conn: &mut PgConnection,
        instance: uuid::Uuid,
    ) -> Result<Vec<Assignment>, diesel::result::Error> {
        use crate::schema::assignments::dsl::*;
        assignments
            .filter(instance_id.eq(instance))
            .order(position_order.asc())
            .load::<Assignment>(conn)
    }

    pub fn confirm_assignment(
        conn: &mut PgConnection,
        assignment_id: uuid::Uuid,
        outcome: Availability,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<Assignment, diesel::result::Error> {
        use crate::schema::assignments::dsl as a;
        diesel::update(a::assignments.filter(a::id.eq(assignment_id)))
            .set((
                a::availability.eq(outcome),
                a::confirmed_at.eq(now),
                a::updated_at.eq(now),
            ))
            .get_result(conn)
    }

    /// Replaces the slot occupant: new member goes back to pending with a
    /// cleared confirmation, the substitution timestamp records the swap.
    pub fn replace_assignment_member(
        conn: &mut PgConnection,
        assignment_id: uuid::Uuid,
        new_member: uuid::Uuid,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<Assignment, diesel::result::Error> {
        use crate::schema::assignments::dsl as a;
        diesel::update(a::assignments.filter(a::id.eq(assignment_id)))
            .set((
                a::member_id.eq(new_member),
                a::availability.eq(Availability::Pending),
                a::confirmed_at.eq(None::<chrono::DateTime<chrono::Utc>>),
                a::is_substitute.eq(true),
                a::substituted_at.eq(now),
                a::updated_at.eq(now),
            ))
            .get_result(conn)
    }

    pub fn insert_substitution(
        conn: &mut PgConnection,
        new_substitution: &NewSubstitution,
    ) -> Result<Substitution, diesel::result::Error> {
        diesel::insert_into(crate::schema::substitutions::table)
            .values(new_substitution)
            .get_result(conn)
    }

    pub fn list_substitutions(
        conn: &mut PgConnection,
        instance: uuid::Uuid,
    ) -> Result<Vec<Substitution>, diesel::result::Error> {
        use crate::schema::substitutions::dsl::*;
        substitutions
            .filter(instance_id.eq(instance))
            .order(created_at.asc())
            .load::<Substitution>(conn)
    }

    /// True when any of the given members already occupies a slot in any
    /// team instance of this booking (optionally ignoring one assignment
    /// row, used when substituting within the same slot).
    pub fn members_already_assigned(
        conn: &mut PgConnection,
        booking: uuid::Uuid,
        members: &[uuid::Uuid],
        exclude_assignment: Option<uuid::Uuid>,
    ) -> Result<Vec<uuid::Uuid>, diesel::result::Error> {
        use crate::schema::{assignments, team_instances};
        let mut query = assignments::table
            .inner_join(team_instances::table.on(assignments::instance_id.eq(team_instances::id)))
            .filter(team_instances::booking_id.eq(booking))
            .filter(assignments::member_id.eq_any(members))
            .select(assignments::member_id)
            .into_boxed();
        if let Some(excluded) = exclude_assignment {
            query = query.filter(assignments::id.ne(excluded));
        }
        query.load(conn)
    }
}
