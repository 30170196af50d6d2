use uuid::Uuid;

use crate::db::enums::MemberRole;
use crate::error::AppError;

/// Actor identity for a single request. Every mutating service call takes
/// one of these; there is no ambient "current user".
#[derive(Clone, Debug)]
pub struct RequestContext {
    pub member_id: Uuid,
    pub role: MemberRole,
}

impl RequestContext {
    pub fn new(member_id: Uuid, role: MemberRole) -> Self {
        Self { member_id, role }
    }

    pub fn is_manager(&self) -> bool {
        self.role.can_manage()
    }

    pub fn require_manager(&self) -> Result<(), AppError> {
        if self.is_manager() {
            Ok(())
        } else {
            Err(AppError::auth("manager role required"))
        }
    }
}

impl From<&crate::db::models::auth::AuthMember> for RequestContext {
    fn from(member: &crate::db::models::auth::AuthMember) -> Self {
        Self::new(member.id, member.role)
    }
}
