pub mod audit_service;
pub mod availability_service;
pub mod bookings_service;
pub mod context;
pub mod instances_service;
pub mod members_service;
pub mod pools_service;
pub mod templates_service;

pub use audit_service::AuditService;
pub use availability_service::AvailabilityService;
pub use bookings_service::BookingsService;
pub use instances_service::InstancesService;
pub use members_service::MembersService;
pub use pools_service::PoolsService;
pub use templates_service::TemplatesService;

use crate::error::AppError;

/// Runs `op` and, when it fails with a retryable concurrency conflict,
/// retries exactly once before surfacing the error.
pub(crate) fn with_concurrency_retry<T>(
    conn: &mut diesel::PgConnection,
    mut op: impl FnMut(&mut diesel::PgConnection) -> Result<T, AppError>,
) -> Result<T, AppError> {
    match op(conn) {
        Err(AppError::Concurrency { message }) => {
            tracing::debug!("retrying after concurrency conflict: {}", message);
            op(conn)
        }
        other => other,
    }
}
