// Sub-modules organized by functional domain
pub mod api;
pub mod audit;
pub mod auth;
pub mod booking;
pub mod member;
pub mod pool;
pub mod team_instance;
pub mod team_template;

// Re-export all models so call sites can use `crate::db::models::*`

// API response structures
pub use api::*;

// Authentication DTOs
pub use auth::*;

// Audit trail models
pub use audit::*;

// Booking models
pub use booking::*;

// Member models
pub use member::*;

// Pool and registration models
pub use pool::*;

// Team instance, assignment and substitution models
pub use team_instance::*;

// Team template models
pub use team_template::*;
