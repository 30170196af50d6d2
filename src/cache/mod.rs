pub mod member_cache;
pub mod redis;

pub use member_cache::MemberCache;
