use uuid::Uuid;

use crate::cache::redis::{delete_cache, get_cache, set_cache};
use crate::db::models::auth::AuthMember;

/// 成员缓存键前缀
const MEMBER_CACHE_PREFIX: &str = "member:";

/// 缓存过期时间（秒）
const MEMBER_CACHE_TTL: u64 = 1800; // 30分钟

/// Member-directory cache consulted by the auth middleware. Entries are
/// invalidated whenever a member's status or profile changes.
#[derive(Clone)]
pub struct MemberCache {
    redis_client: redis::Client,
}

impl MemberCache {
    pub fn new(redis_client: redis::Client) -> Self {
        Self { redis_client }
    }

    pub async fn cache_member(&self, member: &AuthMember) {
        let key = format!("{}{}", MEMBER_CACHE_PREFIX, member.id);
        set_cache(&self.redis_client, &key, member, MEMBER_CACHE_TTL).await;
    }

    pub async fn get_member(&self, member_id: Uuid) -> Option<AuthMember> {
        let key = format!("{}{}", MEMBER_CACHE_PREFIX, member_id);
        get_cache(&self.redis_client, &key).await
    }

    pub async fn invalidate(&self, member_id: Uuid) {
        let key = format!("{}{}", MEMBER_CACHE_PREFIX, member_id);
        delete_cache(&self.redis_client, &key).await;
    }
}
