use redis::AsyncCommands;
use serde::{Serialize, de::DeserializeOwned};

/// Cache reads fall through on any failure; a missing or broken cache must
/// never fail the request it was speeding up.
pub async fn get_cache<T: DeserializeOwned>(client: &redis::Client, key: &str) -> Option<T> {
    let mut conn = client.get_multiplexed_async_connection().await.ok()?;
    let value: String = conn.get(key).await.ok()?;
    serde_json::from_str(&value).ok()
}

pub async fn set_cache<T: Serialize>(client: &redis::Client, key: &str, value: &T, ttl: u64) {
    let Ok(mut conn) = client.get_multiplexed_async_connection().await else {
        return;
    };
    let Ok(json) = serde_json::to_string(value) else {
        return;
    };
    let result: redis::RedisResult<()> = conn.set_ex(key, json, ttl).await;
    if let Err(e) = result {
        tracing::warn!("cache write failed for {}: {}", key, e);
    }
}

pub async fn delete_cache(client: &redis::Client, key: &str) {
    if let Ok(mut conn) = client.get_multiplexed_async_connection().await {
        let _: redis::RedisResult<i32> = conn.del(key).await;
    }
}
