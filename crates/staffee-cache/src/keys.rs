//! Cache key generation.
//!
//! Every identity occupies two entries, `user` and `user_timestamp`,
//! namespaced by key prefix and user id.

/// Entry holding the JSON identity.
pub const USER_KEY: &str = "user";
/// Entry holding the write time in epoch milliseconds.
pub const USER_TIMESTAMP_KEY: &str = "user_timestamp";

fn build_key(prefix: &str, parts: &[&str]) -> String {
    format!("{}:{}", prefix, parts.join(":"))
}

pub fn identity(prefix: &str, user_id: &str) -> String {
    build_key(prefix, &["identity", user_id, USER_KEY])
}

pub fn identity_timestamp(prefix: &str, user_id: &str) -> String {
    build_key(prefix, &["identity", user_id, USER_TIMESTAMP_KEY])
}
