//! Licensing API response bodies.

use serde_json::{json, Value};

/// Successful `init` handshake carrying the given session ID.
pub fn init_success(session_id: &str) -> Value {
    json!({ "success": true, "message": "Initialized", "sessionid": session_id })
}

/// Rejected `init` handshake.
pub fn init_failure(message: &str) -> Value {
    json!({ "success": false, "message": message })
}

/// Plain success without message or info.
pub fn success() -> Value {
    json!({ "success": true })
}

/// Success with a message.
pub fn success_with_message(message: &str) -> Value {
    json!({ "success": true, "message": message })
}

/// Failure with a message.
pub fn failure(message: &str) -> Value {
    json!({ "success": false, "message": message })
}

/// Failure without a message.
pub fn failure_without_message() -> Value {
    json!({ "success": false })
}

/// User lookup result with only username and IP address set.
pub fn user_info(username: &str, ip: &str) -> Value {
    json!({
        "success": true,
        "info": { "username": username, "ip": ip }
    })
}

/// Statistics result with numeric counters.
pub fn stats(users: u64, licenses: u64, online: u64) -> Value {
    json!({
        "success": true,
        "info": { "users": users, "licenses": licenses, "online": online }
    })
}
