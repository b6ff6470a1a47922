// Mappers: Convert a solve request into its wire representation
// This keeps the header protocol isolated from business logic

use crate::domain::models::SolveRequest;

/// Identifies the requesting user. Hard-coded; the backend uses it only for
/// bookkeeping, there is no authentication behind it.
pub const HEADER_USERID: &str = "Userid";
pub const HEADER_INSTANCE: &str = "Instance";
pub const HEADER_METHOD: &str = "Method";
pub const HEADER_TIME_LIMIT: &str = "Time-Limit";
pub const HEADER_SEED: &str = "Seed";

/// The fixed user identifier the demo sends with every request.
pub const DEFAULT_USER_ID: &str = "stefano";

/// Serialize a solve request into the header fields the `/compute` route
/// expects. The request carries no body; these five headers are the whole
/// payload. Integers are rendered as decimal strings.
pub fn request_headers(request: &SolveRequest) -> Vec<(&'static str, String)> {
    vec![
        (HEADER_USERID, request.user_id.clone()),
        (HEADER_INSTANCE, request.instance.clone()),
        (HEADER_METHOD, request.method.wire_id().to_string()),
        (HEADER_TIME_LIMIT, request.time_limit_seconds.to_string()),
        (HEADER_SEED, request.seed.to_string()),
    ]
}
