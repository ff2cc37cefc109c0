use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Session payload handed to the auth slice once sign-in completes upstream.
///
/// Both records come from the identity provider and are carried opaquely;
/// Salesdesk never inspects individual claims.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AuthData {
    /// Basic user info object issued by the identity provider.
    pub user_info: Value,

    /// Decoded claims of the ID token.
    pub decoded_id_token: Value,
}
