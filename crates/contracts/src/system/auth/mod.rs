use serde::{Deserialize, Serialize};

/// Credentials posted to `/auth/login`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub user_kode: String,
    pub user_password: String,
}

/// Payload of a successful login (`data` of the envelope)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    #[serde(default)]
    pub token: Option<String>,
}
