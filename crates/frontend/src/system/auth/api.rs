use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::error::{AppError, AppResult, ErrorKind};
use crate::shared::http::ApiClient;

const WRONG_CREDENTIALS: &str = "Wrong user code or password.";

/// Exchange credentials for a bearer token
pub async fn login(api: &ApiClient, user_kode: String, password: String) -> AppResult<String> {
    let request = LoginRequest {
        user_kode,
        user_password: password,
    };

    let envelope = api
        .post::<LoginResponse, _>("/auth/login", &request, "Login failed")
        .await
        .map_err(login_error)?;

    envelope
        .data
        .token
        .filter(|token| !token.is_empty())
        .ok_or_else(|| AppError::new(ErrorKind::Authentication, WRONG_CREDENTIALS))
}

/// Anything but a transport failure means the credentials were refused
fn login_error(err: AppError) -> AppError {
    match err.kind {
        ErrorKind::Transport => err,
        _ => AppError::new(ErrorKind::Authentication, WRONG_CREDENTIALS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_error_mapping() {
        let err = login_error(AppError::from_status(401, Some("user not found".into()), "Login failed"));
        assert_eq!(err.kind, ErrorKind::Authentication);
        assert_eq!(err.message, WRONG_CREDENTIALS);

        let err = login_error(AppError::transport("Failed to send request: offline"));
        assert_eq!(err.kind, ErrorKind::Transport);
    }
}
