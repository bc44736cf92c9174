use chrono::{DateTime, Local};
use hyper::header::HeaderValue;

use crate::api::dto::{LoginRespDto, UserProfileDto};
use crate::error::{AppError, AppErrorCode};

/// Credential of an authenticated user, issued by the login endpoint.
///
/// The session is passed explicitly to every backend call that needs
/// authentication. Logging out consumes the session, so it cannot be
/// reused afterwards.
#[derive(Debug)]
pub struct AppAuthSession {
    token: String,
    profile: Option<UserProfileDto>,
    issued: DateTime<Local>,
}

impl TryFrom<LoginRespDto> for AppAuthSession {
    type Error = AppError;
    fn try_from(value: LoginRespDto) -> Result<Self, Self::Error> {
        if value.token.is_empty() {
            Err(AppError {
                code: AppErrorCode::EmptyInputData,
                detail: Some("auth-token".to_string()),
            })
        } else {
            Ok(Self::new(value.token, value.user))
        }
    }
}

impl AppAuthSession {
    pub fn new(token: String, profile: Option<UserProfileDto>) -> Self {
        Self {
            token,
            profile,
            issued: Local::now(),
        }
    }

    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    pub fn profile(&self) -> Option<&UserProfileDto> {
        self.profile.as_ref()
    }

    pub fn issued(&self) -> &DateTime<Local> {
        &self.issued
    }

    pub(crate) fn bearer_header(&self) -> Result<HeaderValue, AppError> {
        let s = format!("Bearer {}", self.token);
        HeaderValue::from_str(s.as_str()).map_err(|e| AppError {
            code: AppErrorCode::InvalidInput,
            detail: Some(e.to_string()),
        })
    }
} // end of impl AppAuthSession
