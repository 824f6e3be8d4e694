//! Requester identity extraction
//!
//! Authentication itself happens upstream (session gateway); by the time a
//! request reaches this service the gateway has stamped it with trusted
//! `X-User-Id` and `X-User-Role` headers. This extractor turns those into an
//! explicit requester context so no handler ever reads identity ad hoc.

use crate::error::ServiceError;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use std::future::{ready, Ready};

pub const USER_ID_HEADER: &str = "X-User-Id";
pub const USER_ROLE_HEADER: &str = "X-User-Role";

/// Closed set of requester roles. Unknown role strings never reach a
/// service function.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Role {
    Mentor,
    Student,
}

impl Role {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Mentor => "MENTOR",
            Self::Student => "STUDENT",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "MENTOR" => Some(Self::Mentor),
            "STUDENT" => Some(Self::Student),
            _ => None,
        }
    }
}

/// Identity and role of the caller for a single request cycle.
#[derive(Copy, Clone, Debug)]
pub struct Requester {
    pub id: i32,
    pub role: Role,
}

impl Requester {
    /// Caller id if the caller is a mentor, 403 otherwise.
    pub fn mentor_id(&self) -> Result<i32, ServiceError> {
        match self.role {
            Role::Mentor => Ok(self.id),
            Role::Student => Err(ServiceError::Authorization(
                "Access denied. Mentors only.".to_string(),
            )),
        }
    }

    /// Caller id if the caller is a student, 403 otherwise.
    pub fn student_id(&self) -> Result<i32, ServiceError> {
        match self.role {
            Role::Student => Ok(self.id),
            Role::Mentor => Err(ServiceError::Authorization(
                "Access denied. Students only.".to_string(),
            )),
        }
    }
}

fn requester_from_request(req: &HttpRequest) -> Result<Requester, ServiceError> {
    let id = req
        .headers()
        .get(USER_ID_HEADER)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.parse::<i32>().ok())
        .ok_or_else(|| ServiceError::Authentication("User not authenticated".to_string()))?;

    let role = req
        .headers()
        .get(USER_ROLE_HEADER)
        .and_then(|v| v.to_str().ok())
        .ok_or_else(|| ServiceError::Authentication("User not authenticated".to_string()))?;

    let role = Role::from_str(role)
        .ok_or_else(|| ServiceError::Authorization("Access denied. Invalid role.".to_string()))?;

    Ok(Requester { id, role })
}

impl FromRequest for Requester {
    type Error = ServiceError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(requester_from_request(req))
    }
}
