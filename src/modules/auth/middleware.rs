use super::session::SessionContext;
use crate::modules::common::{error_codes::NO_SESSION, responses::SimpleError};
use axum::{async_trait, extract::FromRequestParts};
use http::{request::Parts, HeaderMap, StatusCode};

/// header containing the id of the logged in user
pub static USER_ID_HEADER: &str = "x-user-id";

/// header containing the username of the logged in user
pub static USERNAME_HEADER: &str = "x-username";

/// header containing the profile description of the logged in user, eg: `Vendedor`
pub static USER_PROFILE_HEADER: &str = "x-user-profile";

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Builds the session from the request headers, the headers are expected to be set
/// by the authenticating gateway in front of this API.
///
/// returns `None` if the user id header is missing or is not a number
pub fn get_session_from_headers(headers: &HeaderMap) -> Option<SessionContext> {
    let user_id = header_str(headers, USER_ID_HEADER)?.trim().parse::<i32>().ok()?;
    let username = header_str(headers, USERNAME_HEADER).unwrap_or_default();
    let profile = header_str(headers, USER_PROFILE_HEADER).unwrap_or_default();

    Some(SessionContext::new(user_id, username, profile))
}

/// Extracts the session of the request user, failing with
/// `(StatusCode::UNAUTHORIZED, SimpleError::from(NO_SESSION))`
/// if the session headers are missing.
#[derive(Clone, Debug)]
pub struct RequestSession(pub SessionContext);

#[async_trait]
impl<S> FromRequestParts<S> for RequestSession
where
    S: Send + Sync,
{
    type Rejection = (http::StatusCode, SimpleError);

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        match get_session_from_headers(&parts.headers) {
            Some(session) => Ok(RequestSession(session)),
            None => Err((StatusCode::UNAUTHORIZED, SimpleError::from(NO_SESSION))),
        }
    }
}
