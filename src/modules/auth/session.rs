use super::constants::{Permission, Profile};
use crate::modules::common::{error_codes::MISSING_PERMISSIONS, responses::SimpleError};
use http::StatusCode;
use std::fmt;
use std::str::FromStr;

/// The logged in user on whose behalf an operation runs.
///
/// It is built by the caller for every operation instead of being read from
/// any process wide state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    pub user_id: i32,
    pub username: String,

    /// `None` when the user profile is unknown, such users have no permissions
    pub profile: Option<Profile>,
}

/// a session lacks the permission needed by a operation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MissingPermission(pub Permission);

impl fmt::Display for MissingPermission {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing permission {}", self.0.code())
    }
}

impl std::error::Error for MissingPermission {}

impl From<MissingPermission> for (StatusCode, SimpleError) {
    fn from(_: MissingPermission) -> Self {
        (StatusCode::FORBIDDEN, SimpleError::from(MISSING_PERMISSIONS))
    }
}

impl SessionContext {
    /// creates a session from a profile description, unknown descriptions
    /// result in a session without profile
    pub fn new(user_id: i32, username: impl Into<String>, profile_description: &str) -> Self {
        SessionContext {
            user_id,
            username: username.into(),
            profile: Profile::from_str(profile_description.trim()).ok(),
        }
    }

    pub fn has_permission(&self, permission: Permission) -> bool {
        self.profile
            .map(|p| p.permissions().contains(&permission))
            .unwrap_or(false)
    }

    pub fn require(&self, permission: Permission) -> Result<(), MissingPermission> {
        if self.has_permission(permission) {
            return Ok(());
        }

        Err(MissingPermission(permission))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_profile_has_no_permissions() {
        let session = SessionContext::new(7, "ana", "Formador");

        assert_eq!(session.profile, None);
        assert_eq!(
            session.require(Permission::ListVehicles),
            Err(MissingPermission(Permission::ListVehicles))
        );
    }

    #[test]
    fn seller_can_update_but_not_delete() {
        let session = SessionContext::new(2, "rui", " vendedor ");

        assert!(session.require(Permission::UpdateVehicle).is_ok());
        assert!(session.require(Permission::DeleteVehicle).is_err());
    }

    #[test]
    fn missing_permission_displays_its_code() {
        let err = MissingPermission(Permission::DeleteVehicle);
        assert_eq!(err.to_string(), "missing permission DELETE_VEHICLE");
    }

    #[test]
    fn missing_permission_is_forbidden() {
        let (status, body) = <(StatusCode, SimpleError)>::from(MissingPermission(Permission::CreateBuyer));

        assert_eq!(status, StatusCode::FORBIDDEN);
        assert_eq!(body.error(), "MISSING_PERMISSIONS");
    }
}
