/// a action could not be executed because the session
/// profile lacks the required permission
pub static MISSING_PERMISSIONS: &str = "MISSING_PERMISSIONS";

/// a request to a endpoint was not authorized because it did not
/// contain the session headers or they could not be parsed
pub static NO_SESSION: &str = "NO_SESSION";

/// a vehicle could not be created or updated with a given
/// plate because its already in use by another vehicle
pub static PLATE_IN_USE: &str = "PLATE_IN_USE";

/// the requested entity does not exist
pub static NOT_FOUND: &str = "NOT_FOUND";

/// a buyer could not be created with a given email
/// because its already in use by another buyer
pub static EMAIL_IN_USE: &str = "EMAIL_IN_USE";
