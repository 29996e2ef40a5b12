/// static error code for when a user could not be created with a given
/// email because its already in use
pub static EMAIL_IN_USE: &str = "EMAIL_IN_USE";

/// a request to a endpoint was not authorized because it did not contain
/// the session id cookie in the request headers
pub static NO_SID_COOKIE: &str = "NO_SID_COOKIE";

/// a request to a endpoint was not authorized because
/// the session on the session id cookie is expired or does not exist
pub static INVALID_SESSION: &str = "INVALID_SESSION";

/// the request user does not have the admin role required by the endpoint
pub static ADMIN_ONLY: &str = "ADMIN_ONLY";

/// a vehicle lifecycle change was rejected, eg: marking a vehicle
/// that is not in stock as sold, or re-listing a sold vehicle
pub static INVALID_STATUS_TRANSITION: &str = "INVALID_STATUS_TRANSITION";

/// a sale confirmation or cancellation was requested but the sale
/// is no longer in the pending state
pub static SALE_NOT_PENDING: &str = "SALE_NOT_PENDING";

/// a advance record already exists for the vehicle, further amounts
/// must be appended as payments instead
pub static ADVANCE_ALREADY_EXISTS: &str = "ADVANCE_ALREADY_EXISTS";
