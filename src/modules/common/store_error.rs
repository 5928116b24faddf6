use super::{error_codes::NOT_FOUND, responses::SimpleError};
use convert_case::{Case, Casing};
use http::StatusCode;
use std::fmt;

/// Errors of the in process stores
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// no row with the given id
    NotFound,

    /// the value of a unique column is already used by another row
    UniqueViolation { column: &'static str },
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::NotFound => write!(f, "record not found"),
            StoreError::UniqueViolation { column } => write!(f, "{} already in use", column),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<StoreError> for (StatusCode, SimpleError) {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound => (StatusCode::NOT_FOUND, SimpleError::from(NOT_FOUND)),
            StoreError::UniqueViolation { column } => {
                let snake_cased_col_name = column.to_case(Case::ScreamingSnake);

                let error_msg = format!("{}_IN_USE", snake_cased_col_name);

                (StatusCode::BAD_REQUEST, SimpleError::from(error_msg))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::common::error_codes::{EMAIL_IN_USE, PLATE_IN_USE};

    #[test]
    fn unique_violations_map_to_in_use_codes() {
        let (status, body) =
            <(StatusCode, SimpleError)>::from(StoreError::UniqueViolation { column: "plate" });
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body.error(), PLATE_IN_USE);

        let (_, body) =
            <(StatusCode, SimpleError)>::from(StoreError::UniqueViolation { column: "email" });
        assert_eq!(body.error(), EMAIL_IN_USE);
    }

    #[test]
    fn not_found_is_a_404() {
        let (status, body) = <(StatusCode, SimpleError)>::from(StoreError::NotFound);
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body.error(), "NOT_FOUND");
    }
}
