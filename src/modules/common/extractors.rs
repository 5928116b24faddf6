use crate::modules::common::responses::SimpleError;
use axum::{
    async_trait,
    extract::{
        rejection::{JsonRejection, QueryRejection},
        FromRequest, FromRequestParts, Query,
    },
    Json,
};
use http::{request::Parts, Request, StatusCode};
use validator::Validate;

/// Extracts the request body as json exactly as `axum::Json<T>` but also
/// requires T to impl `Validate`, if validation fails a bad request with
/// the validation errors is returned
#[derive(Clone, Copy, Debug)]
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for ValidatedJson<T>
where
    Json<T>: FromRequest<S, B, Rejection = JsonRejection>,
    T: Validate,
    B: Send + 'static,
    S: Send + Sync,
{
    type Rejection = (StatusCode, SimpleError);

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| (rejection.status(), SimpleError::from(rejection.body_text())))?;

        payload
            .validate()
            .map_err(|e| (StatusCode::BAD_REQUEST, SimpleError::from(e)))?;

        Ok(ValidatedJson(payload))
    }
}

/// Extracts the request body as json exactly as `axum::Json<T>`, but rejections
/// are returned as a [`SimpleError`] instead of plain text
#[derive(Clone, Copy, Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<S, B, T> FromRequest<S, B> for JsonBody<T>
where
    Json<T>: FromRequest<S, B, Rejection = JsonRejection>,
    B: Send + 'static,
    S: Send + Sync,
{
    type Rejection = (StatusCode, SimpleError);

    async fn from_request(req: Request<B>, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| (rejection.status(), SimpleError::from(rejection.body_text())))?;

        Ok(JsonBody(payload))
    }
}

/// Same as [`ValidatedJson`] but for the query string
#[derive(Clone, Copy, Debug)]
pub struct ValidatedQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ValidatedQuery<T>
where
    Query<T>: FromRequestParts<S, Rejection = QueryRejection>,
    T: Validate,
    S: Send + Sync,
{
    type Rejection = (StatusCode, SimpleError);

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(query) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| (rejection.status(), SimpleError::from(rejection.body_text())))?;

        query
            .validate()
            .map_err(|e| (StatusCode::BAD_REQUEST, SimpleError::from(e)))?;

        Ok(ValidatedQuery(query))
    }
}
