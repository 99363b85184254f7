//! Form/query extractors whose rejections use the JSON error body.

use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Query, Request},
    http::{request::Parts, StatusCode},
    response::Response,
    Form,
};
use serde::de::DeserializeOwned;

use crate::app::errors;

/// `Form<T>` that answers a malformed or incomplete body with a 400
/// `validation_error`.
#[derive(Debug)]
pub struct ValidForm<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidForm<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Form(value) = Form::<T>::from_request(req, state)
            .await
            .map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, "validation_error", e.body_text()))?;
        Ok(Self(value))
    }
}

/// `Query<T>` with the same 400 `validation_error` rejection.
#[derive(Debug)]
pub struct ValidQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for ValidQuery<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| errors::json_error(StatusCode::BAD_REQUEST, "validation_error", e.body_text()))?;
        Ok(Self(value))
    }
}
