//! Request decoding shared by the handlers
//!
//! axum's own extractors reject with plain-text bodies; these wrappers route
//! every rejection through [`ServerError`] so clients always get JSON.

use crate::error::ServerError;
use axum::{
    async_trait,
    extract::{FromRequest, FromRequestParts, Path, Query, Request},
    http::{header::CONTENT_TYPE, request::Parts},
    Form, Json,
};
use serde::{de::DeserializeOwned, Deserialize};
use stride_core::CoreError;

/// Body accepted as either `application/x-www-form-urlencoded` or
/// `application/json`, chosen by the `Content-Type` header.
#[derive(Debug, Clone)]
pub struct FormOrJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for FormOrJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ServerError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_ascii_lowercase();

        if content_type.starts_with("application/json") {
            let Json(value) = Json::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
            Ok(Self(value))
        } else if content_type.starts_with("application/x-www-form-urlencoded") {
            let Form(value) = Form::<T>::from_request(req, state)
                .await
                .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
            Ok(Self(value))
        } else {
            Err(ServerError::UnsupportedMediaType(format!(
                "expected a form or JSON body, got {:?}",
                content_type
            )))
        }
    }
}

/// [`Path`] with rejections in the JSON error envelope
#[derive(Debug, Clone)]
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// [`Query`] with rejections in the JSON error envelope
#[derive(Debug, Clone)]
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ServerError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|rejection| ServerError::BadRequest(rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Integer field that may arrive as a JSON number or as text (forms are all text)
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum IntField {
    Number(i64),
    Text(String),
}

impl IntField {
    /// Resolve to an integer, rejecting anything that is not a whole number
    pub fn parse(&self, field: &str) -> Result<i64, CoreError> {
        match self {
            IntField::Number(n) => Ok(*n),
            IntField::Text(s) => s.trim().parse::<i64>().map_err(|_| {
                CoreError::invalid_input(format!("{} must be an integer, got {:?}", field, s))
            }),
        }
    }
}
