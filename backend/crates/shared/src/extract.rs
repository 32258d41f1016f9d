//! Request Extractors
//!
//! Drop-in replacement for `axum::Json` as a request extractor. axum's
//! stock rejection answers 422 for data-shape errors and 415 for a
//! missing content type; the wire contract here is 400 for every
//! malformed payload, so all rejections collapse into
//! [`ErrorKind::BadRequest`](crate::error::kind::ErrorKind::BadRequest).

use axum::extract::{FromRequest, Request, rejection::JsonRejection};
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::app_error::AppError;

/// JSON body extractor with a uniform 400 rejection
pub struct Json<T>(pub T);

impl<S, T> FromRequest<S> for Json<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        match axum::Json::<T>::from_request(req, state).await {
            Ok(axum::Json(value)) => Ok(Self(value)),
            Err(rejection) => {
                let message = match &rejection {
                    JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                        rejection.body_text()
                    }
                    _ => "expected a JSON request body".to_string(),
                };
                Err(AppError::bad_request(message).into_response())
            }
        }
    }
}

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}
