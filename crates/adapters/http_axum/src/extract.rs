//! Body extractor for furniture drafts.

use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::{Form, Json};

use muebles_domain::furniture::FurnitureDraft;

use crate::error::ApiError;

const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// A [`FurnitureDraft`] read from a JSON or a form-encoded body.
///
/// Only a declared form content type goes through [`Form`]; every other
/// request is handed to [`Json`], so a missing content type is rejected as a
/// malformed body.
#[derive(Debug)]
pub struct DraftBody(pub FurnitureDraft);

impl<S> FromRequest<S> for DraftBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        if is_form(&req) {
            let Form(draft) = Form::<FurnitureDraft>::from_request(req, state).await?;
            Ok(Self(draft))
        } else {
            let Json(draft) = Json::<FurnitureDraft>::from_request(req, state).await?;
            Ok(Self(draft))
        }
    }
}

fn is_form(req: &Request) -> bool {
    req.headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .is_some_and(|value| value.to_ascii_lowercase().starts_with(FORM_CONTENT_TYPE))
}
