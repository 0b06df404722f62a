//! Multipart image uploads.
//!
//! The upload endpoint is the one consumer of multipart bodies: it
//! receives image files and returns the hosted URLs that entity drafts
//! then reference.

use std::sync::Arc;

use crate::http::decode;
use crate::http::{ApiFailure, ApiRequest, HttpMethod, RequestOutcome, Transport, UploadPart};
use crate::session::TokenProvider;

const UPLOAD_PATH: &str = "/upload/images";

/// Client for the hosted-asset upload endpoint.
pub struct ImageUploader {
    transport: Arc<dyn Transport>,
    tokens: Arc<dyn TokenProvider>,
}

impl ImageUploader {
    pub fn new(transport: Arc<dyn Transport>, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { transport, tokens }
    }

    /// Upload image parts and return their hosted URLs.
    ///
    /// An empty part list is rejected locally without a network call.
    pub async fn upload(&self, parts: Vec<UploadPart>) -> Result<Vec<String>, ApiFailure> {
        if parts.is_empty() {
            return Err(ApiFailure::validation("At least one image is required"));
        }

        let request = ApiRequest::new(HttpMethod::Post, UPLOAD_PATH)
            .multipart(parts)
            .bearer(self.tokens.bearer_token());

        match self.transport.send(request).await {
            RequestOutcome::Success { payload } => decode::decode_urls(&payload)
                .map_err(|source| ApiFailure::parse(source.to_string())),
            RequestOutcome::Failure(failure) => Err(failure),
        }
    }
}
