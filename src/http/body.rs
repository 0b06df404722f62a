//! Request bodies accepted by the executor.

use serde_json::Value;

/// One file part of a multipart upload.
#[derive(Debug, Clone, PartialEq)]
pub struct UploadPart {
    /// Form field name, e.g. `images`.
    pub field: String,
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Body of an outgoing API request.
#[derive(Debug, Clone, PartialEq)]
pub enum RequestBody {
    /// Structured value serialized as JSON.
    Json(Value),
    /// Pre-built multipart payload. The transport supplies the boundary
    /// content type; the executor must not override it.
    Multipart(Vec<UploadPart>),
}

impl RequestBody {
    /// The content type the executor sets explicitly, if any.
    pub fn declared_content_type(&self) -> Option<&'static str> {
        match self {
            RequestBody::Json(_) => Some("application/json"),
            RequestBody::Multipart(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn json_body_declares_json_content_type() {
        let body = RequestBody::Json(json!({"name": "x"}));
        assert_eq!(body.declared_content_type(), Some("application/json"));
    }

    #[test]
    fn multipart_body_declares_no_content_type() {
        let body = RequestBody::Multipart(vec![]);
        assert_eq!(body.declared_content_type(), None);
    }
}
