//! Transport seam: request/response values and the [`Connection`] trait
//! every resource operation goes through.

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use url::Url;

use crate::{pagination::Pagination, Error};

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// GET and DELETE requests never carry a body.
    pub fn allows_body(&self) -> bool {
        matches!(self, Method::Post | Method::Put)
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Method::Get => "GET",
                Method::Post => "POST",
                Method::Put => "PUT",
                Method::Delete => "DELETE",
            }
        )
    }
}

/// A fully addressed request, built by [`Connection::create_request`].
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,
    url: Url,
    headers: HeaderMap,
    body: Option<Vec<u8>>,
}

impl Request {
    /// A request with no headers and no body.
    pub fn new(method: Method, url: Url) -> Self {
        Self {
            method,
            url,
            headers: HeaderMap::new(),
            body: None,
        }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn headers_mut(&mut self) -> &mut HeaderMap {
        &mut self.headers
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    /// Hands the body to the transport. A second call returns `None`.
    pub fn take_body(&mut self) -> Option<Vec<u8>> {
        self.body.take()
    }

    /// Serializes `body` as JSON and installs it along with `Content-Type: application/json`.
    pub fn set_json_body<B>(&mut self, body: &B) -> Result<(), Error>
    where
        B: Serialize + ?Sized,
    {
        self.check_body_allowed()?;
        let encoded = serde_json::to_vec(body).map_err(Error::Encode)?;
        self.install_json(encoded);
        Ok(())
    }

    /// Installs an already encoded JSON buffer.
    pub fn set_raw_json_body(&mut self, body: impl Into<Vec<u8>>) -> Result<(), Error> {
        self.check_body_allowed()?;
        self.install_json(body.into());
        Ok(())
    }

    fn check_body_allowed(&self) -> Result<(), Error> {
        if self.method.allows_body() {
            Ok(())
        } else {
            Err(Error::InvalidRequest(format!(
                "{} {} cannot carry a body",
                self.method,
                self.url.path()
            )))
        }
    }

    fn install_json(&mut self, body: Vec<u8>) {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        self.body = Some(body);
    }
}

/// A buffered response as the transport received it.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

/// Error payload the service sends with non-success statuses.
#[derive(Deserialize)]
struct ErrorBody {
    code: Option<String>,
    error: Option<String>,
    general_problem: Option<String>,
}

impl Response {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Turns a non-success status into [`Error::HttpStatus`].
    pub fn error_for_status(self) -> Result<Self, Error> {
        if self.is_success() {
            return Ok(self);
        }
        let (code, message) = match serde_json::from_slice::<ErrorBody>(&self.body) {
            Ok(parsed) => (
                parsed.code,
                parsed
                    .error
                    .or(parsed.general_problem)
                    .unwrap_or_else(|| self.body_snippet()),
            ),
            Err(_) => (None, self.body_snippet()),
        };
        Err(Error::HttpStatus {
            status: self.status,
            code,
            message,
        })
    }

    pub fn pagination(&self) -> Pagination {
        Pagination::from_headers(&self.headers)
    }

    /// Decodes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, Error> {
        serde_json::from_slice(&self.body).map_err(|source| Error::Decode {
            source,
            body: self.body_snippet(),
        })
    }

    fn body_snippet(&self) -> String {
        truncate_body(&String::from_utf8_lossy(&self.body))
    }
}

/// Capability the client needs from a transport.
///
/// Implementors supply [`create_request`](Connection::create_request) and
/// [`round_trip`](Connection::round_trip); the provided `execute` methods are
/// the single place where responses are status-checked, paginated, and decoded.
#[async_trait]
pub trait Connection: Send + Sync {
    /// Builds a request for `path` (already project-scoped) with the given query pairs.
    fn create_request(
        &self,
        method: Method,
        path: &str,
        params: &[(String, String)],
    ) -> Result<Request, Error>;

    /// Sends the request and buffers the response. Failures to reach the
    /// service must surface as [`Error::Transport`].
    async fn round_trip(&self, request: Request) -> Result<Response, Error>;

    /// Executes a request whose response body is of no interest (e.g. delete).
    /// The body is never decoded.
    async fn execute(&self, request: Request) -> Result<Pagination, Error> {
        let response = self.round_trip(request).await?.error_for_status()?;
        Ok(response.pagination())
    }

    /// Executes a request and decodes the JSON body into `T`.
    async fn execute_into<T>(&self, request: Request) -> Result<(T, Pagination), Error>
    where
        T: DeserializeOwned + Send,
    {
        let response = self.round_trip(request).await?.error_for_status()?;
        let pagination = response.pagination();
        let value = response.json::<T>()?;
        Ok((value, pagination))
    }
}

pub(crate) fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        body.to_string()
    } else {
        let mut end = MAX;
        while !body.is_char_boundary(end) {
            end -= 1;
        }
        format!("{}...[truncated]", &body[..end])
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn request(method: Method) -> Request {
        Request::new(
            method,
            Url::parse("https://example.com/projects/1/stories").unwrap(),
        )
    }

    fn response(status: u16, body: &str) -> Response {
        Response {
            status,
            headers: HeaderMap::new(),
            body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn json_body_sets_content_type() {
        let mut req = request(Method::Post);
        req.set_json_body(&json!({"name": "Exhaust ports"})).unwrap();
        assert_eq!(
            req.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert_eq!(req.body(), Some(br#"{"name":"Exhaust ports"}"#.as_slice()));
    }

    #[test]
    fn raw_body_sets_content_type_once() {
        let mut req = request(Method::Put);
        req.set_raw_json_body(r#"{"a":1}"#).unwrap();
        req.set_raw_json_body(r#"{"a":2}"#).unwrap();
        assert_eq!(req.headers().get_all(CONTENT_TYPE).iter().count(), 1);
        assert_eq!(req.body(), Some(br#"{"a":2}"#.as_slice()));
    }

    #[test]
    fn no_body_without_attachment() {
        let req = request(Method::Post);
        assert!(req.body().is_none());
        assert!(req.headers().get(CONTENT_TYPE).is_none());
    }

    #[test]
    fn get_and_delete_reject_bodies() {
        for method in [Method::Get, Method::Delete] {
            let mut req = request(method);
            let err = req.set_raw_json_body("{}").unwrap_err();
            assert!(matches!(err, Error::InvalidRequest(_)));
            assert!(req.body().is_none());
            assert!(req.headers().get(CONTENT_TYPE).is_none());
        }
    }

    #[test]
    fn body_is_taken_once() {
        let mut req = request(Method::Post);
        req.set_raw_json_body("{}").unwrap();
        assert_eq!(req.take_body(), Some(b"{}".to_vec()));
        assert_eq!(req.take_body(), None);
    }

    #[test]
    fn error_for_status_reads_service_error() {
        let body = r#"{"code":"unfound_resource","kind":"error","error":"The object you tried to access could not be found."}"#;
        let err = response(404, body).error_for_status().unwrap_err();
        match err {
            Error::HttpStatus {
                status,
                code,
                message,
            } => {
                assert_eq!(status, 404);
                assert_eq!(code.as_deref(), Some("unfound_resource"));
                assert_eq!(message, "The object you tried to access could not be found.");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn error_for_status_falls_back_to_raw_body() {
        let err = response(502, "Bad Gateway").error_for_status().unwrap_err();
        match err {
            Error::HttpStatus { code, message, .. } => {
                assert!(code.is_none());
                assert_eq!(message, "Bad Gateway");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn json_decode_failure_is_decode_error() {
        let err = response(200, "{not json}").json::<Vec<u64>>().unwrap_err();
        assert!(matches!(err, Error::Decode { ref body, .. } if body == "{not json}"));
    }

    #[test]
    fn truncate_long_body() {
        let long = "x".repeat(2500);
        let truncated = truncate_body(&long);
        assert!(truncated.ends_with("...[truncated]"));
        assert_eq!(truncated.len(), 2000 + "...[truncated]".len());
    }
}
