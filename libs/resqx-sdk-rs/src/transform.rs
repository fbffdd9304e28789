//! Request transforms applied by the client before every send.

use std::sync::Arc;

use reqwest::{
    Request,
    header::{AUTHORIZATION, HeaderValue},
};

use crate::error::ResqxError;
use crate::session::SessionContext;

/// One link in the client's pre-send chain.
///
/// Transforms run in insertion order, after bearer auth. Returning an error
/// aborts the call before anything touches the network.
///
/// Plain closures work too:
///
/// ```rust,ignore
/// let client = client.with_transform(|mut req: Request| -> Result<Request, ResqxError> {
///     req.headers_mut().insert("x-dashboard", HeaderValue::from_static("admin"));
///     Ok(req)
/// });
/// ```
pub trait RequestTransform: Send + Sync {
    fn apply(&self, request: Request) -> Result<Request, ResqxError>;
}

impl<F> RequestTransform for F
where
    F: Fn(Request) -> Result<Request, ResqxError> + Send + Sync,
{
    fn apply(&self, request: Request) -> Result<Request, ResqxError> {
        self(request)
    }
}

/// Attaches `Authorization: Bearer <token>` from the session at send time.
///
/// With no token (or an empty one) any `Authorization` header is removed, so
/// a request never leaves with a stale credential.
#[derive(Clone)]
pub struct BearerAuth {
    session: Arc<dyn SessionContext>,
}

impl BearerAuth {
    pub fn new(session: Arc<dyn SessionContext>) -> Self {
        Self { session }
    }
}

impl RequestTransform for BearerAuth {
    fn apply(&self, mut request: Request) -> Result<Request, ResqxError> {
        match self.session.access_token().filter(|t| !t.is_empty()) {
            Some(token) => {
                let mut value = HeaderValue::from_str(&format!("Bearer {}", token)).map_err(
                    |_| ResqxError::Transform("access token is not a valid header value".into()),
                )?;
                value.set_sensitive(true);
                request.headers_mut().insert(AUTHORIZATION, value);
            }
            None => {
                request.headers_mut().remove(AUTHORIZATION);
            }
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{NoSession, StaticSession};
    use reqwest::Method;

    fn request() -> Request {
        Request::new(
            Method::GET,
            "https://api.example.com/v1/orders".parse().unwrap(),
        )
    }

    #[test]
    fn test_bearer_auth_with_token() {
        let auth = BearerAuth::new(Arc::new(StaticSession::new(Some("tok".into()))));
        let req = auth.apply(request()).unwrap();
        assert_eq!(req.headers()[AUTHORIZATION], "Bearer tok");
        assert!(req.headers()[AUTHORIZATION].is_sensitive());
    }

    #[test]
    fn test_bearer_auth_without_token_strips_header() {
        let mut req = request();
        req.headers_mut()
            .insert(AUTHORIZATION, HeaderValue::from_static("Bearer stale"));

        let req = BearerAuth::new(Arc::new(NoSession)).apply(req).unwrap();
        assert!(req.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_bearer_auth_empty_token_is_absent() {
        let auth = BearerAuth::new(Arc::new(StaticSession::new(Some(String::new()))));
        let req = auth.apply(request()).unwrap();
        assert!(req.headers().get(AUTHORIZATION).is_none());
    }

    #[test]
    fn test_bearer_auth_rejects_invalid_token() {
        let auth = BearerAuth::new(Arc::new(StaticSession::new(Some("bad\ntoken".into()))));
        assert!(matches!(
            auth.apply(request()),
            Err(ResqxError::Transform(_))
        ));
    }
}
