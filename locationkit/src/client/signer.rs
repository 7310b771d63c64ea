//! Request signing seam.
//!
//! Credential resolution and SigV4 signing are left to the caller. A signer
//! sees the fully built request (URL, headers and body) right before each
//! attempt is sent, so it may add `Authorization`, `X-Amz-Date` or session
//! token headers.

use super::error::LocationError;
use super::http::HttpRequest;

pub trait RequestSigner: Send + Sync {
    fn sign(&self, request: &mut HttpRequest) -> Result<(), LocationError>;
}

/// Leaves requests untouched. Suitable for API-key authenticated calls.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoSigning;

impl RequestSigner for NoSigning {
    fn sign(&self, _request: &mut HttpRequest) -> Result<(), LocationError> {
        Ok(())
    }
}

impl<F> RequestSigner for F
where
    F: Fn(&mut HttpRequest) -> Result<(), LocationError> + Send + Sync,
{
    fn sign(&self, request: &mut HttpRequest) -> Result<(), LocationError> {
        self(request)
    }
}
