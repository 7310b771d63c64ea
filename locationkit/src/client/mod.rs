//! Synchronous client for the geolocation service.
//!
//! Each request shape implements [`Operation`], which knows its HTTP method,
//! host prefix and path. [`LocationClient::execute`] turns a request into an
//! HTTP call:
//!
//! 1. Route the request and build the URL (path members encoded as single
//!    segments, query members appended).
//! 2. Serialize the shape as the JSON body for `POST`, `PUT` and `PATCH`.
//! 3. Sign and send, retrying transient failures per [`RetryPolicy`].
//! 4. Map non-2xx responses to [`LocationError`] and decode 2xx responses
//!    into the operation's result shape.
//!
//! # Example
//!
//! ```no_run
//! use locationkit::client::{ClientConfig, LocationClient};
//! use locationkit::model::SearchPlaceIndexForTextRequest;
//!
//! let client = LocationClient::new(
//!     ClientConfig::default()
//!         .with_region("us-west-2")
//!         .with_api_key("v1.public.abc"),
//! )?;
//!
//! let result = client.search_place_index_for_text(
//!     &SearchPlaceIndexForTextRequest::default()
//!         .with_index_name("explore")
//!         .with_text("Anyplace St")
//!         .with_max_results(5),
//! )?;
//! println!("{:?}", result.results);
//! # Ok::<(), locationkit::client::LocationError>(())
//! ```

mod config;
mod error;
mod http;
mod operations;
mod paginate;
mod retry;
mod route;
mod signer;

pub use config::{ClientConfig, DEFAULT_REGION, DEFAULT_TIMEOUT_SECS, DEFAULT_USER_AGENT};
pub use error::{sanitize_error_code, LocationError, ERROR_TYPE_HEADER};
pub use http::{HttpClient, HttpMethod, HttpRequest, HttpResponse, MockHttpClient, ReqwestClient};
pub use paginate::{PageOutput, Pages, Paginated};
pub use retry::{RetryPolicy, DEFAULT_MAX_ATTEMPTS};
pub use route::{FromResponse, Operation, QueryValue, Route};
pub use signer::{NoSigning, RequestSigner};

use reqwest::Url;
use tracing::{debug, warn};

/// Query member carrying the API key.
const API_KEY_PARAM: &str = "key";

/// Client for every service operation.
///
/// Generic over the transport and the signer so tests can substitute a
/// [`MockHttpClient`] and callers can plug in their own request signing.
/// Holds no mutable state; share it across threads behind an `Arc`.
pub struct LocationClient<C = ReqwestClient, S = NoSigning> {
    config: ClientConfig,
    http: C,
    signer: S,
}

impl LocationClient<ReqwestClient, NoSigning> {
    /// Creates a client backed by reqwest.
    pub fn new(config: ClientConfig) -> Result<Self, LocationError> {
        let http = ReqwestClient::with_timeout(config.timeout)?;
        Ok(Self::with_http_client(config, http))
    }
}

impl<C: HttpClient> LocationClient<C, NoSigning> {
    /// Creates a client on top of any transport.
    pub fn with_http_client(config: ClientConfig, http: C) -> Self {
        Self {
            config,
            http,
            signer: NoSigning,
        }
    }
}

impl<C: HttpClient, S: RequestSigner> LocationClient<C, S> {
    /// Replaces the request signer.
    pub fn with_signer<S2: RequestSigner>(self, signer: S2) -> LocationClient<C, S2> {
        LocationClient {
            config: self.config,
            http: self.http,
            signer,
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Sends an operation and decodes its result.
    pub fn execute<O: Operation>(&self, request: &O) -> Result<O::Output, LocationError> {
        let http_request = self.build_request(request)?;
        let policy = &self.config.retry_policy;
        let mut attempt = 1;

        loop {
            debug!(
                operation = O::NAME,
                attempt,
                method = %http_request.method,
                url = %redact_api_key(&http_request.url),
                "Sending request"
            );

            let error = match self.send_once::<O>(&http_request) {
                Ok(output) => return Ok(output),
                Err(e) => e,
            };

            match policy.delay_for_attempt(attempt) {
                Some(delay) if error.is_retryable() => {
                    warn!(
                        operation = O::NAME,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %error,
                        "Retrying request"
                    );
                    std::thread::sleep(delay);
                    attempt += 1;
                }
                _ => return Err(error),
            }
        }
    }

    /// Iterates every page of a paginated operation.
    pub fn paginate<O>(&self, request: O) -> Pages<'_, O, C, S>
    where
        O: Paginated,
        O::Output: PageOutput,
    {
        Pages::new(self, request)
    }

    /// Builds the unsigned HTTP request for an operation.
    pub fn build_request<O: Operation>(&self, request: &O) -> Result<HttpRequest, LocationError> {
        let mut route = request.route()?;

        if O::ACCEPTS_API_KEY && !route.has_query(API_KEY_PARAM) {
            if let Some(key) = &self.config.api_key {
                route
                    .query
                    .push((API_KEY_PARAM.to_string(), key.clone()));
            }
        }

        let url = self.build_url(&route)?;

        let mut headers = vec![("User-Agent".to_string(), self.config.user_agent.clone())];
        let body = if route.method.has_body() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
            Some(serde_json::to_vec(request)?)
        } else {
            None
        };

        Ok(HttpRequest {
            method: route.method,
            url: url.to_string(),
            headers,
            body,
        })
    }

    fn build_url(&self, route: &Route) -> Result<Url, LocationError> {
        let mut url = self.config.base_url(route.host_prefix)?;

        url.path_segments_mut()
            .map_err(|_| {
                LocationError::InvalidEndpoint(format!("{} cannot carry a path", url_base(route)))
            })?
            .pop_if_empty()
            .extend(&route.segments);

        if !route.query.is_empty() {
            url.query_pairs_mut().extend_pairs(&route.query);
        }

        Ok(url)
    }

    fn send_once<O: Operation>(&self, request: &HttpRequest) -> Result<O::Output, LocationError> {
        let mut signed = request.clone();
        self.signer.sign(&mut signed)?;

        let response = self.http.send(&signed)?;
        if !response.is_success() {
            let error = LocationError::from_response(&response);
            debug!(
                operation = O::NAME,
                status = response.status,
                code = error.code().unwrap_or(""),
                "Request failed"
            );
            return Err(error);
        }

        <O::Output as FromResponse>::from_response(response)
    }
}

fn url_base(route: &Route) -> String {
    format!("{}{}", route.host_prefix, route.path())
}

/// Replaces the API key value in a URL so it never reaches the logs.
fn redact_api_key(url: &str) -> String {
    let Ok(mut parsed) = Url::parse(url) else {
        return url.to_string();
    };
    if !parsed.query_pairs().any(|(k, _)| k == API_KEY_PARAM) {
        return url.to_string();
    }

    let pairs: Vec<(String, String)> = parsed
        .query_pairs()
        .map(|(k, v)| {
            let v = if k == API_KEY_PARAM { "***".into() } else { v };
            (k.into_owned(), v.into_owned())
        })
        .collect();
    parsed.query_pairs_mut().clear().extend_pairs(&pairs);
    parsed.to_string()
}
