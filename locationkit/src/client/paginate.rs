//! `NextToken` pagination.
//!
//! ```no_run
//! use locationkit::client::{ClientConfig, LocationClient};
//! use locationkit::model::ListTrackersRequest;
//!
//! let client = LocationClient::new(ClientConfig::default().with_region("eu-west-1"))?;
//! for page in client.paginate(ListTrackersRequest::default().with_max_results(50)) {
//!     for entry in page?.entries.unwrap_or_default() {
//!         println!("{:?}", entry.tracker_name);
//!     }
//! }
//! # Ok::<(), locationkit::client::LocationError>(())
//! ```

use tracing::warn;

use super::error::LocationError;
use super::http::HttpClient;
use super::route::Operation;
use super::signer::RequestSigner;
use super::LocationClient;
use crate::model::*;

/// A request that can be re-sent with a continuation token.
pub trait Paginated: Operation + Clone {
    fn set_next_token(&mut self, token: Option<String>);
}

/// A page of results that may point at a following page.
pub trait PageOutput {
    fn next_token(&self) -> Option<&str>;
}

/// Iterator over every page of a paginated operation.
///
/// Stops after the first page without a (non-empty) `NextToken`, or whose
/// `NextToken` repeats the token that requested it. An error is yielded once
/// and ends the iteration.
pub struct Pages<'a, O, C, S> {
    client: &'a LocationClient<C, S>,
    request: O,
    last_token: Option<String>,
    done: bool,
}

impl<'a, O, C, S> Pages<'a, O, C, S> {
    pub(crate) fn new(client: &'a LocationClient<C, S>, request: O) -> Self {
        Self {
            client,
            request,
            last_token: None,
            done: false,
        }
    }
}

impl<'a, O, C, S> Iterator for Pages<'a, O, C, S>
where
    O: Paginated,
    O::Output: PageOutput,
    C: HttpClient,
    S: RequestSigner,
{
    type Item = Result<O::Output, LocationError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }

        match self.client.execute(&self.request) {
            Ok(page) => {
                match page.next_token().filter(|token| !token.is_empty()) {
                    Some(token) if self.last_token.as_deref() == Some(token) => {
                        warn!(
                            operation = O::NAME,
                            "Service repeated the previous NextToken, stopping pagination"
                        );
                        self.done = true;
                    }
                    Some(token) => {
                        self.last_token = Some(token.to_string());
                        self.request.set_next_token(self.last_token.clone());
                    }
                    None => self.done = true,
                }
                Some(Ok(page))
            }
            Err(e) => {
                self.done = true;
                Some(Err(e))
            }
        }
    }
}

macro_rules! paginated {
    ($($op:ident),+ $(,)?) => {
        ::paste::paste! {
            $(
                impl Paginated for [<$op Request>] {
                    fn set_next_token(&mut self, token: Option<String>) {
                        self.next_token = token;
                    }
                }

                impl PageOutput for [<$op Result>] {
                    fn next_token(&self) -> Option<&str> {
                        self.next_token.as_deref()
                    }
                }
            )+
        }
    };
}

paginated! {
    ListTrackers,
    ListTrackerConsumers,
    ListDevicePositions,
    GetDevicePositionHistory,
    ListGeofenceCollections,
    ListGeofences,
    ForecastGeofenceEvents,
    ListMaps,
    ListPlaceIndexes,
    ListRouteCalculators,
    ListKeys,
}
