use crate::metrics;
use ev_locator::api::{self, endpoint, request};
use ev_locator::locator::{self, StationFilter};
use ev_locator::model::{Api, ApiMessage, Review, Station};
use ev_locator::Error;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

/// State shared by the page handlers.
pub struct PageState {
    api: Api,
    initial_limit: usize,
    approx_amount: u32,
    /// Available stations from the last successful load; searched without re-fetching.
    stations: RwLock<Vec<Station>>,
    /// Set once the cache has been filled.
    loaded: AtomicBool,
}

impl PageState {
    pub fn new(api: Api, initial_limit: usize, approx_amount: u32) -> Self {
        PageState {
            api,
            initial_limit,
            approx_amount,
            stations: RwLock::new(Vec::new()),
            loaded: AtomicBool::new(false),
        }
    }

    pub fn approx_amount(&self) -> u32 {
        self.approx_amount
    }

    /// Keeps the available subset of `stations` as the new cache. Returns how many were kept.
    pub fn replace_stations(&self, stations: Vec<Station>) -> usize {
        let available = locator::available(stations);
        let count = available.len();

        match self.stations.write() {
            Ok(mut cache) => {
                *cache = available;
                self.loaded.store(true, Ordering::Release);
                metrics::set_cached_stations(count);
            }
            Err(_) => log::error!("Station cache lock poisoned, keeping previous stations"),
        }
        count
    }

    /// The slice shown before any search.
    pub fn initial_stations(&self) -> Vec<Station> {
        self.stations
            .read()
            .map(|cache| locator::initial(&cache, self.initial_limit).to_vec())
            .unwrap_or_default()
    }

    /// Fetch stations, refresh the cache and return the initial slice. On failure the error is
    /// logged, the cache is left alone and nothing is shown.
    pub async fn load_stations(&self) -> Vec<Station> {
        let result = api::stations(&self.api).await;
        metrics::record(endpoint::STATIONS, &result);

        match result {
            Ok(stations) => {
                let count = self.replace_stations(stations);
                log::debug!("Loaded {} available stations", count);
                self.initial_stations()
            }
            Err(e) => {
                log::error!("Station load error: {}", e);
                Vec::new()
            }
        }
    }

    /// Load stations unless an earlier load already filled the cache. Pages reached without
    /// passing through the index still search the backend's stations.
    pub async fn ensure_loaded(&self) {
        if !self.loaded.load(Ordering::Acquire) {
            self.load_stations().await;
        }
    }

    /// All cached stations matching `filter`.
    pub fn search(&self, filter: &StationFilter) -> Vec<Station> {
        self.stations
            .read()
            .map(|cache| filter.apply(&cache))
            .unwrap_or_default()
    }

    pub async fn load_reviews(&self) -> Vec<Review> {
        let result = api::reviews(&self.api).await;
        metrics::record(endpoint::REVIEWS, &result);

        result.unwrap_or_else(|e| {
            log::error!("Review load error: {}", e);
            Vec::new()
        })
    }

    pub async fn book(&self, booking: &request::Booking, token: Option<&str>) -> ApiMessage {
        settle(
            endpoint::BOOKINGS,
            api::create_booking(&self.api, booking, token).await,
        )
    }

    pub async fn review(&self, review: &request::NewReview, token: Option<&str>) -> ApiMessage {
        settle(
            endpoint::ADD_REVIEW,
            api::create_review(&self.api, review, token).await,
        )
    }

    pub async fn contact(&self, contact: &request::Contact, token: Option<&str>) -> ApiMessage {
        settle(
            endpoint::CONTACT,
            api::send_contact(&self.api, contact, token).await,
        )
    }

    pub async fn newsletter(
        &self,
        newsletter: &request::Newsletter,
        token: Option<&str>,
    ) -> ApiMessage {
        settle(
            endpoint::NEWSLETTER,
            api::subscribe_newsletter(&self.api, newsletter, token).await,
        )
    }
}

/// Form submissions never fail towards the visitor; transport problems read as "Server error".
fn settle(endpoint: &endpoint::Endpoint, result: Result<ApiMessage, Error>) -> ApiMessage {
    metrics::record(endpoint, &result);

    result.unwrap_or_else(|e| {
        log::error!("API Error ({}): {}", endpoint, e);
        ApiMessage::server_error()
    })
}
