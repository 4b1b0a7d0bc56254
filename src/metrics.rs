use ev_locator::Error;
use prometheus::{Encoder, IntCounterVec, IntGauge, TextEncoder};

lazy_static! {
    static ref BACKEND_REQUESTS: IntCounterVec = register_int_counter_vec!(
        opts!(
            "backend_requests_total",
            "requests sent to the station API, by endpoint and outcome",
        ),
        &["endpoint", "outcome"],
    )
    .unwrap();
    static ref CACHED_STATIONS: IntGauge = register_int_gauge!(opts!(
        "cached_stations",
        "available stations held for search",
    ))
    .unwrap();
}

/// Count one backend call to `endpoint`.
pub fn record<T>(endpoint: &str, result: &Result<T, Error>) {
    let outcome = if result.is_ok() { "ok" } else { "error" };
    BACKEND_REQUESTS
        .with_label_values(&[endpoint, outcome])
        .inc();
}

pub fn set_cached_stations(count: usize) {
    CACHED_STATIONS.set(count as i64);
}

/// Read metrics from Prometheus exporter registry.
pub async fn read() -> Result<String, Error> {
    let mut buffer = Vec::new();
    let encoder = TextEncoder::new();
    let metric_families = prometheus::gather();

    encoder
        .encode(&metric_families, &mut buffer)
        .or(Err(Error::FormatError))?;
    String::from_utf8(buffer).or(Err(Error::FormatError))
}
