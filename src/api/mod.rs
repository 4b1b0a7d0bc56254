pub mod endpoint;
pub mod error;
pub mod request;
pub mod response;

use crate::model;
pub use error::Error;
use reqwest::header::{HeaderMap, HeaderValue, AUTHORIZATION, CONTENT_TYPE};
use reqwest::Response;
use response::get_reviews::GetReviews;
use response::get_stations::GetStations;
use response::message::Message;
use serde::Serialize;
use serde_json::Value;

pub fn api(api_url: String) -> Result<model::Api, Error> {
    let client = reqwest::ClientBuilder::new()
        .cookie_store(true)
        .build()
        .or(Err(Error::InternalError))?;

    Ok(model::Api { api_url, client })
}

/// JSON content type, plus a bearer `Authorization` header when `token` is present.
pub fn auth_headers(token: Option<&str>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

    if let Some(token) = token {
        match HeaderValue::from_str(&format!("Bearer {}", token)) {
            Ok(value) => {
                headers.insert(AUTHORIZATION, value);
            }
            Err(e) => log::warn!("Ignoring access token that is not a valid header: {}", e),
        }
    }
    headers
}

/// Map failed request or non-2xx status to Error
fn map_api_err(error: reqwest::Error) -> Error {
    match error.status() {
        Some(http::StatusCode::UNAUTHORIZED) | Some(http::StatusCode::FORBIDDEN) => {
            Error::Unauthorized(error.to_string())
        }
        _ => Error::ApiError(error.to_string()),
    }
}

/// Read the body of `response` as JSON. Bodies that don't parse are reported with the HTTP
/// status when it wasn't a success, so a backend error page doesn't look like a format problem.
async fn read_json(endpoint: &endpoint::Endpoint, response: Response) -> Result<Value, Error> {
    let status = response.status();
    let text = response
        .text()
        .await
        .map_err(|e| Error::ApiError(format!("Error reading API response: {}", e)))?;

    log::trace!(
        "endpoint: {}, status: {}, response_text: {}",
        endpoint,
        status,
        text
    );

    serde_json::from_str::<Value>(&text).map_err(|e| {
        if status.is_success() {
            Error::InvalidResponse(text, e.to_string())
        } else {
            Error::ApiError(format!("{} responded {}", endpoint, status))
        }
    })
}

async fn get(api: &model::Api, endpoint: &endpoint::Endpoint) -> Result<Value, Error> {
    let url = format!("{}{}", api.api_url, endpoint);

    let response = api
        .client
        .get(url)
        .send()
        .await
        .and_then(Response::error_for_status)
        .map_err(map_api_err)?;

    read_json(endpoint, response).await
}

/// POST `body` as JSON. The backend answers rejections with a readable `message`, so the
/// status code is not treated as an error as long as the body parses.
async fn post<T: Serialize + std::fmt::Debug>(
    api: &model::Api,
    endpoint: &endpoint::Endpoint,
    body: &T,
    token: Option<&str>,
) -> Result<Value, Error> {
    let url = format!("{}{}", api.api_url, endpoint);

    log::debug!("POST {}: {:?}", endpoint, body);

    let response = api
        .client
        .post(url)
        .headers(auth_headers(token))
        .json(body)
        .send()
        .await
        .map_err(map_api_err)?;

    read_json(endpoint, response).await
}

fn into_message(value: Value) -> Result<model::ApiMessage, Error> {
    serde_json::from_value::<Message>(value)
        .or(Err(Error::UnexpectedApiResponse))
        .map(|response| model::ApiMessage {
            success: response.success,
            message: response.message,
        })
}

/// Every station the backend knows about, available or not.
pub async fn stations(api: &model::Api) -> Result<Vec<model::Station>, Error> {
    get(api, endpoint::STATIONS)
        .await
        .map(serde_json::from_value::<GetStations>)?
        .or(Err(Error::UnexpectedApiResponse))
        .map(|response| {
            response
                .stations
                .into_iter()
                .map(|sta_resp| model::Station {
                    name: sta_resp.name,
                    area: sta_resp.area,
                    connector: sta_resp.connector,
                    speed: sta_resp.speed,
                    slots_total: sta_resp.slots_total,
                    slots_booked: sta_resp.slots_booked,
                    approx_rate: sta_resp.approx_rate,
                    open_now: sta_resp.open_now,
                    is_available: sta_resp.is_available,
                    /* an empty url means no picture */
                    image_url: sta_resp.image_url.filter(|url| !url.is_empty()),
                })
                .collect()
        })
}

pub async fn reviews(api: &model::Api) -> Result<Vec<model::Review>, Error> {
    get(api, endpoint::REVIEWS)
        .await
        .map(serde_json::from_value::<GetReviews>)?
        .or(Err(Error::UnexpectedApiResponse))
        .map(|response| {
            response
                .reviews
                .into_iter()
                .map(|resp| model::Review {
                    name: resp.name,
                    rating: resp.rating,
                    text: resp.text,
                })
                .collect()
        })
}

pub async fn create_booking(
    api: &model::Api,
    booking: &request::Booking,
    token: Option<&str>,
) -> Result<model::ApiMessage, Error> {
    post(api, endpoint::BOOKINGS, booking, token)
        .await
        .and_then(into_message)
}

pub async fn create_review(
    api: &model::Api,
    review: &request::NewReview,
    token: Option<&str>,
) -> Result<model::ApiMessage, Error> {
    post(api, endpoint::ADD_REVIEW, review, token)
        .await
        .and_then(into_message)
}

pub async fn send_contact(
    api: &model::Api,
    contact: &request::Contact,
    token: Option<&str>,
) -> Result<model::ApiMessage, Error> {
    post(api, endpoint::CONTACT, contact, token)
        .await
        .and_then(into_message)
}

pub async fn subscribe_newsletter(
    api: &model::Api,
    newsletter: &request::Newsletter,
    token: Option<&str>,
) -> Result<model::ApiMessage, Error> {
    post(api, endpoint::NEWSLETTER, newsletter, token)
        .await
        .and_then(into_message)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn auth_headers_without_token() {
        let headers = auth_headers(None);
        assert_eq!("application/json", headers[CONTENT_TYPE]);
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn auth_headers_with_token() {
        let headers = auth_headers(Some("abc.def"));
        assert_eq!("Bearer abc.def", headers[AUTHORIZATION]);
    }

    #[test]
    fn auth_headers_skip_invalid_token() {
        let headers = auth_headers(Some("bad\ntoken"));
        assert!(headers.get(AUTHORIZATION).is_none());
    }

    #[test]
    fn into_message_defaults() {
        let message = into_message(serde_json::json!({"message": "Subscribed"})).unwrap();
        assert_eq!(
            model::ApiMessage {
                success: false,
                message: "Subscribed".to_string()
            },
            message
        );
    }

    #[test]
    fn into_message_rejects_non_object() {
        assert!(matches!(
            into_message(serde_json::json!([1, 2])),
            Err(Error::UnexpectedApiResponse)
        ));
    }

    #[tokio::test]
    async fn stations_unreachable_backend() {
        let api = api("http://127.0.0.1:1/".to_string()).unwrap();
        assert!(matches!(stations(&api).await, Err(Error::ApiError(_))));
    }
}
