#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate prometheus;
#[macro_use]
extern crate rocket;

use config::Config;
use ev_locator::api::{self, request};
use ev_locator::locator::StationFilter;
use ev_locator::render::{self, FormStatus, PageView};
use rocket::form::Form;
use rocket::http::{Cookie, CookieJar};
use rocket::response::content::RawHtml;
use rocket::response::Redirect;
use rocket::{Build, Rocket, State};

mod metrics;
mod page;

use page::PageState;

const API_URL: &str = "https://evstationlocator.onrender.com/api/accounts/";

/// Cookie holding the visitor's bearer token.
const ACCESS: &str = "access";
/// Cookie set once a booking went through.
const BOOKING_DONE: &str = "bookingDone";

const LOGIN_PAGE: &str = "/login.html";
const HELP_PAGE: &str = "/help.html";
const PAYMENT_PAGE: &str = "/payment.html";

#[derive(Clone, serde::Deserialize)]
pub struct LocatorConfig {
    api_url: String,
    initial_limit: usize,
    approx_amount: u32,
}

pub fn read_settings() -> Result<LocatorConfig, config::ConfigError> {
    let mut settings = Config::default();
    settings
        .set_default("api_url", API_URL)?
        .set_default("initial_limit", ev_locator::locator::INITIAL_LIMIT as i64)?
        .set_default("approx_amount", 150_i64)?
        .merge(config::Environment::with_prefix("EV"))?;

    settings.try_into()
}

fn access_token(cookies: &CookieJar<'_>) -> Option<String> {
    cookies.get(ACCESS).map(|c| c.value().to_string())
}

fn booking_done(cookies: &CookieJar<'_>) -> bool {
    cookies
        .get(BOOKING_DONE)
        .map(|c| c.value() == "true")
        .unwrap_or(false)
}

/// Page built from the cached stations. They are fetched only if no load has succeeded yet.
async fn cached_view(state: &PageState, cookies: &CookieJar<'_>) -> PageView {
    state.ensure_loaded().await;
    PageView {
        stations: state.initial_stations(),
        reviews: state.load_reviews().await,
        booking_done: booking_done(cookies),
        ..PageView::default()
    }
}

#[derive(Debug, FromForm)]
struct BookingForm {
    user_name: String,
    vehicle: String,
    connector: String,
    date: String,
    time: String,
    duration: Option<u32>,
}

#[derive(Debug, FromForm)]
struct ReviewForm {
    name: String,
    rating: String,
    text: String,
}

#[derive(Debug, FromForm)]
struct ContactForm {
    name: String,
    email: String,
    message: String,
}

#[derive(Debug, FromForm)]
struct NewsletterForm {
    email: String,
}

#[get("/")]
async fn index(state: &State<PageState>, cookies: &CookieJar<'_>) -> RawHtml<String> {
    let view = PageView {
        stations: state.load_stations().await,
        reviews: state.load_reviews().await,
        booking_done: booking_done(cookies),
        ..PageView::default()
    };
    RawHtml(render::page(&view))
}

#[get("/search?<area>&<connector>&<speed>&<open_now>")]
async fn search(
    state: &State<PageState>,
    cookies: &CookieJar<'_>,
    area: Option<String>,
    connector: Option<String>,
    speed: Option<String>,
    open_now: Option<bool>,
) -> RawHtml<String> {
    state.ensure_loaded().await;
    let filter = StationFilter::new(area, connector, speed, open_now.unwrap_or(false));
    let stations = state.search(&filter);
    log::debug!("{:?} matched {} stations", filter, stations.len());

    let view = PageView {
        locator_result: Some(render::found_message(stations.len())),
        stations,
        ..cached_view(state, cookies).await
    };
    RawHtml(render::page(&view))
}

#[post("/booking", data = "<form>")]
async fn booking(
    state: &State<PageState>,
    cookies: &CookieJar<'_>,
    form: Form<BookingForm>,
) -> RawHtml<String> {
    let form = form.into_inner();
    let booking = request::Booking {
        user_name: form.user_name,
        vehicle: form.vehicle,
        connector: form.connector,
        date: form.date,
        time: form.time,
        duration: form.duration.unwrap_or(0),
        approx_amount: state.approx_amount(),
    };

    let response = state
        .book(&booking, access_token(cookies).as_deref())
        .await;
    if response.success {
        cookies.add(Cookie::new(BOOKING_DONE, "true"));
    }

    let mut view = cached_view(state, cookies).await;
    view.booking_done |= response.success;
    view.booking_status = Some(FormStatus::booking(&response));
    RawHtml(render::page(&view))
}

#[post("/review", data = "<form>")]
async fn review(
    state: &State<PageState>,
    cookies: &CookieJar<'_>,
    form: Form<ReviewForm>,
) -> RawHtml<String> {
    let form = form.into_inner();
    let review = request::NewReview {
        name: form.name,
        rating: form.rating,
        text: form.text,
    };

    /* the list is reloaded whatever the outcome */
    let response = state.review(&review, access_token(cookies).as_deref()).await;
    if !response.success {
        log::warn!("Review not accepted: {}", response.message);
    }

    RawHtml(render::page(&cached_view(state, cookies).await))
}

#[post("/contact", data = "<form>")]
async fn contact(
    state: &State<PageState>,
    cookies: &CookieJar<'_>,
    form: Form<ContactForm>,
) -> RawHtml<String> {
    let form = form.into_inner();
    let contact = request::Contact {
        name: form.name,
        email: form.email,
        message: form.message,
    };

    let response = state
        .contact(&contact, access_token(cookies).as_deref())
        .await;

    let view = PageView {
        contact_result: Some(response.message),
        ..cached_view(state, cookies).await
    };
    RawHtml(render::page(&view))
}

#[post("/newsletter", data = "<form>")]
async fn newsletter(
    state: &State<PageState>,
    cookies: &CookieJar<'_>,
    form: Form<NewsletterForm>,
) -> RawHtml<String> {
    let newsletter = request::Newsletter {
        email: form.into_inner().email,
    };

    let response = state
        .newsletter(&newsletter, access_token(cookies).as_deref())
        .await;

    let view = PageView {
        newsletter_result: Some(response.message),
        ..cached_view(state, cookies).await
    };
    RawHtml(render::page(&view))
}

#[get("/payment")]
fn payment() -> Redirect {
    Redirect::to(PAYMENT_PAGE)
}

#[get("/help")]
fn help() -> Redirect {
    Redirect::to(HELP_PAGE)
}

#[get("/logout")]
fn logout(cookies: &CookieJar<'_>) -> Redirect {
    cookies.remove(ACCESS);
    cookies.remove(BOOKING_DONE);
    Redirect::to(LOGIN_PAGE)
}

#[get("/metrics")]
async fn metrics_route() -> Result<String, api::Error> {
    metrics::read().await
}

fn build(state: PageState) -> Rocket<Build> {
    rocket::build().manage(state).mount(
        "/",
        routes![
            index,
            search,
            booking,
            review,
            contact,
            newsletter,
            payment,
            help,
            logout,
            metrics_route
        ],
    )
}

#[launch]
fn rocket() -> Rocket<Build> {
    env_logger::init();

    let settings = read_settings().expect("Configuration error");
    let api = api::api(settings.api_url).expect("Unable to build HTTP client");
    log::info!("Serving stations from {}", api.api_url);

    build(PageState::new(
        api,
        settings.initial_limit,
        settings.approx_amount,
    ))
}
