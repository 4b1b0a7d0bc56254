//! HTML for the locator page. Everything here is a pure function of its input.

use crate::model::{ApiMessage, Review, Station};
use std::fmt::Write;

pub const NO_STATIONS: &str = "<p class='small-text'>No stations found.</p>";

const MAX_RATING: u32 = 5;
const SUCCESS_COLOR: &str = "#22c55e";
const FAILURE_COLOR: &str = "red";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Tone {
    Neutral,
    Success,
    Failure,
}

/// Text shown next to a form after it was submitted.
#[derive(Debug, Clone, PartialEq)]
pub struct FormStatus {
    pub message: String,
    pub tone: Tone,
}

impl FormStatus {
    pub fn neutral(message: String) -> Self {
        FormStatus {
            message,
            tone: Tone::Neutral,
        }
    }

    /// Booking outcome: green with the server message on success, red otherwise.
    pub fn booking(response: &ApiMessage) -> Self {
        if response.success {
            let message = if response.message.is_empty() {
                String::from("Booking created!")
            } else {
                response.message.clone()
            };
            FormStatus {
                message,
                tone: Tone::Success,
            }
        } else {
            FormStatus {
                message: response.message.clone(),
                tone: Tone::Failure,
            }
        }
    }

    fn style(&self) -> &'static str {
        match self.tone {
            Tone::Neutral => "",
            Tone::Success => SUCCESS_COLOR,
            Tone::Failure => FAILURE_COLOR,
        }
    }
}

/// Everything the page shows for one request.
#[derive(Debug, Clone, Default)]
pub struct PageView {
    pub stations: Vec<Station>,
    pub locator_result: Option<String>,
    pub booking_status: Option<FormStatus>,
    /// A booking went through for this visitor; offers the payment step.
    pub booking_done: bool,
    pub reviews: Vec<Review>,
    pub contact_result: Option<String>,
    pub newsletter_result: Option<String>,
}

pub fn escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn station_card(station: &Station) -> String {
    let name = escape(&station.name);
    format!(
        r#"<div class="card">
  <img src="{image}" alt="{name}">
  <div class="card-body">
    <div class="card-title-row">
      <h4>{name}</h4>
      <span class="status-dot status-online"></span>
    </div>
    <p class="small-text">{area}</p>
    <div class="card-tags">
      <span class="tag-pill">{connector}</span>
      <span class="tag-pill">{speed}</span>
      <span class="tag-pill">{free} free slots</span>
      <span class="tag-pill">₹{rate}</span>
    </div>
    <div class="card-foot">
      <span class="small-text">{open}</span>
      <span class="small-text">Available</span>
    </div>
  </div>
</div>
"#,
        image = escape(station.image_url.as_deref().unwrap_or("")),
        name = name,
        area = escape(&station.area),
        connector = escape(&station.connector),
        speed = escape(&station.speed),
        free = station.free_slots(),
        rate = station.approx_rate,
        open = if station.open_now { "Open now" } else { "Closed" },
    )
}

/// One card per station, or the "no stations" placeholder.
pub fn stations(stations: &[Station]) -> String {
    if stations.is_empty() {
        return NO_STATIONS.to_string();
    }
    stations.iter().map(station_card).collect()
}

/// Filled stars for `rating`, empty ones up to five. Ratings above five show five.
pub fn stars(rating: u32) -> String {
    let filled = rating.min(MAX_RATING) as usize;
    format!(
        "{}{}",
        "★".repeat(filled),
        "☆".repeat(MAX_RATING as usize - filled)
    )
}

pub fn reviews(reviews: &[Review]) -> String {
    let mut out = String::new();
    for r in reviews {
        /* writing into a String can't fail */
        let _ = write!(
            out,
            r#"<div class="review-item">
  <div class="review-stars">{}</div>
  <strong>{}</strong>
  <p class="small-text">{}</p>
</div>
"#,
            stars(r.rating),
            escape(&r.name),
            escape(&r.text)
        );
    }
    out
}

pub fn found_message(count: usize) -> String {
    format!("Found {} available station(s). Showing below ↓", count)
}

pub fn booking_note() -> &'static str {
    r#"<p class="small-text">Booking created successfully. Proceed to payment.</p>"#
}

fn status(id: &str, status: Option<&FormStatus>) -> String {
    match status {
        Some(status) if !status.style().is_empty() => format!(
            r#"<p id="{}" class="small-text" style="color: {}">{}</p>"#,
            id,
            status.style(),
            escape(&status.message)
        ),
        Some(status) => format!(
            r#"<p id="{}" class="small-text">{}</p>"#,
            id,
            escape(&status.message)
        ),
        None => format!(r#"<p id="{}" class="small-text"></p>"#, id),
    }
}

fn neutral(id: &str, text: Option<&String>) -> String {
    status(id, text.cloned().map(FormStatus::neutral).as_ref())
}

/// The whole locator page.
pub fn page(view: &PageView) -> String {
    let payment_style = if view.booking_done {
        "display: block"
    } else {
        "display: none"
    };

    format!(
        r##"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<meta name="viewport" content="width=device-width, initial-scale=1">
<title>EV Station Locator</title>
<link rel="stylesheet" href="/css/style.css">
</head>
<body>
<nav>
  <details id="navToggle">
    <summary>Menu</summary>
    <div id="navLinks">
      <a href="#stations">Stations</a>
      <a href="#booking">Book a slot</a>
      <a href="#reviews">Reviews</a>
      <a href="#contact">Contact</a>
      <a href="/help">Help</a>
      <a href="/logout">Logout</a>
    </div>
  </details>
</nav>

<section id="locator">
  <form id="locatorForm" method="get" action="/search#stations">
    <input id="searchArea" name="area" placeholder="Search by area">
    <select id="connectorFilter" name="connector">
      <option value="any">Any connector</option>
      <option value="CCS2">CCS2</option>
      <option value="Type2">Type2</option>
      <option value="CHAdeMO">CHAdeMO</option>
    </select>
    <select id="speedFilter" name="speed">
      <option value="any">Any speed</option>
      <option value="fast">Fast</option>
      <option value="slow">Slow</option>
    </select>
    <label><input id="openNowFilter" type="checkbox" name="open_now" value="true"> Open now</label>
    <button id="locatorBtn" type="submit">Find stations</button>
  </form>
  {locator_result}
</section>

<section id="stations">
  <div id="stationList">
{stations}
  </div>
</section>

<section id="booking">
  <form id="bookingForm" method="post" action="/booking#booking">
    <input id="userName" name="user_name" placeholder="Your name">
    <input id="userVehicle" name="vehicle" placeholder="Vehicle">
    <input id="bookingConnector" name="connector" placeholder="Connector">
    <input id="bookingDate" type="date" name="date">
    <input id="bookingTime" type="time" name="time">
    <input id="bookingDuration" type="number" name="duration" min="0" value="1">
    <button type="submit">Book</button>
  </form>
  {booking_status}
  <div id="bookingList">{booking_list}</div>
  <a id="paymentBtn" href="/payment" style="{payment_style}">Proceed to payment</a>
</section>

<section id="reviews">
  <div id="reviewList">
{reviews}
  </div>
  <form id="reviewForm" method="post" action="/review#reviews">
    <input id="reviewName" name="name" placeholder="Your name">
    <select id="reviewRating" name="rating">
      <option value="5">5</option>
      <option value="4">4</option>
      <option value="3">3</option>
      <option value="2">2</option>
      <option value="1">1</option>
    </select>
    <textarea id="reviewText" name="text"></textarea>
    <button type="submit">Add review</button>
  </form>
</section>

<section id="contact">
  <form id="contactForm" method="post" action="/contact#contact">
    <input id="contactName" name="name" placeholder="Name">
    <input id="contactEmail" type="email" name="email" placeholder="Email">
    <textarea id="contactMessage" name="message"></textarea>
    <button type="submit">Send</button>
  </form>
  {contact_result}
</section>

<footer>
  <form id="newsletterForm" method="post" action="/newsletter#newsletter">
    <input id="newsletterEmail" type="email" name="email" placeholder="Email">
    <button type="submit">Subscribe</button>
  </form>
  {newsletter_result}
</footer>
</body>
</html>
"##,
        locator_result = neutral("locatorResult", view.locator_result.as_ref()),
        stations = stations(&view.stations),
        booking_status = status("bookingStatus", view.booking_status.as_ref()),
        booking_list = if view.booking_done { booking_note() } else { "" },
        payment_style = payment_style,
        reviews = reviews(&view.reviews),
        contact_result = neutral("contactResult", view.contact_result.as_ref()),
        newsletter_result = neutral("newsletterResult", view.newsletter_result.as_ref()),
    )
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::locator::test::station;

    fn card_count(html: &str) -> usize {
        html.matches(r#"class="card""#).count()
    }

    #[test]
    fn empty_stations_render_placeholder_only() {
        let html = stations(&[]);
        assert_eq!(NO_STATIONS, html);
        assert_eq!(0, card_count(&html));
    }

    #[test]
    fn one_card_per_station() {
        let list = vec![
            station("Hub", "Koramangala", "CCS2", "fast", true),
            station("Plaza", "Indiranagar", "Type2", "slow", false),
        ];
        let html = stations(&list);
        assert_eq!(2, card_count(&html));
        assert!(html.contains("3 free slots"));
        assert!(html.contains("₹18"));
        assert!(html.contains("Open now"));
        assert!(html.contains("Closed"));
        assert!(html.contains(r#"<img src="" alt="Hub">"#));
    }

    #[test]
    fn overbooked_station_shows_zero_free() {
        let mut s = station("Hub", "Koramangala", "CCS2", "fast", true);
        s.slots_booked = 9;
        assert!(stations(&[s]).contains("0 free slots"));
    }

    #[test]
    fn station_text_is_escaped() {
        let s = station("<b>Hub</b>", "A & B", "CCS2", "fast", true);
        let html = stations(&[s]);
        assert!(html.contains("&lt;b&gt;Hub&lt;/b&gt;"));
        assert!(html.contains("A &amp; B"));
        assert!(!html.contains("<b>"));
    }

    #[test]
    fn stars_for_rating_three() {
        let s = stars(3);
        assert_eq!(3, s.matches('★').count());
        assert_eq!(2, s.matches('☆').count());
    }

    #[test]
    fn stars_are_clamped() {
        assert_eq!("★★★★★", stars(9));
        assert_eq!("☆☆☆☆☆", stars(0));
    }

    #[test]
    fn reviews_in_order() {
        let html = reviews(&[
            Review {
                name: "Asha".to_string(),
                rating: 3,
                text: "Busy".to_string(),
            },
            Review {
                name: "Ravi".to_string(),
                rating: 5,
                text: "Great".to_string(),
            },
        ]);
        assert_eq!(2, html.matches("review-item").count());
        assert!(html.find("Asha").unwrap() < html.find("Ravi").unwrap());
        assert!(html.contains("★★★☆☆"));
    }

    #[test]
    fn found_zero() {
        assert!(found_message(0).starts_with("Found 0 available station(s)."));
    }

    #[test]
    fn booking_status_success() {
        let status = FormStatus::booking(&ApiMessage {
            success: true,
            message: "Booking created!".to_string(),
        });
        assert_eq!("Booking created!", status.message);
        assert_eq!(Tone::Success, status.tone);
    }

    #[test]
    fn booking_status_failure() {
        let status = FormStatus::booking(&ApiMessage {
            success: false,
            message: "Slot taken".to_string(),
        });
        assert_eq!("Slot taken", status.message);
        assert_eq!(Tone::Failure, status.tone);
        assert_eq!("red", status.style());
    }

    #[test]
    fn page_after_booking() {
        let view = PageView {
            booking_status: Some(FormStatus::booking(&ApiMessage {
                success: true,
                message: "Booking created!".to_string(),
            })),
            booking_done: true,
            ..PageView::default()
        };
        let html = page(&view);
        assert!(html.contains(
            r#"<p id="bookingStatus" class="small-text" style="color: #22c55e">Booking created!</p>"#
        ));
        assert!(html.contains(r#"id="paymentBtn" href="/payment" style="display: block""#));
        assert!(html.contains("Proceed to payment."));
    }

    #[test]
    fn page_hides_payment_by_default() {
        let html = page(&PageView::default());
        assert!(html.contains(r#"style="display: none""#));
        assert!(html.contains(NO_STATIONS));
        assert_eq!(0, card_count(&html));
    }
}
