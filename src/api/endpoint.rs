pub type Endpoint = str;

pub const STATIONS: &Endpoint = "stations/";
pub const REVIEWS: &Endpoint = "get-reviews/";
pub const BOOKINGS: &Endpoint = "bookings/";
pub const ADD_REVIEW: &Endpoint = "reviews/";
pub const CONTACT: &Endpoint = "contact/";
pub const NEWSLETTER: &Endpoint = "newsletter/";
