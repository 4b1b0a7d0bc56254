use super::number::{lenient_f64, lenient_u32};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Data {
    pub name: String,
    pub area: String,
    pub connector: String,
    pub speed: String,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub slots_total: u32,
    #[serde(default, deserialize_with = "lenient_u32")]
    pub slots_booked: u32,
    #[serde(default, deserialize_with = "lenient_f64")]
    pub approx_rate: f64,
    #[serde(default)]
    pub open_now: bool,
    #[serde(default)]
    pub is_available: bool,
    #[serde(default)]
    pub image_url: Option<String>,
}

#[derive(Deserialize)]
pub struct GetStations {
    #[serde(default)]
    pub stations: Vec<Data>,
}
