use super::number::lenient_u32;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct Data {
    pub name: String,
    #[serde(deserialize_with = "lenient_u32")]
    pub rating: u32,
    #[serde(default)]
    pub text: String,
}

#[derive(Deserialize)]
pub struct GetReviews {
    #[serde(default)]
    pub reviews: Vec<Data>,
}
