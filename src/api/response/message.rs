use serde::Deserialize;

/* `{ success, message }` from the form endpoints; contact and newsletter omit `success` */
#[derive(Deserialize)]
pub struct Message {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
}
