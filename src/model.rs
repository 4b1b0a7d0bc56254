type Rupees = f64;

#[derive(Debug, Clone)]
pub struct Api {
    pub api_url: String,
    pub client: reqwest::Client,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Station {
    pub name: String,
    pub area: String,
    pub connector: String,
    pub speed: String,
    pub slots_total: u32,
    pub slots_booked: u32,
    pub approx_rate: Rupees,
    pub open_now: bool,
    pub is_available: bool,
    pub image_url: Option<String>,
}

impl Station {
    /// Slots not yet booked. Overbooked stations report zero.
    pub fn free_slots(&self) -> u32 {
        self.slots_total.saturating_sub(self.slots_booked)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Review {
    pub name: String,
    pub rating: u32,
    pub text: String,
}

/// Outcome of any form submission, as reported by the backend.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiMessage {
    pub success: bool,
    pub message: String,
}

impl ApiMessage {
    /// Stand-in for a response that never arrived or could not be read.
    pub fn server_error() -> Self {
        ApiMessage {
            success: false,
            message: String::from("Server error"),
        }
    }
}
