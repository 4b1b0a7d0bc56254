use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct Booking {
    pub user_name: String,
    pub vehicle: String,
    pub connector: String,
    pub date: String,
    pub time: String,
    pub duration: u32,
    pub approx_amount: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct NewReview {
    pub name: String,
    /// Forwarded as entered; the backend decides what it accepts.
    pub rating: String,
    pub text: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Contact {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Newsletter {
    pub email: String,
}
