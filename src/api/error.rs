use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use std::io::Cursor;

#[derive(Debug, Clone)]
pub enum Error {
    Unauthorized(String),
    ApiError(String),
    UnexpectedApiResponse,
    InvalidResponse(String, String),
    FormatError,
    InternalError,
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::Unauthorized(s) => write!(f, "unauthorized: {}", s),
            Error::ApiError(s) => write!(f, "API error: {}", s),
            Error::UnexpectedApiResponse => write!(f, "unexpected API response"),
            Error::InvalidResponse(body, reason) => {
                write!(f, "invalid API response ({}): {}", reason, body)
            }
            Error::FormatError => write!(f, "format error"),
            Error::InternalError => write!(f, "internal error"),
        }
    }
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let (status, error) = match self {
            Error::Unauthorized(s) => (
                Status::Unauthorized,
                format!("<html><body><h3>401 Unauthorized</h3>Station API refused the request: <code>{}</code></body></html>", s),
            ),
            Error::ApiError(_) | Error::UnexpectedApiResponse | Error::InvalidResponse(_, _) => (
                Status::BadGateway,
                format!(
                    "<html><body><h3>502 Bad Gateway</h3><code>{}</code></body></html>",
                    self
                ),
            ),
            _ => (
                Status::InternalServerError,
                format!(
                    "<html><body><h3>Unknown exception</h3><code>{:?}</code></body></html>",
                    self
                ),
            ),
        };

        Response::build()
            .status(status)
            .sized_body(error.len(), Cursor::new(error))
            .header(ContentType::new("text", "html"))
            .ok()
    }
}
