use crate::model::ModelKind;
use rocket::http::{ContentType, Status};
use rocket::request::Request;
use rocket::response::{self, Responder, Response};
use std::io::Cursor;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DecodeError {
    #[error("malformed envelope: {0}")]
    MalformedEnvelope(String),
    #[error("unsupported inverter model: {0}")]
    UnsupportedModel(ModelKind),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("transport error: {0}")]
    TransportError(String),
    #[error(transparent)]
    DecodeError(#[from] DecodeError),
    #[error("unable to format output")]
    FormatError,
}

fn html_response(status: Status, body: String) -> response::Result<'static> {
    Response::build()
        .status(status)
        .sized_body(body.len(), Cursor::new(body))
        .header(ContentType::new("text", "html"))
        .ok()
}

impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        match self {
            Error::TransportError(s) => html_response(
                Status::BadGateway,
                format!("<html><body><h3>502 Bad Gateway</h3>Error while talking to inverter: <code>{}</code></body></html>", s),
            ),
            Error::DecodeError(DecodeError::UnsupportedModel(model)) => html_response(
                Status::NotImplemented,
                format!("<html><body><h3>501 Not Implemented</h3>Inverter model <code>{}</code> is not supported; see <code>/dump-envelope</code> for the raw payload</body></html>", model),
            ),
            _ => html_response(
                Status::InternalServerError,
                format!(
                    "<html><body><h3>Unknown exception</h3><code>{:?}</code></body></html>",
                    self
                ),
            ),
        }
    }
}
