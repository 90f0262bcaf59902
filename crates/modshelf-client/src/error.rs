use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClientError {
    /// The server rejected the bearer token. The client has already dropped
    /// its held token and fired the logout signal by the time this surfaces.
    #[error("unauthorized")]
    Unauthorized,

    /// Any other non-success response. `message` is the server's error body
    /// message when one was parseable, otherwise a synthesized status line.
    #[error("{message}")]
    Api { status: u16, message: String },

    #[error(transparent)]
    Http(#[from] reqwest::Error),
}
