use thiserror::Error;

/// Failures talking to the backend, before they are mapped onto the console's
/// error for the collaborator that made the call.
#[derive(Error, Debug)]
pub enum SupabaseError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Backend returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Table '{0}' returned no rows")]
    EmptyTable(&'static str),

    #[error("Backend configuration error: {0}")]
    Config(String),
}
