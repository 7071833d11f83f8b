/// Errors from the passage lookup pipeline.
use thiserror::Error;

/// Everything that can stop a lookup, from argument checks to rendering.
#[derive(Debug, Error)]
pub enum EsvError {
    /// No passage reference was given on the command line.
    #[error("No passage reference given")]
    MissingReference,

    /// The API token environment variable is unset or empty.
    #[error(
        "{var} is not set. Create an API key at \
         https://api.esv.org/account/create-application/ and export it as {var}"
    )]
    MissingApiKey {
        /// Name of the environment variable that was checked.
        var: &'static str,
    },

    /// The HTTP client could not be constructed.
    #[error("Could not initialise HTTP client: {0}")]
    Client(String),

    /// The request never produced a response (DNS, TLS, refused, timeout).
    #[error("Request failed: {reason}")]
    Request {
        /// Transport-level description of the failure.
        reason: String,
    },

    /// The API answered with something other than 200.
    #[error("API returned HTTP {code}{}: {body}", reason_suffix(reason))]
    Status {
        /// HTTP status code.
        code: u16,
        /// Canonical reason phrase, may be empty.
        reason: String,
        /// Raw response body.
        body: String,
    },

    /// A 200 response arrived with nothing in it.
    #[error("API returned an empty response body")]
    EmptyBody,

    /// The body was not valid JSON.
    #[error("Failed to parse JSON response at line {line}, column {column}: {message}\nRaw body: {body}")]
    Parse {
        /// 1-based line of the parse failure.
        line: usize,
        /// 1-based column of the parse failure.
        column: usize,
        /// Parser message.
        message: String,
        /// Raw response body.
        body: String,
    },

    /// The body was JSON but not an object.
    #[error("Unexpected JSON response: expected an object, got {kind}: {value}")]
    UnexpectedShape {
        /// JSON type name of the top-level value.
        kind: &'static str,
        /// The value, re-serialised.
        value: String,
    },

    /// The object's known fields had the wrong types.
    #[error("Unexpected field types in API response: {message}")]
    Decode {
        /// Deserializer message.
        message: String,
    },

    /// The response held no passage text.
    #[error("Passage not found for query '{query}'")]
    NotFound {
        /// The API's echo of the query, or the original reference.
        query: String,
        /// Optional explanation from the API's `detail` field.
        detail: Option<String>,
    },

    /// Writing the rendered passage to stdout failed.
    #[error("Failed to write output: {0}")]
    Output(#[from] std::io::Error),
}

/// `" <reason>"`, or nothing when the server sent no reason phrase.
fn reason_suffix(reason: &str) -> String {
    if reason.is_empty() {
        String::new()
    } else {
        format!(" {reason}")
    }
}

impl EsvError {
    /// Return the CLI exit code for this error.
    ///
    /// Every pipeline failure is terminal and reported the same way.
    #[must_use]
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::MissingReference
            | Self::MissingApiKey { .. }
            | Self::Client(_)
            | Self::Request { .. }
            | Self::Status { .. }
            | Self::EmptyBody
            | Self::Parse { .. }
            | Self::UnexpectedShape { .. }
            | Self::Decode { .. }
            | Self::NotFound { .. }
            | Self::Output(_) => 1,
        }
    }
}
