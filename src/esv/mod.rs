/// ESV text API client: options, request building, transport, decoding.
pub mod errors;
pub mod options;
pub mod request;
pub mod response;
pub mod transport;

pub use errors::EsvError;
pub use options::{BUILD_OPTIONS, PassageOptions};
pub use request::PassageRequest;
pub use response::Passage;
pub use transport::{HttpTransport, Transport};
