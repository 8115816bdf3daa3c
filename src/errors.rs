use thiserror::Error;

/// Main client error type.
///
/// Failures keep their kind all the way to the caller: a rejected payload,
/// a carrier-side failure, and a geocoding miss are distinct variants rather
/// than one generic user-facing error.
#[derive(Error, Debug, Clone)]
pub enum Error {
    /// Host record is missing a field the rate request needs
    #[error("Validation error: {0}")]
    Validation(String),

    /// Carrier call failed: non-2xx status, transport failure, timeout,
    /// or a response with no usable rate in it
    #[error("External service error (status {status:?}): {message}")]
    ExternalService {
        status: Option<u16>,
        message: String,
    },

    /// Geocoding lookup failed for the destination address
    #[error("Lookup error: {0}")]
    Lookup(String),

    /// JSON parse error
    #[error("Json parse error: {0}")]
    JsonParse(String),
}
