//! Type definitions for the One Rate client.
//!
//! Host records are borrowed from the calling application; wire types are
//! built per call and discarded once the net charge is extracted.

mod host;
mod request;
mod response;

pub use host::*;
pub use request::*;
pub use response::*;
