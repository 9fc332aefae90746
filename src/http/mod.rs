//! HTTP Protocol primitives.
mod method;
mod status;
mod version;
mod date;

pub use method::Method;
pub use version::Version;
pub use status::StatusCode;
pub use date::parse_httpdate;
