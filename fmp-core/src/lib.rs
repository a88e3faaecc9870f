//! fmp-core
//!
//! Building blocks shared by the FMP client: the per-call [`Endpoint`] descriptor,
//! the [`Credential`] it is signed with, the [`Transport`] seam that performs the
//! GET, and the decoded [`Payload`].
#![warn(missing_docs)]

pub mod credential;
pub mod endpoint;
pub mod payload;
pub mod transport;

pub use credential::{API_KEY_PARAM, Credential};
pub use endpoint::Endpoint;
pub use payload::{Payload, is_json_content_type};
pub use transport::{RawResponse, Transport};

pub use fmp_types::{self as types, FmpConfig, FmpError};

pub use url::Url;
