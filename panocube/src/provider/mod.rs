//! Panorama tile providers.
//!
//! A [`TileProvider`] knows how to turn a grid coordinate into tile bytes
//! for one panorama. Providers sit behind the [`HttpClient`] trait so
//! tests can run against canned responses instead of the network.

mod http;
mod streetview;
mod types;

pub use http::{HttpClient, ReqwestClient};
pub use streetview::StreetViewProvider;
pub use types::{ProviderError, TileProvider};

#[cfg(test)]
pub use http::tests::MockHttpClient;
