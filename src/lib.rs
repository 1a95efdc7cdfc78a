//! Typed Rust client for the Onlinesim SMS-verification HTTP API.
//!
//! Onlinesim rents out phone numbers for receiving verification texts. The
//! service exposes three GET endpoints — tariff listing, number acquisition,
//! and status polling — and this crate wraps them as a domain layer of
//! strong types, a transport layer for wire-format quirks, and a small
//! client layer orchestrating requests. Every call is one stateless
//! request/response round trip; correlation between calls happens only
//! through the tracking id (`tzid`) the caller threads through.
//!
//! ```rust,no_run
//! use onlinesim::{OnlinesimClient, TariffsQuery};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), onlinesim::OnlinesimError> {
//!     let client = OnlinesimClient::new("...");
//!     let tariffs = client.get_tariffs(&TariffsQuery::new()).await?;
//!     println!("{} countries in catalog", tariffs.countries.len());
//!
//!     let acquisition = client.acquire_number("whatsapp", 7).await?;
//!     let states = client.get_number_states(acquisition.tzid, 1).await?;
//!     for state in states {
//!         println!("{}: {}", state.form, state.msg);
//!     }
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{HttpStatusError, OnlinesimClient, OnlinesimClientBuilder, OnlinesimError};
pub use domain::{
    ApiKey, Country, NumberAcquisition, NumberState, ProxyUrl, Service, SubscriptionTariff,
    TariffsQuery, TariffsResult, ValidationError,
};
pub use transport::DecodeError;
