//! Typed async client for the Blizzard game data and community APIs.
//!
//! Every method takes a [`Region`] and a locale, and returns the parsed JSON body. Client
//! tokens are obtained through the OAuth client credentials flow and cached per region until
//! they expire.

pub mod battlenet;
pub mod diablo3;
pub mod dispatcher;
pub mod error;
pub mod hearthstone;
pub mod helpers;
pub mod interfaces;
pub mod oauth;
pub mod region;
pub mod request;
pub mod starcraft2;
pub mod wow;
pub mod wow_classic;

mod client;
mod serializers;

pub (crate) mod types;

pub use client::{BlizzardApi, BlizzardApiBuilder, CLIENT_ID_ENV, CLIENT_SECRET_ENV};
pub use error::{ConfigError, Error};
pub use oauth::{AccessToken, AuthError};
pub use region::{HostResolver, Hosts, Region};
pub use request::{QueryParams, QueryValue};
pub use serde_json::Value;
