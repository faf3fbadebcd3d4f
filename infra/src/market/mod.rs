//! Client for the public mutual fund data API (mfapi.in)

mod dto;
mod mfapi;


pub use mfapi::MfApiClient;
