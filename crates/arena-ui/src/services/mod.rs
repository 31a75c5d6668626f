//! Remote gateway: typed HTTP client plus the failure taxonomy.

pub mod error;

#[cfg(target_arch = "wasm32")]
pub(crate) mod api;
