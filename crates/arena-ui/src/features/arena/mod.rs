//! Arena feature: roster state, reconciliation, derivations, polling.

pub mod logic;
pub mod poller;
pub mod state;

#[cfg(target_arch = "wasm32")]
pub(crate) mod actions;
