#![forbid(unsafe_code)]

//! Arena web client.
//!
//! Yew front-end for a competitive-bot arena: submit bots, browse per-bot
//! and per-leaderboard standings, manage leaderboards. The heart of the
//! crate is the reconciliation engine in [`features::arena`]: it owns the
//! authoritative local rosters, merges periodic server snapshots with
//! outstanding optimistic mutations, and derives everything the render
//! layer shows. Views are a thin mapping from store selectors to markup and
//! carry no logic of their own.
//!
//! All state transitions, derivations, and classification tables are pure
//! and tested on the native target; browser plumbing is gated behind
//! `target_arch = "wasm32"`.

pub mod core;
pub mod features;
pub mod services;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod components;

#[cfg(target_arch = "wasm32")]
pub use app::run_app;
