//! Presentational components: a mechanical mapping from store selections to
//! markup. No state transitions happen here; every action goes back through
//! a callback into the command layer.

pub(crate) mod bot_overview;
pub(crate) mod leaderboard;
pub(crate) mod modals;
pub(crate) mod navbar;
