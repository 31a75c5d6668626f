//! App-wide yewdux store.
//!
//! # Design
//! - One store of small slices; every transition goes through the arena
//!   fold or the dialog controller, never ad-hoc field pokes in views.

use crate::features::arena::state::ArenaState;
use crate::features::dialogs::state::DialogState;
use yewdux::store::Store;

/// Global application store.
#[derive(Clone, Debug, PartialEq, Store, Default)]
pub struct AppStore {
    /// Authoritative arena rosters, selection, and connectivity.
    pub arena: ArenaState,
    /// Currently open modal dialog.
    pub dialog: DialogState,
}
