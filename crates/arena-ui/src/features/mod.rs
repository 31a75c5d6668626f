//! Feature slices: arena state/logic and the dialog controller.

pub mod arena;
pub mod dialogs;
