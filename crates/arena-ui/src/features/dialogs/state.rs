//! Modal dialog state as a closed set of kinds with typed payloads.
//!
//! # Design
//! - One variant per dialog, each carrying exactly the data that dialog
//!   needs; there is no generic payload slot to mis-fill.
//! - Opening a dialog replaces whatever was open; at most one at a time.

use arena_api_models::{BotId, ChartOverview, LeaderboardId};

/// The dialog currently open, if any.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum DialogState {
    /// No dialog is open.
    #[default]
    Closed,
    /// Submit-bot form.
    SubmitBot,
    /// Rename form for an existing bot.
    RenameBot {
        /// Bot being renamed.
        id: BotId,
        /// Name shown as the starting value.
        current_name: String,
    },
    /// Confirmation prompt before deleting a bot.
    ConfirmDeleteBot {
        /// Bot to delete on confirmation.
        id: BotId,
        /// Name shown in the prompt.
        name: String,
    },
    /// Create-leaderboard form.
    CreateLeaderboard,
    /// Edit form for an existing leaderboard's name and filter.
    PatchLeaderboard {
        /// Leaderboard being edited.
        id: LeaderboardId,
        /// Name shown as the starting value.
        current_name: String,
        /// Filter shown as the starting value.
        current_filter: String,
    },
    /// Confirmation prompt before deleting a leaderboard.
    ConfirmDeleteLeaderboard {
        /// Leaderboard to delete on confirmation.
        id: LeaderboardId,
        /// Name shown in the prompt.
        name: String,
    },
    /// Read-only source code viewer for a bot.
    ViewSource {
        /// Name of the bot the source belongs to.
        bot_name: String,
        /// The submitted source code.
        source_code: String,
    },
    /// Example match seeds satisfying a leaderboard filter.
    ExampleSeeds {
        /// Name of the leaderboard the seeds belong to.
        leaderboard_name: String,
        /// The sample seeds.
        seeds: Vec<i64>,
    },
    /// Chart form plus its most recent result.
    Chart {
        /// Filter entered in the form.
        filter: String,
        /// Attribute entered in the form.
        attribute_name: String,
        /// The last fetched series, once a request succeeded.
        overview: Option<ChartOverview>,
    },
    /// An operation failure surfaced to the user.
    Error {
        /// Message shown verbatim.
        message: String,
    },
}

impl DialogState {
    /// Open a dialog, replacing any currently open one.
    pub fn open(&mut self, next: Self) {
        *self = next;
    }

    /// Close whatever is open.
    pub fn close(&mut self) {
        *self = Self::Closed;
    }

    /// Whether any dialog is open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opening_replaces_the_current_dialog() {
        let mut dialog = DialogState::Closed;
        dialog.open(DialogState::SubmitBot);
        assert!(dialog.is_open());

        dialog.open(DialogState::RenameBot {
            id: BotId(3),
            current_name: "alpha".to_string(),
        });
        assert_eq!(
            dialog,
            DialogState::RenameBot {
                id: BotId(3),
                current_name: "alpha".to_string(),
            }
        );
    }

    #[test]
    fn closing_always_lands_on_closed() {
        let mut dialog = DialogState::Error {
            message: "boom".to_string(),
        };
        dialog.close();
        assert_eq!(dialog, DialogState::Closed);
        assert!(!dialog.is_open());

        dialog.close();
        assert_eq!(dialog, DialogState::Closed);
    }
}
