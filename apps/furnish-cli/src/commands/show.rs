//! # Show Command

use tracing::debug;

use crate::state::SessionState;

/// Renders the current list. Read only.
pub fn show_list(state: &SessionState) -> String {
    debug!(items = state.list.len(), "show command");
    state.list.render()
}
