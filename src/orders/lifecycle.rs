//! Order status transition rules
//!
//! created -> assigned -> in_progress -> delivered, where in_progress
//! may be skipped. cancelled is reachable from any non-terminal state.
//! delivered and cancelled are terminal.

use super::models::StatusKind;

/// Terminal states accept no further transitions.
pub fn is_terminal(status: StatusKind) -> bool {
    matches!(status, StatusKind::Delivered | StatusKind::Cancelled)
}

/// Whether `from -> to` is a legal transition.
pub fn can_transition(from: StatusKind, to: StatusKind) -> bool {
    use StatusKind::*;

    match (from, to) {
        (Created, Assigned) => true,
        (Assigned, InProgress) => true,
        // in_progress is optional
        (Assigned, Delivered) => true,
        (InProgress, Delivered) => true,
        (from, Cancelled) => !is_terminal(from),
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use StatusKind::*;

    #[test]
    fn test_forward_chain_is_legal() {
        assert!(can_transition(Created, Assigned));
        assert!(can_transition(Assigned, InProgress));
        assert!(can_transition(InProgress, Delivered));
    }

    #[test]
    fn test_in_progress_may_be_skipped() {
        assert!(can_transition(Assigned, Delivered));
    }

    #[test]
    fn test_cancel_from_any_non_terminal_state() {
        assert!(can_transition(Created, Cancelled));
        assert!(can_transition(Assigned, Cancelled));
        assert!(can_transition(InProgress, Cancelled));
    }

    #[test]
    fn test_terminal_states_accept_nothing() {
        for to in [Created, Assigned, InProgress, Delivered, Cancelled] {
            assert!(!can_transition(Delivered, to));
            assert!(!can_transition(Cancelled, to));
        }
    }

    #[test]
    fn test_illegal_jumps_rejected() {
        assert!(!can_transition(Created, InProgress));
        assert!(!can_transition(Created, Delivered));
        assert!(!can_transition(InProgress, Assigned));
        assert!(!can_transition(Delivered, Cancelled));
    }
}
