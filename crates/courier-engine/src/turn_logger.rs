//! Turn callback that logs every move and enforces the configured cap.

use courier_core::runner::{TurnCallback, TurnControl, TurnEvent, TurnLimit};
use tracing::{info, warn};

/// Logs each turn at `info` and stops the run at the turn limit.
#[derive(Debug, Clone, Copy)]
pub struct TurnLogger {
    limit: TurnLimit,
}

impl TurnLogger {
    /// Create a logger that stops after `max_turns` turns (0 = unlimited).
    pub const fn new(max_turns: u64) -> Self {
        Self {
            limit: TurnLimit::new(max_turns),
        }
    }
}

impl TurnCallback for TurnLogger {
    fn on_turn(&mut self, event: &TurnEvent<'_>) -> TurnControl {
        info!(
            turn = event.turn,
            parcels_left = event.state.parcels().len(),
            "Moved to {}",
            event.direction
        );
        if self.limit.reached(event.turn) {
            if !event.state.is_finished() {
                warn!(
                    max_turns = self.limit.max_turns(),
                    "Turn limit reached, stopping run"
                );
            }
            return TurnControl::Stop;
        }
        TurnControl::Continue
    }
}

#[cfg(test)]
mod tests {
    use courier_world::VillageState;

    use super::*;

    #[test]
    fn stops_exactly_at_limit() {
        let state = VillageState::new("Post Office", Vec::new());
        let direction = state.place().clone();
        let mut logger = TurnLogger::new(2);
        let first = TurnEvent {
            turn: 1,
            direction: &direction,
            state: &state,
        };
        assert_eq!(logger.on_turn(&first), TurnControl::Continue);
        let second = TurnEvent { turn: 2, ..first };
        assert_eq!(logger.on_turn(&second), TurnControl::Stop);
    }

    #[test]
    fn zero_never_stops() {
        let state = VillageState::new("Post Office", Vec::new());
        let direction = state.place().clone();
        let mut logger = TurnLogger::new(0);
        let event = TurnEvent {
            turn: u64::MAX,
            direction: &direction,
            state: &state,
        };
        assert_eq!(logger.on_turn(&event), TurnControl::Continue);
    }
}
