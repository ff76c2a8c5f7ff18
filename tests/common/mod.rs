//! Shared test infrastructure for pmod-patterns integration tests

#![allow(dead_code)] // Items used across multiple test files; Rust analyzes per-file

use pmod_patterns::sim::{PortEvent, SimDelay, SimPorts, VirtualClock};
use pmod_patterns::{Board, LedController, Millis, PortId, Timing};

/// Event capacity large enough for a full counter run plus setup writes
pub const EVENTS: usize = 512;

pub type TestPorts<'c> = SimPorts<'c, EVENTS>;

// ============================================================================
// Board Construction
// ============================================================================

/// Creates an initialized simulated board with every recorded event cleared
pub fn board(clock: &VirtualClock) -> Board<TestPorts<'_>> {
    let mut board = Board::new(SimPorts::new(clock));
    board.init();
    board.ports_mut().clear_events();
    board
}

pub fn delay(clock: &VirtualClock) -> SimDelay<'_> {
    SimDelay::new(clock)
}

pub fn timing() -> Timing<Millis> {
    Timing::standard()
}

// ============================================================================
// Event Helpers
// ============================================================================

/// Values written to one port, oldest first
pub fn values(ports: &TestPorts<'_>, port: PortId) -> Vec<u8> {
    ports.writes_to(port).map(|e| e.value).collect()
}

/// Timestamps of the writes to one port
pub fn times(ports: &TestPorts<'_>, port: PortId) -> Vec<u64> {
    ports.writes_to(port).map(|e| e.at_ms).collect()
}

/// Gaps between consecutive writes to one port
pub fn gaps(ports: &TestPorts<'_>, port: PortId) -> Vec<u64> {
    times(ports, port).windows(2).map(|w| w[1] - w[0]).collect()
}

/// Events shifted so the first one happens at time zero
pub fn relative(events: &[PortEvent]) -> Vec<PortEvent> {
    let start = events.first().map(|e| e.at_ms).unwrap_or(0);
    events
        .iter()
        .map(|e| PortEvent {
            at_ms: e.at_ms - start,
            ..*e
        })
        .collect()
}

// ============================================================================
// Controller Construction
// ============================================================================

pub type TestController<'c> = LedController<TestPorts<'c>, SimDelay<'c>, Millis>;

/// Creates a controller over a fresh simulated board, initialization writes cleared
pub fn controller(clock: &VirtualClock) -> TestController<'_> {
    let mut controller = LedController::new(SimPorts::new(clock), SimDelay::new(clock));
    controller.board_mut().ports_mut().clear_events();
    controller
}
