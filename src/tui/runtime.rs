//! Dashboard refresh loop state.

use std::time::Instant;

use crate::snapshot::DashboardSnapshot;

/// Fastest allowed auto-refresh interval (ms).
const MIN_REFRESH_MS: u64 = 250;

/// Slowest allowed auto-refresh interval (ms).
const MAX_REFRESH_MS: u64 = 60_000;

/// TUI application state.
pub struct App {
    /// Seed applied on every refresh, if any.
    pub seed: Option<u64>,
    /// Tables currently on screen.
    pub snapshot: DashboardSnapshot,
    /// Number of snapshots drawn so far, including the first.
    pub refreshes: u64,
    /// Whether auto-refresh is paused.
    pub paused: bool,
    /// Auto-refresh interval (ms).
    pub refresh_ms: u64,
    /// Whether the user has requested quit.
    pub quit: bool,
    /// When the current snapshot was drawn.
    pub last_refresh: Instant,
}

impl App {
    /// Creates the app and draws the first snapshot.
    pub fn new(seed: Option<u64>, refresh_ms: u64) -> Self {
        Self {
            seed,
            snapshot: DashboardSnapshot::from_seed(seed),
            refreshes: 1,
            paused: false,
            refresh_ms: refresh_ms.clamp(MIN_REFRESH_MS, MAX_REFRESH_MS),
            quit: false,
            last_refresh: Instant::now(),
        }
    }

    /// Re-samples every table.
    pub fn refresh(&mut self) {
        self.snapshot = DashboardSnapshot::from_seed(self.seed);
        self.refreshes += 1;
        self.last_refresh = Instant::now();
    }

    /// Toggles auto-refresh.
    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
    }

    /// Halves the refresh interval.
    pub fn speed_up(&mut self) {
        self.refresh_ms = (self.refresh_ms / 2).max(MIN_REFRESH_MS);
    }

    /// Doubles the refresh interval.
    pub fn speed_down(&mut self) {
        self.refresh_ms = (self.refresh_ms * 2).min(MAX_REFRESH_MS);
    }

    /// Returns `true` when the auto-refresh interval has elapsed.
    pub fn refresh_due(&self) -> bool {
        !self.paused && self.last_refresh.elapsed().as_millis() >= u128::from(self.refresh_ms)
    }
}
