// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for configuration and tunables.

// ==========================================================================
// Backend Defaults
// ==========================================================================

/// Backend used when nothing else is configured (local development server).
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Environment variable overriding the backend base URL.
pub const ENV_BACKEND_URL: &str = "PIXFLOW_BACKEND_URL";

/// Longest accepted request timeout (in seconds).
pub const MAX_REQUEST_TIMEOUT_SECS: u64 = 600;

// ==========================================================================
// Listing Defaults
// ==========================================================================

/// Number of event cards per row in the listing grid.
pub const DEFAULT_GRID_COLUMNS: usize = 3;

/// Number of decoded images (covers and photos) kept in memory.
pub const DEFAULT_IMAGE_CACHE_CAPACITY: usize = 256;

// ==========================================================================
// Housekeeping Tick
// ==========================================================================

/// Interval of the tick used for spinners and toast auto-dismiss (ms).
pub const HOUSEKEEPING_TICK_MS: u64 = 100;

/// Spinner rotation per housekeeping tick (radians).
pub const SPINNER_STEP_RADIANS: f32 = 0.35;

const _: () = {
    assert!(DEFAULT_GRID_COLUMNS > 0);
    assert!(DEFAULT_IMAGE_CACHE_CAPACITY > 0);
    assert!(HOUSEKEEPING_TICK_MS > 0);
};
