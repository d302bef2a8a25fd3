// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

// Allow panic!/unwrap/expect in test code
#![cfg_attr(test, allow(clippy::panic))]
#![cfg_attr(test, allow(clippy::expect_used))]
#![cfg_attr(test, allow(clippy::unwrap_used))]

//! runpad-server: HTTP surface for the execution pipeline.
//!
//! The transport layer owns request parsing and response framing only;
//! everything with real control flow lives in `runpad-engine`.

pub mod config;
pub mod env;
pub mod routes;
pub mod state;

pub use config::{load_programs, ConfigError};
pub use routes::router;
pub use state::AppState;
