// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Device signal acquisition
//!
//! Signals are read through a `SignalProvider` and frozen into a
//! `SignalSnapshot` before any scoring happens.

pub mod host;
pub mod provider;
pub mod snapshot;

pub use host::*;
pub use provider::*;
pub use snapshot::*;
