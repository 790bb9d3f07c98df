// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod calculator;    // notifying arithmetic operations
pub mod config;        // chain config + loader
pub mod dispatch;      // ordered multicast observer lists
pub mod errors;        // error handling
pub mod observability;
pub mod observers;     // ready-made demo observers
pub mod pipeline;      // stage chain + pipeline runner
pub mod stages;        // built-in stage implementations
pub mod traits;        // unified abstractions
