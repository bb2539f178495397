// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Application state controller.
//!
//! Classifies navigation and host-frame triggers, dispatches loads to the data-source strategy
//! selected by the current arguments, and folds results back into an [`AppState`] snapshot.

mod controller;
mod state;

pub use controller::{Controller, Outcome, Services, Trigger};
pub use state::{AppState, Phase};
