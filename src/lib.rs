// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Kinchart: application state controller for a genealogy chart viewer.
//!
//! The controller turns navigation locations and host-frame messages into loads against one of
//! several data sources, and keeps the chart's selection in sync with the URL.

pub mod app;
pub mod args;
pub mod config;
pub mod embed;
pub mod location;
pub mod model;
pub mod render;
pub mod selection;
pub mod services;
pub mod source;

#[cfg(test)]
mod testing;

pub use app::{AppState, Controller, Outcome, Phase, Services, Trigger};
pub use args::{extract, Arguments, DataSourceKind};
pub use config::ControllerConfig;
pub use location::{Location, UploadPayload};
pub use render::View;
