// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Core data model.
//!
//! Datasets are produced by external parsers; the controller only looks up individuals in them
//! and tracks which one is selected.

pub mod chart;
pub mod dataset;
#[cfg(test)]
pub(crate) mod fixtures;
pub mod ids;

pub use chart::{ChartType, Selection};
pub use dataset::{ChartData, Dataset, Fam, ImageMap, Indi, SourceMeta};
pub use ids::{FamId, Id, IdError, IndiId, PRIVATE_ID_PREFIX};
