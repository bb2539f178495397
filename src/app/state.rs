// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::sync::Arc;

use crate::args::DataSourceKind;
use crate::model::{ChartType, Dataset, Selection};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Nothing requested yet, or the chart route was left.
    #[default]
    Initial,
    Loading,
    Error,
    ShowingChart,
    /// Chart stays visible while more WikiTree data is fetched around the selection.
    LoadingMore,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Initial => "initial",
            Self::Loading => "loading",
            Self::Error => "error",
            Self::ShowingChart => "showing_chart",
            Self::LoadingMore => "loading_more",
        })
    }
}

/// Snapshot of everything the controller knows. Replaced as a whole on every transition.
///
/// `data` and `selection` are both set or both unset, except while `Loading`, when `selection`
/// already names the requested individual. `ShowingChart` and `LoadingMore` always have both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    pub phase: Phase,
    pub data: Option<Arc<Dataset>>,
    pub selection: Option<Selection>,
    /// Content hash of the upload currently loaded or loading.
    pub hash: Option<String>,
    /// URL currently loaded or loading.
    pub url: Option<String>,
    pub error: Option<String>,
    pub show_side_panel: bool,
    pub embedded: bool,
    pub standalone: bool,
    pub chart_type: ChartType,
    /// Dismissible error shown over a visible chart.
    pub error_popup: Option<String>,
    pub source: Option<DataSourceKind>,
    pub freeze_animation: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            phase: Phase::Initial,
            data: None,
            selection: None,
            hash: None,
            url: None,
            error: None,
            show_side_panel: true,
            embedded: false,
            standalone: true,
            chart_type: ChartType::Hourglass,
            error_popup: None,
            source: None,
            freeze_animation: false,
        }
    }
}

impl AppState {
    pub fn is_chart_visible(&self) -> bool {
        matches!(self.phase, Phase::ShowingChart | Phase::LoadingMore)
    }
}
