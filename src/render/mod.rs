// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Render dispatch.
//!
//! Maps a state snapshot to what the page should show. Drawing the chart itself is the chart
//! renderer's job; this module only decides which surface is visible and what it receives.

use std::fmt;
use std::sync::Arc;

use crate::app::{AppState, Phase};
use crate::model::{ChartType, Dataset, Selection};

/// Input handed to the chart renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartProps {
    pub dataset: Arc<Dataset>,
    pub selection: Selection,
    pub chart_type: ChartType,
    pub freeze_animation: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartView {
    pub props: ChartProps,
    pub show_side_panel: bool,
    /// Show a small progress indicator on top of the chart.
    pub loading_more: bool,
    pub error_popup: Option<String>,
    /// Show the top bar with navigation controls.
    pub standalone: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    Nothing,
    Loading,
    Error { message: String },
    Chart(ChartView),
}

pub fn render(state: &AppState, on_chart_route: bool) -> View {
    if !on_chart_route {
        return View::Nothing;
    }

    match state.phase {
        Phase::Initial | Phase::Loading => View::Loading,
        Phase::Error => View::Error {
            message: state.error.clone().unwrap_or_default(),
        },
        Phase::ShowingChart | Phase::LoadingMore => {
            let (Some(dataset), Some(selection)) = (state.data.as_ref(), state.selection.as_ref())
            else {
                return View::Loading;
            };
            View::Chart(ChartView {
                props: ChartProps {
                    dataset: dataset.clone(),
                    selection: selection.clone(),
                    chart_type: state.chart_type,
                    freeze_animation: state.freeze_animation,
                },
                show_side_panel: state.show_side_panel,
                loading_more: state.phase == Phase::LoadingMore,
                error_popup: state.error_popup.clone(),
                standalone: state.standalone,
            })
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nothing => f.write_str("(nothing)"),
            Self::Loading => f.write_str("loading…"),
            Self::Error { message } => write!(f, "error: {message}"),
            Self::Chart(chart) => {
                let props = &chart.props;
                let chart_data = props.dataset.chart();
                let name = chart_data
                    .indi(props.selection.id.as_str())
                    .map(|indi| {
                        [indi.first_name(), indi.last_name()]
                            .into_iter()
                            .flatten()
                            .collect::<Vec<_>>()
                            .join(" ")
                    })
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| props.selection.id.to_string());
                write!(
                    f,
                    "{} chart of {} individuals, selected {name} ({}, generation {})",
                    props.chart_type,
                    chart_data.indis().len(),
                    props.selection.id,
                    props.selection.generation,
                )?;
                if chart.loading_more {
                    f.write_str(" [loading more]")?;
                }
                if let Some(popup) = &chart.error_popup {
                    write!(f, " [popup: {popup}]")?;
                }
                Ok(())
            }
        }
    }
}
