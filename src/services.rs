// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Boundary traits for collaborators the controller drives but does not own.
//!
//! Everything runs on the UI thread, so futures are not required to be `Send`.

use std::fmt;
use std::future::Future;
use std::pin::Pin;

use crate::location::Location;

/// Boxed future for single-threaded, dyn-compatible collaborator calls.
pub type LocalBoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Browser-history style navigation.
pub trait Navigator {
    /// Adds a history entry.
    fn push(&self, location: Location);

    /// Replaces the current history entry.
    fn replace(&self, location: Location);
}

/// Fire-and-forget usage events. Implementations must swallow their own failures.
pub trait Analytics {
    fn event(&self, name: &str, label: Option<&str>, value: Option<u64>);
}

/// Analytics sink that only logs.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingAnalytics;

impl Analytics for TracingAnalytics {
    fn event(&self, name: &str, label: Option<&str>, value: Option<u64>) {
        tracing::debug!(target: "kinchart::analytics", event = name, ?label, ?value);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExportFormat {
    Pdf,
    Png,
    Svg,
}

impl ExportFormat {
    pub(crate) fn analytics_event(self) -> &'static str {
        match self {
            Self::Pdf => "download_pdf",
            Self::Png => "download_png",
            Self::Svg => "download_svg",
        }
    }

    pub(crate) fn failure_message(self) -> &'static str {
        match self {
            Self::Pdf => {
                "Failed to generate PDF file. Please try with a smaller diagram or download an SVG file."
            }
            Self::Png => {
                "Failed to generate PNG file. Please try with a smaller diagram or download an SVG file."
            }
            Self::Svg => "Failed to generate SVG file.",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pdf => "PDF",
            Self::Png => "PNG",
            Self::Svg => "SVG",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportError {
    pub message: String,
}

impl ExportError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl fmt::Display for ExportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ExportError {}

/// Print/export entry points of the chart renderer.
pub trait ChartExporter {
    fn print(&self);

    fn export(&self, format: ExportFormat) -> LocalBoxFuture<'_, Result<(), ExportError>>;
}

/// Exporter for hosts without a chart surface; every export fails.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoChartExporter;

impl ChartExporter for NoChartExporter {
    fn print(&self) {
        tracing::warn!("print requested but no chart surface is attached");
    }

    fn export(&self, format: ExportFormat) -> LocalBoxFuture<'_, Result<(), ExportError>> {
        Box::pin(async move { Err(ExportError::new(format!("{format} export needs a chart surface"))) })
    }
}
