// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Argument extraction: a typed, immutable view of the current location.

use std::fmt;

use crate::location::Location;
use crate::model::{ChartType, ImageMap, IndiId};

/// Selects the data-source strategy that governs loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DataSourceKind {
    Uploaded,
    GedcomUrl,
    WikiTree,
}

impl fmt::Display for DataSourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Uploaded => "uploaded",
            Self::GedcomUrl => "gedcom_url",
            Self::WikiTree => "wikitree",
        })
    }
}

/// Everything the controller reads from a location, with defaults applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arguments {
    pub show_side_panel: bool,
    pub embedded: bool,
    pub url: Option<String>,
    pub indi: Option<IndiId>,
    pub generation: Option<i32>,
    /// Content hash of an uploaded file (`file` parameter).
    pub hash: Option<String>,
    pub handle_cors: bool,
    pub standalone: bool,
    pub source: Option<DataSourceKind>,
    pub authcode: Option<String>,
    pub chart_type: ChartType,
    pub gedcom: Option<String>,
    pub images: Option<ImageMap>,
    pub freeze_animation: bool,
}

impl Default for Arguments {
    fn default() -> Self {
        Self {
            show_side_panel: true,
            embedded: false,
            url: None,
            indi: None,
            generation: None,
            hash: None,
            handle_cors: true,
            standalone: true,
            source: None,
            authcode: None,
            chart_type: ChartType::Hourglass,
            gedcom: None,
            images: None,
            freeze_animation: false,
        }
    }
}

impl Arguments {
    pub fn image_count(&self) -> usize {
        self.images.as_ref().map_or(0, |images| images.len())
    }
}

/// Derives [`Arguments`] from a location. Never fails: anything missing or malformed falls back
/// to its default.
pub fn extract(location: &Location) -> Arguments {
    let param = |name: &str| location.param(name).filter(|value| !value.is_empty());
    let is_true = |name: &str| location.param(name).as_deref() == Some("true");
    let is_not_false = |name: &str| location.param(name).as_deref() != Some("false");

    let hash = param("file");
    let url = param("url");
    let source = if location.param("source").as_deref() == Some("wikitree") {
        Some(DataSourceKind::WikiTree)
    } else if hash.is_some() {
        Some(DataSourceKind::Uploaded)
    } else if url.is_some() {
        Some(DataSourceKind::GedcomUrl)
    } else {
        None
    };

    let embedded = is_true("embedded");
    let upload = location.state.as_ref();

    Arguments {
        show_side_panel: is_not_false("sidePanel"),
        embedded,
        url,
        indi: param("indi").and_then(|id| IndiId::new(id).ok()),
        generation: location.param("gen").and_then(|raw| raw.trim().parse::<i32>().ok()),
        hash,
        handle_cors: is_not_false("handleCors"),
        standalone: is_not_false("standalone") && !embedded,
        source,
        authcode: param("?authcode").or_else(|| param("authcode")),
        chart_type: location
            .param("view")
            .and_then(|view| ChartType::from_view_param(&view))
            .unwrap_or_default(),
        gedcom: upload.map(|payload| payload.gedcom.clone()),
        images: upload.map(|payload| payload.images.clone()),
        freeze_animation: is_true("freeze"),
    }
}
