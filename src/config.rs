// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Controller configuration.

use serde::Deserialize;

/// Static settings a controller is created with.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ControllerConfig {
    /// Route under which the chart view is mounted.
    pub chart_path: String,
    /// Route of the intro screen; used when no data source can be resolved.
    pub root_path: String,
    /// Language tag forwarded to WikiTree lookups.
    pub locale: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            chart_path: "/view".to_owned(),
            root_path: "/".to_owned(),
            locale: "en".to_owned(),
        }
    }
}

impl ControllerConfig {
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    pub fn is_chart_route(&self, pathname: &str) -> bool {
        pathname == self.chart_path
    }
}
