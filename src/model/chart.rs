// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::ids::IndiId;

/// Chart layouts the viewer can draw. Selected with the `view` query parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartType {
    #[default]
    Hourglass,
    Relatives,
    Fancy,
}

impl ChartType {
    /// Parses a `view` parameter value. Unknown values yield `None`.
    pub fn from_view_param(value: &str) -> Option<Self> {
        match value {
            "hourglass" => Some(Self::Hourglass),
            "relatives" => Some(Self::Relatives),
            "fancy" => Some(Self::Fancy),
            _ => None,
        }
    }

    pub fn view_param(self) -> &'static str {
        match self {
            Self::Hourglass => "hourglass",
            Self::Relatives => "relatives",
            Self::Fancy => "fancy",
        }
    }
}

impl fmt::Display for ChartType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.view_param())
    }
}

/// The highlighted individual and how many generations to draw around them.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selection {
    pub id: IndiId,
    pub generation: i32,
}

impl Selection {
    pub fn new(id: IndiId, generation: i32) -> Self {
        Self { id, generation }
    }
}
