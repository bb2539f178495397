// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ids::{FamId, IndiId};

/// Uploaded image file name mapped to its data/object URL.
pub type ImageMap = BTreeMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Indi {
    id: IndiId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    first_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    famc: Option<FamId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    fams: Vec<FamId>,
}

impl Indi {
    pub fn new(id: IndiId) -> Self {
        Self {
            id,
            first_name: None,
            last_name: None,
            famc: None,
            fams: Vec::new(),
        }
    }

    pub fn with_name(mut self, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        self.first_name = Some(first_name.into());
        self.last_name = Some(last_name.into());
        self
    }

    pub fn with_famc(mut self, famc: FamId) -> Self {
        self.famc = Some(famc);
        self
    }

    pub fn with_fams(mut self, fams: FamId) -> Self {
        self.fams.push(fams);
        self
    }

    pub fn id(&self) -> &IndiId {
        &self.id
    }

    pub fn first_name(&self) -> Option<&str> {
        self.first_name.as_deref()
    }

    pub fn last_name(&self) -> Option<&str> {
        self.last_name.as_deref()
    }

    pub fn famc(&self) -> Option<&FamId> {
        self.famc.as_ref()
    }

    pub fn fams(&self) -> &[FamId] {
        &self.fams
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fam {
    id: FamId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    husb: Option<IndiId>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    wife: Option<IndiId>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    children: Vec<IndiId>,
}

impl Fam {
    pub fn new(id: FamId, husb: Option<IndiId>, wife: Option<IndiId>) -> Self {
        Self {
            id,
            husb,
            wife,
            children: Vec::new(),
        }
    }

    pub fn with_child(mut self, child: IndiId) -> Self {
        self.children.push(child);
        self
    }

    pub fn id(&self) -> &FamId {
        &self.id
    }

    pub fn husb(&self) -> Option<&IndiId> {
        self.husb.as_ref()
    }

    pub fn wife(&self) -> Option<&IndiId> {
        self.wife.as_ref()
    }

    pub fn children(&self) -> &[IndiId] {
        &self.children
    }
}

/// The chart-ready graph: individuals in source order plus the families linking them.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartData {
    indis: Vec<Indi>,
    #[serde(default)]
    fams: Vec<Fam>,
}

impl ChartData {
    pub fn new(indis: Vec<Indi>, fams: Vec<Fam>) -> Self {
        Self { indis, fams }
    }

    pub fn indis(&self) -> &[Indi] {
        &self.indis
    }

    pub fn fams(&self) -> &[Fam] {
        &self.fams
    }

    pub fn indi(&self, id: &str) -> Option<&Indi> {
        self.indis.iter().find(|indi| indi.id().as_str() == id)
    }

    pub fn contains_indi(&self, id: &str) -> bool {
        self.indi(id).is_some()
    }

    /// The individual a chart starts from when nothing (valid) was requested.
    pub fn default_indi(&self) -> Option<&IndiId> {
        self.indis.first().map(Indi::id)
    }
}

/// Metadata about where a dataset came from.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceMeta {
    /// Name of the program that produced the source file (GEDCOM `HEAD.SOUR`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub software: Option<String>,
}

/// A parsed dataset as handed over by the parsing/fetching collaborators.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    chart: ChartData,
    #[serde(default)]
    source: SourceMeta,
}

impl Dataset {
    pub fn new(chart: ChartData, source: SourceMeta) -> Self {
        Self { chart, source }
    }

    pub fn chart(&self) -> &ChartData {
        &self.chart
    }

    pub fn source(&self) -> &SourceMeta {
        &self.source
    }

    pub fn software(&self) -> Option<&str> {
        self.source.software.as_deref()
    }
}
