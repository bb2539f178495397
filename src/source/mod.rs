// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Data-source strategies.
//!
//! Each [`DataSourceKind`] maps to one stateless strategy that answers two questions: do the
//! current arguments ask for data the controller does not have yet, and how is that data loaded.
//! Loading itself is delegated to a [`DataLoader`] (GEDCOM parser, HTTP client, WikiTree API).

use std::error::Error;
use std::fmt;

use crate::app::AppState;
use crate::args::{Arguments, DataSourceKind};
use crate::model::{Dataset, ImageMap, IndiId};
use crate::services::{Analytics, LocalBoxFuture};

mod json;
mod remote;
mod uploaded;
mod wikitree;

pub use json::JsonDataLoader;
pub use remote::UrlSource;
pub use uploaded::UploadedSource;
pub use wikitree::WikiTreeSource;

/// A failed load. `Display` is the human-readable message shown to the user.
#[derive(Debug)]
pub struct LoadError {
    message: String,
    source: Option<Box<dyn Error + 'static>>,
}

impl LoadError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    pub fn with_source(message: impl Into<String>, source: impl Error + 'static) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl Error for LoadError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        self.source.as_deref()
    }
}

/// Parsing and fetching collaborators.
pub trait DataLoader {
    /// Parses uploaded GEDCOM text. `hash` identifies the upload (empty for embedded payloads).
    fn parse_uploaded(
        &self,
        hash: String,
        gedcom: String,
        images: ImageMap,
    ) -> LocalBoxFuture<'_, Result<Dataset, LoadError>>;

    fn fetch_from_url(
        &self,
        url: String,
        handle_cors: bool,
    ) -> LocalBoxFuture<'_, Result<Dataset, LoadError>>;

    fn fetch_wikitree(
        &self,
        id: IndiId,
        locale: String,
        authcode: Option<String>,
    ) -> LocalBoxFuture<'_, Result<Dataset, LoadError>>;
}

/// What a strategy needs to perform a load.
#[derive(Clone, Copy)]
pub struct LoadContext<'a> {
    pub loader: &'a dyn DataLoader,
    pub analytics: &'a dyn Analytics,
    pub locale: &'a str,
}

pub trait DataSource {
    fn kind(&self) -> DataSourceKind;

    /// Whether `args` ask for data that is not the data described by `state`.
    fn is_new_data(&self, args: &Arguments, state: &AppState) -> bool;

    fn load_data<'a>(
        &self,
        ctx: LoadContext<'a>,
        args: &Arguments,
    ) -> LocalBoxFuture<'a, Result<Dataset, LoadError>>;
}

impl DataSourceKind {
    pub fn strategy(self) -> &'static dyn DataSource {
        match self {
            Self::Uploaded => &UploadedSource,
            Self::GedcomUrl => &UrlSource,
            Self::WikiTree => &WikiTreeSource,
        }
    }
}

/// Shared analytics contract for file-based sources.
fn report_file_load(
    analytics: &dyn Analytics,
    result: &Result<Dataset, LoadError>,
    image_count: usize,
) {
    match result {
        Ok(dataset) => analytics.event(
            "dataset_loaded",
            dataset.software(),
            Some(image_count as u64),
        ),
        Err(_) => analytics.event("dataset_error", None, None),
    }
}
