// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Navigation locations and query-string plumbing.

use url::form_urlencoded;

use crate::model::ImageMap;

/// In-memory payload attached to a navigation after a local file upload.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UploadPayload {
    pub gedcom: String,
    pub images: ImageMap,
}

/// Current navigation location: path, raw query string, and optional history state.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub pathname: String,
    /// Query string with or without the leading `?`.
    pub search: String,
    pub state: Option<UploadPayload>,
}

impl Location {
    pub fn new(pathname: impl Into<String>, search: impl Into<String>) -> Self {
        Self {
            pathname: pathname.into(),
            search: search.into(),
            state: None,
        }
    }

    /// Splits `"/view?indi=I1"` into path and query.
    pub fn parse(href: &str) -> Self {
        match href.split_once('?') {
            Some((pathname, search)) => Self::new(pathname, search),
            None => Self::new(href, ""),
        }
    }

    pub fn with_state(mut self, state: UploadPayload) -> Self {
        self.state = Some(state);
        self
    }

    pub fn href(&self) -> String {
        let search = self.search.trim_start_matches('?');
        if search.is_empty() {
            self.pathname.clone()
        } else {
            format!("{}?{search}", self.pathname)
        }
    }

    pub fn query_pairs(&self) -> Vec<(String, String)> {
        form_urlencoded::parse(self.search.trim_start_matches('?').as_bytes())
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect()
    }

    /// Returns the value of a query parameter that appears exactly once.
    ///
    /// A repeated key is ambiguous and reads as absent.
    pub fn param(&self, key: &str) -> Option<String> {
        let mut values = form_urlencoded::parse(self.search.trim_start_matches('?').as_bytes())
            .filter(|(name, _)| name == key)
            .map(|(_, value)| value.into_owned());
        let first = values.next()?;
        if values.next().is_some() {
            return None;
        }
        Some(first)
    }

    /// Same path, query with `updates` applied: existing keys are overwritten in place, new keys
    /// are appended. History state is not carried over.
    pub fn with_params(&self, updates: &[(&str, String)]) -> Self {
        let mut pairs = self.query_pairs();
        for (key, value) in updates {
            let mut replaced = false;
            pairs.retain_mut(|(name, current)| {
                if name != key {
                    return true;
                }
                if replaced {
                    return false;
                }
                replaced = true;
                *current = value.clone();
                true
            });
            if !replaced {
                pairs.push(((*key).to_owned(), value.clone()));
            }
        }

        let search = form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs.iter().map(|(key, value)| (key.as_str(), value.as_str())))
            .finish();
        Self::new(self.pathname.clone(), search)
    }
}
