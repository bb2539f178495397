// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::path::{Path, PathBuf};

use crate::model::{Dataset, ImageMap, IndiId};
use crate::services::LocalBoxFuture;

use super::{DataLoader, LoadError};

/// Loader for pre-parsed datasets stored as JSON.
///
/// Uploads and URLs are read as serialized [`Dataset`]s; URLs must point at local files.
/// WikiTree lookups read `<id>.json` from an optional snapshot directory.
#[derive(Debug, Clone, Default)]
pub struct JsonDataLoader {
    wikitree_dir: Option<PathBuf>,
}

impl JsonDataLoader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_wikitree_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.wikitree_dir = Some(dir.into());
        self
    }
}

fn parse_dataset(raw: &str, origin: &str) -> Result<Dataset, LoadError> {
    serde_json::from_str(raw)
        .map_err(|err| LoadError::with_source(format!("Failed to parse {origin}: {err}"), err))
}

async fn read_dataset(path: &Path) -> Result<Dataset, LoadError> {
    let raw = tokio::fs::read_to_string(path).await.map_err(|err| {
        LoadError::with_source(format!("Failed to read {}: {err}", path.display()), err)
    })?;
    parse_dataset(&raw, &path.display().to_string())
}

/// `<id>.json`, or `None` when the id could name a path outside the snapshot directory.
fn snapshot_file_name(id: &IndiId) -> Option<String> {
    let id = id.as_str();
    if id.contains(['/', '\\']) || id.contains("..") {
        return None;
    }
    Some(format!("{id}.json"))
}

fn local_path(url: &str) -> Option<&Path> {
    if url.starts_with("http://") || url.starts_with("https://") {
        return None;
    }
    Some(Path::new(url.strip_prefix("file://").unwrap_or(url)))
}

impl DataLoader for JsonDataLoader {
    fn parse_uploaded(
        &self,
        hash: String,
        gedcom: String,
        images: ImageMap,
    ) -> LocalBoxFuture<'_, Result<Dataset, LoadError>> {
        Box::pin(async move {
            tracing::debug!(%hash, images = images.len(), "parsing uploaded dataset");
            parse_dataset(&gedcom, "uploaded file")
        })
    }

    fn fetch_from_url(
        &self,
        url: String,
        handle_cors: bool,
    ) -> LocalBoxFuture<'_, Result<Dataset, LoadError>> {
        Box::pin(async move {
            let Some(path) = local_path(&url) else {
                return Err(LoadError::new(format!(
                    "Cannot fetch {url}: only local files are supported"
                )));
            };
            tracing::debug!(%url, handle_cors, "reading dataset from file");
            read_dataset(path).await
        })
    }

    fn fetch_wikitree(
        &self,
        id: IndiId,
        locale: String,
        _authcode: Option<String>,
    ) -> LocalBoxFuture<'_, Result<Dataset, LoadError>> {
        Box::pin(async move {
            let Some(dir) = self.wikitree_dir.as_ref() else {
                return Err(LoadError::new("WikiTree lookups are not available offline"));
            };
            let Some(file_name) = snapshot_file_name(&id) else {
                return Err(LoadError::new(format!("Invalid WikiTree id: {id}")));
            };
            tracing::debug!(%id, %locale, "reading WikiTree snapshot");
            read_dataset(&dir.join(file_name)).await
        })
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{local_path, snapshot_file_name, JsonDataLoader};
    use crate::model::ImageMap;
    use crate::source::DataLoader;

    #[test]
    fn local_path_rejects_http_and_strips_file_scheme() {
        assert!(local_path("https://example.org/tree.json").is_none());
        assert_eq!(
            local_path("file:///tmp/tree.json").map(|path| path.to_path_buf()),
            Some("/tmp/tree.json".into())
        );
        assert_eq!(
            local_path("tree.json").map(|path| path.to_path_buf()),
            Some("tree.json".into())
        );
    }

    #[tokio::test]
    async fn parse_uploaded_reports_json_errors_with_message() {
        let loader = JsonDataLoader::new();
        let err = loader
            .parse_uploaded("h".to_owned(), "not json".to_owned(), ImageMap::new())
            .await
            .expect_err("invalid json");
        assert!(err.message().starts_with("Failed to parse uploaded file"), "{err}");
    }

    #[tokio::test]
    async fn wikitree_without_snapshot_dir_fails() {
        let loader = JsonDataLoader::new();
        let id = crate::model::IndiId::new("Curie-5").expect("id");
        let err = loader
            .fetch_wikitree(id, "en".to_owned(), None)
            .await
            .expect_err("offline");
        assert_eq!(err.message(), "WikiTree lookups are not available offline");
    }

    #[rstest]
    #[case("Curie-5", Some("Curie-5.json"))]
    #[case("../secret", None)]
    #[case("a/b", None)]
    #[case("a\\b", None)]
    #[case("..", None)]
    fn snapshot_file_name_rejects_path_components(
        #[case] id: &str,
        #[case] expected: Option<&str>,
    ) {
        let id = crate::model::IndiId::new(id).expect("id");
        assert_eq!(snapshot_file_name(&id).as_deref(), expected);
    }

    #[tokio::test]
    async fn wikitree_rejects_ids_escaping_snapshot_dir() {
        let dir = std::env::temp_dir().join(format!("kinchart-snapshots-{}", std::process::id()));
        let loader = JsonDataLoader::new().with_wikitree_dir(&dir);
        let id = crate::model::IndiId::new("../outside").expect("id");
        let err = loader
            .fetch_wikitree(id, "en".to_owned(), None)
            .await
            .expect_err("path traversal");
        assert_eq!(err.message(), "Invalid WikiTree id: ../outside");
    }
}
