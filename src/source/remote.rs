// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::app::AppState;
use crate::args::{Arguments, DataSourceKind};
use crate::model::Dataset;
use crate::services::LocalBoxFuture;

use super::{report_file_load, DataSource, LoadContext, LoadError};

/// A GEDCOM file fetched from a URL given in the `url` parameter.
#[derive(Debug, Clone, Copy, Default)]
pub struct UrlSource;

impl DataSource for UrlSource {
    fn kind(&self) -> DataSourceKind {
        DataSourceKind::GedcomUrl
    }

    fn is_new_data(&self, args: &Arguments, state: &AppState) -> bool {
        args.url != state.url
    }

    fn load_data<'a>(
        &self,
        ctx: LoadContext<'a>,
        args: &Arguments,
    ) -> LocalBoxFuture<'a, Result<Dataset, LoadError>> {
        let url = args.url.clone();
        let handle_cors = args.handle_cors;

        Box::pin(async move {
            let result = match url {
                Some(url) => ctx.loader.fetch_from_url(url, handle_cors).await,
                None => Err(LoadError::new("No URL given to load data from.")),
            };
            report_file_load(ctx.analytics, &result, 0);
            result
        })
    }
}
