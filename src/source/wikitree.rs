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

use super::{DataSource, LoadContext, LoadError};

/// Live lookups against the WikiTree API, centred on the requested individual.
///
/// WikiTree responses only cover a neighbourhood of the requested person, so moving to someone
/// already on the chart keeps the chart and fetches more around them instead of reloading.
#[derive(Debug, Clone, Copy, Default)]
pub struct WikiTreeSource;

impl DataSource for WikiTreeSource {
    fn kind(&self) -> DataSourceKind {
        DataSourceKind::WikiTree
    }

    fn is_new_data(&self, args: &Arguments, state: &AppState) -> bool {
        let Some(requested) = args.indi.as_ref() else {
            return false;
        };
        if state.selection.as_ref().is_some_and(|selection| &selection.id == requested) {
            return false;
        }
        if state.data.as_ref().is_some_and(|data| data.chart().contains_indi(requested.as_str())) {
            return false;
        }
        true
    }

    fn load_data<'a>(
        &self,
        ctx: LoadContext<'a>,
        args: &Arguments,
    ) -> LocalBoxFuture<'a, Result<Dataset, LoadError>> {
        let indi = args.indi.clone();
        let authcode = args.authcode.clone();

        Box::pin(async move {
            let Some(indi) = indi else {
                return Err(LoadError::new("WikiTree source needs an individual (indi parameter)."));
            };
            ctx.loader.fetch_wikitree(indi, ctx.locale.to_owned(), authcode).await
        })
    }
}
