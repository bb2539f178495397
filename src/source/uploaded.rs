// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use crate::app::{AppState, Phase};
use crate::args::{Arguments, DataSourceKind};
use crate::model::Dataset;
use crate::services::LocalBoxFuture;

use super::{report_file_load, DataSource, LoadContext, LoadError};

/// A GEDCOM file the user uploaded, identified by its content hash and held in memory.
#[derive(Debug, Clone, Copy, Default)]
pub struct UploadedSource;

impl DataSource for UploadedSource {
    fn kind(&self) -> DataSourceKind {
        DataSourceKind::Uploaded
    }

    fn is_new_data(&self, args: &Arguments, state: &AppState) -> bool {
        if args.hash != state.hash {
            return true;
        }
        // Same hash, but a payload arrived before anything was shown (first load).
        args.gedcom.is_some() && !matches!(state.phase, Phase::Loading | Phase::ShowingChart)
    }

    fn load_data<'a>(
        &self,
        ctx: LoadContext<'a>,
        args: &Arguments,
    ) -> LocalBoxFuture<'a, Result<Dataset, LoadError>> {
        let hash = args.hash.clone().unwrap_or_default();
        let gedcom = args.gedcom.clone();
        let images = args.images.clone().unwrap_or_default();
        let image_count = images.len();

        Box::pin(async move {
            let result = match gedcom {
                Some(gedcom) => ctx.loader.parse_uploaded(hash, gedcom, images).await,
                None => Err(LoadError::new("Error loading data. Please upload your file again.")),
            };
            report_file_load(ctx.analytics, &result, image_count);
            result
        })
    }
}
