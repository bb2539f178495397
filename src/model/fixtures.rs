// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use super::dataset::{ChartData, Dataset, Fam, Indi, SourceMeta};
use super::ids::{FamId, IndiId};

pub(crate) fn indi_id(value: &str) -> IndiId {
    IndiId::new(value).expect("indi id")
}

fn fam_id(value: &str) -> FamId {
    FamId::new(value).expect("fam id")
}

/// Three generations: Pierre + Marie, their daughters, and Irène's children.
pub(crate) fn curie_family() -> Dataset {
    let indis = vec![
        Indi::new(indi_id("I1"))
            .with_name("Marie", "Curie")
            .with_fams(fam_id("F1")),
        Indi::new(indi_id("I2"))
            .with_name("Pierre", "Curie")
            .with_fams(fam_id("F1")),
        Indi::new(indi_id("I3"))
            .with_name("Irène", "Joliot-Curie")
            .with_famc(fam_id("F1"))
            .with_fams(fam_id("F2")),
        Indi::new(indi_id("I4"))
            .with_name("Ève", "Curie")
            .with_famc(fam_id("F1")),
        Indi::new(indi_id("I5"))
            .with_name("Frédéric", "Joliot-Curie")
            .with_fams(fam_id("F2")),
        Indi::new(indi_id("I6"))
            .with_name("Hélène", "Langevin-Joliot")
            .with_famc(fam_id("F2")),
    ];
    let fams = vec![
        Fam::new(fam_id("F1"), Some(indi_id("I2")), Some(indi_id("I1")))
            .with_child(indi_id("I3"))
            .with_child(indi_id("I4")),
        Fam::new(fam_id("F2"), Some(indi_id("I5")), Some(indi_id("I3")))
            .with_child(indi_id("I6")),
    ];

    Dataset::new(
        ChartData::new(indis, fams),
        SourceMeta {
            software: Some("Gramps".to_owned()),
        },
    )
}

/// A WikiTree-shaped neighbourhood around `center`, including one private placeholder.
pub(crate) fn wikitree_neighbourhood(center: &str, relatives: &[&str]) -> Dataset {
    let mut indis = vec![Indi::new(indi_id(center))];
    indis.extend(relatives.iter().map(|id| Indi::new(indi_id(id))));
    indis.push(Indi::new(indi_id("~Private-1")));

    Dataset::new(
        ChartData::new(indis, Vec::new()),
        SourceMeta {
            software: Some("WikiTree".to_owned()),
        },
    )
}
