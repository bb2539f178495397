// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Selection synchronisation between the chart, the controller state and the URL.

use crate::location::Location;
use crate::model::{Dataset, IndiId, Selection};

pub const DEFAULT_GENERATION: i32 = 0;

/// Picks the selection to show for `dataset`.
///
/// A requested individual is used when the dataset contains it; otherwise the dataset's default
/// individual is. The requested generation applies either way. Returns `None` only for a dataset
/// without individuals.
pub fn compute_selection(
    dataset: &Dataset,
    requested: Option<&IndiId>,
    generation: Option<i32>,
) -> Option<Selection> {
    let chart = dataset.chart();
    let id = requested
        .filter(|id| chart.contains_indi(id.as_str()))
        .or_else(|| chart.default_indi())?;
    Some(Selection::new(id.clone(), generation.unwrap_or(DEFAULT_GENERATION)))
}

/// `location` with `indi` and `gen` set to `selection`.
pub fn selection_location(location: &Location, selection: &Selection) -> Location {
    location.with_params(&[
        ("indi", selection.id.to_string()),
        ("gen", selection.generation.to_string()),
    ])
}

/// Whether a chart click on `selection` may be acted upon.
pub fn is_selectable(selection: &Selection) -> bool {
    !selection.id.is_private()
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::{compute_selection, is_selectable, selection_location};
    use crate::args::extract;
    use crate::location::Location;
    use crate::model::fixtures::{curie_family, indi_id};
    use crate::model::{Dataset, Selection};

    #[rstest]
    #[case(Some("I3"), Some(2), "I3", 2)]
    #[case(Some("I3"), None, "I3", 0)]
    #[case(Some("I99"), Some(4), "I1", 4)]
    #[case(None, None, "I1", 0)]
    fn compute_selection_prefers_existing_requested_indi(
        #[case] requested: Option<&str>,
        #[case] generation: Option<i32>,
        #[case] expected_id: &str,
        #[case] expected_generation: i32,
    ) {
        let requested = requested.map(indi_id);
        let selection = compute_selection(&curie_family(), requested.as_ref(), generation)
            .expect("selection");
        assert_eq!(selection, Selection::new(indi_id(expected_id), expected_generation));
    }

    #[test]
    fn empty_dataset_has_no_selection() {
        assert_eq!(compute_selection(&Dataset::default(), Some(&indi_id("I1")), None), None);
    }

    #[rstest]
    #[case("I4", 3)]
    #[case("I6", -1)]
    #[case("I2", 0)]
    fn selection_round_trips_through_query_string(#[case] id: &str, #[case] generation: i32) {
        let location = Location::new("/view", "file=abc&indi=I1&gen=1&view=fancy");
        let selection = Selection::new(indi_id(id), generation);

        let next = selection_location(&location, &selection);
        let args = extract(&next);

        let recomputed =
            compute_selection(&curie_family(), args.indi.as_ref(), args.generation).expect("selection");
        assert_eq!(recomputed, selection);
        assert_eq!(args.hash.as_deref(), Some("abc"));
    }

    #[test]
    fn private_placeholders_are_not_selectable() {
        assert!(!is_selectable(&Selection::new(indi_id("~Private-3"), 0)));
        assert!(is_selectable(&Selection::new(indi_id("Curie-5"), 0)));
    }
}
