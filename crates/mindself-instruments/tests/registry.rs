use std::collections::HashSet;

use mindself_instruments::error::InstrumentError;
use mindself_instruments::scoring::{ScaleCategory, TOTAL};
use mindself_instruments::{
    all_instruments, get_instrument, get_scale, scales_in_category, validate_registry,
};

#[test]
fn every_registered_definition_is_valid() {
    for instrument in all_instruments() {
        let errors = instrument.validate_definition();
        assert!(errors.is_empty(), "{}: {errors:?}", instrument.id());
    }
    validate_registry().unwrap();
}

#[test]
fn ids_are_unique() {
    let mut seen = HashSet::new();
    for instrument in all_instruments() {
        assert!(seen.insert(instrument.id()), "duplicate id {}", instrument.id());
    }
    assert_eq!(seen.len(), 9);
}

#[test]
fn lookup_by_id() {
    let phq9 = get_scale("phq9").unwrap();
    assert_eq!(phq9.short_title, "PHQ-9");
    assert_eq!(phq9.questions.len(), 9);

    let dass = get_instrument("dass21").unwrap();
    assert_eq!(dass.name(), "DASS-21");
}

#[test]
fn unknown_scale_is_an_error() {
    match get_scale("bdi2") {
        Err(InstrumentError::UnknownScale(id)) => assert_eq!(id, "bdi2"),
        other => panic!("expected UnknownScale, got {other:?}"),
    }
}

#[test]
fn every_score_matches_exactly_one_band() {
    for instrument in all_instruments() {
        let definition = instrument.definition();
        for subscale in definition.all_subscales() {
            let (lo, hi) = definition.score_range(&subscale.id);
            for score in lo..=hi {
                let matches = subscale.bands.iter().filter(|b| b.contains(score)).count();
                assert_eq!(
                    matches, 1,
                    "{}/{}: score {score} matched {matches} bands",
                    definition.id, subscale.id
                );
            }
            for band in &subscale.bands {
                assert!(band.min >= lo && band.max <= hi, "{}/{} band '{}' leaves the score domain", definition.id, subscale.id, band.level);
            }
        }
    }
}

#[test]
fn score_ranges_follow_the_published_metrics() {
    let range = |id: &str, subscale: &str| get_scale(id).unwrap().score_range(subscale);

    assert_eq!(range("phq9", TOTAL), (0, 27));
    assert_eq!(range("gad7", TOTAL), (0, 21));
    assert_eq!(range("pss10", TOTAL), (0, 40));
    assert_eq!(range("sds", TOTAL), (25, 100));
    assert_eq!(range("sas", TOTAL), (25, 100));
    assert_eq!(range("rosenberg", TOTAL), (10, 40));
    assert_eq!(range("who5", TOTAL), (0, 100));
    assert_eq!(range("psqi", TOTAL), (0, 30));
    assert_eq!(range("dass21", TOTAL), (0, 126));
    assert_eq!(range("dass21", "depression"), (0, 42));
    assert_eq!(range("dass21", "anxiety"), (0, 42));
    assert_eq!(range("dass21", "stress"), (0, 42));
}

#[test]
fn dass21_items_split_evenly() {
    let dass = get_scale("dass21").unwrap();
    for subscale in ["depression", "anxiety", "stress"] {
        let count = dass
            .questions
            .iter()
            .filter(|q| q.category.as_deref() == Some(subscale))
            .count();
        assert_eq!(count, 7, "{subscale}");
    }
    assert!(dass.questions.iter().all(|q| !q.reverse));
}

#[test]
fn reversal_anchor_mirrors_option_values() {
    for instrument in all_instruments() {
        let definition = instrument.definition();
        if definition.questions.iter().any(|q| q.reverse) {
            assert_eq!(
                definition.reverse_anchor,
                definition.min_value() + definition.max_value(),
                "{}",
                definition.id
            );
        }
    }
}

#[test]
fn categories_filter_the_registry() {
    let depression: Vec<_> = scales_in_category(ScaleCategory::Depression)
        .iter()
        .map(|i| i.id().to_string())
        .collect();
    assert_eq!(depression, ["phq9", "sds"]);

    let sleep = scales_in_category(ScaleCategory::Sleep);
    assert_eq!(sleep.len(), 1);
    assert_eq!(sleep[0].id(), "psqi");

    let total: usize = ScaleCategory::ALL
        .iter()
        .map(|c| scales_in_category(*c).len())
        .sum();
    assert_eq!(total, all_instruments().len());
}

#[test]
fn category_parses_from_its_id() {
    assert_eq!("self_esteem".parse::<ScaleCategory>().unwrap(), ScaleCategory::SelfEsteem);
    assert!(matches!(
        "happiness".parse::<ScaleCategory>(),
        Err(InstrumentError::UnknownCategory(_))
    ));
}

#[test]
fn safety_rules_point_at_self_harm_items() {
    let phq9 = get_scale("phq9").unwrap();
    let check = phq9.safety_check.as_ref().unwrap();
    assert_eq!(check.item_index, 8);
    assert_eq!(check.threshold, 1);
    assert!(phq9.questions[8].text.contains("hurting yourself"));

    let sds = get_scale("sds").unwrap();
    let check = sds.safety_check.as_ref().unwrap();
    assert_eq!(check.item_index, 18);
    assert!(sds.questions[18].text.contains("better off if I were dead"));
}
