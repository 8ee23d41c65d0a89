//! Property-based tests for the roster classifier.
//!
//! These verify the classifier's algebraic guarantees across randomly
//! generated rosters: subsequence ordering, idempotence, bucket
//! disjointness, and the antisymmetry of the day-offset primitive.

use chrono::{Duration, NaiveDate};
use gym_admin::classify::{DayOffset, classify_at, days_until};
use gym_admin::models::{Category, MemberRecord};
use proptest::prelude::*;
use serde_json::Map;

fn anchor() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 7).unwrap()
}

prop_compose! {
    fn arbitrary_date()(offset in -20_000i64..20_000i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2000, 1, 1).unwrap() + Duration::days(offset)
    }
}

fn date_field() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        3 => (-40i64..40i64).prop_map(|days| Some((anchor() + Duration::days(days)).to_string())),
        1 => Just(None),
        1 => Just(Some("not-a-date".to_string())),
        1 => Just(Some(String::new())),
    ]
}

fn status_field() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(Some("active".to_string())),
        Just(Some("Active".to_string())),
        Just(Some("ACTIVE".to_string())),
        Just(Some("frozen".to_string())),
        Just(Some(String::new())),
        Just(None),
    ]
}

fn arbitrary_roster() -> impl Strategy<Value = Vec<MemberRecord>> {
    prop::collection::vec((date_field(), date_field(), status_field()), 0..24).prop_map(
        |entries| {
            entries
                .into_iter()
                .enumerate()
                .map(|(index, (created_at, next_bill_date, status))| MemberRecord {
                    id: format!("member-{index}"),
                    name: None,
                    created_at,
                    next_bill_date,
                    status,
                    extra: Map::new(),
                })
                .collect()
        },
    )
}

fn arbitrary_category() -> impl Strategy<Value = Category> {
    (0usize..Category::ALL.len()).prop_map(|index| Category::ALL[index])
}

fn selected_ids(roster: &[MemberRecord], category: Category) -> Vec<String> {
    classify_at(anchor(), roster, category)
        .iter()
        .map(|member| member.id.clone())
        .collect()
}

proptest! {
    #[test]
    fn days_until_is_antisymmetric(a in arbitrary_date(), b in arbitrary_date()) {
        let forward = days_until(Some(&a.to_string()), b);
        let backward = days_until(Some(&b.to_string()), a);
        match (forward, backward) {
            (DayOffset::Days(x), DayOffset::Days(y)) => prop_assert_eq!(x, -y),
            (forward, backward) => prop_assert!(
                false,
                "valid dates must yield offsets, got {:?} / {:?}",
                forward,
                backward
            ),
        }
    }

    #[test]
    fn classification_is_an_ordered_subsequence(
        roster in arbitrary_roster(),
        category in arbitrary_category(),
    ) {
        let selected = classify_at(anchor(), &roster, category);
        let mut cursor = roster.iter();
        for member in &selected {
            prop_assert!(
                cursor.any(|candidate| std::ptr::eq(*member, candidate)),
                "selection out of roster order"
            );
        }
    }

    #[test]
    fn classification_is_idempotent(
        roster in arbitrary_roster(),
        category in arbitrary_category(),
    ) {
        prop_assert_eq!(
            selected_ids(&roster, category),
            selected_ids(&roster, category)
        );
    }

    #[test]
    fn expiry_buckets_are_disjoint(roster in arbitrary_roster()) {
        let soon = selected_ids(&roster, Category::ExpiringIn3Days);
        for id in selected_ids(&roster, Category::ExpiringIn4To7Days) {
            prop_assert!(!soon.contains(&id));
        }
        for id in selected_ids(&roster, Category::Expired) {
            prop_assert!(!soon.contains(&id));
        }
    }

    #[test]
    fn every_keyword_resolves_inside_the_vocabulary(raw in "[a-zA-Z0-9]{0,16}") {
        let category = Category::from_keyword(&raw);
        prop_assert!(Category::ALL.contains(&category));
    }
}
