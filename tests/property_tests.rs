/// Property-based tests using proptest
/// Tests invariants of generated cases and store lookups for arbitrary seeds and sizes
use chrono::{TimeZone, Utc};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use regex::Regex;
use std::collections::HashSet;
use underwriter_api::core::generator::generate_cases;
use underwriter_api::core::models::CustomerCase;
use underwriter_api::core::store::CaseStore;

fn cases_for(seed: u64, count: usize) -> Vec<CustomerCase> {
    let now = Utc.with_ymd_and_hms(2025, 1, 31, 9, 30, 0).unwrap();
    let mut rng = StdRng::seed_from_u64(seed);
    generate_cases(&mut rng, count, now)
}

// Property: ids are unique, sequential and zero-padded
proptest! {
    #[test]
    fn ids_unique_and_sequential(seed in any::<u64>(), count in 0usize..120) {
        let cases = cases_for(seed, count);
        prop_assert_eq!(cases.len(), count);

        let id_format = Regex::new(r"^CASE\d{4,}$").unwrap();
        let unique: HashSet<&str> = cases.iter().map(|c| c.id.as_str()).collect();
        prop_assert_eq!(unique.len(), count);

        for (i, case) in cases.iter().enumerate() {
            prop_assert!(id_format.is_match(&case.id));
            let number: usize = case.id[4..].parse().unwrap();
            prop_assert_eq!(number, i + 1);
        }
    }
}

// Property: derived fields agree with their sources
proptest! {
    #[test]
    fn derived_fields_consistent(seed in any::<u64>(), count in 1usize..60) {
        for case in cases_for(seed, count) {
            let d = &case.details;
            prop_assert_eq!(d.basics.annual_income, d.financials.monthly_income * 12.0);
            prop_assert_eq!(d.additional.documents_uploaded, d.additional.documents.len());
            prop_assert!(d.additional.documents.len() <= 3);
            prop_assert!(d.pd_details.probability_of_default > 0.0);
            prop_assert!(d.pd_details.probability_of_default < 1.0);
            prop_assert!(case.loan_amount > 0.0);
        }
    }
}

// Property: every generated case is reachable by id, and status filters partition the collection
proptest! {
    #[test]
    fn store_lookups_cover_collection(seed in any::<u64>(), count in 0usize..60) {
        let cases = cases_for(seed, count);
        let store = CaseStore::new(cases.clone());

        prop_assert_eq!(store.all(), cases.as_slice());
        for case in &cases {
            prop_assert_eq!(store.get(&case.id).unwrap(), case);
        }
        prop_assert!(store.get("filter").is_err());

        let filtered: usize = ["assigned", "draft", "submitted"]
            .iter()
            .map(|status| store.by_status(status).len())
            .sum();
        prop_assert_eq!(filtered, count);
    }

    #[test]
    fn unknown_status_never_matches(status in "[A-Za-z_]{0,12}") {
        prop_assume!(!["assigned", "draft", "submitted"].contains(&status.as_str()));
        let store = CaseStore::new(cases_for(7, 30));
        prop_assert!(store.by_status(&status).is_empty());
    }
}
