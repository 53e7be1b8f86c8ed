//! Read-only query service over the generated cases.

use std::collections::HashMap;

use crate::errors::AppError;
use crate::models::{CustomerCase, DebugSnapshot, RouteInfo};

/// Path segment reserved for `/cases/filter/{status}`. Never a valid case id.
pub const RESERVED_FILTER_SEGMENT: &str = "filter";

/// Immutable collection of cases, built once at startup.
#[derive(Debug, Clone, Default)]
pub struct CaseStore {
    cases: Vec<CustomerCase>,
    index: HashMap<String, usize>,
}

impl CaseStore {
    /// Takes ownership of `cases`, preserving their order. If two cases share
    /// an id, lookups resolve to the first one.
    pub fn new(cases: Vec<CustomerCase>) -> Self {
        let mut index = HashMap::with_capacity(cases.len());
        for (position, case) in cases.iter().enumerate() {
            index.entry(case.id.clone()).or_insert(position);
        }
        Self { cases, index }
    }

    pub fn len(&self) -> usize {
        self.cases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cases.is_empty()
    }

    /// Every case, in insertion order.
    pub fn all(&self) -> &[CustomerCase] {
        &self.cases
    }

    /// Cases whose status serializes exactly to `status`. Matching is
    /// case-sensitive; an unknown status yields an empty list.
    pub fn by_status(&self, status: &str) -> Vec<&CustomerCase> {
        self.cases
            .iter()
            .filter(|case| case.status.as_str() == status)
            .collect()
    }

    /// Looks up a case by id.
    ///
    /// # Errors
    ///
    /// [`AppError::NotFound`] when no case carries `case_id`, or when
    /// `case_id` is the reserved `filter` segment.
    pub fn get(&self, case_id: &str) -> Result<&CustomerCase, AppError> {
        if case_id == RESERVED_FILTER_SEGMENT {
            return Err(AppError::NotFound("Invalid case ID".to_string()));
        }

        self.index
            .get(case_id)
            .map(|&position| &self.cases[position])
            .ok_or_else(|| AppError::NotFound(format!("Case with ID {} not found", case_id)))
    }

    /// Collection size, all ids, the first case, and the case routes.
    pub fn snapshot(&self) -> DebugSnapshot {
        DebugSnapshot {
            routes: case_route_table(),
            cases_count: self.cases.len(),
            case_ids: self.cases.iter().map(|case| case.id.clone()).collect(),
            sample_case: self.cases.first().cloned(),
        }
    }
}

fn case_route_table() -> Vec<RouteInfo> {
    [
        ("/api/cases", "Get all cases"),
        ("/api/cases/filter/{status}", "Filter cases by status"),
        ("/api/cases/{case_id}", "Get case by ID"),
    ]
    .into_iter()
    .map(|(path, description)| RouteInfo {
        path: path.to_string(),
        method: "GET".to_string(),
        description: description.to_string(),
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate_cases;
    use crate::models::CaseStatus;
    use chrono::Utc;
    use rand::{rngs::StdRng, SeedableRng};

    fn store(count: usize) -> CaseStore {
        let mut rng = StdRng::seed_from_u64(2024);
        CaseStore::new(generate_cases(&mut rng, count, Utc::now()))
    }

    #[test]
    fn test_all_preserves_order() {
        let store = store(15);
        assert_eq!(store.len(), 15);
        let ids: Vec<&str> = store.all().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids.first(), Some(&"CASE0001"));
        assert_eq!(ids.last(), Some(&"CASE0015"));
        assert!(ids.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_by_status_exact_match() {
        let store = store(50);
        let mut total = 0;
        for status in CaseStatus::ALL {
            let matched = store.by_status(status.as_str());
            assert!(matched.iter().all(|c| c.status == status));
            total += matched.len();
        }
        assert_eq!(total, store.len());
    }

    #[test]
    fn test_by_status_is_case_sensitive() {
        let store = store(50);
        assert!(!store.by_status("draft").is_empty());
        assert!(store.by_status("Draft").is_empty());
        assert!(store.by_status("DRAFT").is_empty());
    }

    #[test]
    fn test_by_status_unknown_is_empty() {
        let store = store(15);
        assert!(store.by_status("approved").is_empty());
        assert!(store.by_status("").is_empty());
    }

    #[test]
    fn test_get_existing_case() {
        let store = store(15);
        let case = store.get("CASE0001").unwrap();
        assert_eq!(case, &store.all()[0]);
        assert_eq!(store.get("CASE0015").unwrap().id, "CASE0015");
    }

    #[test]
    fn test_get_missing_case() {
        let store = store(15);
        assert_eq!(
            store.get("CASE9999"),
            Err(AppError::NotFound("Case with ID CASE9999 not found".to_string()))
        );
        assert!(store.get("case0001").is_err());
    }

    #[test]
    fn test_get_rejects_filter_segment() {
        let store = store(15);
        assert_eq!(
            store.get(RESERVED_FILTER_SEGMENT),
            Err(AppError::NotFound("Invalid case ID".to_string()))
        );
    }

    #[test]
    fn test_duplicate_ids_resolve_to_first() {
        let base = store(2);
        let mut first = base.all()[0].clone();
        let mut second = base.all()[1].clone();
        first.id = "CASE0001".to_string();
        second.id = "CASE0001".to_string();
        second.customer_name = "Shadow".to_string();

        let store = CaseStore::new(vec![first.clone(), second]);
        assert_eq!(store.get("CASE0001").unwrap(), &first);
    }

    #[test]
    fn test_snapshot() {
        let store = store(3);
        let snapshot = store.snapshot();
        assert_eq!(snapshot.cases_count, 3);
        assert_eq!(snapshot.case_ids, vec!["CASE0001", "CASE0002", "CASE0003"]);
        assert_eq!(snapshot.sample_case.as_ref(), store.all().first());
        assert_eq!(snapshot.routes.len(), 3);
    }

    #[test]
    fn test_snapshot_of_empty_store() {
        let snapshot = CaseStore::default().snapshot();
        assert_eq!(snapshot.cases_count, 0);
        assert!(snapshot.case_ids.is_empty());
        assert!(snapshot.sample_case.is_none());
    }
}
