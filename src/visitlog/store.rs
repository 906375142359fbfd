//! Visit storage
//!
//! `VisitStore` is the seam between the command dispatcher and wherever visits
//! live. `VisitHistory` keeps them in memory for the lifetime of the process.

use super::types::{Doctor, Patient, Visit};
use std::collections::HashMap;

/// Append-only patient visit storage
pub trait VisitStore {
    /// Append a visit to the patient's history
    fn record(&mut self, patient: Patient, visit: Visit);

    /// All visits of a patient in recording order, `None` for unknown patients
    fn history(&self, patient: &Patient) -> Option<&[Visit]>;

    /// Number of patients with at least one visit
    fn patient_count(&self) -> usize;

    /// Latest visit of a patient to the given specialization
    ///
    /// When several matching visits share the latest date, the one recorded
    /// last wins.
    fn last_visit(&self, patient: &Patient, doctor: &Doctor) -> Option<&Visit> {
        self.history(patient)?
            .iter()
            .filter(|visit| &visit.doctor == doctor)
            .max_by_key(|visit| visit.date)
    }
}

/// In-memory store keyed by patient
#[derive(Debug, Default)]
pub struct VisitHistory {
    visits: HashMap<Patient, Vec<Visit>>,
}

impl VisitHistory {
    pub fn new() -> Self {
        Self::default()
    }
}

impl VisitStore for VisitHistory {
    fn record(&mut self, patient: Patient, visit: Visit) {
        self.visits.entry(patient).or_default().push(visit);
    }

    fn history(&self, patient: &Patient) -> Option<&[Visit]> {
        self.visits.get(patient).map(Vec::as_slice)
    }

    fn patient_count(&self) -> usize {
        self.visits.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn visit(doctor: &str, y: i32, m: u32, d: u32) -> Visit {
        Visit::new(
            Doctor::new(doctor).unwrap(),
            NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        )
    }

    fn patient(name: &str) -> Patient {
        Patient::new(name).unwrap()
    }

    #[test]
    fn test_new_store_is_empty() {
        let store = VisitHistory::new();
        assert_eq!(store.patient_count(), 0);
        assert!(store.history(&patient("Anyone")).is_none());
    }

    #[test]
    fn test_record_preserves_order() {
        let mut store = VisitHistory::new();
        store.record(patient("Max Payne"), visit("Surgery", 2025, 3, 1));
        store.record(patient("Max Payne"), visit("Dentist", 2024, 1, 1));
        store.record(patient("Mona Sax"), visit("Surgery", 2025, 1, 1));

        let history = store.history(&patient("Max Payne")).unwrap();
        assert_eq!(history.len(), 2);
        assert_eq!(history[0], visit("Surgery", 2025, 3, 1));
        assert_eq!(history[1], visit("Dentist", 2024, 1, 1));
        assert_eq!(store.patient_count(), 2);
    }

    #[test]
    fn test_last_visit_picks_latest_date() {
        let mut store = VisitHistory::new();
        let max = patient("Max Payne");
        store.record(max.clone(), visit("Surgery", 2025, 6, 1));
        store.record(max.clone(), visit("Surgery", 2025, 1, 1));
        store.record(max.clone(), visit("Dentist", 2026, 1, 1));

        let last = store
            .last_visit(&max, &Doctor::new("Surgery").unwrap())
            .unwrap();
        assert_eq!(last, &visit("Surgery", 2025, 6, 1));
    }

    #[test]
    fn test_last_visit_no_matching_doctor() {
        let mut store = VisitHistory::new();
        let max = patient("Max Payne");
        store.record(max.clone(), visit("Surgery", 2025, 6, 1));

        assert!(store
            .last_visit(&max, &Doctor::new("Dentist").unwrap())
            .is_none());
        assert!(store
            .last_visit(&patient("Nobody"), &Doctor::new("Surgery").unwrap())
            .is_none());
    }

    #[test]
    fn test_last_visit_equal_dates_prefers_latest_recorded() {
        let mut store = VisitHistory::new();
        let max = patient("Max Payne");
        store.record(max.clone(), visit("Surgery", 2025, 6, 1));
        store.record(max.clone(), visit("Surgery", 2025, 6, 1));

        let history = store.history(&max).unwrap();
        let last = store
            .last_visit(&max, &Doctor::new("Surgery").unwrap())
            .unwrap();
        assert!(std::ptr::eq(last, &history[1]));
    }
}
