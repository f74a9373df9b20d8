use residence_tracker::error::RegistryResult;
use residence_tracker::models::Residence;
use residence_tracker::repositories::{
    InMemoryResidenceRepository, ResidenceFilter, ResidenceRepository,
};
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock residence repository for testing.
///
/// Delegates storage to the in-memory repository and tracks method calls
/// for verification.
#[allow(dead_code)]
#[derive(Default)]
pub struct MockResidenceRepository {
    inner: InMemoryResidenceRepository,
    call_counts: RefCell<HashMap<String, usize>>,
}

#[allow(dead_code)]
impl MockResidenceRepository {
    /// Create a new empty MockResidenceRepository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository pre-populated with residences.
    pub fn with_residences(residences: Vec<Residence>) -> Self {
        Self {
            inner: InMemoryResidenceRepository::with_residences(residences),
            call_counts: RefCell::new(HashMap::new()),
        }
    }

    /// Every stored residence, ignoring the filter.
    pub fn residences(&self) -> &[Residence] {
        self.inner.residences()
    }

    /// The active filter.
    pub fn filter(&self) -> &ResidenceFilter {
        self.inner.filter()
    }

    /// Get the number of times a method was called.
    pub fn get_call_count(&self, method: &str) -> usize {
        *self.call_counts.borrow().get(method).unwrap_or(&0)
    }

    /// Reset all call counts.
    pub fn reset_call_counts(&self) {
        self.call_counts.borrow_mut().clear();
    }

    fn track_call(&self, method: &str) {
        *self
            .call_counts
            .borrow_mut()
            .entry(method.to_string())
            .or_insert(0) += 1;
    }
}

impl ResidenceRepository for MockResidenceRepository {
    fn has_residence(&self, residence: &Residence) -> bool {
        self.track_call("has_residence");
        self.inner.has_residence(residence)
    }

    fn add_residence(&mut self, residence: Residence) -> RegistryResult<()> {
        self.track_call("add_residence");
        self.inner.add_residence(residence)
    }

    fn delete_residence(&mut self, target: &Residence) -> RegistryResult<()> {
        self.track_call("delete_residence");
        self.inner.delete_residence(target)
    }

    fn set_residence(&mut self, target: &Residence, edited: Residence) -> RegistryResult<()> {
        self.track_call("set_residence");
        self.inner.set_residence(target, edited)
    }

    fn filtered_residences(&self) -> Vec<&Residence> {
        self.track_call("filtered_residences");
        self.inner.filtered_residences()
    }

    fn update_filter(&mut self, filter: ResidenceFilter) {
        self.track_call("update_filter");
        self.inner.update_filter(filter)
    }

    fn clear(&mut self) {
        self.track_call("clear");
        self.inner.clear()
    }

    fn len(&self) -> usize {
        self.inner.len()
    }
}
