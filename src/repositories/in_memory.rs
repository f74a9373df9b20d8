use super::traits::{ResidenceFilter, ResidenceRepository};
use crate::error::{RegistryError, RegistryResult};
use crate::models::Residence;

/// Process-local residence store.
///
/// Owns the residences in insertion order together with the active filter.
#[derive(Debug, Default)]
pub struct InMemoryResidenceRepository {
    residences: Vec<Residence>,
    filter: ResidenceFilter,
}

impl InMemoryResidenceRepository {
    /// Create an empty repository showing all residences.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a repository holding `residences`.
    ///
    /// Later entries whose identity repeats an earlier one are dropped.
    pub fn with_residences(residences: impl IntoIterator<Item = Residence>) -> Self {
        let mut repo = Self::new();
        for residence in residences {
            if let Err(e) = repo.add_residence(residence) {
                tracing::warn!("Skipping residence while seeding repository: {}", e);
            }
        }
        repo
    }

    /// Every stored residence, ignoring the filter.
    pub fn residences(&self) -> &[Residence] {
        &self.residences
    }

    /// The active filter.
    pub fn filter(&self) -> &ResidenceFilter {
        &self.filter
    }

    fn position_of(&self, target: &Residence) -> RegistryResult<usize> {
        self.residences
            .iter()
            .position(|r| r == target)
            .ok_or(RegistryError::ResidenceNotFound)
    }
}

impl ResidenceRepository for InMemoryResidenceRepository {
    fn has_residence(&self, residence: &Residence) -> bool {
        self.residences.iter().any(|r| r.is_same_residence(residence))
    }

    fn add_residence(&mut self, residence: Residence) -> RegistryResult<()> {
        if self.has_residence(&residence) {
            return Err(RegistryError::DuplicateResidence);
        }
        self.residences.push(residence);
        Ok(())
    }

    fn delete_residence(&mut self, target: &Residence) -> RegistryResult<()> {
        let index = self.position_of(target)?;
        self.residences.remove(index);
        Ok(())
    }

    fn set_residence(&mut self, target: &Residence, edited: Residence) -> RegistryResult<()> {
        let index = self.position_of(target)?;

        let collides = self
            .residences
            .iter()
            .enumerate()
            .any(|(i, r)| i != index && r.is_same_residence(&edited));
        if collides {
            return Err(RegistryError::DuplicateResidence);
        }

        self.residences[index] = edited;
        Ok(())
    }

    fn filtered_residences(&self) -> Vec<&Residence> {
        self.residences
            .iter()
            .filter(|r| self.filter.matches(r))
            .collect()
    }

    fn update_filter(&mut self, filter: ResidenceFilter) {
        self.filter = filter;
    }

    fn clear(&mut self) {
        self.residences.clear();
    }

    fn len(&self) -> usize {
        self.residences.len()
    }
}
