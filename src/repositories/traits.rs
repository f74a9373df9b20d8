use crate::error::RegistryResult;
use crate::models::Residence;

/// Which residences the filtered view shows.
///
/// The filter is explicit state on the repository; the view is recomputed
/// from it on every read.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ResidenceFilter {
    /// Every stored residence
    #[default]
    All,

    /// Residences whose name contains any of the keywords as a whole word,
    /// ignoring case
    NameContainsKeywords(Vec<String>),
}

impl ResidenceFilter {
    /// Returns true if `residence` passes this filter.
    pub fn matches(&self, residence: &Residence) -> bool {
        match self {
            Self::All => true,
            Self::NameContainsKeywords(keywords) => keywords
                .iter()
                .any(|keyword| residence.name.contains_word_ignore_case(keyword)),
        }
    }
}

/// Repository for managing residences.
///
/// Provides the mutation API commands execute against, plus the filtered
/// view that one-based indices on the command line refer to.
pub trait ResidenceRepository {
    /// Returns true if a residence with the same identity is stored.
    fn has_residence(&self, residence: &Residence) -> bool;

    /// Store a new residence.
    ///
    /// Fails with `DuplicateResidence` if its identity is already present.
    fn add_residence(&mut self, residence: Residence) -> RegistryResult<()>;

    /// Remove the stored residence equal to `target`.
    fn delete_residence(&mut self, target: &Residence) -> RegistryResult<()>;

    /// Replace the stored residence equal to `target` with `edited`.
    ///
    /// Fails with `DuplicateResidence` if `edited` has the identity of a
    /// different stored residence.
    fn set_residence(&mut self, target: &Residence, edited: Residence) -> RegistryResult<()>;

    /// Residences passing the current filter, in storage order.
    fn filtered_residences(&self) -> Vec<&Residence>;

    /// Replace the current filter.
    fn update_filter(&mut self, filter: ResidenceFilter);

    /// Remove every residence.
    fn clear(&mut self);

    /// Total number of stored residences, ignoring the filter.
    fn len(&self) -> usize;

    /// Returns true if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
