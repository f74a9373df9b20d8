mod in_memory;
mod traits;

pub use in_memory::InMemoryResidenceRepository;
pub use traits::{ResidenceFilter, ResidenceRepository};
