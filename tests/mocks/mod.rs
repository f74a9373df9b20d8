mod mock_residence_repository;

pub use mock_residence_repository::MockResidenceRepository;
