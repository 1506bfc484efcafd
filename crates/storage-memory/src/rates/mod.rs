mod repository;

pub use repository::InMemoryRateRepository;
