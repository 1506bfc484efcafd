mod repository;

pub use repository::InMemoryClientRepository;
