mod repository;

pub use repository::InMemorySessionStore;
