pub mod engine;
pub mod kv;

pub use engine::InMemoryStore;
pub use kv::KeyValueStore;
