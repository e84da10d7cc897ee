pub mod collection;
pub mod fixtures;
pub mod repository;
