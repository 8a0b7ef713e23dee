//! SeaORM entities for the query backend tables

pub mod articles;
pub mod settings;
