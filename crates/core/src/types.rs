/// Internal database identifier used across all entities.
pub type DbId = i64;
