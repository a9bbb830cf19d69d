mod alert_point_repository;

pub use alert_point_repository::{AlertPointRepository, SqliteAlertPointRepository};
