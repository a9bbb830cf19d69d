pub mod alert_points;
pub mod map;
