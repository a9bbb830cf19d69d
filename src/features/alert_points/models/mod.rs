mod alert_point;

pub use alert_point::{AlertPoint, NewAlertPoint};
