mod alert_point_service;

pub use alert_point_service::AlertPointService;
