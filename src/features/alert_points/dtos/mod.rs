mod alert_point_dto;

pub use alert_point_dto::{AlertPointResponseDto, SaveAlertPointDto};
