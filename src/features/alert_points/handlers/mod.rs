pub mod alert_point_handler;

pub use alert_point_handler::{__path_list_points, __path_save_point, list_points, save_point};
