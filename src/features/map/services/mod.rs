mod map_page_service;

pub use map_page_service::MapPageService;
