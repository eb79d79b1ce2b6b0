pub mod budget_search_service;
pub mod combination_service;
pub mod distance_service;
pub mod duration_parser;
pub mod package_catalog;
pub mod preview_service;
pub mod ranking_service;
pub mod sample_data_service;
