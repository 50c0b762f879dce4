pub mod api_dto;
pub mod search_dto;

pub use api_dto::*;
pub use search_dto::*;
