pub mod board_dto;
pub mod board_view_response;
pub mod boards;
