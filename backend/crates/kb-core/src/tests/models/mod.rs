mod position;
mod priority;
mod tag_mode;
mod task_dto;
