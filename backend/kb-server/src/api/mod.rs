pub mod boards;
pub mod columns;
pub mod delete_response;
pub mod error;
pub mod input;
pub mod ordering;
pub mod projects;
pub mod renumber_request;
pub mod tags;
pub mod tasks;
