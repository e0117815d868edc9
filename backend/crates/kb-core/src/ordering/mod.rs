pub mod ordered_collection;
pub mod position_allocator;
pub mod positioned;
