mod ordered_collection;
mod position_allocator;
