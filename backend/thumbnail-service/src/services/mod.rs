/// Service layer for thumbnail generation
pub mod thumbnail;
