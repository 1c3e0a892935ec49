pub mod blog;
pub mod listing;
pub mod slug;

pub use blog::{Blog, BlogInput, BlogPatch};
pub use listing::{BlogFilter, BlogListQuery, BlogPage, PageRequest};
