pub mod routes;

pub use routes::{
    create_blog_handler, delete_blog_handler, get_blog_by_id_handler, get_blog_by_slug_handler,
    list_blogs_handler, update_blog_handler,
};
