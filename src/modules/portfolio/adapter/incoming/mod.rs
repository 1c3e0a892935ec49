pub mod routes;

pub use routes::get_portfolio_handler;
