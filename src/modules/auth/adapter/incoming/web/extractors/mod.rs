pub mod auth;

pub use auth::TokenProviderData;
