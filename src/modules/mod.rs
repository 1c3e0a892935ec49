pub mod auth;
pub mod blog;
pub mod certification;
pub mod contact;
pub mod email;
pub mod experience;
pub mod hero;
pub mod journey;
pub mod media;
pub mod portfolio;
pub mod project;
pub mod service_offering;
pub mod skill;
pub mod theme;
pub mod timeline;
