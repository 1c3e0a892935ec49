pub mod change_password;
pub mod check_session;
pub mod verify_admin;

pub use change_password::{change_password_handler, ChangePasswordRequest, ChangePasswordResponse};
pub use check_session::{check_session_handler, SessionResponse};
pub use verify_admin::{verify_admin_handler, VerifyAdminRequest, VerifyAdminResponse};
