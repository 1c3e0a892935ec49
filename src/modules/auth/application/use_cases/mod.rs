pub mod change_password;
pub mod verify_admin;
