pub mod theme;

pub use theme::{Theme, ThemeUpdate};
