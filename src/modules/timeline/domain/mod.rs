pub mod timeline;

pub use timeline::{Timeline, TimelineItem, TimelineItemInput, TimelineUpdate};
