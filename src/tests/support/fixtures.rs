use chrono::Utc;
use uuid::Uuid;

use crate::modules::media::domain::MediaRef;
use crate::shared::singleton::{SingletonDocument, SingletonRecord};

pub fn record<D: SingletonDocument>(document: D) -> SingletonRecord<D> {
    let now = Utc::now();
    SingletonRecord {
        id: Uuid::new_v4(),
        document,
        version: 1,
        created_at: now,
        updated_at: now,
    }
}

pub fn media(public_id: &str) -> MediaRef {
    MediaRef::new(
        format!("https://res.cloudinary.com/demo/{public_id}.png"),
        public_id,
    )
}
