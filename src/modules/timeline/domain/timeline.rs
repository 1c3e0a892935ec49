use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::ContentError;
use crate::shared::patch::AbsentPolicy;
use crate::shared::singleton::SingletonDocument;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct TimelineItem {
    pub id: Uuid,
    pub year: String,
    pub title: String,
    pub subtitle: String,
    pub description: String,
    pub icon: String,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Timeline {
    pub title: String,
    pub items: Vec<TimelineItem>,
}

impl Default for Timeline {
    fn default() -> Self {
        Self {
            title: "Timeline".to_string(),
            items: vec![TimelineItem {
                id: Uuid::new_v4(),
                year: "2020".to_string(),
                title: "Started my career".to_string(),
                subtitle: "Software Engineer".to_string(),
                description: "The beginning of the story.".to_string(),
                icon: "FaFlag".to_string(),
                order: 0,
            }],
        }
    }
}

impl Timeline {
    pub fn item_mut(&mut self, id: Uuid) -> Result<&mut TimelineItem, ContentError> {
        self.items
            .iter_mut()
            .find(|i| i.id == id)
            .ok_or_else(|| ContentError::not_found("Timeline item"))
    }
}

impl SingletonDocument for Timeline {
    const KIND: &'static str = "timeline";
    const LABEL: &'static str = "Timeline";

    fn bootstrap() -> Self {
        Timeline::default()
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineItemInput {
    pub id: Option<Uuid>,
    pub year: Option<String>,
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i32>,
}

impl TimelineItemInput {
    pub fn merge_into(self, item: &mut TimelineItem) {
        let keep = AbsentPolicy::Keep;
        item.year = keep.resolve(self.year, std::mem::take(&mut item.year));
        item.title = keep.resolve(self.title, std::mem::take(&mut item.title));
        item.subtitle = keep.resolve(self.subtitle, std::mem::take(&mut item.subtitle));
        item.description = keep.resolve(self.description, std::mem::take(&mut item.description));
        item.icon = keep.resolve(self.icon, std::mem::take(&mut item.icon));
        item.order = keep.resolve(self.order, item.order);
    }

    /// New items need a year, a title and an explicit order.
    pub fn into_new_item(self) -> Result<TimelineItem, ContentError> {
        let blank = |v: &Option<String>| v.as_deref().map_or(true, |s| s.trim().is_empty());
        if blank(&self.year) || blank(&self.title) {
            return Err(ContentError::validation(
                "Timeline item year and title are required",
            ));
        }
        let Some(order) = self.order else {
            return Err(ContentError::validation("Timeline item order is required"));
        };

        let mut item = TimelineItem {
            id: Uuid::new_v4(),
            order,
            ..TimelineItem::default()
        };
        self.merge_into(&mut item);
        Ok(item)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineUpdate {
    pub title: Option<String>,
    pub items: Option<Vec<TimelineItemInput>>,
}

impl TimelineUpdate {
    pub fn apply(self, timeline: &mut Timeline) -> Result<(), ContentError> {
        timeline.title = AbsentPolicy::Keep.resolve(self.title, std::mem::take(&mut timeline.title));

        if let Some(inputs) = self.items {
            let mut previous = std::mem::take(&mut timeline.items);
            let mut items = Vec::with_capacity(inputs.len());

            for input in inputs {
                let existing = input
                    .id
                    .and_then(|id| previous.iter().position(|i| i.id == id))
                    .map(|pos| previous.remove(pos));

                items.push(match existing {
                    Some(mut item) => {
                        input.merge_into(&mut item);
                        item
                    }
                    None => input.into_new_item()?,
                });
            }
            timeline.items = items;
        }

        Ok(())
    }
}
