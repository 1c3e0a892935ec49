use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::position::distribute_positions;
use crate::modules::media::domain::MediaRef;
use crate::shared::error::ContentError;
use crate::shared::patch::{AbsentPolicy, PatchField};
use crate::shared::singleton::SingletonDocument;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct JourneyStep {
    pub id: Uuid,
    pub order: i32,
    pub year: String,
    pub title: String,
    pub description: String,
    pub icon: String,
    pub image: Option<MediaRef>,
    pub percentage: Option<f64>,
    pub position: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Bike {
    pub speed: f64,
    pub icon: String,
    pub image: Option<MediaRef>,
}

impl Default for Bike {
    fn default() -> Self {
        Self {
            speed: 1.0,
            icon: "FaBicycle".to_string(),
            image: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Journey {
    pub title: String,
    pub subtitle: String,
    pub steps: Vec<JourneyStep>,
    pub bike: Bike,
    pub auto_position: bool,
}

impl Default for Journey {
    fn default() -> Self {
        let seed = [
            ("2018", "Started Coding", "Wrote my first lines of code.", "FaCode"),
            ("2020", "First Job", "Joined a team and shipped real products.", "FaBriefcase"),
            ("2023", "Today", "Building things people use.", "FaRocket"),
        ];

        let steps = seed
            .iter()
            .enumerate()
            .map(|(i, (year, title, description, icon))| JourneyStep {
                id: Uuid::new_v4(),
                order: i as i32,
                year: year.to_string(),
                title: title.to_string(),
                description: description.to_string(),
                icon: icon.to_string(),
                image: None,
                percentage: None,
                position: 0.0,
            })
            .collect();

        Self {
            title: "My Journey".to_string(),
            subtitle: "The road so far".to_string(),
            steps,
            bike: Bike::default(),
            auto_position: true,
        }
    }
}

impl Journey {
    pub fn step_mut(&mut self, id: Uuid) -> Result<&mut JourneyStep, ContentError> {
        self.steps
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| ContentError::not_found("Journey step"))
    }

    pub fn next_order(&self) -> i32 {
        self.steps.iter().map(|s| s.order).max().map_or(0, |m| m + 1)
    }

    pub fn step_images(&self) -> Vec<MediaRef> {
        self.steps.iter().filter_map(|s| s.image.clone()).collect()
    }

    pub fn validate(&self) -> Result<(), ContentError> {
        for step in &self.steps {
            if let Some(p) = step.percentage {
                if !(0.0..=100.0).contains(&p) {
                    return Err(ContentError::validation(
                        "Step percentage must be between 0 and 100",
                    ));
                }
            }
            if !self.auto_position && !(0.0..=100.0).contains(&step.position) {
                return Err(ContentError::validation(
                    "Step position must be between 0 and 100",
                ));
            }
        }
        Ok(())
    }
}

impl SingletonDocument for Journey {
    const KIND: &'static str = "journey";
    const LABEL: &'static str = "Journey";

    fn bootstrap() -> Self {
        Journey::default()
    }

    fn before_save(&mut self) {
        if self.auto_position && !self.steps.is_empty() {
            distribute_positions(&mut self.steps);
        }
    }
}

/// A step as sent by the admin UI. `id` is only read by whole-document
/// updates, where it matches the input to an existing step.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyStepInput {
    pub id: Option<Uuid>,
    pub order: Option<i32>,
    pub year: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub icon: Option<String>,
    #[serde(default)]
    pub image: PatchField<MediaRef>,
    #[serde(default)]
    pub percentage: PatchField<f64>,
    pub position: Option<f64>,
}

impl JourneyStepInput {
    pub fn merge_into(self, step: &mut JourneyStep) {
        let keep = AbsentPolicy::Keep;
        step.order = keep.resolve(self.order, step.order);
        step.year = keep.resolve(self.year, std::mem::take(&mut step.year));
        step.title = keep.resolve(self.title, std::mem::take(&mut step.title));
        step.description = keep.resolve(self.description, std::mem::take(&mut step.description));
        step.icon = keep.resolve(self.icon, std::mem::take(&mut step.icon));
        step.image = self.image.apply_to(step.image.take());
        step.percentage = self.percentage.apply_to(step.percentage.take());
        step.position = keep.resolve(self.position, step.position);
    }

    pub fn into_new_step(self, default_order: i32) -> Result<JourneyStep, ContentError> {
        let has = |v: &Option<String>| v.as_deref().is_some_and(|s| !s.trim().is_empty());
        if !has(&self.year) || !has(&self.title) {
            return Err(ContentError::validation("Step year and title are required"));
        }

        let mut step = JourneyStep {
            id: Uuid::new_v4(),
            order: default_order,
            ..JourneyStep::default()
        };
        self.merge_into(&mut step);
        Ok(step)
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BikeInput {
    pub speed: Option<f64>,
    pub icon: Option<String>,
    #[serde(default)]
    pub image: PatchField<MediaRef>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JourneyUpdate {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub steps: Option<Vec<JourneyStepInput>>,
    pub bike: Option<BikeInput>,
    pub auto_position: Option<bool>,
}

impl JourneyUpdate {
    /// Every field keeps its stored value when omitted. A submitted `steps`
    /// list replaces the stored one; entries carrying a known id are merged
    /// into that step.
    pub fn apply(self, journey: &mut Journey) -> Result<(), ContentError> {
        let keep = AbsentPolicy::Keep;
        journey.title = keep.resolve(self.title, std::mem::take(&mut journey.title));
        journey.subtitle = keep.resolve(self.subtitle, std::mem::take(&mut journey.subtitle));
        journey.auto_position = keep.resolve(self.auto_position, journey.auto_position);

        if let Some(bike) = self.bike {
            journey.bike.speed = keep.resolve(bike.speed, journey.bike.speed);
            journey.bike.icon = keep.resolve(bike.icon, std::mem::take(&mut journey.bike.icon));
            journey.bike.image = bike.image.apply_to(journey.bike.image.take());
        }

        if let Some(inputs) = self.steps {
            let mut previous = std::mem::take(&mut journey.steps);
            let mut steps = Vec::with_capacity(inputs.len());

            for (index, input) in inputs.into_iter().enumerate() {
                let existing = input
                    .id
                    .and_then(|id| previous.iter().position(|s| s.id == id))
                    .map(|pos| previous.remove(pos));

                let step = match existing {
                    Some(mut step) => {
                        input.merge_into(&mut step);
                        step
                    }
                    None => input.into_new_step(index as i32)?,
                };
                steps.push(step);
            }
            journey.steps = steps;
        }

        journey.validate()
    }
}
