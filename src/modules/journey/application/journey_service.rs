use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::journey::domain::{Journey, JourneyStepInput, JourneyUpdate};
use crate::modules::media::application::services::MediaJanitor;
use crate::shared::error::ContentError;
use crate::shared::singleton::{
    edit_existing, edit_or_bootstrap, store_error, Edited, SingletonRecord, SingletonStore,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait JourneyUseCase: Send + Sync {
    async fn get(&self) -> Result<SingletonRecord<Journey>, ContentError>;
    async fn update(&self, input: JourneyUpdate) -> Result<SingletonRecord<Journey>, ContentError>;
    async fn add_step(
        &self,
        input: JourneyStepInput,
    ) -> Result<SingletonRecord<Journey>, ContentError>;
    async fn update_step(
        &self,
        step_id: Uuid,
        input: JourneyStepInput,
    ) -> Result<SingletonRecord<Journey>, ContentError>;
    async fn delete_step(&self, step_id: Uuid) -> Result<SingletonRecord<Journey>, ContentError>;
}

pub struct JourneyService<S> {
    store: S,
    janitor: MediaJanitor,
}

impl<S: SingletonStore<Journey>> JourneyService<S> {
    pub fn new(store: S, janitor: MediaJanitor) -> Self {
        Self { store, janitor }
    }

    /// Deletes every image the saved document no longer references.
    async fn discard_orphans(&self, edited: &Edited<Journey>) {
        let before = &edited.previous.document;
        let after = &edited.saved.document;

        self.janitor
            .discard_dropped(&before.step_images(), &after.step_images())
            .await;
        self.janitor
            .discard_replaced(before.bike.image.as_ref(), after.bike.image.as_ref())
            .await;
    }
}

#[async_trait]
impl<S: SingletonStore<Journey>> JourneyUseCase for JourneyService<S> {
    async fn get(&self) -> Result<SingletonRecord<Journey>, ContentError> {
        self.store
            .find_or_bootstrap()
            .await
            .map_err(store_error::<Journey>)
    }

    async fn update(&self, input: JourneyUpdate) -> Result<SingletonRecord<Journey>, ContentError> {
        let edited = edit_or_bootstrap(&self.store, move |journey: &mut Journey| {
            input.apply(journey)
        })
        .await?;

        self.discard_orphans(&edited).await;
        Ok(edited.saved)
    }

    async fn add_step(
        &self,
        input: JourneyStepInput,
    ) -> Result<SingletonRecord<Journey>, ContentError> {
        let edited = edit_existing(&self.store, move |journey: &mut Journey| {
            let step = input.into_new_step(journey.next_order())?;
            journey.steps.push(step);
            journey.validate()
        })
        .await?;

        Ok(edited.saved)
    }

    async fn update_step(
        &self,
        step_id: Uuid,
        input: JourneyStepInput,
    ) -> Result<SingletonRecord<Journey>, ContentError> {
        let edited = edit_existing(&self.store, move |journey: &mut Journey| {
            input.merge_into(journey.step_mut(step_id)?);
            journey.validate()
        })
        .await?;

        self.discard_orphans(&edited).await;
        Ok(edited.saved)
    }

    async fn delete_step(&self, step_id: Uuid) -> Result<SingletonRecord<Journey>, ContentError> {
        let edited = edit_existing(&self.store, move |journey: &mut Journey| {
            journey.step_mut(step_id)?;
            journey.steps.retain(|s| s.id != step_id);
            Ok(())
        })
        .await?;

        self.discard_orphans(&edited).await;
        Ok(edited.saved)
    }
}
