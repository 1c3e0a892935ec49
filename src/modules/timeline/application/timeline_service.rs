use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::timeline::domain::{Timeline, TimelineItemInput, TimelineUpdate};
use crate::shared::error::ContentError;
use crate::shared::singleton::{
    edit_existing, edit_or_bootstrap, store_error, SingletonRecord, SingletonStore,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TimelineUseCase: Send + Sync {
    async fn get(&self) -> Result<SingletonRecord<Timeline>, ContentError>;
    async fn update(&self, input: TimelineUpdate)
        -> Result<SingletonRecord<Timeline>, ContentError>;
    async fn add_item(
        &self,
        input: TimelineItemInput,
    ) -> Result<SingletonRecord<Timeline>, ContentError>;
    async fn update_item(
        &self,
        item_id: Uuid,
        input: TimelineItemInput,
    ) -> Result<SingletonRecord<Timeline>, ContentError>;
    async fn delete_item(&self, item_id: Uuid) -> Result<SingletonRecord<Timeline>, ContentError>;
}

pub struct TimelineService<S> {
    store: S,
}

impl<S: SingletonStore<Timeline>> TimelineService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: SingletonStore<Timeline>> TimelineUseCase for TimelineService<S> {
    async fn get(&self) -> Result<SingletonRecord<Timeline>, ContentError> {
        self.store
            .find_or_bootstrap()
            .await
            .map_err(store_error::<Timeline>)
    }

    async fn update(
        &self,
        input: TimelineUpdate,
    ) -> Result<SingletonRecord<Timeline>, ContentError> {
        let edited = edit_or_bootstrap(&self.store, move |t: &mut Timeline| input.apply(t)).await?;
        Ok(edited.saved)
    }

    async fn add_item(
        &self,
        input: TimelineItemInput,
    ) -> Result<SingletonRecord<Timeline>, ContentError> {
        let edited = edit_existing(&self.store, move |t: &mut Timeline| {
            t.items.push(input.into_new_item()?);
            Ok(())
        })
        .await?;
        Ok(edited.saved)
    }

    async fn update_item(
        &self,
        item_id: Uuid,
        input: TimelineItemInput,
    ) -> Result<SingletonRecord<Timeline>, ContentError> {
        let edited = edit_existing(&self.store, move |t: &mut Timeline| {
            input.merge_into(t.item_mut(item_id)?);
            Ok(())
        })
        .await?;
        Ok(edited.saved)
    }

    async fn delete_item(&self, item_id: Uuid) -> Result<SingletonRecord<Timeline>, ContentError> {
        let edited = edit_existing(&self.store, move |t: &mut Timeline| {
            t.item_mut(item_id)?;
            t.items.retain(|i| i.id != item_id);
            Ok(())
        })
        .await?;
        Ok(edited.saved)
    }
}
