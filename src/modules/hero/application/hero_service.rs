use async_trait::async_trait;

use crate::modules::hero::domain::{Hero, HeroUpdate};
use crate::modules::media::application::services::MediaJanitor;
use crate::shared::error::ContentError;
use crate::shared::singleton::{
    edit_or_bootstrap, store_error, Edited, SingletonRecord, SingletonStore,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait HeroUseCase: Send + Sync {
    async fn get(&self) -> Result<SingletonRecord<Hero>, ContentError>;
    async fn update(&self, input: HeroUpdate) -> Result<SingletonRecord<Hero>, ContentError>;
}

pub struct HeroService<S> {
    store: S,
    janitor: MediaJanitor,
}

impl<S: SingletonStore<Hero>> HeroService<S> {
    pub fn new(store: S, janitor: MediaJanitor) -> Self {
        Self { store, janitor }
    }
}

#[async_trait]
impl<S: SingletonStore<Hero>> HeroUseCase for HeroService<S> {
    async fn get(&self) -> Result<SingletonRecord<Hero>, ContentError> {
        self.store
            .find_or_bootstrap()
            .await
            .map_err(store_error::<Hero>)
    }

    async fn update(&self, input: HeroUpdate) -> Result<SingletonRecord<Hero>, ContentError> {
        let Edited { previous, saved } = edit_or_bootstrap(&self.store, move |hero: &mut Hero| {
            *hero = input.apply(std::mem::take(hero))?;
            Ok(())
        })
        .await?;

        let before = &previous.document;
        let after = &saved.document;
        self.janitor
            .discard_replaced(before.profile_image.as_ref(), after.profile_image.as_ref())
            .await;
        self.janitor
            .discard_replaced(
                before.background_image.as_ref(),
                after.background_image.as_ref(),
            )
            .await;

        Ok(saved)
    }
}
