use async_trait::async_trait;

use crate::modules::theme::domain::{Theme, ThemeUpdate};
use crate::shared::error::ContentError;
use crate::shared::singleton::{edit_or_bootstrap, store_error, SingletonRecord, SingletonStore};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ThemeUseCase: Send + Sync {
    async fn get(&self) -> Result<SingletonRecord<Theme>, ContentError>;
    async fn update(&self, input: ThemeUpdate) -> Result<SingletonRecord<Theme>, ContentError>;
    /// Restores every scalar to its default, creating the document if needed.
    async fn reset(&self) -> Result<SingletonRecord<Theme>, ContentError>;
}

pub struct ThemeService<S> {
    store: S,
}

impl<S: SingletonStore<Theme>> ThemeService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: SingletonStore<Theme>> ThemeUseCase for ThemeService<S> {
    async fn get(&self) -> Result<SingletonRecord<Theme>, ContentError> {
        self.store
            .find_or_bootstrap()
            .await
            .map_err(store_error::<Theme>)
    }

    async fn update(&self, input: ThemeUpdate) -> Result<SingletonRecord<Theme>, ContentError> {
        let edited = edit_or_bootstrap(&self.store, move |theme: &mut Theme| {
            input.apply(theme);
            Ok(())
        })
        .await?;
        Ok(edited.saved)
    }

    async fn reset(&self) -> Result<SingletonRecord<Theme>, ContentError> {
        let edited = edit_or_bootstrap(&self.store, |theme: &mut Theme| {
            *theme = Theme::default();
            Ok(())
        })
        .await?;
        Ok(edited.saved)
    }
}
