use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::contact::domain::entries::{add_entry, remove_entry, update_entry};
use crate::modules::contact::domain::{
    Contact, ContactEmail, ContactEntryInput, ContactList, ContactPhone, ContactUpdate,
    SocialLink,
};
use crate::shared::error::ContentError;
use crate::shared::singleton::{
    edit_existing, edit_or_bootstrap, store_error, SingletonRecord, SingletonStore,
};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ContactUseCase: Send + Sync {
    async fn get(&self) -> Result<SingletonRecord<Contact>, ContentError>;
    async fn update(&self, input: ContactUpdate) -> Result<SingletonRecord<Contact>, ContentError>;
    async fn add_entry(
        &self,
        input: ContactEntryInput,
    ) -> Result<SingletonRecord<Contact>, ContentError>;
    async fn update_entry(
        &self,
        entry_id: Uuid,
        input: ContactEntryInput,
    ) -> Result<SingletonRecord<Contact>, ContentError>;
    async fn delete_entry(
        &self,
        list: ContactList,
        entry_id: Uuid,
    ) -> Result<SingletonRecord<Contact>, ContentError>;
}

pub struct ContactService<S> {
    store: S,
}

impl<S: SingletonStore<Contact>> ContactService<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }
}

#[async_trait]
impl<S: SingletonStore<Contact>> ContactUseCase for ContactService<S> {
    async fn get(&self) -> Result<SingletonRecord<Contact>, ContentError> {
        self.store
            .find_or_bootstrap()
            .await
            .map_err(store_error::<Contact>)
    }

    async fn update(&self, input: ContactUpdate) -> Result<SingletonRecord<Contact>, ContentError> {
        let edited = edit_or_bootstrap(&self.store, move |c: &mut Contact| input.apply(c)).await?;
        Ok(edited.saved)
    }

    async fn add_entry(
        &self,
        input: ContactEntryInput,
    ) -> Result<SingletonRecord<Contact>, ContentError> {
        let edited = edit_existing(&self.store, move |c: &mut Contact| match input {
            ContactEntryInput::Email(i) => add_entry(&mut c.emails, i, |e: &ContactEmail| e.order),
            ContactEntryInput::Phone(i) => {
                add_entry(&mut c.phone_numbers, i, |p: &ContactPhone| p.order)
            }
            ContactEntryInput::SocialLink(i) => {
                add_entry(&mut c.social_links, i, |l: &SocialLink| l.order)
            }
        })
        .await?;
        Ok(edited.saved)
    }

    async fn update_entry(
        &self,
        entry_id: Uuid,
        input: ContactEntryInput,
    ) -> Result<SingletonRecord<Contact>, ContentError> {
        let label = input.list().label();
        let edited = edit_existing(&self.store, move |c: &mut Contact| match input {
            ContactEntryInput::Email(i) => update_entry(&mut c.emails, entry_id, i, label),
            ContactEntryInput::Phone(i) => update_entry(&mut c.phone_numbers, entry_id, i, label),
            ContactEntryInput::SocialLink(i) => {
                update_entry(&mut c.social_links, entry_id, i, label)
            }
        })
        .await?;
        Ok(edited.saved)
    }

    async fn delete_entry(
        &self,
        list: ContactList,
        entry_id: Uuid,
    ) -> Result<SingletonRecord<Contact>, ContentError> {
        let label = list.label();
        let edited = edit_existing(&self.store, move |c: &mut Contact| match list {
            ContactList::Emails => remove_entry(&mut c.emails, entry_id, label),
            ContactList::Phones => remove_entry(&mut c.phone_numbers, entry_id, label),
            ContactList::SocialLinks => remove_entry(&mut c.social_links, entry_id, label),
        })
        .await?;
        Ok(edited.saved)
    }
}
