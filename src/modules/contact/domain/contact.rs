use serde::{Deserialize, Serialize};

use super::entries::{
    replace_entries, ContactEmail, ContactEmailInput, ContactPhone, ContactPhoneInput,
    SocialLink, SocialLinkInput,
};
use crate::shared::error::ContentError;
use crate::shared::patch::AbsentPolicy;
use crate::shared::singleton::SingletonDocument;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Contact {
    pub title: String,
    pub subtitle: String,
    pub location: String,
    pub emails: Vec<ContactEmail>,
    pub phone_numbers: Vec<ContactPhone>,
    pub social_links: Vec<SocialLink>,
    pub form_enabled: bool,
}

impl Default for Contact {
    fn default() -> Self {
        Self {
            title: "Get In Touch".to_string(),
            subtitle: "Have a project in mind? Let's talk.".to_string(),
            location: String::new(),
            emails: Vec::new(),
            phone_numbers: Vec::new(),
            social_links: Vec::new(),
            form_enabled: true,
        }
    }
}

impl Contact {
    /// Where form submissions go: the primary address, else the first one.
    pub fn recipient(&self) -> Option<&ContactEmail> {
        self.emails
            .iter()
            .find(|e| e.is_primary)
            .or_else(|| self.emails.first())
    }
}

/// Clears every `true` flag after the first one.
fn keep_first_flag<T>(items: &mut [T], flag: impl Fn(&mut T) -> &mut bool) {
    let mut seen = false;
    for item in items.iter_mut() {
        let f = flag(item);
        if *f {
            if seen {
                *f = false;
            }
            seen = true;
        }
    }
}

impl SingletonDocument for Contact {
    const KIND: &'static str = "contact";
    const LABEL: &'static str = "Contact";

    fn bootstrap() -> Self {
        Contact::default()
    }

    fn before_save(&mut self) {
        keep_first_flag(&mut self.emails, |e| &mut e.is_primary);
        keep_first_flag(&mut self.phone_numbers, |p| &mut p.is_primary);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactUpdate {
    pub title: Option<String>,
    pub subtitle: Option<String>,
    pub location: Option<String>,
    pub emails: Option<Vec<ContactEmailInput>>,
    pub phone_numbers: Option<Vec<ContactPhoneInput>>,
    pub social_links: Option<Vec<SocialLinkInput>>,
    pub form_enabled: Option<bool>,
}

impl ContactUpdate {
    pub fn apply(self, contact: &mut Contact) -> Result<(), ContentError> {
        let keep = AbsentPolicy::Keep;
        contact.title = keep.resolve(self.title, std::mem::take(&mut contact.title));
        contact.subtitle = keep.resolve(self.subtitle, std::mem::take(&mut contact.subtitle));
        contact.location = keep.resolve(self.location, std::mem::take(&mut contact.location));
        contact.form_enabled = keep.resolve(self.form_enabled, contact.form_enabled);

        if let Some(emails) = self.emails {
            contact.emails = replace_entries(std::mem::take(&mut contact.emails), emails)?;
        }
        if let Some(phones) = self.phone_numbers {
            contact.phone_numbers =
                replace_entries(std::mem::take(&mut contact.phone_numbers), phones)?;
        }
        if let Some(links) = self.social_links {
            contact.social_links =
                replace_entries(std::mem::take(&mut contact.social_links), links)?;
        }

        Ok(())
    }
}
