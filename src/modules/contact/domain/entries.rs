use email_address::EmailAddress;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::shared::error::ContentError;
use crate::shared::patch::AbsentPolicy;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactEmail {
    pub id: Uuid,
    pub label: String,
    pub address: String,
    pub is_primary: bool,
    pub order: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ContactPhone {
    pub id: Uuid,
    pub label: String,
    pub number: String,
    pub is_primary: bool,
    pub show_whats_app: bool,
    pub order: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    Github,
    Linkedin,
    Twitter,
    Facebook,
    Instagram,
    Youtube,
    Dribbble,
    Behance,
    Medium,
    #[default]
    Other,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct SocialLink {
    pub id: Uuid,
    pub platform: SocialPlatform,
    pub url: String,
    pub icon: String,
    pub order: i32,
}

/// Which contact list a sub-item route addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactList {
    Emails,
    Phones,
    SocialLinks,
}

impl ContactList {
    pub fn label(self) -> &'static str {
        match self {
            ContactList::Emails => "Email",
            ContactList::Phones => "Phone number",
            ContactList::SocialLinks => "Social link",
        }
    }
}

/// A list entry keyed by id.
pub trait Entry: Clone {
    fn id(&self) -> Uuid;
    /// Empty entry with a fresh id.
    fn blank(order: i32) -> Self;
    /// Field rules every stored entry satisfies.
    fn validate(&self) -> Result<(), ContentError>;
}

/// Admin input for one list entry.
pub trait EntryInput<T: Entry>: Sized {
    fn id(&self) -> Option<Uuid>;
    fn apply(self, entry: &mut T);

    /// Merges into `entry`; leaves it untouched when the result is invalid.
    fn merge_into(self, entry: &mut T) -> Result<(), ContentError> {
        let mut next = entry.clone();
        self.apply(&mut next);
        next.validate()?;
        *entry = next;
        Ok(())
    }

    fn into_new(self, order: i32) -> Result<T, ContentError> {
        let mut entry = T::blank(order);
        self.merge_into(&mut entry)?;
        Ok(entry)
    }
}

impl Entry for ContactEmail {
    fn id(&self) -> Uuid {
        self.id
    }

    fn blank(order: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            order,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), ContentError> {
        if EmailAddress::is_valid(self.address.trim()) {
            Ok(())
        } else {
            Err(ContentError::validation("Please provide a valid email address"))
        }
    }
}

impl Entry for ContactPhone {
    fn id(&self) -> Uuid {
        self.id
    }

    fn blank(order: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            order,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.number.trim().is_empty() {
            Err(ContentError::validation("Phone number is required"))
        } else {
            Ok(())
        }
    }
}

impl Entry for SocialLink {
    fn id(&self) -> Uuid {
        self.id
    }

    fn blank(order: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            order,
            ..Self::default()
        }
    }

    fn validate(&self) -> Result<(), ContentError> {
        if self.url.trim().is_empty() {
            Err(ContentError::validation("Platform and url are required"))
        } else {
            Ok(())
        }
    }
}

fn next_order<T>(entries: &[T], order: impl Fn(&T) -> i32) -> i32 {
    entries.iter().map(order).max().map_or(0, |m| m + 1)
}

fn find_mut<'a, T: Entry>(
    entries: &'a mut [T],
    id: Uuid,
    label: &str,
) -> Result<&'a mut T, ContentError> {
    entries
        .iter_mut()
        .find(|e| e.id() == id)
        .ok_or_else(|| ContentError::not_found(label))
}

/// Appends a new entry built from `input`.
pub fn add_entry<T, I>(
    entries: &mut Vec<T>,
    input: I,
    order: impl Fn(&T) -> i32,
) -> Result<(), ContentError>
where
    T: Entry,
    I: EntryInput<T>,
{
    let entry = input.into_new(next_order(entries, order))?;
    entries.push(entry);
    Ok(())
}

pub fn update_entry<T, I>(
    entries: &mut [T],
    id: Uuid,
    input: I,
    label: &str,
) -> Result<(), ContentError>
where
    T: Entry,
    I: EntryInput<T>,
{
    input.merge_into(find_mut(entries, id, label)?)
}

pub fn remove_entry<T: Entry>(entries: &mut Vec<T>, id: Uuid, label: &str) -> Result<(), ContentError> {
    find_mut(entries, id, label)?;
    entries.retain(|e| e.id() != id);
    Ok(())
}

/// Replaces a whole list. Inputs carrying a stored id are merged into that
/// entry; the rest become new entries.
pub fn replace_entries<T, I>(previous: Vec<T>, inputs: Vec<I>) -> Result<Vec<T>, ContentError>
where
    T: Entry,
    I: EntryInput<T>,
{
    let mut previous = previous;
    let mut entries = Vec::with_capacity(inputs.len());

    for (index, input) in inputs.into_iter().enumerate() {
        let existing = input
            .id()
            .and_then(|id| previous.iter().position(|e| e.id() == id))
            .map(|pos| previous.remove(pos));

        entries.push(match existing {
            Some(mut entry) => {
                input.merge_into(&mut entry)?;
                entry
            }
            None => input.into_new(index as i32)?,
        });
    }

    Ok(entries)
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactEmailInput {
    pub id: Option<Uuid>,
    pub label: Option<String>,
    pub address: Option<String>,
    pub is_primary: Option<bool>,
    pub order: Option<i32>,
}

impl EntryInput<ContactEmail> for ContactEmailInput {
    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn apply(self, entry: &mut ContactEmail) {
        let keep = AbsentPolicy::Keep;
        entry.label = keep.resolve(self.label, std::mem::take(&mut entry.label));
        entry.address = keep.resolve(
            self.address.map(|a| a.trim().to_string()),
            std::mem::take(&mut entry.address),
        );
        entry.is_primary = keep.resolve(self.is_primary, entry.is_primary);
        entry.order = keep.resolve(self.order, entry.order);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactPhoneInput {
    pub id: Option<Uuid>,
    pub label: Option<String>,
    pub number: Option<String>,
    pub is_primary: Option<bool>,
    pub show_whats_app: Option<bool>,
    pub order: Option<i32>,
}

impl EntryInput<ContactPhone> for ContactPhoneInput {
    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn apply(self, entry: &mut ContactPhone) {
        let keep = AbsentPolicy::Keep;
        entry.label = keep.resolve(self.label, std::mem::take(&mut entry.label));
        entry.number = keep.resolve(self.number, std::mem::take(&mut entry.number));
        entry.is_primary = keep.resolve(self.is_primary, entry.is_primary);
        entry.show_whats_app = keep.resolve(self.show_whats_app, entry.show_whats_app);
        entry.order = keep.resolve(self.order, entry.order);
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SocialLinkInput {
    pub id: Option<Uuid>,
    pub platform: Option<SocialPlatform>,
    pub url: Option<String>,
    pub icon: Option<String>,
    pub order: Option<i32>,
}

impl EntryInput<SocialLink> for SocialLinkInput {
    fn id(&self) -> Option<Uuid> {
        self.id
    }

    fn apply(self, entry: &mut SocialLink) {
        let keep = AbsentPolicy::Keep;
        entry.platform = keep.resolve(self.platform, entry.platform);
        entry.url = keep.resolve(self.url, std::mem::take(&mut entry.url));
        entry.icon = keep.resolve(self.icon, std::mem::take(&mut entry.icon));
        entry.order = keep.resolve(self.order, entry.order);
    }

    /// A new link names its platform explicitly.
    fn into_new(self, order: i32) -> Result<SocialLink, ContentError> {
        if self.platform.is_none() {
            return Err(ContentError::validation("Platform and url are required"));
        }

        let mut entry = SocialLink::blank(order);
        self.merge_into(&mut entry)?;
        Ok(entry)
    }
}

/// Body of a sub-item request, tagged with the list it targets.
#[derive(Debug, Clone)]
pub enum ContactEntryInput {
    Email(ContactEmailInput),
    Phone(ContactPhoneInput),
    SocialLink(SocialLinkInput),
}

impl ContactEntryInput {
    pub fn parse(list: ContactList, body: serde_json::Value) -> Result<Self, ContentError> {
        let invalid = |e: serde_json::Error| {
            ContentError::validation(format!("Invalid {}: {e}", list.label().to_lowercase()))
        };
        Ok(match list {
            ContactList::Emails => Self::Email(serde_json::from_value(body).map_err(invalid)?),
            ContactList::Phones => Self::Phone(serde_json::from_value(body).map_err(invalid)?),
            ContactList::SocialLinks => {
                Self::SocialLink(serde_json::from_value(body).map_err(invalid)?)
            }
        })
    }

    pub fn list(&self) -> ContactList {
        match self {
            Self::Email(_) => ContactList::Emails,
            Self::Phone(_) => ContactList::Phones,
            Self::SocialLink(_) => ContactList::SocialLinks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn list_parses_route_segment() {
        let list: ContactList = serde_json::from_value(json!("social-links")).unwrap();
        assert_eq!(list, ContactList::SocialLinks);
    }

    #[test]
    fn new_email_must_be_valid() {
        let input = ContactEmailInput {
            address: Some("not-an-email".into()),
            ..Default::default()
        };
        assert_eq!(
            input.into_new(0).unwrap_err(),
            ContentError::Validation("Please provide a valid email address".into())
        );
    }

    #[test]
    fn add_assigns_id_and_next_order() {
        let mut emails = Vec::new();
        for address in ["a@example.com", "b@example.com"] {
            let input = ContactEmailInput {
                address: Some(address.into()),
                ..Default::default()
            };
            add_entry(&mut emails, input, |e: &ContactEmail| e.order).unwrap();
        }

        assert_eq!(emails[1].order, 1);
        assert_ne!(emails[0].id, emails[1].id);
    }

    #[test]
    fn update_rejects_invalid_address_and_keeps_entry() {
        let mut emails = vec![ContactEmailInput {
            address: Some("me@site.dev".into()),
            ..Default::default()
        }
        .into_new(0)
        .unwrap()];
        let id = emails[0].id;

        for address in ["", "nope"] {
            let input = ContactEmailInput {
                address: Some(address.into()),
                ..Default::default()
            };
            assert_eq!(
                update_entry(&mut emails, id, input, "Email").unwrap_err(),
                ContentError::Validation("Please provide a valid email address".into())
            );
        }
        assert_eq!(emails[0].address, "me@site.dev");
    }

    #[test]
    fn update_rejects_blank_phone_and_social_url() {
        let mut phones = vec![ContactPhoneInput {
            number: Some("+1 555".into()),
            ..Default::default()
        }
        .into_new(0)
        .unwrap()];
        let phone_id = phones[0].id;
        let blank_number = ContactPhoneInput {
            number: Some("   ".into()),
            ..Default::default()
        };
        assert_eq!(
            update_entry(&mut phones, phone_id, blank_number, "Phone number").unwrap_err(),
            ContentError::Validation("Phone number is required".into())
        );

        let mut links = vec![SocialLinkInput {
            platform: Some(SocialPlatform::Github),
            url: Some("https://github.com/me".into()),
            ..Default::default()
        }
        .into_new(0)
        .unwrap()];
        let link_id = links[0].id;
        let blank_url = SocialLinkInput {
            url: Some(String::new()),
            ..Default::default()
        };
        assert!(update_entry(&mut links, link_id, blank_url, "Social link").is_err());
        assert_eq!(links[0].url, "https://github.com/me");
    }

    #[test]
    fn replacing_list_revalidates_merged_entries() {
        let stored = ContactEmailInput {
            address: Some("me@site.dev".into()),
            ..Default::default()
        }
        .into_new(0)
        .unwrap();
        let inputs = vec![ContactEmailInput {
            id: Some(stored.id),
            address: Some("nope".into()),
            ..Default::default()
        }];

        assert!(matches!(
            replace_entries(vec![stored], inputs),
            Err(ContentError::Validation(_))
        ));
    }

    #[test]
    fn new_social_link_requires_platform() {
        let input = SocialLinkInput {
            url: Some("https://example.com".into()),
            ..Default::default()
        };
        assert!(input.into_new(0).is_err());
    }

    #[test]
    fn remove_unknown_entry_is_not_found() {
        let mut links: Vec<SocialLink> = Vec::new();
        assert_eq!(
            remove_entry(&mut links, Uuid::new_v4(), "Social link"),
            Err(ContentError::NotFound("Social link not found".into()))
        );
    }

    #[test]
    fn body_for_wrong_shape_is_validation_error() {
        let err = ContactEntryInput::parse(ContactList::SocialLinks, json!({ "platform": "myspace" }))
            .unwrap_err();
        assert!(matches!(err, ContentError::Validation(_)));
    }

    #[test]
    fn phone_serializes_whatsapp_flag_in_camel_case() {
        let phone = ContactPhone {
            show_whats_app: true,
            ..ContactPhone::default()
        };
        let json = serde_json::to_value(phone).unwrap();
        assert_eq!(json["showWhatsApp"], true);
        assert_eq!(json["isPrimary"], false);
    }
}
