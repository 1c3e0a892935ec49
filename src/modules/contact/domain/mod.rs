pub mod contact;
pub mod entries;

pub use contact::{Contact, ContactUpdate};
pub use entries::{
    ContactEmail, ContactEmailInput, ContactEntryInput, ContactList, ContactPhone,
    ContactPhoneInput, SocialLink, SocialLinkInput, SocialPlatform,
};
