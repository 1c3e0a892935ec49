use serde::Serialize;

use crate::modules::blog::domain::Blog;
use crate::modules::certification::domain::Certification;
use crate::modules::contact::domain::Contact;
use crate::modules::experience::domain::Experience;
use crate::modules::hero::domain::Hero;
use crate::modules::journey::domain::Journey;
use crate::modules::project::domain::Project;
use crate::modules::service_offering::domain::ServiceOffering;
use crate::modules::skill::domain::Skill;
use crate::modules::theme::domain::Theme;
use crate::modules::timeline::domain::Timeline;
use crate::shared::singleton::SingletonRecord;

/// Everything the public site renders, read in one round trip. A section
/// that failed to load is `null`.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Portfolio {
    pub hero: Option<SingletonRecord<Hero>>,
    pub journey: Option<SingletonRecord<Journey>>,
    pub timeline: Option<SingletonRecord<Timeline>>,
    pub contact: Option<SingletonRecord<Contact>>,
    pub theme: Option<SingletonRecord<Theme>>,
    pub projects: Option<Vec<Project>>,
    pub skills: Option<Vec<Skill>>,
    pub services: Option<Vec<ServiceOffering>>,
    pub certifications: Option<Vec<Certification>>,
    pub experiences: Option<Vec<Experience>>,
    pub blogs: Option<Vec<Blog>>,
}
