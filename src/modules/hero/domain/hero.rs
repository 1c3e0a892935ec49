use serde::{Deserialize, Serialize};

use crate::modules::media::domain::MediaRef;
use crate::shared::error::ContentError;
use crate::shared::patch::{AbsentPolicy, PatchField};
use crate::shared::singleton::SingletonDocument;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModelType {
    #[default]
    Laptop,
    Globe,
    Cube,
    None,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ModelConfig {
    pub model_type: ModelType,
    pub rotation_speed: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            model_type: ModelType::Laptop,
            rotation_speed: 0.5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct HeroAnimation {
    pub name: String,
}

impl Default for HeroAnimation {
    fn default() -> Self {
        Self {
            name: "fadeIn".to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeLink {
    pub label: String,
    pub url: String,
}

/// Landing banner. `subtitles` drives the typing animation and is never empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Hero {
    pub title: String,
    pub subtitles: Vec<String>,
    pub description: String,
    pub profile_image: Option<MediaRef>,
    pub background_image: Option<MediaRef>,
    pub resume_links: Vec<ResumeLink>,
    pub cta_text: String,
    pub cta_link: String,
    pub model_config: ModelConfig,
    pub animation: HeroAnimation,
}

impl Default for Hero {
    fn default() -> Self {
        Self {
            title: "Hi, I'm a Developer".to_string(),
            subtitles: vec![
                "Full Stack Developer".to_string(),
                "UI/UX Enthusiast".to_string(),
                "Problem Solver".to_string(),
            ],
            description: "Welcome to my portfolio.".to_string(),
            profile_image: None,
            background_image: None,
            resume_links: Vec::new(),
            cta_text: "View My Work".to_string(),
            cta_link: "#projects".to_string(),
            model_config: ModelConfig::default(),
            animation: HeroAnimation::default(),
        }
    }
}

impl SingletonDocument for Hero {
    const KIND: &'static str = "hero";
    const LABEL: &'static str = "Hero";

    fn bootstrap() -> Self {
        Hero::default()
    }
}

/// Fields an admin may change. `description`, `ctaText` and `ctaLink` are
/// cleared when omitted; everything else keeps its stored value.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroUpdate {
    pub title: Option<String>,
    pub subtitles: Option<Vec<String>>,
    pub description: Option<String>,
    #[serde(default)]
    pub profile_image: PatchField<MediaRef>,
    #[serde(default)]
    pub background_image: PatchField<MediaRef>,
    pub resume_links: Option<Vec<ResumeLink>>,
    pub cta_text: Option<String>,
    pub cta_link: Option<String>,
    pub model_config: Option<ModelConfig>,
    pub animation: Option<HeroAnimation>,
}

impl HeroUpdate {
    pub const DESCRIPTION: AbsentPolicy = AbsentPolicy::Clear;
    pub const CTA_TEXT: AbsentPolicy = AbsentPolicy::Clear;
    pub const CTA_LINK: AbsentPolicy = AbsentPolicy::Clear;

    pub fn apply(self, current: Hero) -> Result<Hero, ContentError> {
        let subtitles = match self.subtitles {
            Some(subtitles) => {
                let cleaned: Vec<String> = subtitles
                    .into_iter()
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect();
                if cleaned.is_empty() {
                    return Err(ContentError::validation("At least one subtitle is required"));
                }
                cleaned
            }
            None => current.subtitles,
        };

        Ok(Hero {
            title: AbsentPolicy::Keep.resolve(self.title, current.title),
            subtitles,
            description: Self::DESCRIPTION.resolve(self.description, current.description),
            profile_image: self.profile_image.apply_to(current.profile_image),
            background_image: self.background_image.apply_to(current.background_image),
            resume_links: AbsentPolicy::Keep.resolve(self.resume_links, current.resume_links),
            cta_text: Self::CTA_TEXT.resolve(self.cta_text, current.cta_text),
            cta_link: Self::CTA_LINK.resolve(self.cta_link, current.cta_link),
            model_config: AbsentPolicy::Keep.resolve(self.model_config, current.model_config),
            animation: AbsentPolicy::Keep.resolve(self.animation, current.animation),
        })
    }
}
