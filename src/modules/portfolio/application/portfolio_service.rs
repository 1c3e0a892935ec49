use std::sync::Arc;

use async_trait::async_trait;
use tracing::warn;

use crate::modules::blog::application::BlogUseCase;
use crate::modules::blog::domain::{BlogFilter, PageRequest};
use crate::modules::certification::application::CertificationUseCase;
use crate::modules::contact::application::ContactUseCase;
use crate::modules::experience::application::ExperienceUseCase;
use crate::modules::hero::application::HeroUseCase;
use crate::modules::journey::application::JourneyUseCase;
use crate::modules::portfolio::domain::Portfolio;
use crate::modules::project::application::ProjectUseCase;
use crate::modules::project::domain::ProjectFilter;
use crate::modules::service_offering::application::ServiceOfferingUseCase;
use crate::modules::service_offering::domain::ServiceFilter;
use crate::modules::skill::application::SkillUseCase;
use crate::modules::skill::domain::SkillFilter;
use crate::modules::theme::application::ThemeUseCase;
use crate::modules::timeline::application::TimelineUseCase;
use crate::shared::error::ContentError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PortfolioUseCase: Send + Sync {
    async fn snapshot(&self) -> Portfolio;
}

/// Read sides of every content controller.
#[derive(Clone)]
pub struct PortfolioSources {
    pub hero: Arc<dyn HeroUseCase + Send + Sync>,
    pub journey: Arc<dyn JourneyUseCase + Send + Sync>,
    pub timeline: Arc<dyn TimelineUseCase + Send + Sync>,
    pub contact: Arc<dyn ContactUseCase + Send + Sync>,
    pub theme: Arc<dyn ThemeUseCase + Send + Sync>,
    pub project: Arc<dyn ProjectUseCase + Send + Sync>,
    pub skill: Arc<dyn SkillUseCase + Send + Sync>,
    pub service: Arc<dyn ServiceOfferingUseCase + Send + Sync>,
    pub certification: Arc<dyn CertificationUseCase + Send + Sync>,
    pub experience: Arc<dyn ExperienceUseCase + Send + Sync>,
    pub blog: Arc<dyn BlogUseCase + Send + Sync>,
}

pub struct PortfolioService {
    sources: PortfolioSources,
}

impl PortfolioService {
    pub fn new(sources: PortfolioSources) -> Self {
        Self { sources }
    }
}

fn section<T>(name: &'static str, result: Result<T, ContentError>) -> Option<T> {
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(section = name, error = %e, "Portfolio section unavailable");
            None
        }
    }
}

#[async_trait]
impl PortfolioUseCase for PortfolioService {
    async fn snapshot(&self) -> Portfolio {
        let s = &self.sources;
        let published = BlogFilter {
            published: Some(true),
            tag: None,
        };
        let active = ServiceFilter {
            active: Some(true),
            ..ServiceFilter::default()
        };

        let (
            hero,
            journey,
            timeline,
            contact,
            theme,
            projects,
            skills,
            services,
            certifications,
            experiences,
            blogs,
        ) = futures::join!(
            s.hero.get(),
            s.journey.get(),
            s.timeline.get(),
            s.contact.get(),
            s.theme.get(),
            s.project.list(ProjectFilter::default()),
            s.skill.list(SkillFilter::default()),
            s.service.list(active),
            s.certification.list(),
            s.experience.list(),
            s.blog.list(published, PageRequest::default()),
        );

        Portfolio {
            hero: section("hero", hero),
            journey: section("journey", journey),
            timeline: section("timeline", timeline),
            contact: section("contact", contact),
            theme: section("theme", theme),
            projects: section("projects", projects),
            skills: section("skills", skills),
            services: section("services", services),
            certifications: section("certifications", certifications),
            experiences: section("experiences", experiences),
            blogs: section("blogs", blogs.map(|page| page.items)),
        }
    }
}
