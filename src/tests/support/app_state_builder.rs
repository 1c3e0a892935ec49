use std::sync::Arc;

use actix_web::web;

use crate::auth::application::use_cases::change_password::{
    ChangePasswordUseCase, MockChangePasswordUseCase,
};
use crate::auth::application::use_cases::verify_admin::{MockVerifyAdminUseCase, VerifyAdminUseCase};
use crate::modules::blog::application::blog_service::{BlogUseCase, MockBlogUseCase};
use crate::modules::certification::application::certification_service::{
    CertificationUseCase, MockCertificationUseCase,
};
use crate::modules::contact::application::contact_form::{
    ContactFormUseCase, MockContactFormUseCase,
};
use crate::modules::contact::application::contact_service::{ContactUseCase, MockContactUseCase};
use crate::modules::experience::application::experience_service::{
    ExperienceUseCase, MockExperienceUseCase,
};
use crate::modules::hero::application::hero_service::{HeroUseCase, MockHeroUseCase};
use crate::modules::journey::application::journey_service::{JourneyUseCase, MockJourneyUseCase};
use crate::modules::media::application::ports::incoming::media_upload::{
    MediaUploadUseCase, MockMediaUploadUseCase,
};
use crate::modules::portfolio::application::portfolio_service::{
    MockPortfolioUseCase, PortfolioUseCase,
};
use crate::modules::project::application::project_service::{MockProjectUseCase, ProjectUseCase};
use crate::modules::service_offering::application::service_offering_service::{
    MockServiceOfferingUseCase, ServiceOfferingUseCase,
};
use crate::modules::skill::application::skill_service::{MockSkillUseCase, SkillUseCase};
use crate::modules::theme::application::theme_service::{MockThemeUseCase, ThemeUseCase};
use crate::modules::timeline::application::timeline_service::{
    MockTimelineUseCase, TimelineUseCase,
};
use crate::AppState;

/// Every use case starts as a mock with no expectations, so a handler that
/// reaches an unconfigured dependency fails the test loudly.
pub struct TestAppStateBuilder {
    verify_admin: Arc<dyn VerifyAdminUseCase + Send + Sync>,
    change_password: Arc<dyn ChangePasswordUseCase + Send + Sync>,
    hero: Arc<dyn HeroUseCase + Send + Sync>,
    journey: Arc<dyn JourneyUseCase + Send + Sync>,
    timeline: Arc<dyn TimelineUseCase + Send + Sync>,
    contact: Arc<dyn ContactUseCase + Send + Sync>,
    contact_form: Arc<dyn ContactFormUseCase + Send + Sync>,
    theme: Arc<dyn ThemeUseCase + Send + Sync>,
    media: Arc<dyn MediaUploadUseCase + Send + Sync>,
    project: Arc<dyn ProjectUseCase + Send + Sync>,
    skill: Arc<dyn SkillUseCase + Send + Sync>,
    service: Arc<dyn ServiceOfferingUseCase + Send + Sync>,
    certification: Arc<dyn CertificationUseCase + Send + Sync>,
    experience: Arc<dyn ExperienceUseCase + Send + Sync>,
    blog: Arc<dyn BlogUseCase + Send + Sync>,
    portfolio: Arc<dyn PortfolioUseCase + Send + Sync>,
}

impl Default for TestAppStateBuilder {
    fn default() -> Self {
        Self {
            verify_admin: Arc::new(MockVerifyAdminUseCase::new()),
            change_password: Arc::new(MockChangePasswordUseCase::new()),
            hero: Arc::new(MockHeroUseCase::new()),
            journey: Arc::new(MockJourneyUseCase::new()),
            timeline: Arc::new(MockTimelineUseCase::new()),
            contact: Arc::new(MockContactUseCase::new()),
            contact_form: Arc::new(MockContactFormUseCase::new()),
            theme: Arc::new(MockThemeUseCase::new()),
            media: Arc::new(MockMediaUploadUseCase::new()),
            project: Arc::new(MockProjectUseCase::new()),
            skill: Arc::new(MockSkillUseCase::new()),
            service: Arc::new(MockServiceOfferingUseCase::new()),
            certification: Arc::new(MockCertificationUseCase::new()),
            experience: Arc::new(MockExperienceUseCase::new()),
            blog: Arc::new(MockBlogUseCase::new()),
            portfolio: Arc::new(MockPortfolioUseCase::new()),
        }
    }
}

impl TestAppStateBuilder {
    pub fn with_verify_admin(mut self, uc: impl VerifyAdminUseCase + 'static) -> Self {
        self.verify_admin = Arc::new(uc);
        self
    }

    pub fn with_change_password(mut self, uc: impl ChangePasswordUseCase + 'static) -> Self {
        self.change_password = Arc::new(uc);
        self
    }

    pub fn with_hero(mut self, uc: impl HeroUseCase + 'static) -> Self {
        self.hero = Arc::new(uc);
        self
    }

    pub fn with_journey(mut self, uc: impl JourneyUseCase + 'static) -> Self {
        self.journey = Arc::new(uc);
        self
    }

    pub fn with_timeline(mut self, uc: impl TimelineUseCase + 'static) -> Self {
        self.timeline = Arc::new(uc);
        self
    }

    pub fn with_contact(mut self, uc: impl ContactUseCase + 'static) -> Self {
        self.contact = Arc::new(uc);
        self
    }

    pub fn with_contact_form(mut self, uc: impl ContactFormUseCase + 'static) -> Self {
        self.contact_form = Arc::new(uc);
        self
    }

    pub fn with_theme(mut self, uc: impl ThemeUseCase + 'static) -> Self {
        self.theme = Arc::new(uc);
        self
    }

    pub fn with_media(mut self, uc: impl MediaUploadUseCase + 'static) -> Self {
        self.media = Arc::new(uc);
        self
    }

    pub fn with_project(mut self, uc: impl ProjectUseCase + 'static) -> Self {
        self.project = Arc::new(uc);
        self
    }

    pub fn with_skill(mut self, uc: impl SkillUseCase + 'static) -> Self {
        self.skill = Arc::new(uc);
        self
    }

    pub fn with_service(mut self, uc: impl ServiceOfferingUseCase + 'static) -> Self {
        self.service = Arc::new(uc);
        self
    }

    pub fn with_certification(mut self, uc: impl CertificationUseCase + 'static) -> Self {
        self.certification = Arc::new(uc);
        self
    }

    pub fn with_experience(mut self, uc: impl ExperienceUseCase + 'static) -> Self {
        self.experience = Arc::new(uc);
        self
    }

    pub fn with_blog(mut self, uc: impl BlogUseCase + 'static) -> Self {
        self.blog = Arc::new(uc);
        self
    }

    pub fn with_portfolio(mut self, uc: impl PortfolioUseCase + 'static) -> Self {
        self.portfolio = Arc::new(uc);
        self
    }

    pub fn build(self) -> web::Data<AppState> {
        web::Data::new(AppState {
            verify_admin: self.verify_admin,
            change_password: self.change_password,
            hero: self.hero,
            journey: self.journey,
            timeline: self.timeline,
            contact: self.contact,
            contact_form: self.contact_form,
            theme: self.theme,
            media: self.media,
            project: self.project,
            skill: self.skill,
            service: self.service,
            certification: self.certification,
            experience: self.experience,
            blog: self.blog,
            portfolio: self.portfolio,
        })
    }
}
