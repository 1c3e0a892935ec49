pub mod modules;
pub use modules::auth;
pub use modules::email;
pub mod api;
pub mod health;
pub mod shared;

use crate::auth::adapter::outgoing::jwt::JwtTokenService;
use crate::auth::adapter::outgoing::security::{Argon2Hasher, BcryptHasher, SchemeHasher};
use crate::auth::application::ports::outgoing::password_hasher::PasswordHasher;
use crate::auth::application::ports::outgoing::token_provider::TokenProvider;
use crate::auth::application::use_cases::{
    change_password::{ChangePasswordService, ChangePasswordUseCase},
    verify_admin::{VerifyAdminService, VerifyAdminUseCase},
};
use crate::email::adapter::outgoing::SmtpEmailSender;
use crate::email::application::ports::outgoing::{ContactNotifier, EmailSender};
use crate::email::application::services::ContactEmailService;
use crate::modules::blog::adapter::outgoing::blog_repository_postgres::BlogRepositoryPostgres;
use crate::modules::blog::application::{BlogService, BlogUseCase};
use crate::modules::certification::adapter::outgoing::certification_repository_postgres::CertificationRepositoryPostgres;
use crate::modules::certification::application::{CertificationService, CertificationUseCase};
use crate::modules::contact::application::{
    ContactFormService, ContactFormUseCase, ContactService, ContactUseCase,
};
use crate::modules::experience::adapter::outgoing::experience_repository_postgres::ExperienceRepositoryPostgres;
use crate::modules::experience::application::{ExperienceService, ExperienceUseCase};
use crate::modules::hero::application::{HeroService, HeroUseCase};
use crate::modules::journey::application::{JourneyService, JourneyUseCase};
use crate::modules::media::adapter::outgoing::CloudinaryMediaHost;
use crate::modules::media::application::ports::incoming::media_upload::MediaUploadUseCase;
use crate::modules::media::application::ports::outgoing::media_host::MediaHost;
use crate::modules::media::application::services::{MediaJanitor, MediaUploadService};
use crate::modules::portfolio::application::{PortfolioService, PortfolioSources, PortfolioUseCase};
use crate::modules::project::adapter::outgoing::project_repository_postgres::ProjectRepositoryPostgres;
use crate::modules::project::application::{ProjectService, ProjectUseCase};
use crate::modules::service_offering::adapter::outgoing::service_repository_postgres::ServiceRepositoryPostgres;
use crate::modules::service_offering::application::{ServiceOfferingService, ServiceOfferingUseCase};
use crate::modules::skill::adapter::outgoing::skill_repository_postgres::SkillRepositoryPostgres;
use crate::modules::skill::application::{SkillService, SkillUseCase};
use crate::modules::theme::application::{ThemeService, ThemeUseCase};
use crate::modules::timeline::application::{TimelineService, TimelineUseCase};
use crate::shared::api::error_handlers::envelope_error_handlers;
use crate::shared::api::json_config::{custom_json_config, custom_path_config, custom_query_config};
use crate::shared::config::AppConfig;
use crate::shared::singleton::SingletonStorePostgres;

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database};
use std::sync::Arc;
use std::time::Duration;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(test)]
mod tests;

#[derive(Clone)]
pub struct AppState {
    pub verify_admin: Arc<dyn VerifyAdminUseCase + Send + Sync>,
    pub change_password: Arc<dyn ChangePasswordUseCase + Send + Sync>,
    pub hero: Arc<dyn HeroUseCase + Send + Sync>,
    pub journey: Arc<dyn JourneyUseCase + Send + Sync>,
    pub timeline: Arc<dyn TimelineUseCase + Send + Sync>,
    pub contact: Arc<dyn ContactUseCase + Send + Sync>,
    pub contact_form: Arc<dyn ContactFormUseCase + Send + Sync>,
    pub theme: Arc<dyn ThemeUseCase + Send + Sync>,
    pub media: Arc<dyn MediaUploadUseCase + Send + Sync>,
    pub project: Arc<dyn ProjectUseCase + Send + Sync>,
    pub skill: Arc<dyn SkillUseCase + Send + Sync>,
    pub service: Arc<dyn ServiceOfferingUseCase + Send + Sync>,
    pub certification: Arc<dyn CertificationUseCase + Send + Sync>,
    pub experience: Arc<dyn ExperienceUseCase + Send + Sync>,
    pub blog: Arc<dyn BlogUseCase + Send + Sync>,
    pub portfolio: Arc<dyn PortfolioUseCase + Send + Sync>,
}

#[actix_web::main]
#[cfg(not(tarpaulin_include))]
async fn start() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,actix_web=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting application...");

    let config = AppConfig::from_env().context("Invalid configuration")?;
    let server_url = config.server_url();

    // Database connection
    let mut opt = ConnectOptions::new(config.database.url.clone());
    opt.max_connections(config.database.max_connections)
        .min_connections(config.database.min_connections)
        .connect_timeout(Duration::from_secs(5))
        .acquire_timeout(Duration::from_secs(5))
        .idle_timeout(Duration::from_secs(300))
        .max_lifetime(Duration::from_secs(1800))
        .sqlx_logging(false);

    let conn = Database::connect(opt)
        .await
        .context("Failed to connect to database")?;
    Migrator::up(&conn, None)
        .await
        .context("Failed to run migrations")?;

    let db_arc = Arc::new(conn);

    // Auth
    let hasher: Arc<dyn PasswordHasher> = Arc::new(SchemeHasher::new(
        Arc::new(BcryptHasher::default()),
        vec![Arc::new(Argon2Hasher::default()) as Arc<dyn PasswordHasher>],
    ));
    let jwt_service = JwtTokenService::new(config.jwt.clone());
    let token_provider_arc: Arc<dyn TokenProvider + Send + Sync> = Arc::new(jwt_service);

    let verify_admin = VerifyAdminService::new(
        config.admin_password_hash.clone(),
        Arc::clone(&hasher),
        Arc::clone(&token_provider_arc) as Arc<dyn TokenProvider>,
    );
    verify_admin
        .ensure_hash_supported()
        .context("ADMIN_PASSWORD_HASH must be a bcrypt ($2...) or argon2 ($argon2...) hash")?;
    let change_password =
        ChangePasswordService::new(config.admin_password_hash.clone(), Arc::clone(&hasher));

    // Media
    let media_host: Arc<dyn MediaHost> = Arc::new(
        CloudinaryMediaHost::new(config.cloudinary.clone())
            .context("Failed to build media host client")?,
    );
    let janitor = MediaJanitor::new(Arc::clone(&media_host));
    let media = MediaUploadService::new(Arc::clone(&media_host), config.cloudinary.folder.clone());

    // Mail
    let smtp_sender = SmtpEmailSender::from_config(&config.smtp, &config.email_from)
        .context("Failed to build SMTP transport")?;
    let email_sender: Arc<dyn EmailSender + Send + Sync> = Arc::new(smtp_sender);
    let contact_notifier: Arc<dyn ContactNotifier> =
        Arc::new(ContactEmailService::new(email_sender));

    // Singleton documents
    let hero: Arc<dyn HeroUseCase + Send + Sync> = Arc::new(HeroService::new(
        SingletonStorePostgres::new(Arc::clone(&db_arc)),
        janitor.clone(),
    ));
    let journey: Arc<dyn JourneyUseCase + Send + Sync> = Arc::new(JourneyService::new(
        SingletonStorePostgres::new(Arc::clone(&db_arc)),
        janitor.clone(),
    ));
    let timeline: Arc<dyn TimelineUseCase + Send + Sync> = Arc::new(TimelineService::new(
        SingletonStorePostgres::new(Arc::clone(&db_arc)),
    ));
    let contact: Arc<dyn ContactUseCase + Send + Sync> = Arc::new(ContactService::new(
        SingletonStorePostgres::new(Arc::clone(&db_arc)),
    ));
    let contact_form = ContactFormService::new(
        SingletonStorePostgres::new(Arc::clone(&db_arc)),
        contact_notifier,
    );
    let theme: Arc<dyn ThemeUseCase + Send + Sync> = Arc::new(ThemeService::new(
        SingletonStorePostgres::new(Arc::clone(&db_arc)),
    ));

    // Collections
    let project: Arc<dyn ProjectUseCase + Send + Sync> = Arc::new(ProjectService::new(
        Arc::new(ProjectRepositoryPostgres::new(Arc::clone(&db_arc))),
        janitor.clone(),
    ));
    let skill: Arc<dyn SkillUseCase + Send + Sync> = Arc::new(SkillService::new(
        Arc::new(SkillRepositoryPostgres::new(Arc::clone(&db_arc))),
        janitor.clone(),
    ));
    let service: Arc<dyn ServiceOfferingUseCase + Send + Sync> = Arc::new(
        ServiceOfferingService::new(Arc::new(ServiceRepositoryPostgres::new(Arc::clone(&db_arc)))),
    );
    let certification: Arc<dyn CertificationUseCase + Send + Sync> =
        Arc::new(CertificationService::new(
            Arc::new(CertificationRepositoryPostgres::new(Arc::clone(&db_arc))),
            janitor.clone(),
        ));
    let experience: Arc<dyn ExperienceUseCase + Send + Sync> = Arc::new(ExperienceService::new(
        Arc::new(ExperienceRepositoryPostgres::new(Arc::clone(&db_arc))),
        janitor.clone(),
    ));
    let blog: Arc<dyn BlogUseCase + Send + Sync> = Arc::new(BlogService::new(
        Arc::new(BlogRepositoryPostgres::new(Arc::clone(&db_arc))),
        janitor,
    ));

    let portfolio = PortfolioService::new(PortfolioSources {
        hero: Arc::clone(&hero),
        journey: Arc::clone(&journey),
        timeline: Arc::clone(&timeline),
        contact: Arc::clone(&contact),
        theme: Arc::clone(&theme),
        project: Arc::clone(&project),
        skill: Arc::clone(&skill),
        service: Arc::clone(&service),
        certification: Arc::clone(&certification),
        experience: Arc::clone(&experience),
        blog: Arc::clone(&blog),
    });

    let state = AppState {
        verify_admin: Arc::new(verify_admin),
        change_password: Arc::new(change_password),
        hero,
        journey,
        timeline,
        contact,
        contact_form: Arc::new(contact_form),
        theme,
        media: Arc::new(media),
        project,
        skill,
        service,
        certification,
        experience,
        blog,
        portfolio: Arc::new(portfolio),
    };

    let openapi = api::ApiDoc::openapi();
    let db_for_server = Arc::clone(&db_arc);

    info!("Server run on: {}", server_url);

    HttpServer::new(move || {
        App::new()
            .wrap(envelope_error_handlers())
            .wrap(Logger::default())
            .app_data(web::Data::new(state.clone()))
            .app_data(web::Data::new(Arc::clone(&token_provider_arc)))
            .app_data(web::Data::new(Arc::clone(&db_for_server)))
            .app_data(custom_json_config())
            .app_data(custom_query_config())
            .app_data(custom_path_config())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi.clone()),
            )
            .configure(init_routes)
    })
    .bind(&server_url)
    .with_context(|| format!("Failed to bind {server_url}"))?
    .run()
    .await?;

    Ok(())
}

/// Literal segments (`/reorder`, `/footer`, `/id/{id}`) are registered ahead
/// of the `{id}`/`{slug}` catch-alls they would otherwise collide with.
#[cfg(not(tarpaulin_include))]
fn init_routes(cfg: &mut web::ServiceConfig) {
    use crate::modules::{
        blog, certification, contact, experience, hero, journey, media, portfolio, project,
        service_offering, skill, theme, timeline,
    };

    // Health
    cfg.service(crate::health::health);
    cfg.service(crate::health::readiness);
    // Auth
    cfg.service(crate::auth::adapter::incoming::web::routes::verify_admin_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::check_session_handler);
    cfg.service(crate::auth::adapter::incoming::web::routes::change_password_handler);
    // Hero
    cfg.service(hero::adapter::incoming::get_hero_handler);
    cfg.service(hero::adapter::incoming::update_hero_handler);
    // Journey
    cfg.service(journey::adapter::incoming::get_journey_handler);
    cfg.service(journey::adapter::incoming::update_journey_handler);
    cfg.service(journey::adapter::incoming::add_journey_step_handler);
    cfg.service(journey::adapter::incoming::update_journey_step_handler);
    cfg.service(journey::adapter::incoming::delete_journey_step_handler);
    // Timeline
    cfg.service(timeline::adapter::incoming::get_timeline_handler);
    cfg.service(timeline::adapter::incoming::update_timeline_handler);
    cfg.service(timeline::adapter::incoming::add_timeline_item_handler);
    cfg.service(timeline::adapter::incoming::update_timeline_item_handler);
    cfg.service(timeline::adapter::incoming::delete_timeline_item_handler);
    // Contact
    cfg.service(contact::adapter::incoming::submit_contact_handler);
    cfg.service(contact::adapter::incoming::get_contact_handler);
    cfg.service(contact::adapter::incoming::update_contact_handler);
    cfg.service(contact::adapter::incoming::add_contact_entry_handler);
    cfg.service(contact::adapter::incoming::update_contact_entry_handler);
    cfg.service(contact::adapter::incoming::delete_contact_entry_handler);
    // Theme
    cfg.service(theme::adapter::incoming::get_theme_handler);
    cfg.service(theme::adapter::incoming::update_theme_handler);
    cfg.service(theme::adapter::incoming::reset_theme_handler);
    // Media
    cfg.service(media::adapter::incoming::web::upload_many_handler);
    cfg.service(media::adapter::incoming::web::upload_single_handler);
    cfg.service(media::adapter::incoming::web::delete_media_handler);
    // Projects
    cfg.service(project::adapter::incoming::list_projects_handler);
    cfg.service(project::adapter::incoming::get_project_handler);
    cfg.service(project::adapter::incoming::create_project_handler);
    cfg.service(project::adapter::incoming::update_project_handler);
    cfg.service(project::adapter::incoming::delete_project_handler);
    // Skills
    cfg.service(skill::adapter::incoming::list_skills_handler);
    cfg.service(skill::adapter::incoming::reorder_skills_handler);
    cfg.service(skill::adapter::incoming::get_skill_handler);
    cfg.service(skill::adapter::incoming::create_skill_handler);
    cfg.service(skill::adapter::incoming::update_skill_handler);
    cfg.service(skill::adapter::incoming::delete_skill_handler);
    // Services
    cfg.service(service_offering::adapter::incoming::list_services_handler);
    cfg.service(service_offering::adapter::incoming::footer_services_handler);
    cfg.service(service_offering::adapter::incoming::reorder_services_handler);
    cfg.service(service_offering::adapter::incoming::get_service_handler);
    cfg.service(service_offering::adapter::incoming::create_service_handler);
    cfg.service(service_offering::adapter::incoming::update_service_handler);
    cfg.service(service_offering::adapter::incoming::delete_service_handler);
    // Certifications
    cfg.service(certification::adapter::incoming::list_certifications_handler);
    cfg.service(certification::adapter::incoming::get_certification_handler);
    cfg.service(certification::adapter::incoming::create_certification_handler);
    cfg.service(certification::adapter::incoming::update_certification_handler);
    cfg.service(certification::adapter::incoming::delete_certification_handler);
    // Experiences
    cfg.service(experience::adapter::incoming::list_experiences_handler);
    cfg.service(experience::adapter::incoming::get_experience_handler);
    cfg.service(experience::adapter::incoming::create_experience_handler);
    cfg.service(experience::adapter::incoming::update_experience_handler);
    cfg.service(experience::adapter::incoming::delete_experience_handler);
    // Blogs
    cfg.service(blog::adapter::incoming::list_blogs_handler);
    cfg.service(blog::adapter::incoming::get_blog_by_id_handler);
    cfg.service(blog::adapter::incoming::get_blog_by_slug_handler);
    cfg.service(blog::adapter::incoming::create_blog_handler);
    cfg.service(blog::adapter::incoming::update_blog_handler);
    cfg.service(blog::adapter::incoming::delete_blog_handler);
    // Aggregate
    cfg.service(portfolio::adapter::incoming::get_portfolio_handler);
}

#[cfg(not(tarpaulin_include))]
fn main() {
    if let Err(e) = start() {
        eprintln!("Error starting app: {e:#}");
    }
}
