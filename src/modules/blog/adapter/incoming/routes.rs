use actix_web::{delete, get, post, put, web, Responder};
use uuid::Uuid;

use crate::auth::application::domain::entities::AdminSession;
use crate::modules::blog::domain::{BlogInput, BlogListQuery, BlogPatch};
use crate::shared::api::{ApiResponse, Pagination};
use crate::AppState;

/// Public list. A valid admin credential unlocks drafts and the `published`
/// filter; everyone else only sees published posts.
#[get("/api/blogs")]
pub async fn list_blogs_handler(
    admin: Option<AdminSession>,
    query: web::Query<BlogListQuery>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (filter, page) = query.into_inner().into_parts(admin.is_some());

    match data.blog.list(filter, page).await {
        Ok(result) => {
            let pagination =
                Pagination::new(result.total, result.request.page, result.request.limit);
            ApiResponse::paginated(result.items, pagination)
        }
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[get("/api/blogs/id/{id}")]
pub async fn get_blog_by_id_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.get_by_id(path.into_inner()).await {
        Ok(blog) => ApiResponse::success(blog),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[get("/api/blogs/{slug}")]
pub async fn get_blog_by_slug_handler(
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.read_by_slug(&path.into_inner()).await {
        Ok(blog) => ApiResponse::success(blog),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[post("/api/blogs")]
pub async fn create_blog_handler(
    _admin: AdminSession,
    req: web::Json<BlogInput>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.create(req.into_inner()).await {
        Ok(blog) => ApiResponse::created(blog),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[put("/api/blogs/{id}")]
pub async fn update_blog_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    req: web::Json<BlogPatch>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.update(path.into_inner(), req.into_inner()).await {
        Ok(blog) => ApiResponse::success_with_message(blog, "Blog updated successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[delete("/api/blogs/{id}")]
pub async fn delete_blog_handler(
    _admin: AdminSession,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.blog.delete(path.into_inner()).await {
        Ok(()) => ApiResponse::message("Blog deleted successfully"),
        Err(e) => ApiResponse::from_content_error(e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::blog::application::blog_service::MockBlogUseCase;
    use crate::modules::blog::domain::listing::MAX_PAGE;
    use crate::modules::blog::domain::{Blog, BlogFilter, BlogPage, PageRequest};
    use crate::shared::api::json_config::{custom_path_config, custom_query_config};
    use crate::shared::error::ContentError;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::auth_helper::{admin_token, token_provider_data};
    use actix_web::{http::StatusCode, test, App};
    use chrono::Utc;
    use serde_json::{json, Value};

    macro_rules! blog_app {
        ($mock:expr) => {
            test::init_service(
                App::new()
                    .app_data(TestAppStateBuilder::default().with_blog($mock).build())
                    .app_data(token_provider_data())
                    .app_data(custom_path_config())
                    .app_data(custom_query_config())
                    .service(list_blogs_handler)
                    .service(get_blog_by_id_handler)
                    .service(get_blog_by_slug_handler)
                    .service(create_blog_handler)
                    .service(update_blog_handler)
                    .service(delete_blog_handler),
            )
            .await
        };
    }

    fn blog(slug: &str) -> Blog {
        BlogInput {
            title: "Hello".into(),
            content: "Body".into(),
            published: true,
            ..BlogInput::default()
        }
        .into_blog(slug.into(), Utc::now())
        .unwrap()
    }

    #[actix_web::test]
    async fn anonymous_list_sees_only_published_and_gets_pagination() {
        let mut mock = MockBlogUseCase::new();
        mock.expect_list()
            .withf(|f: &BlogFilter, p: &PageRequest| {
                f.published == Some(true) && f.tag.as_deref() == Some("rust") && p.limit == 50
            })
            .times(1)
            .returning(|_, page| {
                Ok(BlogPage {
                    items: vec![blog("hello")],
                    total: 51,
                    request: page,
                })
            });

        let app = blog_app!(mock);
        let req = test::TestRequest::get()
            .uri("/api/blogs?published=false&tag=rust&limit=500")
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["total"], 51);
        assert_eq!(body["pagination"]["totalPages"], 2);
        assert_eq!(body["pagination"]["currentPage"], 1);
        assert_eq!(body["data"][0]["slug"], "hello");
    }

    #[actix_web::test]
    async fn oversized_page_is_capped_not_rejected() {
        let mut mock = MockBlogUseCase::new();
        mock.expect_list()
            .withf(|_: &BlogFilter, p: &PageRequest| p.page == MAX_PAGE)
            .times(1)
            .returning(|_, page| {
                Ok(BlogPage {
                    items: vec![],
                    total: 3,
                    request: page,
                })
            });

        let app = blog_app!(mock);
        let req = test::TestRequest::get()
            .uri(&format!("/api/blogs?page={}", u64::MAX / 2))
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["pagination"]["currentPage"], MAX_PAGE);
    }

    #[actix_web::test]
    async fn admin_list_can_read_drafts() {
        let mut mock = MockBlogUseCase::new();
        mock.expect_list()
            .withf(|f: &BlogFilter, _: &PageRequest| f.published == Some(false))
            .times(1)
            .returning(|_, page| {
                Ok(BlogPage {
                    items: vec![],
                    total: 0,
                    request: page,
                })
            });

        let app = blog_app!(mock);
        let req = test::TestRequest::get()
            .uri("/api/blogs?published=false")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);
    }

    #[actix_web::test]
    async fn slug_read_is_public_and_404s_for_drafts() {
        let mut mock = MockBlogUseCase::new();
        mock.expect_read_by_slug()
            .withf(|slug: &str| slug == "draft-post")
            .returning(|_| Err(ContentError::not_found("Blog")));

        let app = blog_app!(mock);
        let req = test::TestRequest::get()
            .uri("/api/blogs/draft-post")
            .to_request();
        let resp = test::call_service(&app, req).await;
        let status = resp.status();
        let body: Value = test::read_body_json(resp).await;

        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["message"], "Blog not found");
    }

    #[actix_web::test]
    async fn read_by_id_requires_admin() {
        let mut mock = MockBlogUseCase::new();
        mock.expect_get_by_id().times(0);
        mock.expect_read_by_slug().times(0);

        let app = blog_app!(mock);
        let req = test::TestRequest::get()
            .uri(&format!("/api/blogs/id/{}", Uuid::new_v4()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    }

    #[actix_web::test]
    async fn create_conflict_is_409() {
        let mut mock = MockBlogUseCase::new();
        mock.expect_create().returning(|_| {
            Err(ContentError::Conflict(
                "A blog with this slug already exists".into(),
            ))
        });

        let app = blog_app!(mock);
        let req = test::TestRequest::post()
            .uri("/api/blogs")
            .insert_header(("Authorization", format!("Bearer {}", admin_token())))
            .set_json(json!({ "title": "Hello", "content": "Body" }))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::CONFLICT);
    }
}
