use serde_json::json;

use crate::modules::auth::application::domain::entities::LoginRequest;
use crate::modules::auth::adapter::outgoing::AuthApiHttp;
use crate::modules::auth::application::ports::outgoing::AuthApi;
use crate::modules::contact::adapter::outgoing::ContactApiHttp;
use crate::modules::contact::application::ports::outgoing::ContactApi;
use crate::modules::cv::adapter::outgoing::CvFileApiHttp;
use crate::modules::cv::application::ports::outgoing::CvFileApi;
use crate::modules::profile::adapter::outgoing::ProfileApiHttp;
use crate::modules::profile::application::ports::outgoing::ProfileApi;
use crate::modules::project::adapter::outgoing::ProjectApiHttp;
use crate::modules::project::application::domain::{ProjectImage, Technologies};
use crate::modules::project::application::ports::outgoing::{ProjectApi, ProjectPayload};
use crate::shared::http::{ApiError, Tokens};
use crate::shared::media::FileUpload;
use crate::tests::support::fake_backend::{CannedResponse, FakeBackend};

#[actix_web::test]
async fn test_project_list_wraps_single_object_body() {
    let backend = FakeBackend::start(vec![CannedResponse::json(
        "GET",
        "/api/projects",
        200,
        json!({ "id": 1, "title": "Only one", "images": ["only.png"] }),
    )]);
    let api = ProjectApiHttp::new(backend.client());

    let projects = api.list().await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(projects[0].title, "Only one");
    assert_eq!(projects[0].description, "");
    assert_eq!(projects[0].images, vec![ProjectImage::new(None, "only.png")]);
    backend.stop().await;
}

#[actix_web::test]
async fn test_project_list_with_unexpected_body_is_empty() {
    let backend = FakeBackend::start(vec![CannedResponse::json(
        "GET",
        "/api/projects",
        200,
        json!("maintenance"),
    )]);
    let api = ProjectApiHttp::new(backend.client());

    assert!(api.list().await.unwrap().is_empty());
    backend.stop().await;
}

#[actix_web::test]
async fn test_project_create_sends_multipart_with_bearer() {
    let backend = FakeBackend::start(vec![CannedResponse::json(
        "POST",
        "/api/projects",
        201,
        json!({
            "id": 12,
            "title": "Portfolio",
            "description": "Personal site with a dashboard",
            "technologies": ["Rust", "Actix"],
            "images": [{ "id": 3, "imageUrl": "shot.png" }]
        }),
    )]);
    let client = backend.client();
    client.tokens().set(Tokens {
        access_token: "abc".to_string(),
        refresh_token: None,
    });
    let api = ProjectApiHttp::new(client);

    let payload = ProjectPayload {
        title: "Portfolio".to_string(),
        description: "Personal site with a dashboard".to_string(),
        technologies: Technologies::parse("Rust, Actix"),
        existing_images: vec![],
    };
    let project = api
        .create(payload, vec![FileUpload::new("shot.png", "image/png", vec![1, 2, 3])])
        .await
        .unwrap();

    assert_eq!(project.id, Some(12));
    assert_eq!(project.technologies, Technologies::parse("Rust, Actix"));

    let requests = backend.requests();
    assert_eq!(requests.len(), 1);
    let sent = &requests[0];
    assert_eq!(sent.authorization.as_deref(), Some("Bearer abc"));
    assert!(sent
        .content_type
        .as_deref()
        .is_some_and(|ct| ct.starts_with("multipart/form-data")));

    let body = sent.body_text();
    assert!(body.contains(r#"name="title""#));
    assert!(body.contains("Personal site with a dashboard"));
    assert!(body.contains(r#"name="technologies""#));
    assert!(body.contains(r#"filename="shot.png""#));
    assert!(!body.contains("existingImages"));
    backend.stop().await;
}

#[actix_web::test]
async fn test_status_codes_map_to_api_errors() {
    let backend = FakeBackend::start(vec![
        CannedResponse::text("GET", "/api/projects/7", 500, "database unavailable"),
        CannedResponse::text("DELETE", "/api/projects/7", 401, ""),
    ]);
    let api = ProjectApiHttp::new(backend.client());

    assert_eq!(
        api.get_by_id(7).await.unwrap_err(),
        ApiError::Status {
            status: 500,
            message: "database unavailable".to_string(),
        }
    );
    assert_eq!(api.delete(7).await.unwrap_err(), ApiError::Unauthorized);
    assert_eq!(
        api.get_by_id(8).await.unwrap_err(),
        ApiError::NotFound("/api/projects/8".to_string())
    );
    backend.stop().await;
}

#[actix_web::test]
async fn test_profile_list_accepts_null() {
    let backend = FakeBackend::start(vec![CannedResponse::json(
        "GET",
        "/api/profiles",
        200,
        serde_json::Value::Null,
    )]);
    let api = ProfileApiHttp::new(backend.client());

    assert!(api.list().await.unwrap().is_empty());
    backend.stop().await;
}

#[actix_web::test]
async fn test_contact_delete_returns_plain_text() {
    let backend = FakeBackend::start(vec![CannedResponse::text(
        "DELETE",
        "/api/contact/4",
        200,
        "Contact message deleted",
    )]);
    let api = ContactApiHttp::new(backend.client());

    assert_eq!(api.delete(4).await.unwrap(), "Contact message deleted");
    backend.stop().await;
}

#[actix_web::test]
async fn test_cv_upload_download_and_exists() {
    let backend = FakeBackend::start(vec![
        CannedResponse::json(
            "POST",
            "/api/cvfiles",
            200,
            json!({ "id": 5, "filename": "cv.pdf", "contentType": "application/pdf", "size": 3 }),
        ),
        CannedResponse::bytes("GET", "/api/cvfiles/download/my%20cv.pdf", b"%PDF"),
        CannedResponse::json("GET", "/api/cvfiles/exists", 200, json!({ "exists": true })),
    ]);
    let api = CvFileApiHttp::new(backend.client());

    let stored = api
        .upload(FileUpload::new("cv.pdf", "application/pdf", vec![1, 2, 3]))
        .await
        .unwrap();
    assert_eq!(stored.id, Some(5));
    assert_eq!(stored.size, Some(3));

    assert_eq!(api.download_by_filename("my cv.pdf").await.unwrap(), b"%PDF");
    assert!(api.exists().await.unwrap());

    let upload = &backend.requests()[0];
    assert!(upload.body_text().contains(r#"name="file"; filename="cv.pdf""#));
    backend.stop().await;
}

#[actix_web::test]
async fn test_auth_refresh_sends_refresh_token_as_bearer() {
    let backend = FakeBackend::start(vec![
        CannedResponse::json(
            "POST",
            "/api/auth/login",
            200,
            json!({ "accessToken": "access-1", "refreshToken": "refresh-1" }),
        ),
        CannedResponse::json(
            "POST",
            "/api/auth/refresh",
            200,
            json!({ "accessToken": "access-2" }),
        ),
    ]);
    let api = AuthApiHttp::new(backend.client());

    let request = LoginRequest::new("Admin@Example.com", "secret").unwrap();
    let session = api.login(&request).await.unwrap();
    assert_eq!(session.access_token, "access-1");
    assert_eq!(session.token_type, "Bearer");

    let refreshed = api.refresh("refresh-1").await.unwrap();
    assert_eq!(refreshed.access_token, "access-2");
    assert_eq!(refreshed.refresh_token, None);

    let requests = backend.requests();
    let login: serde_json::Value = serde_json::from_slice(&requests[0].body).unwrap();
    assert_eq!(
        login,
        json!({ "email": "admin@example.com", "password": "secret" })
    );
    assert_eq!(requests[1].authorization.as_deref(), Some("Bearer refresh-1"));
    backend.stop().await;
}
