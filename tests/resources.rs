mod common;

use common::{blog, project, MockApi, USER_ID};
use devsnap::commands::ai::types::{BioRequest, SummaryRequest};
use devsnap::commands::ai::utils::{
    apply_bio, apply_summary, generate_bio, generate_project_summary,
};
use devsnap::commands::auth::utils::current_user_key;
use devsnap::commands::blogs::utils::{delete_blog, get_all_blogs};
use devsnap::commands::profile::types::UserUpdate;
use devsnap::commands::profile::utils::update_user;
use devsnap::commands::projects::types::{ProjectForm, ProjectUpdate};
use devsnap::commands::projects::utils::{
    create_project, get_all_projects, get_project, project_key, update_project,
};
use devsnap::validation::ValidationErrors;

#[tokio::test]
async fn test_reads_are_cached() {
    let api = MockApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let state = api.signed_in_state(&dir).await;

    api.with(|b| b.projects.push(project("p1", "DevSnap")));

    get_all_projects(&state.http).await.unwrap();
    let projects = get_all_projects(&state.http).await.unwrap();

    assert_eq!(projects.len(), 1);
    assert_eq!(api.with(|b| b.hits("GET /api/projects/")), 1);
}

#[tokio::test]
async fn test_concurrent_reads_share_one_request() {
    let api = MockApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let state = api.signed_in_state(&dir).await;

    let (first, second) = tokio::join!(
        get_all_projects(&state.http),
        get_all_projects(&state.http)
    );

    assert_eq!(first.unwrap(), second.unwrap());
    assert_eq!(api.with(|b| b.hits("GET /api/projects/")), 1);
}

#[tokio::test]
async fn test_deleted_blog_leaves_list() {
    let api = MockApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let state = api.signed_in_state(&dir).await;

    api.with(|b| {
        b.blogs.push(blog("b1", "First"));
        b.blogs.push(blog("b2", "Second"));
    });

    assert_eq!(get_all_blogs(&state.http).await.unwrap().len(), 2);

    delete_blog(&state.http, "b1").await.unwrap();

    let blogs = get_all_blogs(&state.http).await.unwrap();

    assert!(blogs.iter().all(|blog| blog.id != "b1"));
    assert_eq!(blogs.len(), 1);
    assert_eq!(api.with(|b| b.hits("GET /api/blogs/")), 2);
}

#[tokio::test]
async fn test_create_invalidates_list_and_profile() {
    let api = MockApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut state = api.signed_in_state(&dir).await;

    state.mount().await;
    assert!(get_all_projects(&state.http).await.unwrap().is_empty());

    let form = ProjectForm {
        title: "DevSnap".to_string(),
        description: "Portfolio manager".to_string(),
        tech_stack: "Rust, tokio".to_string(),
        ..Default::default()
    };

    let created = create_project(&state.http, &form.into_create(USER_ID).unwrap())
        .await
        .unwrap();

    assert!(state.session.cache().get(&current_user_key()).await.is_none());

    let projects = get_all_projects(&state.http).await.unwrap();

    assert_eq!(projects, [created]);
    assert_eq!(api.with(|b| b.hits("GET /api/projects/")), 2);
}

#[tokio::test]
async fn test_update_invalidates_single_project() {
    let api = MockApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let state = api.signed_in_state(&dir).await;

    api.with(|b| b.projects.push(project("p1", "DevSnap")));

    get_project(&state.http, "p1").await.unwrap();
    assert!(state.session.cache().get(&project_key("p1")).await.is_some());

    let update = ProjectUpdate {
        summary: Some("A short summary".to_string()),
        ..Default::default()
    };

    update_project(&state.http, "p1", &update).await.unwrap();

    let project = get_project(&state.http, "p1").await.unwrap();

    assert_eq!(project.summary.as_deref(), Some("A short summary"));
    assert_eq!(project.title, "DevSnap");
}

#[tokio::test]
async fn test_failed_write_keeps_cache() {
    let api = MockApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let state = api.signed_in_state(&dir).await;

    get_all_blogs(&state.http).await.unwrap();

    assert!(delete_blog(&state.http, "missing").await.is_err());
    assert!(get_all_blogs(&state.http).await.is_ok());
    assert_eq!(api.with(|b| b.hits("GET /api/blogs/")), 1);
}

#[tokio::test]
async fn test_profile_update_invalidates_current_user() {
    let api = MockApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut state = api.signed_in_state(&dir).await;

    state.mount().await;

    let update = UserUpdate {
        bio: Some("Writes programs".to_string()),
        ..Default::default()
    };

    let user = update_user(&state.http, USER_ID, &update).await.unwrap();

    assert_eq!(user.bio.as_deref(), Some("Writes programs"));
    assert!(state.session.cache().get(&current_user_key()).await.is_none());
}

#[tokio::test]
async fn test_summary_without_title_sends_nothing() {
    let api = MockApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let state = api.signed_in_state(&dir).await;

    let request = SummaryRequest {
        title: String::new(),
        description: Some("Portfolio manager".to_string()),
        tech_stack: None,
    };

    let error = generate_project_summary(&state.http, &request)
        .await
        .unwrap_err();

    let errors = error.downcast_ref::<ValidationErrors>().unwrap();

    assert_eq!(errors.get("title"), Some("Title is required"));
    assert_eq!(api.with(|b| b.total_hits()), 0);
}

#[tokio::test]
async fn test_summary_generation() {
    let api = MockApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let state = api.signed_in_state(&dir).await;

    let request = SummaryRequest {
        title: "DevSnap".to_string(),
        description: None,
        tech_stack: Some(vec!["Rust".to_string()]),
    };

    let summary = generate_project_summary(&state.http, &request)
        .await
        .unwrap();

    assert_eq!(summary, "DevSnap in one sentence.");
}

#[tokio::test]
async fn test_bio_generation_failure() {
    let api = MockApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let state = api.signed_in_state(&dir).await;

    let request = BioRequest {
        name: "Ada".to_string(),
        current_role: None,
        skills: None,
        tone_preference: "casual".to_string(),
    };

    let error = generate_bio(&state.http, &request).await.unwrap_err();

    assert_eq!(error.to_string(), "Generation failed: AI service unavailable");
}

#[tokio::test]
async fn test_overlong_generated_bio_is_not_saved() {
    let api = MockApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut state = api.signed_in_state(&dir).await;

    api.with(|b| b.generated = Some("x".repeat(600)));

    let user = state.require_user().await.unwrap();
    let request = BioRequest {
        name: user.name.clone(),
        current_role: None,
        skills: None,
        tone_preference: "professional".to_string(),
    };

    let bio = generate_bio(&state.http, &request).await.unwrap();
    let error = apply_bio(&state.http, &user, bio).await.unwrap_err();

    let errors = error.downcast_ref::<ValidationErrors>().unwrap();

    assert_eq!(errors.get("bio"), Some("Bio must be less than 500 characters"));
    assert_eq!(api.with(|b| b.hits(&format!("PUT /api/users/{USER_ID}"))), 0);
}

#[tokio::test]
async fn test_generated_bio_is_saved() {
    let api = MockApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let mut state = api.signed_in_state(&dir).await;

    api.with(|b| b.generated = Some("Ada writes programs.".to_string()));

    let user = state.require_user().await.unwrap();
    let saved = apply_bio(&state.http, &user, "Ada writes programs.".to_string())
        .await
        .unwrap();

    assert_eq!(saved.bio.as_deref(), Some("Ada writes programs."));
    assert_eq!(api.with(|b| b.hits(&format!("PUT /api/users/{USER_ID}"))), 1);
}

#[tokio::test]
async fn test_overlong_generated_summary_is_not_saved() {
    let api = MockApi::start().await;
    let dir = tempfile::tempdir().unwrap();
    let state = api.signed_in_state(&dir).await;

    api.with(|b| {
        b.projects.push(project("p1", "DevSnap"));
        b.generated = Some("y".repeat(1001));
    });

    let project = get_project(&state.http, "p1").await.unwrap();
    let request = SummaryRequest {
        title: project.title.clone(),
        description: project.description.clone(),
        tech_stack: project.tech_stack.clone(),
    };

    let summary = generate_project_summary(&state.http, &request).await.unwrap();
    let error = apply_summary(&state.http, &project, summary).await.unwrap_err();

    let errors = error.downcast_ref::<ValidationErrors>().unwrap();

    assert_eq!(
        errors.get("summary"),
        Some("Summary must be less than 1000 characters")
    );
    assert_eq!(api.with(|b| b.hits("PUT /api/projects/p1")), 0);
}
