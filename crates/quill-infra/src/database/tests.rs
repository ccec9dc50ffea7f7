use sea_orm::{DatabaseBackend, MockDatabase};

use quill_core::domain::Post;
use quill_core::ports::{BaseRepository, PostRepository};

use crate::database::entity::post;
use crate::database::postgres_repo::PostgresPostRepository;

fn post_model(slug: &str) -> post::Model {
    let now = chrono::Utc::now();
    post::Model {
        id: uuid::Uuid::new_v4(),
        author_id: uuid::Uuid::new_v4(),
        title: "Test Post".to_owned(),
        content: "Content".to_owned(),
        summary: None,
        visibility: post::Visibility::Public,
        published: true,
        tags: vec!["rust".to_owned()],
        slug: slug.to_owned(),
        created_at: now.into(),
        updated_at: now.into(),
    }
}

#[tokio::test]
async fn find_post_by_id_maps_to_domain() {
    let model = post_model("test-post-a1b2c3d4");
    let post_id = model.id;

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let result: Option<Post> = repo.find_by_id(post_id).await.unwrap();

    let post = result.unwrap();
    assert_eq!(post.title, "Test Post");
    assert_eq!(post.id, post_id);
    assert_eq!(post.visibility, quill_core::domain::Visibility::Public);
    assert_eq!(post.tags, vec!["rust".to_owned()]);
}

#[tokio::test]
async fn find_by_slug_returns_matching_post() {
    let model = post_model("hello-world-12ab34cd");

    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![vec![model]])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo.find_by_slug("hello-world-12ab34cd").await.unwrap();

    assert_eq!(post.unwrap().slug, "hello-world-12ab34cd");
}

#[tokio::test]
async fn find_by_slug_absent_is_none() {
    let db = MockDatabase::new(DatabaseBackend::Postgres)
        .append_query_results(vec![Vec::<post::Model>::new()])
        .into_connection();

    let repo = PostgresPostRepository::new(db);
    let post = repo.find_by_slug("missing").await.unwrap();

    assert!(post.is_none());
}
