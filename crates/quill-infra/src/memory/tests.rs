use std::sync::Arc;

use quill_core::domain::{FollowStatus, NotificationKind, Profile, Visibility};
use quill_core::error::DomainError;
use quill_core::ports::BaseRepository;
use quill_core::services::{ContentService, NewPost, PostFilter, PostUpdate, SocialGraphService};

use super::{
    InMemoryFollowRepository, InMemoryNotificationRepository, InMemoryPostRepository,
    InMemoryProfileRepository,
};

struct Fixture {
    profiles: Arc<InMemoryProfileRepository>,
    content: ContentService,
    social: SocialGraphService,
}

fn fixture() -> Fixture {
    let profiles = Arc::new(InMemoryProfileRepository::new());
    let posts = Arc::new(InMemoryPostRepository::new());
    let follows = Arc::new(InMemoryFollowRepository::new());
    let notifications = Arc::new(InMemoryNotificationRepository::new());

    let content = ContentService::new(
        posts.clone(),
        profiles.clone(),
        follows.clone(),
        notifications.clone(),
    );
    let social = SocialGraphService::new(profiles.clone(), follows, notifications);

    Fixture {
        profiles,
        content,
        social,
    }
}

async fn register(f: &Fixture, username: &str) -> Profile {
    let profile = Profile::new(
        format!("{username}@example.com"),
        username.to_string(),
        username.to_string(),
        "hash".to_string(),
    );
    f.profiles.save(profile).await.unwrap()
}

fn new_post(title: &str, visibility: Visibility, published: bool) -> NewPost {
    NewPost {
        title: title.to_string(),
        content: "First sentence. Second sentence. Third sentence.".to_string(),
        summary: None,
        visibility,
        tags: Vec::new(),
        published,
    }
}

#[tokio::test]
async fn created_slug_matches_expected_pattern() {
    let f = fixture();
    let author = register(&f, "alice").await;

    let post = f
        .content
        .create_post(author.id, new_post("Hello World!!", Visibility::Public, true))
        .await
        .unwrap();

    let suffix = post.slug.strip_prefix("hello-world-").unwrap();
    assert_eq!(suffix.len(), 8);
    assert!(suffix.chars().all(|c| c.is_ascii_hexdigit()));
}

#[tokio::test]
async fn colliding_titles_produce_distinct_slugs() {
    let f = fixture();
    let author = register(&f, "alice").await;

    let first = f
        .content
        .create_post(author.id, new_post("Same Title", Visibility::Public, true))
        .await
        .unwrap();
    let second = f
        .content
        .create_post(author.id, new_post("Same Title", Visibility::Public, true))
        .await
        .unwrap();

    assert_ne!(first.slug, second.slug);
    assert!(second.slug.starts_with("same-title-"));
}

#[tokio::test]
async fn empty_title_or_content_is_rejected() {
    let f = fixture();
    let author = register(&f, "alice").await;

    let mut post = new_post("   ", Visibility::Public, true);
    let result = f.content.create_post(author.id, post.clone()).await;
    assert!(matches!(result, Err(DomainError::Validation(_))));

    post.title = "Fine title".to_string();
    post.content = "  \n ".to_string();
    let result = f.content.create_post(author.id, post).await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn unpublished_posts_never_appear_in_public_listing() {
    let f = fixture();
    let author = register(&f, "alice").await;

    f.content
        .create_post(author.id, new_post("Hidden Draft", Visibility::Public, false))
        .await
        .unwrap();

    let all = f.content.list_public_posts(PostFilter::default()).await.unwrap();
    assert!(all.is_empty());

    let searched = f
        .content
        .list_public_posts(PostFilter {
            search: Some("hidden".to_string()),
            tag: None,
        })
        .await
        .unwrap();
    assert!(searched.is_empty());
}

#[tokio::test]
async fn private_posts_are_not_found_for_other_viewers() {
    let f = fixture();
    let author = register(&f, "alice").await;
    let other = register(&f, "bob").await;

    let post = f
        .content
        .create_post(author.id, new_post("Secret", Visibility::Private, true))
        .await
        .unwrap();

    let result = f.content.get_post_by_slug(&post.slug, Some(other.id)).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));

    let result = f.content.get_post_by_slug(&post.slug, None).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));

    let own = f
        .content
        .get_post_by_slug(&post.slug, Some(author.id))
        .await
        .unwrap();
    assert_eq!(own.id, post.id);
}

#[tokio::test]
async fn followers_posts_require_an_accepted_follow() {
    let f = fixture();
    let author = register(&f, "alice").await;
    let reader = register(&f, "bob").await;

    let post = f
        .content
        .create_post(author.id, new_post("For Followers", Visibility::Followers, true))
        .await
        .unwrap();

    // Pending request is not enough.
    let follow = f.social.request_follow(reader.id, author.id).await.unwrap();
    let result = f.content.get_post_by_slug(&post.slug, Some(reader.id)).await;
    assert!(matches!(result, Err(DomainError::NotFound { .. })));

    // Accepted follow unlocks the post.
    f.social
        .respond_to_follow(follow.id, author.id, true)
        .await
        .unwrap();
    let visible = f
        .content
        .get_post_by_slug(&post.slug, Some(reader.id))
        .await
        .unwrap();
    assert_eq!(visible.id, post.id);

    let listed = f
        .content
        .list_posts_by_author(author.id, Some(reader.id))
        .await
        .unwrap();
    assert_eq!(listed.len(), 1);
}

#[tokio::test]
async fn search_and_tag_filters_are_and_combined() {
    let f = fixture();
    let author = register(&f, "alice").await;

    let mut rust_post = new_post("Rust Async Tips", Visibility::Public, true);
    rust_post.tags = vec!["rust".to_string()];
    f.content.create_post(author.id, rust_post).await.unwrap();

    let mut food_post = new_post("Weeknight Cooking", Visibility::Public, true);
    food_post.tags = vec!["food".to_string()];
    f.content.create_post(author.id, food_post).await.unwrap();

    let by_search = f
        .content
        .list_public_posts(PostFilter {
            search: Some("RUST".to_string()),
            tag: None,
        })
        .await
        .unwrap();
    assert_eq!(by_search.len(), 1);
    assert_eq!(by_search[0].title, "Rust Async Tips");

    let by_tag = f
        .content
        .list_public_posts(PostFilter {
            search: None,
            tag: Some("food".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(by_tag.len(), 1);

    let disjoint = f
        .content
        .list_public_posts(PostFilter {
            search: Some("rust".to_string()),
            tag: Some("food".to_string()),
        })
        .await
        .unwrap();
    assert!(disjoint.is_empty());
}

#[tokio::test]
async fn only_the_author_may_update_and_slug_is_immutable() {
    let f = fixture();
    let author = register(&f, "alice").await;
    let intruder = register(&f, "mallory").await;

    let post = f
        .content
        .create_post(author.id, new_post("Original Title", Visibility::Public, true))
        .await
        .unwrap();

    let denied = f
        .content
        .update_post(
            post.id,
            intruder.id,
            PostUpdate {
                title: Some("Hijacked".to_string()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(denied, Err(DomainError::Forbidden)));

    let updated = f
        .content
        .update_post(
            post.id,
            author.id,
            PostUpdate {
                title: Some("Renamed Title".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(updated.title, "Renamed Title");
    assert_eq!(updated.slug, post.slug);
    assert!(updated.updated_at >= post.updated_at);
}

#[tokio::test]
async fn publishing_notifies_accepted_followers_once() {
    let f = fixture();
    let author = register(&f, "alice").await;
    let fan = register(&f, "bob").await;
    let lurker = register(&f, "carol").await;

    let accepted = f.social.request_follow(fan.id, author.id).await.unwrap();
    f.social
        .respond_to_follow(accepted.id, author.id, true)
        .await
        .unwrap();
    // Carol's request stays pending.
    f.social.request_follow(lurker.id, author.id).await.unwrap();

    let draft = f
        .content
        .create_post(author.id, new_post("Big News", Visibility::Public, false))
        .await
        .unwrap();
    assert!(f.social.list_notifications(fan.id).await.unwrap().is_empty());

    f.content
        .update_post(
            draft.id,
            author.id,
            PostUpdate {
                published: Some(true),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    let fan_inbox = f.social.list_notifications(fan.id).await.unwrap();
    assert_eq!(fan_inbox.len(), 1);
    assert_eq!(fan_inbox[0].kind, NotificationKind::NewPost);
    assert_eq!(fan_inbox[0].related_id, Some(draft.id));
    assert!(fan_inbox[0].message.contains("alice"));

    assert!(f.social.list_notifications(lurker.id).await.unwrap().is_empty());

    // Editing an already-published post does not fan out again.
    f.content
        .update_post(
            draft.id,
            author.id,
            PostUpdate {
                content: Some("Updated body.".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(f.social.list_notifications(fan.id).await.unwrap().len(), 1);
}

#[tokio::test]
async fn delete_is_author_only_and_immediate() {
    let f = fixture();
    let author = register(&f, "alice").await;
    let intruder = register(&f, "mallory").await;

    let post = f
        .content
        .create_post(author.id, new_post("Ephemeral", Visibility::Public, true))
        .await
        .unwrap();

    let denied = f.content.delete_post(post.id, intruder.id).await;
    assert!(matches!(denied, Err(DomainError::Forbidden)));

    f.content.delete_post(post.id, author.id).await.unwrap();
    let gone = f.content.get_post_by_slug(&post.slug, Some(author.id)).await;
    assert!(matches!(gone, Err(DomainError::NotFound { .. })));
}

#[tokio::test]
async fn following_yourself_is_rejected() {
    let f = fixture();
    let user = register(&f, "alice").await;

    let result = f.social.request_follow(user.id, user.id).await;
    assert!(matches!(result, Err(DomainError::Validation(_))));
}

#[tokio::test]
async fn duplicate_follow_conflicts_and_notifies_once() {
    let f = fixture();
    let follower = register(&f, "alice").await;
    let followee = register(&f, "bob").await;

    f.social
        .request_follow(follower.id, followee.id)
        .await
        .unwrap();
    let second = f.social.request_follow(follower.id, followee.id).await;
    assert!(matches!(second, Err(DomainError::Conflict(_))));

    let inbox = f.social.list_notifications(followee.id).await.unwrap();
    assert_eq!(inbox.len(), 1);
    assert_eq!(inbox[0].kind, NotificationKind::FollowRequest);
}

#[tokio::test]
async fn only_the_followee_may_respond() {
    let f = fixture();
    let follower = register(&f, "alice").await;
    let followee = register(&f, "bob").await;

    let follow = f
        .social
        .request_follow(follower.id, followee.id)
        .await
        .unwrap();

    let denied = f
        .social
        .respond_to_follow(follow.id, follower.id, true)
        .await;
    assert!(matches!(denied, Err(DomainError::Forbidden)));

    let accepted = f
        .social
        .respond_to_follow(follow.id, followee.id, true)
        .await
        .unwrap();
    assert_eq!(accepted.status, FollowStatus::Accepted);

    let following = f.social.list_following(follower.id).await.unwrap();
    assert_eq!(following.len(), 1);
    assert_eq!(following[0].followee_id, followee.id);
}

#[tokio::test]
async fn unread_count_always_matches_the_list() {
    let f = fixture();
    let recipient = register(&f, "bob").await;

    for name in ["alice", "carol", "dave"] {
        let follower = register(&f, name).await;
        f.social
            .request_follow(follower.id, recipient.id)
            .await
            .unwrap();
    }

    async fn check(f: &Fixture, user: uuid::Uuid) {
        let count = f.social.unread_count(user).await.unwrap();
        let unread_in_list = f
            .social
            .list_notifications(user)
            .await
            .unwrap()
            .iter()
            .filter(|n| !n.read)
            .count() as u64;
        assert_eq!(count, unread_in_list);
    }

    check(&f, recipient.id).await;
    assert_eq!(f.social.unread_count(recipient.id).await.unwrap(), 3);

    let first = f.social.list_notifications(recipient.id).await.unwrap()[0].id;
    f.social
        .mark_notification_read(first, recipient.id)
        .await
        .unwrap();
    check(&f, recipient.id).await;
    assert_eq!(f.social.unread_count(recipient.id).await.unwrap(), 2);

    // Idempotent: marking again changes nothing.
    f.social
        .mark_notification_read(first, recipient.id)
        .await
        .unwrap();
    assert_eq!(f.social.unread_count(recipient.id).await.unwrap(), 2);

    f.social.mark_all_read(recipient.id).await.unwrap();
    check(&f, recipient.id).await;
    assert_eq!(f.social.unread_count(recipient.id).await.unwrap(), 0);

    // And mark_all_read is idempotent too.
    f.social.mark_all_read(recipient.id).await.unwrap();
    assert_eq!(f.social.unread_count(recipient.id).await.unwrap(), 0);
}

#[tokio::test]
async fn notifications_are_scoped_to_their_recipient() {
    let f = fixture();
    let follower = register(&f, "alice").await;
    let followee = register(&f, "bob").await;
    let stranger = register(&f, "mallory").await;

    f.social
        .request_follow(follower.id, followee.id)
        .await
        .unwrap();
    let notification = f.social.list_notifications(followee.id).await.unwrap()[0].id;

    let denied = f
        .social
        .mark_notification_read(notification, stranger.id)
        .await;
    assert!(matches!(denied, Err(DomainError::Forbidden)));
}
