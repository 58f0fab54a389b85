mod common;

use api::chat::{refresh_unread, UnreadTarget};
use api::{ApiClient, ApiError, PageQuery};
use store::{SortDirection, UnreadCounter};

#[tokio::test]
async fn test_unread_count_accepts_both_shapes() {
    let client = ApiClient::new(common::spawn_backend().await);

    assert_eq!(client.unread_count(1).await.unwrap(), 4);
    assert_eq!(client.unread_count(2).await.unwrap(), 7);
}

#[tokio::test]
async fn test_unread_count_rejects_unknown_shape() {
    let client = ApiClient::new(common::spawn_backend().await);

    assert!(matches!(client.unread_count(4).await, Err(ApiError::Decode(_))));
}

#[tokio::test]
async fn test_failed_unread_fetch_keeps_badge_value() {
    let client = ApiClient::new(common::spawn_backend().await);
    let mut counter = UnreadCounter::new();

    let ticket = counter.begin();
    counter.complete(ticket, client.unread_count(3).await);
    assert_eq!(counter.count(), 0);

    let ticket = counter.begin();
    counter.complete(ticket, client.unread_count(2).await);
    assert_eq!(counter.count(), 7);

    let ticket = counter.begin();
    counter.complete(ticket, client.unread_count(3).await);
    assert_eq!(counter.count(), 7);
}

#[tokio::test]
async fn test_refresh_unread_applies_and_keeps_on_failure() {
    let client = ApiClient::new(common::spawn_backend().await);
    let mut counter = UnreadCounter::new();

    assert!(refresh_unread(&client, &mut counter, 1).await);
    assert_eq!(counter.count(), 4);

    assert!(!refresh_unread(&client, &mut counter, 4).await);
    assert_eq!(counter.count(), 4);
}

#[tokio::test]
async fn test_refresh_unread_drops_overtaken_response() {
    let client = ApiClient::new(common::spawn_backend().await);
    let mut counter = UnreadCounter::new();

    let (first, second) = {
        let cell = std::cell::RefCell::new(&mut counter);
        tokio::join!(
            refresh_unread(&client, RefTarget(&cell), 1),
            refresh_unread(&client, RefTarget(&cell), 2),
        )
    };

    assert!(!first);
    assert!(second);
    assert_eq!(counter.count(), 7);
}

struct RefTarget<'a, 'b>(&'a std::cell::RefCell<&'b mut UnreadCounter>);

impl UnreadTarget for RefTarget<'_, '_> {
    fn update<R>(&mut self, f: impl FnOnce(&mut UnreadCounter) -> R) -> R {
        f(&mut **self.0.borrow_mut())
    }
}

#[tokio::test]
async fn test_unreachable_backend_is_transport_error() {
    let client = ApiClient::new("http://127.0.0.1:1");

    let err = client.me().await.unwrap_err();
    assert!(matches!(err, ApiError::Transport(_)));
}

#[tokio::test]
async fn test_me_without_token_is_none() {
    let client = ApiClient::new(common::spawn_backend().await);

    assert!(client.me().await.unwrap().is_none());
}

#[tokio::test]
async fn test_fetch_page_sends_query() {
    let client = ApiClient::new(common::spawn_backend().await);
    let query = PageQuery::new()
        .page(3)
        .size(10)
        .sort_by("likes", SortDirection::Asc)
        .filter("keyword", "rust");

    let page = client
        .fetch_page::<String>("/api/community/posts", &query)
        .await
        .unwrap();

    assert_eq!(page.items, vec!["rust:likes,asc:3".to_string()]);
    assert_eq!(page.total_pages(), 3);
    assert!(!page.has_next());
}

#[tokio::test]
async fn test_upload_flow() {
    let client = ApiClient::new(common::spawn_backend().await).with_token(Some(common::VALID_TOKEN.to_string()));

    let target = client.upload_url("intro.mp4", "video/mp4").await.unwrap();
    let file_url = client
        .put_upload(&target, vec![0u8; 16], "video/mp4")
        .await
        .unwrap();

    assert_eq!(file_url, "https://cdn.codeflix.kr/videos/intro.mp4");
}

#[tokio::test]
async fn test_trailing_slash_in_base_url() {
    let base = common::spawn_backend().await;
    let client = ApiClient::new(format!("{base}/"));

    assert_eq!(client.base_url(), base);
    assert_eq!(client.unread_count(1).await.unwrap(), 4);
}
