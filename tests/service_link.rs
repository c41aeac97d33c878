use link_shortener::application::services::LinkService;
use link_shortener::domain::pagination::Pagination;
use link_shortener::error::AppError;
use link_shortener::infrastructure::persistence::InMemoryLinkRepository;
use std::sync::Arc;

fn service() -> Arc<LinkService<InMemoryLinkRepository>> {
    Arc::new(LinkService::new(
        Arc::new(InMemoryLinkRepository::new()),
        "http://localhost:8080",
    ))
}

#[tokio::test]
async fn test_concurrent_create_same_short_name() {
    let service = service();

    let (a, b) = tokio::join!(
        service.create_link("https://a.com", "same"),
        service.create_link("https://b.com", "same"),
    );

    let results = [a, b];
    assert_eq!(results.iter().filter(|r| r.is_ok()).count(), 1);
    assert!(
        results
            .iter()
            .any(|r| matches!(r, Err(AppError::ShortNameExists)))
    );
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_parallel_create_same_short_name() {
    let service = service();

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let service = Arc::clone(&service);
            tokio::spawn(async move {
                service
                    .create_link(&format!("https://example{i}.com"), "shared")
                    .await
            })
        })
        .collect();

    let mut created = 0;
    for handle in handles {
        match handle.await.unwrap() {
            Ok(_) => created += 1,
            Err(e) => assert!(matches!(e, AppError::ShortNameExists), "unexpected {e:?}"),
        }
    }

    assert_eq!(created, 1);
}

#[tokio::test]
async fn test_generated_short_names_are_distinct() {
    let service = service();

    for _ in 0..50 {
        service.create_link("https://example.com", "").await.unwrap();
    }

    let (links, total) = service.get_all_links(Pagination::new(0, 100)).await.unwrap();
    assert_eq!(total, 50);

    let mut names: Vec<_> = links.iter().map(|l| l.short_name.clone()).collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 50);
}

#[tokio::test]
async fn test_record_visit_for_deleted_link_fails() {
    let service = service();
    let link = service
        .create_link("https://example.com", "gone")
        .await
        .unwrap();

    service.delete_link(link.id).await.unwrap();

    let result = service
        .record_visit(link.id, "127.0.0.1", "", "", 302)
        .await;
    assert!(result.is_err());
}
