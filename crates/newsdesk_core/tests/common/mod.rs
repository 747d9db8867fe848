#![allow(dead_code)]

use newsdesk_core::{Article, ArticleId, ArticleRepository, Clock, RepoError};
use std::collections::HashSet;
use std::sync::atomic::{AtomicI64, Ordering};

/// Clock that always returns the same instant.
pub struct FixedClock(pub i64);

impl Clock for FixedClock {
    fn now_micros(&self) -> i64 {
        self.0
    }
}

/// Clock that advances by `step` on every reading.
pub struct SteppingClock {
    next: AtomicI64,
    step: i64,
}

impl SteppingClock {
    pub fn new(start: i64, step: i64) -> Self {
        Self {
            next: AtomicI64::new(start),
            step,
        }
    }
}

impl Clock for SteppingClock {
    fn now_micros(&self) -> i64 {
        self.next.fetch_add(self.step, Ordering::SeqCst)
    }
}

pub fn create(repo: &impl ArticleRepository, title: &str, content: &str) -> Article {
    let mut article = Article::new(title, content);
    repo.create(&mut article).unwrap();
    article
}

pub fn id_of(article: &Article) -> String {
    article.id.unwrap().to_string()
}

pub fn seed_languages(repo: &impl ArticleRepository) {
    for (title, content) in [
        ("Golang News", "Go programming language"),
        ("Python News", "Python programming language"),
        ("Java News", "Java programming language"),
    ] {
        create(repo, title, content);
    }
}

pub fn assert_create_round_trip(repo: &impl ArticleRepository) {
    let created = create(repo, "Test News", "Test Content for round trip");
    assert!(created.is_persisted());
    assert!(created.created_at > 0);
    assert_eq!(created.created_at, created.updated_at);

    let loaded = repo.get_by_id(&id_of(&created)).unwrap();
    assert_eq!(loaded, created);
}

pub fn assert_update_preserves_identity(repo: &impl ArticleRepository) {
    let original = create(repo, "Draft title", "Draft content body");

    let mut edited = original.clone();
    edited.title = "Updated Title".to_string();
    edited.content = "Updated Content body".to_string();
    repo.update(&mut edited).unwrap();

    let loaded = repo.get_by_id(&id_of(&original)).unwrap();
    assert_eq!(loaded.id, original.id);
    assert_eq!(loaded.created_at, original.created_at);
    assert_eq!(loaded.title, "Updated Title");
    assert_eq!(loaded.content, "Updated Content body");
    assert!(loaded.updated_at > original.updated_at);
    assert_eq!(loaded.updated_at, edited.updated_at);
}

pub fn assert_update_of_unknown_id_is_noop(repo: &impl ArticleRepository) {
    let existing = create(repo, "Existing", "Existing content");

    let mut ghost = Article::new("Ghost title", "Ghost content body");
    ghost.id = Some(ArticleId::new_v4());
    let before = ghost.clone();
    repo.update(&mut ghost).unwrap();
    assert_eq!(ghost, before);

    let mut unsaved = Article::new("Unsaved", "Never stored content");
    repo.update(&mut unsaved).unwrap();
    assert_eq!(unsaved.updated_at, 0);

    let page = repo.get_all(1, 10).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items, vec![existing]);
}

/// `creator` stamps with a clock ahead of `late_editor`; both share storage.
pub fn assert_update_never_precedes_creation(
    creator: &impl ArticleRepository,
    late_editor: &impl ArticleRepository,
) {
    let mut article = create(creator, "Skewed clock", "Edited from a lagging clock");
    let created_at = article.created_at;

    article.title = "Skewed clock, edited".to_string();
    late_editor.update(&mut article).unwrap();
    assert_eq!(article.updated_at, created_at);

    let loaded = late_editor.get_by_id(&id_of(&article)).unwrap();
    assert_eq!(loaded.title, "Skewed clock, edited");
    assert_eq!(loaded.created_at, created_at);
    assert_eq!(loaded.updated_at, created_at);
}

pub fn assert_delete_is_idempotent(repo: &impl ArticleRepository) {
    let created = create(repo, "Short lived", "Deleted right away");
    let id = id_of(&created);

    repo.delete(&id).unwrap();
    repo.delete(&id).unwrap();

    let err = repo.get_by_id(&id).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(missing) if Some(missing) == created.id));
}

pub fn assert_invalid_ids_are_rejected(repo: &impl ArticleRepository) {
    let err = repo.get_by_id("not-a-valid-id").unwrap_err();
    assert!(matches!(err, RepoError::InvalidId(ref raw) if raw == "not-a-valid-id"));

    let err = repo.delete("").unwrap_err();
    assert!(matches!(err, RepoError::InvalidId(_)));

    let missing = ArticleId::new_v4().to_string();
    let err = repo.get_by_id(&missing).unwrap_err();
    assert!(matches!(err, RepoError::NotFound(_)));
}

pub fn assert_fifteen_article_scenario(repo: &impl ArticleRepository) {
    for i in 0..15 {
        let suffix = char::from(b'A' + i);
        create(
            repo,
            &format!("Test News {suffix}"),
            &format!("Test Content {suffix}"),
        );
    }

    let first = repo.get_all(1, 10).unwrap();
    assert_eq!(first.items.len(), 10);
    assert_eq!(first.total, 15);
    assert!(first.has_next());

    let second = repo.get_all(2, 10).unwrap();
    assert_eq!(second.items.len(), 5);
    assert_eq!(second.total, 15);
    assert!(!second.has_next());

    let oldest_on_first = first.items.iter().map(|a| a.created_at).min().unwrap();
    let newest_on_second = second.items.iter().map(|a| a.created_at).max().unwrap();
    assert!(oldest_on_first > newest_on_second);

    for window in first.items.windows(2) {
        assert!(window[0].created_at > window[1].created_at);
    }
    assert_eq!(first.items[0].title, "Test News O");
    assert_eq!(second.items[4].title, "Test News A");
}

pub fn assert_pagination_is_exhaustive(repo: &impl ArticleRepository, count: usize, limit: u32) {
    let mut expected = HashSet::new();
    for i in 0..count {
        let created = create(repo, &format!("Item {i:03}"), "Paged content body");
        expected.insert(created.id.unwrap());
    }

    let mut seen = HashSet::new();
    let mut returned = 0;
    let mut page = 1;
    loop {
        let result = repo.get_all(page, limit).unwrap();
        assert_eq!(result.total, count as u64);
        if result.items.is_empty() {
            break;
        }
        assert!(result.items.len() <= limit as usize);
        returned += result.items.len();
        seen.extend(result.items.iter().map(|a| a.id.unwrap()));
        page += 1;
    }

    assert_eq!(returned, count);
    assert_eq!(seen, expected);
}

pub fn assert_search_matches_title_or_content(repo: &impl ArticleRepository) {
    seed_languages(repo);

    let golang = repo.search("golang", 1, 10).unwrap();
    assert_eq!(golang.total, 1);
    assert_eq!(golang.items.len(), 1);
    assert_eq!(golang.items[0].title, "Golang News");

    let programming = repo.search("programming", 1, 10).unwrap();
    assert_eq!(programming.total, 3);
    assert_eq!(programming.items.len(), 3);

    let everything = repo.search("", 1, 10).unwrap();
    assert_eq!(everything.total, 3);
    assert_eq!(everything.items.len(), 3);

    let upper = repo.search("PYTHON", 1, 10).unwrap();
    assert_eq!(upper.total, 1);
    assert_eq!(upper.items[0].title, "Python News");

    let none = repo.search("rust", 1, 10).unwrap();
    assert_eq!(none.total, 0);
    assert!(none.items.is_empty());
}

pub fn assert_search_total_counts_all_matches(repo: &impl ArticleRepository) {
    for i in 0..7 {
        create(repo, &format!("Weekly digest {i}"), "Summary of the week");
    }
    create(repo, "Unrelated", "Something else entirely");

    let page = repo.search("digest", 2, 3).unwrap();
    assert_eq!(page.total, 7);
    assert_eq!(page.items.len(), 3);
    assert_eq!(page.items[0].title, "Weekly digest 3");

    let past_end = repo.search("digest", 9, 3).unwrap();
    assert_eq!(past_end.total, 7);
    assert!(past_end.items.is_empty());
}

pub fn assert_zero_page_or_limit_is_rejected(repo: &impl ArticleRepository) {
    assert!(matches!(
        repo.get_all(0, 10),
        Err(RepoError::InvalidPage { page: 0, limit: 10 })
    ));
    assert!(matches!(
        repo.search("x", 1, 0),
        Err(RepoError::InvalidPage { page: 1, limit: 0 })
    ));
}

pub fn assert_empty_store_lists_nothing(repo: &impl ArticleRepository) {
    let page = repo.get_all(1, 10).unwrap();
    assert!(page.items.is_empty());
    assert_eq!(page.total, 0);
    assert_eq!(page.total_pages(), 0);
}
