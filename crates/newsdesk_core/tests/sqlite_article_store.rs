mod common;

use common::{create, FixedClock, SteppingClock};
use newsdesk_core::db::open_db_in_memory;
use newsdesk_core::{
    Article, ArticleRepository, ArticleService, ArticleStore, RepoError, SqliteArticleCollection,
};
use rusqlite::params;

#[test]
fn create_and_get_roundtrip() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    common::assert_create_round_trip(&store);
}

#[test]
fn update_preserves_id_and_created_at() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    common::assert_update_preserves_identity(&store);
}

#[test]
fn update_of_unknown_id_is_silent_noop() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    common::assert_update_of_unknown_id_is_noop(&store);
}

#[test]
fn update_from_lagging_clock_keeps_updated_at_at_creation() {
    let conn = open_db_in_memory().unwrap();
    let creator = ArticleStore::with_clock(SqliteArticleCollection::new(&conn), FixedClock(2_000));
    let late_editor =
        ArticleStore::with_clock(SqliteArticleCollection::new(&conn), FixedClock(1_000));
    common::assert_update_never_precedes_creation(&creator, &late_editor);
}

#[test]
fn delete_is_idempotent() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    common::assert_delete_is_idempotent(&store);
}

#[test]
fn invalid_id_is_not_conflated_with_not_found() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    common::assert_invalid_ids_are_rejected(&store);
}

#[test]
fn fifteen_articles_split_over_two_pages() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    common::assert_fifteen_article_scenario(&store);
}

#[test]
fn paging_until_empty_returns_every_article_once() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    common::assert_pagination_is_exhaustive(&store, 23, 5);
}

#[test]
fn search_matches_title_or_content() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    common::assert_search_matches_title_or_content(&store);
}

#[test]
fn search_total_counts_all_matches() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    common::assert_search_total_counts_all_matches(&store);
}

#[test]
fn zero_page_or_limit_is_rejected() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    common::assert_zero_page_or_limit_is_rejected(&store);
}

#[test]
fn empty_store_lists_nothing() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    common::assert_empty_store_lists_nothing(&store);
}

#[test]
fn created_at_ties_go_to_later_insertion() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::with_clock(
        SqliteArticleCollection::new(&conn),
        FixedClock(1_700_000_000_000_000),
    );

    let first = create(&store, "First", "Same instant one");
    let second = create(&store, "Second", "Same instant two");
    let third = create(&store, "Third", "Same instant three");
    assert_eq!(first.created_at, third.created_at);

    let page = store.get_all(1, 10).unwrap();
    let ids = page.items.iter().map(|a| a.id).collect::<Vec<_>>();
    assert_eq!(ids, vec![third.id, second.id, first.id]);
}

#[test]
fn listing_orders_by_created_at_not_update_time() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::with_clock(
        SqliteArticleCollection::new(&conn),
        SteppingClock::new(1_000, 10),
    );

    let mut older = create(&store, "Older", "Created first of two");
    let newer = create(&store, "Newer", "Created second of two");

    older.title = "Older, edited".to_string();
    store.update(&mut older).unwrap();
    assert!(older.updated_at > newer.updated_at);

    let page = store.get_all(1, 10).unwrap();
    assert_eq!(page.items[0].id, newer.id);
    assert_eq!(page.items[1].id, older.id);
    assert_eq!(page.items[1].created_at, 1_000);
}

#[test]
fn search_is_unicode_case_insensitive() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    create(&store, "ÜBER Nachrichten", "Meldungen des Tages");
    create(&store, "Other news", "Nothing to see here");

    let page = store.search("über", 1, 10).unwrap();
    assert_eq!(page.total, 1);
    assert_eq!(page.items[0].title, "ÜBER Nachrichten");
}

#[test]
fn search_treats_pattern_characters_literally() {
    let conn = open_db_in_memory().unwrap();
    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    create(&store, "100% coverage", "Percent signs are literal");
    create(&store, "1000 coverage", "No percent sign in here");
    create(&store, "snake_case names", "Underscores are literal too");

    assert_eq!(store.search("100%", 1, 10).unwrap().total, 1);
    assert_eq!(store.search("e_c", 1, 10).unwrap().total, 1);
    assert_eq!(store.search(".*", 1, 10).unwrap().total, 0);
}

#[test]
fn undecodable_row_is_reported_as_invalid_data() {
    let conn = open_db_in_memory().unwrap();
    conn.execute(
        "INSERT INTO articles (id, title, content, created_at, updated_at)
         VALUES (?1, 'Broken', 'Broken row content', 1, 1);",
        params!["not-a-uuid"],
    )
    .unwrap();

    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    let err = store.get_all(1, 10).unwrap_err();
    assert!(matches!(err, RepoError::InvalidData(_)));
}

#[test]
fn missing_table_surfaces_as_storage_error() {
    let conn = open_db_in_memory().unwrap();
    conn.execute_batch("DROP TABLE articles;").unwrap();

    let store = ArticleStore::new(SqliteArticleCollection::new(&conn));
    let mut article = Article::new("Lost write", "Table is gone by now");
    let err = store.create(&mut article).unwrap_err();
    assert!(matches!(err, RepoError::Storage(_)));
    assert!(!article.is_persisted());

    let err = store.get_all(1, 10).unwrap_err();
    assert!(matches!(err, RepoError::Storage(_)));
}

#[test]
fn service_wraps_store_calls() {
    let conn = open_db_in_memory().unwrap();
    let service = ArticleService::new(ArticleStore::new(SqliteArticleCollection::new(&conn)));

    let mut article = Article::new("From service", "Created through the service");
    service.create_article(&mut article).unwrap();
    let id = article.id.unwrap().to_string();

    let fetched = service.get_article(&id).unwrap();
    assert_eq!(fetched.title, "From service");

    article.content = "Edited through the service".to_string();
    service.update_article(&mut article).unwrap();
    assert_eq!(
        service.get_article(&id).unwrap().content,
        "Edited through the service"
    );

    assert_eq!(service.list_articles(1, 10).unwrap().total, 1);
    assert_eq!(service.search_articles("service", 1, 10).unwrap().total, 1);

    service.delete_article(&id).unwrap();
    assert!(matches!(
        service.get_article(&id),
        Err(RepoError::NotFound(_))
    ));
}
