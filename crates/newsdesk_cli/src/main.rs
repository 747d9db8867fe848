//! CLI smoke entry point.
//!
//! # Responsibility
//! - Verify `newsdesk_core` wiring: config, logging, storage and service.
//! - Keep output deterministic apart from generated ids and timestamps.
//!
//! Usage: `newsdesk_cli [page] [limit]`. Missing or unparseable values fall
//! back to page 1 and the configured page size.

use log::info;
use newsdesk_core::db::{open_db, open_db_in_memory};
use newsdesk_core::{
    init_logging, Article, ArticlePage, ArticleService, ArticleStore, NewsdeskConfig, PageRequest,
    SqliteArticleCollection,
};
use std::error::Error;
use std::process::ExitCode;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("newsdesk error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>> {
    println!("newsdesk_core ping={}", newsdesk_core::ping());
    println!("newsdesk_core version={}", newsdesk_core::core_version());

    let config = NewsdeskConfig::from_env()?;
    let args = std::env::args().skip(1).collect::<Vec<_>>();
    let request = PageRequest::from_query(
        args.first().map(String::as_str),
        args.get(1).map(String::as_str),
        config.default_page_size,
    );
    if let Some(log_dir) = config.log_dir.as_deref() {
        init_logging(&config.log_level, log_dir)?;
    }

    let conn = match config.db_path.as_deref() {
        Some(path) => open_db(path)?,
        None => open_db_in_memory()?,
    };
    let service = ArticleService::new(ArticleStore::new(SqliteArticleCollection::new(&conn)));

    let mut article = Article::new("Smoke check", "Written by the newsdesk CLI probe.");
    article.validate()?;
    service.create_article(&mut article)?;
    info!("event=cli_smoke module=cli status=ok step=create");
    println!(
        "created id={} created_at={}",
        article.id.map(|id| id.to_string()).unwrap_or_default(),
        article.created_at
    );

    let listed = service.list_articles(request.page, request.limit)?;
    print_page("list", &listed);

    let found = service.search_articles("smoke", request.page, request.limit)?;
    print_page("search", &found);

    Ok(())
}

fn print_page(label: &str, page: &ArticlePage) {
    println!(
        "{label} page={} items={} total={} pages={}",
        page.page,
        page.items.len(),
        page.total,
        page.total_pages()
    );
}
