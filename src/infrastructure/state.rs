//! Application state containing repositories and shared resources

use sea_orm::DatabaseConnection;
use std::sync::Arc;

use crate::domain::{AuthorRepository, BookRepository, PublisherRepository};
use crate::infrastructure::{
    SeaOrmAuthorRepository, SeaOrmBookRepository, SeaOrmPublisherRepository,
};
use crate::services::CatalogService;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    db: DatabaseConnection,
    /// Author repository (direct intake endpoints)
    pub author_repo: Arc<dyn AuthorRepository>,
    /// Publisher repository (direct intake endpoints)
    pub publisher_repo: Arc<dyn PublisherRepository>,
    /// The catalog service orchestrating book operations
    pub catalog: Arc<CatalogService>,
}

impl AppState {
    /// Create a new AppState with all repositories and services wired up
    pub fn new(db: DatabaseConnection) -> Self {
        let book_repo: Arc<dyn BookRepository> = Arc::new(SeaOrmBookRepository::new(db.clone()));
        let author_repo: Arc<dyn AuthorRepository> =
            Arc::new(SeaOrmAuthorRepository::new(db.clone()));
        let publisher_repo: Arc<dyn PublisherRepository> =
            Arc::new(SeaOrmPublisherRepository::new(db.clone()));

        let catalog = Arc::new(CatalogService::new(
            book_repo,
            author_repo.clone(),
            publisher_repo.clone(),
        ));

        Self {
            db,
            author_repo,
            publisher_repo,
            catalog,
        }
    }

    pub fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}
