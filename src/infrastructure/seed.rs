//! Demo data seeding, enabled with SEED_DEMO=1

use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait, Set};

use crate::models::book::BookGenre;
use crate::models::{author, book, publisher};

pub async fn seed_demo_data(db: &DatabaseConnection) -> Result<(), DbErr> {
    if author::Entity::find().count(db).await? > 0 {
        tracing::info!("Database already has authors, skipping demo seed");
        return Ok(());
    }

    let now = chrono::Utc::now().to_rfc3339();

    let author = author::ActiveModel {
        first_name: Set("John".to_string()),
        last_name: Set("Doe".to_string()),
        email: Set("john@gmail.com".to_string()),
        country: Set("Rwanda".to_string()),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    let publisher = publisher::ActiveModel {
        name: Set("Amazon".to_string()),
        address: Set("USA".to_string()),
        website: Set("https://amazon.com".to_string()),
        created_at: Set(now.clone()),
        updated_at: Set(now.clone()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    book::ActiveModel {
        title: Set("Master System Design".to_string()),
        isbn: Set("5155172381".to_string()),
        publication_year: Set(2026),
        available_copies: Set(200),
        price: Set(49.9),
        genre: Set(BookGenre::Science),
        author_id: Set(author.id),
        publisher_id: Set(publisher.id),
        created_at: Set(now.clone()),
        updated_at: Set(now),
        ..Default::default()
    }
    .insert(db)
    .await?;

    tracing::info!("Seeded demo author, publisher and book");
    Ok(())
}
