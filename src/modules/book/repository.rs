//! Persistence for the `book` table.

use anyhow::Context;
use async_trait::async_trait;
use erudio_db::{Page, Pageable};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use super::models::Book;

const COLUMNS: &str = "id, author, launch_date, price, title";

#[async_trait]
pub trait BookRepository: Send + Sync {
    /// Insert when `id` is 0, otherwise replace the stored row.
    async fn save(&self, book: &Book) -> anyhow::Result<Book>;

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Book>>;

    /// Page ordered by title.
    async fn find_all(&self, pageable: Pageable) -> anyhow::Result<Page<Book>>;

    /// Returns `false` when no row has `id`.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}

pub struct SqliteBookRepository {
    pool: SqlitePool,
}

impl SqliteBookRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_book(row: &SqliteRow) -> Book {
    Book {
        id: row.get("id"),
        author: row.get("author"),
        launch_date: row.get("launch_date"),
        price: row.get("price"),
        title: row.get("title"),
    }
}

#[async_trait]
impl BookRepository for SqliteBookRepository {
    async fn save(&self, book: &Book) -> anyhow::Result<Book> {
        let id = (book.id > 0).then_some(book.id);
        let row = sqlx::query(&format!(
            "INSERT INTO book (id, author, launch_date, price, title)
             VALUES (?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                 author = excluded.author,
                 launch_date = excluded.launch_date,
                 price = excluded.price,
                 title = excluded.title
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&book.author)
        .bind(book.launch_date)
        .bind(book.price)
        .bind(&book.title)
        .fetch_one(&self.pool)
        .await
        .context("failed to save book")?;

        Ok(row_to_book(&row))
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Book>> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM book WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("failed to load book {}", id))?;

        Ok(row.as_ref().map(row_to_book))
    }

    async fn find_all(&self, pageable: Pageable) -> anyhow::Result<Page<Book>> {
        let direction = pageable.direction.as_sql();
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM book
             ORDER BY title {direction}, id {direction}
             LIMIT ? OFFSET ?"
        ))
        .bind(pageable.limit())
        .bind(pageable.offset())
        .fetch_all(&self.pool)
        .await
        .context("failed to list books")?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM book")
            .fetch_one(&self.pool)
            .await
            .context("failed to count books")?;

        Ok(Page::new(
            rows.iter().map(row_to_book).collect(),
            pageable,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM book WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to delete book {}", id))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use erudio_db::SortDirection;

    async fn repository() -> SqliteBookRepository {
        let pool = erudio_db::connect_in_memory().await.unwrap();
        sqlx::raw_sql(super::super::MIGRATION_SQL)
            .execute(&pool)
            .await
            .unwrap();
        SqliteBookRepository::new(pool)
    }

    fn new_book(title: &str) -> Book {
        Book {
            id: 0,
            author: "Michael C. Feathers".to_string(),
            launch_date: NaiveDate::from_ymd_opt(2017, 11, 29).unwrap(),
            price: 49.0,
            title: title.to_string(),
        }
    }

    #[tokio::test]
    async fn save_round_trips_date_and_price() {
        let repo = repository().await;
        let created = repo.save(&new_book("Refactoring")).await.unwrap();
        let loaded = repo.find_by_id(created.id).await.unwrap().unwrap();

        assert_eq!(loaded.launch_date, NaiveDate::from_ymd_opt(2017, 11, 29).unwrap());
        assert_eq!(loaded.price, 49.0);
        assert_eq!(loaded.title, "Refactoring");
    }

    #[tokio::test]
    async fn find_all_sorts_by_title() {
        let repo = repository().await;
        for title in ["Clean Code", "Agile", "Refactoring"] {
            repo.save(&new_book(title)).await.unwrap();
        }

        let page = repo
            .find_all(Pageable::new(0, 10, SortDirection::Asc))
            .await
            .unwrap();
        let titles: Vec<&str> = page.content.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Agile", "Clean Code", "Refactoring"]);

        let page = repo
            .find_all(Pageable::new(0, 1, SortDirection::Desc))
            .await
            .unwrap();
        assert_eq!(page.content[0].title, "Refactoring");
        assert_eq!(page.total_pages(), 3);
    }

    #[tokio::test]
    async fn delete_reports_missing_rows() {
        let repo = repository().await;
        let created = repo.save(&new_book("Agile")).await.unwrap();
        assert!(repo.delete(created.id).await.unwrap());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
