//! Persistence for the `person` table.

use anyhow::Context;
use async_trait::async_trait;
use erudio_db::{Page, Pageable};
use sqlx::{sqlite::SqliteRow, Row, SqlitePool};

use super::models::Person;

const COLUMNS: &str = "id, first_name, last_name, address, gender, enabled";

#[async_trait]
pub trait PersonRepository: Send + Sync {
    /// Insert when `id` is 0 (or unknown), otherwise replace the stored row.
    async fn save(&self, person: &Person) -> anyhow::Result<Person>;

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Person>>;

    /// Page ordered by first name.
    async fn find_all(&self, pageable: Pageable) -> anyhow::Result<Page<Person>>;

    /// Case-insensitive substring match on first name.
    async fn find_by_first_name(
        &self,
        first_name: &str,
        pageable: Pageable,
    ) -> anyhow::Result<Page<Person>>;

    /// Returns `false` when no row has `id`.
    async fn disable(&self, id: i64) -> anyhow::Result<bool>;

    /// Returns `false` when no row has `id`.
    async fn delete(&self, id: i64) -> anyhow::Result<bool>;
}

pub struct SqlitePersonRepository {
    pool: SqlitePool,
}

impl SqlitePersonRepository {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

fn row_to_person(row: &SqliteRow) -> Person {
    Person {
        id: row.get("id"),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        address: row.get("address"),
        gender: row.get("gender"),
        enabled: row.get("enabled"),
    }
}

/// Escape `LIKE` wildcards so user input matches literally.
fn like_pattern(fragment: &str) -> String {
    let escaped = fragment
        .replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_");
    format!("%{}%", escaped.to_lowercase())
}

#[async_trait]
impl PersonRepository for SqlitePersonRepository {
    async fn save(&self, person: &Person) -> anyhow::Result<Person> {
        let id = (person.id > 0).then_some(person.id);
        let row = sqlx::query(&format!(
            "INSERT INTO person (id, first_name, last_name, address, gender, enabled)
             VALUES (?, ?, ?, ?, ?, ?)
             ON CONFLICT(id) DO UPDATE SET
                 first_name = excluded.first_name,
                 last_name = excluded.last_name,
                 address = excluded.address,
                 gender = excluded.gender,
                 enabled = excluded.enabled
             RETURNING {COLUMNS}"
        ))
        .bind(id)
        .bind(&person.first_name)
        .bind(&person.last_name)
        .bind(&person.address)
        .bind(&person.gender)
        .bind(person.enabled)
        .fetch_one(&self.pool)
        .await
        .context("failed to save person")?;

        Ok(row_to_person(&row))
    }

    async fn find_by_id(&self, id: i64) -> anyhow::Result<Option<Person>> {
        let row = sqlx::query(&format!("SELECT {COLUMNS} FROM person WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .with_context(|| format!("failed to load person {}", id))?;

        Ok(row.as_ref().map(row_to_person))
    }

    async fn find_all(&self, pageable: Pageable) -> anyhow::Result<Page<Person>> {
        let direction = pageable.direction.as_sql();
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM person
             ORDER BY first_name {direction}, id {direction}
             LIMIT ? OFFSET ?"
        ))
        .bind(pageable.limit())
        .bind(pageable.offset())
        .fetch_all(&self.pool)
        .await
        .context("failed to list people")?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM person")
            .fetch_one(&self.pool)
            .await
            .context("failed to count people")?;

        Ok(Page::new(
            rows.iter().map(row_to_person).collect(),
            pageable,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn find_by_first_name(
        &self,
        first_name: &str,
        pageable: Pageable,
    ) -> anyhow::Result<Page<Person>> {
        let pattern = like_pattern(first_name);
        let direction = pageable.direction.as_sql();
        let rows = sqlx::query(&format!(
            "SELECT {COLUMNS} FROM person
             WHERE LOWER(first_name) LIKE ? ESCAPE '\\'
             ORDER BY first_name {direction}, id {direction}
             LIMIT ? OFFSET ?"
        ))
        .bind(&pattern)
        .bind(pageable.limit())
        .bind(pageable.offset())
        .fetch_all(&self.pool)
        .await
        .context("failed to search people by first name")?;

        let total: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM person WHERE LOWER(first_name) LIKE ? ESCAPE '\\'",
        )
        .bind(&pattern)
        .fetch_one(&self.pool)
        .await
        .context("failed to count people by first name")?;

        Ok(Page::new(
            rows.iter().map(row_to_person).collect(),
            pageable,
            u64::try_from(total).unwrap_or_default(),
        ))
    }

    async fn disable(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("UPDATE person SET enabled = 0 WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to disable person {}", id))?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete(&self, id: i64) -> anyhow::Result<bool> {
        let result = sqlx::query("DELETE FROM person WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .with_context(|| format!("failed to delete person {}", id))?;

        Ok(result.rows_affected() > 0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use erudio_db::SortDirection;

    async fn repository() -> SqlitePersonRepository {
        let pool = erudio_db::connect_in_memory().await.unwrap();
        sqlx::raw_sql(super::super::MIGRATION_SQL)
            .execute(&pool)
            .await
            .unwrap();
        SqlitePersonRepository::new(pool)
    }

    fn new_person(first_name: &str) -> Person {
        Person {
            id: 0,
            first_name: first_name.to_string(),
            last_name: "Tester".to_string(),
            address: "Somewhere".to_string(),
            gender: "Female".to_string(),
            enabled: true,
        }
    }

    #[tokio::test]
    async fn save_assigns_id_then_updates_in_place() {
        let repo = repository().await;
        let created = repo.save(&new_person("Ada")).await.unwrap();
        assert!(created.id > 0);

        let mut changed = created.clone();
        changed.last_name = "Lovelace".to_string();
        let updated = repo.save(&changed).await.unwrap();
        assert_eq!(updated.id, created.id);
        assert_eq!(updated.last_name, "Lovelace");

        let page = repo.find_all(Pageable::default()).await.unwrap();
        assert_eq!(page.total_elements, 1);
    }

    #[tokio::test]
    async fn find_all_pages_sorted_by_first_name() {
        let repo = repository().await;
        for name in ["Carla", "Ana", "Bruno", "Diego", "Elisa"] {
            repo.save(&new_person(name)).await.unwrap();
        }

        let page = repo
            .find_all(Pageable::new(1, 2, SortDirection::Asc))
            .await
            .unwrap();
        let names: Vec<&str> = page.content.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(names, vec!["Carla", "Diego"]);
        assert_eq!(page.total_elements, 5);
        assert_eq!(page.total_pages(), 3);

        let page = repo
            .find_all(Pageable::new(0, 2, SortDirection::Desc))
            .await
            .unwrap();
        assert_eq!(page.content[0].first_name, "Elisa");
    }

    #[tokio::test]
    async fn find_by_first_name_is_case_insensitive_substring() {
        let repo = repository().await;
        for name in ["Leandro", "Alexandre", "Marcos", "50%off"] {
            repo.save(&new_person(name)).await.unwrap();
        }

        let page = repo
            .find_by_first_name("AND", Pageable::default())
            .await
            .unwrap();
        let names: Vec<&str> = page.content.iter().map(|p| p.first_name.as_str()).collect();
        assert_eq!(names, vec!["Alexandre", "Leandro"]);

        let page = repo
            .find_by_first_name("%", Pageable::default())
            .await
            .unwrap();
        assert_eq!(page.total_elements, 1);
    }

    #[tokio::test]
    async fn disable_and_delete_report_missing_rows() {
        let repo = repository().await;
        let created = repo.save(&new_person("Ada")).await.unwrap();

        assert!(repo.disable(created.id).await.unwrap());
        assert!(!repo.find_by_id(created.id).await.unwrap().unwrap().enabled);
        assert!(!repo.disable(999).await.unwrap());

        assert!(repo.delete(created.id).await.unwrap());
        assert!(repo.find_by_id(created.id).await.unwrap().is_none());
        assert!(!repo.delete(created.id).await.unwrap());
    }
}
