//! MySQL implementation of the UserRepository trait.
//!
//! Users live in `users`; their saved funds live in `saved_funds`, one row per
//! entry, ordered by an auto-increment sequence. The `(user_id, scheme_code)`
//! unique key makes a save a single conditional insert and a removal a single
//! conditional delete. Each mutation commits together with the owner's
//! `updated_at` stamp. Scheme codes compare byte for byte.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlConnection, MySqlPool, Row};
use uuid::Uuid;

use fm_core::domain::entities::user::{SavedFund, User};
use fm_core::errors::DomainError;
use fm_core::repositories::UserRepository;

/// MySQL implementation of UserRepository
pub struct MySqlUserRepository {
    /// Database connection pool
    pool: MySqlPool,
}

const USER_COLUMNS: &str = "id, name, email, password_hash, created_at, updated_at";

impl MySqlUserRepository {
    /// Create a new MySQL user repository
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert database row to User entity, without saved funds
    fn row_to_user(row: &sqlx::mysql::MySqlRow) -> Result<User, DomainError> {
        let id: String = row.try_get("id").map_err(column_error("id"))?;

        Ok(User {
            id: Uuid::parse_str(&id)
                .map_err(|e| DomainError::internal(format!("Invalid UUID: {}", e)))?,
            name: row.try_get("name").map_err(column_error("name"))?,
            email: row.try_get("email").map_err(column_error("email"))?,
            password_hash: row
                .try_get("password_hash")
                .map_err(column_error("password_hash"))?,
            saved_funds: Vec::new(),
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(column_error("created_at"))?,
            updated_at: row
                .try_get::<DateTime<Utc>, _>("updated_at")
                .map_err(column_error("updated_at"))?,
        })
    }

    fn row_to_saved_fund(row: &sqlx::mysql::MySqlRow) -> Result<SavedFund, DomainError> {
        Ok(SavedFund {
            scheme_code: row.try_get("scheme_code").map_err(column_error("scheme_code"))?,
            scheme_name: row.try_get("scheme_name").map_err(column_error("scheme_name"))?,
            fund_house: row.try_get("fund_house").map_err(column_error("fund_house"))?,
            scheme_category: row
                .try_get("scheme_category")
                .map_err(column_error("scheme_category"))?,
            saved_at: row
                .try_get::<DateTime<Utc>, _>("saved_at")
                .map_err(column_error("saved_at"))?,
        })
    }

    async fn load_saved_funds(&self, user_id: Uuid) -> Result<Vec<SavedFund>, DomainError> {
        let query = r#"
            SELECT scheme_code, scheme_name, fund_house, scheme_category, saved_at
            FROM saved_funds
            WHERE user_id = ?
            ORDER BY seq ASC
        "#;

        let rows = sqlx::query(query)
            .bind(user_id.to_string())
            .fetch_all(&self.pool)
            .await
            .map_err(query_error)?;

        rows.iter().map(Self::row_to_saved_fund).collect()
    }

    async fn find_one(&self, column: &str, value: String) -> Result<Option<User>, DomainError> {
        let query = format!(
            "SELECT {} FROM users WHERE {} = ? LIMIT 1",
            USER_COLUMNS, column
        );

        let row = sqlx::query(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(query_error)?;

        match row {
            Some(row) => {
                let mut user = Self::row_to_user(&row)?;
                user.saved_funds = self.load_saved_funds(user.id).await?;
                Ok(Some(user))
            }
            None => Ok(None),
        }
    }

    async fn user_exists(&self, user_id: Uuid) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE id = ?")
            .bind(user_id.to_string())
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)?;
        Ok(count > 0)
    }
}

#[async_trait]
impl UserRepository for MySqlUserRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<User>, DomainError> {
        self.find_one("id", id.to_string()).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, DomainError> {
        self.find_one("email", email.to_string()).await
    }

    async fn exists_by_email(&self, email: &str) -> Result<bool, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = ?")
            .bind(email)
            .fetch_one(&self.pool)
            .await
            .map_err(query_error)?;
        Ok(count > 0)
    }

    async fn create(&self, user: User) -> Result<User, DomainError> {
        let query = r#"
            INSERT INTO users (id, name, email, password_hash, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        sqlx::query(query)
            .bind(user.id.to_string())
            .bind(&user.name)
            .bind(&user.email)
            .bind(&user.password_hash)
            .bind(user.created_at)
            .bind(user.updated_at)
            .execute(&self.pool)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e {
                    if db_err.is_unique_violation() {
                        return DomainError::Conflict {
                            fields: vec!["email".to_string()],
                        };
                    }
                }
                query_error(e)
            })?;

        Ok(user)
    }

    async fn add_saved_fund(&self, user_id: Uuid, fund: SavedFund) -> Result<bool, DomainError> {
        let query = r#"
            INSERT INTO saved_funds
                (user_id, scheme_code, scheme_name, fund_house, scheme_category, saved_at)
            VALUES (?, ?, ?, ?, ?, ?)
        "#;

        let mut tx = self.pool.begin().await.map_err(query_error)?;

        let result = sqlx::query(query)
            .bind(user_id.to_string())
            .bind(&fund.scheme_code)
            .bind(&fund.scheme_name)
            .bind(&fund.fund_house)
            .bind(&fund.scheme_category)
            .bind(fund.saved_at)
            .execute(&mut *tx)
            .await;

        match result {
            Ok(_) => {
                touch(&mut tx, user_id).await?;
                tx.commit().await.map_err(query_error)?;
                Ok(true)
            }
            Err(sqlx::Error::Database(db_err)) if db_err.is_unique_violation() => Ok(false),
            Err(sqlx::Error::Database(db_err)) if db_err.is_foreign_key_violation() => {
                Err(DomainError::NotFound {
                    resource: "User".to_string(),
                })
            }
            Err(e) => Err(query_error(e)),
        }
    }

    async fn remove_saved_fund(
        &self,
        user_id: Uuid,
        scheme_code: &str,
    ) -> Result<bool, DomainError> {
        let mut tx = self.pool.begin().await.map_err(query_error)?;

        let result = sqlx::query("DELETE FROM saved_funds WHERE user_id = ? AND scheme_code = ?")
            .bind(user_id.to_string())
            .bind(scheme_code)
            .execute(&mut *tx)
            .await
            .map_err(query_error)?;

        if result.rows_affected() > 0 {
            touch(&mut tx, user_id).await?;
            tx.commit().await.map_err(query_error)?;
            return Ok(true);
        }
        tx.rollback().await.map_err(query_error)?;

        if !self.user_exists(user_id).await? {
            return Err(DomainError::NotFound {
                resource: "User".to_string(),
            });
        }
        Ok(false)
    }
}

fn query_error(error: sqlx::Error) -> DomainError {
    tracing::error!(error = %error, "Database query failed");
    DomainError::internal(format!("Database query failed: {}", error))
}

fn column_error(column: &'static str) -> impl Fn(sqlx::Error) -> DomainError {
    move |e| DomainError::internal(format!("Failed to get {}: {}", column, e))
}
