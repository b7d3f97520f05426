//! Repository for the `admins` table.

use sqlx::PgPool;

use backoffice_core::types::DbId;

use crate::models::admin::{Admin, CreateAdmin};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, email, is_active, created_at, updated_at";

/// Provides operations for admin accounts. Admins are not soft-deletable;
/// they are only ever deactivated.
pub struct AdminRepo;

impl AdminRepo {
    /// Insert a new admin, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateAdmin) -> Result<Admin, sqlx::Error> {
        let query = format!(
            "INSERT INTO admins (name, email) VALUES ($1, $2) RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Admin>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await
    }

    /// Find an admin by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins WHERE id = $1");
        sqlx::query_as::<_, Admin>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all admins ordered by ID ascending.
    pub async fn list(pool: &PgPool) -> Result<Vec<Admin>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM admins ORDER BY id ASC");
        sqlx::query_as::<_, Admin>(&query).fetch_all(pool).await
    }
}
