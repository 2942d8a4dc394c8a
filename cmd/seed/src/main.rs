//! Inserts a development user so the thread-detail join has a username to
//! resolve. Registration endpoints belong to the account service.
//!
//! ```text
//! DATABASE_URL=postgres://localhost/forumapi \
//!     SEED_USERNAME=dicoding SEED_PASSWORD=secret cargo run -p seed
//! ```

use anyhow::Context;
use sqlx::PgPool;
use uuid::Uuid;

use auth_adapters::hash_password;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL is not set")?;
    let username = std::env::var("SEED_USERNAME").unwrap_or_else(|_| "dicoding".into());
    let password = std::env::var("SEED_PASSWORD").unwrap_or_else(|_| "secret".into());
    let fullname = std::env::var("SEED_FULLNAME").unwrap_or_else(|_| "Dicoding Indonesia".into());

    let pool = PgPool::connect(&database_url).await?;
    sqlx::migrate!("../../migrations").run(&pool).await?;

    let id = format!("user-{}", Uuid::new_v4().simple());
    let hash = hash_password(&password).map_err(|err| anyhow::anyhow!("hashing failed: {err}"))?;

    let result = sqlx::query(
        "INSERT INTO users (id, username, password, fullname) VALUES ($1, $2, $3, $4) \
         ON CONFLICT (username) DO NOTHING",
    )
    .bind(&id)
    .bind(&username)
    .bind(&hash)
    .bind(&fullname)
    .execute(&pool)
    .await?;

    if result.rows_affected() == 0 {
        println!("user '{username}' already exists, nothing to do");
    } else {
        println!("seeded user '{username}' with id {id}");
    }

    Ok(())
}
