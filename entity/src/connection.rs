use sea_orm::{Database, DatabaseConnection, DbErr};

pub const DATABASE_URL: &str = "DATABASE_URL";

/// Connects to the word database named by `DATABASE_URL`, read from the
/// environment or a `.env` file.
pub async fn get_connection() -> Result<DatabaseConnection, DbErr> {
    dotenv::dotenv().ok();
    let url = std::env::var(DATABASE_URL)
        .map_err(|_| DbErr::Custom(format!("{} is not set", DATABASE_URL)))?;
    Database::connect(url).await
}
