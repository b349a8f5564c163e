use crate::models;
use sqlx::PgPool;
use tracing::Instrument;

pub async fn insert(
    pool: &PgPool,
    status_check: models::StatusCheck,
) -> Result<models::StatusCheck, String> {
    let query_span = tracing::info_span!("Saving new status check into the database");
    sqlx::query(
        r#"
        INSERT INTO status_check (id, client_name, timestamp)
        VALUES ($1, $2, $3)
        "#,
    )
    .bind(status_check.id)
    .bind(&status_check.client_name)
    .bind(status_check.timestamp)
    .execute(pool)
    .instrument(query_span)
    .await
    .map(move |_| status_check)
    .map_err(|e| {
        tracing::error!("Failed to execute insert query: {:?}", e);
        "Failed to insert".to_string()
    })
}

pub async fn fetch_all(pool: &PgPool) -> Result<Vec<models::StatusCheck>, String> {
    let query_span = tracing::info_span!("Fetching all status checks");
    sqlx::query_as::<_, models::StatusCheck>(
        r#"
        SELECT id, client_name, timestamp
        FROM status_check
        ORDER BY timestamp
        "#,
    )
    .fetch_all(pool)
    .instrument(query_span)
    .await
    .map_err(|e| {
        tracing::error!("Failed to execute fetch query: {:?}", e);
        "Failed to fetch".to_string()
    })
}
