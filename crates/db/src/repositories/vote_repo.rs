//! Repository for the `votes` table.

use sqlx::PgPool;
use summit_core::types::DbId;

use crate::models::vote::{IdeaVoteTotal, Vote};

/// Column list for `votes` queries.
const COLUMNS: &str = "id, idea_id, session_id, vote_count, created_at, updated_at";

/// Provides data access for per-session vote rows.
pub struct VoteRepo;

impl VoteRepo {
    /// List vote rows, optionally scoped to one session.
    pub async fn list(pool: &PgPool, session_id: Option<&str>) -> Result<Vec<Vote>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM votes \
             WHERE ($1::TEXT IS NULL OR session_id = $1) \
             ORDER BY id"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(session_id)
            .fetch_all(pool)
            .await
    }

    /// Find the row for one (idea, session) pair.
    pub async fn find(
        pool: &PgPool,
        idea_id: DbId,
        session_id: &str,
    ) -> Result<Option<Vote>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM votes WHERE idea_id = $1 AND session_id = $2");
        sqlx::query_as::<_, Vote>(&query)
            .bind(idea_id)
            .bind(session_id)
            .fetch_optional(pool)
            .await
    }

    /// Create the row or overwrite its count.
    pub async fn upsert(
        pool: &PgPool,
        idea_id: DbId,
        session_id: &str,
        vote_count: i32,
    ) -> Result<Vote, sqlx::Error> {
        let query = format!(
            "INSERT INTO votes (idea_id, session_id, vote_count) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_votes_idea_session DO UPDATE SET \
                 vote_count = EXCLUDED.vote_count, \
                 updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Vote>(&query)
            .bind(idea_id)
            .bind(session_id)
            .bind(vote_count)
            .fetch_one(pool)
            .await
    }

    /// Delete the row for one (idea, session) pair.
    pub async fn delete(pool: &PgPool, idea_id: DbId, session_id: &str) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM votes WHERE idea_id = $1 AND session_id = $2")
            .bind(idea_id)
            .bind(session_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    /// Total votes a session has cast across all ideas.
    pub async fn session_total(pool: &PgPool, session_id: &str) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>(
            "SELECT COALESCE(SUM(vote_count), 0)::BIGINT FROM votes WHERE session_id = $1",
        )
        .bind(session_id)
        .fetch_one(pool)
        .await
    }

    /// Vote sums per idea. Ideas without votes are omitted.
    pub async fn totals(pool: &PgPool) -> Result<Vec<IdeaVoteTotal>, sqlx::Error> {
        sqlx::query_as::<_, IdeaVoteTotal>(
            "SELECT idea_id, SUM(vote_count)::BIGINT AS total_votes \
             FROM votes GROUP BY idea_id ORDER BY idea_id",
        )
        .fetch_all(pool)
        .await
    }
}
