use color_eyre::eyre::eyre;
use sqlx::PgPool;

use crate::domain::{Member, MemberId, MemberName, MemberStore, MemberStoreError};

pub struct PostgresMemberStore {
    pool: PgPool,
}

impl PostgresMemberStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

type MemberRow = (i64, String);

fn parse_row((id, name): MemberRow) -> Result<Member, MemberStoreError> {
    let name = MemberName::parse(name)
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;
    Ok(Member::with_id(MemberId::new(id), name))
}

#[async_trait::async_trait]
impl MemberStore for PostgresMemberStore {
    #[tracing::instrument(name = "Saving member to PostgreSQL", skip_all)]
    async fn save(&mut self, member: Member) -> Result<Member, MemberStoreError> {
        let row = match member.id {
            None => sqlx::query_as::<_, MemberRow>(
                r#"
                INSERT INTO members (name) VALUES ($1)
                RETURNING id, name
                "#,
            )
            .bind(member.name.as_ref())
            .fetch_one(&self.pool)
            .await
            .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?,
            Some(id) => {
                let mut tx = self
                    .pool
                    .begin()
                    .await
                    .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;

                let row = sqlx::query_as::<_, MemberRow>(
                    r#"
                    INSERT INTO members (id, name) VALUES ($1, $2)
                    ON CONFLICT (id) DO UPDATE SET name = EXCLUDED.name
                    RETURNING id, name
                    "#,
                )
                .bind(id.as_ref())
                .bind(member.name.as_ref())
                .fetch_one(&mut *tx)
                .await
                .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;

                // Keep generated ids ahead of explicitly stored ones
                sqlx::query(
                    r#"
                    SELECT setval(
                        pg_get_serial_sequence('members', 'id'),
                        GREATEST((SELECT MAX(id) FROM members), 1)
                    )
                    "#,
                )
                .execute(&mut *tx)
                .await
                .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;

                tx.commit()
                    .await
                    .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?;
                row
            }
        };

        parse_row(row)
    }

    #[tracing::instrument(name = "Finding member by ID in PostgreSQL", skip_all)]
    async fn find_by_id(
        &self,
        id: &MemberId,
    ) -> Result<Option<Member>, MemberStoreError> {
        sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, name FROM members WHERE id = $1
            "#,
        )
        .bind(id.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?
        .map(parse_row)
        .transpose()
    }

    #[tracing::instrument(name = "Finding member by name in PostgreSQL", skip_all)]
    async fn find_by_name(
        &self,
        name: &MemberName,
    ) -> Result<Option<Member>, MemberStoreError> {
        sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, name FROM members
            WHERE name = $1
            ORDER BY position
            LIMIT 1
            "#,
        )
        .bind(name.as_ref())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?
        .map(parse_row)
        .transpose()
    }

    #[tracing::instrument(name = "Listing members from PostgreSQL", skip_all)]
    async fn find_all(&self) -> Result<Vec<Member>, MemberStoreError> {
        sqlx::query_as::<_, MemberRow>(
            r#"
            SELECT id, name FROM members ORDER BY position
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| MemberStoreError::UnexpectedError(eyre!(e)))?
        .into_iter()
        .map(parse_row)
        .collect()
    }
}
