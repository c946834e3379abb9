use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use crate::domain::name::DisplayName;
use crate::domain::user::models::UserId;
use crate::domain::workout::errors::WorkoutError;
use crate::domain::workout::models::NewWorkout;
use crate::domain::workout::models::Workout;
use crate::domain::workout::models::WorkoutId;
use crate::domain::workout::ports::WorkoutRepository;

pub struct PostgresWorkoutRepository {
    pool: PgPool,
}

impl PostgresWorkoutRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(FromRow)]
pub(crate) struct WorkoutRow {
    pub(crate) id: i64,
    pub(crate) user_id: i64,
    pub(crate) name: String,
    pub(crate) description: Option<String>,
}

impl TryFrom<WorkoutRow> for Workout {
    type Error = WorkoutError;

    fn try_from(row: WorkoutRow) -> Result<Self, Self::Error> {
        Ok(Workout {
            id: WorkoutId(row.id),
            user_id: UserId(row.user_id),
            name: DisplayName::new(row.name)?,
            description: row.description,
        })
    }
}

fn database_error(e: sqlx::Error) -> WorkoutError {
    WorkoutError::DatabaseError(e.to_string())
}

#[async_trait]
impl WorkoutRepository for PostgresWorkoutRepository {
    async fn create(&self, workout: NewWorkout) -> Result<Workout, WorkoutError> {
        let row = sqlx::query_as::<_, WorkoutRow>(
            r#"
            INSERT INTO workouts (user_id, name, description)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, description
            "#,
        )
        .bind(workout.user_id.0)
        .bind(workout.name.as_str())
        .bind(workout.description.as_deref())
        .fetch_one(&self.pool)
        .await
        .map_err(database_error)?;

        Workout::try_from(row)
    }

    async fn find_by_id(&self, id: WorkoutId) -> Result<Option<Workout>, WorkoutError> {
        sqlx::query_as::<_, WorkoutRow>(
            r#"
            SELECT id, user_id, name, description
            FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?
        .map(Workout::try_from)
        .transpose()
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Workout>, WorkoutError> {
        sqlx::query_as::<_, WorkoutRow>(
            r#"
            SELECT id, user_id, name, description
            FROM workouts
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?
        .into_iter()
        .map(Workout::try_from)
        .collect()
    }

    async fn find_by_ids_for_user(
        &self,
        user_id: UserId,
        ids: &[WorkoutId],
    ) -> Result<Vec<Workout>, WorkoutError> {
        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<i64> = ids.iter().map(|id| id.0).collect();

        sqlx::query_as::<_, WorkoutRow>(
            r#"
            SELECT id, user_id, name, description
            FROM workouts
            WHERE user_id = $1 AND id = ANY($2)
            ORDER BY id
            "#,
        )
        .bind(user_id.0)
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?
        .into_iter()
        .map(Workout::try_from)
        .collect()
    }

    async fn delete(&self, id: WorkoutId) -> Result<(), WorkoutError> {
        let result = sqlx::query(
            r#"
            DELETE FROM workouts
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(WorkoutError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
