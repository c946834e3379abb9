use std::collections::HashMap;

use async_trait::async_trait;
use sqlx::FromRow;
use sqlx::PgPool;

use super::workout::WorkoutRow;
use crate::domain::name::DisplayName;
use crate::domain::routine::errors::RoutineError;
use crate::domain::routine::models::NewRoutine;
use crate::domain::routine::models::Routine;
use crate::domain::routine::models::RoutineId;
use crate::domain::routine::ports::RoutineRepository;
use crate::domain::user::models::UserId;
use crate::domain::workout::models::Workout;

pub struct PostgresRoutineRepository {
    pool: PgPool,
}

impl PostgresRoutineRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Attach linked workouts to each routine row, ordered by workout id.
    async fn with_workouts(&self, rows: Vec<RoutineRow>) -> Result<Vec<Routine>, RoutineError> {
        if rows.is_empty() {
            return Ok(Vec::new());
        }

        let routine_ids: Vec<i64> = rows.iter().map(|row| row.id).collect();

        let links = sqlx::query_as::<_, LinkedWorkoutRow>(
            r#"
            SELECT wr.routine_id, w.id, w.user_id, w.name, w.description
            FROM workout_routine wr
            JOIN workouts w ON w.id = wr.workout_id
            WHERE wr.routine_id = ANY($1)
            ORDER BY wr.routine_id, w.id
            "#,
        )
        .bind(&routine_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        let mut workouts_by_routine: HashMap<i64, Vec<Workout>> = HashMap::new();
        for link in links {
            let workout = Workout::try_from(link.workout)?;
            workouts_by_routine
                .entry(link.routine_id)
                .or_default()
                .push(workout);
        }

        rows.into_iter()
            .map(|row| -> Result<Routine, RoutineError> {
                let workouts = workouts_by_routine.remove(&row.id).unwrap_or_default();
                Ok(Routine {
                    id: RoutineId(row.id),
                    user_id: UserId(row.user_id),
                    name: DisplayName::new(row.name)?,
                    description: row.description,
                    workouts,
                })
            })
            .collect()
    }
}

#[derive(FromRow)]
struct RoutineRow {
    id: i64,
    user_id: i64,
    name: String,
    description: Option<String>,
}

#[derive(FromRow)]
struct LinkedWorkoutRow {
    routine_id: i64,
    #[sqlx(flatten)]
    workout: WorkoutRow,
}

fn database_error(e: sqlx::Error) -> RoutineError {
    RoutineError::DatabaseError(e.to_string())
}

#[async_trait]
impl RoutineRepository for PostgresRoutineRepository {
    async fn create(&self, routine: NewRoutine) -> Result<Routine, RoutineError> {
        let mut tx = self.pool.begin().await.map_err(database_error)?;

        let row = sqlx::query_as::<_, RoutineRow>(
            r#"
            INSERT INTO routines (user_id, name, description)
            VALUES ($1, $2, $3)
            RETURNING id, user_id, name, description
            "#,
        )
        .bind(routine.user_id.0)
        .bind(routine.name.as_str())
        .bind(routine.description.as_deref())
        .fetch_one(&mut *tx)
        .await
        .map_err(database_error)?;

        if !routine.workout_ids.is_empty() {
            let workout_ids: Vec<i64> = routine.workout_ids.iter().map(|id| id.0).collect();

            sqlx::query(
                r#"
                INSERT INTO workout_routine (workout_id, routine_id)
                SELECT UNNEST($1::bigint[]), $2
                "#,
            )
            .bind(&workout_ids)
            .bind(row.id)
            .execute(&mut *tx)
            .await
            .map_err(database_error)?;
        }

        tx.commit().await.map_err(database_error)?;

        let mut routines = self.with_workouts(vec![row]).await?;
        routines
            .pop()
            .ok_or_else(|| RoutineError::DatabaseError("Created routine not returned".to_string()))
    }

    async fn find_by_id(&self, id: RoutineId) -> Result<Option<Routine>, RoutineError> {
        let row = sqlx::query_as::<_, RoutineRow>(
            r#"
            SELECT id, user_id, name, description
            FROM routines
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await
        .map_err(database_error)?;

        match row {
            Some(row) => Ok(self.with_workouts(vec![row]).await?.pop()),
            None => Ok(None),
        }
    }

    async fn list_by_user(&self, user_id: UserId) -> Result<Vec<Routine>, RoutineError> {
        let rows = sqlx::query_as::<_, RoutineRow>(
            r#"
            SELECT id, user_id, name, description
            FROM routines
            WHERE user_id = $1
            ORDER BY id
            "#,
        )
        .bind(user_id.0)
        .fetch_all(&self.pool)
        .await
        .map_err(database_error)?;

        self.with_workouts(rows).await
    }

    async fn delete(&self, id: RoutineId) -> Result<(), RoutineError> {
        // Links go with the routine through ON DELETE CASCADE
        let result = sqlx::query(
            r#"
            DELETE FROM routines
            WHERE id = $1
            "#,
        )
        .bind(id.0)
        .execute(&self.pool)
        .await
        .map_err(database_error)?;

        if result.rows_affected() == 0 {
            return Err(RoutineError::NotFound(id.to_string()));
        }

        Ok(())
    }
}
