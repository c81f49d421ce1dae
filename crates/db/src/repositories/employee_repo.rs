//! Repository for the `employees` table.

use gymchain_core::types::{new_id, Date, DbId};
use sqlx::PgPool;

use crate::models::employee::{CreateEmployee, Employee, UpdateEmployee};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, first_name, last_name, email, phone_number, position, department, \
                       hourly_rate, salary, hire_date, termination_date, is_active, notes, \
                       gym_chain_id, gym_facility_id, created_at, updated_at";

/// Provides CRUD operations for employees.
pub struct EmployeeRepo;

impl EmployeeRepo {
    /// Insert a new employee, returning the created row.
    ///
    /// The `(gym_facility_id, gym_chain_id)` foreign key rejects a facility
    /// from another chain even if the caller skipped the check.
    pub async fn create(pool: &PgPool, input: &CreateEmployee) -> Result<Employee, sqlx::Error> {
        let query = format!(
            "INSERT INTO employees
                (id, gym_chain_id, gym_facility_id, first_name, last_name, email, position,
                 hire_date, phone_number, department, hourly_rate, salary, termination_date,
                 notes)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(new_id())
            .bind(input.gym_chain_id)
            .bind(input.gym_facility_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.position)
            .bind(input.hire_date)
            .bind(&input.phone_number)
            .bind(&input.department)
            .bind(input.hourly_rate)
            .bind(input.salary)
            .bind(input.termination_date)
            .bind(&input.notes)
            .fetch_one(pool)
            .await
    }

    /// Find an employee by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM employees WHERE id = $1");
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List every employee of a chain (chain-level and facility-scoped),
    /// ordered by last name.
    pub async fn list_by_chain(
        pool: &PgPool,
        gym_chain_id: DbId,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM employees
             WHERE gym_chain_id = $1
             ORDER BY last_name, first_name, created_at"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(gym_chain_id)
            .fetch_all(pool)
            .await
    }

    /// List the employees scoped to a facility, ordered by last name.
    pub async fn list_by_facility(
        pool: &PgPool,
        gym_facility_id: DbId,
    ) -> Result<Vec<Employee>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM employees
             WHERE gym_facility_id = $1
             ORDER BY last_name, first_name, created_at"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(gym_facility_id)
            .fetch_all(pool)
            .await
    }

    /// Update an employee. Only non-`None` fields in `input` are applied;
    /// `clear_gym_facility` resets the facility to `NULL`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateEmployee,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                gym_facility_id = CASE
                    WHEN $14 THEN NULL
                    ELSE COALESCE($2, gym_facility_id)
                END,
                first_name = COALESCE($3, first_name),
                last_name = COALESCE($4, last_name),
                email = COALESCE($5, email),
                position = COALESCE($6, position),
                phone_number = COALESCE($7, phone_number),
                department = COALESCE($8, department),
                hourly_rate = COALESCE($9, hourly_rate),
                salary = COALESCE($10, salary),
                hire_date = COALESCE($11, hire_date),
                is_active = COALESCE($12, is_active),
                notes = COALESCE($13, notes)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(input.gym_facility_id)
            .bind(&input.first_name)
            .bind(&input.last_name)
            .bind(&input.email)
            .bind(&input.position)
            .bind(&input.phone_number)
            .bind(&input.department)
            .bind(input.hourly_rate)
            .bind(input.salary)
            .bind(input.hire_date)
            .bind(input.is_active)
            .bind(&input.notes)
            .bind(input.clear_gym_facility)
            .fetch_optional(pool)
            .await
    }

    /// Record a termination date, optionally deactivating the employee.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn terminate(
        pool: &PgPool,
        id: DbId,
        termination_date: Date,
        deactivate: bool,
    ) -> Result<Option<Employee>, sqlx::Error> {
        let query = format!(
            "UPDATE employees SET
                termination_date = $2,
                is_active = CASE WHEN $3 THEN false ELSE is_active END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Employee>(&query)
            .bind(id)
            .bind(termination_date)
            .bind(deactivate)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete an employee. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM employees WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
