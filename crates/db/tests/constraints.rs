//! Integration tests for database-level integrity constraints.
//!
//! The API checks these rules before writing; the schema enforces them again
//! so a caller bypassing the API cannot persist an invalid row:
//! - Active-email uniqueness on manager profiles
//! - Foreign-key existence and cross-chain facility scoping
//! - Non-negative and date-ordering check constraints
//! - RESTRICT on hard delete of a referenced parent

use chrono::NaiveDate;
use gymchain_db::models::amenity::CreateAmenity;
use gymchain_db::models::employee::CreateEmployee;
use gymchain_db::models::gym_chain::CreateGymChain;
use gymchain_db::models::gym_facility::CreateGymFacility;
use gymchain_db::models::manager_profile::CreateManagerProfile;
use gymchain_db::repositories::{
    AmenityRepo, EmployeeRepo, GymChainRepo, GymFacilityRepo, ManagerProfileRepo,
};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn db_error_code(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.code().map(|c| c.into_owned()),
        _ => None,
    }
}

fn db_constraint(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) => db_err.constraint().map(str::to_string),
        _ => None,
    }
}

fn new_manager(email: &str) -> CreateManagerProfile {
    CreateManagerProfile {
        first_name: "Jordan".to_string(),
        last_name: "Kim".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        phone_number: None,
    }
}

fn new_chain(manager_profile_id: Uuid) -> CreateGymChain {
    CreateGymChain {
        manager_profile_id,
        business_name: "Constraint Gym".to_string(),
        business_email: "hq@constraint.example".to_string(),
        business_description: None,
        business_license: None,
        tax_id: None,
        business_phone: None,
        website: None,
        headquarters_address: None,
        city: None,
        state: None,
        zip_code: None,
        country: None,
        established_date: None,
    }
}

fn new_facility(gym_chain_id: Uuid) -> CreateGymFacility {
    CreateGymFacility {
        gym_chain_id,
        name: "Site".to_string(),
        address: "2 Elm St".to_string(),
        city: "Shelbyville".to_string(),
        state: "IL".to_string(),
        zip_code: "62565".to_string(),
        country: None,
        description: None,
        phone_number: None,
        email: None,
        operating_hours: None,
        square_footage: None,
        max_capacity: None,
        opening_date: None,
    }
}

fn new_employee(gym_chain_id: Uuid, gym_facility_id: Option<Uuid>) -> CreateEmployee {
    CreateEmployee {
        gym_chain_id,
        gym_facility_id,
        first_name: "Pat".to_string(),
        last_name: "Doe".to_string(),
        email: "pat@example.com".to_string(),
        position: "Front Desk".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        phone_number: None,
        department: None,
        hourly_rate: None,
        salary: None,
        termination_date: None,
        notes: None,
    }
}

async fn seed_chain(pool: &PgPool, email: &str) -> Uuid {
    let manager = ManagerProfileRepo::create(pool, &new_manager(email))
        .await
        .unwrap();
    GymChainRepo::create(pool, &new_chain(manager.id))
        .await
        .unwrap()
        .id
}

// ---------------------------------------------------------------------------
// Uniqueness
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_duplicate_active_email_rejected(pool: PgPool) {
    ManagerProfileRepo::create(&pool, &new_manager("a@example.com"))
        .await
        .unwrap();
    let err = ManagerProfileRepo::create(&pool, &new_manager("A@Example.com"))
        .await
        .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23505"));
    assert_eq!(
        db_constraint(&err).as_deref(),
        Some("uq_manager_profiles_active_email")
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_email_reusable_after_deactivation(pool: PgPool) {
    let first = ManagerProfileRepo::create(&pool, &new_manager("reuse@example.com"))
        .await
        .unwrap();
    assert!(ManagerProfileRepo::deactivate(&pool, first.id).await.unwrap());

    let second = ManagerProfileRepo::create(&pool, &new_manager("reuse@example.com"))
        .await
        .unwrap();
    assert_ne!(first.id, second.id);

    let found = ManagerProfileRepo::find_active_by_email(&pool, "REUSE@example.com")
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.id, second.id);
}

// ---------------------------------------------------------------------------
// Foreign keys
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_facility_with_unknown_chain_rejected(pool: PgPool) {
    let err = GymFacilityRepo::create(&pool, &new_facility(Uuid::now_v7()))
        .await
        .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23503"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_employee_in_other_chains_facility_rejected(pool: PgPool) {
    let chain_a = seed_chain(&pool, "a@chains.example").await;
    let chain_b = seed_chain(&pool, "b@chains.example").await;
    let facility_b = GymFacilityRepo::create(&pool, &new_facility(chain_b))
        .await
        .unwrap();

    let err = EmployeeRepo::create(&pool, &new_employee(chain_a, Some(facility_b.id)))
        .await
        .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23503"));
    assert_eq!(
        db_constraint(&err).as_deref(),
        Some("fk_employees_facility_in_chain")
    );

    let ok = EmployeeRepo::create(&pool, &new_employee(chain_b, Some(facility_b.id)))
        .await
        .unwrap();
    assert_eq!(ok.gym_facility_id, Some(facility_b.id));
}

// ---------------------------------------------------------------------------
// Check constraints
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_amenity_cost_rejected(pool: PgPool) {
    let chain = seed_chain(&pool, "cost@example.com").await;
    let facility = GymFacilityRepo::create(&pool, &new_facility(chain))
        .await
        .unwrap();

    let err = AmenityRepo::create(
        &pool,
        &CreateAmenity {
            gym_facility_id: facility.id,
            name: "Locker".to_string(),
            category: "Service".to_string(),
            description: None,
            is_available: None,
            cost: Some(Decimal::new(-5, 0)),
            maintenance_schedule: None,
        },
    )
    .await
    .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23514"));
    assert_eq!(db_constraint(&err).as_deref(), Some("ck_amenities_cost"));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_negative_capacity_rejected(pool: PgPool) {
    let chain = seed_chain(&pool, "cap@example.com").await;
    let facility = GymFacilityRepo::create(&pool, &new_facility(chain))
        .await
        .unwrap();

    let err = GymFacilityRepo::update_capacity(&pool, facility.id, Some(-1))
        .await
        .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23514"));

    let cleared = GymFacilityRepo::update_capacity(&pool, facility.id, None)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(cleared.max_capacity, None);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_termination_before_hire_rejected(pool: PgPool) {
    let chain = seed_chain(&pool, "dates@example.com").await;
    let employee = EmployeeRepo::create(&pool, &new_employee(chain, None))
        .await
        .unwrap();

    let err = EmployeeRepo::terminate(
        &pool,
        employee.id,
        NaiveDate::from_ymd_opt(2022, 12, 31).unwrap(),
        true,
    )
    .await
    .unwrap_err();
    assert_eq!(
        db_constraint(&err).as_deref(),
        Some("ck_employees_termination_after_hire")
    );
}

// ---------------------------------------------------------------------------
// Delete policy
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_hard_delete_restricted_while_children_exist(pool: PgPool) {
    let chain = seed_chain(&pool, "restrict@example.com").await;
    let facility = GymFacilityRepo::create(&pool, &new_facility(chain))
        .await
        .unwrap();

    let err = GymChainRepo::hard_delete(&pool, chain).await.unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23503"));

    assert!(GymFacilityRepo::hard_delete(&pool, facility.id).await.unwrap());
    assert!(GymChainRepo::hard_delete(&pool, chain).await.unwrap());
    assert!(GymChainRepo::find_by_id(&pool, chain).await.unwrap().is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_manager_hard_delete_restricted_while_owning_chains(pool: PgPool) {
    let manager = ManagerProfileRepo::create(&pool, &new_manager("owner@example.com"))
        .await
        .unwrap();
    let chain = GymChainRepo::create(&pool, &new_chain(manager.id))
        .await
        .unwrap();

    let err = ManagerProfileRepo::hard_delete(&pool, manager.id)
        .await
        .unwrap_err();
    assert_eq!(db_error_code(&err).as_deref(), Some("23503"));

    assert!(GymChainRepo::hard_delete(&pool, chain.id).await.unwrap());
    assert!(ManagerProfileRepo::hard_delete(&pool, manager.id).await.unwrap());
    assert!(!ManagerProfileRepo::hard_delete(&pool, manager.id).await.unwrap());
    assert!(ManagerProfileRepo::find_by_id(&pool, manager.id)
        .await
        .unwrap()
        .is_none());
}
