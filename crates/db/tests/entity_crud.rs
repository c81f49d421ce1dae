//! Integration tests for entity CRUD operations.
//!
//! Exercises the full repository layer against a real database:
//! - Create full hierarchy (manager -> chain -> facility -> amenity / employee)
//! - Navigation queries by foreign key
//! - Defaults applied on insert
//! - Update and audit timestamps

use chrono::NaiveDate;
use gymchain_db::models::amenity::{CreateAmenity, UpdateAmenity};
use gymchain_db::models::employee::CreateEmployee;
use gymchain_db::models::gym_chain::{CreateGymChain, UpdateGymChain};
use gymchain_db::models::gym_facility::CreateGymFacility;
use gymchain_db::models::manager_profile::{CreateManagerProfile, UpdateManagerProfile};
use gymchain_db::repositories::{
    AmenityRepo, EmployeeRepo, GymChainRepo, GymFacilityRepo, ManagerProfileRepo,
};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn new_manager(email: &str) -> CreateManagerProfile {
    CreateManagerProfile {
        first_name: "Morgan".to_string(),
        last_name: "Reyes".to_string(),
        email: email.to_string(),
        password_hash: "$argon2id$placeholder".to_string(),
        phone_number: None,
    }
}

fn new_chain(manager_profile_id: Uuid, name: &str) -> CreateGymChain {
    CreateGymChain {
        manager_profile_id,
        business_name: name.to_string(),
        business_email: "hq@example.com".to_string(),
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

fn new_facility(gym_chain_id: Uuid, name: &str) -> CreateGymFacility {
    CreateGymFacility {
        gym_chain_id,
        name: name.to_string(),
        address: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        state: "IL".to_string(),
        zip_code: "62701".to_string(),
        country: None,
        description: None,
        phone_number: None,
        email: None,
        operating_hours: Some("Mon-Fri 05:00-23:00".to_string()),
        square_footage: Some(Decimal::new(1250050, 2)),
        max_capacity: Some(200),
        opening_date: None,
    }
}

fn new_amenity(gym_facility_id: Uuid, name: &str, category: &str) -> CreateAmenity {
    CreateAmenity {
        gym_facility_id,
        name: name.to_string(),
        category: category.to_string(),
        description: None,
        is_available: None,
        cost: None,
        maintenance_schedule: None,
    }
}

fn new_employee(gym_chain_id: Uuid, gym_facility_id: Option<Uuid>, last: &str) -> CreateEmployee {
    CreateEmployee {
        gym_chain_id,
        gym_facility_id,
        first_name: "Sam".to_string(),
        last_name: last.to_string(),
        email: format!("{}@example.com", last.to_lowercase()),
        position: "Trainer".to_string(),
        hire_date: NaiveDate::from_ymd_opt(2023, 1, 1).unwrap(),
        phone_number: None,
        department: None,
        hourly_rate: Some(Decimal::new(2250, 2)),
        salary: None,
        termination_date: None,
        notes: None,
    }
}

// ---------------------------------------------------------------------------
// Test: Full hierarchy creation
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_create_full_hierarchy(pool: PgPool) {
    let manager = ManagerProfileRepo::create(&pool, &new_manager("owner@example.com"))
        .await
        .unwrap();
    assert!(manager.is_active);
    assert!(!manager.email_verified);
    assert!(manager.email_verification_token_hash.is_none());

    let chain = GymChainRepo::create(&pool, &new_chain(manager.id, "Iron Works"))
        .await
        .unwrap();
    assert_eq!(chain.manager_profile_id, manager.id);
    assert_eq!(chain.country.as_deref(), Some("USA"));
    assert!(chain.is_active);

    let facility = GymFacilityRepo::create(&pool, &new_facility(chain.id, "Downtown"))
        .await
        .unwrap();
    assert_eq!(facility.gym_chain_id, chain.id);
    assert_eq!(facility.max_capacity, Some(200));
    assert_eq!(facility.square_footage, Some(Decimal::new(1250050, 2)));

    let amenity = AmenityRepo::create(&pool, &new_amenity(facility.id, "Sauna", "Facility"))
        .await
        .unwrap();
    assert_eq!(amenity.gym_facility_id, facility.id);
    assert!(amenity.is_available);

    let employee = EmployeeRepo::create(&pool, &new_employee(chain.id, Some(facility.id), "Lee"))
        .await
        .unwrap();
    assert_eq!(employee.gym_chain_id, chain.id);
    assert_eq!(employee.gym_facility_id, Some(facility.id));
    assert!(employee.termination_date.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_ids_are_unique_and_timestamps_set(pool: PgPool) {
    let a = ManagerProfileRepo::create(&pool, &new_manager("a@example.com"))
        .await
        .unwrap();
    let b = ManagerProfileRepo::create(&pool, &new_manager("b@example.com"))
        .await
        .unwrap();
    assert_ne!(a.id, b.id);
    assert!(a.updated_at >= a.created_at);
    assert!(b.updated_at >= b.created_at);
}

// ---------------------------------------------------------------------------
// Test: Navigation queries
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_navigation_queries_follow_foreign_keys(pool: PgPool) {
    let manager = ManagerProfileRepo::create(&pool, &new_manager("nav@example.com"))
        .await
        .unwrap();
    let chain_a = GymChainRepo::create(&pool, &new_chain(manager.id, "Alpha Fitness"))
        .await
        .unwrap();
    let chain_b = GymChainRepo::create(&pool, &new_chain(manager.id, "Beta Barbell"))
        .await
        .unwrap();

    let chains = GymChainRepo::list_by_manager(&pool, manager.id).await.unwrap();
    assert_eq!(chains.len(), 2);
    assert_eq!(chains[0].business_name, "Alpha Fitness");

    let north = GymFacilityRepo::create(&pool, &new_facility(chain_a.id, "North"))
        .await
        .unwrap();
    GymFacilityRepo::create(&pool, &new_facility(chain_a.id, "South"))
        .await
        .unwrap();
    GymFacilityRepo::create(&pool, &new_facility(chain_b.id, "East"))
        .await
        .unwrap();

    let facilities = GymFacilityRepo::list_by_chain(&pool, chain_a.id).await.unwrap();
    let names: Vec<&str> = facilities.iter().map(|f| f.name.as_str()).collect();
    assert_eq!(names, ["North", "South"]);

    AmenityRepo::create(&pool, &new_amenity(north.id, "Treadmill", "Equipment"))
        .await
        .unwrap();
    AmenityRepo::create(&pool, &new_amenity(north.id, "Pool", "Facility"))
        .await
        .unwrap();
    let amenities = AmenityRepo::list_by_facility(&pool, north.id).await.unwrap();
    assert_eq!(amenities.len(), 2);
    assert_eq!(amenities[0].category, "Equipment");

    EmployeeRepo::create(&pool, &new_employee(chain_a.id, None, "Adams"))
        .await
        .unwrap();
    EmployeeRepo::create(&pool, &new_employee(chain_a.id, Some(north.id), "Baker"))
        .await
        .unwrap();

    let chain_staff = EmployeeRepo::list_by_chain(&pool, chain_a.id).await.unwrap();
    assert_eq!(chain_staff.len(), 2);
    let north_staff = EmployeeRepo::list_by_facility(&pool, north.id).await.unwrap();
    assert_eq!(north_staff.len(), 1);
    assert_eq!(north_staff[0].last_name, "Baker");
    assert!(EmployeeRepo::list_by_chain(&pool, chain_b.id)
        .await
        .unwrap()
        .is_empty());
}

// ---------------------------------------------------------------------------
// Test: Updates
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_chain_bumps_updated_at(pool: PgPool) {
    let manager = ManagerProfileRepo::create(&pool, &new_manager("upd@example.com"))
        .await
        .unwrap();
    let chain = GymChainRepo::create(&pool, &new_chain(manager.id, "Original"))
        .await
        .unwrap();

    let updated = GymChainRepo::update(
        &pool,
        chain.id,
        &UpdateGymChain {
            business_name: Some("Renamed".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .expect("chain should exist");

    assert_eq!(updated.business_name, "Renamed");
    assert_eq!(updated.business_email, "hq@example.com");
    assert_eq!(updated.created_at, chain.created_at);
    assert!(updated.updated_at >= chain.updated_at);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_missing_row_returns_none(pool: PgPool) {
    let result = GymChainRepo::update(&pool, Uuid::now_v7(), &UpdateGymChain::default())
        .await
        .unwrap();
    assert!(result.is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_changing_manager_email_clears_verification(pool: PgPool) {
    let manager = ManagerProfileRepo::create(&pool, &new_manager("old@example.com"))
        .await
        .unwrap();
    sqlx::query("UPDATE manager_profiles SET email_verified = true WHERE id = $1")
        .bind(manager.id)
        .execute(&pool)
        .await
        .unwrap();

    let same = ManagerProfileRepo::update(
        &pool,
        manager.id,
        &UpdateManagerProfile {
            email: Some("OLD@example.com".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert!(same.email_verified, "case-only change keeps verification");

    let changed = ManagerProfileRepo::update(
        &pool,
        manager.id,
        &UpdateManagerProfile {
            email: Some("new@example.com".to_string()),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(changed.email, "new@example.com");
    assert!(!changed.email_verified);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_amenity_toggle_and_update(pool: PgPool) {
    let manager = ManagerProfileRepo::create(&pool, &new_manager("amen@example.com"))
        .await
        .unwrap();
    let chain = GymChainRepo::create(&pool, &new_chain(manager.id, "Chain"))
        .await
        .unwrap();
    let facility = GymFacilityRepo::create(&pool, &new_facility(chain.id, "Site"))
        .await
        .unwrap();
    let amenity = AmenityRepo::create(&pool, &new_amenity(facility.id, "Rower", "Equipment"))
        .await
        .unwrap();

    let toggled = AmenityRepo::toggle_availability(&pool, amenity.id)
        .await
        .unwrap()
        .unwrap();
    assert!(!toggled.is_available);
    let toggled_back = AmenityRepo::toggle_availability(&pool, amenity.id)
        .await
        .unwrap()
        .unwrap();
    assert!(toggled_back.is_available);

    let updated = AmenityRepo::update(
        &pool,
        amenity.id,
        &UpdateAmenity {
            cost: Some(Decimal::new(1999, 2)),
            ..Default::default()
        },
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(updated.cost, Some(Decimal::new(1999, 2)));
    assert_eq!(updated.name, "Rower");

    assert!(AmenityRepo::delete(&pool, amenity.id).await.unwrap());
    assert!(AmenityRepo::find_by_id(&pool, amenity.id)
        .await
        .unwrap()
        .is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_terminate_employee(pool: PgPool) {
    let manager = ManagerProfileRepo::create(&pool, &new_manager("term@example.com"))
        .await
        .unwrap();
    let chain = GymChainRepo::create(&pool, &new_chain(manager.id, "Chain"))
        .await
        .unwrap();
    let employee = EmployeeRepo::create(&pool, &new_employee(chain.id, None, "Quinn"))
        .await
        .unwrap();

    let kept_active = EmployeeRepo::terminate(
        &pool,
        employee.id,
        NaiveDate::from_ymd_opt(2024, 3, 31).unwrap(),
        false,
    )
    .await
    .unwrap()
    .unwrap();
    assert_eq!(
        kept_active.termination_date,
        NaiveDate::from_ymd_opt(2024, 3, 31)
    );
    assert!(kept_active.is_active);

    let deactivated = EmployeeRepo::terminate(
        &pool,
        employee.id,
        NaiveDate::from_ymd_opt(2024, 4, 30).unwrap(),
        true,
    )
    .await
    .unwrap()
    .unwrap();
    assert!(!deactivated.is_active);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn test_reassign_manager(pool: PgPool) {
    let first = ManagerProfileRepo::create(&pool, &new_manager("first@example.com"))
        .await
        .unwrap();
    let second = ManagerProfileRepo::create(&pool, &new_manager("second@example.com"))
        .await
        .unwrap();
    let chain = GymChainRepo::create(&pool, &new_chain(first.id, "Handover Gym"))
        .await
        .unwrap();

    let moved = GymChainRepo::reassign_manager(&pool, chain.id, second.id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(moved.manager_profile_id, second.id);
    assert!(GymChainRepo::list_by_manager(&pool, first.id)
        .await
        .unwrap()
        .is_empty());
}
