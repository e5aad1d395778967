pub mod attendance;
pub mod bus;
pub mod driver_rating;
pub mod notification_token;
pub mod payment;
pub mod rfid_card;
pub mod route;
pub mod route_assignment;
pub mod student;
pub mod user;

use db::filters::UserFilter;
use db::models::user::UserRole;
use db::repositories::{repository::Repository, user_repository::UserRepository};
use sea_orm::{DatabaseConnection, DbErr};

/// Ids of every user holding `role`, in insertion order.
pub(crate) async fn user_ids_with_role(
    db: &DatabaseConnection,
    role: UserRole,
) -> Result<Vec<i64>, DbErr> {
    let repo = UserRepository::new(db.clone());
    let filter = UserFilter::new().with_role(role);
    Ok(repo
        .find_all(&filter, Some("id".into()))
        .await?
        .into_iter()
        .map(|u| u.id)
        .collect())
}

/// Random point within a few kilometres of the depot.
pub(crate) fn near_depot() -> (f64, f64) {
    const DEPOT: (f64, f64) = (40.7128, -74.0060);
    let jitter = || (fastrand::f64() - 0.5) * 0.08;
    let round = |v: f64| (v * 1e6).round() / 1e6;
    (round(DEPOT.0 + jitter()), round(DEPOT.1 + jitter()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use db::factories::user_factory;
    use db::test_utils::setup_test_db;

    #[tokio::test]
    async fn user_ids_with_role_only_returns_that_role_in_order() {
        let db = setup_test_db().await;
        let d1 = user_factory::make(&db, UserRole::Driver).await;
        user_factory::make(&db, UserRole::Parent).await;
        let d2 = user_factory::make(&db, UserRole::Driver).await;

        let drivers = user_ids_with_role(&db, UserRole::Driver).await.unwrap();
        assert_eq!(drivers, vec![d1.id, d2.id]);
        assert!(user_ids_with_role(&db, UserRole::Admin).await.unwrap().is_empty());
    }

    #[test]
    fn near_depot_stays_close() {
        for _ in 0..50 {
            let (lat, lon) = near_depot();
            assert!((lat - 40.7128).abs() <= 0.04 + 1e-6);
            assert!((lon + 74.0060).abs() <= 0.04 + 1e-6);
        }
    }
}
