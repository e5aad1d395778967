use crate::error::{AppError, codes};
use crate::service::{Service, ServiceFuture, ToActiveModel};
use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
};
use db::{
    filters::UserFilter,
    models::user::{self, Model, UserRole},
    repositories::{repository::Repository, user_repository::UserRepository},
};
use rand::rngs::OsRng;
use sea_orm::{DbErr, Set, SqlErr};

#[derive(Debug, Clone)]
pub struct CreateUser {
    pub username: String,
    pub email: String,
    pub password: String,
    pub role: UserRole,
}

impl ToActiveModel<user::Entity> for CreateUser {
    fn into_active_model(self) -> Result<user::ActiveModel, AppError> {
        let username = self.username.trim();
        if username.is_empty() {
            return Err(AppError::validation("username cannot be empty"));
        }
        let email = self.email.trim();
        if email.is_empty() || !email.contains('@') {
            return Err(AppError::validation("email is not valid"));
        }
        if self.password.is_empty() {
            return Err(AppError::validation("password cannot be empty"));
        }

        Ok(user::ActiveModel {
            username: Set(username.to_string()),
            email: Set(email.to_string()),
            password_hash: Set(UserService::hash_password(&self.password)?),
            role: Set(self.role),
            ..Default::default()
        })
    }
}

pub struct UserService {
    repo: UserRepository,
}

impl<'a> Service<'a, user::Entity, CreateUser, UserFilter, UserRepository> for UserService {
    fn repository(&self) -> &UserRepository {
        &self.repo
    }

    // ↓↓↓ OVERRIDE DEFAULT BEHAVIOR IF NEEDED HERE ↓↓↓

    fn create(&'a self, params: CreateUser) -> ServiceFuture<'a, Model> {
        Box::pin(async move {
            let username = params.username.trim().to_string();
            let model = params.into_active_model()?;
            self.repo.create(model).await.map_err(|err| match err.sql_err() {
                Some(SqlErr::UniqueConstraintViolation(_)) => AppError::conflict(
                    codes::USER_EXISTS,
                    format!("A user with username {username} or that email already exists"),
                ),
                _ => AppError::Database(err),
            })
        })
    }
}

impl UserService {
    pub fn new(repo: UserRepository) -> Self {
        Self { repo }
    }

    // ↓↓↓ CUSTOM METHODS CAN BE DEFINED HERE ↓↓↓

    /// Returns the user when `password` matches the stored hash.
    pub async fn verify_credentials(
        &self,
        username: &str,
        password: &str,
    ) -> Result<Option<Model>, AppError> {
        let filter = UserFilter::new().with_username(username.trim());

        if let Some(user) = self.find_one(filter).await? {
            if Self::verify_password(&user, password) {
                return Ok(Some(user));
            }
        }

        Ok(None)
    }

    pub fn hash_password(password: &str) -> Result<String, AppError> {
        let salt = SaltString::generate(&mut OsRng);
        Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| hash.to_string())
            .map_err(|e| AppError::Database(DbErr::Custom(format!("password hashing failed: {e}"))))
    }

    pub fn verify_password(user: &Model, password: &str) -> bool {
        let parsed = match PasswordHash::new(&user.password_hash) {
            Ok(parsed) => parsed,
            Err(_) => return false,
        };

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}
