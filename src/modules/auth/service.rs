use super::dto::UserRole;
use super::session::{SessionToken, SESSION_DAYS_DURATION};
use crate::database::models;
use crate::database::schema::{session, user};
use anyhow::Result;
use bcrypt::{hash, verify, DEFAULT_COST};
use chrono::{Duration, Utc};
use diesel::prelude::*;
use diesel_async::{pooled_connection::deadpool::Pool, AsyncPgConnection, RunQueryDsl};
use ipnetwork::IpNetwork;
use rand_chacha::ChaCha8Rng;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};

pub enum UserFromCredentialsError {
    NotFound,
    InternalError,
    InvalidPassword,
}

#[derive(Clone)]
pub struct AuthService {
    rng: Arc<Mutex<ChaCha8Rng>>,
    db_conn_pool: Pool<AsyncPgConnection>,
}

impl AuthService {
    pub fn new(db_conn_pool: Pool<AsyncPgConnection>, rng: ChaCha8Rng) -> AuthService {
        AuthService {
            rng: Arc::new(Mutex::new(rng)),
            db_conn_pool,
        }
    }

    fn next_session_token(&self) -> SessionToken {
        let mut rng = self.rng.lock().expect("session token rng lock poisoned");

        SessionToken::generate_new(&mut rng)
    }

    /// generates a new session token and creates a new session record on the DB for the user
    pub async fn new_session(
        &self,
        user_identifier: i32,
        client_ip: IpAddr,
        user_agent: String,
    ) -> Result<SessionToken> {
        let conn = &mut self.db_conn_pool.get().await?;

        let ses_token = self.next_session_token();

        diesel::insert_into(session::dsl::session)
            .values((
                session::dsl::user_id.eq(user_identifier),
                session::dsl::session_token.eq(ses_token.into_database_value()),
                session::dsl::expires_at.eq(Utc::now() + Duration::days(SESSION_DAYS_DURATION)),
                session::dsl::ip.eq(IpNetwork::from(client_ip)),
                session::dsl::user_agent.eq(user_agent),
            ))
            .execute(conn)
            .await?;

        Ok(ses_token)
    }

    /// gets the user of a unexpired session with the given token
    pub async fn get_user_from_session_token(
        &self,
        token: SessionToken,
    ) -> Result<Option<models::User>> {
        let conn = &mut self.db_conn_pool.get().await?;

        let maybe_user = session::dsl::session
            .inner_join(user::dsl::user)
            .filter(session::dsl::session_token.eq(token.into_database_value()))
            .filter(session::dsl::expires_at.gt(Utc::now()))
            .select(models::User::as_select())
            .first::<models::User>(conn)
            .await
            .optional()?;

        Ok(maybe_user)
    }

    /// deletes the session with the given token, if it exists
    pub async fn delete_session(&self, token: SessionToken) -> Result<()> {
        let conn = &mut self.db_conn_pool.get().await?;

        diesel::delete(
            session::dsl::session
                .filter(session::dsl::session_token.eq(token.into_database_value())),
        )
        .execute(conn)
        .await?;

        Ok(())
    }

    /// fetches a user by email and checks the password against the stored bcrypt hash
    pub async fn get_user_from_credentials(
        &self,
        email: String,
        password: String,
    ) -> Result<models::User, UserFromCredentialsError> {
        use UserFromCredentialsError as Err;

        let conn = &mut self
            .db_conn_pool
            .get()
            .await
            .map_err(|_| Err::InternalError)?;

        let maybe_user = user::dsl::user
            .filter(user::dsl::email.eq(&email))
            .select(models::User::as_select())
            .first::<models::User>(conn)
            .await
            .optional()
            .map_err(|_| Err::InternalError)?;

        let found_user = maybe_user.ok_or(Err::NotFound)?;

        let password_ok =
            verify(password, &found_user.password).map_err(|_| Err::InternalError)?;

        if password_ok {
            Ok(found_user)
        } else {
            Err(Err::InvalidPassword)
        }
    }

    /// checks if a email is in use by a existing user
    pub async fn check_email_in_use(&self, email: &str) -> Result<bool> {
        let conn = &mut self.db_conn_pool.get().await?;

        let maybe_user_id: Option<i32> = user::dsl::user
            .select(user::dsl::id)
            .filter(user::dsl::email.eq(email))
            .first(conn)
            .await
            .optional()?;

        Ok(maybe_user_id.is_some())
    }

    /// creates a user with the given role, storing the password as a bcrypt hash
    pub async fn register_user(
        &self,
        email: &str,
        password: &str,
        role: UserRole,
    ) -> Result<models::User> {
        let conn = &mut self.db_conn_pool.get().await?;

        let password_hash = hash(password, DEFAULT_COST)?;

        let created_user = diesel::insert_into(user::dsl::user)
            .values((
                user::dsl::email.eq(email),
                user::dsl::password.eq(password_hash),
                user::dsl::role.eq(role.to_string()),
            ))
            .get_result::<models::User>(conn)
            .await?;

        Ok(created_user)
    }
}
