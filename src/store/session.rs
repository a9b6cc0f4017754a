use tokio::sync::RwLock;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::session::Session;

#[derive(Debug, Default)]
pub struct SessionStore {
    current: RwLock<Option<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts a session for `username`, replacing whichever one was active.
    pub async fn start(&self, username: &str) -> Session {
        let session = Session::new(username);
        let previous = self.current.write().await.replace(session.clone());
        if let Some(previous) = previous {
            log::info!("Session for {} replaced", previous.username);
        }
        session
    }

    pub async fn end(&self) -> Option<Session> {
        self.current.write().await.take()
    }

    pub async fn current(&self) -> Option<Session> {
        self.current.read().await.clone()
    }

    /// Succeeds only for the id and username of the active session.
    pub async fn verify(&self, session_id: Uuid, username: &str) -> AppResult<Session> {
        match self.current.read().await.as_ref() {
            Some(session) if session.id == session_id && session.username == username => {
                Ok(session.clone())
            }
            Some(_) => Err(AppError::Unauthorized("Session has ended".to_string())),
            None => Err(AppError::Unauthorized("Not logged in".to_string())),
        }
    }
}
