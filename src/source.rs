//! Where quiz items come from.

use async_trait::async_trait;
use reqwest::Client;
use thiserror::Error;

use crate::models::QuizItem;

/// Errors raised while fetching a quiz item.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum FetchError {
    #[error("quiz endpoint returned status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// A supplier of random quiz items.
///
/// The production impl talks to the HTTP backend; tests script their own.
#[async_trait]
pub trait QuizSource: Send + Sync {
    /// Fetch one random quiz item.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` on transport failure or a non-success status.
    async fn fetch_random(&self) -> Result<QuizItem, FetchError>;
}

/// Quiz source backed by the backend's `/api/quizzes/random` endpoint.
#[derive(Clone)]
pub struct HttpQuizSource {
    client: Client,
    base_url: String,
}

impl HttpQuizSource {
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl QuizSource for HttpQuizSource {
    async fn fetch_random(&self) -> Result<QuizItem, FetchError> {
        let url = format!("{}/api/quizzes/random", self.base_url.trim_end_matches('/'));

        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::HttpStatus(response.status()));
        }

        Ok(response.json().await?)
    }
}
