//! # Generic Client
//!
//! This module defines the generic client for sending events to a form loop.

use crate::framework::entity::FormEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::FormRequest;
use tokio::sync::{mpsc, oneshot};

/// A type-safe handle for sending events to a `FormActor`.
///
/// Holds only the channel sender, so it is cheap to clone. The loop exits once
/// every clone has been dropped.
pub struct FormClient<T: FormEntity> {
    sender: mpsc::Sender<FormRequest<T>>,
}

impl<T: FormEntity> Clone for FormClient<T> {
    fn clone(&self) -> Self {
        Self {
            sender: self.sender.clone(),
        }
    }
}

impl<T: FormEntity> FormClient<T> {
    pub fn new(sender: mpsc::Sender<FormRequest<T>>) -> Self {
        Self { sender }
    }

    pub async fn input(&self, field: T::Field, value: String) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(FormRequest::Input {
                field,
                value,
                respond_to,
            })
            .await
            .map_err(|_| FrameworkError::FormClosed)?;
        response.await.map_err(|_| FrameworkError::FormDropped)?
    }

    pub async fn snapshot(&self) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(FormRequest::Snapshot { respond_to })
            .await
            .map_err(|_| FrameworkError::FormClosed)?;
        response.await.map_err(|_| FrameworkError::FormDropped)?
    }

    pub async fn submit(&self) -> Result<T::Submission, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(FormRequest::Submit { respond_to })
            .await
            .map_err(|_| FrameworkError::FormClosed)?;
        response.await.map_err(|_| FrameworkError::FormDropped)?
    }

    pub async fn reset(&self) -> Result<T, FrameworkError> {
        let (respond_to, response) = oneshot::channel();
        self.sender
            .send(FormRequest::Reset { respond_to })
            .await
            .map_err(|_| FrameworkError::FormClosed)?;
        response.await.map_err(|_| FrameworkError::FormDropped)?
    }
}
