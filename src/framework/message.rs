//! # Form Messages
//!
//! Requests exchanged between a [`FormClient`](crate::framework::FormClient) and
//! its [`FormActor`](crate::framework::FormActor), one per user interface event.

use crate::framework::entity::FormEntity;
use crate::framework::error::FrameworkError;
use tokio::sync::oneshot;

/// Type alias for the one-shot response channel used by form loops.
pub type Response<T> = oneshot::Sender<Result<T, FrameworkError>>;

/// A user interface event addressed to a form.
///
/// - **Input**: a field changed; replies with the updated form.
/// - **Snapshot**: reads the current form.
/// - **Submit**: validates and, on success, resets the form.
/// - **Reset**: clears every field.
#[derive(Debug)]
pub enum FormRequest<T: FormEntity> {
    Input {
        field: T::Field,
        value: String,
        respond_to: Response<T>,
    },
    Snapshot {
        respond_to: Response<T>,
    },
    Submit {
        respond_to: Response<T::Submission>,
    },
    Reset {
        respond_to: Response<T>,
    },
}
