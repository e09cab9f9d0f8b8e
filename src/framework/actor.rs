//! # Form Event Loop
//!
//! This module defines the `FormActor`, which owns one form and applies user
//! interface events to it strictly in arrival order.

use crate::framework::client::FormClient;
use crate::framework::entity::FormEntity;
use crate::framework::error::FrameworkError;
use crate::framework::message::FormRequest;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// The generic event loop that manages a single form.
///
/// **Concurrency Model**:
/// The loop is the only owner of the form value and handles one request at a
/// time, so no event ever observes a half-applied input or submission. No
/// `Mutex` is needed.
///
/// # Usage Pattern
///
/// 1.  **Create**: Call `FormActor::new()` to get the `actor` (loop) and `client` (interface).
/// 2.  **Wire**: Pass the context into `actor.run(context)`.
/// 3.  **Run**: Spawn the loop in a background task.
///
/// ```rust
/// use grand_palatial::framework::{FormActor, FormEntity};
///
/// #[derive(Clone, Debug, Default)]
/// struct Newsletter { email: String }
///
/// #[derive(Clone, Copy, Debug)]
/// struct Email;
/// impl std::fmt::Display for Email {
///     fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result { f.write_str("email") }
/// }
///
/// #[derive(Debug, thiserror::Error)]
/// #[error("email is empty")]
/// struct Empty;
///
/// impl FormEntity for Newsletter {
///     type Field = Email;
///     type Submission = String;
///     type Context = ();
///     type Error = Empty;
///
///     fn on_input(&mut self, _: Email, value: String, _: &()) { self.email = value; }
///     fn submit(&self, _: &()) -> Result<String, Empty> {
///         if self.email.is_empty() { Err(Empty) } else { Ok(self.email.clone()) }
///     }
/// }
///
/// #[tokio::main]
/// async fn main() {
///     let (actor, client) = FormActor::<Newsletter>::new(8);
///     tokio::spawn(actor.run(()));
///
///     client.input(Email, "guest@example.com".into()).await.unwrap();
///     assert_eq!(client.submit().await.unwrap(), "guest@example.com");
/// }
/// ```
///
/// # Operations
///
/// * **Input**: calls `on_input`, replies with a clone of the updated form.
/// * **Snapshot**: replies with a clone of the form.
/// * **Submit**: calls `submit`. On success the form is reset to its default and
///   `on_open` runs again; on rejection the form is left untouched.
/// * **Reset**: same reset as a successful submit, replies with the fresh form.
pub struct FormActor<T: FormEntity> {
    receiver: mpsc::Receiver<FormRequest<T>>,
    form: T,
    submitted: u32,
}

impl<T: FormEntity> FormActor<T> {
    /// Creates a new `FormActor` and its associated `FormClient`.
    ///
    /// # Arguments
    ///
    /// * `buffer_size` - The capacity of the MPSC channel. If the channel is full,
    ///   calls to the client will wait until there is space.
    pub fn new(buffer_size: usize) -> (Self, FormClient<T>) {
        let (sender, receiver) = mpsc::channel(buffer_size);
        let actor = Self {
            receiver,
            form: T::default(),
            submitted: 0,
        };
        (actor, FormClient::new(sender))
    }

    /// Runs the event loop until every client has been dropped.
    pub async fn run(mut self, context: T::Context) {
        // Extract just the type name (e.g., "BookingForm")
        let form_type = std::any::type_name::<T>()
            .split("::")
            .last()
            .unwrap_or("Unknown");

        self.form.on_open(&context);
        info!(form_type, "Form opened");

        while let Some(msg) = self.receiver.recv().await {
            match msg {
                FormRequest::Input {
                    field,
                    value,
                    respond_to,
                } => {
                    debug!(form_type, %field, ?value, "Input");
                    self.form.on_input(field, value, &context);
                    let _ = respond_to.send(Ok(self.form.clone()));
                }
                FormRequest::Snapshot { respond_to } => {
                    let _ = respond_to.send(Ok(self.form.clone()));
                }
                FormRequest::Submit { respond_to } => {
                    debug!(form_type, form = ?self.form, "Submit");
                    match self.form.submit(&context) {
                        Ok(submission) => {
                            self.submitted += 1;
                            info!(form_type, submitted = self.submitted, "Submission accepted");
                            self.reset(&context);
                            let _ = respond_to.send(Ok(submission));
                        }
                        Err(e) => {
                            warn!(form_type, error = %e, "Submission rejected");
                            let _ = respond_to.send(Err(FrameworkError::Rejected(Box::new(e))));
                        }
                    }
                }
                FormRequest::Reset { respond_to } => {
                    self.reset(&context);
                    info!(form_type, "Reset");
                    let _ = respond_to.send(Ok(self.form.clone()));
                }
            }
        }

        info!(form_type, submitted = self.submitted, "Form closed");
    }

    fn reset(&mut self, context: &T::Context) {
        self.form = T::default();
        self.form.on_open(context);
    }
}
