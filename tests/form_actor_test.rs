use grand_palatial::framework::{FormActor, FormEntity, FrameworkError};

// --- Test Form ---

#[derive(Clone, Debug, Default, PartialEq)]
struct Survey {
    answer: String,
    opened: u32,
}

#[derive(Clone, Copy, Debug)]
struct Answer;

impl std::fmt::Display for Answer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("answer")
    }
}

#[derive(Debug, thiserror::Error)]
#[error("answer must be yes or no")]
struct BadAnswer;

impl FormEntity for Survey {
    type Field = Answer;
    type Submission = bool;
    type Context = u32;
    type Error = BadAnswer;

    fn on_open(&mut self, ctx: &u32) {
        self.opened = *ctx;
    }

    fn on_input(&mut self, _field: Answer, value: String, _ctx: &u32) {
        self.answer = value;
    }

    fn submit(&self, _ctx: &u32) -> Result<bool, BadAnswer> {
        match self.answer.as_str() {
            "yes" => Ok(true),
            "no" => Ok(false),
            _ => Err(BadAnswer),
        }
    }
}

#[tokio::test]
async fn test_form_loop_lifecycle() {
    let (actor, client) = FormActor::<Survey>::new(4);
    let handle = tokio::spawn(actor.run(7));

    // on_open ran with the injected context
    let opened = client.snapshot().await.unwrap();
    assert_eq!(opened.opened, 7);

    let filled = client.input(Answer, "maybe".into()).await.unwrap();
    assert_eq!(filled.answer, "maybe");

    // Rejection leaves the form untouched
    match client.submit().await {
        Err(FrameworkError::Rejected(e)) => assert_eq!(e.to_string(), "answer must be yes or no"),
        other => panic!("Expected rejection, got {:?}", other),
    }
    assert_eq!(client.snapshot().await.unwrap().answer, "maybe");

    // Acceptance resets and re-opens
    client.input(Answer, "yes".into()).await.unwrap();
    assert!(client.submit().await.unwrap());
    let fresh = client.snapshot().await.unwrap();
    assert_eq!(fresh, Survey { answer: String::new(), opened: 7 });

    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_cloned_clients_share_one_form() {
    let (actor, client) = FormActor::<Survey>::new(16);
    let handle = tokio::spawn(actor.run(0));

    let other = client.clone();
    client.input(Answer, "yes".into()).await.unwrap();
    other.input(Answer, "no".into()).await.unwrap();

    assert_eq!(client.snapshot().await.unwrap().answer, "no");
    assert!(!other.submit().await.unwrap());

    // Every clone must go before the loop exits
    drop(other);
    drop(client);
    handle.await.unwrap();
}

#[tokio::test]
async fn test_closed_loop_reports_form_closed() {
    let (actor, client) = FormActor::<Survey>::new(1);
    drop(actor);

    assert!(matches!(client.snapshot().await, Err(FrameworkError::FormClosed)));
}
