//! End-to-end scenarios for the three exercises
//! Run with: cargo test --test scenarios_test

use std::sync::Once;
use tokio::sync::mpsc;

use solid_kata::application::services::Notifier;
use solid_kata::domain::entities::{Duck, Penguin, User};
use solid_kata::domain::traits::{MessageSender, Movable, UserStore};
use solid_kata::infrastructure::senders::{EmailSender, NotificationSender};
use solid_kata::infrastructure::storage::UserRecordStore;

static INIT: Once = Once::new();

fn ensure_init() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt::try_init();
    });
}

/// Notifier over the email channel delivers the payload verbatim
#[tokio::test]
async fn test_notify_via_email_outputs_message() {
    ensure_init();

    let (tx, mut rx) = mpsc::channel(4);
    let notifier = Notifier::new(EmailSender::new().with_mirror(tx));

    notifier.notify("Hello").await.expect("notify should succeed");

    let line = rx.recv().await.expect("one line should be emitted");
    assert!(line.contains("Hello"), "output should reference the message: {}", line);
    assert!(rx.try_recv().is_err(), "email channel emits exactly one line");
}

/// Swapping the concrete sender changes nothing for the caller
#[tokio::test]
async fn test_notify_via_notification_outputs_message() {
    ensure_init();

    let (tx, mut rx) = mpsc::channel(4);
    let notifier = Notifier::new(NotificationSender::new().with_mirror(tx));

    notifier.notify("Hello").await.expect("notify should succeed");

    let mut lines = Vec::new();
    while let Ok(line) = rx.try_recv() {
        lines.push(line);
    }
    assert!(lines.iter().any(|l| l.contains("Hello")));
}

/// Every sender accepts an empty message
#[tokio::test]
async fn test_senders_accept_empty_message() {
    ensure_init();

    let senders: Vec<Box<dyn MessageSender>> = vec![
        Box::new(EmailSender::new()),
        Box::new(NotificationSender::new()),
    ];
    for sender in &senders {
        sender.send("").await.expect("send should succeed");
    }
}

/// Both bird variants complete a full parade without panicking
#[test]
fn test_every_bird_advances() {
    ensure_init();

    let birds: Vec<Box<dyn Movable>> = vec![Box::new(Duck), Box::new(Penguin)];
    for bird in &birds {
        bird.advance();
    }
}

/// Saving a user emits a record referencing the name and leaves the
/// entity untouched
#[tokio::test]
async fn test_save_user_outputs_name_and_preserves_entity() {
    ensure_init();

    let (tx, mut rx) = mpsc::channel(4);
    let store = UserRecordStore::new("database").with_mirror(tx);
    let user = User::new("Alex", 30);
    let before = user.clone();

    store.save_user(&user).await.expect("save should succeed");

    let line = rx.recv().await.expect("one record line should be emitted");
    assert!(line.contains("Alex"));
    assert_eq!(user, before, "save must not mutate the entity");
}
