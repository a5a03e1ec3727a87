use async_channel::{unbounded, Receiver, Sender};
use uuid::Uuid;

#[derive(Clone, Debug, PartialEq)]
pub enum Phase {
    Pending,
    Success,
    Failure,
}

/// A transient user-facing notification. Re-sending a notice with the same
/// id replaces it in place rather than stacking a new one.
#[derive(Clone, Debug)]
pub struct Notice {
    pub id: Uuid,
    pub phase: Phase,
    pub text: String,
}

#[derive(Clone)]
pub struct Notifier {
    tx: Sender<Notice>,
}

impl Notifier {
    pub fn new() -> (Self, Receiver<Notice>) {
        let (tx, rx) = unbounded();

        (Self { tx }, rx)
    }

    pub fn success<S: Into<String>>(&self, text: S) {
        self.send(Notice {
            id: Uuid::new_v4(),
            phase: Phase::Success,
            text: text.into(),
        });
    }

    pub fn failure<S: Into<String>>(&self, text: S) {
        self.send(Notice {
            id: Uuid::new_v4(),
            phase: Phase::Failure,
            text: text.into(),
        });
    }

    /// Starts an in-flight notice; resolve it through the returned handle.
    pub fn pending<S: Into<String>>(&self, text: S) -> NoticeHandle {
        let id = Uuid::new_v4();

        self.send(Notice {
            id,
            phase: Phase::Pending,
            text: text.into(),
        });

        NoticeHandle {
            id,
            tx: self.tx.clone(),
        }
    }

    fn send(&self, notice: Notice) {
        // a shell that has gone away just stops receiving notices
        let _ = self.tx.try_send(notice);
    }
}

pub struct NoticeHandle {
    id: Uuid,
    tx: Sender<Notice>,
}

impl NoticeHandle {
    pub fn succeeded<S: Into<String>>(self, text: S) {
        let _ = self.tx.try_send(Notice {
            id: self.id,
            phase: Phase::Success,
            text: text.into(),
        });
    }

    pub fn failed<S: Into<String>>(self, text: S) {
        let _ = self.tx.try_send(Notice {
            id: self.id,
            phase: Phase::Failure,
            text: text.into(),
        });
    }
}
