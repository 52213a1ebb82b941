use tokio::sync::mpsc;

/// A change to the event store worth waking background work for.
#[derive(Debug, Clone)]
pub enum StoreEvent {
    EventCreated { event_id: String },
    EventRemoved { event_id: String },
}

#[derive(Clone)]
pub struct EventBus {
    tx: mpsc::Sender<StoreEvent>,
}

impl EventBus {
    pub fn new(buffer: usize) -> (Self, mpsc::Receiver<StoreEvent>) {
        let (tx, rx) = mpsc::channel(buffer);
        (Self { tx }, rx)
    }

    pub async fn emit(&self, event: StoreEvent) {
        let _ = self.tx.send(event).await;
    }
}
