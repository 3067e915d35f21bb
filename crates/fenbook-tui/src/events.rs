use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, MouseEvent};
use std::time::Duration;
use tokio::sync::mpsc;

#[derive(Debug, Clone)]
pub enum Event {
    Key(KeyEvent),
    Mouse(MouseEvent),
    Tick,
}

pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
    shutdown_tx: mpsc::UnboundedSender<()>,
}

impl EventHandler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let (shutdown_tx, mut shutdown_rx) = mpsc::unbounded_channel();

        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = shutdown_rx.recv() => {
                        break;
                    }
                    _ = tokio::time::sleep(Duration::from_millis(16)) => {
                        if event::poll(Duration::from_millis(0)).unwrap_or(false) {
                            let forwarded = match event::read() {
                                Ok(CrosstermEvent::Key(key)) => tx.send(Event::Key(key)),
                                Ok(CrosstermEvent::Mouse(mouse)) => tx.send(Event::Mouse(mouse)),
                                _ => Ok(()),
                            };
                            if forwarded.is_err() {
                                break;
                            }
                        } else if tx.send(Event::Tick).is_err() {
                            break;
                        }
                    }
                }
            }
        });

        Self { rx, shutdown_tx }
    }

    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }

    pub fn stop(&self) {
        let _ = self.shutdown_tx.send(());
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}
