use std::time::Duration;

use log::{debug, error, info};
use termion::input::TermRead;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::spin::TICK_PERIOD_MS;

/*
    Based on example code from https://github.com/ratatui/templates
 */
#[derive(Debug)]
pub struct TerminalEventHandler {
    pub(crate) sender: mpsc::UnboundedSender<Event>,
    pub(crate) receiver: mpsc::UnboundedReceiver<Event>,
}

/*
    A task that reads terminal events and emits tick events on the selection
    animation's cadence. Ticks keep flowing whether or not a run is active;
    the engine also retires toasts and advances confetti on them.
 */
pub struct EventTask {
    cancellation_token: CancellationToken,
    sender: mpsc::UnboundedSender<Event>,
}

#[derive(Debug)]
pub enum Event {
    /// Emitted every TICK_PERIOD_MS. Drives the selection animation,
    /// toast expiry and the confetti overlay.
    Tick,
    Termion(termion::event::Event),
}

impl TerminalEventHandler {
    pub fn new() -> TerminalEventHandler {
        let (sender, receiver) = mpsc::unbounded_channel();
        TerminalEventHandler { sender, receiver }
    }

    pub fn spawn_task(&self) -> TerminalEventTaskData {
        let cancellation_token = CancellationToken::new();

        info!("Spawning event handler task");
        let task = EventTask::new(
            cancellation_token.clone(),
            self.sender.clone()
        );
        let join_handle = tokio::spawn(async { task.run().await });

        TerminalEventTaskData {
            cancellation_token,
            join_handle
        }
    }
}

pub struct TerminalEventTaskData {
    pub cancellation_token: CancellationToken,
    pub join_handle: JoinHandle<()>
}

impl EventTask {
    pub fn new(cancellation_token: CancellationToken, sender: mpsc::UnboundedSender<Event>) -> Self {
        Self {
            cancellation_token,
            sender
        }
    }

    pub(crate) async fn run(self) {
        let tick_rate = Duration::from_millis(TICK_PERIOD_MS);
        let mut tick = tokio::time::interval(tick_rate);
        let mut events = termion::async_stdin().events();

        loop {
            if self.cancellation_token.is_cancelled() {
                info!("Event task cancelled");
                return;
            }

            // Drain whatever input arrived since the last tick
            while let Some(e) = events.next() {
                match e {
                    Ok(e) => {
                        if self.sender.is_closed() {
                            return;
                        }
                        debug!("Sending Termion event: {:?}", e);
                        self.send(Event::Termion(e));
                    },
                    Err(e) => {
                        error!("Error reading from stdin: {}", e);
                        return;
                    }
                }
            }

            tick.tick().await;
            self.send(Event::Tick);
        }
    }

    fn send(&self, event: Event) {
        // Ignores the result because shutting down the app drops the receiver, which causes the send
        // operation to fail. This is expected behavior and should not panic.
        let _ = self.sender.send(event);
    }
}
