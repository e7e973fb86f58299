use std::time::Instant;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time;

use crate::error::AppResult;
use crate::event::DomainEvent;
use crate::ui::draw_app;

use super::core::App;
use super::event_bus::EventBusRuntime;
use super::terminal_session::TerminalSession;

#[derive(Debug)]
enum WaitEvent {
    Event(DomainEvent),
    Closed,
}

enum LoopControl {
    Continue { redraw: bool },
    Break,
}

impl App {
    pub async fn run(&mut self) -> AppResult<()> {
        let mut session = TerminalSession::enter()?;
        let (mut rx, mut bus) = EventBusRuntime::spawn();
        tracing::info!(
            items = self.state.editor.document().items.len(),
            "presentation session started"
        );

        let mut needs_redraw = true;
        loop {
            if needs_redraw {
                session.draw(|frame| draw_app(frame, &self.state))?;
                needs_redraw = false;
            }

            let waited = wait_next_event(&mut rx, self.state.search.deadline()).await;
            match self.handle_waited_event(waited) {
                LoopControl::Continue { redraw } => needs_redraw |= redraw,
                LoopControl::Break => break,
            }
        }

        bus.shutdown();
        session.restore()?;
        tracing::info!("presentation session ended");
        Ok(())
    }

    fn handle_waited_event(&mut self, waited: WaitEvent) -> LoopControl {
        match waited {
            WaitEvent::Event(DomainEvent::Input(event)) => {
                let outcome = self.handle_terminal_event(event);
                if outcome.quit_requested {
                    return LoopControl::Break;
                }
                LoopControl::Continue {
                    redraw: outcome.redraw,
                }
            }
            WaitEvent::Event(DomainEvent::InputError(message)) => {
                tracing::warn!(error = %message, "terminal input error");
                self.state
                    .status
                    .set("input", format!("input error: {message}"));
                LoopControl::Continue { redraw: true }
            }
            WaitEvent::Event(DomainEvent::DebounceDue) => LoopControl::Continue {
                redraw: self.poll_timers(Instant::now()),
            },
            WaitEvent::Closed => LoopControl::Break,
        }
    }
}

async fn wait_next_event(
    rx: &mut UnboundedReceiver<DomainEvent>,
    debounce_deadline: Option<Instant>,
) -> WaitEvent {
    let debounce = async {
        match debounce_deadline {
            Some(deadline) => time::sleep_until(time::Instant::from_std(deadline)).await,
            None => std::future::pending::<()>().await,
        }
    };

    tokio::select! {
        biased;
        maybe_event = rx.recv() => {
            match maybe_event {
                Some(event) => WaitEvent::Event(event),
                None => WaitEvent::Closed,
            }
        },
        _ = debounce => WaitEvent::Event(DomainEvent::DebounceDue),
    }
}
