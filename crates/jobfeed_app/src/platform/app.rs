use std::io::{self, BufRead};
use std::ops::Range;
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::{Duration, Instant};

use jobfeed_core::{update, AppState, AppViewModel, FilterCriteria, Msg};
use jobfeed_logging::{feed_debug, feed_info};

use super::config::AppConfig;
use super::effects::EffectRunner;
use super::ui::commands::{parse_command, UiCommand};
use super::ui::constants::{CARD_HEIGHT_PX, HELP_TEXT, VIEWPORT_HEIGHT_PX};
use super::ui::render;
use super::ui::viewport::Viewport;

/// How long the loop sleeps when no timer is pending.
const IDLE_WAIT: Duration = Duration::from_millis(250);

/// Everything that can wake the host loop.
#[derive(Debug)]
pub enum HostEvent {
    /// A message for the core (engine results).
    Core(Msg),
    /// A parsed line from the terminal.
    Ui(UiCommand),
    /// Stdin reached end of input.
    InputClosed,
}

pub fn run_app(config: AppConfig) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::channel::<HostEvent>();
    let runner = EffectRunner::new(config.fetch_settings(), tx.clone())?;
    spawn_input_reader(tx);

    println!("{HELP_TEXT}");
    let mut host = Host::new(AppState::with_settings(&config.feed_settings()), runner);
    host.dispatch(Msg::Activated { at: Instant::now() });

    loop {
        let timeout = host
            .state
            .next_deadline()
            .map(|deadline| deadline.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_WAIT);

        match rx.recv_timeout(timeout) {
            Ok(HostEvent::Core(msg)) => host.dispatch(msg),
            Ok(HostEvent::Ui(UiCommand::Quit)) | Ok(HostEvent::InputClosed) => break,
            Ok(HostEvent::Ui(command)) => host.handle_command(command),
            Err(RecvTimeoutError::Timeout) => host.dispatch(Msg::Tick { at: Instant::now() }),
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    host.dispatch(Msg::Deactivated);
    feed_info!("jobfeed exiting");
    Ok(())
}

fn spawn_input_reader(tx: mpsc::Sender<HostEvent>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            match parse_command(&line) {
                Ok(Some(command)) => {
                    if tx.send(HostEvent::Ui(command)).is_err() {
                        return;
                    }
                }
                Ok(None) => {}
                Err(err) => eprintln!("{err}"),
            }
        }
        let _ = tx.send(HostEvent::InputClosed);
    });
}

/// Owns the core state and plays the role of the UI: criteria form, scroll
/// source and listing renderer.
struct Host {
    state: AppState,
    runner: EffectRunner,
    form: FilterCriteria,
    viewport: Viewport,
    last_rendered: Option<(AppViewModel, Range<usize>)>,
}

impl Host {
    fn new(state: AppState, runner: EffectRunner) -> Self {
        Self {
            state,
            runner,
            form: FilterCriteria::default(),
            viewport: Viewport::new(VIEWPORT_HEIGHT_PX, CARD_HEIGHT_PX),
            last_rendered: None,
        }
    }

    fn dispatch(&mut self, msg: Msg) {
        feed_debug!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        self.runner.run(effects);

        if self.state.consume_dirty() {
            self.refresh();
        }
    }

    fn handle_command(&mut self, command: UiCommand) {
        let at = Instant::now();
        match command {
            UiCommand::Edit(edit) => {
                edit.apply(&mut self.form);
                self.dispatch(Msg::CriteriaEdited {
                    criteria: self.form.clone(),
                    at,
                });
            }
            UiCommand::ScrollBy(delta) => {
                let metrics = self.viewport.scroll_by(delta);
                self.dispatch(Msg::Scrolled { metrics, at });
                self.refresh();
            }
            UiCommand::ScrollToBottom => {
                let metrics = self.viewport.scroll_to_bottom();
                self.dispatch(Msg::Scrolled { metrics, at });
                self.refresh();
            }
            UiCommand::Show => self.print_view(),
            UiCommand::Details(number) => self.print_details(number),
            UiCommand::Help => println!("{HELP_TEXT}"),
            UiCommand::Quit => {}
        }
    }

    /// Prints the view if it or the visible window changed since the last print.
    fn refresh(&mut self) {
        let mut view = self.state.view();
        view.dirty = false;
        self.viewport.set_cards(view.listings.len());
        let visible = self.viewport.visible_cards();
        if let Some((last_view, last_visible)) = &self.last_rendered {
            if *last_view == view && *last_visible == visible {
                return;
            }
        }
        println!("{}", render::render(&view, visible.clone()));
        self.last_rendered = Some((view, visible));
    }

    fn print_details(&self, number: usize) {
        let view = self.state.view();
        match render::details(&view, number) {
            Some(text) => println!("{text}"),
            None => println!("no job #{number} (showing {})", view.listings.len()),
        }
    }

    fn print_view(&self) {
        let view = self.state.view();
        println!("{}", render::render(&view, self.viewport.visible_cards()));
    }
}
