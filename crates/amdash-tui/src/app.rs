//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.
//!
//! [`AppState`] holds everything the UI thread owns and never performs I/O
//! itself: every transition that needs data returns [`Ticket`]s, which the
//! loop hands to the [`Fetcher`]. Tickets carry the generation of the view
//! that issued them, and results from an older generation are dropped.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent},
    fetch::{FetchRequest, Fetched, Fetcher, Payload, Ticket},
    routes::Route,
    theme::Theme,
    views::{View, ViewAction},
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        help::HelpPopup,
        nav_bar::NavBar,
    },
};
use amdash_core::config::UiConfig;
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame, Terminal,
};
use std::{io, time::Duration};
use tokio::sync::mpsc::{error::TryRecvError, UnboundedReceiver};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    /// Keys go to the active screen.
    Body,
    /// Vim-style `:` command line is active.
    Command,
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

/// Oldest entries are dropped once `history` reaches this length.
pub const HISTORY_LIMIT: usize = 64;

pub struct AppState {
    pub route: Route,
    /// Routes to return to with `Esc`/`Backspace`, most recent last.
    pub history: Vec<Route>,
    pub view: View,
    /// Bumped whenever the active view's data request changes.
    pub generation: u64,
    pub focus: Focus,
    pub theme: Theme,
    pub ui: UiConfig,
    pub base_url: String,
    /// Result of the last `/health` probe; `None` until one completes.
    pub health: Option<bool>,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub quit: bool,
}

impl AppState {
    /// Build the state on the overview screen. The returned tickets load the
    /// overview and probe the backend's health.
    pub fn new(ui: UiConfig, base_url: impl Into<String>, theme: Theme) -> (Self, Vec<Ticket>) {
        let route = Route::Overview;
        let (view, request) = View::for_route(&route, &ui);
        let s = Self {
            route,
            history: Vec::new(),
            view,
            generation: 0,
            focus: Focus::Body,
            theme,
            ui,
            base_url: base_url.into(),
            health: None,
            show_help: false,
            command_bar: CommandBarState::default(),
            quit: false,
        };
        let tickets = request
            .map(|r| s.ticket(r))
            .into_iter()
            .chain([s.health_ticket()])
            .collect();
        (s, tickets)
    }

    fn ticket(&self, request: FetchRequest) -> Ticket {
        Ticket {
            generation: self.generation,
            request,
        }
    }

    fn health_ticket(&self) -> Ticket {
        self.ticket(FetchRequest::Health)
    }

    /// Open `route`, remembering the current one for [`back`](Self::back).
    /// Opening the active route again is a no-op.
    pub fn navigate(&mut self, route: Route) -> Option<Ticket> {
        if route == self.route {
            return None;
        }
        tracing::debug!(from = %self.route, to = %route, "navigate");
        let prev = std::mem::replace(&mut self.route, route);
        if self.history.len() >= HISTORY_LIMIT {
            self.history.remove(0);
        }
        self.history.push(prev);
        self.enter()
    }

    /// Return to the previous route, if any.
    pub fn back(&mut self) -> Option<Ticket> {
        let prev = self.history.pop()?;
        tracing::debug!(from = %self.route, to = %prev, "back");
        self.route = prev;
        self.enter()
    }

    /// Build a fresh view for `self.route` under a new generation.
    fn enter(&mut self) -> Option<Ticket> {
        let (view, request) = View::for_route(&self.route, &self.ui);
        self.view = view;
        self.generation += 1;
        request.map(|r| self.ticket(r))
    }

    /// Re-issue the active view's fetch and the health probe.
    pub fn reload(&mut self) -> Vec<Ticket> {
        let mut tickets = Vec::new();
        if let Some(request) = self.view.reload() {
            self.generation += 1;
            tracing::debug!(view = self.view.name(), generation = self.generation, "reload");
            tickets.push(self.ticket(request));
        }
        tickets.push(self.health_ticket());
        tickets
    }

    /// Apply a finished fetch. Health results always apply; everything else
    /// only when it was issued by the current generation.
    pub fn apply(&mut self, fetched: Fetched) {
        if let Payload::Health(ok) = fetched.payload {
            self.health = Some(ok);
            return;
        }
        if fetched.generation != self.generation {
            tracing::debug!(
                stale = fetched.generation,
                current = self.generation,
                "dropping stale fetch result"
            );
            return;
        }
        self.view.apply(fetched.payload);
    }

    pub fn handle(&mut self, event: AppEvent) -> Vec<Ticket> {
        // Help popup intercepts all events; only close keys pass through.
        if self.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                self.show_help = false;
            }
            return Vec::new();
        }

        if self.focus == Focus::Command {
            return self.handle_command(event);
        }

        match event {
            AppEvent::Char('?') => {
                tracing::debug!("help popup opened");
                self.show_help = true;
                Vec::new()
            }
            AppEvent::Char(':') => {
                tracing::debug!("entering command mode");
                self.command_bar.clear();
                self.focus = Focus::Command;
                Vec::new()
            }
            AppEvent::Quit => {
                tracing::debug!("quit");
                self.quit = true;
                Vec::new()
            }
            AppEvent::OpenDashboard => self.navigate(Route::Overview).into_iter().collect(),
            AppEvent::OpenEvents => self.navigate(Route::Events).into_iter().collect(),
            AppEvent::Reload => self.reload(),
            AppEvent::Escape | AppEvent::Backspace => self.back().into_iter().collect(),

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => Vec::new(),

            other => match self.view.handle(&other) {
                Some(ViewAction::Open(route)) => self.navigate(route).into_iter().collect(),
                Some(ViewAction::Fetch(request)) => {
                    self.generation += 1;
                    vec![self.ticket(request)]
                }
                None => Vec::new(),
            },
        }
    }

    fn handle_command(&mut self, event: AppEvent) -> Vec<Ticket> {
        match event {
            AppEvent::Escape => {
                tracing::debug!("command bar cancelled");
                self.command_bar.clear();
                self.focus = Focus::Body;
                Vec::new()
            }
            AppEvent::Quit => {
                self.quit = true;
                Vec::new()
            }
            AppEvent::Enter => match Command::parse(&self.command_bar.input) {
                Ok(cmd) => {
                    tracing::debug!(command = ?cmd, "executing command");
                    self.command_bar.clear();
                    self.focus = Focus::Body;
                    execute_command(self, cmd)
                }
                Err(msg) if msg.is_empty() => {
                    // Empty input: just close
                    self.command_bar.clear();
                    self.focus = Focus::Body;
                    Vec::new()
                }
                Err(msg) => {
                    // Show the error; bar stays open
                    self.command_bar.error = Some(msg);
                    Vec::new()
                }
            },
            other => {
                self.command_bar.handle(&other);
                Vec::new()
            }
        }
    }
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App {
    state: AppState,
    fetcher: Fetcher,
    results: UnboundedReceiver<Fetched>,
    pending: Vec<Ticket>,
}

impl App {
    pub fn new(
        ui: UiConfig,
        theme: Theme,
        fetcher: Fetcher,
        results: UnboundedReceiver<Fetched>,
    ) -> Self {
        let (state, pending) = AppState::new(ui, fetcher.base_url(), theme);
        App {
            state,
            fetcher,
            results,
            pending,
        }
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn dispatch(&mut self, tickets: Vec<Ticket>) {
        for ticket in tickets {
            self.fetcher.dispatch(ticket);
        }
    }

    fn drain_results(&mut self) {
        loop {
            match self.results.try_recv() {
                Ok(fetched) => self.state.apply(fetched),
                Err(TryRecvError::Empty) => break,
                Err(TryRecvError::Disconnected) => {
                    tracing::warn!("fetch channel closed");
                    break;
                }
            }
        }
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let initial = std::mem::take(&mut self.pending);
        self.dispatch(initial);

        loop {
            self.drain_results();

            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == crossterm::event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping while the command line is open
                        let app_event = if self.state.focus == Focus::Command {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            let tickets = self.state.handle(ev);
                            self.dispatch(tickets);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            let tickets = self.state.handle(ev);
                            self.dispatch(tickets);
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

/// Draw the whole screen: nav bar, active view, status/command row, and the
/// help popup on top when open.
pub fn draw(frame: &mut Frame, state: &AppState) {
    let area = frame.area();

    let [nav, body, status] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    frame.render_widget(
        NavBar::new(state.route.section(), &state.base_url, state.health, &state.theme),
        nav,
    );

    let body = Rect {
        x: body.x + 1,
        width: body.width.saturating_sub(2),
        ..body
    };
    state.view.render(body, frame.buffer_mut(), &state.theme);

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    if state.focus == Focus::Command {
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), status);
        let col = state.command_bar.cursor_col(status);
        frame.set_cursor_position((col, status.y));
        return;
    }

    let mut spans = vec![Span::styled(format!(" {}", state.route), state.theme.muted)];
    if state.view.is_loading() {
        spans.push(Span::styled("  loading…", state.theme.muted));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), status);
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
