//! Live list session on tokio.
//!
//! A [`ListSession`] is the event loop around a [`ListView`]: it receives
//! user commands, runs the debounce timer, sends fetches and deletes to the
//! endpoint and applies their results in the order they complete. After every
//! transition the view is published on a `watch` channel and the notifications
//! it raised are forwarded once.

use std::sync::Arc;

use tokio::sync::{mpsc, watch};
use tokio::task::{JoinHandle, JoinSet};
use tokio::time::{Instant, sleep_until};

use crate::domain::Resource;
use crate::domain::page::Page;
use crate::repository::errors::RepositoryResult;
use crate::repository::{ListQuery, SharedEndpoint};
use crate::search::{FetchRequest, SearchEffect, TimerToken};
use crate::view::{ListView, Notification};

const COMMAND_BUFFER: usize = 64;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionCommand<Id> {
    /// New content of the search box.
    Input(String),
    Clear,
    GoToPage(u32),
    Delete(Id),
    Scroll(u32),
}

type FetchOutcome<T> = (FetchRequest, RepositoryResult<Page<T>>);
type DeleteOutcome<Id> = (Id, RepositoryResult<()>);

pub struct ListSession<T: Resource> {
    view: ListView<T>,
    endpoint: SharedEndpoint<T>,
    per_page: Option<u32>,
    updates: watch::Sender<ListView<T>>,
    notifications: mpsc::UnboundedSender<Notification>,
    timer: Option<(TimerToken, Instant)>,
    fetches: JoinSet<FetchOutcome<T>>,
    deletes: JoinSet<DeleteOutcome<T::Id>>,
}

/// Caller side of a spawned session.
pub struct SessionHandle<T: Resource> {
    pub commands: mpsc::Sender<SessionCommand<T::Id>>,
    pub updates: watch::Receiver<ListView<T>>,
    pub notifications: mpsc::UnboundedReceiver<Notification>,
    pub task: JoinHandle<()>,
}

/// Starts a session for `view` on the current runtime.
pub fn spawn_session<T: Resource>(
    view: ListView<T>,
    endpoint: SharedEndpoint<T>,
    per_page: Option<u32>,
) -> SessionHandle<T> {
    let (commands_tx, commands_rx) = mpsc::channel(COMMAND_BUFFER);
    let (updates_tx, updates_rx) = watch::channel(view.clone());
    let (notifications_tx, notifications_rx) = mpsc::unbounded_channel();

    let session = ListSession {
        view,
        endpoint,
        per_page,
        updates: updates_tx,
        notifications: notifications_tx,
        timer: None,
        fetches: JoinSet::new(),
        deletes: JoinSet::new(),
    };

    SessionHandle {
        commands: commands_tx,
        updates: updates_rx,
        notifications: notifications_rx,
        task: tokio::spawn(session.run(commands_rx)),
    }
}

impl<T: Resource> ListSession<T> {
    /// Processes commands until the sender side is dropped and in-flight
    /// requests have settled.
    pub async fn run(mut self, mut commands: mpsc::Receiver<SessionCommand<T::Id>>) {
        let mut accepting = true;

        loop {
            if !accepting && self.fetches.is_empty() && self.deletes.is_empty() {
                break;
            }

            let deadline = self.timer.map_or_else(Instant::now, |(_, at)| at);

            tokio::select! {
                command = commands.recv(), if accepting => match command {
                    Some(command) => self.handle_command(command),
                    None => {
                        accepting = false;
                        self.timer = None;
                    }
                },
                () = sleep_until(deadline), if self.timer.is_some() => {
                    if let Some((token, _)) = self.timer.take()
                        && let Some(request) = self.view.search_mut().on_timer(token)
                    {
                        self.spawn_fetch(request);
                    }
                }
                Some(joined) = self.fetches.join_next(), if !self.fetches.is_empty() => {
                    match joined {
                        Ok((request, result)) => self.view.apply_fetch(&request, result),
                        Err(err) => log::error!("List fetch task failed: {err}"),
                    }
                }
                Some(joined) = self.deletes.join_next(), if !self.deletes.is_empty() => {
                    match joined {
                        Ok((id, result)) => self.view.apply_delete(id, result),
                        Err(err) => log::error!("Delete task failed: {err}"),
                    }
                }
            }

            self.publish();
        }

        log::debug!("List session for {} finished", T::PATH);
    }

    fn handle_command(&mut self, command: SessionCommand<T::Id>) {
        match command {
            SessionCommand::Input(value) => {
                let effects = self.view.search_mut().on_input(value);
                self.apply_effects(effects);
            }
            SessionCommand::Clear => {
                let effects = self.view.search_mut().on_clear();
                self.apply_effects(effects);
            }
            SessionCommand::GoToPage(page) => {
                let request = self.view.search_mut().on_page(page);
                self.spawn_fetch(request);
            }
            SessionCommand::Delete(id) => self.spawn_delete(id),
            SessionCommand::Scroll(offset) => self.view.set_scroll_offset(offset),
        }
    }

    fn apply_effects(&mut self, effects: Vec<SearchEffect>) {
        for effect in effects {
            match effect {
                SearchEffect::ArmTimer { token, delay } => {
                    self.timer = Some((token, Instant::now() + delay));
                }
                SearchEffect::CancelTimer(token) => {
                    if self.timer.is_some_and(|(armed, _)| armed == token) {
                        self.timer = None;
                    }
                }
                SearchEffect::Fetch(request) => self.spawn_fetch(request),
            }
        }
    }

    fn spawn_fetch(&mut self, request: FetchRequest) {
        let endpoint = Arc::clone(&self.endpoint);
        let query = ListQuery {
            search: request.search.clone(),
            page: request.page,
            per_page: self.per_page,
        };

        self.fetches.spawn(async move {
            let result = endpoint.fetch_page(&query).await;
            (request, result)
        });
    }

    fn spawn_delete(&mut self, id: T::Id) {
        let endpoint = Arc::clone(&self.endpoint);

        self.deletes.spawn(async move {
            let result = endpoint.delete_record(id).await;
            (id, result)
        });
    }

    fn publish(&mut self) {
        for notification in self.view.take_notifications() {
            // A dropped receiver only means nobody is listening any more.
            let _ = self.notifications.send(notification);
        }
        self.updates.send_replace(self.view.clone());
    }
}
