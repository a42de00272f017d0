pub mod content;
/// Roster, modes, items and game constants.
pub mod game;
pub mod ledger;
pub mod referee;
/// Round state machine.
pub mod round;
pub mod session;
mod sse;
pub mod timer;

use std::{
    sync::Arc,
    time::{Duration, SystemTime},
};

use tokio::{
    sync::{Mutex, MutexGuard},
    task::JoinHandle,
};
use uuid::Uuid;

use crate::config::AppConfig;

pub use self::session::{Session, SessionChange, SessionError, SessionView};
pub use self::sse::EventHub;

/// Application state shared across handlers and tasks.
pub type SharedState = Arc<AppState>;
/// Cadence of the round countdown.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

/// The session together with the tick source of its live round.
///
/// Both sit behind the same lock so that replacing the round and replacing
/// its tick source happen in one step.
pub struct SessionSlot {
    /// The live session.
    pub session: Session,
    ticker: Option<JoinHandle<()>>,
}

impl SessionSlot {
    fn new(session: Session) -> Self {
        Self {
            session,
            ticker: None,
        }
    }

    /// Install the tick source of a new round, aborting the previous one.
    pub fn replace_ticker(&mut self, handle: JoinHandle<()>) {
        self.stop_ticker();
        self.ticker = Some(handle);
    }

    /// Abort the tick source of the current round, if any.
    pub fn stop_ticker(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
    }

    /// Forget the handle of a tick source that is finishing on its own.
    pub fn release_ticker(&mut self) {
        self.ticker.take();
    }

    /// Whether a tick source is installed and still running.
    pub fn has_live_ticker(&self) -> bool {
        self.ticker
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }
}

impl Drop for SessionSlot {
    fn drop(&mut self) {
        self.stop_ticker();
    }
}

/// Central application state: the game session and the event hub.
pub struct AppState {
    id: Uuid,
    started_at: SystemTime,
    slot: Mutex<SessionSlot>,
    events: EventHub,
    tick_period: Duration,
}

impl AppState {
    /// Construct a new [`AppState`] wrapped in an [`Arc`] so it can be cloned cheaply.
    pub fn new(config: &AppConfig) -> SharedState {
        Self::with_session(Session::new(config.content().clone()), TICK_PERIOD)
    }

    /// Build the state around an already prepared session.
    pub fn with_session(session: Session, tick_period: Duration) -> SharedState {
        Arc::new(Self {
            id: Uuid::new_v4(),
            started_at: SystemTime::now(),
            slot: Mutex::new(SessionSlot::new(session)),
            events: EventHub::new(32),
            tick_period,
        })
    }

    /// Identifier of this session instance.
    pub fn id(&self) -> Uuid {
        self.id
    }

    /// When the session started.
    pub fn started_at(&self) -> SystemTime {
        self.started_at
    }

    /// Lock the session for one operation.
    pub async fn lock_session(&self) -> MutexGuard<'_, SessionSlot> {
        self.slot.lock().await
    }

    /// Read from the session under the lock.
    pub async fn read_session<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&Session) -> T,
    {
        let guard = self.slot.lock().await;
        f(&guard.session)
    }

    /// Broadcast hub used for the SSE stream.
    pub fn events(&self) -> &EventHub {
        &self.events
    }

    /// Delay between two countdown ticks.
    pub fn tick_period(&self) -> Duration {
        self.tick_period
    }
}
