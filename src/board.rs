use crate::catalog::ActivityCatalog;
use crate::chat::ChatLog;
use crate::errors::{AppError, AppResult};
use crate::filter::{filter_activities, FilterCriteria};
use crate::models::{
    Activity, ActivityDraft, BoardEvent, ChatMessage, DashboardSnapshot, Notification, User,
};
use crate::notifications::NotificationCenter;
use crate::session::DashboardSession;
use crate::storage::Storage;
use crate::timers::{self, TimerHandle};
use crate::validation::validate_draft;
use chrono::Local;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::mpsc::UnboundedSender;
use tokio::time::Duration;

pub const UNDO_WINDOW: Duration = Duration::from_secs(10);
pub const LOAD_MORE_LATENCY: Duration = Duration::from_millis(500);
pub const SAVE_REDIRECT_DELAY: Duration = Duration::from_millis(1500);

const CREATED_MESSAGE: &str = "Oglas je uspješno kreiran!";
const UPDATED_MESSAGE: &str = "Oglas je uspješno ažuriran!";

struct PendingDelete {
    activity: Activity,
    was_durable: bool,
    token: u64,
    timer: TimerHandle,
}

/// Orchestrates view-layer intents against the catalog and the session
/// state. One instance per viewing session; methods are the intent
/// surface, `BoardEvent`s flow back through an attached listener.
#[derive(Clone)]
pub struct BoardCore {
    catalog: Arc<Mutex<ActivityCatalog>>,
    session: Arc<Mutex<DashboardSession>>,
    chat: Arc<Mutex<ChatLog>>,
    notifications: Arc<Mutex<NotificationCenter>>,
    pending_delete: Arc<Mutex<Option<PendingDelete>>>,
    delete_seq: Arc<AtomicU64>,
    listener: Arc<Mutex<Option<UnboundedSender<BoardEvent>>>>,
    current_user: User,
}

impl BoardCore {
    pub fn new(storage: Arc<dyn Storage>, current_user: User) -> Self {
        Self {
            catalog: Arc::new(Mutex::new(ActivityCatalog::load(storage))),
            session: Arc::new(Mutex::new(DashboardSession::new())),
            chat: Arc::new(Mutex::new(ChatLog::new())),
            notifications: Arc::new(Mutex::new(NotificationCenter::new())),
            pending_delete: Arc::new(Mutex::new(None)),
            delete_seq: Arc::new(AtomicU64::new(0)),
            listener: Arc::new(Mutex::new(None)),
            current_user,
        }
    }

    pub fn attach_listener(&self, sender: UnboundedSender<BoardEvent>) {
        let mut listener = self.listener.lock().expect("listener lock");
        *listener = Some(sender);
    }

    pub fn current_user(&self) -> &User {
        &self.current_user
    }

    fn emit(&self, event: BoardEvent) {
        let mut listener = self.listener.lock().expect("listener lock");
        if let Some(sender) = listener.as_ref() {
            if sender.send(event).is_err() {
                tracing::warn!("board event listener dropped");
                *listener = None;
            }
        }
    }

    // ─── Dashboard ──────────────────────────────────────────────────────

    pub fn dashboard(&self) -> DashboardSnapshot {
        let catalog = self.catalog.lock().expect("catalog lock");
        let session = self.session.lock().expect("session lock");

        let filtered = filter_activities(catalog.collection(), session.criteria());
        DashboardSnapshot {
            activities: session.pager().visible_slice(&filtered).to_vec(),
            total_matches: filtered.len(),
            has_more: session.pager().has_more(filtered.len()),
            loading: session.pager().is_loading(),
            joined: session.joined_ids(),
        }
    }

    pub fn criteria(&self) -> FilterCriteria {
        self.session.lock().expect("session lock").criteria().clone()
    }

    pub fn set_criteria(&self, criteria: FilterCriteria) {
        let mut session = self.session.lock().expect("session lock");
        session.set_criteria(criteria);
    }

    pub fn activity(&self, id: &str) -> Option<Activity> {
        let catalog = self.catalog.lock().expect("catalog lock");
        catalog.get(id).cloned()
    }

    /// The view layer calls this when its scroll sentinel becomes visible.
    /// Returns false when a load is already in flight or everything is
    /// shown; otherwise the next page lands after the simulated latency.
    pub fn load_more(&self) -> bool {
        let total = {
            let catalog = self.catalog.lock().expect("catalog lock");
            let mut session = self.session.lock().expect("session lock");
            let total = filter_activities(catalog.collection(), session.criteria()).len();
            if !session.pager_mut().begin_load(total) {
                return false;
            }
            total
        };
        tracing::debug!(total, "loading next page");

        let core = self.clone();
        let _ = timers::schedule(LOAD_MORE_LATENCY, move || {
            let catalog = core.catalog.lock().expect("catalog lock");
            let mut session = core.session.lock().expect("session lock");
            let total = filter_activities(catalog.collection(), session.criteria()).len();
            session.pager_mut().complete_load(total);
            drop(session);
            drop(catalog);
            core.emit(BoardEvent::DashboardChanged);
        });
        true
    }

    // ─── Create / Edit ──────────────────────────────────────────────────

    pub fn create_activity(&self, draft: &ActivityDraft) -> AppResult<Activity> {
        validate_draft(draft, Local::now().date_naive())?;

        let created = {
            let mut catalog = self
                .catalog
                .lock()
                .map_err(|_| AppError::Internal("catalog lock poisoned".to_string()))?;
            catalog.create(draft, &self.current_user)?
        };

        self.emit(BoardEvent::ActivitySaved {
            activity: created.clone(),
            message: CREATED_MESSAGE.to_string(),
        });
        self.schedule_return_to_dashboard();
        Ok(created)
    }

    pub fn update_activity(&self, id: &str, draft: &ActivityDraft) -> AppResult<Activity> {
        validate_draft(draft, Local::now().date_naive())?;

        let updated = {
            let mut catalog = self
                .catalog
                .lock()
                .map_err(|_| AppError::Internal("catalog lock poisoned".to_string()))?;
            catalog.update(id, draft)?
        };

        self.emit(BoardEvent::ActivitySaved {
            activity: updated.clone(),
            message: UPDATED_MESSAGE.to_string(),
        });
        self.schedule_return_to_dashboard();
        Ok(updated)
    }

    fn schedule_return_to_dashboard(&self) {
        let core = self.clone();
        let _ = timers::schedule(SAVE_REDIRECT_DELAY, move || {
            core.emit(BoardEvent::ReturnToDashboard);
        });
    }

    // ─── Delete with undo ───────────────────────────────────────────────

    /// Deletes immediately (collection and durable slot) and opens the
    /// undo window. A second delete while a window is open makes the
    /// prior deletion permanent.
    pub fn delete_activity(&self, id: &str) -> AppResult<Option<Activity>> {
        let removed = {
            let mut catalog = self
                .catalog
                .lock()
                .map_err(|_| AppError::Internal("catalog lock poisoned".to_string()))?;
            catalog.delete(id)?
        };
        let Some((activity, was_durable)) = removed else {
            return Ok(None);
        };

        {
            let mut session = self.session.lock().expect("session lock");
            session.retain_joined(|joined_id| joined_id != id);
        }

        let token = self.delete_seq.fetch_add(1, Ordering::SeqCst);
        let core = self.clone();
        let timer = timers::schedule(UNDO_WINDOW, move || core.expire_undo(token));

        {
            let mut pending = self.pending_delete.lock().expect("pending lock");
            if let Some(prior) = pending.take() {
                prior.timer.cancel();
                tracing::debug!(activity_id = %prior.activity.id, "prior delete made permanent");
            }
            *pending = Some(PendingDelete {
                activity: activity.clone(),
                was_durable,
                token,
                timer,
            });
        }

        self.emit(BoardEvent::UndoOffered {
            activity: activity.clone(),
            expires_in_ms: UNDO_WINDOW.as_millis() as u64,
        });
        Ok(Some(activity))
    }

    fn expire_undo(&self, token: u64) {
        let expired = {
            let mut pending = self.pending_delete.lock().expect("pending lock");
            if pending.as_ref().map(|entry| entry.token) == Some(token) {
                pending.take()
            } else {
                None
            }
        };
        if let Some(entry) = expired {
            tracing::info!(activity_id = %entry.activity.id, "undo window elapsed, delete is permanent");
            self.emit(BoardEvent::UndoExpired {
                activity_id: entry.activity.id,
            });
        }
    }

    /// Reverses the most recent delete while its window is open. Returns
    /// `None` when there is nothing left to undo.
    pub fn undo_delete(&self) -> AppResult<Option<Activity>> {
        let Some(entry) = self
            .pending_delete
            .lock()
            .map_err(|_| AppError::Internal("pending lock poisoned".to_string()))?
            .take()
        else {
            return Ok(None);
        };
        entry.timer.cancel();

        {
            let mut catalog = self
                .catalog
                .lock()
                .map_err(|_| AppError::Internal("catalog lock poisoned".to_string()))?;
            catalog.restore(entry.activity.clone(), entry.was_durable)?;
        }

        self.emit(BoardEvent::ActivityRestored {
            activity: entry.activity.clone(),
        });
        Ok(Some(entry.activity))
    }

    // ─── Join toggle ────────────────────────────────────────────────────

    /// Session-local join toggle; never touches the catalog or the slot.
    /// Returns the membership state after the call.
    pub fn toggle_join(&self, id: &str) -> AppResult<bool> {
        let activity = self
            .activity(id)
            .ok_or_else(|| AppError::NotFound(format!("activity {id}")))?;
        let mut session = self.session.lock().expect("session lock");
        Ok(session.toggle_join(&activity))
    }

    pub fn is_joined(&self, id: &str) -> bool {
        self.session.lock().expect("session lock").is_joined(id)
    }

    // ─── Chat ───────────────────────────────────────────────────────────

    pub fn messages(&self) -> Vec<ChatMessage> {
        self.chat.lock().expect("chat lock").messages().to_vec()
    }

    pub fn post_message(&self, body: &str) -> Option<ChatMessage> {
        let mut chat = self.chat.lock().expect("chat lock");
        chat.post(&self.current_user, body)
    }

    // ─── Notifications ──────────────────────────────────────────────────

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .expect("notifications lock")
            .list()
            .to_vec()
    }

    pub fn unread_notifications(&self) -> usize {
        self.notifications
            .lock()
            .expect("notifications lock")
            .unread_count()
    }

    pub fn mark_notification_read(&self, id: &str) -> bool {
        self.notifications
            .lock()
            .expect("notifications lock")
            .mark_read(id)
    }

    pub fn mark_all_notifications_read(&self) -> usize {
        self.notifications
            .lock()
            .expect("notifications lock")
            .mark_all_read()
    }
}
