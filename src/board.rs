//! The activity board controller.
//!
//! Every mutation is followed by a full reload: the server's collection is
//! the only truth, nothing is patched locally.

use yew::Callback;

use crate::api::ActivityApi;
use crate::config::BoardConfig;
use crate::error::ApiError;
use crate::state::BoardAction;
use crate::status::{MessageSlot, Scheduler, StatusMessage};

pub const SIGNUP_OK_FALLBACK: &str = "Signed up successfully.";
pub const SIGNUP_REJECTED_FALLBACK: &str = "An error occurred";
pub const SIGNUP_FAILED: &str = "Failed to sign up. Please try again.";
pub const REMOVE_OK_FALLBACK: &str = "Participant removed.";
pub const REMOVE_REJECTED_FALLBACK: &str = "Failed to remove participant.";
pub const REMOVE_FAILED: &str = "Error removing participant.";

pub fn confirm_prompt(activity: &str, email: &str) -> String {
    format!("Remove {email} from {activity}?")
}

fn failure_text(err: &ApiError, rejected_fallback: &str, failed: &str) -> String {
    match err {
        ApiError::Rejected { detail: Some(d), .. } => d.clone(),
        ApiError::Rejected { detail: None, .. } => rejected_fallback.to_string(),
        ApiError::Transport(_) | ApiError::Decode(_) => failed.to_string(),
    }
}

pub struct ActivityBoard<A, S: Scheduler> {
    api: A,
    supports_removal: bool,
    sink: Callback<BoardAction>,
    messages: MessageSlot<S>,
}

impl<A: ActivityApi, S: Scheduler> ActivityBoard<A, S> {
    pub fn new(api: A, scheduler: S, config: &BoardConfig, sink: Callback<BoardAction>) -> Self {
        Self {
            api,
            supports_removal: config.supports_removal,
            messages: MessageSlot::new(scheduler, config.message_timeout_ms, sink.clone()),
            sink,
        }
    }

    /// Fetches the whole collection and replaces the card list and selector.
    /// On failure only the card list changes, to the error placeholder.
    pub async fn load_and_render(&self) {
        match self.api.fetch_activities().await {
            Ok(collection) => {
                log::debug!("loaded {} activities", collection.len());
                self.sink.emit(BoardAction::Loaded(collection));
            }
            Err(e) => {
                log::error!("Error fetching activities: {e}");
                self.sink.emit(BoardAction::LoadFailed);
            }
        }
    }

    pub async fn submit_signup(&self, email: &str, activity: &str) {
        match self.api.signup(activity, email).await {
            Ok(reply) => {
                log::info!("signed up {email} for {activity}");
                self.sink.emit(BoardAction::ResetDraft);
                self.load_and_render().await;
                let text = reply.message.unwrap_or_else(|| SIGNUP_OK_FALLBACK.to_string());
                self.messages.show(StatusMessage::success(text));
            }
            Err(e) => {
                log::error!("Error signing up {email} for {activity}: {e}");
                let text = failure_text(&e, SIGNUP_REJECTED_FALLBACK, SIGNUP_FAILED);
                self.messages.show(StatusMessage::error(text));
            }
        }
    }

    /// Asks `confirm` first; a declined prompt sends nothing.
    pub async fn submit_unregister<F>(&self, activity: &str, email: &str, confirm: F)
    where
        F: FnOnce(&str) -> bool,
    {
        if !self.supports_removal {
            log::warn!("unregister requested but removal is disabled");
            return;
        }
        if !confirm(&confirm_prompt(activity, email)) {
            log::debug!("removal of {email} from {activity} declined");
            return;
        }

        match self.api.unregister(activity, email).await {
            Ok(reply) => {
                log::info!("removed {email} from {activity}");
                self.load_and_render().await;
                let text = reply.message.unwrap_or_else(|| REMOVE_OK_FALLBACK.to_string());
                self.messages.show(StatusMessage::success(text));
            }
            Err(e) => {
                let text = failure_text(&e, REMOVE_REJECTED_FALLBACK, REMOVE_FAILED);
                self.messages.show(StatusMessage::error(text));
            }
        }
    }
}
