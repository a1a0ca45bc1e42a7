use std::rc::Rc;

use yew::Reducible;

use crate::model::{Activity, ActivityCollection, Participant};
use crate::status::StatusMessage;

pub const LOADING_TEXT: &str = "Loading activities...";
pub const LOAD_FAILED_TEXT: &str = "Failed to load activities. Please try again later.";
pub const NO_PARTICIPANTS_TEXT: &str = "No participants yet";
pub const SELECT_PLACEHOLDER: &str = "-- Select an activity --";

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityCard {
    pub name: String,
    pub description: String,
    pub schedule: String,
    pub spots_left: i64,
    pub participants: Vec<Participant>,
    pub removable: bool,
}

impl ActivityCard {
    pub fn from_activity(activity: &Activity, removable: bool) -> Self {
        Self {
            name: activity.name.clone(),
            description: activity.description.clone(),
            schedule: activity.schedule.clone(),
            spots_left: activity.spots_left(),
            participants: activity
                .participants
                .iter()
                .map(|p| Participant::from_email(p))
                .collect(),
            removable,
        }
    }

    pub fn availability_text(&self) -> String {
        format!("{} spots left", self.spots_left)
    }

    /// `(N)` next to the participants heading; nothing for an empty roster.
    pub fn participant_count(&self) -> Option<String> {
        if self.participants.is_empty() {
            None
        } else {
            Some(format!("({})", self.participants.len()))
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ListView {
    Loading,
    Ready(Vec<ActivityCard>),
    Failed,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct SignupDraft {
    pub email: String,
    pub activity: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum BoardAction {
    Loaded(ActivityCollection),
    LoadFailed,
    EditEmail(String),
    SelectActivity(String),
    ResetDraft,
    ShowMessage(StatusMessage),
    HideMessage,
}

/// Everything the page shows. Rebuilt from the server's collection on every
/// load; never patched locally.
#[derive(Debug, Clone, PartialEq)]
pub struct BoardState {
    pub list: ListView,
    /// Activity names for the selector, placeholder not included.
    pub options: Vec<String>,
    pub draft: SignupDraft,
    pub message: Option<StatusMessage>,
    pub supports_removal: bool,
}

impl BoardState {
    pub fn new(supports_removal: bool) -> Self {
        Self {
            list: ListView::Loading,
            options: Vec::new(),
            draft: SignupDraft::default(),
            message: None,
            supports_removal,
        }
    }

    pub fn apply(&mut self, action: BoardAction) {
        match action {
            BoardAction::Loaded(collection) => {
                let removable = self.supports_removal;
                self.list = ListView::Ready(
                    collection
                        .iter()
                        .map(|a| ActivityCard::from_activity(a, removable))
                        .collect(),
                );
                self.options = collection.names();
            }
            // selector keeps whatever it had
            BoardAction::LoadFailed => self.list = ListView::Failed,
            BoardAction::EditEmail(email) => self.draft.email = email,
            BoardAction::SelectActivity(activity) => self.draft.activity = activity,
            BoardAction::ResetDraft => self.draft = SignupDraft::default(),
            BoardAction::ShowMessage(msg) => self.message = Some(msg),
            BoardAction::HideMessage => self.message = None,
        }
    }

    pub fn cards(&self) -> &[ActivityCard] {
        match &self.list {
            ListView::Ready(cards) => cards,
            _ => &[],
        }
    }
}

impl Reducible for BoardState {
    type Action = BoardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        next.apply(action);
        Rc::new(next)
    }
}
