//! The status message area under the signup form.
//!
//! A message is shown, then hidden again after a fixed delay. Only one hide
//! is ever pending: showing a new message cancels the old timer first, so an
//! earlier timer can never hide a newer message.

use std::cell::RefCell;

use gloo::timers::callback::Timeout;
use yew::Callback;

use crate::state::BoardAction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Error,
}

impl MessageKind {
    pub fn css_class(self) -> &'static str {
        match self {
            MessageKind::Success => "success",
            MessageKind::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub kind: MessageKind,
    pub text: String,
}

impl StatusMessage {
    pub fn success(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Success, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { kind: MessageKind::Error, text: text.into() }
    }
}

/// Runs a task once after a delay. Dropping the returned handle cancels it.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser `setTimeout` via gloo.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

pub struct MessageSlot<S: Scheduler> {
    scheduler: S,
    delay_ms: u32,
    sink: Callback<BoardAction>,
    pending_hide: RefCell<Option<S::Handle>>,
}

impl<S: Scheduler> MessageSlot<S> {
    pub fn new(scheduler: S, delay_ms: u32, sink: Callback<BoardAction>) -> Self {
        Self {
            scheduler,
            delay_ms,
            sink,
            pending_hide: RefCell::new(None),
        }
    }

    pub fn show(&self, message: StatusMessage) {
        // cancel before dispatching so a timer can't fire in between
        drop(self.pending_hide.borrow_mut().take());

        log::debug!("status {:?}: {}", message.kind, message.text);
        self.sink.emit(BoardAction::ShowMessage(message));

        let sink = self.sink.clone();
        let handle = self
            .scheduler
            .schedule(self.delay_ms, Box::new(move || sink.emit(BoardAction::HideMessage)));
        *self.pending_hide.borrow_mut() = Some(handle);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    use super::*;

    type Task = (u32, Rc<Cell<bool>>, Box<dyn FnOnce()>);

    #[derive(Default, Clone)]
    struct Queue(Rc<RefCell<Vec<Task>>>);

    struct Cancel(Rc<Cell<bool>>);

    impl Drop for Cancel {
        fn drop(&mut self) {
            self.0.set(true);
        }
    }

    impl Scheduler for Queue {
        type Handle = Cancel;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Cancel {
            let cancelled = Rc::new(Cell::new(false));
            self.0.borrow_mut().push((delay_ms, cancelled.clone(), task));
            Cancel(cancelled)
        }
    }

    impl Queue {
        fn fire_all(&self) {
            let tasks: Vec<Task> = self.0.borrow_mut().drain(..).collect();
            for (_, cancelled, task) in tasks {
                if !cancelled.get() {
                    task();
                }
            }
        }
    }

    fn recording_sink() -> (Callback<BoardAction>, Rc<RefCell<Vec<BoardAction>>>) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let s = seen.clone();
        (Callback::from(move |a| s.borrow_mut().push(a)), seen)
    }

    #[test]
    fn show_then_hide_after_delay() {
        let queue = Queue::default();
        let (sink, seen) = recording_sink();
        let slot = MessageSlot::new(queue.clone(), 5000, sink);

        slot.show(StatusMessage::success("ok"));
        assert_eq!(queue.0.borrow()[0].0, 5000);
        assert_eq!(*seen.borrow(), vec![BoardAction::ShowMessage(StatusMessage::success("ok"))]);

        queue.fire_all();
        assert_eq!(seen.borrow().last(), Some(&BoardAction::HideMessage));
    }

    #[test]
    fn newer_message_cancels_older_hide() {
        let queue = Queue::default();
        let (sink, seen) = recording_sink();
        let slot = MessageSlot::new(queue.clone(), 5000, sink);

        slot.show(StatusMessage::success("first"));
        slot.show(StatusMessage::error("second"));
        queue.fire_all();

        let hides = seen.borrow().iter().filter(|a| **a == BoardAction::HideMessage).count();
        assert_eq!(hides, 1);
    }

    #[test]
    fn css_classes() {
        assert_eq!(MessageKind::Success.css_class(), "success");
        assert_eq!(MessageKind::Error.css_class(), "error");
    }
}
