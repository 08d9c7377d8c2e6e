//! Submission status shown on the public forms.

use std::time::Duration;

use dioxus::prelude::*;

#[derive(Clone, Debug, Default, PartialEq)]
pub enum FormStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Failed(String),
}

impl FormStatus {
    pub fn is_busy(&self) -> bool {
        matches!(self, FormStatus::Submitting)
    }

    /// Button label for the contact form.
    pub fn contact_label(&self) -> &'static str {
        match self {
            FormStatus::Idle => "Get Quick Quote",
            FormStatus::Submitting => "Sending...",
            FormStatus::Success => "Sent!",
            FormStatus::Failed(_) => "Try Again",
        }
    }

    /// Button label for the newsletter form.
    pub fn subscribe_label(&self) -> &'static str {
        match self {
            FormStatus::Success => "Subscribed!",
            FormStatus::Submitting => "Subscribing...",
            FormStatus::Idle | FormStatus::Failed(_) => "Subscribe",
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            FormStatus::Failed(message) => Some(message),
            _ => None,
        }
    }
}

/// The status of one form together with a counter bumped on every change.
///
/// A delayed revert carries the generation it was scheduled for, so it only
/// clears the status it was meant for and never a later one that happens to
/// be equal.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StatusCell {
    status: FormStatus,
    generation: u64,
}

impl StatusCell {
    pub fn status(&self) -> &FormStatus {
        &self.status
    }

    /// Replace the status and return its generation.
    pub fn set(&mut self, status: FormStatus) -> u64 {
        self.generation += 1;
        self.status = status;
        self.generation
    }

    /// Back to idle if nothing changed since `generation`.
    pub fn revert(&mut self, generation: u64) -> bool {
        if self.generation != generation {
            return false;
        }
        self.set(FormStatus::Idle);
        true
    }
}

/// Set `cell` back to idle after `secs`, unless it changed after `generation`.
pub fn revert_after(mut cell: Signal<StatusCell>, generation: u64, secs: u32) {
    spawn(async move {
        sleep(Duration::from_secs(u64::from(secs))).await;
        if cell.peek().generation == generation {
            cell.write().revert(generation);
        }
    });
}

pub async fn sleep(duration: Duration) {
    #[cfg(target_arch = "wasm32")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(target_arch = "wasm32"))]
    {
        tokio::time::sleep(duration).await;
    }
}
