//! Drag controller: drives a [`DragSession`] against a registry and decides
//! when hover intents become authoritative.

use std::fmt;
use std::str::FromStr;

use formforge_layout::{apply_intent, FieldRegistry, LayoutIntent};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::activation::{Activation, ActivationConstraint, PointerSample, PointerTracker};
use crate::session::{DragEvent, DragOutcome, DragSession};
use crate::tag::DragData;

/// When live hover previews reach the authoritative registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PreviewPolicy {
    /// Hover intents are applied immediately; cancelling keeps them
    #[default]
    Optimistic,
    /// Hover intents are applied to a staged copy that the drop commits and a
    /// cancel discards
    Buffered,
}

impl PreviewPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Optimistic => "optimistic",
            Self::Buffered => "buffered",
        }
    }
}

impl fmt::Display for PreviewPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PreviewPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "optimistic" => Ok(Self::Optimistic),
            "buffered" => Ok(Self::Buffered),
            other => Err(format!("unknown preview policy: {other}")),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct DragController {
    policy: PreviewPolicy,
    activation: ActivationConstraint,
    session: DragSession,
    staged: Option<FieldRegistry>,
}

impl DragController {
    pub fn new(policy: PreviewPolicy) -> Self {
        Self {
            policy,
            activation: ActivationConstraint::default(),
            session: DragSession::new(),
            staged: None,
        }
    }

    /// Gate recorded presses on `constraint` instead of the default.
    pub fn with_activation(mut self, constraint: ActivationConstraint) -> Self {
        self.activation = constraint;
        self
    }

    pub fn policy(&self) -> PreviewPolicy {
        self.policy
    }

    pub fn activation(&self) -> ActivationConstraint {
        self.activation
    }

    /// Whether a recorded press turns into a drag. No samples means the host
    /// already activated it.
    pub fn activates(&self, pointer: &[PointerSample]) -> bool {
        if pointer.is_empty() {
            return true;
        }
        let state = PointerTracker::new(self.activation).replay(pointer);
        if state != Activation::Activated {
            debug!(?state, "press did not activate a drag");
        }
        state == Activation::Activated
    }

    pub fn session(&self) -> &DragSession {
        &self.session
    }

    /// The registry to render: the staged copy while a buffered gesture is in
    /// flight, otherwise `registry` itself.
    pub fn view<'a>(&'a self, registry: &'a FieldRegistry) -> &'a FieldRegistry {
        self.staged.as_ref().unwrap_or(registry)
    }

    /// Start a gesture on `data`. Returns whether the source was accepted.
    pub fn begin(&mut self, registry: &FieldRegistry, data: &DragData) -> bool {
        self.staged = None;
        let accepted = self.session.start(data);
        if accepted && self.policy == PreviewPolicy::Buffered {
            self.staged = Some(registry.clone());
        }
        accepted
    }

    /// Handle a hover-target change, previewing the resulting intent.
    pub fn hover(
        &mut self,
        registry: &mut FieldRegistry,
        target: Option<&DragData>,
    ) -> Option<LayoutIntent> {
        let view = self.staged.as_ref().unwrap_or(&*registry);
        let intent = self.session.hover(view, target)?;
        self.preview(registry, &intent);
        Some(intent)
    }

    /// Handle the release. Staged previews are committed first, then the
    /// drop intent, if any. A release outside every target behaves like
    /// [`cancel`](Self::cancel).
    pub fn drop(
        &mut self,
        registry: &mut FieldRegistry,
        target: Option<&DragData>,
    ) -> Option<LayoutIntent> {
        let view = self.staged.as_ref().unwrap_or(&*registry);
        let intent = self.session.drop(view, target);
        if self.session.last_outcome() == Some(DragOutcome::Cancelled) {
            if self.staged.take().is_some() {
                debug!("released outside any target; discarding staged drag previews");
            }
            return None;
        }
        if let Some(staged) = self.staged.take() {
            debug!("committing staged drag previews");
            *registry = staged;
        }
        if let Some(intent) = &intent {
            self.commit(registry, intent);
        }
        intent
    }

    /// Abort the gesture. Buffered previews are discarded; optimistic ones
    /// have already landed and stay.
    pub fn cancel(&mut self) {
        if self.staged.take().is_some() {
            debug!("discarding staged drag previews");
        }
        self.session.cancel();
    }

    /// Apply a hover intent according to the preview policy.
    pub fn preview(&mut self, registry: &mut FieldRegistry, intent: &LayoutIntent) {
        match self.policy {
            PreviewPolicy::Optimistic => *registry = apply_intent(registry, intent),
            PreviewPolicy::Buffered => {
                let staged = self.staged.get_or_insert_with(|| registry.clone());
                *staged = apply_intent(staged, intent);
            }
        }
    }

    /// Apply an intent to the authoritative registry.
    pub fn commit(&mut self, registry: &mut FieldRegistry, intent: &LayoutIntent) {
        *registry = apply_intent(registry, intent);
    }

    /// Dispatch one gesture event. Returns the intent it produced, if any.
    pub fn handle(
        &mut self,
        registry: &mut FieldRegistry,
        event: &DragEvent,
    ) -> Option<LayoutIntent> {
        match event {
            DragEvent::Start { data, pointer } => {
                if self.activates(pointer) {
                    self.begin(registry, data);
                }
                None
            }
            DragEvent::Over { target } => self.hover(registry, target.as_ref()),
            DragEvent::End { target } => self.drop(registry, target.as_ref()),
            DragEvent::Cancel => {
                self.cancel();
                None
            }
        }
    }
}
