//! Per-gesture drag state machine.
//!
//! A gesture is one `Start`, any number of `Over` events (one per hover
//! target change), then either `End` or `Cancel`:
//!
//! ```text
//! Idle --start(valid source)--> Dragging --end(target)----> Idle (Dropped)
//!   ^                               |
//!   |                               +--end(no target)---> Idle (Cancelled)
//!   |                               +--cancel-----------> Idle (Cancelled)
//!   +--start(invalid source)--> Idle (Ignored)
//! ```
//!
//! While dragging, row-over-row and field-over-field hovers produce live
//! reorder intents. Only side-panel drops produce an intent at drop time.
//! Every unrecognised combination is a silent no-op.

use formforge_layout::{
    CreateField, FieldRegistry, LayoutIntent, MoveFieldAcrossRow, ReorderColumnsWithinRow,
    ReorderRows,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::activation::PointerSample;
use crate::tag::{DragData, DragTag};

/// One discrete event of a drag gesture, as dispatched by the host toolkit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "kebab-case")]
pub enum DragEvent {
    /// Pointer pressed on an element carrying `data`. When `pointer` holds
    /// the recorded press, the drag only starts if it satisfies the
    /// controller's activation constraint; empty means already activated.
    Start {
        data: DragData,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        pointer: Vec<PointerSample>,
    },
    /// Hover target changed; `None` when over nothing droppable
    Over {
        #[serde(default)]
        target: Option<DragData>,
    },
    /// Pointer released; `None` when released outside any target
    End {
        #[serde(default)]
        target: Option<DragData>,
    },
    /// Gesture aborted (escape, focus loss)
    Cancel,
}

impl DragEvent {
    /// A start the host has already activated.
    pub fn start(data: DragData) -> Self {
        Self::Start {
            data,
            pointer: Vec::new(),
        }
    }
}

/// Where the session is within a gesture.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DragPhase {
    #[default]
    Idle,
    Dragging {
        source: DragTag,
    },
}

/// How the last gesture ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragOutcome {
    Dropped,
    Cancelled,
    /// The gesture started on something that cannot be dragged
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct DragSession {
    phase: DragPhase,
    hover: Option<DragTag>,
    last_outcome: Option<DragOutcome>,
}

impl DragSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current phase of the gesture.
    pub fn phase(&self) -> &DragPhase {
        &self.phase
    }

    /// The source currently being dragged, if any.
    pub fn active(&self) -> Option<&DragTag> {
        match &self.phase {
            DragPhase::Dragging { source } => Some(source),
            DragPhase::Idle => None,
        }
    }

    /// Whether a gesture is in flight.
    pub fn is_dragging(&self) -> bool {
        self.active().is_some()
    }

    /// How the most recent gesture ended, `None` before the first one.
    pub fn last_outcome(&self) -> Option<DragOutcome> {
        self.last_outcome
    }

    /// Begin a gesture. Returns whether the source was accepted.
    ///
    /// Starting while already dragging abandons the previous gesture.
    pub fn start(&mut self, data: &DragData) -> bool {
        if self.is_dragging() {
            debug!("drag started while another was active; abandoning it");
            self.finish(DragOutcome::Cancelled);
        }
        match DragTag::classify(data).filter(DragTag::is_source) {
            Some(source) => {
                debug!(source = ?source, "drag started");
                self.phase = DragPhase::Dragging { source };
                self.hover = None;
                true
            }
            None => {
                trace!(kind = %data.kind, "drag source ignored");
                self.last_outcome = Some(DragOutcome::Ignored);
                false
            }
        }
    }

    /// The hover target changed. Returns the live-preview intent, if any.
    ///
    /// Repeated events for the target already hovered produce nothing, so an
    /// applied preview is not undone by the next pointer move over the same
    /// element.
    pub fn hover(
        &mut self,
        registry: &FieldRegistry,
        target: Option<&DragData>,
    ) -> Option<LayoutIntent> {
        let source = self.active()?.clone();
        let target = target.and_then(DragTag::classify);
        if target == self.hover {
            return None;
        }
        self.hover = target.clone();
        hover_intent(registry, &source, &target?)
    }

    /// The pointer was released. Returns the drop intent, if any, and
    /// returns to `Idle`.
    ///
    /// Releasing outside any recognised target counts as a cancel.
    pub fn drop(
        &mut self,
        registry: &FieldRegistry,
        target: Option<&DragData>,
    ) -> Option<LayoutIntent> {
        let source = self.active()?.clone();
        let Some(target) = target.and_then(DragTag::classify) else {
            self.finish(DragOutcome::Cancelled);
            return None;
        };
        self.finish(DragOutcome::Dropped);
        drop_intent(registry, &source, &target)
    }

    /// Abort the gesture. Previews already applied are not rolled back here.
    pub fn cancel(&mut self) {
        if self.is_dragging() {
            self.finish(DragOutcome::Cancelled);
        }
    }

    fn finish(&mut self, outcome: DragOutcome) {
        debug!(outcome = ?outcome, "drag finished");
        self.phase = DragPhase::Idle;
        self.hover = None;
        self.last_outcome = Some(outcome);
    }
}

/// Live-preview intent for `source` hovering over `target`.
///
/// Same-row detection wins over the cross-row move.
pub fn hover_intent(
    registry: &FieldRegistry,
    source: &DragTag,
    target: &DragTag,
) -> Option<LayoutIntent> {
    match (source, target) {
        (DragTag::Row(source), DragTag::Row(target)) => {
            Some(ReorderRows::new(source.clone(), target.clone()).into())
        }
        (DragTag::Field(source), DragTag::Field(target)) => {
            let source_row = registry.row_of(source)?;
            let target_row = registry.row_of(target)?;
            if source_row == target_row {
                Some(ReorderColumnsWithinRow::new(source.clone(), target.clone()).into())
            } else {
                Some(MoveFieldAcrossRow::new(source.clone(), target_row.clone()).into())
            }
        }
        _ => None,
    }
}

/// Intent produced at drop time for `source` released over `target`.
///
/// A placed field dropped on the empty zone is accepted but changes nothing.
pub fn drop_intent(
    registry: &FieldRegistry,
    source: &DragTag,
    target: &DragTag,
) -> Option<LayoutIntent> {
    match (source, target) {
        (DragTag::SideField(variant), DragTag::Field(target)) => {
            let row = registry.row_of(target)?;
            Some(CreateField::in_row(*variant, row.clone()).into())
        }
        (DragTag::SideField(variant), DragTag::DropZone) => {
            Some(CreateField::new_row(*variant).into())
        }
        // Includes a placed field over the drop zone
        _ => None,
    }
}

/// Classify a single event against the session's current source.
///
/// Pure: neither the session nor the registry is changed, and the
/// repeated-target filter of [`DragSession::hover`] is not applied.
pub fn classify_drag_event(
    session: &DragSession,
    registry: &FieldRegistry,
    event: &DragEvent,
) -> Option<LayoutIntent> {
    let source = session.active()?;
    match event {
        DragEvent::Over { target } => {
            let target = DragTag::classify(target.as_ref()?)?;
            hover_intent(registry, source, &target)
        }
        DragEvent::End { target } => {
            let target = DragTag::classify(target.as_ref()?)?;
            drop_intent(registry, source, &target)
        }
        DragEvent::Start { .. } | DragEvent::Cancel => None,
    }
}
