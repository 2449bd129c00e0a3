//! Drag-and-drop session handling for the formforge layout model
//!
//! Translates raw drag events from a host toolkit into
//! [`formforge_layout::LayoutIntent`]s:
//!
//! - [`DragTag::classify`] types the `{type, id}` metadata on each element
//! - [`DragSession`] tracks one gesture and produces hover/drop intents
//! - [`DragController`] applies those intents under a [`PreviewPolicy`]
//! - [`PointerTracker`] decides when a press turns into a drag
//!
//! ```rust
//! use formforge_drag::{DragController, DragData, DragEvent};
//! use formforge_layout::{FieldRegistry, FieldVariant};
//!
//! let mut registry = FieldRegistry::new();
//! let mut controller = DragController::default();
//! controller.handle(
//!     &mut registry,
//!     &DragEvent::start(DragData::side_field(FieldVariant::Number)),
//! );
//! controller.handle(&mut registry, &DragEvent::End {
//!     target: Some(DragData::drop_zone()),
//! });
//! assert_eq!(registry.len(), 1);
//! ```

pub mod activation;
mod controller;
mod session;
pub mod tag;

pub use activation::{Activation, ActivationConstraint, PointerSample, PointerTracker};
pub use controller::{DragController, PreviewPolicy};
pub use session::{
    classify_drag_event, drop_intent, hover_intent, DragEvent, DragOutcome, DragPhase,
    DragSession,
};
pub use tag::{DragData, DragTag};
