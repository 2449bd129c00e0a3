//! `formforge drag` - replay a drag-gesture script.

use anyhow::Result;
use formforge_drag::{ActivationConstraint, DragController, DragEvent, PreviewPolicy};
use formforge_layout::{FieldRegistry, Mutation};
use tracing::{debug, info};

/// Replay `events` through a controller. Starts carrying pointer samples are
/// gated on `activation`. A gesture still in flight at the end of the script
/// is cancelled.
pub fn run_drag(
    mut registry: FieldRegistry,
    events: &[DragEvent],
    policy: PreviewPolicy,
    activation: ActivationConstraint,
) -> Result<FieldRegistry> {
    let mut controller = DragController::new(policy).with_activation(activation);
    let mut produced = 0usize;
    for event in events {
        if let Some(intent) = controller.handle(&mut registry, event) {
            debug!(op = intent.op(), "drag event produced intent");
            produced += 1;
        }
    }
    if controller.session().is_dragging() {
        info!("script ended mid-gesture; cancelling");
        controller.cancel();
    }
    registry.check_invariants()?;
    debug!(events = events.len(), produced, %policy, "replayed drag script");
    Ok(registry)
}
