use thiserror::Error;

use super::ControlId;

/// Misuse of the [`ControlTree`](super::ControlTree) building API.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    #[error("control {0:?} does not exist in this tree")]
    UnknownControl(ControlId),

    #[error("cannot make {parent:?} the parent of {child:?}: it is the control itself or one of its descendants")]
    CyclicParent { child: ControlId, parent: ControlId },
}
