//! Per-model-family message rewrites applied before transmission.
//!
//! Some families impose restrictions on the role set; the rewrites live in
//! one table so a new family quirk is a new entry, not another conditional
//! in the request-building path.

use crate::registry::ModelFamily;
use crate::types::{ChatRole, ConversationTurn};

pub type MessageTransform = fn(&mut [ConversationTurn]);

static FAMILY_TRANSFORMS: &[(ModelFamily, MessageTransform)] =
    &[(ModelFamily::ReasoningPreview, demote_system_turns)];

/// Look up the transform for a family, if any.
pub fn transform_for(family: ModelFamily) -> Option<MessageTransform> {
    FAMILY_TRANSFORMS
        .iter()
        .find(|(f, _)| *f == family)
        .map(|(_, t)| *t)
}

/// Apply the family's transform in place; families without an entry pass
/// through unchanged.
pub fn apply(family: ModelFamily, turns: &mut [ConversationTurn]) {
    if let Some(transform) = transform_for(family) {
        transform(turns);
    }
}

// Reasoning preview models reject role=system outright.
fn demote_system_turns(turns: &mut [ConversationTurn]) {
    for turn in turns {
        if turn.role == ChatRole::System {
            turn.role = ChatRole::User;
        }
    }
}
