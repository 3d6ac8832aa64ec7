//! Notifications emitted by an interaction session.

use rig_attach::{PartId, SocketId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Outbound notification for UI/display consumers.
///
/// Emitted after every state-affecting action and drained with
/// [`Session::take_events`](crate::Session::take_events).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SessionEvent {
    /// A part's state changed, or the hover focus moved.
    ///
    /// Carries the part now in focus, or `None` when hover was cleared.
    PartStateChanged(Option<PartId>),

    /// A release click landed on a socket that refused the dragged part.
    ///
    /// The drag continues; this exists so the UI can give feedback.
    AttachRejected {
        /// The part still being dragged.
        part: PartId,
        /// The socket that refused it.
        socket: SocketId,
    },
}
