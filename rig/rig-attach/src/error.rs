//! Error types for attachment operations.

use thiserror::Error;

use crate::kind::ArmKind;
use crate::part::PartId;
use crate::socket::SocketId;

/// Result type for attachment operations.
pub type AttachResult<T> = Result<T, AttachError>;

/// Errors that can occur while mutating a rig.
///
/// Interactive failures (an occupied socket during a drag, a kind mismatch on
/// a release click) are reported as values, not errors — see
/// [`Rig::try_attach`](crate::Rig::try_attach). These variants cover
/// structural misuse: referencing entities the rig does not contain, or
/// violating compatibility in build-time placement.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AttachError {
    /// Part with the given ID is not registered in the rig.
    #[error("part {id} not found in rig")]
    PartNotFound {
        /// The missing part ID.
        id: PartId,
    },

    /// Socket with the given ID is not registered in the rig.
    #[error("socket {id} not found in rig")]
    SocketNotFound {
        /// The missing socket ID.
        id: SocketId,
    },

    /// Socket already holds another part.
    #[error("socket {socket} already holds part {occupant}")]
    SocketOccupied {
        /// The occupied socket.
        socket: SocketId,
        /// The part currently attached to it.
        occupant: PartId,
    },

    /// Part kind does not fit the socket's accepted kind.
    #[error("{part} part does not fit a socket accepting {socket}")]
    KindMismatch {
        /// The socket's accepted kind.
        socket: ArmKind,
        /// The offending part kind.
        part: ArmKind,
    },
}
