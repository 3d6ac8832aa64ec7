//! Arm kinds and the compatibility rule.
//!
//! [`ArmKind`] tags both parts and sockets. A socket accepts a part when
//! either side is [`ArmKind::Universal`] or the kinds match exactly — the one
//! piece of real domain logic in the attachment system.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Compatibility tag shared by parts and sockets.
///
/// `Universal` is a wildcard on both sides: a universal part fits any socket,
/// and a universal socket accepts any part.
///
/// # Example
///
/// ```
/// use rig_attach::ArmKind;
///
/// assert!(ArmKind::matches(ArmKind::Left, ArmKind::Left));
/// assert!(ArmKind::matches(ArmKind::Left, ArmKind::Universal));
/// assert!(!ArmKind::matches(ArmKind::Left, ArmKind::Right));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ArmKind {
    /// Fits left-side sockets only.
    Left,
    /// Fits right-side sockets only.
    Right,
    /// Fits anywhere; accepts anything.
    Universal,
}

impl ArmKind {
    /// All kinds, for exhaustive iteration.
    pub const ALL: [Self; 3] = [Self::Left, Self::Right, Self::Universal];

    /// Decide whether a part kind may occupy a socket kind.
    ///
    /// Total function: wildcard on either side wins, otherwise the kinds must
    /// be equal.
    #[must_use]
    pub fn matches(socket: Self, part: Self) -> bool {
        socket == Self::Universal || part == Self::Universal || socket == part
    }

    /// Human-readable name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Left => "Left",
            Self::Right => "Right",
            Self::Universal => "Universal",
        }
    }
}

impl std::fmt::Display for ArmKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
