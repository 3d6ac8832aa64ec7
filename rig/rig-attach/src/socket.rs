//! Attachment sockets and occupancy.
//!
//! A [`Socket`] holds at most one part. Occupancy is mutated only through the
//! owning [`Rig`](crate::Rig), which keeps the part's back-reference in step;
//! the socket itself owns the compatibility predicate and its own visuals.

use nalgebra::Point3;
use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::highlight::HighlightLevels;
use crate::kind::ArmKind;
use crate::part::{Part, PartId};

/// Unique identifier for a socket registered in a rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SocketId(pub u64);

impl SocketId {
    /// Create a new socket ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl From<u64> for SocketId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for SocketId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Socket({})", self.0)
    }
}

/// An attachment point accepting at most one compatible part.
///
/// While empty, the socket shows a slot visual marking it as available; the
/// visual is hidden when a part snaps in. Hover highlighting only engages
/// while the socket is available.
///
/// # Example
///
/// ```
/// use rig_attach::{ArmKind, Part, Socket};
///
/// let socket = Socket::new("left_shoulder", ArmKind::Left);
/// let left_arm = Part::new("left_arm", ArmKind::Left);
/// let right_arm = Part::new("right_arm", ArmKind::Right);
///
/// assert!(socket.can_accept(&left_arm));
/// assert!(!socket.can_accept(&right_arm));
/// ```
#[derive(Debug, Clone)]
pub struct Socket {
    /// Display name.
    name: String,

    /// Kind of part this socket accepts, immutable.
    accepted: ArmKind,

    /// Currently attached part; `None` means available.
    occupant: Option<PartId>,

    /// World position parts snap to.
    position: Point3<f64>,

    /// Whether the available-slot visual is showing.
    slot_visible: bool,

    /// Whether hover highlighting is engaged.
    highlighted: bool,

    /// Emissive levels for the slot visual.
    levels: HighlightLevels,
}

impl Socket {
    /// Create a new empty socket at the origin.
    #[must_use]
    pub fn new(name: impl Into<String>, accepted: ArmKind) -> Self {
        Self {
            name: name.into(),
            accepted,
            occupant: None,
            position: Point3::origin(),
            slot_visible: true,
            highlighted: false,
            levels: HighlightLevels::new(1.0, 5.0),
        }
    }

    /// Get the socket name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the accepted kind.
    #[must_use]
    pub fn accepted(&self) -> ArmKind {
        self.accepted
    }

    /// Get the attached part, if any.
    #[must_use]
    pub fn occupant(&self) -> Option<PartId> {
        self.occupant
    }

    /// Get the snap position.
    #[must_use]
    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Check whether the available-slot visual is showing.
    #[must_use]
    pub fn slot_visible(&self) -> bool {
        self.slot_visible
    }

    /// Check whether hover highlighting is engaged.
    #[must_use]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    /// Current emissive intensity of the slot visual.
    #[must_use]
    pub fn intensity(&self) -> f64 {
        if self.highlighted {
            self.levels.highlight
        } else {
            self.levels.normal
        }
    }

    /// Check if the socket has no occupant.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.occupant.is_none()
    }

    /// Decide whether the given part may occupy this socket.
    ///
    /// An occupied socket rejects everything; otherwise the kinds must match
    /// with `Universal` acting as a wildcard on either side.
    #[must_use]
    pub fn can_accept(&self, part: &Part) -> bool {
        if !self.is_available() {
            return false;
        }
        ArmKind::matches(self.accepted, part.kind())
    }

    /// Set the snap position (builder pattern).
    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = Point3::new(x, y, z);
        self
    }

    /// Set the highlight levels (builder pattern).
    #[must_use]
    pub fn with_highlight_levels(mut self, levels: HighlightLevels) -> Self {
        self.levels = levels;
        self
    }

    /// Pure visual pass-through; occupancy is unaffected.
    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Begin hover feedback. Occupied sockets stay dark.
    pub fn hover_begin(&mut self) {
        if self.is_available() {
            self.highlighted = true;
        }
    }

    /// End hover feedback.
    pub fn hover_end(&mut self) {
        self.highlighted = false;
    }

    /// Take the part in, hiding the slot visual.
    ///
    /// Re-checks availability and kind compatibility; a violating call is
    /// rejected with a warning and leaves the occupant unchanged.
    pub(crate) fn accept(&mut self, part: PartId, kind: ArmKind) -> bool {
        if !self.is_available() || !ArmKind::matches(self.accepted, kind) {
            warn!(
                "cannot attach {} to '{}' - incompatible or occupied",
                part, self.name
            );
            return false;
        }
        self.occupant = Some(part);
        self.slot_visible = false;
        true
    }

    /// Clear the occupant, restoring the slot visual and dropping any
    /// highlight. Idempotent when already empty.
    pub(crate) fn release(&mut self) -> Option<PartId> {
        let released = self.occupant.take();
        if released.is_some() {
            self.slot_visible = true;
            self.highlighted = false;
        }
        released
    }
}
