//! Detachable parts and their state machine.
//!
//! A [`Part`] cycles between [`PartState::Detached`], [`PartState::Held`]
//! (while dragged by the pointer) and [`PartState::Attached`]. Transitions
//! that involve a socket go through the owning [`Rig`](crate::Rig) so the
//! part/socket pairing is always mutated on both sides; the operations here
//! are the ones that are safe on a part alone.

use nalgebra::{Point3, Vector3};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::highlight::HighlightLevels;
use crate::kind::ArmKind;
use crate::socket::SocketId;

/// Unique identifier for a part registered in a rig.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PartId(pub u64);

impl PartId {
    /// Create a new part ID.
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

impl From<u64> for PartId {
    fn from(id: u64) -> Self {
        Self(id)
    }
}

impl std::fmt::Display for PartId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Part({})", self.0)
    }
}

/// Lifecycle state of a part. Exactly one holds at any time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum PartState {
    /// Loose in the world, owned by no socket.
    Detached,
    /// Being dragged by the pointer.
    Held,
    /// Occupying a socket.
    Attached,
}

impl PartState {
    /// Status label for UI display.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Detached => "Detached",
            Self::Held => "Being Dragged",
            Self::Attached => "Attached",
        }
    }
}

impl std::fmt::Display for PartState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A detachable part (an arm, in the stock robot).
///
/// Parts are created detached and transition only through the operations on
/// this type and on [`Rig`](crate::Rig). The back-reference to the owning
/// socket is `Some` exactly when the state is [`PartState::Attached`].
///
/// # Example
///
/// ```
/// use rig_attach::{ArmKind, Part, PartState};
///
/// let part = Part::new("left_arm", ArmKind::Left).with_position(10.0, 0.0, 40.0);
///
/// assert_eq!(part.state(), PartState::Detached);
/// assert!(part.socket().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct Part {
    /// Display name.
    name: String,

    /// Compatibility tag, immutable after construction.
    kind: ArmKind,

    /// Current lifecycle state.
    state: PartState,

    /// Owning socket; `Some` iff attached.
    socket: Option<SocketId>,

    /// World position.
    position: Point3<f64>,

    /// Visual offset applied while the part follows the pointer.
    held_offset: Vector3<f64>,

    /// Emissive levels for highlight feedback.
    levels: HighlightLevels,

    /// Current emissive intensity, read by the renderer.
    emissive: f64,
}

impl Part {
    /// Create a new detached part at the origin.
    #[must_use]
    pub fn new(name: impl Into<String>, kind: ArmKind) -> Self {
        let levels = HighlightLevels::default();
        Self {
            name: name.into(),
            kind,
            state: PartState::Detached,
            socket: None,
            position: Point3::origin(),
            // Compensates for the arm mesh pivot sitting off-center.
            held_offset: Vector3::new(-8.7, 0.0, 19.0),
            emissive: levels.normal,
            levels,
        }
    }

    /// Get the part name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the compatibility kind.
    #[must_use]
    pub fn kind(&self) -> ArmKind {
        self.kind
    }

    /// Get the current state.
    #[must_use]
    pub fn state(&self) -> PartState {
        self.state
    }

    /// Get the owning socket, if attached.
    #[must_use]
    pub fn socket(&self) -> Option<SocketId> {
        self.socket
    }

    /// Get the world position.
    #[must_use]
    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Get the held-position offset.
    #[must_use]
    pub fn held_offset(&self) -> Vector3<f64> {
        self.held_offset
    }

    /// Get the current emissive intensity.
    #[must_use]
    pub fn emissive(&self) -> f64 {
        self.emissive
    }

    /// Check if the part is attached to a socket.
    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.state == PartState::Attached
    }

    /// Check if the part is being dragged.
    #[must_use]
    pub fn is_held(&self) -> bool {
        self.state == PartState::Held
    }

    /// Check if the part is loose.
    #[must_use]
    pub fn is_detached(&self) -> bool {
        self.state == PartState::Detached
    }

    /// Set the world position (builder pattern).
    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = Point3::new(x, y, z);
        self
    }

    /// Set the held-position offset (builder pattern).
    #[must_use]
    pub fn with_held_offset(mut self, x: f64, y: f64, z: f64) -> Self {
        self.held_offset = Vector3::new(x, y, z);
        self
    }

    /// Set the highlight levels (builder pattern).
    #[must_use]
    pub fn with_highlight_levels(mut self, levels: HighlightLevels) -> Self {
        self.levels = levels;
        self.emissive = levels.normal;
        self
    }

    /// Set the world position.
    pub fn set_position(&mut self, position: Point3<f64>) {
        self.position = position;
    }

    /// Release the part from the pointer.
    ///
    /// Only meaningful while [`PartState::Held`]; calling from any other
    /// state is a safe no-op, not an error.
    pub fn put_down(&mut self) {
        if self.state == PartState::Held {
            self.state = PartState::Detached;
            self.emissive = self.levels.normal;
        }
    }

    /// Move the part to follow the pointer.
    ///
    /// No-op unless the part is held. The per-part [`held_offset`] is applied
    /// on top of the given world position.
    ///
    /// [`held_offset`]: Part::held_offset
    pub fn update_held_position(&mut self, world: Point3<f64>) {
        if self.state == PartState::Held {
            self.position = world + self.held_offset;
        }
    }

    /// Begin hover feedback. Suppressed while the part is held, which already
    /// carries the highlight.
    pub fn hover_begin(&mut self) {
        if self.state != PartState::Held {
            self.emissive = self.levels.highlight;
        }
    }

    /// End hover feedback. Suppressed while held.
    pub fn hover_end(&mut self) {
        if self.state != PartState::Held {
            self.emissive = self.levels.normal;
        }
    }

    /// Transition to held. Pairing with the previous socket must already be
    /// severed by the rig.
    pub(crate) fn set_held(&mut self) {
        debug_assert!(self.socket.is_none());
        self.state = PartState::Held;
        self.emissive = self.levels.highlight;
    }

    /// Pair with a socket: set the back-reference, snap to the socket
    /// position, clear the highlight.
    pub(crate) fn set_attached(&mut self, socket: SocketId, snap: Point3<f64>) {
        self.socket = Some(socket);
        self.state = PartState::Attached;
        self.position = snap;
        self.emissive = self.levels.normal;
    }

    /// Sever the socket back-reference without touching `state`.
    pub(crate) fn clear_socket(&mut self) {
        self.socket = None;
    }

    /// Force the detached state (the rig's full-detach path).
    pub(crate) fn set_detached(&mut self) {
        debug_assert!(self.socket.is_none());
        self.state = PartState::Detached;
        self.emissive = self.levels.normal;
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn test_part_new() {
        let part = Part::new("arm", ArmKind::Left);

        assert_eq!(part.name(), "arm");
        assert_eq!(part.kind(), ArmKind::Left);
        assert_eq!(part.state(), PartState::Detached);
        assert!(part.socket().is_none());
        assert_eq!(part.emissive(), 0.0);
    }

    #[test]
    fn test_part_builder() {
        let part = Part::new("arm", ArmKind::Right)
            .with_position(1.0, 2.0, 3.0)
            .with_held_offset(0.0, 0.0, 5.0)
            .with_highlight_levels(HighlightLevels::new(0.5, 2.0));

        assert_eq!(part.position(), Point3::new(1.0, 2.0, 3.0));
        assert_eq!(part.held_offset(), Vector3::new(0.0, 0.0, 5.0));
        assert_eq!(part.emissive(), 0.5);
    }

    #[test]
    fn test_put_down_from_held() {
        let mut part = Part::new("arm", ArmKind::Left);
        part.set_held();
        assert!(part.is_held());

        part.put_down();
        assert!(part.is_detached());
        assert!(part.socket().is_none());
        assert_eq!(part.emissive(), 0.0);
    }

    #[test]
    fn test_put_down_is_noop_when_not_held() {
        let mut part = Part::new("arm", ArmKind::Left);
        part.put_down();
        assert!(part.is_detached());

        part.set_attached(SocketId::new(0), Point3::origin());
        part.put_down();
        assert!(part.is_attached());
    }

    #[test]
    fn test_update_held_position_applies_offset() {
        let mut part = Part::new("arm", ArmKind::Left).with_held_offset(-1.0, 0.0, 2.0);
        part.set_held();

        part.update_held_position(Point3::new(10.0, 10.0, 10.0));
        assert_eq!(part.position(), Point3::new(9.0, 10.0, 12.0));
    }

    #[test]
    fn test_update_held_position_noop_when_not_held() {
        let mut part = Part::new("arm", ArmKind::Left).with_position(1.0, 1.0, 1.0);
        part.update_held_position(Point3::new(50.0, 0.0, 0.0));
        assert_eq!(part.position(), Point3::new(1.0, 1.0, 1.0));
    }

    #[test]
    fn test_hover_highlight() {
        let mut part = Part::new("arm", ArmKind::Left);

        part.hover_begin();
        assert_eq!(part.emissive(), 5.0);
        part.hover_end();
        assert_eq!(part.emissive(), 0.0);
    }

    #[test]
    fn test_hover_suppressed_while_held() {
        let mut part = Part::new("arm", ArmKind::Left);
        part.set_held();
        assert_eq!(part.emissive(), 5.0);

        // Ending hover must not dim a held part.
        part.hover_end();
        assert_eq!(part.emissive(), 5.0);
    }

    #[test]
    fn test_state_labels() {
        assert_eq!(PartState::Detached.label(), "Detached");
        assert_eq!(PartState::Held.label(), "Being Dragged");
        assert_eq!(PartState::Attached.label(), "Attached");
    }

    #[test]
    fn test_part_id_display() {
        assert_eq!(PartId::new(3).to_string(), "Part(3)");
        assert_eq!(PartId::from(7).raw(), 7);
    }
}
