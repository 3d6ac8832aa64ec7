//! Props: interactable scenery that is not a detachable part.
//!
//! The stock robot's torso is a prop: it can be hovered, clicked and dragged
//! around, but never attached to anything. Props advertise their capabilities
//! with flags; the session only dispatches to what a prop advertises.

use nalgebra::Point3;
use rig_attach::{HighlightLevels, SocketId};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::capability::{Clickable, Draggable, Hoverable};

/// Unique identifier for a prop registered in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PropId(pub u64);

impl PropId {
    /// Create a new prop ID.
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

impl std::fmt::Display for PropId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Prop({})", self.0)
    }
}

/// A non-part interactable.
///
/// Sockets listed in [`Prop::linked_sockets`] belong to this prop's body, so
/// hover feedback cascades to the parts attached there (hovering the torso
/// lights up its arms too).
///
/// # Example
///
/// ```
/// use rig_interact::Prop;
///
/// let torso = Prop::new("torso").with_position(0.0, 0.0, 100.0);
/// assert!(torso.is_hoverable());
/// assert!(torso.is_draggable());
/// ```
#[derive(Debug, Clone)]
pub struct Prop {
    /// Display name.
    name: String,

    /// World position.
    position: Point3<f64>,

    /// Responds to clicks.
    clickable: bool,

    /// Gives hover feedback.
    hoverable: bool,

    /// Can be dragged around.
    draggable: bool,

    /// Sockets mounted on this prop.
    linked_sockets: Vec<SocketId>,

    /// Emissive levels for highlight feedback.
    levels: HighlightLevels,

    /// Current emissive intensity.
    emissive: f64,
}

impl Prop {
    /// Create a prop with every capability enabled.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        let levels = HighlightLevels::new(0.0, 3.0);
        Self {
            name: name.into(),
            position: Point3::origin(),
            clickable: true,
            hoverable: true,
            draggable: true,
            linked_sockets: Vec::new(),
            emissive: levels.normal,
            levels,
        }
    }

    /// Get the prop name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the world position.
    #[must_use]
    pub fn position(&self) -> Point3<f64> {
        self.position
    }

    /// Check the click capability.
    #[must_use]
    pub fn is_clickable(&self) -> bool {
        self.clickable
    }

    /// Check the hover capability.
    #[must_use]
    pub fn is_hoverable(&self) -> bool {
        self.hoverable
    }

    /// Check the drag capability.
    #[must_use]
    pub fn is_draggable(&self) -> bool {
        self.draggable
    }

    /// Sockets mounted on this prop.
    #[must_use]
    pub fn linked_sockets(&self) -> &[SocketId] {
        &self.linked_sockets
    }

    /// Get the current emissive intensity.
    #[must_use]
    pub fn emissive(&self) -> f64 {
        self.emissive
    }

    /// Set the world position (builder pattern).
    #[must_use]
    pub fn with_position(mut self, x: f64, y: f64, z: f64) -> Self {
        self.position = Point3::new(x, y, z);
        self
    }

    /// Set the click capability (builder pattern).
    #[must_use]
    pub fn with_clickable(mut self, clickable: bool) -> Self {
        self.clickable = clickable;
        self
    }

    /// Set the hover capability (builder pattern).
    #[must_use]
    pub fn with_hoverable(mut self, hoverable: bool) -> Self {
        self.hoverable = hoverable;
        self
    }

    /// Set the drag capability (builder pattern).
    #[must_use]
    pub fn with_draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Set the highlight levels (builder pattern).
    #[must_use]
    pub fn with_highlight_levels(mut self, levels: HighlightLevels) -> Self {
        self.levels = levels;
        self.emissive = levels.normal;
        self
    }

    /// Mount a socket on this prop (builder pattern).
    #[must_use]
    pub fn with_linked_socket(mut self, socket: SocketId) -> Self {
        self.linked_sockets.push(socket);
        self
    }
}

impl Clickable for Prop {
    fn on_clicked(&mut self) {
        // Props have no click action of their own; the session starts the
        // drag after dispatching this.
    }
}

impl Hoverable for Prop {
    fn on_hover_begin(&mut self) {
        self.emissive = self.levels.highlight;
    }

    fn on_hover_end(&mut self) {
        self.emissive = self.levels.normal;
    }
}

impl Draggable for Prop {
    fn update_drag_position(&mut self, world: Point3<f64>) {
        self.position = world;
    }

    fn on_dropped(&mut self) {}
}
