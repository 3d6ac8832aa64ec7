//! The scene: a rig plus its interactable props.
//!
//! The scene resolves [`EntityId`]s — the currency of hit-testing — to the
//! capability traits an entity actually implements, so the session can
//! dispatch without knowing concrete types.

use hashbrown::HashMap;
use nalgebra::Point3;
use rig_attach::{PartId, Rig, SocketId};
use tracing::warn;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::capability::{Draggable, Hoverable};
use crate::prop::{Prop, PropId};

/// Reference to any interactable entity in a scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum EntityId {
    /// A detachable part.
    Part(PartId),
    /// An attachment socket.
    Socket(SocketId),
    /// A non-part interactable.
    Prop(PropId),
}

impl EntityId {
    /// The part ID, when this entity is a part.
    #[must_use]
    pub fn as_part(self) -> Option<PartId> {
        match self {
            Self::Part(id) => Some(id),
            _ => None,
        }
    }

    /// The socket ID, when this entity is a socket.
    #[must_use]
    pub fn as_socket(self) -> Option<SocketId> {
        match self {
            Self::Socket(id) => Some(id),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntityId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Part(id) => id.fmt(f),
            Self::Socket(id) => id.fmt(f),
            Self::Prop(id) => id.fmt(f),
        }
    }
}

/// A rig and the props around it.
///
/// # Example
///
/// ```
/// use rig_attach::{ArmKind, Rig, Socket};
/// use rig_interact::{Prop, Scene};
///
/// let mut rig = Rig::new("robot");
/// let shoulder = rig.add_socket(Socket::new("left_shoulder", ArmKind::Left));
///
/// let mut scene = Scene::new(rig);
/// let torso = scene.add_prop(Prop::new("torso").with_linked_socket(shoulder));
/// assert!(scene.prop(torso).is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Scene {
    /// The rig under assembly.
    rig: Rig,

    /// Props keyed by ID.
    props: HashMap<PropId, Prop>,

    /// Next prop ID to allocate.
    next_prop: u64,
}

impl Scene {
    /// Create a scene around a rig.
    #[must_use]
    pub fn new(rig: Rig) -> Self {
        Self {
            rig,
            props: HashMap::new(),
            next_prop: 0,
        }
    }

    /// Get the rig.
    #[must_use]
    pub fn rig(&self) -> &Rig {
        &self.rig
    }

    /// Get a mutable reference to the rig.
    pub fn rig_mut(&mut self) -> &mut Rig {
        &mut self.rig
    }

    /// Add a prop, returning its allocated ID.
    pub fn add_prop(&mut self, prop: Prop) -> PropId {
        let id = PropId::new(self.next_prop);
        self.next_prop += 1;
        self.props.insert(id, prop);
        id
    }

    /// Get a prop by ID.
    #[must_use]
    pub fn prop(&self, id: PropId) -> Option<&Prop> {
        self.props.get(&id)
    }

    /// Get a mutable reference to a prop.
    pub fn prop_mut(&mut self, id: PropId) -> Option<&mut Prop> {
        self.props.get_mut(&id)
    }

    /// Check whether an entity exists in this scene.
    #[must_use]
    pub fn contains(&self, id: EntityId) -> bool {
        match id {
            EntityId::Part(id) => self.rig.part(id).is_some(),
            EntityId::Socket(id) => self.rig.socket(id).is_some(),
            EntityId::Prop(id) => self.props.contains_key(&id),
        }
    }

    /// World position of an entity, if it exists.
    #[must_use]
    pub fn position_of(&self, id: EntityId) -> Option<Point3<f64>> {
        match id {
            EntityId::Part(id) => self.rig.part(id).map(|part| part.position()),
            EntityId::Socket(id) => self.rig.socket(id).map(|socket| socket.position()),
            EntityId::Prop(id) => self.props.get(&id).map(Prop::position),
        }
    }

    // =========================================================================
    // Capability dispatch
    // =========================================================================

    /// Check whether an entity responds to clicks.
    ///
    /// Parts always do (a click picks them up); sockets are not directly
    /// clickable; props advertise the capability.
    #[must_use]
    pub fn is_clickable(&self, id: EntityId) -> bool {
        match id {
            EntityId::Part(id) => self.rig.part(id).is_some(),
            EntityId::Socket(_) => false,
            EntityId::Prop(id) => self.props.get(&id).is_some_and(Prop::is_clickable),
        }
    }

    /// Invoke an entity's click behavior.
    ///
    /// For a part this is the pick-up (with implicit detach from any socket),
    /// which needs the rig and therefore lives here rather than on a
    /// capability trait. Returns `false` when nothing was dispatched.
    pub fn click(&mut self, id: EntityId) -> bool {
        match id {
            EntityId::Part(part_id) => match self.rig.pick_up(part_id) {
                Ok(()) => true,
                Err(err) => {
                    warn!("click on {id} ignored: {err}");
                    false
                }
            },
            EntityId::Socket(_) => false,
            EntityId::Prop(prop_id) => {
                use crate::capability::Clickable;
                match self.props.get_mut(&prop_id) {
                    Some(prop) if prop.is_clickable() => {
                        prop.on_clicked();
                        true
                    }
                    _ => false,
                }
            }
        }
    }

    /// Resolve an entity to its hover capability, if it advertises one.
    pub fn hoverable_mut(&mut self, id: EntityId) -> Option<&mut dyn Hoverable> {
        match id {
            EntityId::Part(id) => self
                .rig
                .part_mut(id)
                .map(|part| part as &mut dyn Hoverable),
            EntityId::Socket(id) => self
                .rig
                .socket_mut(id)
                .map(|socket| socket as &mut dyn Hoverable),
            EntityId::Prop(id) => self
                .props
                .get_mut(&id)
                .filter(|prop| prop.is_hoverable())
                .map(|prop| prop as &mut dyn Hoverable),
        }
    }

    /// Resolve an entity to its drag capability, if it advertises one.
    pub fn draggable_mut(&mut self, id: EntityId) -> Option<&mut dyn Draggable> {
        match id {
            EntityId::Part(id) => self
                .rig
                .part_mut(id)
                .map(|part| part as &mut dyn Draggable),
            EntityId::Socket(_) => None,
            EntityId::Prop(id) => self
                .props
                .get_mut(&id)
                .filter(|prop| prop.is_draggable())
                .map(|prop| prop as &mut dyn Draggable),
        }
    }

    /// Begin hover feedback on an entity.
    ///
    /// Hovering a prop cascades to the parts attached to its mounted sockets,
    /// so a torso lights up together with its arms.
    pub fn begin_hover(&mut self, id: EntityId) {
        if let Some(hoverable) = self.hoverable_mut(id) {
            hoverable.on_hover_begin();
        }
        if let EntityId::Prop(prop_id) = id {
            self.cascade_hover(prop_id, true);
        }
    }

    /// End hover feedback on an entity.
    pub fn end_hover(&mut self, id: EntityId) {
        if let Some(hoverable) = self.hoverable_mut(id) {
            hoverable.on_hover_end();
        }
        if let EntityId::Prop(prop_id) = id {
            self.cascade_hover(prop_id, false);
        }
    }

    /// Forward hover feedback to parts occupying a prop's mounted sockets.
    fn cascade_hover(&mut self, prop_id: PropId, begin: bool) {
        let Some(prop) = self.props.get(&prop_id) else {
            return;
        };
        if !prop.is_hoverable() {
            return;
        }
        let occupants: Vec<PartId> = prop
            .linked_sockets()
            .iter()
            .filter_map(|&socket| self.rig.occupant_of(socket))
            .collect();
        for part_id in occupants {
            if let Some(part) = self.rig.part_mut(part_id) {
                if begin {
                    part.hover_begin();
                } else {
                    part.hover_end();
                }
            }
        }
    }
}
