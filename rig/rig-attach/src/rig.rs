//! The rig: a registry of parts and sockets and their pairing protocol.
//!
//! Part↔Socket occupancy is a two-sided relation. Mutating one side without
//! the other leaves a dangling back-reference, so every pairing change goes
//! through the [`Rig`], which updates both entities in one call.

use hashbrown::HashMap;
use tracing::{debug, info};

use crate::error::{AttachError, AttachResult};
use crate::kind::ArmKind;
use crate::part::{Part, PartId};
use crate::socket::{Socket, SocketId};

/// A robot rig: the parts and sockets of one assembly.
///
/// The rig allocates ids, owns every entity, and is the only place that
/// mutates the occupancy relation. Single-call operations keep the invariant
/// (`part.socket().is_some()` iff the part is attached, and then the socket's
/// occupant is that part) intact across every transition.
///
/// # Example
///
/// ```
/// use rig_attach::{ArmKind, Part, Rig, Socket};
///
/// let mut rig = Rig::new("robot");
/// let shoulder = rig.add_socket(Socket::new("left_shoulder", ArmKind::Left));
/// let arm = rig.add_part(Part::new("left_arm", ArmKind::Left));
///
/// assert!(rig.try_attach(arm, shoulder).unwrap());
/// assert_eq!(rig.occupant_of(shoulder), Some(arm));
/// ```
#[derive(Debug, Clone, Default)]
pub struct Rig {
    /// Rig name.
    name: String,

    /// Parts keyed by ID.
    parts: HashMap<PartId, Part>,

    /// Sockets keyed by ID.
    sockets: HashMap<SocketId, Socket>,

    /// Next part ID to allocate.
    next_part: u64,

    /// Next socket ID to allocate.
    next_socket: u64,
}

impl Rig {
    /// Create a new empty rig.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Get the rig name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    // =========================================================================
    // Registry
    // =========================================================================

    /// Add a part, returning its allocated ID.
    ///
    /// Parts enter the rig detached; any stale attachment carried by a cloned
    /// part is cleared.
    pub fn add_part(&mut self, mut part: Part) -> PartId {
        if part.socket().is_some() || !part.is_detached() {
            part.clear_socket();
            part.set_detached();
        }
        let id = PartId::new(self.next_part);
        self.next_part += 1;
        self.parts.insert(id, part);
        id
    }

    /// Remove a part from the rig.
    ///
    /// Any socket the part occupies is released first, so no back-reference
    /// dangles. The returned part is normalized to detached. Returns `None`
    /// for an unknown ID.
    pub fn remove_part(&mut self, part_id: PartId) -> Option<Part> {
        if self.parts.contains_key(&part_id) {
            self.sever(part_id);
        }
        let mut part = self.parts.remove(&part_id)?;
        part.set_detached();
        debug!("removed '{}'", part.name());
        Some(part)
    }

    /// Add a socket, returning its allocated ID.
    pub fn add_socket(&mut self, socket: Socket) -> SocketId {
        let id = SocketId::new(self.next_socket);
        self.next_socket += 1;
        self.sockets.insert(id, socket);
        id
    }

    /// Get a part by ID.
    #[must_use]
    pub fn part(&self, id: PartId) -> Option<&Part> {
        self.parts.get(&id)
    }

    /// Get a mutable reference to a part.
    ///
    /// The returned reference only exposes the part's registry-free
    /// operations; pairing still goes through the rig.
    pub fn part_mut(&mut self, id: PartId) -> Option<&mut Part> {
        self.parts.get_mut(&id)
    }

    /// Get a socket by ID.
    #[must_use]
    pub fn socket(&self, id: SocketId) -> Option<&Socket> {
        self.sockets.get(&id)
    }

    /// Get a mutable reference to a socket.
    pub fn socket_mut(&mut self, id: SocketId) -> Option<&mut Socket> {
        self.sockets.get_mut(&id)
    }

    /// Iterate over part IDs.
    pub fn part_ids(&self) -> impl Iterator<Item = PartId> + '_ {
        self.parts.keys().copied()
    }

    /// Iterate over socket IDs.
    pub fn socket_ids(&self) -> impl Iterator<Item = SocketId> + '_ {
        self.sockets.keys().copied()
    }

    /// Iterate over parts with their IDs.
    pub fn parts(&self) -> impl Iterator<Item = (PartId, &Part)> {
        self.parts.iter().map(|(id, part)| (*id, part))
    }

    /// Iterate over sockets with their IDs.
    pub fn sockets(&self) -> impl Iterator<Item = (SocketId, &Socket)> {
        self.sockets.iter().map(|(id, socket)| (*id, socket))
    }

    /// Number of parts.
    #[must_use]
    pub fn part_count(&self) -> usize {
        self.parts.len()
    }

    /// Number of sockets.
    #[must_use]
    pub fn socket_count(&self) -> usize {
        self.sockets.len()
    }

    /// Check if the rig has no parts and no sockets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty() && self.sockets.is_empty()
    }

    /// The part occupying a socket, if any.
    #[must_use]
    pub fn occupant_of(&self, socket: SocketId) -> Option<PartId> {
        self.sockets.get(&socket).and_then(Socket::occupant)
    }

    /// The socket owning a part, if any.
    #[must_use]
    pub fn socket_of(&self, part: PartId) -> Option<SocketId> {
        self.parts.get(&part).and_then(Part::socket)
    }

    // =========================================================================
    // Attachment protocol
    // =========================================================================

    /// Non-mutating compatibility query.
    ///
    /// `false` when either ID is unknown, the socket is occupied, or the
    /// kinds do not match.
    #[must_use]
    pub fn can_attach(&self, part: PartId, socket: SocketId) -> bool {
        match (self.parts.get(&part), self.sockets.get(&socket)) {
            (Some(part), Some(socket)) => socket.can_accept(part),
            _ => false,
        }
    }

    /// Pick a part up, implicitly detaching it from any socket it occupies.
    ///
    /// Callable from any state; idempotent when the part is already held.
    ///
    /// # Errors
    ///
    /// Returns [`AttachError::PartNotFound`] for an unknown ID.
    pub fn pick_up(&mut self, part_id: PartId) -> AttachResult<()> {
        if !self.parts.contains_key(&part_id) {
            return Err(AttachError::PartNotFound { id: part_id });
        }
        self.sever(part_id);
        if let Some(part) = self.parts.get_mut(&part_id) {
            part.set_held();
            debug!("picked up '{}'", part.name());
        }
        Ok(())
    }

    /// Release a held part into the world.
    ///
    /// Safe no-op unless the part is held.
    ///
    /// # Errors
    ///
    /// Returns [`AttachError::PartNotFound`] for an unknown ID.
    pub fn put_down(&mut self, part_id: PartId) -> AttachResult<()> {
        let part = self
            .parts
            .get_mut(&part_id)
            .ok_or(AttachError::PartNotFound { id: part_id })?;
        let was_held = part.is_held();
        part.put_down();
        if was_held {
            debug!("put down '{}'", part.name());
        }
        Ok(())
    }

    /// Attempt to attach a part to a socket — the single-call contract.
    ///
    /// Returns `Ok(false)` and changes nothing when the socket cannot accept
    /// the part (occupied, or kind mismatch). On success the part is detached
    /// from any previous socket, both sides of the new pairing are updated,
    /// and the part snaps to the socket position.
    ///
    /// # Errors
    ///
    /// Returns [`AttachError::PartNotFound`] or [`AttachError::SocketNotFound`]
    /// for unknown IDs; compatibility failures are not errors.
    pub fn try_attach(&mut self, part_id: PartId, socket_id: SocketId) -> AttachResult<bool> {
        let part = self
            .parts
            .get(&part_id)
            .ok_or(AttachError::PartNotFound { id: part_id })?;
        let socket = self
            .sockets
            .get(&socket_id)
            .ok_or(AttachError::SocketNotFound { id: socket_id })?;

        if !socket.can_accept(part) {
            debug!(
                "'{}' cannot attach to '{}' - wrong kind or occupied",
                part.name(),
                socket.name()
            );
            return Ok(false);
        }

        let kind = part.kind();
        let snap = socket.position();
        let part_name = part.name().to_owned();
        let socket_name = socket.name().to_owned();

        // Leave the old socket first, then pair both sides of the new one.
        self.sever(part_id);

        let Some(socket) = self.sockets.get_mut(&socket_id) else {
            return Err(AttachError::SocketNotFound { id: socket_id });
        };
        if !socket.accept(part_id, kind) {
            return Ok(false);
        }
        let Some(part) = self.parts.get_mut(&part_id) else {
            return Err(AttachError::PartNotFound { id: part_id });
        };
        part.set_attached(socket_id, snap);

        info!("attached '{part_name}' to '{socket_name}'");
        Ok(true)
    }

    /// Detach a part from its socket, returning it to the detached state.
    ///
    /// The pairing is severed on both sides and the socket's slot visual is
    /// restored — the exact inverse of [`Rig::try_attach`] for the occupancy
    /// relation. Safe no-op when the part occupies no socket.
    ///
    /// # Errors
    ///
    /// Returns [`AttachError::PartNotFound`] for an unknown ID.
    pub fn detach(&mut self, part_id: PartId) -> AttachResult<()> {
        let part = self
            .parts
            .get(&part_id)
            .ok_or(AttachError::PartNotFound { id: part_id })?;
        if part.socket().is_none() {
            return Ok(());
        }
        self.sever(part_id);
        if let Some(part) = self.parts.get_mut(&part_id) {
            part.set_detached();
            debug!("detached '{}'", part.name());
        }
        Ok(())
    }

    /// Add a part already attached to a socket, for rigs that start with
    /// arms installed.
    ///
    /// # Errors
    ///
    /// Returns [`AttachError::SocketNotFound`] for an unknown socket,
    /// [`AttachError::SocketOccupied`] when the socket is taken, and
    /// [`AttachError::KindMismatch`] when the kinds do not fit.
    pub fn place_attached(&mut self, part: Part, socket_id: SocketId) -> AttachResult<PartId> {
        let socket = self
            .sockets
            .get(&socket_id)
            .ok_or(AttachError::SocketNotFound { id: socket_id })?;
        if let Some(occupant) = socket.occupant() {
            return Err(AttachError::SocketOccupied {
                socket: socket_id,
                occupant,
            });
        }
        if !ArmKind::matches(socket.accepted(), part.kind()) {
            return Err(AttachError::KindMismatch {
                socket: socket.accepted(),
                part: part.kind(),
            });
        }

        let kind = part.kind();
        let snap = socket.position();
        let part_name = part.name().to_owned();
        let part_id = self.add_part(part);

        if let Some(socket) = self.sockets.get_mut(&socket_id) {
            socket.accept(part_id, kind);
            info!("registered initial part '{}' at '{}'", part_name, socket.name());
        }
        if let Some(part) = self.parts.get_mut(&part_id) {
            part.set_attached(socket_id, snap);
        }
        Ok(part_id)
    }

    /// Clear both sides of a part's pairing without touching its state.
    ///
    /// The intermediate step shared by pick-up, re-attach and detach; callers
    /// are responsible for writing the part's next state.
    fn sever(&mut self, part_id: PartId) {
        let Some(part) = self.parts.get_mut(&part_id) else {
            return;
        };
        let Some(socket_id) = part.socket() else {
            return;
        };
        part.clear_socket();
        if let Some(socket) = self.sockets.get_mut(&socket_id) {
            socket.release();
        }
    }

    // =========================================================================
    // Validation
    // =========================================================================

    /// Check the occupancy invariants across the whole rig.
    #[must_use]
    pub fn validate(&self) -> RigValidation {
        let mut result = RigValidation::default();

        for (&part_id, part) in &self.parts {
            if part.is_attached() != part.socket().is_some() {
                result.state_mismatches.push(part_id);
            }
            if let Some(socket_id) = part.socket() {
                let occupant = self.sockets.get(&socket_id).and_then(Socket::occupant);
                if occupant != Some(part_id) {
                    result.dangling_back_refs.push((part_id, socket_id));
                }
            }
        }

        for (&socket_id, socket) in &self.sockets {
            if let Some(part_id) = socket.occupant() {
                let back_ref = self.parts.get(&part_id).and_then(Part::socket);
                if back_ref != Some(socket_id) {
                    result.orphan_occupants.push((socket_id, part_id));
                }
            }
        }

        result
    }
}

/// Result of checking a rig's occupancy invariants.
#[derive(Debug, Clone, Default)]
pub struct RigValidation {
    /// Parts whose state disagrees with their socket back-reference.
    pub state_mismatches: Vec<PartId>,
    /// Parts referencing a socket that does not hold them.
    pub dangling_back_refs: Vec<(PartId, SocketId)>,
    /// Sockets holding a part that does not reference them back.
    pub orphan_occupants: Vec<(SocketId, PartId)>,
}

impl RigValidation {
    /// Check if no violations were found.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.state_mismatches.is_empty()
            && self.dangling_back_refs.is_empty()
            && self.orphan_occupants.is_empty()
    }
}
