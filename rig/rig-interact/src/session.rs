//! The interaction session: click → drag → attach/drop sequencing.
//!
//! A [`Session`] owns what is currently dragged and what is currently
//! hovered, and translates raw pointer events into rig and prop mutations.
//! It is single-threaded and synchronous: every operation completes within
//! the handling of one event, and the only way to abort a drag is the next
//! click.

use rig_attach::PartId;
use tracing::{debug, trace, warn};

use crate::event::SessionEvent;
use crate::pointer::{PointerPos, Viewpoint};
use crate::scene::{EntityId, Scene};
use crate::viewport::{Hit, Viewport};

/// Per-player interaction state over one [`Scene`].
///
/// Two macro-states: **Idle** (nothing dragged) and **Dragging**. A click
/// acts as a toggle — the first click picks a target up, the next one
/// releases it over a socket or drops it. While dragging, hover evaluation
/// is frozen so the dragged entity cannot re-trigger its own highlight.
///
/// # Example
///
/// ```
/// use nalgebra::Point3;
/// use rig_attach::{ArmKind, Part, Rig, Socket};
/// use rig_interact::{
///     EntityId, Hit, PointerPos, Scene, ScriptedViewport, Session, Viewpoint,
/// };
///
/// let mut rig = Rig::new("robot");
/// let arm = rig.add_part(Part::new("left_arm", ArmKind::Left));
/// let mut scene = Scene::new(rig);
///
/// let mut viewport =
///     ScriptedViewport::new(Viewpoint::from_position(Point3::new(0.0, -200.0, 100.0)));
/// viewport.set_hit(Some(Hit::new(EntityId::Part(arm), Point3::origin())));
///
/// let mut session = Session::new();
/// session.handle_click(&mut scene, &viewport, PointerPos::new(400.0, 300.0));
/// assert!(session.is_dragging());
/// ```
#[derive(Debug, Default)]
pub struct Session {
    /// Entity currently following the pointer.
    dragged: Option<EntityId>,

    /// Cached part ID when the dragged entity is a part.
    dragged_part: Option<PartId>,

    /// Entity currently under the pointer (frozen while dragging).
    hovered: Option<EntityId>,

    /// Viewpoint-to-target distance captured at drag start; dragged entities
    /// stay at this depth.
    initial_drag_distance: f64,

    /// Notifications pending collection.
    events: Vec<SessionEvent>,
}

impl Session {
    /// Create an idle session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Check whether a drag is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.dragged.is_some()
    }

    /// The entity being dragged, if any.
    #[must_use]
    pub fn dragged(&self) -> Option<EntityId> {
        self.dragged
    }

    /// The entity under the pointer, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<EntityId> {
        self.hovered
    }

    /// The drag depth captured at pick-up.
    #[must_use]
    pub fn initial_drag_distance(&self) -> f64 {
        self.initial_drag_distance
    }

    /// Drain the notifications queued since the last call.
    pub fn take_events(&mut self) -> Vec<SessionEvent> {
        std::mem::take(&mut self.events)
    }

    /// Handle a discrete click event.
    ///
    /// Idle: hit-test and start dragging a click-capable target. Dragging:
    /// release — attach over a compatible socket, keep dragging over an
    /// incompatible one, drop anywhere else. Without a bound viewpoint the
    /// whole event is a no-op.
    pub fn handle_click<V: Viewport>(
        &mut self,
        scene: &mut Scene,
        viewport: &V,
        pointer: PointerPos,
    ) {
        let Some(viewpoint) = viewport.viewpoint() else {
            warn!("no viewpoint bound; ignoring click");
            return;
        };

        let hit = viewport.hit_test(pointer);
        if self.dragged.is_some() {
            self.finish_drag(scene, hit);
        } else if let Some(hit) = hit {
            self.start_drag(scene, &viewpoint, hit);
        }
    }

    /// Advance one tick with the current pointer sample.
    ///
    /// While dragging, the dragged entity is re-projected to the captured
    /// depth on every sample; hover evaluation only runs while idle.
    pub fn advance<V: Viewport>(&mut self, scene: &mut Scene, viewport: &V, pointer: PointerPos) {
        if self.dragged.is_some() {
            self.update_drag(scene, viewport, pointer);
        } else {
            self.update_hover(scene, viewport, pointer);
        }
    }

    fn start_drag(&mut self, scene: &mut Scene, viewpoint: &Viewpoint, hit: Hit) {
        if !scene.is_clickable(hit.entity) {
            return;
        }
        let Some(target) = scene.position_of(hit.entity) else {
            return;
        };
        if !scene.click(hit.entity) {
            return;
        }

        self.dragged = Some(hit.entity);
        self.dragged_part = hit.entity.as_part();
        self.initial_drag_distance = viewpoint.distance_to(&target);
        debug!(
            "started dragging {} at distance {:.1}",
            hit.entity, self.initial_drag_distance
        );

        if let Some(part) = self.dragged_part {
            self.events.push(SessionEvent::PartStateChanged(Some(part)));
        }
    }

    fn finish_drag(&mut self, scene: &mut Scene, hit: Option<Hit>) {
        if let Some(part_id) = self.dragged_part {
            if let Some(socket_id) = hit.and_then(|hit| hit.entity.as_socket()) {
                match scene.rig_mut().try_attach(part_id, socket_id) {
                    Ok(true) => {
                        self.events.push(SessionEvent::PartStateChanged(Some(part_id)));
                        self.stop_drag();
                    }
                    Ok(false) => {
                        warn!("wrong socket type - continuing drag");
                        self.events.push(SessionEvent::AttachRejected {
                            part: part_id,
                            socket: socket_id,
                        });
                    }
                    Err(err) => {
                        warn!("attach aborted: {err}");
                    }
                }
                return;
            }

            // Not over any socket - drop it where it hangs.
            if let Err(err) = scene.rig_mut().put_down(part_id) {
                warn!("drop aborted: {err}");
            }
            self.events.push(SessionEvent::PartStateChanged(Some(part_id)));
            self.stop_drag();
        } else if let Some(entity) = self.dragged {
            if let Some(draggable) = scene.draggable_mut(entity) {
                draggable.on_dropped();
            }
            self.stop_drag();
        }
    }

    fn stop_drag(&mut self) {
        if let Some(entity) = self.dragged {
            debug!("stopped dragging {entity}");
        }
        self.dragged = None;
        self.dragged_part = None;
        self.initial_drag_distance = 0.0;
    }

    fn update_drag<V: Viewport>(&mut self, scene: &mut Scene, viewport: &V, pointer: PointerPos) {
        let Some(entity) = self.dragged else {
            return;
        };
        let Some(viewpoint) = viewport.viewpoint() else {
            warn!("no viewpoint bound; skipping drag update");
            return;
        };
        let Some(ray) = viewport.pointer_ray(pointer) else {
            trace!("pointer could not be unprojected; keeping last drag position");
            return;
        };

        let target =
            viewpoint.position + ray.direction.into_inner() * self.initial_drag_distance;
        if let Some(draggable) = scene.draggable_mut(entity) {
            draggable.update_drag_position(target);
        }
    }

    fn update_hover<V: Viewport>(&mut self, scene: &mut Scene, viewport: &V, pointer: PointerPos) {
        let new_target = viewport
            .hit_test(pointer)
            .map(|hit| hit.entity)
            .filter(|&entity| scene.contains(entity));

        if new_target == self.hovered {
            return;
        }

        if let Some(old) = self.hovered {
            scene.end_hover(old);
        }
        if let Some(new) = new_target {
            scene.begin_hover(new);
        }
        self.hovered = new_target;

        self.events.push(SessionEvent::PartStateChanged(
            new_target.and_then(EntityId::as_part),
        ));
    }
}
