//! Capability traits for interactable entities.
//!
//! An entity implements the subset of capabilities it supports; the session
//! dispatches through these rather than checking concrete types. Parts and
//! sockets from the attachment core implement the registry-free capabilities
//! here — a part's click behavior (pick-up, with implicit detach) needs the
//! rig and is dispatched by the [`Scene`](crate::Scene) instead.

use nalgebra::Point3;
use rig_attach::{Part, Socket};

/// An entity that responds to a pointer click.
pub trait Clickable {
    /// Invoked when the entity is clicked.
    fn on_clicked(&mut self);
}

/// An entity that gives hover feedback.
pub trait Hoverable {
    /// Invoked when the pointer starts resting on the entity.
    fn on_hover_begin(&mut self);

    /// Invoked when the pointer leaves the entity.
    fn on_hover_end(&mut self);
}

/// An entity that can be dragged through 3D space.
pub trait Draggable {
    /// Move the entity toward the given world position while dragged.
    fn update_drag_position(&mut self, world: Point3<f64>);

    /// Invoked when the entity is released over empty space.
    fn on_dropped(&mut self);
}

impl Hoverable for Part {
    fn on_hover_begin(&mut self) {
        self.hover_begin();
    }

    fn on_hover_end(&mut self) {
        self.hover_end();
    }
}

impl Draggable for Part {
    fn update_drag_position(&mut self, world: Point3<f64>) {
        self.update_held_position(world);
    }

    fn on_dropped(&mut self) {
        self.put_down();
    }
}

impl Hoverable for Socket {
    fn on_hover_begin(&mut self) {
        self.hover_begin();
    }

    fn on_hover_end(&mut self) {
        self.hover_end();
    }
}
