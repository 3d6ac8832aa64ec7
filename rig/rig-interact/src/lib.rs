//! Pointer-driven interaction sessions for robot rigs.
//!
//! This crate sequences raw pointer input into the attachment operations of
//! [`rig_attach`]: click a part to pick it up, drag it at constant depth from
//! the viewpoint, click a socket to attach (or keep dragging if it refuses),
//! click anywhere else to drop. Hover feedback runs whenever nothing is being
//! dragged.
//!
//! # Layer 0 Crate
//!
//! No engine dependencies. The host environment — camera, unprojection,
//! picking — sits behind the [`Viewport`] trait, so the same session drives a
//! game engine adapter, a headless test, or the bundled
//! [`ScriptedViewport`].
//!
//! # Overview
//!
//! - [`Session`] - The Idle/Dragging state machine over one scene
//! - [`Scene`] - A [`Rig`](rig_attach::Rig) plus its interactable [`Prop`]s
//! - [`Viewport`] - Host services: viewpoint, pointer rays, hit-testing
//! - [`SessionEvent`] - Notifications for UI consumers, drained per tick
//! - [`Clickable`] / [`Hoverable`] / [`Draggable`] - Capability seams
//!
//! # Quick Start
//!
//! ```
//! use nalgebra::Point3;
//! use rig_attach::{ArmKind, Part, Rig, Socket};
//! use rig_interact::{
//!     EntityId, Hit, PointerPos, Scene, ScriptedViewport, Session, Viewpoint,
//! };
//!
//! let mut rig = Rig::new("robot");
//! let shoulder = rig.add_socket(Socket::new("left_shoulder", ArmKind::Left));
//! let arm = rig.add_part(Part::new("left_arm", ArmKind::Left));
//! let mut scene = Scene::new(rig);
//!
//! let mut viewport =
//!     ScriptedViewport::new(Viewpoint::from_position(Point3::new(0.0, -200.0, 100.0)));
//! let pointer = PointerPos::new(400.0, 300.0);
//! let mut session = Session::new();
//!
//! // Click the arm: it is picked up and follows the pointer.
//! viewport.set_hit(Some(Hit::new(EntityId::Part(arm), Point3::origin())));
//! session.handle_click(&mut scene, &viewport, pointer);
//! assert!(session.is_dragging());
//!
//! // Click the shoulder: the arm snaps in and the session goes idle.
//! viewport.set_hit(Some(Hit::new(EntityId::Socket(shoulder), Point3::origin())));
//! session.handle_click(&mut scene, &viewport, pointer);
//! assert!(!session.is_dragging());
//! assert_eq!(scene.rig().occupant_of(shoulder), Some(arm));
//! ```
//!
//! # Failure Philosophy
//!
//! The session never panics and never returns errors: a missing viewpoint
//! aborts the current event, a failed unprojection skips one drag sample,
//! and a refused attachment keeps the drag alive. Diagnostics go through
//! `tracing`.
//!
//! # Features
//!
//! - `serde` - Serialize/Deserialize derives on the plain-data types

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![allow(clippy::module_name_repetitions)]

mod capability;
mod event;
mod pointer;
mod prop;
mod scene;
mod session;
mod viewport;

pub use capability::{Clickable, Draggable, Hoverable};
pub use event::SessionEvent;
pub use pointer::{PointerPos, Ray, Viewpoint};
pub use prop::{Prop, PropId};
pub use scene::{EntityId, Scene};
pub use session::Session;
pub use viewport::{Hit, ScriptedViewport, Viewport};
