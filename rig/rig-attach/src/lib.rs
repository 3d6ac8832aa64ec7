//! Part/socket attachment for interactive robot rigs.
//!
//! This crate provides the attachment core of a build-a-robot toy: detachable
//! parts with a pick-up/drop/attach state machine, sockets that accept at
//! most one compatible part, and the rig registry that keeps both sides of
//! the pairing consistent.
//!
//! # Layer 0 Crate
//!
//! This crate has **zero engine dependencies**. It can be used in:
//! - Game engines (behind thin adapter layers)
//! - Headless tests and CLI tools
//! - Web applications (WASM)
//!
//! # Overview
//!
//! The crate is organized around these main types:
//!
//! - [`Rig`] - Registry of parts and sockets; owner of the pairing protocol
//! - [`Part`] - A detachable part with a Detached/Held/Attached lifecycle
//! - [`Socket`] - An attachment point accepting one compatible part
//! - [`ArmKind`] - Compatibility tag, with `Universal` as a wildcard
//!
//! # Quick Start
//!
//! ```
//! use rig_attach::{ArmKind, Part, Rig, Socket};
//!
//! let mut rig = Rig::new("robot");
//!
//! // Two shoulders on the torso, one arm on the floor.
//! let left = rig.add_socket(Socket::new("left_shoulder", ArmKind::Left)
//!     .with_position(-30.0, 0.0, 120.0));
//! let right = rig.add_socket(Socket::new("right_shoulder", ArmKind::Right)
//!     .with_position(30.0, 0.0, 120.0));
//! let arm = rig.add_part(Part::new("left_arm", ArmKind::Left));
//!
//! // The compatibility rule gates every attachment.
//! assert!(rig.can_attach(arm, left));
//! assert!(!rig.can_attach(arm, right));
//!
//! // Pick up, then snap into the matching shoulder.
//! rig.pick_up(arm).unwrap();
//! assert!(rig.try_attach(arm, left).unwrap());
//! assert_eq!(rig.occupant_of(left), Some(arm));
//! ```
//!
//! # Failure Philosophy
//!
//! The system is interactive: a rejected attachment must leave every entity
//! exactly where it was. Compatibility failures are reported as `Ok(false)`,
//! misuse of unknown ids as [`AttachError`], and nothing here panics.
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

mod error;
mod highlight;
mod kind;
mod part;
mod rig;
mod socket;

pub use error::{AttachError, AttachResult};
pub use highlight::HighlightLevels;
pub use kind::ArmKind;
pub use part::{Part, PartId, PartState};
pub use rig::{Rig, RigValidation};
pub use socket::{Socket, SocketId};

// Re-export commonly used math types for convenience
pub use nalgebra::{Point3, Vector3};
