//! End-to-end interaction scenarios.
//!
//! Each test drives a full session — scripted viewport, scene, rig — through
//! the same event sequence a player would produce, and checks the combined
//! state of the session, the parts and the sockets afterwards.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use approx::assert_relative_eq;
use nalgebra::Point3;
use rig_attach::{ArmKind, Part, PartId, PartState, Rig, Socket, SocketId};
use rig_interact::{
    EntityId, Hit, PointerPos, Prop, PropId, Scene, ScriptedViewport, Session, SessionEvent,
    Viewpoint, Viewport,
};

const POINTER: PointerPos = PointerPos::new(400.0, 300.0);

struct Bench {
    scene: Scene,
    session: Session,
    viewport: ScriptedViewport,
    left_socket: SocketId,
    right_socket: SocketId,
    left_arm: PartId,
    right_arm: PartId,
    torso: PropId,
}

/// A torso with left and right shoulders, both arms loose on the floor.
fn bench() -> Bench {
    let mut rig = Rig::new("robot");
    let left_socket = rig.add_socket(
        Socket::new("left_shoulder", ArmKind::Left).with_position(-30.0, 0.0, 120.0),
    );
    let right_socket = rig.add_socket(
        Socket::new("right_shoulder", ArmKind::Right).with_position(30.0, 0.0, 120.0),
    );
    let left_arm =
        rig.add_part(Part::new("left_arm", ArmKind::Left).with_position(-60.0, 40.0, 0.0));
    let right_arm =
        rig.add_part(Part::new("right_arm", ArmKind::Right).with_position(60.0, 40.0, 0.0));

    let mut scene = Scene::new(rig);
    let torso = scene.add_prop(
        Prop::new("torso")
            .with_position(0.0, 0.0, 100.0)
            .with_linked_socket(left_socket)
            .with_linked_socket(right_socket),
    );

    Bench {
        scene,
        session: Session::new(),
        viewport: ScriptedViewport::new(Viewpoint::from_position(Point3::new(
            0.0, -250.0, 80.0,
        ))),
        left_socket,
        right_socket,
        left_arm,
        right_arm,
        torso,
    }
}

impl Bench {
    fn click_on(&mut self, entity: EntityId) {
        let point = self.scene.position_of(entity).unwrap_or(Point3::origin());
        self.viewport.set_hit(Some(Hit::new(entity, point)));
        self.session
            .handle_click(&mut self.scene, &self.viewport, POINTER);
    }

    fn click_empty_space(&mut self) {
        self.viewport.set_hit(None);
        self.session
            .handle_click(&mut self.scene, &self.viewport, POINTER);
    }

    fn part_state(&self, part: PartId) -> PartState {
        self.scene.rig().part(part).unwrap().state()
    }
}

// =============================================================================
// Compatibility (scenarios 1 and 2)
// =============================================================================

#[test]
fn left_socket_accepts_left_arm() {
    let bench = bench();
    assert!(bench.scene.rig().can_attach(bench.left_arm, bench.left_socket));
}

#[test]
fn left_socket_rejects_right_arm() {
    let bench = bench();
    assert!(!bench.scene.rig().can_attach(bench.right_arm, bench.left_socket));
}

// =============================================================================
// Click/drag protocol (scenarios 3 through 6)
// =============================================================================

#[test]
fn clicking_a_part_starts_dragging_it() {
    let mut bench = bench();

    bench.click_on(EntityId::Part(bench.left_arm));

    assert!(bench.session.is_dragging());
    assert_eq!(bench.session.dragged(), Some(EntityId::Part(bench.left_arm)));
    assert_eq!(bench.part_state(bench.left_arm), PartState::Held);
    assert_eq!(
        bench.session.take_events(),
        vec![SessionEvent::PartStateChanged(Some(bench.left_arm))]
    );
}

#[test]
fn releasing_over_compatible_socket_attaches() {
    let mut bench = bench();
    bench.click_on(EntityId::Part(bench.left_arm));
    bench.session.take_events();

    bench.click_on(EntityId::Socket(bench.left_socket));

    assert!(!bench.session.is_dragging());
    assert_eq!(bench.part_state(bench.left_arm), PartState::Attached);
    assert_eq!(
        bench.scene.rig().occupant_of(bench.left_socket),
        Some(bench.left_arm)
    );
    // Attached arms snap to the socket.
    assert_eq!(
        bench.scene.rig().part(bench.left_arm).unwrap().position(),
        Point3::new(-30.0, 0.0, 120.0)
    );
    assert_eq!(
        bench.session.take_events(),
        vec![SessionEvent::PartStateChanged(Some(bench.left_arm))]
    );
}

#[test]
fn releasing_over_empty_space_drops() {
    let mut bench = bench();
    bench.click_on(EntityId::Part(bench.left_arm));
    bench.session.take_events();

    bench.click_empty_space();

    assert!(!bench.session.is_dragging());
    assert_eq!(bench.part_state(bench.left_arm), PartState::Detached);
    assert!(bench.scene.rig().part(bench.left_arm).unwrap().socket().is_none());
    assert_eq!(
        bench.session.take_events(),
        vec![SessionEvent::PartStateChanged(Some(bench.left_arm))]
    );
}

#[test]
fn releasing_over_incompatible_socket_keeps_dragging() {
    let mut bench = bench();
    bench.click_on(EntityId::Part(bench.right_arm));
    bench.session.take_events();

    bench.click_on(EntityId::Socket(bench.left_socket));

    assert!(bench.session.is_dragging());
    assert_eq!(bench.part_state(bench.right_arm), PartState::Held);
    assert!(bench.scene.rig().socket(bench.left_socket).unwrap().is_available());
    assert_eq!(
        bench.session.take_events(),
        vec![SessionEvent::AttachRejected {
            part: bench.right_arm,
            socket: bench.left_socket,
        }]
    );

    // The same drag can still finish on the matching shoulder.
    bench.click_on(EntityId::Socket(bench.right_socket));
    assert!(!bench.session.is_dragging());
    assert_eq!(bench.part_state(bench.right_arm), PartState::Attached);
}

#[test]
fn releasing_over_ordinary_geometry_drops() {
    let mut bench = bench();
    bench.click_on(EntityId::Part(bench.left_arm));
    bench.session.take_events();

    // The torso is not a socket; releasing on it counts as a drop.
    bench.click_on(EntityId::Prop(bench.torso));

    assert!(!bench.session.is_dragging());
    assert_eq!(bench.part_state(bench.left_arm), PartState::Detached);
}

// =============================================================================
// Re-pick-up and swapping
// =============================================================================

#[test]
fn clicking_an_attached_arm_tears_it_off() {
    let mut bench = bench();
    bench.click_on(EntityId::Part(bench.left_arm));
    bench.click_on(EntityId::Socket(bench.left_socket));
    assert_eq!(bench.part_state(bench.left_arm), PartState::Attached);

    bench.click_on(EntityId::Part(bench.left_arm));

    assert!(bench.session.is_dragging());
    assert_eq!(bench.part_state(bench.left_arm), PartState::Held);
    let socket = bench.scene.rig().socket(bench.left_socket).unwrap();
    assert!(socket.is_available());
    assert!(socket.slot_visible());
}

#[test]
fn occupied_socket_refuses_a_second_arm() {
    let mut bench = bench();
    let spare = bench
        .scene
        .rig_mut()
        .add_part(Part::new("spare_left_arm", ArmKind::Left).with_position(-80.0, 40.0, 0.0));

    bench.click_on(EntityId::Part(bench.left_arm));
    bench.click_on(EntityId::Socket(bench.left_socket));

    bench.click_on(EntityId::Part(spare));
    bench.click_on(EntityId::Socket(bench.left_socket));

    // Refused: the spare is still on the pointer.
    assert!(bench.session.is_dragging());
    assert_eq!(bench.part_state(spare), PartState::Held);
    assert_eq!(
        bench.scene.rig().occupant_of(bench.left_socket),
        Some(bench.left_arm)
    );
}

#[test]
fn universal_arm_fits_either_shoulder() {
    let mut bench = bench();
    let universal = bench
        .scene
        .rig_mut()
        .add_part(Part::new("any_arm", ArmKind::Universal).with_position(0.0, 40.0, 0.0));

    bench.click_on(EntityId::Part(universal));
    bench.click_on(EntityId::Socket(bench.right_socket));
    assert_eq!(bench.part_state(universal), PartState::Attached);

    // Tear it off and move it to the other side.
    bench.click_on(EntityId::Part(universal));
    bench.click_on(EntityId::Socket(bench.left_socket));
    assert_eq!(
        bench.scene.rig().occupant_of(bench.left_socket),
        Some(universal)
    );
    assert!(bench.scene.rig().socket(bench.right_socket).unwrap().is_available());
}

// =============================================================================
// Rigs that start assembled
// =============================================================================

#[test]
fn preinstalled_arm_can_be_torn_off_and_dropped() {
    let mut rig = Rig::new("robot");
    let shoulder = rig.add_socket(
        Socket::new("left_shoulder", ArmKind::Left).with_position(-30.0, 0.0, 120.0),
    );
    let arm = rig
        .place_attached(Part::new("left_arm", ArmKind::Left), shoulder)
        .unwrap();

    let mut scene = Scene::new(rig);
    let mut viewport =
        ScriptedViewport::new(Viewpoint::from_position(Point3::new(0.0, -250.0, 80.0)));
    let mut session = Session::new();

    viewport.set_hit(Some(Hit::new(
        EntityId::Part(arm),
        Point3::new(-30.0, 0.0, 120.0),
    )));
    session.handle_click(&mut scene, &viewport, POINTER);
    assert_eq!(scene.rig().part(arm).unwrap().state(), PartState::Held);
    assert!(scene.rig().socket(shoulder).unwrap().slot_visible());

    viewport.set_hit(None);
    session.handle_click(&mut scene, &viewport, POINTER);
    assert_eq!(scene.rig().part(arm).unwrap().state(), PartState::Detached);
    assert!(scene.rig().validate().is_valid());
}

// =============================================================================
// Hover feedback
// =============================================================================

#[test]
fn hovering_the_torso_lights_up_its_arms() {
    let mut bench = bench();
    bench.click_on(EntityId::Part(bench.left_arm));
    bench.click_on(EntityId::Socket(bench.left_socket));
    bench.session.take_events();

    bench.viewport.set_hit(Some(Hit::new(
        EntityId::Prop(bench.torso),
        Point3::new(0.0, 0.0, 100.0),
    )));
    bench
        .session
        .advance(&mut bench.scene, &bench.viewport, POINTER);

    assert_eq!(bench.scene.prop(bench.torso).unwrap().emissive(), 3.0);
    assert_eq!(
        bench.scene.rig().part(bench.left_arm).unwrap().emissive(),
        5.0
    );
    // Hover moved to a non-part entity: the notification carries no part.
    assert_eq!(
        bench.session.take_events(),
        vec![SessionEvent::PartStateChanged(None)]
    );
}

#[test]
fn hover_moves_between_arm_and_socket() {
    let mut bench = bench();

    bench.viewport.set_hit(Some(Hit::new(
        EntityId::Part(bench.left_arm),
        Point3::new(-60.0, 40.0, 0.0),
    )));
    bench
        .session
        .advance(&mut bench.scene, &bench.viewport, POINTER);
    assert_eq!(
        bench.scene.rig().part(bench.left_arm).unwrap().emissive(),
        5.0
    );

    bench.viewport.set_hit(Some(Hit::new(
        EntityId::Socket(bench.left_socket),
        Point3::new(-30.0, 0.0, 120.0),
    )));
    bench
        .session
        .advance(&mut bench.scene, &bench.viewport, POINTER);

    // Old target dimmed, new one lit.
    assert_eq!(
        bench.scene.rig().part(bench.left_arm).unwrap().emissive(),
        0.0
    );
    assert!(bench
        .scene
        .rig()
        .socket(bench.left_socket)
        .unwrap()
        .is_highlighted());
}

// =============================================================================
// Collaborator failures
// =============================================================================

#[test]
fn losing_the_viewpoint_freezes_the_event() {
    let mut bench = bench();
    bench.click_on(EntityId::Part(bench.left_arm));

    bench.viewport.set_viewpoint(None);
    bench.viewport.set_hit(None);
    bench
        .session
        .handle_click(&mut bench.scene, &bench.viewport, POINTER);

    // The click was swallowed whole: still dragging, part still held.
    assert!(bench.session.is_dragging());
    assert_eq!(bench.part_state(bench.left_arm), PartState::Held);
}

#[test]
fn drag_updates_run_every_sample() {
    let mut bench = bench();
    bench.click_on(EntityId::Part(bench.left_arm));
    let depth = bench.session.initial_drag_distance();

    for target in [
        Point3::new(-40.0, 20.0, 60.0),
        Point3::new(-35.0, 10.0, 90.0),
        Point3::new(-30.0, 0.0, 120.0),
    ] {
        bench.viewport.aim_at(target);
        bench
            .session
            .advance(&mut bench.scene, &bench.viewport, POINTER);

        let viewpoint = bench.viewport.viewpoint().unwrap();
        let ray = bench.viewport.pointer_ray(POINTER).unwrap();
        let expected = viewpoint.position + ray.direction.into_inner() * depth;
        let offset = bench.scene.rig().part(bench.left_arm).unwrap().held_offset();
        let position = bench.scene.rig().part(bench.left_arm).unwrap().position();
        assert_relative_eq!(position, expected + offset, epsilon = 1e-10);
    }
}
