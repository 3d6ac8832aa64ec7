//! Attach Playground
//!
//! Scripted build-a-robot session: a torso with two shoulder sockets, a
//! pre-installed left arm, and a loose right arm. The script tears the left
//! arm off, tries it on the wrong shoulder, drops it, and finally snaps the
//! right arm into place — printing the status line a UI widget would show
//! after every notification.

use anyhow::Result;
use nalgebra::Point3;
use rig_attach::{ArmKind, Part, Rig, Socket};
use rig_interact::{
    EntityId, Hit, PointerPos, Prop, Scene, ScriptedViewport, Session, SessionEvent, Viewpoint,
};

const POINTER: PointerPos = PointerPos::new(400.0, 300.0);

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    println!("=== Attach Playground ===");
    println!();

    // Build the robot: torso, two shoulders, one arm already installed.
    let mut rig = Rig::new("robot");
    let left_shoulder = rig.add_socket(
        Socket::new("left_shoulder", ArmKind::Left).with_position(-30.0, 0.0, 120.0),
    );
    let right_shoulder = rig.add_socket(
        Socket::new("right_shoulder", ArmKind::Right).with_position(30.0, 0.0, 120.0),
    );
    let left_arm = rig.place_attached(Part::new("left_arm", ArmKind::Left), left_shoulder)?;
    let right_arm =
        rig.add_part(Part::new("right_arm", ArmKind::Right).with_position(60.0, 40.0, 0.0));

    let mut scene = Scene::new(rig);
    scene.add_prop(
        Prop::new("torso")
            .with_position(0.0, 0.0, 100.0)
            .with_linked_socket(left_shoulder)
            .with_linked_socket(right_shoulder),
    );

    let mut viewport =
        ScriptedViewport::new(Viewpoint::from_position(Point3::new(0.0, -250.0, 80.0)));
    let mut session = Session::new();

    // Step 1: tear the installed arm off.
    println!("-- click the installed left arm");
    viewport.set_hit(Some(Hit::new(
        EntityId::Part(left_arm),
        Point3::new(-30.0, 0.0, 120.0),
    )));
    session.handle_click(&mut scene, &viewport, POINTER);
    print_status(&scene, session.take_events());

    // Step 2: drag it around for a few samples.
    println!("-- drag it across the bench");
    for target in [
        Point3::new(-10.0, 0.0, 100.0),
        Point3::new(20.0, 0.0, 110.0),
    ] {
        viewport.aim_at(target);
        session.advance(&mut scene, &viewport, POINTER);
    }

    // Step 3: try the wrong shoulder — refused, the drag continues.
    println!("-- release over the right shoulder (wrong side)");
    viewport.set_hit(Some(Hit::new(
        EntityId::Socket(right_shoulder),
        Point3::new(30.0, 0.0, 120.0),
    )));
    session.handle_click(&mut scene, &viewport, POINTER);
    print_status(&scene, session.take_events());

    // Step 4: drop it on the floor.
    println!("-- release over empty space");
    viewport.set_hit(None);
    session.handle_click(&mut scene, &viewport, POINTER);
    print_status(&scene, session.take_events());

    // Step 5: install the right arm where it belongs.
    println!("-- pick up the right arm and attach it");
    viewport.set_hit(Some(Hit::new(
        EntityId::Part(right_arm),
        Point3::new(60.0, 40.0, 0.0),
    )));
    session.handle_click(&mut scene, &viewport, POINTER);
    viewport.set_hit(Some(Hit::new(
        EntityId::Socket(right_shoulder),
        Point3::new(30.0, 0.0, 120.0),
    )));
    session.handle_click(&mut scene, &viewport, POINTER);
    print_status(&scene, session.take_events());

    println!();
    println!("final rig state:");
    for (_, part) in scene.rig().parts() {
        println!("  {:<12} {}", part.name(), part.state());
    }
    assert!(scene.rig().validate().is_valid());

    Ok(())
}

/// Render the status line a UI widget would display for each notification.
fn print_status(scene: &Scene, events: Vec<SessionEvent>) {
    for event in events {
        match event {
            SessionEvent::PartStateChanged(Some(part_id)) => {
                if let Some(part) = scene.rig().part(part_id) {
                    println!("   status: {}: {}", part.name(), part.state());
                }
            }
            SessionEvent::PartStateChanged(None) => println!("   status: (cleared)"),
            SessionEvent::AttachRejected { part, socket } => {
                println!("   status: {part} does not fit {socket}");
            }
        }
    }
}
