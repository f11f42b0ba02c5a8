use bevy::prelude::*;
use constants::scene_settings::{JOINT_RADIUS, PIPE_RADIUS};

use crate::engine::assets::city_layout::BusLayout;
use crate::engine::assets::material_palette::MaterialPalette;
use crate::engine::systems::labels::attach_label;

#[derive(Component)]
pub struct EventBusNetwork;

/// Connector record kept on the mesh entity. Length always equals the
/// distance between the endpoints it was derived from.
#[derive(Component, Debug, Clone, Copy)]
pub struct PipeSegment {
    pub start: Vec3,
    pub end: Vec3,
    pub length: f32,
}

#[derive(Component)]
pub struct PipeJoint;

/// Rotation taking the cylinder's authored up axis onto the run direction.
/// A zero-length run keeps identity orientation rather than failing.
pub fn pipe_orientation(start: Vec3, end: Vec3) -> Quat {
    match (end - start).try_normalize() {
        Some(direction) => Quat::from_rotation_arc(Vec3::Y, direction),
        None => Quat::IDENTITY,
    }
}

/// Connector mesh authored end-anchored: the cylinder is shifted so its
/// local origin sits on the start cap instead of the centre, which lets the
/// segment be placed by translating straight to `start`.
pub fn pipe_mesh(length: f32) -> Mesh {
    Mesh::from(Cylinder::new(PIPE_RADIUS, length)).translated_by(Vec3::Y * (length / 2.0))
}

/// Build the whole bus: one oriented connector per run plus a joint sphere
/// at each run's start, grouped under a single labelled root.
pub fn spawn_event_bus(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    palette: &MaterialPalette,
    bus: &BusLayout,
) -> Entity {
    let root = commands
        .spawn((
            Transform::from_translation(Vec3::from_array(bus.anchor)),
            Visibility::default(),
            EventBusNetwork,
        ))
        .id();

    for run in &bus.runs {
        let start = Vec3::from_array(run.start);
        let end = Vec3::from_array(run.end);
        let length = start.distance(end);

        let segment = commands
            .spawn((
                Mesh3d(meshes.add(pipe_mesh(length))),
                MeshMaterial3d(palette.handle(run.material)),
                Transform::from_translation(start).with_rotation(pipe_orientation(start, end)),
                PipeSegment { start, end, length },
            ))
            .id();

        let joint = commands
            .spawn((
                Mesh3d(meshes.add(Sphere::new(JOINT_RADIUS))),
                MeshMaterial3d(palette.storage_metal.clone()),
                Transform::from_translation(start),
                PipeJoint,
            ))
            .id();

        commands.entity(root).add_children(&[segment, joint]);
    }

    attach_label(commands, root, "Event Bus", 80.0);
    root
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::city_layout::PipeRunConfig;
    use crate::engine::assets::material_palette::{MaterialKey, create_material_palette};
    use bevy::ecs::system::RunSystemOnce;
    use bevy::render::mesh::VertexAttributeValues;

    fn build_bus(runs: Vec<PipeRunConfig>) -> World {
        let mut world = World::new();
        world.insert_resource(Assets::<Mesh>::default());
        world.insert_resource(Assets::<StandardMaterial>::default());
        world
            .run_system_once(
                move |mut commands: Commands,
                      mut meshes: ResMut<Assets<Mesh>>,
                      mut materials: ResMut<Assets<StandardMaterial>>| {
                    let palette = create_material_palette(&mut materials);
                    let bus = BusLayout {
                        anchor: [-100.0, 20.0, 0.0],
                        runs: runs.clone(),
                    };
                    spawn_event_bus(&mut commands, &mut meshes, &palette, &bus);
                },
            )
            .unwrap();
        world
    }

    #[test]
    fn orientation_is_parallel_to_the_run() {
        let pairs = [
            (Vec3::ZERO, Vec3::new(100.0, 0.0, 0.0)),
            (Vec3::new(-60.0, 40.0, 0.0), Vec3::new(-300.0, 40.0, -150.0)),
            (Vec3::new(3.0, -8.0, 12.0), Vec3::new(-40.0, 90.0, 7.5)),
        ];
        for (start, end) in pairs {
            let rotated_axis = pipe_orientation(start, end) * Vec3::Y;
            let direction = (end - start).normalize();
            assert!(
                rotated_axis.dot(direction) > 1.0 - 1e-5,
                "axis {rotated_axis:?} not parallel to {direction:?}"
            );
        }
    }

    #[test]
    fn degenerate_run_keeps_identity_orientation() {
        let p = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(pipe_orientation(p, p), Quat::IDENTITY);
    }

    #[test]
    fn pipe_mesh_is_anchored_at_the_start_cap() {
        let mesh = pipe_mesh(120.0);
        let Some(VertexAttributeValues::Float32x3(positions)) =
            mesh.attribute(Mesh::ATTRIBUTE_POSITION)
        else {
            panic!("cylinder mesh must carry positions");
        };
        let min_y = positions.iter().map(|p| p[1]).fold(f32::MAX, f32::min);
        let max_y = positions.iter().map(|p| p[1]).fold(f32::MIN, f32::max);
        assert!((min_y - 0.0).abs() < 1e-4);
        assert!((max_y - 120.0).abs() < 1e-4);
    }

    #[test]
    fn run_between_core_and_storage_measures_out() {
        let start = Vec3::new(-60.0, 40.0, 0.0);
        let end = Vec3::new(-300.0, 40.0, -150.0);
        let mut world = build_bus(vec![PipeRunConfig {
            start: start.to_array(),
            end: end.to_array(),
            material: MaterialKey::ConnectorPrimary,
        }]);

        let mut segments = world.query::<(&PipeSegment, &Transform)>();
        let collected: Vec<_> = segments.iter(&world).collect();
        assert_eq!(collected.len(), 1);
        let (segment, transform) = collected[0];
        assert!((segment.length - start.distance(end)).abs() < 1e-3);
        assert!((segment.length - 283.019).abs() < 1e-2);
        assert_eq!(transform.translation, start);

        let mut joints = world.query_filtered::<&Transform, With<PipeJoint>>();
        let joints: Vec<_> = joints.iter(&world).collect();
        assert_eq!(joints.len(), 1);
        assert_eq!(joints[0].translation, start);
    }

    #[test]
    fn every_run_gets_a_segment_and_a_joint_under_one_root() {
        let runs = vec![
            PipeRunConfig {
                start: [-60.0, 40.0, 0.0],
                end: [-300.0, 40.0, -150.0],
                material: MaterialKey::ConnectorPrimary,
            },
            PipeRunConfig {
                start: [-60.0, 50.0, 20.0],
                end: [-300.0, 50.0, 200.0],
                material: MaterialKey::ConnectorSecondary,
            },
            PipeRunConfig {
                start: [0.0, 60.0, 50.0],
                end: [0.0, 60.0, 250.0],
                material: MaterialKey::ConnectorAlert,
            },
        ];
        let mut world = build_bus(runs);

        let mut roots = world.query_filtered::<Entity, With<EventBusNetwork>>();
        let roots: Vec<_> = roots.iter(&world).collect();
        assert_eq!(roots.len(), 1);
        let children = world.get::<Children>(roots[0]).unwrap();
        assert_eq!(children.len(), 6);

        let mut segments = world.query::<&PipeSegment>();
        assert_eq!(segments.iter(&world).count(), 3);
        let mut joints = world.query_filtered::<(), With<PipeJoint>>();
        assert_eq!(joints.iter(&world).count(), 3);
    }
}
