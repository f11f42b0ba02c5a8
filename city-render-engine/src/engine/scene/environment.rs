use bevy::prelude::*;
use bevy::render::mesh::MeshBuilder;
use rand::Rng;
use rand::rngs::StdRng;

use constants::scene_settings::{
    CLOUD_BOB_AMPLITUDE, CLOUD_BOB_RATE, FOREST_SCATTER, TREE_SCALE_MIN, TREE_SCALE_SPREAD,
};

use super::{DriftMixer, MixerRegistry};
use crate::engine::assets::city_layout::{CityLayout, ForestPatch};
use crate::engine::assets::material_palette::MaterialPalette;

#[derive(Component)]
pub struct Tree;

#[derive(Component)]
pub struct Cloud;

/// Block offsets and sizes for one cloud cluster, in cloud-local space.
const CLOUD_BLOCKS: [[f32; 4]; 4] = [
    [0.0, 0.0, 0.0, 40.0],
    [30.0, 10.0, 0.0, 30.0],
    [-30.0, 15.0, 10.0, 35.0],
    [20.0, 20.0, -10.0, 25.0],
];

/// Scatter the forest patches and hang the clouds. All randomness flows
/// through the injected generator so a fixed seed reproduces the scene.
pub fn spawn_environment(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    palette: &MaterialPalette,
    rng: &mut StdRng,
    mixers: &mut MixerRegistry,
    layout: &CityLayout,
) {
    for patch in &layout.forests {
        spawn_forest_patch(commands, meshes, palette, rng, patch);
    }
    for cloud in &layout.clouds {
        spawn_cloud(commands, meshes, palette, mixers, Vec3::from_array(*cloud));
    }
}

fn spawn_forest_patch(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    palette: &MaterialPalette,
    rng: &mut StdRng,
    patch: &ForestPatch,
) {
    let half = FOREST_SCATTER / 2.0;
    for _ in 0..patch.trees {
        let base = Vec3::new(
            patch.center[0] + rng.gen_range(-half..half),
            0.0,
            patch.center[1] + rng.gen_range(-half..half),
        );
        spawn_tree(commands, meshes, palette, rng, base);
    }
}

fn spawn_tree(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    palette: &MaterialPalette,
    rng: &mut StdRng,
    base: Vec3,
) {
    let scale = TREE_SCALE_MIN + rng.gen_range(0.0..TREE_SCALE_SPREAD);
    let trunk = meshes.add(
        ConicalFrustum {
            radius_top: 4.0,
            radius_bottom: 6.0,
            height: 20.0,
        }
        .mesh()
        .build(),
    );
    let canopy = meshes.add(Sphere::new(22.0));

    commands
        .spawn((
            Transform::from_translation(base).with_scale(Vec3::splat(scale)),
            Visibility::default(),
            Tree,
        ))
        .with_children(|tree| {
            tree.spawn((
                Mesh3d(trunk),
                MeshMaterial3d(palette.bark.clone()),
                Transform::from_xyz(0.0, 10.0, 0.0),
            ));
            tree.spawn((
                Mesh3d(canopy),
                MeshMaterial3d(palette.canopy.clone()),
                Transform::from_xyz(0.0, 35.0, 0.0),
            ));
        });
}

fn spawn_cloud(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    palette: &MaterialPalette,
    mixers: &mut MixerRegistry,
    anchor: Vec3,
) {
    let cloud = commands
        .spawn((
            Transform::from_translation(anchor),
            Visibility::default(),
            Cloud,
            DriftMixer {
                elapsed: 0.0,
                amplitude: CLOUD_BOB_AMPLITUDE,
                rate: CLOUD_BOB_RATE,
                base_y: anchor.y,
            },
        ))
        .with_children(|cloud| {
            for block in CLOUD_BLOCKS {
                cloud.spawn((
                    Mesh3d(meshes.add(Cuboid::new(block[3], block[3], block[3]))),
                    MeshMaterial3d(palette.cloud.clone()),
                    Transform::from_xyz(block[0], block[1], block[2]),
                ));
            }
        })
        .id();
    mixers.mixers.push(cloud);
}
