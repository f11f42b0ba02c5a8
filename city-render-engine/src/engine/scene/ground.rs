use bevy::prelude::*;
use constants::scene_settings::{
    GROUND_RADIUS, GROUND_THICKNESS, WATER_CENTER_Y, WATER_RADIUS, WATER_THICKNESS,
};

use crate::engine::assets::material_palette::MaterialPalette;

#[derive(Component)]
pub struct Terrain;

#[derive(Component)]
pub struct Water;

/// Island disk with its top face at y = 0, ringed by a wide water disk.
pub fn spawn_ground(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    palette: &MaterialPalette,
) {
    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(GROUND_RADIUS, GROUND_THICKNESS))),
        MeshMaterial3d(palette.grass.clone()),
        Transform::from_xyz(0.0, -GROUND_THICKNESS / 2.0, 0.0),
        Terrain,
    ));

    commands.spawn((
        Mesh3d(meshes.add(Cylinder::new(WATER_RADIUS, WATER_THICKNESS))),
        MeshMaterial3d(palette.water.clone()),
        Transform::from_xyz(0.0, WATER_CENTER_Y, 0.0),
        Water,
    ));
}
