use bevy::prelude::*;
use constants::scene_settings::PATH_SURFACE_Y;

use crate::engine::assets::city_layout::PathSlab;
use crate::engine::assets::material_palette::MaterialPalette;

#[derive(Component)]
pub struct Walkway;

/// Flat sand-colored strips per the layout manifest, sunk to the path
/// surface height.
pub fn spawn_paths(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    palette: &MaterialPalette,
    slabs: &[PathSlab],
) {
    for slab in slabs {
        commands.spawn((
            Mesh3d(meshes.add(Plane3d::default().mesh().size(slab.size[0], slab.size[1]))),
            MeshMaterial3d(palette.path_sand.clone()),
            Transform::from_xyz(slab.center[0], PATH_SURFACE_Y, slab.center[1]),
            Walkway,
        ));
    }
}
