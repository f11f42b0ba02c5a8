//! Building generation: declarative blueprints consumed by one assembler.
//!
//! Every archetype is a data table (parts plus optional attachments), not a
//! bespoke spawn routine, so all buildings share a single code path for
//! tagging, labelling and child placement.

pub mod archetypes;

use bevy::prelude::*;
use bevy::render::mesh::{ConeMeshBuilder, MeshBuilder};

use crate::engine::assets::material_palette::{MaterialKey, MaterialPalette};
use crate::engine::systems::labels::attach_label;

/// Typed identity record carried by every building root. Replaces loose
/// "is this a building" metadata tagging; picking and census code key off
/// this component alone.
#[derive(Component, Debug, Clone)]
pub struct Building {
    pub name: String,
    pub anchor: Vec3,
}

pub enum Shape {
    Box { size: Vec3 },
    Cylinder { radius: f32, height: f32 },
    Frustum { top: f32, bottom: f32, height: f32 },
    /// Low-resolution cones double as pyramid roofs (four sides).
    Cone { radius: f32, height: f32, sides: u32 },
    Sphere { radius: f32 },
    Torus { minor: f32, major: f32 },
    /// Rectangle profile extruded along local Z, centred at the origin.
    Slab { profile: Vec2, depth: f32 },
    /// Triangle profile extruded along local Z.
    Wedge { a: Vec2, b: Vec2, c: Vec2, depth: f32 },
}

impl Shape {
    fn mesh(&self) -> Mesh {
        match *self {
            Shape::Box { size } => Cuboid::from_size(size).into(),
            Shape::Cylinder { radius, height } => Cylinder::new(radius, height).into(),
            Shape::Frustum {
                top,
                bottom,
                height,
            } => ConicalFrustum {
                radius_top: top,
                radius_bottom: bottom,
                height,
            }
            .mesh()
            .build(),
            Shape::Cone {
                radius,
                height,
                sides,
            } => ConeMeshBuilder::new(radius, height, sides).build(),
            Shape::Sphere { radius } => Sphere::new(radius).into(),
            Shape::Torus { minor, major } => Torus {
                minor_radius: minor,
                major_radius: major,
            }
            .into(),
            Shape::Slab { profile, depth } => {
                Extrusion::new(Rectangle::new(profile.x, profile.y), depth)
                    .mesh()
                    .build()
            }
            Shape::Wedge { a, b, c, depth } => Extrusion::new(Triangle2d::new(a, b, c), depth)
                .mesh()
                .build(),
        }
    }
}

/// One primitive piece of a building, placed in the root group's local
/// space.
pub struct Part {
    pub shape: Shape,
    pub material: MaterialKey,
    pub offset: Vec3,
    pub rotation: Quat,
}

impl Part {
    pub fn new(shape: Shape, material: MaterialKey, offset: Vec3) -> Self {
        Self {
            shape,
            material,
            offset,
            rotation: Quat::IDENTITY,
        }
    }

    pub fn rotated(mut self, rotation: Quat) -> Self {
        self.rotation = rotation;
        self
    }
}

/// A named optional extra: a sub-feature the archetype declares rather than
/// special-cases (a booking canopy, a gallery frame).
pub struct Attachment {
    pub name: &'static str,
    pub parts: Vec<Part>,
}

pub struct Blueprint {
    pub name: &'static str,
    pub label: &'static str,
    pub label_offset: f32,
    pub parts: Vec<Part>,
    pub attachments: Vec<Attachment>,
}

impl Blueprint {
    pub fn all_parts(&self) -> impl Iterator<Item = &Part> {
        self.parts
            .iter()
            .chain(self.attachments.iter().flat_map(|a| a.parts.iter()))
    }

    pub fn part_count(&self) -> usize {
        self.all_parts().count()
    }
}

/// Spawn one blueprint at a world anchor: a single tagged root group, every
/// declared part as a child, and exactly one floating label.
pub fn assemble(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    palette: &MaterialPalette,
    blueprint: &Blueprint,
    anchor: Vec3,
) -> Entity {
    let root = commands
        .spawn((
            Transform::from_translation(anchor),
            Visibility::default(),
            Building {
                name: blueprint.name.to_string(),
                anchor,
            },
        ))
        .id();

    for part in blueprint.all_parts() {
        let piece = commands
            .spawn((
                Mesh3d(meshes.add(part.shape.mesh())),
                MeshMaterial3d(palette.handle(part.material)),
                Transform::from_translation(part.offset).with_rotation(part.rotation),
            ))
            .id();
        commands.entity(root).add_child(piece);
    }

    attach_label(commands, root, blueprint.label, blueprint.label_offset);
    root
}
