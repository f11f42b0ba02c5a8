use bevy::math::Vec3;

/// Island terrain disk. The top face sits at y = 0.
pub const GROUND_RADIUS: f32 = 600.0;
pub const GROUND_THICKNESS: f32 = 40.0;

/// Water disk surrounding the island, below the terrain rim.
pub const WATER_RADIUS: f32 = 1500.0;
pub const WATER_THICKNESS: f32 = 20.0;
pub const WATER_CENTER_Y: f32 = -50.0;

/// Path slabs are flush strips sunk into the terrain surface.
pub const PATH_SURFACE_Y: f32 = -18.0;

/// Connector cylinders and the joint spheres at their start points.
pub const PIPE_RADIUS: f32 = 6.0;
pub const JOINT_RADIUS: f32 = 10.0;

/// Forest scatter: trees land within a 100x100 patch around the cluster
/// centre, scaled between 0.8 and 1.2.
pub const FOREST_SCATTER: f32 = 100.0;
pub const TREE_SCALE_MIN: f32 = 0.8;
pub const TREE_SCALE_SPREAD: f32 = 0.4;

/// Cloud drift mixer tuning.
pub const CLOUD_BOB_AMPLITUDE: f32 = 6.0;
pub const CLOUD_BOB_RATE: f32 = 0.4;

/// Isometric viewpoint: eye on the diagonal, looking at the origin.
pub const ISO_CAMERA_EYE: Vec3 = Vec3::new(500.0, 500.0, 500.0);
pub const ORTHO_VIEWPORT_HEIGHT: f32 = 1000.0;

/// Key light direction roughly top-left, matching the reference scene.
pub const SUN_POSITION: Vec3 = Vec3::new(-300.0, 500.0, 200.0);

pub const LABEL_FONT_SIZE: f32 = 12.0;
pub const HUD_FONT_SIZE: f32 = 16.0;
