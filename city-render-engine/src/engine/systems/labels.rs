use bevy::prelude::*;
use constants::scene_settings::LABEL_FONT_SIZE;

/// Overlay node pinned to a 3D entity. The node lives in UI space; a
/// per-frame system projects the target's position and moves the node so it
/// behaves like a 2D label renderer layered over the scene.
#[derive(Component, Debug, Clone, Copy)]
pub struct SceneLabel {
    pub target: Entity,
    pub offset: f32,
}

/// Attach a floating text marker to `target`, `offset` world units above its
/// local origin.
pub fn attach_label(commands: &mut Commands, target: Entity, text: &str, offset: f32) {
    commands.spawn((
        Text::new(text),
        TextFont {
            font_size: LABEL_FONT_SIZE,
            ..default()
        },
        TextColor(Color::WHITE),
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.5)),
        Node {
            position_type: PositionType::Absolute,
            padding: UiRect::axes(Val::Px(8.0), Val::Px(4.0)),
            ..default()
        },
        SceneLabel { target, offset },
    ));
}

/// Reproject every label each frame. Labels whose target is gone or behind
/// the camera are hidden rather than treated as errors.
pub fn update_label_positions(
    cameras: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    targets: Query<&GlobalTransform, Without<Camera3d>>,
    mut labels: Query<(&SceneLabel, &mut Node, &mut Visibility)>,
) {
    let Ok((camera, camera_transform)) = cameras.single() else {
        return;
    };

    for (label, mut node, mut visibility) in &mut labels {
        let Ok(target) = targets.get(label.target) else {
            *visibility = Visibility::Hidden;
            continue;
        };

        let world = target.translation() + Vec3::Y * label.offset;
        match camera.world_to_viewport(camera_transform, world) {
            Ok(screen) => {
                node.left = Val::Px(screen.x);
                node.top = Val::Px(screen.y);
                *visibility = Visibility::Visible;
            }
            Err(_) => *visibility = Visibility::Hidden,
        }
    }
}

pub struct LabelOverlayPlugin;

impl Plugin for LabelOverlayPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, update_label_positions);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy::ecs::system::RunSystemOnce;

    #[test]
    fn attach_spawns_one_pinned_node() {
        let mut world = World::new();
        let target = world.spawn(Transform::IDENTITY).id();

        world
            .run_system_once(move |mut commands: Commands| {
                attach_label(&mut commands, target, "STORAGE", 150.0);
            })
            .unwrap();

        let mut labels = world.query::<(&SceneLabel, &Text)>();
        let collected: Vec<_> = labels.iter(&world).collect();
        assert_eq!(collected.len(), 1);
        let (label, text) = collected[0];
        assert_eq!(label.target, target);
        assert_eq!(label.offset, 150.0);
        assert_eq!(text.0, "STORAGE");
    }
}
