use bevy::prelude::*;
use rand::Rng;
use rand::rngs::StdRng;

use constants::flow_settings::{
    FLOW_BASE_SPEED, FLOW_BATCH_SIZE, FLOW_RESTART_X, FLOW_RIDE_HEIGHT, FLOW_SCATTER,
    FLOW_SPEED_JITTER, FLOW_TOKEN_RADIUS, FLOW_WRAP_GUARD_X,
};

use crate::engine::assets::material_palette::MaterialPalette;

/// Animated token travelling along a connector. `velocity` is world units
/// per frame tick; `limit` is half the connector length; `offset` is the
/// phase the token spawned at.
#[derive(Component, Debug, Clone, Copy)]
pub struct FlowParticle {
    pub velocity: f32,
    pub limit: f32,
    pub offset: f32,
}

/// The orchestrator's token ledger. Populated once during build, then only
/// read by the per-tick advancement; nothing is ever removed.
#[derive(Resource, Default)]
pub struct FlowRegistry {
    pub particles: Vec<Entity>,
}

/// One-shot batch spawn along a connector: a fixed number of tokens with
/// randomized phase and speed, scattered a little around the ride height so
/// the stream reads as a swarm. There is no ongoing emitter.
pub fn spawn_flow_particles(
    commands: &mut Commands,
    meshes: &mut ResMut<Assets<Mesh>>,
    palette: &MaterialPalette,
    registry: &mut FlowRegistry,
    rng: &mut StdRng,
    anchor: Vec3,
    length: f32,
) {
    let limit = length / 2.0;
    let half_scatter = FLOW_SCATTER / 2.0;

    for _ in 0..FLOW_BATCH_SIZE {
        let offset = if limit > 0.0 {
            rng.gen_range(-limit..limit)
        } else {
            0.0
        };
        let velocity = FLOW_BASE_SPEED + rng.gen_range(0.0..FLOW_SPEED_JITTER);
        let position = Vec3::new(
            anchor.x + offset,
            anchor.y + FLOW_RIDE_HEIGHT + rng.gen_range(-half_scatter..half_scatter),
            anchor.z + rng.gen_range(-half_scatter..half_scatter),
        );

        let token = commands
            .spawn((
                Mesh3d(meshes.add(Sphere::new(FLOW_TOKEN_RADIUS))),
                MeshMaterial3d(palette.flow_token.clone()),
                Transform::from_translation(position),
                FlowParticle {
                    velocity,
                    limit,
                    offset,
                },
            ))
            .id();
        registry.particles.push(token);
    }
}

/// Per-tick advancement. Velocity is applied once per frame with no time
/// scaling, and the wrap rule is the shared guard/restart pair rather than
/// anything derived from the token's own connector. The carrier offset
/// lookup is null-safe: a token whose carrier is gone advances against a
/// zero offset instead of failing.
pub fn advance_flow(
    registry: Res<FlowRegistry>,
    mut particles: Query<(&mut Transform, &FlowParticle, Option<&ChildOf>)>,
    carriers: Query<&Transform, Without<FlowParticle>>,
) {
    for &token in &registry.particles {
        let Ok((mut transform, particle, child_of)) = particles.get_mut(token) else {
            continue;
        };

        let carrier_x = child_of
            .and_then(|parent| carriers.get(parent.parent()).ok())
            .map(|carrier| carrier.translation.x)
            .unwrap_or(0.0);

        transform.translation.x += particle.velocity;
        if transform.translation.x > particle.limit + carrier_x
            && transform.translation.x > FLOW_WRAP_GUARD_X
        {
            transform.translation.x = FLOW_RESTART_X;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::assets::material_palette::create_material_palette;
    use bevy::ecs::system::RunSystemOnce;
    use rand::SeedableRng;

    fn spawn_world(anchor: Vec3, length: f32, seed: u64) -> World {
        let mut world = World::new();
        world.insert_resource(Assets::<Mesh>::default());
        world.insert_resource(Assets::<StandardMaterial>::default());
        world.init_resource::<FlowRegistry>();
        world
            .run_system_once(
                move |mut commands: Commands,
                      mut meshes: ResMut<Assets<Mesh>>,
                      mut materials: ResMut<Assets<StandardMaterial>>,
                      mut registry: ResMut<FlowRegistry>| {
                    let palette = create_material_palette(&mut materials);
                    let mut rng = StdRng::seed_from_u64(seed);
                    spawn_flow_particles(
                        &mut commands,
                        &mut meshes,
                        &palette,
                        &mut registry,
                        &mut rng,
                        anchor,
                        length,
                    );
                },
            )
            .unwrap();
        world
    }

    #[test]
    fn batch_spawns_ten_tokens_with_bounded_phase_and_speed() {
        let anchor = Vec3::new(0.0, 40.0, 0.0);
        let mut world = spawn_world(anchor, 200.0, 17);

        let registry_len = world.resource::<FlowRegistry>().particles.len();
        assert_eq!(registry_len, FLOW_BATCH_SIZE);

        let mut tokens = world.query::<(&FlowParticle, &Transform)>();
        for (particle, transform) in tokens.iter(&world) {
            assert_eq!(particle.limit, 100.0);
            assert!(particle.offset >= -100.0 && particle.offset < 100.0);
            assert!(particle.velocity >= FLOW_BASE_SPEED);
            assert!(particle.velocity < FLOW_BASE_SPEED + FLOW_SPEED_JITTER);
            assert_eq!(transform.translation.x, anchor.x + particle.offset);
        }
    }

    #[test]
    fn one_tick_advances_each_token_by_its_own_velocity() {
        let mut world = spawn_world(Vec3::new(-180.0, 40.0, -75.0), 200.0, 29);

        let entities = world.resource::<FlowRegistry>().particles.clone();
        let before: Vec<f32> = entities
            .iter()
            .map(|&e| world.get::<Transform>(e).unwrap().translation.x)
            .collect();

        world.run_system_once(advance_flow).unwrap();

        for (i, &entity) in entities.iter().enumerate() {
            let particle = *world.get::<FlowParticle>(entity).unwrap();
            let after = world.get::<Transform>(entity).unwrap().translation.x;
            assert!((after - (before[i] + particle.velocity)).abs() < 1e-5);
        }
    }

    #[test]
    fn token_past_its_limit_restarts_at_the_wrap_coordinate() {
        let mut world = World::new();
        world.init_resource::<FlowRegistry>();
        let token = world
            .spawn((
                Transform::from_xyz(120.0, 0.0, 0.0),
                FlowParticle {
                    velocity: 2.0,
                    limit: 100.0,
                    offset: 0.0,
                },
            ))
            .id();
        world.resource_mut::<FlowRegistry>().particles.push(token);

        world.run_system_once(advance_flow).unwrap();
        let x = world.get::<Transform>(token).unwrap().translation.x;
        assert_eq!(x, FLOW_RESTART_X);
    }

    #[test]
    fn wrap_is_idempotent_for_a_token_pushed_back_out_of_range() {
        let mut world = World::new();
        world.init_resource::<FlowRegistry>();
        let token = world
            .spawn((
                Transform::from_xyz(150.0, 0.0, 0.0),
                FlowParticle {
                    velocity: 1.0,
                    limit: 100.0,
                    offset: 0.0,
                },
            ))
            .id();
        world.resource_mut::<FlowRegistry>().particles.push(token);

        world.run_system_once(advance_flow).unwrap();
        assert_eq!(
            world.get::<Transform>(token).unwrap().translation.x,
            FLOW_RESTART_X
        );

        // Force it back past the threshold; the very next tick re-wraps it.
        world.get_mut::<Transform>(token).unwrap().translation.x = 150.0;
        world.run_system_once(advance_flow).unwrap();
        assert_eq!(
            world.get::<Transform>(token).unwrap().translation.x,
            FLOW_RESTART_X
        );
    }

    #[test]
    fn guard_blocks_wrap_for_tokens_on_far_negative_carriers() {
        let mut world = World::new();
        world.init_resource::<FlowRegistry>();
        let carrier = world.spawn(Transform::from_xyz(-300.0, 0.0, 0.0)).id();
        let token = world
            .spawn((
                Transform::from_xyz(-100.0, 0.0, 0.0),
                FlowParticle {
                    velocity: 1.0,
                    limit: 100.0,
                    offset: 0.0,
                },
            ))
            .id();
        world.entity_mut(carrier).add_child(token);
        world.resource_mut::<FlowRegistry>().particles.push(token);

        // -99 exceeds limit + carrier_x (-200) but sits below the -50 guard,
        // so the token keeps drifting instead of wrapping.
        world.run_system_once(advance_flow).unwrap();
        assert_eq!(world.get::<Transform>(token).unwrap().translation.x, -99.0);
    }

    #[test]
    fn orphaned_token_advances_against_a_zero_carrier_offset() {
        let mut world = World::new();
        world.init_resource::<FlowRegistry>();
        let token = world
            .spawn((
                Transform::from_xyz(0.0, 0.0, 0.0),
                FlowParticle {
                    velocity: 3.0,
                    limit: 100.0,
                    offset: 0.0,
                },
            ))
            .id();
        world.resource_mut::<FlowRegistry>().particles.push(token);
        // A registry entry whose entity vanished is skipped, not an error.
        let ghost = world.spawn_empty().id();
        world.despawn(ghost);
        world.resource_mut::<FlowRegistry>().particles.push(ghost);

        world.run_system_once(advance_flow).unwrap();
        assert_eq!(world.get::<Transform>(token).unwrap().translation.x, 3.0);
    }
}
