//! Scene orchestration: one synchronous build pass populates the world in a
//! fixed order, then two per-frame systems keep the animated entities
//! moving. The build step owns every registry the frame tick reads.

pub mod buildings;
pub mod environment;
pub mod flow;
pub mod ground;
pub mod paths;
pub mod pipes;

use bevy::prelude::*;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::engine::assets::city_layout::CityLayout;
use crate::engine::assets::material_palette::create_material_palette;
use self::buildings::archetypes::blueprint_for;
use self::flow::{FlowRegistry, advance_flow, spawn_flow_particles};

/// Seedable generator threaded through every randomized spawner, so a fixed
/// layout seed reproduces the scene exactly.
#[derive(Resource)]
pub struct SceneRng(pub StdRng);

/// Entities with a registered drift animation, advanced by elapsed time
/// (unlike flow tokens, which move per tick).
#[derive(Resource, Default)]
pub struct MixerRegistry {
    pub mixers: Vec<Entity>,
}

#[derive(Component, Debug, Clone, Copy)]
pub struct DriftMixer {
    pub elapsed: f32,
    pub amplitude: f32,
    pub rate: f32,
    pub base_y: f32,
}

pub struct CityScenePlugin;

impl Plugin for CityScenePlugin {
    fn build(&self, app: &mut App) {
        let layout = CityLayout::load();
        app.insert_resource(SceneRng(StdRng::seed_from_u64(layout.seed)))
            .insert_resource(layout)
            .init_resource::<FlowRegistry>()
            .init_resource::<MixerRegistry>()
            .add_systems(Startup, build_city)
            .add_systems(Update, (advance_flow, advance_mixers));
    }
}

/// Assemble the whole city once: ground, environment, buildings, the
/// event-bus network with its flow tokens, then paths.
pub fn build_city(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
    layout: Res<CityLayout>,
    mut rng: ResMut<SceneRng>,
    mut flow_registry: ResMut<FlowRegistry>,
    mut mixer_registry: ResMut<MixerRegistry>,
) {
    let palette = create_material_palette(&mut materials);

    ground::spawn_ground(&mut commands, &mut meshes, &palette);
    environment::spawn_environment(
        &mut commands,
        &mut meshes,
        &palette,
        &mut rng.0,
        &mut mixer_registry,
        &layout,
    );

    for site in &layout.buildings {
        let blueprint = blueprint_for(site.archetype);
        buildings::assemble(
            &mut commands,
            &mut meshes,
            &palette,
            &blueprint,
            Vec3::from_array(site.anchor),
        );
    }

    pipes::spawn_event_bus(&mut commands, &mut meshes, &palette, &layout.bus);
    for run in &layout.bus.runs {
        let start = Vec3::from_array(run.start);
        let end = Vec3::from_array(run.end);
        spawn_flow_particles(
            &mut commands,
            &mut meshes,
            &palette,
            &mut flow_registry,
            &mut rng.0,
            start.midpoint(end),
            start.distance(end),
        );
    }

    paths::spawn_paths(&mut commands, &mut meshes, &palette, &layout.paths);

    commands.insert_resource(palette);

    println!(
        "City assembled: {} building sites, {} bus runs, {} flow tokens",
        layout.buildings.len(),
        layout.bus.runs.len(),
        flow_registry.particles.len()
    );
}

/// Advance every registered mixer by elapsed seconds. Entities that left the
/// world are skipped.
pub fn advance_mixers(
    time: Res<Time>,
    registry: Res<MixerRegistry>,
    mut mixers: Query<(&mut Transform, &mut DriftMixer)>,
) {
    let delta = time.delta_secs();
    for &entity in &registry.mixers {
        let Ok((mut transform, mut mixer)) = mixers.get_mut(entity) else {
            continue;
        };
        mixer.elapsed += delta;
        transform.translation.y = mixer.base_y + (mixer.elapsed * mixer.rate).sin() * mixer.amplitude;
    }
}

#[cfg(test)]
mod tests {
    use super::buildings::Building;
    use super::environment::Tree;
    use super::*;
    use constants::flow_settings::FLOW_BATCH_SIZE;

    fn headless_city() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(Assets::<Mesh>::default());
        app.insert_resource(Assets::<StandardMaterial>::default());
        app.add_plugins(CityScenePlugin);
        app.update();
        app
    }

    fn tree_positions(app: &mut App) -> Vec<[f32; 3]> {
        let world = app.world_mut();
        let mut trees = world.query_filtered::<&Transform, With<Tree>>();
        let mut positions: Vec<[f32; 3]> = trees
            .iter(world)
            .map(|t| t.translation.to_array())
            .collect();
        positions.sort_by(|a, b| a.partial_cmp(b).unwrap());
        positions
    }

    #[test]
    fn build_populates_every_registry_and_site() {
        let mut app = headless_city();
        let world = app.world_mut();

        let layout = world.resource::<CityLayout>().clone();
        let mut buildings = world.query::<&Building>();
        assert_eq!(buildings.iter(world).count(), layout.buildings.len());

        let tokens = world.resource::<FlowRegistry>().particles.len();
        assert_eq!(tokens, layout.bus.runs.len() * FLOW_BATCH_SIZE);

        let mixers = world.resource::<MixerRegistry>().mixers.len();
        assert_eq!(mixers, layout.clouds.len());
    }

    #[test]
    fn a_thousand_ticks_never_grow_or_shrink_the_token_ledger() {
        let mut app = headless_city();
        let before = app
            .world()
            .resource::<FlowRegistry>()
            .particles
            .clone();
        for _ in 0..1000 {
            app.update();
        }
        let after = &app.world().resource::<FlowRegistry>().particles;
        assert_eq!(&before, after);
    }

    #[test]
    fn same_seed_grows_the_same_forest() {
        let mut first = headless_city();
        let mut second = headless_city();
        let first_trees = tree_positions(&mut first);
        let second_trees = tree_positions(&mut second);
        assert!(!first_trees.is_empty());
        assert_eq!(first_trees, second_trees);
    }

    #[test]
    fn tokens_stay_inside_the_loop_range_over_many_ticks() {
        let mut app = headless_city();
        for _ in 0..1000 {
            app.update();
        }
        let world = app.world_mut();
        let mut tokens = world.query::<(&flow::FlowParticle, &Transform)>();
        for (particle, transform) in tokens.iter(world) {
            // Once past its limit a token is always sent back to the restart
            // coordinate, so it can never run further than one tick beyond.
            assert!(
                transform.translation.x <= particle.limit + particle.velocity,
                "token escaped at {}",
                transform.translation.x
            );
        }
    }
}
