use bevy::diagnostic::{DiagnosticsStore, FrameTimeDiagnosticsPlugin};
use bevy::prelude::*;

use crate::engine::scene::buildings::Building;
use crate::engine::scene::flow::FlowRegistry;

#[derive(Component)]
pub struct HudText;

/// Census line in the corner: frame rate plus how much city is live.
pub fn hud_update_system(
    diagnostics: Res<DiagnosticsStore>,
    buildings: Query<&Building>,
    registry: Res<FlowRegistry>,
    mut query: Query<&mut Text, With<HudText>>,
) {
    for mut text in &mut query {
        let fps = diagnostics
            .get(&FrameTimeDiagnosticsPlugin::FPS)
            .and_then(|fps| fps.smoothed())
            .unwrap_or(0.0);
        text.0 = format!(
            "FPS: {fps:.1} | buildings: {} | tokens: {}",
            buildings.iter().count(),
            registry.particles.len()
        );
    }
}
