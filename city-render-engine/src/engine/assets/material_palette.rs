use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Semantic material slots referenced by blueprints and the layout manifest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MaterialKey {
    Grass,
    Water,
    CoreBody,
    CoreFace,
    StorageTank,
    StorageMetal,
    GlassEnvelope,
    Concrete,
    ShopBody,
    ShopRoofWarm,
    ShopRoofCool,
    ScreenCool,
    ScreenWarm,
    ExchangeMetal,
    ChannelGreen,
    ChannelBlue,
    ChannelPink,
    ConnectorPrimary,
    ConnectorSecondary,
    ConnectorAlert,
    PathSand,
    Bark,
    Canopy,
    Cloud,
    FlowToken,
}

/// One handle per semantic slot, allocated once at build time and shared by
/// clone everywhere. Nothing mutates a handle's material after this.
#[derive(Resource, Clone)]
pub struct MaterialPalette {
    pub grass: Handle<StandardMaterial>,
    pub water: Handle<StandardMaterial>,
    pub core_body: Handle<StandardMaterial>,
    pub core_face: Handle<StandardMaterial>,
    pub storage_tank: Handle<StandardMaterial>,
    pub storage_metal: Handle<StandardMaterial>,
    pub glass_envelope: Handle<StandardMaterial>,
    pub concrete: Handle<StandardMaterial>,
    pub shop_body: Handle<StandardMaterial>,
    pub shop_roof_warm: Handle<StandardMaterial>,
    pub shop_roof_cool: Handle<StandardMaterial>,
    pub screen_cool: Handle<StandardMaterial>,
    pub screen_warm: Handle<StandardMaterial>,
    pub exchange_metal: Handle<StandardMaterial>,
    pub channel_green: Handle<StandardMaterial>,
    pub channel_blue: Handle<StandardMaterial>,
    pub channel_pink: Handle<StandardMaterial>,
    pub connector_primary: Handle<StandardMaterial>,
    pub connector_secondary: Handle<StandardMaterial>,
    pub connector_alert: Handle<StandardMaterial>,
    pub path_sand: Handle<StandardMaterial>,
    pub bark: Handle<StandardMaterial>,
    pub canopy: Handle<StandardMaterial>,
    pub cloud: Handle<StandardMaterial>,
    pub flow_token: Handle<StandardMaterial>,
}

impl MaterialPalette {
    pub fn handle(&self, key: MaterialKey) -> Handle<StandardMaterial> {
        match key {
            MaterialKey::Grass => self.grass.clone(),
            MaterialKey::Water => self.water.clone(),
            MaterialKey::CoreBody => self.core_body.clone(),
            MaterialKey::CoreFace => self.core_face.clone(),
            MaterialKey::StorageTank => self.storage_tank.clone(),
            MaterialKey::StorageMetal => self.storage_metal.clone(),
            MaterialKey::GlassEnvelope => self.glass_envelope.clone(),
            MaterialKey::Concrete => self.concrete.clone(),
            MaterialKey::ShopBody => self.shop_body.clone(),
            MaterialKey::ShopRoofWarm => self.shop_roof_warm.clone(),
            MaterialKey::ShopRoofCool => self.shop_roof_cool.clone(),
            MaterialKey::ScreenCool => self.screen_cool.clone(),
            MaterialKey::ScreenWarm => self.screen_warm.clone(),
            MaterialKey::ExchangeMetal => self.exchange_metal.clone(),
            MaterialKey::ChannelGreen => self.channel_green.clone(),
            MaterialKey::ChannelBlue => self.channel_blue.clone(),
            MaterialKey::ChannelPink => self.channel_pink.clone(),
            MaterialKey::ConnectorPrimary => self.connector_primary.clone(),
            MaterialKey::ConnectorSecondary => self.connector_secondary.clone(),
            MaterialKey::ConnectorAlert => self.connector_alert.clone(),
            MaterialKey::PathSand => self.path_sand.clone(),
            MaterialKey::Bark => self.bark.clone(),
            MaterialKey::Canopy => self.canopy.clone(),
            MaterialKey::Cloud => self.cloud.clone(),
            MaterialKey::FlowToken => self.flow_token.clone(),
        }
    }
}

fn matte(base: Color, roughness: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: base,
        perceptual_roughness: roughness,
        ..default()
    }
}

fn metal(base: Color, metallic: f32, roughness: f32) -> StandardMaterial {
    StandardMaterial {
        base_color: base,
        metallic,
        perceptual_roughness: roughness,
        ..default()
    }
}

fn neon(base: Color, glow: Color) -> StandardMaterial {
    StandardMaterial {
        base_color: base,
        emissive: glow.to_linear() * 0.4,
        ..default()
    }
}

/// Build the full palette into the material store. Called exactly once per
/// scene build.
pub fn create_material_palette(materials: &mut Assets<StandardMaterial>) -> MaterialPalette {
    MaterialPalette {
        grass: materials.add(matte(Color::srgb_u8(0x6c, 0xcf, 0x59), 0.8)),
        water: materials.add(metal(Color::srgb_u8(0x2f, 0xaa, 0xf0), 0.1, 0.2)),
        core_body: materials.add(matte(Color::srgb_u8(0x4d, 0xb8, 0xaa), 0.3)),
        core_face: materials.add(matte(Color::WHITE, 0.2)),
        storage_tank: materials.add(matte(Color::srgb_u8(0x76, 0xd6, 0x72), 0.4)),
        storage_metal: materials.add(metal(Color::srgb_u8(0xaa, 0xcc, 0xdd), 0.7, 0.2)),
        glass_envelope: materials.add(StandardMaterial {
            base_color: Color::srgba_u8(0xaa, 0xdd, 0xff, 0x59),
            metallic: 0.1,
            perceptual_roughness: 0.05,
            alpha_mode: AlphaMode::Blend,
            ..default()
        }),
        concrete: materials.add(matte(Color::srgb_u8(0xee, 0xee, 0xee), 0.5)),
        shop_body: materials.add(matte(Color::srgb_u8(0xff, 0xf5, 0xe0), 0.5)),
        shop_roof_warm: materials.add(matte(Color::srgb_u8(0xff, 0x99, 0x33), 0.5)),
        shop_roof_cool: materials.add(matte(Color::srgb_u8(0x33, 0x99, 0xff), 0.5)),
        screen_cool: materials.add(neon(
            Color::srgb_u8(0x3f, 0xb6, 0xff),
            Color::srgb_u8(0x2a, 0x7f, 0xcc),
        )),
        screen_warm: materials.add(neon(
            Color::srgb_u8(0xff, 0xb3, 0x47),
            Color::srgb_u8(0xcc, 0x8a, 0x22),
        )),
        exchange_metal: materials.add(metal(Color::srgb_u8(0xb8, 0xc4, 0xcc), 0.6, 0.3)),
        channel_green: materials.add(matte(Color::srgb_u8(0x06, 0xc7, 0x55), 0.5)),
        channel_blue: materials.add(matte(Color::srgb_u8(0x18, 0x77, 0xf2), 0.5)),
        channel_pink: materials.add(matte(Color::srgb_u8(0xe1, 0x30, 0x6c), 0.5)),
        connector_primary: materials.add(neon(
            Color::srgb_u8(0xff, 0xcc, 0x00),
            Color::srgb_u8(0xff, 0xaa, 0x00),
        )),
        connector_secondary: materials.add(neon(
            Color::srgb_u8(0x33, 0x88, 0xff),
            Color::srgb_u8(0x22, 0x66, 0xcc),
        )),
        connector_alert: materials.add(neon(
            Color::srgb_u8(0xff, 0x33, 0x33),
            Color::srgb_u8(0xcc, 0x22, 0x22),
        )),
        path_sand: materials.add(matte(Color::srgb_u8(0xf2, 0xd2, 0xa9), 1.0)),
        bark: materials.add(matte(Color::srgb_u8(0x8b, 0x5a, 0x2b), 1.0)),
        canopy: materials.add(matte(Color::srgb_u8(0x6c, 0xcf, 0x59), 0.9)),
        cloud: materials.add(StandardMaterial {
            base_color: Color::srgba(1.0, 1.0, 1.0, 0.9),
            alpha_mode: AlphaMode::Blend,
            ..default()
        }),
        flow_token: materials.add(StandardMaterial {
            base_color: Color::WHITE,
            unlit: true,
            ..default()
        }),
    }
}
