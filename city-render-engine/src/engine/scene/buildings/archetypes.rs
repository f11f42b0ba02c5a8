//! The blueprint table for every building archetype in the city.

use bevy::prelude::*;
use std::f32::consts::{FRAC_PI_2, FRAC_PI_4};

use super::{Attachment, Blueprint, Part, Shape};
use crate::engine::assets::city_layout::ArchetypeKind;
use crate::engine::assets::material_palette::MaterialKey;

pub fn blueprint_for(kind: ArchetypeKind) -> Blueprint {
    match kind {
        ArchetypeKind::CoreHub => core_hub(),
        ArchetypeKind::StorageCluster => storage_cluster(),
        ArchetypeKind::ProcessingLab => processing_lab(),
        ArchetypeKind::ChannelCubes => channel_cubes(),
        ArchetypeKind::ShopRow => shop_row(),
        ArchetypeKind::NotificationHub => notification_hub(),
        ArchetypeKind::ExchangeHub => exchange_hub(),
    }
}

/// Mascot-shaped head office: podium, extruded slab body with a speech tail,
/// a face built from disks and a ring, and an antenna.
fn core_hub() -> Blueprint {
    let body_y = 80.0;
    let face_z = 32.0;
    let face_disk = Quat::from_rotation_x(FRAC_PI_2);

    Blueprint {
        name: "Platform Core",
        label: "Platform Core",
        label_offset: 180.0,
        parts: vec![
            Part::new(
                Shape::Box {
                    size: Vec3::new(160.0, 20.0, 120.0),
                },
                MaterialKey::Concrete,
                Vec3::new(0.0, 10.0, 0.0),
            ),
            Part::new(
                Shape::Slab {
                    profile: Vec2::new(140.0, 100.0),
                    depth: 60.0,
                },
                MaterialKey::CoreBody,
                Vec3::new(0.0, body_y, 0.0),
            ),
            // Speech-bubble tail hanging off the body's lower left edge.
            Part::new(
                Shape::Wedge {
                    a: Vec2::new(0.0, -50.0),
                    b: Vec2::new(-50.0, -70.0),
                    c: Vec2::new(-50.0, -50.0),
                    depth: 60.0,
                },
                MaterialKey::CoreBody,
                Vec3::new(0.0, body_y, 0.0),
            ),
            Part::new(
                Shape::Cylinder {
                    radius: 15.0,
                    height: 5.0,
                },
                MaterialKey::CoreFace,
                Vec3::new(-30.0, body_y + 10.0, face_z),
            )
            .rotated(face_disk),
            Part::new(
                Shape::Cylinder {
                    radius: 15.0,
                    height: 5.0,
                },
                MaterialKey::CoreFace,
                Vec3::new(30.0, body_y + 10.0, face_z),
            )
            .rotated(face_disk),
            Part::new(
                Shape::Torus {
                    minor: 3.0,
                    major: 21.0,
                },
                MaterialKey::CoreFace,
                Vec3::new(0.0, body_y - 5.0, face_z),
            )
            .rotated(face_disk),
            Part::new(
                Shape::Cylinder {
                    radius: 3.0,
                    height: 30.0,
                },
                MaterialKey::CoreFace,
                Vec3::new(0.0, 145.0, 0.0),
            ),
            Part::new(
                Shape::Sphere { radius: 12.0 },
                MaterialKey::CoreFace,
                Vec3::new(0.0, 168.0, 0.0),
            ),
        ],
        attachments: vec![],
    }
}

/// Five stacked tank disks, each wrapped by a metal ring, on a concrete pad.
fn storage_cluster() -> Blueprint {
    let mut parts = vec![Part::new(
        Shape::Cylinder {
            radius: 60.0,
            height: 10.0,
        },
        MaterialKey::Concrete,
        Vec3::new(0.0, 5.0, 0.0),
    )];

    for tier in 0..5 {
        let y = 20.0 + tier as f32 * 22.0;
        parts.push(Part::new(
            Shape::Cylinder {
                radius: 50.0,
                height: 20.0,
            },
            MaterialKey::StorageTank,
            Vec3::new(0.0, y, 0.0),
        ));
        parts.push(Part::new(
            Shape::Torus {
                minor: 2.0,
                major: 52.0,
            },
            MaterialKey::StorageMetal,
            Vec3::new(0.0, y, 0.0),
        ));
    }

    Blueprint {
        name: "Storage Cluster",
        label: "STORAGE",
        label_offset: 150.0,
        parts,
        attachments: vec![],
    }
}

/// Glass envelope over a rack of floating metal slabs, framed top and
/// bottom in concrete.
fn processing_lab() -> Blueprint {
    let mut parts = Vec::new();

    for tier in 0..5 {
        parts.push(Part::new(
            Shape::Box {
                size: Vec3::new(60.0, 10.0, 60.0),
            },
            MaterialKey::StorageMetal,
            Vec3::new(0.0, 30.0 + tier as f32 * 25.0, 0.0),
        ));
    }

    parts.push(Part::new(
        Shape::Box {
            size: Vec3::new(100.0, 140.0, 100.0),
        },
        MaterialKey::GlassEnvelope,
        Vec3::new(0.0, 80.0, 0.0),
    ));
    parts.push(Part::new(
        Shape::Box {
            size: Vec3::new(104.0, 10.0, 104.0),
        },
        MaterialKey::Concrete,
        Vec3::new(0.0, 5.0, 0.0),
    ));
    parts.push(Part::new(
        Shape::Box {
            size: Vec3::new(104.0, 10.0, 104.0),
        },
        MaterialKey::Concrete,
        Vec3::new(0.0, 155.0, 0.0),
    ));

    Blueprint {
        name: "Processing Lab",
        label: "PROCESSING LAB",
        label_offset: 170.0,
        parts,
        attachments: vec![],
    }
}

/// Three brand cubes (the middle one pushed toward the viewer) with smaller
/// account cubes stacked above each.
fn channel_cubes() -> Blueprint {
    const SIZE: f32 = 50.0;
    const GAP: f32 = 60.0;
    const ACCOUNT: f32 = SIZE * 0.55;

    let cubes = [
        (MaterialKey::ChannelGreen, Vec3::new(-GAP, SIZE / 2.0, 0.0)),
        (
            MaterialKey::ChannelBlue,
            Vec3::new(0.0, SIZE / 2.0, GAP / 2.0),
        ),
        (MaterialKey::ChannelPink, Vec3::new(GAP, SIZE / 2.0, 0.0)),
    ];

    let accounts = [
        (MaterialKey::ChannelGreen, Vec3::new(-GAP, SIZE + 10.0, -15.0)),
        (
            MaterialKey::ChannelGreen,
            Vec3::new(-GAP + 15.0, SIZE + 35.0, 10.0),
        ),
        (
            MaterialKey::ChannelBlue,
            Vec3::new(0.0, SIZE + 10.0, GAP / 2.0 - 15.0),
        ),
        (
            MaterialKey::ChannelBlue,
            Vec3::new(15.0, SIZE + 35.0, GAP / 2.0 + 10.0),
        ),
        (MaterialKey::ChannelPink, Vec3::new(GAP, SIZE + 10.0, -15.0)),
        (
            MaterialKey::ChannelPink,
            Vec3::new(GAP - 15.0, SIZE + 35.0, 10.0),
        ),
    ];

    let mut parts = Vec::new();
    for (material, offset) in cubes {
        parts.push(Part::new(
            Shape::Box {
                size: Vec3::splat(SIZE),
            },
            material,
            offset,
        ));
    }
    for (material, offset) in accounts {
        parts.push(Part::new(
            Shape::Box {
                size: Vec3::splat(ACCOUNT),
            },
            material,
            offset,
        ));
    }

    Blueprint {
        name: "Message Channels",
        label: "Channels",
        label_offset: 100.0,
        parts,
        attachments: vec![],
    }
}

/// Four gabled kiosks on a shared strip. The booking kiosk's front desk and
/// the issues kiosk's gallery are declared attachments, not special cases.
fn shop_row() -> Blueprint {
    const WIDTH: f32 = 60.0;
    const HEIGHT: f32 = 40.0;
    const DEPTH: f32 = 60.0;
    const SPACING: f32 = 70.0;

    let mut parts = Vec::new();
    for stall in 0..4 {
        let x = (stall as f32 - 1.5) * SPACING;
        let roof = if stall % 2 == 0 {
            MaterialKey::ShopRoofWarm
        } else {
            MaterialKey::ShopRoofCool
        };
        parts.push(Part::new(
            Shape::Box {
                size: Vec3::new(WIDTH, HEIGHT, DEPTH),
            },
            MaterialKey::ShopBody,
            Vec3::new(x, HEIGHT / 2.0, 0.0),
        ));
        parts.push(
            Part::new(
                Shape::Cone {
                    radius: WIDTH * 0.8,
                    height: 30.0,
                    sides: 4,
                },
                roof,
                Vec3::new(x, HEIGHT + 15.0, 0.0),
            )
            .rotated(Quat::from_rotation_y(FRAC_PI_4)),
        );
    }

    let booking_x = -1.5 * SPACING;
    let issues_x = -0.5 * SPACING;

    Blueprint {
        name: "Shop Row",
        label: "Shop Row",
        label_offset: 100.0,
        parts,
        attachments: vec![
            Attachment {
                name: "booking-front",
                parts: vec![
                    Part::new(
                        Shape::Box {
                            size: Vec3::new(WIDTH * 1.3, 6.0, DEPTH * 0.6),
                        },
                        MaterialKey::ShopRoofCool,
                        Vec3::new(booking_x, HEIGHT + 8.0, DEPTH * 0.2),
                    ),
                    Part::new(
                        Shape::Box {
                            size: Vec3::new(WIDTH * 1.1, 26.0, 4.0),
                        },
                        MaterialKey::ScreenCool,
                        Vec3::new(booking_x, HEIGHT + 28.0, DEPTH * 0.35),
                    ),
                    Part::new(
                        Shape::Cylinder {
                            radius: 6.0,
                            height: 18.0,
                        },
                        MaterialKey::ExchangeMetal,
                        Vec3::new(booking_x - WIDTH * 0.35, 9.0, DEPTH * 0.4),
                    ),
                    Part::new(
                        Shape::Torus {
                            minor: 1.5,
                            major: 7.0,
                        },
                        MaterialKey::ScreenCool,
                        Vec3::new(booking_x - WIDTH * 0.35, 20.0, DEPTH * 0.4),
                    ),
                ],
            },
            Attachment {
                name: "issues-gallery",
                parts: vec![
                    Part::new(
                        Shape::Box {
                            size: Vec3::new(WIDTH * 0.9, 22.0, 4.0),
                        },
                        MaterialKey::ScreenWarm,
                        Vec3::new(issues_x, HEIGHT * 0.65, DEPTH * 0.4),
                    ),
                    Part::new(
                        Shape::Box {
                            size: Vec3::new(WIDTH * 0.95, 4.0, 6.0),
                        },
                        MaterialKey::ExchangeMetal,
                        Vec3::new(issues_x, HEIGHT * 0.55, DEPTH * 0.4),
                    ),
                ],
            },
        ],
    }
}

/// Broadcast tower over a pad of toggle lamps, crowned by an amber ring.
fn notification_hub() -> Blueprint {
    let mut parts = vec![
        Part::new(
            Shape::Frustum {
                top: 55.0,
                bottom: 65.0,
                height: 16.0,
            },
            MaterialKey::Concrete,
            Vec3::new(0.0, 8.0, 0.0),
        ),
        Part::new(
            Shape::Frustum {
                top: 18.0,
                bottom: 26.0,
                height: 70.0,
            },
            MaterialKey::ExchangeMetal,
            Vec3::new(0.0, 51.0, 0.0),
        ),
        Part::new(
            Shape::Torus {
                minor: 3.0,
                major: 26.0,
            },
            MaterialKey::ScreenWarm,
            Vec3::new(0.0, 78.0, 0.0),
        ),
    ];

    let toggles = [
        (-25.0, -20.0),
        (-5.0, -20.0),
        (15.0, -20.0),
        (-15.0, 0.0),
        (5.0, 0.0),
        (25.0, 0.0),
        (-20.0, 20.0),
        (0.0, 20.0),
        (20.0, 20.0),
    ];
    for (x, z) in toggles {
        parts.push(Part::new(
            Shape::Cylinder {
                radius: 3.0,
                height: 20.0,
            },
            MaterialKey::ExchangeMetal,
            Vec3::new(x, 18.0, z),
        ));
        parts.push(Part::new(
            Shape::Sphere { radius: 4.0 },
            MaterialKey::ScreenWarm,
            Vec3::new(x, 30.0, z),
        ));
    }

    Blueprint {
        name: "Notification Hub",
        label: "Notifications",
        label_offset: 120.0,
        parts,
        attachments: vec![],
    }
}

/// Central sync hub flanked by three gateway towers, each with a beacon in
/// its partner connector color.
fn exchange_hub() -> Blueprint {
    let mut parts = vec![
        Part::new(
            Shape::Box {
                size: Vec3::new(140.0, 16.0, 90.0),
            },
            MaterialKey::Concrete,
            Vec3::new(0.0, 8.0, 0.0),
        ),
        Part::new(
            Shape::Cylinder {
                radius: 24.0,
                height: 46.0,
            },
            MaterialKey::ExchangeMetal,
            Vec3::new(0.0, 39.0, 0.0),
        ),
        Part::new(
            Shape::Cylinder {
                radius: 18.0,
                height: 10.0,
            },
            MaterialKey::ScreenCool,
            Vec3::new(0.0, 62.0, 0.0),
        ),
        Part::new(
            Shape::Box {
                size: Vec3::new(160.0, 6.0, 12.0),
            },
            MaterialKey::ConnectorSecondary,
            Vec3::new(-80.0, 14.0, 40.0),
        ),
    ];

    let gateways = [
        (Vec3::new(-45.0, 20.0, -25.0), MaterialKey::ConnectorPrimary),
        (Vec3::new(45.0, 20.0, -25.0), MaterialKey::ConnectorSecondary),
        (Vec3::new(0.0, 20.0, 30.0), MaterialKey::ConnectorAlert),
    ];
    for (pos, beacon) in gateways {
        parts.push(Part::new(
            Shape::Frustum {
                top: 10.0,
                bottom: 12.0,
                height: 40.0,
            },
            MaterialKey::ExchangeMetal,
            pos,
        ));
        parts.push(Part::new(
            Shape::Sphere { radius: 8.0 },
            beacon,
            pos + Vec3::Y * 26.0,
        ));
    }

    Blueprint {
        name: "Integration Exchange",
        label: "Exchange",
        label_offset: 120.0,
        parts,
        attachments: vec![],
    }
}
