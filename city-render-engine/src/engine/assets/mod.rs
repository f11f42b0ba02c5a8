/// City layout manifest: seed, building sites, bus runs, scenery placement.
pub mod city_layout;

/// Shared material palette handed to every generator by reference.
pub mod material_palette;
