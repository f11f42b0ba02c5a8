pub mod flow_settings;
pub mod scene_settings;
