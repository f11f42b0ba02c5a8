pub mod app_setup;
