mod application;
mod constants;
mod controllers;
mod menu_filter;
mod models;
mod ordered_map;
mod ordering;
mod populator;
mod prelude;
mod recommendations;
mod repository;
mod review_stats;
mod ui;
mod widgets;

fn main() -> anyhow::Result<()> {
    application::Application::new().activate()
}
