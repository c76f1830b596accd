use anyhow::{anyhow, Context};
use bevy::log::{Level, LogPlugin};
use bevy::prelude::*;
use clap::Parser;

use chess3d::app::build_app;
use chess3d::core::{CorePlugin, LaunchOptions, SettingsStore, WindowConfig};

fn main() -> anyhow::Result<()> {
    let options = LaunchOptions::parse();

    // Read before the app exists: the log filter is needed to build LogPlugin
    let store = SettingsStore::load();
    let mut settings = store.on_disk.clone();
    options.apply_to(&mut settings);

    let window = WindowConfig::default();
    let primary_window = window.to_window();
    let log_filter = settings.log_filter.clone();

    let platform = DefaultPlugins
        .set(WindowPlugin {
            primary_window: Some(primary_window),
            ..default()
        })
        .set(LogPlugin {
            level: Level::INFO,
            filter: log_filter,
            ..default()
        });
    let core = CorePlugin {
        settings,
        store,
        window,
    };

    let exit = build_app(platform, core).run();

    match exit {
        AppExit::Success => Ok(()),
        AppExit::Error(code) => Err(anyhow!("exited with code {code}"))
            .context("chess3d did not shut down cleanly"),
    }
}
