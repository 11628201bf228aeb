//! Build a plugin settings schema and exercise the event bridge.
//!
//! Run with: cargo run --example settings_schema

use markforge_plugin_api::{EventBridge, SettingsBuilder, TextOptions};
use markforge_sdk_core::{AppEvent, AppSettings, DropdownOption, EventKind};

fn main() {
    // A two-group schema the host would render as the plugin's options page.
    let config = SettingsBuilder::new()
        .add_group("general", "General")
        .add_boolean("vim", "Vim Mode", false)
        .add_text(
            "author",
            "Author Name",
            "",
            TextOptions {
                placeholder: Some("Shown in exported documents".to_string()),
                ..Default::default()
            },
        )
        .add_group("rendering", "Rendering")
        .collapsible()
        .add_dropdown(
            "engine",
            "Render Engine",
            "native",
            vec![
                DropdownOption::new("native", "Native"),
                DropdownOption::new("web", "Web view"),
            ],
        )
        .add_slider("zoom", "Zoom", 1.0, 0.5, 3.0, Default::default())
        .build();

    println!("{}", serde_json::to_string_pretty(&config).unwrap());

    // The bridge delivers per kind, in registration order, and isolates a
    // failing handler from the rest of the fan-out.
    let bridge = EventBridge::new();

    bridge.subscribe(EventKind::SettingsChange, |event| {
        if let AppEvent::SettingsChange { settings } = event {
            println!("settings changed: vim_mode = {}", settings.vim_mode);
        }
        Ok(())
    });
    bridge.subscribe(EventKind::SettingsChange, |_| {
        anyhow::bail!("this handler always fails, the next one still runs")
    });
    let early = bridge.subscribe(EventKind::SettingsChange, |_| {
        println!("second handler still delivered");
        Ok(())
    });

    bridge.publish(&AppEvent::SettingsChange {
        settings: AppSettings {
            vim_mode: true,
            ..Default::default()
        },
    });

    // Disposers are idempotent; disposing twice is fine.
    early.dispose();
    early.dispose();
}
