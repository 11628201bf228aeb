//! Integration tests for markforge-plugin-api.
//!
//! These tests cover:
//! - Registration through the plugin context and disposer-driven teardown
//! - Reverse-order, idempotent unload
//! - Event delivery through the host's bridge
//! - Settings load/save/merge semantics
//! - Full registry lifecycle: load, disable, enable, unload

use async_trait::async_trait;
use markforge_plugin_api::{
    EditorApi, EditorExtension, EventBridge, EventHandler, HostApi, NotificationKind,
    OpenDialogOptions, Plugin, PluginContext, PluginManifest, PluginRegistry, SaveDialogOptions,
    SubscriptionId,
};
use markforge_sdk_core::{
    AppEvent, AppState, Command, Disposer, EventKind, FileInfo, KeyboardShortcut, MarkdownOptions,
    MenuItem, MenuLocation, PluginSettings, PluginSettingsConfig, SdkError, SdkResult,
    StatusBarItem,
};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

// ==============================================================================
// Test Fixture Helpers
// ==============================================================================

fn test_manifest(id: &str) -> PluginManifest {
    PluginManifest::from_toml(&format!(
        r#"
[plugin]
id = "{id}"
name = "Test Plugin {id}"
version = "0.1.0"
author = "tester"
"#
    ))
    .unwrap()
}

fn test_file() -> FileInfo {
    FileInfo {
        path: PathBuf::from("/workspace/notes.md"),
        name: "notes.md".to_string(),
        extension: "md".to_string(),
        size: 7,
        modified: chrono::Utc::now(),
        content: "# Notes".to_string(),
    }
}

/// A host that records every registration and deregistration it sees.
///
/// Log entries look like `add:command:<id>` / `remove:command:<id>`, so
/// tests can assert both counts and ordering.
struct RecordingHost {
    bridge: EventBridge,
    log: Arc<Mutex<Vec<String>>>,
    commands: Mutex<HashMap<String, Command>>,
    stored_settings: Mutex<HashMap<String, PluginSettings>>,
    files: Mutex<HashMap<PathBuf, String>>,
    clipboard: Mutex<String>,
    fail_settings: AtomicBool,
}

impl RecordingHost {
    fn new() -> Arc<Self> {
        Arc::new(Self {
            bridge: EventBridge::new(),
            log: Arc::new(Mutex::new(Vec::new())),
            commands: Mutex::new(HashMap::new()),
            stored_settings: Mutex::new(HashMap::new()),
            files: Mutex::new(HashMap::new()),
            clipboard: Mutex::new(String::new()),
            fail_settings: AtomicBool::new(false),
        })
    }

    fn record(&self, entry: impl Into<String>) {
        self.log.lock().unwrap().push(entry.into());
    }

    fn log_entries(&self) -> Vec<String> {
        self.log.lock().unwrap().clone()
    }

    fn removals(&self) -> Vec<String> {
        self.log_entries()
            .into_iter()
            .filter(|entry| entry.starts_with("remove:"))
            .collect()
    }

    fn count(&self, entry: &str) -> usize {
        self.log_entries().iter().filter(|e| *e == entry).count()
    }

    /// Build a disposer that logs `remove:<category>:<id>` once.
    fn removal_disposer(&self, category: &str, id: &str) -> Disposer {
        let log = Arc::clone(&self.log);
        let entry = format!("remove:{category}:{id}");
        Disposer::new(move || log.lock().unwrap().push(entry))
    }
}

#[async_trait]
impl HostApi for RecordingHost {
    fn state(&self) -> AppState {
        AppState::default()
    }

    fn active_file(&self) -> Option<FileInfo> {
        None
    }

    fn on(&self, kind: EventKind, handler: EventHandler) -> Disposer {
        self.record(format!("add:event:{kind}"));
        let (_, subscription) = self.bridge.subscribe_handler(kind, handler);
        let log = Arc::clone(&self.log);
        Disposer::new(move || {
            subscription.dispose();
            log.lock().unwrap().push(format!("remove:event:{kind}"));
        })
    }

    fn off(&self, kind: EventKind, subscription: SubscriptionId) {
        self.bridge.unsubscribe(kind, subscription);
    }

    fn emit(&self, event: &AppEvent) {
        self.bridge.publish(event);
    }

    fn add_command(&self, command: Command) -> Disposer {
        self.record(format!("add:command:{}", command.id));
        let id = command.id.clone();
        self.commands.lock().unwrap().insert(id.clone(), command);
        self.removal_disposer("command", &id)
    }

    fn remove_command(&self, command_id: &str) {
        self.commands.lock().unwrap().remove(command_id);
        self.record(format!("remove:command:{command_id}"));
    }

    async fn execute_command(&self, command_id: &str) -> SdkResult<()> {
        let command = self.commands.lock().unwrap().get(command_id).cloned();
        match command {
            Some(command) => (command.action)().map_err(|e| SdkError::Handler(e.to_string())),
            None => Err(SdkError::Host(format!("Unknown command: {command_id}"))),
        }
    }

    fn add_keyboard_shortcut(&self, shortcut: KeyboardShortcut) -> Disposer {
        self.record(format!("add:shortcut:{}", shortcut.id));
        self.removal_disposer("shortcut", &shortcut.id)
    }

    fn remove_keyboard_shortcut(&self, shortcut_id: &str) {
        self.record(format!("remove:shortcut:{shortcut_id}"));
    }

    fn add_menu_item(&self, _location: MenuLocation, item: MenuItem) -> Disposer {
        self.record(format!("add:menu:{}", item.id));
        self.removal_disposer("menu", &item.id)
    }

    fn remove_menu_item(&self, item_id: &str) {
        self.record(format!("remove:menu:{item_id}"));
    }

    fn add_status_bar_item(&self, item: StatusBarItem) -> Disposer {
        self.record(format!("add:status:{}", item.id));
        self.removal_disposer("status", &item.id)
    }

    fn remove_status_bar_item(&self, item_id: &str) {
        self.record(format!("remove:status:{item_id}"));
    }

    fn add_editor_extension(&self, extension: Arc<dyn EditorExtension>) -> Disposer {
        self.record(format!("add:extension:{}", extension.id()));
        let removal = self.removal_disposer("extension", extension.id());
        Disposer::new(move || {
            extension.deactivate();
            removal.dispose();
        })
    }

    fn remove_editor_extension(&self, extension_id: &str) {
        self.record(format!("remove:extension:{extension_id}"));
    }

    fn register_settings(&self, plugin_id: &str, _config: PluginSettingsConfig) -> Disposer {
        self.record(format!("add:settings-schema:{plugin_id}"));
        self.removal_disposer("settings-schema", plugin_id)
    }

    async fn load_settings(&self, plugin_id: &str) -> SdkResult<PluginSettings> {
        if self.fail_settings.load(Ordering::SeqCst) {
            return Err(SdkError::Host("Settings store unavailable".to_string()));
        }
        Ok(self
            .stored_settings
            .lock()
            .unwrap()
            .get(plugin_id)
            .cloned()
            .unwrap_or_default())
    }

    async fn save_settings(&self, plugin_id: &str, settings: &PluginSettings) -> SdkResult<()> {
        if self.fail_settings.load(Ordering::SeqCst) {
            return Err(SdkError::Host("Settings store unavailable".to_string()));
        }
        self.stored_settings
            .lock()
            .unwrap()
            .insert(plugin_id.to_string(), settings.clone());
        Ok(())
    }

    async fn read_file(&self, path: &Path) -> SdkResult<String> {
        self.files
            .lock()
            .unwrap()
            .get(path)
            .cloned()
            .ok_or_else(|| SdkError::Host(format!("No such file: {}", path.display())))
    }

    async fn write_file(&self, path: &Path, content: &str) -> SdkResult<()> {
        self.files
            .lock()
            .unwrap()
            .insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    async fn create_file(&self, path: &Path, content: Option<&str>) -> SdkResult<()> {
        self.write_file(path, content.unwrap_or_default()).await
    }

    async fn delete_file(&self, path: &Path) -> SdkResult<()> {
        self.files.lock().unwrap().remove(path);
        Ok(())
    }

    async fn markdown_to_html(
        &self,
        markdown: &str,
        _options: MarkdownOptions,
    ) -> SdkResult<String> {
        Ok(format!("<p>{markdown}</p>"))
    }

    async fn html_to_markdown(&self, html: &str) -> SdkResult<String> {
        Ok(html.replace("<p>", "").replace("</p>", ""))
    }

    fn show_notification(&self, message: &str, _kind: NotificationKind) {
        self.record(format!("notify:{message}"));
    }

    fn show_toast(&self, message: &str, _duration: Option<Duration>) {
        self.record(format!("toast:{message}"));
    }

    async fn show_confirm(&self, _title: &str, _message: &str) -> SdkResult<bool> {
        Ok(true)
    }

    async fn show_prompt(
        &self,
        _title: &str,
        _message: &str,
        default_value: Option<&str>,
    ) -> SdkResult<Option<String>> {
        Ok(default_value.map(str::to_string))
    }

    async fn open_external(&self, url: &str) -> SdkResult<()> {
        self.record(format!("open:{url}"));
        Ok(())
    }

    async fn copy_to_clipboard(&self, text: &str) -> SdkResult<()> {
        *self.clipboard.lock().unwrap() = text.to_string();
        Ok(())
    }

    async fn read_from_clipboard(&self) -> SdkResult<String> {
        Ok(self.clipboard.lock().unwrap().clone())
    }

    async fn open_file_dialog(
        &self,
        _options: OpenDialogOptions,
    ) -> SdkResult<Option<Vec<PathBuf>>> {
        Ok(None)
    }

    async fn save_file_dialog(&self, _options: SaveDialogOptions) -> SdkResult<Option<PathBuf>> {
        Ok(None)
    }
}

/// A plugin that registers one of everything the word-count feature needs
/// and records which lifecycle hooks ran.
struct WordCountPlugin {
    manifest: PluginManifest,
    hooks: Arc<Mutex<Vec<&'static str>>>,
    seen_changes: Arc<Mutex<Vec<String>>>,
    fail_load: bool,
}

impl WordCountPlugin {
    fn new(id: &str) -> Self {
        Self {
            manifest: test_manifest(id),
            hooks: Arc::new(Mutex::new(Vec::new())),
            seen_changes: Arc::new(Mutex::new(Vec::new())),
            fail_load: false,
        }
    }

    fn hooks(&self) -> Arc<Mutex<Vec<&'static str>>> {
        Arc::clone(&self.hooks)
    }
}

#[async_trait]
impl Plugin for WordCountPlugin {
    fn manifest(&self) -> &PluginManifest {
        &self.manifest
    }

    async fn on_load(&mut self, ctx: &mut PluginContext) -> SdkResult<()> {
        self.hooks.lock().unwrap().push("on_load");

        ctx.add_command(Command::new("word-count.refresh", "Refresh Word Count", || {
            Ok(())
        }))?;
        ctx.add_status_bar_item(StatusBarItem::new("word-count.status", "0 words"))?;

        let seen = Arc::clone(&self.seen_changes);
        ctx.add_event_listener(EventKind::FileChange, move |event| {
            if let AppEvent::FileChange { content, .. } = event {
                seen.lock().unwrap().push(content.clone());
            }
            Ok(())
        })?;

        if self.fail_load {
            return Err(SdkError::Host("Load failed".to_string()));
        }
        Ok(())
    }

    async fn on_unload(&mut self, _ctx: &mut PluginContext) -> SdkResult<()> {
        self.hooks.lock().unwrap().push("on_unload");
        Ok(())
    }

    async fn on_enable(&mut self) -> SdkResult<()> {
        self.hooks.lock().unwrap().push("on_enable");
        Ok(())
    }

    async fn on_disable(&mut self) -> SdkResult<()> {
        self.hooks.lock().unwrap().push("on_disable");
        Ok(())
    }
}

// ==============================================================================
// Context Registration Tests
// ==============================================================================

#[test]
fn test_register_then_dispose_deregisters_once() {
    let host = RecordingHost::new();
    let mut context = PluginContext::new("test-plugin");
    context.initialize(host.clone()).unwrap();

    let disposer = context
        .add_command(Command::new("test.cmd", "Cmd", || Ok(())))
        .unwrap();

    assert_eq!(host.count("add:command:test.cmd"), 1);
    assert_eq!(host.count("remove:command:test.cmd"), 0);

    disposer.dispose();
    disposer.dispose();

    assert_eq!(host.count("remove:command:test.cmd"), 1);
}

#[test]
fn test_unload_disposes_in_reverse_registration_order() {
    let host = RecordingHost::new();
    let mut context = PluginContext::new("test-plugin");
    context.initialize(host.clone()).unwrap();

    context
        .add_command(Command::new("c1", "First", || Ok(())))
        .unwrap();
    context
        .add_status_bar_item(StatusBarItem::new("s1", "status"))
        .unwrap();
    context
        .add_menu_item(MenuLocation::Main, MenuItem::new("m1", "Menu"))
        .unwrap();

    assert_eq!(context.tracked_count(), 3);
    context.unload();

    assert_eq!(
        host.removals(),
        vec!["remove:menu:m1", "remove:status:s1", "remove:command:c1"]
    );
    assert_eq!(context.tracked_count(), 0);
}

#[test]
fn test_second_unload_performs_no_host_calls() {
    let host = RecordingHost::new();
    let mut context = PluginContext::new("test-plugin");
    context.initialize(host.clone()).unwrap();

    context
        .add_command(Command::new("c1", "First", || Ok(())))
        .unwrap();

    context.unload();
    let after_first = host.log_entries().len();

    context.unload();
    assert_eq!(host.log_entries().len(), after_first);
}

#[test]
fn test_early_dispose_then_unload_deregisters_once() {
    let host = RecordingHost::new();
    let mut context = PluginContext::new("test-plugin");
    context.initialize(host.clone()).unwrap();

    let disposer = context
        .add_command(Command::new("c1", "First", || Ok(())))
        .unwrap();
    context
        .add_command(Command::new("c2", "Second", || Ok(())))
        .unwrap();

    // Plugin disposes one registration early; unload must not repeat it.
    disposer.dispose();
    context.unload();

    assert_eq!(host.count("remove:command:c1"), 1);
    assert_eq!(host.count("remove:command:c2"), 1);
}

#[test]
fn test_every_category_registers_and_tears_down() {
    let host = RecordingHost::new();
    let mut context = PluginContext::new("test-plugin");
    context.initialize(host.clone()).unwrap();

    context
        .add_command(Command::new("cat.cmd", "Cmd", || Ok(())))
        .unwrap();
    context
        .add_keyboard_shortcut(KeyboardShortcut::new("cat.key", "Ctrl+B", "cat.cmd"))
        .unwrap();
    context
        .add_menu_item(MenuLocation::Context, MenuItem::new("cat.menu", "Menu"))
        .unwrap();
    context
        .add_status_bar_item(StatusBarItem::new("cat.status", "text"))
        .unwrap();
    context
        .add_event_listener(EventKind::FileOpen, |_| Ok(()))
        .unwrap();
    context
        .register_settings(PluginSettingsConfig::default())
        .unwrap();

    assert_eq!(context.tracked_count(), 6);
    context.unload();

    assert_eq!(
        host.removals(),
        vec![
            "remove:settings-schema:test-plugin",
            "remove:event:file:open",
            "remove:status:cat.status",
            "remove:menu:cat.menu",
            "remove:shortcut:cat.key",
            "remove:command:cat.cmd",
        ]
    );
}

#[test]
fn test_double_initialize_fails() {
    let host = RecordingHost::new();
    let mut context = PluginContext::new("test-plugin");

    context.initialize(host.clone()).unwrap();
    let result = context.initialize(host);
    assert!(matches!(result, Err(SdkError::AlreadyInitialized)));
}

// ==============================================================================
// Event Delivery Tests
// ==============================================================================

#[test]
fn test_listener_receives_matching_kind_only() {
    let host = RecordingHost::new();
    let mut context = PluginContext::new("test-plugin");
    context.initialize(host.clone()).unwrap();

    let opened = Arc::new(Mutex::new(Vec::new()));
    let o = Arc::clone(&opened);
    context
        .add_event_listener(EventKind::FileOpen, move |event| {
            if let AppEvent::FileOpen { file } = event {
                o.lock().unwrap().push(file.name.clone());
            }
            Ok(())
        })
        .unwrap();

    host.emit(&AppEvent::FileOpen { file: test_file() });
    host.emit(&AppEvent::FileSave { file: test_file() });

    assert_eq!(*opened.lock().unwrap(), vec!["notes.md"]);
}

#[test]
fn test_unload_stops_event_delivery() {
    let host = RecordingHost::new();
    let mut context = PluginContext::new("test-plugin");
    context.initialize(host.clone()).unwrap();

    let calls = Arc::new(Mutex::new(0usize));
    let c = Arc::clone(&calls);
    context
        .add_event_listener(EventKind::FileOpen, move |_| {
            *c.lock().unwrap() += 1;
            Ok(())
        })
        .unwrap();

    host.emit(&AppEvent::FileOpen { file: test_file() });
    context.unload();
    host.emit(&AppEvent::FileOpen { file: test_file() });

    assert_eq!(*calls.lock().unwrap(), 1);
}

// ==============================================================================
// Settings Tests
// ==============================================================================

#[tokio::test]
async fn test_load_settings_empty_store_falls_back_to_defaults() {
    let host = RecordingHost::new();
    let mut context = PluginContext::new("test-plugin");
    context.initialize(host).unwrap();

    let loaded = context.load_settings().await.unwrap();
    assert!(loaded.is_empty());

    assert_eq!(
        context.setting_or("missing", "fallback".to_string()),
        "fallback"
    );
}

#[tokio::test]
async fn test_loaded_value_wins_over_caller_default() {
    let host = RecordingHost::new();

    let mut stored = PluginSettings::new();
    stored.set("format", "words").unwrap();
    host.stored_settings
        .lock()
        .unwrap()
        .insert("test-plugin".to_string(), stored);

    let mut context = PluginContext::new("test-plugin");
    context.initialize(host).unwrap();
    context.load_settings().await.unwrap();

    assert_eq!(
        context.setting_or("format", "characters".to_string()),
        "words"
    );
}

#[tokio::test]
async fn test_set_setting_does_not_persist_until_save() {
    let host = RecordingHost::new();
    let mut context = PluginContext::new("test-plugin");
    context.initialize(host.clone()).unwrap();

    context.set_setting("format", "words").unwrap();
    assert!(host.stored_settings.lock().unwrap().is_empty());

    let snapshot = context.settings().clone();
    context.save_settings(snapshot).await.unwrap();

    let stored = host.stored_settings.lock().unwrap();
    assert_eq!(
        stored["test-plugin"].get_as::<String>("format").as_deref(),
        Some("words")
    );
}

#[tokio::test]
async fn test_settings_failure_propagates_unchanged() {
    let host = RecordingHost::new();
    host.fail_settings.store(true, Ordering::SeqCst);

    let mut context = PluginContext::new("test-plugin");
    context.initialize(host).unwrap();

    let result = context.load_settings().await;
    assert!(matches!(result, Err(SdkError::Host(_))));
}

#[tokio::test]
async fn test_merge_defaults_with_loaded_settings() {
    let host = RecordingHost::new();

    let mut stored = PluginSettings::new();
    stored.set("vim", true).unwrap();
    host.stored_settings
        .lock()
        .unwrap()
        .insert("test-plugin".to_string(), stored);

    let mut context = PluginContext::new("test-plugin");
    context.initialize(host).unwrap();

    let config = markforge_plugin_api::SettingsBuilder::new()
        .add_group("g1", "General")
        .add_boolean("vim", "Vim Mode", false)
        .add_boolean("autosave", "Autosave", true)
        .build();

    let mut settings = context.load_settings().await.unwrap();
    settings.merge_defaults(&config);

    // Loaded value wins; missing key takes the declared default.
    assert_eq!(settings.get_as::<bool>("vim"), Some(true));
    assert_eq!(settings.get_as::<bool>("autosave"), Some(true));
}

// ==============================================================================
// Command Execution Tests
// ==============================================================================

#[tokio::test]
async fn test_execute_registered_command() {
    let host = RecordingHost::new();
    let mut context = PluginContext::new("test-plugin");
    context.initialize(host.clone()).unwrap();

    let runs = Arc::new(Mutex::new(0usize));
    let r = Arc::clone(&runs);
    context
        .add_command(Command::new("test.run", "Run", move || {
            *r.lock().unwrap() += 1;
            Ok(())
        }))
        .unwrap();

    host.execute_command("test.run").await.unwrap();
    assert_eq!(*runs.lock().unwrap(), 1);

    let missing = host.execute_command("test.other").await;
    assert!(matches!(missing, Err(SdkError::Host(_))));
}

#[tokio::test]
async fn test_failing_command_action_surfaces_as_handler_error() {
    let host = RecordingHost::new();
    let mut context = PluginContext::new("test-plugin");
    context.initialize(host.clone()).unwrap();

    context
        .add_command(Command::new("test.fail", "Fail", || {
            anyhow::bail!("broken")
        }))
        .unwrap();

    let result = host.execute_command("test.fail").await;
    assert!(matches!(result, Err(SdkError::Handler(_))));
}

// ==============================================================================
// Editor Extension Tests
// ==============================================================================

struct TrackedExtension {
    active: Arc<AtomicBool>,
}

impl EditorExtension for TrackedExtension {
    fn id(&self) -> &str {
        "tracked"
    }

    fn name(&self) -> &str {
        "Tracked Extension"
    }

    fn activate(&self, _editor: &dyn EditorApi) {
        self.active.store(true, Ordering::SeqCst);
    }

    fn deactivate(&self) {
        self.active.store(false, Ordering::SeqCst);
    }
}

#[test]
fn test_editor_extension_deactivates_on_dispose() {
    let host = RecordingHost::new();
    let mut context = PluginContext::new("test-plugin");
    context.initialize(host.clone()).unwrap();

    let active = Arc::new(AtomicBool::new(true));
    let extension = Arc::new(TrackedExtension {
        active: Arc::clone(&active),
    });

    context.add_editor_extension(extension).unwrap();
    assert_eq!(host.count("add:extension:tracked"), 1);

    context.unload();
    assert!(!active.load(Ordering::SeqCst));
    assert_eq!(host.count("remove:extension:tracked"), 1);
}

// ==============================================================================
// Registry Lifecycle Tests
// ==============================================================================

#[tokio::test]
async fn test_registry_load_and_unload() {
    let host = RecordingHost::new();
    let mut registry = PluginRegistry::new(host.clone());

    let plugin = WordCountPlugin::new("word-count");
    let hooks = plugin.hooks();

    let id = registry.load_plugin(Box::new(plugin)).await.unwrap();
    assert_eq!(id, "word-count");
    assert_eq!(registry.plugin_count(), 1);
    assert!(registry.is_enabled("word-count"));
    assert_eq!(host.count("add:command:word-count.refresh"), 1);

    registry.unload_plugin("word-count").await.unwrap();
    assert_eq!(registry.plugin_count(), 0);
    assert!(!registry.is_enabled("word-count"));

    // on_unload runs before the tracked registrations are disposed.
    assert_eq!(*hooks.lock().unwrap(), vec!["on_load", "on_unload"]);
    assert_eq!(
        host.removals(),
        vec![
            "remove:event:file:change",
            "remove:status:word-count.status",
            "remove:command:word-count.refresh",
        ]
    );
}

#[tokio::test]
async fn test_registry_rejects_duplicate_id() {
    let host = RecordingHost::new();
    let mut registry = PluginRegistry::new(host);

    registry
        .load_plugin(Box::new(WordCountPlugin::new("word-count")))
        .await
        .unwrap();

    let result = registry
        .load_plugin(Box::new(WordCountPlugin::new("word-count")))
        .await;
    assert!(result.is_err());
    assert_eq!(registry.plugin_count(), 1);
}

#[tokio::test]
async fn test_registry_rolls_back_failed_load() {
    let host = RecordingHost::new();
    let mut registry = PluginRegistry::new(host.clone());

    let mut plugin = WordCountPlugin::new("word-count");
    plugin.fail_load = true;

    let result = registry.load_plugin(Box::new(plugin)).await;
    assert!(result.is_err());
    assert_eq!(registry.plugin_count(), 0);

    // Everything registered before the failure is torn down, reverse order.
    assert_eq!(
        host.removals(),
        vec![
            "remove:event:file:change",
            "remove:status:word-count.status",
            "remove:command:word-count.refresh",
        ]
    );
}

#[tokio::test]
async fn test_registry_enable_disable_toggles() {
    let host = RecordingHost::new();
    let mut registry = PluginRegistry::new(host.clone());

    let plugin = WordCountPlugin::new("word-count");
    let hooks = plugin.hooks();
    registry.load_plugin(Box::new(plugin)).await.unwrap();

    registry.disable_plugin("word-count").await.unwrap();
    assert!(!registry.is_enabled("word-count"));
    assert!(registry.contains("word-count"));

    // Disabling twice fires the hook once.
    registry.disable_plugin("word-count").await.unwrap();

    registry.enable_plugin("word-count").await.unwrap();
    assert!(registry.is_enabled("word-count"));

    assert_eq!(
        *hooks.lock().unwrap(),
        vec!["on_load", "on_disable", "on_enable"]
    );

    // Toggling never touches tracked registrations.
    assert!(host.removals().is_empty());
}

#[tokio::test]
async fn test_registry_unknown_plugin_operations_fail() {
    let host = RecordingHost::new();
    let mut registry = PluginRegistry::new(host);

    assert!(registry.unload_plugin("nope").await.is_err());
    assert!(registry.enable_plugin("nope").await.is_err());
    assert!(registry.disable_plugin("nope").await.is_err());
}

#[tokio::test]
async fn test_registry_list_plugins() {
    let host = RecordingHost::new();
    let mut registry = PluginRegistry::new(host);

    registry
        .load_plugin(Box::new(WordCountPlugin::new("plugin-a")))
        .await
        .unwrap();
    registry
        .load_plugin(Box::new(WordCountPlugin::new("plugin-b")))
        .await
        .unwrap();
    registry.disable_plugin("plugin-b").await.unwrap();

    let mut info = registry.list_plugins();
    info.sort_by(|a, b| a.id.cmp(&b.id));

    assert_eq!(info.len(), 2);
    assert_eq!(info[0].id, "plugin-a");
    assert_eq!(info[0].name, "Test Plugin plugin-a");
    assert_eq!(info[0].author.as_deref(), Some("tester"));
    assert!(info[0].enabled);
    assert!(!info[1].enabled);

    assert_eq!(registry.manifest("plugin-a").unwrap().plugin.id, "plugin-a");
    assert!(registry.manifest("missing").is_none());
}

#[tokio::test]
async fn test_plugin_receives_events_until_unload() {
    let host = RecordingHost::new();
    let mut registry = PluginRegistry::new(host.clone());

    let plugin = WordCountPlugin::new("word-count");
    let seen = Arc::clone(&plugin.seen_changes);
    registry.load_plugin(Box::new(plugin)).await.unwrap();

    host.emit(&AppEvent::FileChange {
        file: test_file(),
        content: "one two three".to_string(),
    });
    assert_eq!(*seen.lock().unwrap(), vec!["one two three"]);

    registry.unload_plugin("word-count").await.unwrap();
    host.emit(&AppEvent::FileChange {
        file: test_file(),
        content: "four".to_string(),
    });
    assert_eq!(seen.lock().unwrap().len(), 1);
}
