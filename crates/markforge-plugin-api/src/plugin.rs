//! The plugin lifecycle contract.

use crate::context::PluginContext;
use async_trait::async_trait;
use markforge_runtime::PluginManifest;
use markforge_sdk_core::SdkResult;

/// The lifecycle contract a markforge plugin implements.
///
/// The registry drives the hooks: `on_load` when the plugin is loaded,
/// `on_unload` before teardown, and the optional enable/disable pair on
/// activation toggles that do not fully unload the plugin.
///
/// Registrations made through the [`PluginContext`] are torn down by the
/// registry after `on_unload` returns, whether or not the hook succeeds -
/// a plugin only needs `on_unload` for cleanup the context does not track.
#[async_trait]
pub trait Plugin: Send + Sync {
    /// The plugin's immutable identity record.
    fn manifest(&self) -> &PluginManifest;

    /// Called once after the context is bound to the host. Register
    /// commands, listeners and schemas here.
    async fn on_load(&mut self, ctx: &mut PluginContext) -> SdkResult<()>;

    /// Called before the plugin is unloaded.
    async fn on_unload(&mut self, _ctx: &mut PluginContext) -> SdkResult<()> {
        Ok(())
    }

    /// Called when the plugin is re-enabled without a full reload.
    async fn on_enable(&mut self) -> SdkResult<()> {
        Ok(())
    }

    /// Called when the plugin is disabled without a full unload.
    async fn on_disable(&mut self) -> SdkResult<()> {
        Ok(())
    }
}
