//! # Dependency Injection / 依赖注入模块
//!
//! The only place that depends on clip-infra, clip-platform and clip-app at
//! the same time. It assembles adapters into [`AppDeps`] and makes no
//! decisions of its own.

use std::sync::Arc;

use clip_app::AppDeps;
use clip_core::ports::*;
use clip_core::ClipperConfig;
use clip_infra::FileHistoryStore;
use clip_platform::chooser::ProcessChooser;
use clip_platform::clipboard::LocalClipboard;
use clip_platform::keystroke::EnigoKeystroke;

/// Wire all dependencies together.
/// 将所有依赖连接在一起。
///
/// Nothing is opened here. The history file and the system clipboard are
/// touched on demand by the actions that need them.
pub fn wire_dependencies(config: &ClipperConfig) -> AppDeps {
    let clipboard: Arc<dyn SystemClipboardPort> = Arc::new(LocalClipboard::new());
    let keystroke: Arc<dyn KeystrokePort> = Arc::new(EnigoKeystroke::new());
    let history: Arc<dyn HistoryStorePort> =
        Arc::new(FileHistoryStore::new(config.store_path.clone()));
    let chooser: Arc<dyn ChooserPort> = Arc::new(ProcessChooser::new(config.chooser.clone()));

    AppDeps {
        clipboard,
        keystroke,
        history,
        chooser,
    }
}
