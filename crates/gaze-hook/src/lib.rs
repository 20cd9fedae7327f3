mod decode;
#[cfg(target_os = "windows")]
mod windows_hook;

pub use decode::decode_message;
#[cfg(target_os = "windows")]
pub use windows_hook::MouseHook;

/// Hook installation is fatal for the feature; it is surfaced once at
/// startup and never retried automatically.
#[derive(Debug, thiserror::Error)]
pub enum HookError {
    #[error("failed to install low-level mouse hook (os error {0})")]
    InstallFailed(i32),
    #[error("mouse hook is already installed")]
    AlreadyInstalled,
    #[error("global mouse hooks are not supported on this platform")]
    Unsupported,
}

#[cfg(not(target_os = "windows"))]
pub struct MouseHook;

#[cfg(not(target_os = "windows"))]
impl MouseHook {
    pub fn install(
        _events: kanal::Sender<gaze_types::PointerEvent>,
    ) -> Result<Self, HookError> {
        Err(HookError::Unsupported)
    }

    pub fn stop(&mut self) {}
}
