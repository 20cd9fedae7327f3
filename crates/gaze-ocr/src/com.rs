use anyhow::Result;

/// RAII guard for COM initialization on the current thread.
///
/// The OCR backend is WinRT; worker threads that touch it hold one of these
/// so CoUninitialize runs even on early return.
pub struct ComGuard;

#[cfg(target_os = "windows")]
impl ComGuard {
    pub fn initialize() -> Result<Self> {
        use anyhow::Context;
        unsafe {
            windows::Win32::System::Com::CoInitializeEx(
                Some(std::ptr::null()),
                windows::Win32::System::Com::COINIT_MULTITHREADED,
            )
            .ok()
            .with_context(|| "Failed to initialize COM")?;
        }
        Ok(ComGuard)
    }
}

#[cfg(target_os = "windows")]
impl Drop for ComGuard {
    fn drop(&mut self) {
        unsafe {
            windows::Win32::System::Com::CoUninitialize();
        }
    }
}

#[cfg(not(target_os = "windows"))]
impl ComGuard {
    pub fn initialize() -> Result<Self> {
        Ok(ComGuard)
    }
}
