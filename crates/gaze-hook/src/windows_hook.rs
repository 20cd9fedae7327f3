//! Process-wide `WH_MOUSE_LL` hook on a dedicated message-pump thread.
//!
//! The OS times out slow low-level hooks system-wide, so the callback only
//! decodes the message, samples modifier state and does a non-blocking send;
//! everything else happens on the consumer side of the channel.

use std::sync::OnceLock;
use std::sync::mpsc;
use std::thread::JoinHandle;

use gaze_types::{Modifiers, PointerEvent};
use windows::Win32::Foundation::{LPARAM, LRESULT, WPARAM};
use windows::Win32::System::Threading::GetCurrentThreadId;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    GetAsyncKeyState, VK_CONTROL, VK_LWIN, VK_MENU, VK_RWIN, VK_SHIFT,
};
use windows::Win32::UI::WindowsAndMessaging::{
    CallNextHookEx, DispatchMessageW, GetMessageW, HC_ACTION, MSG, MSLLHOOKSTRUCT,
    PostThreadMessageW, SetWindowsHookExW, TranslateMessage, UnhookWindowsHookEx, WH_MOUSE_LL,
    WM_QUIT,
};

use crate::{HookError, decode::decode_message};

struct HookShared {
    events: kanal::Sender<PointerEvent>,
}

// The hook callback has no user-data pointer, so the publishing side lives
// in process-wide state. Set exactly once, released with the process.
static HOOK_STATE: OnceLock<HookShared> = OnceLock::new();

/// Modifier keys are sampled at event time; down/up of non-trigger keys do
/// not retrigger recomputation.
fn sample_modifiers() -> Modifiers {
    fn pressed(vk: i32) -> bool {
        (unsafe { GetAsyncKeyState(vk) } as u16) & 0x8000 != 0
    }

    let mut mods = Modifiers::NONE;
    if pressed(VK_MENU.0 as i32) {
        mods = mods | Modifiers::ALT;
    }
    if pressed(VK_CONTROL.0 as i32) {
        mods = mods | Modifiers::CONTROL;
    }
    if pressed(VK_SHIFT.0 as i32) {
        mods = mods | Modifiers::SHIFT;
    }
    if pressed(VK_LWIN.0 as i32) || pressed(VK_RWIN.0 as i32) {
        mods = mods | Modifiers::WIN;
    }
    mods
}

unsafe extern "system" fn hook_proc(code: i32, wparam: WPARAM, lparam: LPARAM) -> LRESULT {
    if code == HC_ACTION as i32 {
        if let Some(state) = HOOK_STATE.get() {
            let data = unsafe { &*(lparam.0 as *const MSLLHOOKSTRUCT) };
            if let Some(event) = decode_message(
                wparam.0 as u32,
                data.pt.x,
                data.pt.y,
                data.mouseData,
                sample_modifiers(),
            ) {
                // Drop rather than block when the consumer lags.
                match state.events.try_send(event) {
                    Ok(true) => {}
                    _ => tracing::trace!("pointer channel full, event dropped"),
                }
            }
        }
    }
    // Always forward to the next hook in the chain.
    unsafe { CallNextHookEx(None, code, wparam, lparam) }
}

/// Owner of the hook handle and its pump thread. The handle, the callback
/// and the thread live and die together.
pub struct MouseHook {
    thread: Option<JoinHandle<()>>,
    thread_id: u32,
}

impl MouseHook {
    /// Install the global hook and start publishing [`PointerEvent`]s to
    /// `events`. At most one hook per process.
    pub fn install(events: kanal::Sender<PointerEvent>) -> Result<Self, HookError> {
        if HOOK_STATE.set(HookShared { events }).is_err() {
            return Err(HookError::AlreadyInstalled);
        }

        let (ready_tx, ready_rx) = mpsc::channel::<Result<u32, i32>>();

        let thread = std::thread::Builder::new()
            .name("gaze-mouse-hook".into())
            .spawn(move || {
                let hook = match unsafe { SetWindowsHookExW(WH_MOUSE_LL, Some(hook_proc), None, 0) }
                {
                    Ok(hook) => {
                        let _ = ready_tx.send(Ok(unsafe { GetCurrentThreadId() }));
                        hook
                    }
                    Err(e) => {
                        let _ = ready_tx.send(Err(e.code().0));
                        return;
                    }
                };

                tracing::info!("low-level mouse hook installed");

                let mut msg = MSG::default();
                loop {
                    let result = unsafe { GetMessageW(&mut msg, None, 0, 0) };
                    if result.0 <= 0 || msg.message == WM_QUIT {
                        break;
                    }
                    unsafe {
                        let _ = TranslateMessage(&msg);
                        DispatchMessageW(&msg);
                    }
                }

                unsafe {
                    let _ = UnhookWindowsHookEx(hook);
                }
                tracing::info!("low-level mouse hook removed");
            })
            .map_err(|_| HookError::InstallFailed(0))?;

        match ready_rx.recv() {
            Ok(Ok(thread_id)) => Ok(Self {
                thread: Some(thread),
                thread_id,
            }),
            Ok(Err(os_code)) => {
                let _ = thread.join();
                Err(HookError::InstallFailed(os_code))
            }
            Err(_) => Err(HookError::InstallFailed(0)),
        }
    }

    /// Ask the pump thread to quit and wait for the unhook. Idempotent.
    pub fn stop(&mut self) {
        let Some(thread) = self.thread.take() else {
            return;
        };
        unsafe {
            let _ = PostThreadMessageW(self.thread_id, WM_QUIT, WPARAM(0), LPARAM(0));
        }
        let _ = thread.join();
    }
}

impl Drop for MouseHook {
    fn drop(&mut self) {
        self.stop();
    }
}
