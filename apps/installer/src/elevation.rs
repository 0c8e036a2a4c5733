//! Administrator privilege elevation.
//!
//! Writing into the system library directories needs an elevated process.
//! On Windows a non-elevated start relaunches itself with the `runas` verb.

/// Result of the elevation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Elevation {
    /// The process already runs elevated.
    Elevated,
    /// An elevated copy was started; this process should exit.
    Relaunched,
    /// Elevation is not attempted (debug build or non-Windows host).
    Skipped,
}

/// Relaunches the program elevated if needed.
pub fn ensure_elevated() -> anyhow::Result<Elevation> {
    if cfg!(debug_assertions) {
        return Ok(Elevation::Skipped);
    }
    platform::ensure_elevated()
}

#[cfg(target_os = "windows")]
mod platform {
    use std::ffi::OsStr;
    use std::iter::once;
    use std::os::windows::ffi::OsStrExt;

    use windows_sys::Win32::UI::Shell::{IsUserAnAdmin, ShellExecuteW};
    use windows_sys::Win32::UI::WindowsAndMessaging::SW_SHOWNORMAL;

    use super::Elevation;

    /// `ShellExecuteW` returns a value greater than 32 on success.
    const SHELL_EXECUTE_OK: isize = 32;

    fn wide(s: &OsStr) -> Vec<u16> {
        s.encode_wide().chain(once(0)).collect()
    }

    pub(super) fn ensure_elevated() -> anyhow::Result<Elevation> {
        // SAFETY: takes no arguments and only queries the process token.
        if unsafe { IsUserAnAdmin() } != 0 {
            return Ok(Elevation::Elevated);
        }

        tracing::info!("requesting administrator privileges");

        let exe = std::env::current_exe()?;
        let params = std::env::args().skip(1).collect::<Vec<_>>().join(" ");

        let verb = wide(OsStr::new("runas"));
        let file = wide(exe.as_os_str());
        let params = wide(OsStr::new(&params));

        // SAFETY: every pointer refers to a NUL-terminated buffer that outlives the call.
        let result = unsafe {
            ShellExecuteW(
                std::ptr::null_mut(),
                verb.as_ptr(),
                file.as_ptr(),
                params.as_ptr(),
                std::ptr::null(),
                SW_SHOWNORMAL,
            )
        };

        if result as isize > SHELL_EXECUTE_OK {
            Ok(Elevation::Relaunched)
        } else {
            anyhow::bail!("ShellExecuteW(runas) failed with code {}", result as isize);
        }
    }
}

#[cfg(not(target_os = "windows"))]
mod platform {
    use super::Elevation;

    pub(super) fn ensure_elevated() -> anyhow::Result<Elevation> {
        Ok(Elevation::Skipped)
    }
}
