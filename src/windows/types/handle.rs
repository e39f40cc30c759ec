//! Safe HANDLE wrapper with automatic cleanup

use crate::windows::bindings::kernel32;
use winapi::um::winnt::HANDLE;

/// Owned Windows HANDLE, closed when dropped
pub struct Handle {
    handle: HANDLE,
}

impl Handle {
    /// Take ownership of a raw handle
    pub fn new(handle: HANDLE) -> Self {
        Handle { handle }
    }

    /// Check if handle is null
    pub fn is_null(&self) -> bool {
        self.handle.is_null()
    }

    /// Get the raw handle
    pub fn raw(&self) -> HANDLE {
        self.handle
    }
}

impl Drop for Handle {
    fn drop(&mut self) {
        if !self.handle.is_null() {
            // Nothing useful to do with a close failure during drop
            unsafe {
                let _ = kernel32::close_handle(self.handle);
            }
        }
    }
}
