//! Windows privilege management

pub mod api;
pub mod reducer;
#[cfg(windows)]
pub mod system;

pub use api::TokenApi;
pub use reducer::PrivilegeReducer;
#[cfg(windows)]
pub use reducer::remove_privileges;
#[cfg(windows)]
pub use system::WindowsTokenApi;
