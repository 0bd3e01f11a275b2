//! File System Helpers
//!
//! Home directory resolution and atomic writes.

mod atomic;
mod home;

pub use atomic::atomic_write;
pub use home::{bootapp_home_dir, bootapp_state_dir, BOOTAPP_DIR_NAME, BOOTAPP_TEST_HOME_VAR};
