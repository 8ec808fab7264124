pub mod backends;
pub mod config;
pub mod error;
pub mod forwarding;
pub mod status;
pub mod traits;
pub mod types;

pub use backends::{RecordingTool, VBoxManage};
pub use error::{Result, VboxError};
pub use traits::Manage;
pub use types::{Captured, ListMode, NatRule, VmOp};
