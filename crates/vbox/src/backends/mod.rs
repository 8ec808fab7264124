pub mod recording;
pub mod vboxmanage;

pub use recording::RecordingTool;
pub use vboxmanage::VBoxManage;
