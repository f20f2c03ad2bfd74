pub mod deal;
pub mod economics;
pub mod playbook;
