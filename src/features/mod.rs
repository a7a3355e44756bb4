//! Per-screen reactors. Each submodule pairs a state type with the
//! reactor implementing its action handling.

pub mod delete_account;
pub mod folder_list;
pub mod link_detail;
pub mod login;
