mod env;
mod fileman_infra;
mod fs_dir;
mod fs_meta;
mod fs_read;
mod fs_remove;
mod fs_symlink;
mod fs_transfer;
mod fs_unpack;
mod fs_write;

pub use fileman_infra::*;
