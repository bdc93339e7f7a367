//! Filesystem confinement into the jail root.

use std::path::Path;

use log::debug;

use crate::error::prelude::*;

#[cfg(not(target_os = "macos"))]
const CHROOT_FAILED: &str = "chroot failed (are you root?)";
#[cfg(target_os = "macos")]
const CHROOT_FAILED: &str =
    "chroot failed (are you root?); SIP may forbid chroot on macOS, set MACOS_DEV_MODE=1 to skip it for development";

pub fn enter(new_root: &Path) -> Result {
    debug!("chrooting to {}", new_root.display());
    nix::unistd::chroot(new_root).context(CHROOT_FAILED)?;
    // chroot(2) leaves the working directory where it was, which would
    // keep an escape hatch out of the jail open.
    std::env::set_current_dir("/").context("chdir to the new root failed")
}
