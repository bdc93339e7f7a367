//! The privilege transition: chroot into the jail, drop to the target
//! user, exec the requested program.

use std::convert::Infallible;

use crate::cli::Invocation;
use crate::error::prelude::*;

mod chroot;
mod exec;
mod user;

/// Confine the process and replace it with the requested program.
///
/// The step order is load-bearing: supplementary groups must be seeded
/// while we are still privileged, the primary gid must change before the
/// uid does, and the working directory must be re-anchored right after
/// chroot. On success this never returns; every failure is fatal with no
/// recovery path, since a half-finished transition leaves the process in
/// an indeterminate privilege state.
pub fn launch(invocation: &Invocation) -> Result<Infallible> {
    #[cfg(all(target_os = "macos", feature = "macos-dev-mode"))]
    if dev_mode_requested() {
        log::warn!("MACOS_DEV_MODE: skipping chroot and privilege drop (SIP limitation)");
        log::warn!("executing directly, for development/testing only");
        return exec::exec(&invocation.argv);
    }

    // Lookup happens before chroot so the host's user database is the
    // one consulted; the jail usually has no /etc/passwd.
    let user = user::lookup(invocation.uid)?;
    chroot::enter(&invocation.rootfs)?;
    user::drop_to(&user)?;
    user::verify_dropped()?;
    exec::exec(&invocation.argv)
}

#[cfg(all(target_os = "macos", feature = "macos-dev-mode"))]
fn dev_mode_requested() -> bool {
    std::env::var("MACOS_DEV_MODE").is_ok_and(|v| v == "1")
}
