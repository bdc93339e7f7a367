//! User-record lookup, the privilege drop itself, and the post-drop check.

use std::ffi::CString;

use log::debug;
use nix::unistd::{Gid, Uid, User};

use crate::error::prelude::*;

pub fn lookup(uid: Uid) -> Result<User> {
    User::from_uid(uid)
        .context("user database lookup failed")?
        .with_context(|| format!("no user with uid {uid} exists"))
}

/// Switch to the target identity. Supplementary groups are seeded first
/// and the primary gid changes before the uid: once setuid succeeds the
/// process no longer has the authority to adjust its own group
/// membership. setuid as root narrows the real, effective, and saved
/// uids at once, so the drop is irreversible.
pub fn drop_to(user: &User) -> Result {
    debug!(
        "switching to user {} (uid {}, gid {})",
        user.name, user.uid, user.gid
    );
    init_supplementary_groups(&user.name, user.gid)?;
    nix::unistd::setgid(user.gid).context("setgid failed")?;
    nix::unistd::setuid(user.uid).context("setuid failed")?;
    Ok(())
}

/// Read back the real and effective uids and refuse to continue if either
/// is still root. Catches an identity primitive that reported success
/// without narrowing every uid slot.
pub fn verify_dropped() -> Result {
    let uid = nix::unistd::getuid();
    let euid = nix::unistd::geteuid();
    debug!("uid is now {uid}, euid {euid}");
    if uid.is_root() || euid.is_root() {
        bail!("failed to drop root privileges (uid {uid}, euid {euid})");
    }
    Ok(())
}

#[cfg(not(target_os = "macos"))]
fn init_supplementary_groups(name: &str, gid: Gid) -> Result {
    let name = CString::new(name).context("login name contains a NUL byte")?;
    nix::unistd::initgroups(&name, gid).context("initgroups failed")
}

// nix doesn't expose initgroups on Apple targets, so go through libc.
#[cfg(target_os = "macos")]
fn init_supplementary_groups(name: &str, gid: Gid) -> Result {
    let name = CString::new(name).context("login name contains a NUL byte")?;
    let res = unsafe { libc::initgroups(name.as_ptr(), gid.as_raw() as libc::c_int) };
    nix::errno::Errno::result(res)
        .map(drop)
        .context("initgroups failed")
}
