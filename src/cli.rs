//! Invocation parsing and validation.

use std::path::PathBuf;

use nix::unistd::Uid;

use crate::error::prelude::*;

pub const USAGE: &str = "Usage: jailrun <rootfs> <uid> <command> [args...]";

#[derive(Debug, Clone)]
pub struct Invocation {
    pub rootfs: PathBuf,
    pub uid: Uid,
    /// Full argument vector for the replacement image; element zero is
    /// the program name.
    pub argv: Vec<String>,
}

impl Invocation {
    /// Parse the positional arguments (our own program name excluded).
    pub fn parse<I>(args: I) -> Result<Self>
    where
        I: IntoIterator<Item = String>,
    {
        let mut args = args.into_iter();
        let (Some(rootfs), Some(uid), Some(program)) = (args.next(), args.next(), args.next())
        else {
            bail!("{USAGE}");
        };
        let uid = parse_uid(&uid)?;
        let mut argv = vec![program];
        argv.extend(args);
        Ok(Self {
            rootfs: PathBuf::from(rootfs),
            uid,
            argv,
        })
    }
}

/// Strict uid parser. atoi-style leniency here would turn a typo into
/// uid 0, so anything but a plain in-range decimal number is rejected,
/// and uid 0 itself is refused up front.
fn parse_uid(s: &str) -> Result<Uid> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        bail!("invalid uid {s:?}: expected a non-negative decimal integer");
    }
    let raw: u32 = s
        .parse()
        .map_err(|_| anyhow!("invalid uid {s:?}: out of range"))?;
    if raw == 0 {
        bail!("refusing to launch as uid 0: pick an unprivileged user");
    }
    Ok(Uid::from_raw(raw))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Invocation> {
        Invocation::parse(args.iter().map(|s| s.to_string()))
    }

    #[test]
    fn accepts_a_minimal_invocation() {
        let inv = parse(&["/var/sandboxes/job42", "1000", "/bin/true"]).unwrap();
        assert_eq!(inv.rootfs, PathBuf::from("/var/sandboxes/job42"));
        assert_eq!(inv.uid, Uid::from_raw(1000));
        assert_eq!(inv.argv, vec!["/bin/true"]);
    }

    #[test]
    fn preserves_program_arguments_in_order() {
        let inv = parse(&["/jail", "1000", "/bin/echo", "hello", "world"]).unwrap();
        assert_eq!(inv.argv, vec!["/bin/echo", "hello", "world"]);
    }

    #[test]
    fn rejects_short_argument_lists() {
        for args in [&[][..], &["/jail"][..], &["/jail", "1000"][..]] {
            let err = parse(args).unwrap_err();
            assert!(err.to_string().contains("Usage:"), "{err}");
        }
    }

    #[test]
    fn rejects_malformed_uids() {
        for uid in ["", "abc", "-1", "+1", "10.5", "1000x", " 1000"] {
            let err = parse(&["/jail", uid, "/bin/true"]).unwrap_err();
            assert!(err.to_string().contains("invalid uid"), "{uid:?}: {err}");
        }
    }

    #[test]
    fn rejects_uid_zero() {
        let err = parse(&["/jail", "0", "/bin/sh"]).unwrap_err();
        assert!(err.to_string().contains("uid 0"), "{err}");
    }

    #[test]
    fn rejects_out_of_range_uids() {
        for uid in ["4294967296", "99999999999999999999"] {
            let err = parse(&["/jail", uid, "/bin/true"]).unwrap_err();
            assert!(err.to_string().contains("out of range"), "{uid:?}: {err}");
        }
    }
}
