//! jailrun: chroot into a prepared rootfs, drop privileges to a target
//! user, and exec a command there. The innermost trusted step of the
//! sandbox pipeline; must be invoked as root (or setuid root).

mod cli;
mod error;
mod jail;
mod logger;

use crate::error::prelude::*;

fn main() {
    logger::StderrLogger::setup();
    if let Err(why) = run() {
        eprintln!("{why:#}");
        std::process::exit(1);
    }
}

fn run() -> Result {
    let invocation = cli::Invocation::parse(std::env::args().skip(1))?;
    // Only ever returns with an error; success is the exec.
    match jail::launch(&invocation)? {}
}
