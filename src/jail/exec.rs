//! Program replacement via execvp.

use std::convert::Infallible;
use std::ffi::CString;

use log::debug;

use crate::error::prelude::*;

/// Overlay this process with the requested program. `argv[0]` is the
/// program name, resolved through the inherited PATH when it contains no
/// path separator; open file descriptors and the environment carry over
/// unchanged.
pub fn exec(argv: &[String]) -> Result<Infallible> {
    let argv = to_cstring_argv(argv)?;
    let program = argv.first().context("empty argument vector")?;
    debug!("execvp {program:?}");
    nix::unistd::execvp(program, &argv).context("execvp failed")
}

fn to_cstring_argv(argv: &[String]) -> Result<Vec<CString>> {
    argv.iter()
        .map(|arg| {
            CString::new(arg.as_str())
                .with_context(|| format!("argument {arg:?} contains a NUL byte"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn converts_plain_arguments() {
        let argv = vec!["/bin/echo".to_string(), "hello".to_string()];
        let argv = to_cstring_argv(&argv).unwrap();
        assert_eq!(argv.len(), 2);
        assert_eq!(argv[1].to_str().unwrap(), "hello");
    }

    #[test]
    fn rejects_interior_nul_bytes() {
        let argv = vec!["/bin/echo".to_string(), "a\0b".to_string()];
        let err = to_cstring_argv(&argv).unwrap_err();
        assert!(err.to_string().contains("NUL"), "{err}");
    }
}
