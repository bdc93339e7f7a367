pub mod prelude {
    pub use anyhow::{anyhow, bail, Context};
    use std::result::Result as StdResult;
    pub type Result<T = (), E = anyhow::Error> = StdResult<T, E>;
}
