/// Stand-in for the unstable `!` type, for functions such as `inner_main` that only return on error.
#[derive(Debug)]
pub enum Never {}
