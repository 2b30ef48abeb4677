pub use snafu::{ResultExt, Snafu};
