#[macro_use]
extern crate log;

pub mod case;
pub mod prelude;
pub mod report;
pub mod runner;
pub mod solver;
pub mod summary;
pub mod verdict;
