//! CLI command implementations

mod generate;
mod stubs;

pub use generate::GenerateCommand;
pub use stubs::StubsCommand;
