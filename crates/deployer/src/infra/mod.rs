pub mod blockchain;
pub mod cli;
pub mod observe;

pub use {blockchain::Ethereum, cli::Args};
