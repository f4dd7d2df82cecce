//! # smbstax
//!
//! Async CLI automation driver for Microsemi switches running SMBStaX.
//!
//! The driver manages a switch by sending fixed CLI commands over an
//! interactive SSH session and normalizing the text responses into the data
//! model a vendor-neutral automation framework expects: ARP tables, MAC
//! address tables, interface counters, optics readings and configuration
//! dumps.
//!
//! ## Design
//!
//! - [`session::CliSession`] is the transport seam: the driver only consumes
//!   the string result of `send_command`. [`session::SshSession`] implements
//!   it over russh with prompt-pattern scraping.
//! - [`extract::Extractor`] is the extraction seam for listings too irregular
//!   for whitespace splitting; [`extract::TextFsmExtractor`] implements it
//!   with embedded TextFSM templates.
//! - [`parse`] holds the pure normalization functions; they never touch a
//!   session and are total over their documented input shapes.
//! - [`driver::NetworkDriver`] is the full plugin ABI; capabilities SMBStaX
//!   cannot serve fail with a typed unsupported error instead of returning
//!   empty data.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use smbstax::{DriverBuilder, NetworkDriver};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), smbstax::Error> {
//!     let mut driver = DriverBuilder::new("192.168.1.1")
//!         .username("admin")
//!         .password("secret")
//!         .build()?;
//!
//!     driver.open().await?;
//!
//!     for entry in driver.get_arp_table().await? {
//!         println!("{} -> {} ({})", entry.ip, entry.mac, entry.interface);
//!     }
//!
//!     driver.close().await?;
//!     Ok(())
//! }
//! ```

pub mod driver;
pub mod error;
pub mod extract;
pub mod model;
pub mod parse;
pub mod session;

// Re-export main types for convenience
pub use driver::{DriverBuilder, NetworkDriver, SmbstaxDriver};
pub use error::Error;
pub use extract::{Extractor, TextFsmExtractor};
pub use model::{ArpEntry, ConfigSnapshot, InterfaceCounters, MacEntry, OpticsReading};
pub use session::{AuthMethod, CliSession, SessionConfig, SshSession};
