//! Business logic services.

pub mod relay;

pub use relay::RelayService;
