//! Auth types shared across fieldops services.
//!
//! Credentials are validated by the gateway; services only read the identity
//! it forwards, through the [`identity::IdentityHeaders`] extractor.

pub mod identity;
