//! Core logic for the GitHub team membership resource.
//!
//! This crate holds everything that decides what a version *is*, without any
//! network or file-system access:
//!
//! - [`fingerprint`]: order-independent SHA-256 digest of a team's logins
//! - [`version`]: the `fingerprint-disambiguator` version token codec
//! - [`clock`]: injectable wall clock used to stamp new versions
//! - [`verified`]: pure decision functions for check and in
//!
//! # Example
//!
//! ```
//! use github_team_core::MembershipSnapshot;
//! use github_team_core::Version;
//!
//! let snapshot = MembershipSnapshot::from_logins(["Sarah", "Duck", "Bread Man"]);
//! assert_eq!(snapshot.logins(), ["Bread Man", "Duck", "Sarah"]);
//!
//! let version = Version::new(snapshot.fingerprint(), 1_583_625_600);
//! assert_eq!(
//!     version.to_string(),
//!     "12a14115c9b3f5027ed3b983f1b9315cdf48239d807f5c50294e95312c6ae0c1-1583625600"
//! );
//! ```
//!
//! # Tiger Style
//!
//! - No I/O, no ambient time: the clock is always passed in
//! - Infallible parsing of persisted tokens
//! - Deterministic: same inputs always produce same outputs

pub mod clock;
pub mod constants;
pub mod fingerprint;
pub mod verified;
pub mod version;

pub use clock::Clock;
pub use clock::ManualClock;
pub use clock::SystemClock;
pub use fingerprint::Fingerprint;
pub use fingerprint::MembershipSnapshot;
pub use version::Version;
