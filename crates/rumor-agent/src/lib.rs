//! `rumor-agent`: the per-individual rumor automaton.
//!
//! # Crate layout
//!
//! | Module          | Contents                                      |
//! |-----------------|-----------------------------------------------|
//! | [`individual`]  | `IndividualState`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                 |
//! |---------|--------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on `IndividualState`. |

pub mod individual;


pub use individual::IndividualState;
