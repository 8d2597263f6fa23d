//! `lift-rider` — rider state machine and roster storage.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`person`]    | `Person`, `PersonState`                                 |
//! | [`roster`]    | `Roster` — authoritative person store + id allocator    |
//! | [`lifecycle`] | `advance`, `choose_target`, `Advance`                   |
//!
//! # Lifecycle
//!
//! ```text
//! spawn ─► Choosing ──(decision delay)──► Waiting ──board──► InElevator
//!              │                              │                   │
//!              │                              │              deliver
//!              ▼                              ▼                   ▼
//!          Evacuated ◄──────── fire ───── Evacuated          Delivered
//!              └──────────(linger delay)──► removed ◄─────────────┘
//! ```
//!
//! Floor queues and elevator passenger lists hold `PersonId`s only; every
//! state change goes through the roster's `Person` so there is exactly one
//! place a rider is mutated.

pub mod lifecycle;
pub mod person;
pub mod roster;


pub use lifecycle::{advance, choose_target, Advance};
pub use person::{Person, PersonState};
pub use roster::Roster;
