//! Reusable UI components for the Vitrine frontend.
//!
//! Every component here reads the shared collection state through
//! [`use_collection`](crate::providers::use_collection).

pub mod active_tray;
pub mod content_tabs;
pub mod gallery;
pub mod nft_card;
pub mod nft_grid;

pub use active_tray::*;
pub use content_tabs::*;
pub use gallery::*;
pub use nft_card::*;
pub use nft_grid::*;
