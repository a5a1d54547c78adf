//! Small text-mode chess engine: an 8x8 board with piece movement, check
//! detection, legal move generation and material evaluation.
//!
//! The [`chess`] module holds the board and the rules, [`evaluation`] scores
//! positions and [`Engine`] runs an interactive session on top of them.
//!
//! ```
//! use rookery::chess::board::Board;
//! use rookery::chess::core::Color;
//!
//! let mut board = Board::starting();
//! assert_eq!(board.move_piece("e2", "e4"), Ok(None));
//! assert_eq!(board.turn(), Color::Black);
//! assert_eq!(board.get_all_legal_moves(Color::Black).len(), 20);
//! assert_eq!(board.evaluate(), 0);
//! ```

#![warn(missing_docs, variant_size_differences)]
// Rustc lints.
#![warn(
    absolute_paths_not_starting_with_crate,
    keyword_idents,
    macro_use_extern_crate,
    trivial_casts,
    trivial_numeric_casts,
    unused_extern_crates,
    unused_import_braces,
    unused_lifetimes,
    unused_qualifications
)]
// Rustdoc lints.
#![warn(
    rustdoc::missing_crate_level_docs,
    rustdoc::broken_intra_doc_links,
    rustdoc::invalid_codeblock_attributes,
    rustdoc::invalid_html_tags,
    rustdoc::invalid_rust_codeblocks,
    rustdoc::bare_urls
)]
// Clippy lints.
#![warn(
    clippy::correctness,
    clippy::suspicious,
    clippy::style,
    clippy::complexity,
    clippy::pedantic,
    clippy::nursery,
    clippy::cargo
)]

pub mod chess;
pub mod evaluation;

mod engine;
pub use engine::{Engine, Settings};
use shadow_rs::shadow;

shadow!(build);

/// Returns the full engine version that can be used to identify how it was
/// built in the first place.
#[must_use]
pub fn engine_version() -> String {
    format!(
        "{} (commit {}, branch {})",
        build::PKG_VERSION,
        build::SHORT_COMMIT,
        build::BRANCH
    )
}

/// Prints the engine version and build information to stderr, so that it does
/// not mix with the session output.
pub fn print_engine_info() {
    eprintln!("Rookery chess engine {}", engine_version());
    eprintln!("Release build: {}", !shadow_rs::is_debug());
    eprintln!("Build: {} on {}", build::BUILD_TIME, build::BUILD_TARGET);
    eprintln!("Rust: {}", build::RUST_VERSION);
}
