//! Build script for the server crate.
//!
//! `sqlx::migrate!` embeds `migrations/` at compile time, but Cargo does not
//! know to rebuild when a new migration file is added.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
