//! Build script for encore-storage.
//!
//! `sqlx::migrate!` embeds the migration files at compile time, so a changed
//! migration must rebuild the crate.

fn main() {
    println!("cargo:rerun-if-changed=migrations");
}
