//! Placeholder module. `main.rs` declares `mod render;` for the Phase 4 render
//! system, which is not yet implemented. Kept as an empty module so the
//! declaration resolves without introducing behavior.
