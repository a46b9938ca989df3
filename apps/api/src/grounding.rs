//! Placeholder module. `main.rs` declares `mod grounding;` for the Phase 5
//! grounding system, which is not yet implemented. Kept as an empty module so
//! the declaration resolves without introducing behavior.
