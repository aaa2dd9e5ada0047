//! Browser tests, run with `wasm-pack test --headless --firefox`.

#![cfg(target_arch = "wasm32")]

use wasm_bindgen_test::*;
use wasm_voxel_mesher::{get_version, mesh_voxel_chunk, mesh_voxel_volume};

wasm_bindgen_test_configure!(run_in_browser);

#[wasm_bindgen_test]
fn solid_chunk_has_twelve_triangles() {
    let values = vec![1.0f32; 8 * 8 * 8];
    let result = mesh_voxel_chunk(&values, 8, "binary").unwrap();
    assert_eq!(result.triangle_count(), 12);
    assert_eq!(result.origin(), vec![0, 0, 0]);
}

#[wasm_bindgen_test]
fn volume_returns_one_entry_per_chunk() {
    let values = vec![0.0f32; 8 * 8 * 8];
    let chunks = mesh_voxel_volume(&values, 8, 4, "naive").unwrap();
    assert_eq!(chunks.length(), 8);
}

#[wasm_bindgen_test]
fn unknown_strategy_fails() {
    let values = vec![0.0f32; 8];
    assert!(mesh_voxel_chunk(&values, 2, "marching").is_err());
}

#[wasm_bindgen_test]
fn version_is_set() {
    assert!(!get_version().is_empty());
}
