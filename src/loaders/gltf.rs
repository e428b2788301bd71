use anyhow::{Context, Result};
use glam::{Mat4, Vec3};
use log::{debug, info, warn};
use std::path::Path;

use crate::math::AABB;

/// Backdrop model summary: everything the host needs without a GPU
#[derive(Debug, Clone, PartialEq)]
pub struct SceneAsset {
    pub name: Option<String>,
    /// World-space bounds of all mesh vertices, `None` if the file has no geometry
    pub bounds: Option<AABB>,
    pub node_count: usize,
    pub mesh_count: usize,
    pub primitive_count: usize,
    pub vertex_count: usize,
}

/// One placed copy of a loaded asset. Each active scene owns its own
/// instance, so transforming one never affects another.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneInstance {
    pub asset: SceneAsset,
    pub offset: Vec3,
}

impl SceneAsset {
    pub fn instantiate(&self, offset: Vec3) -> SceneInstance {
        SceneInstance {
            asset: self.clone(),
            offset,
        }
    }
}

impl SceneInstance {
    /// Bounds after the instance offset is applied
    pub fn world_bounds(&self) -> Option<AABB> {
        self.asset.bounds.map(|b| b.translated(self.offset))
    }
}

/// Loads a glTF file from disk
pub fn load_scene_file(path: impl AsRef<Path>) -> Result<SceneAsset> {
    let path = path.as_ref();
    info!("Loading glTF file: {:?}", path);

    let (doc, buffers, _images) =
        gltf::import(path).with_context(|| format!("Failed to load glTF file: {:?}", path))?;
    summarize(&doc, &buffers)
}

/// Loads a self-contained glTF/GLB from memory
pub fn load_scene_slice(bytes: &[u8]) -> Result<SceneAsset> {
    let (doc, buffers, _images) = gltf::import_slice(bytes).context("Failed to parse glTF data")?;
    summarize(&doc, &buffers)
}

fn summarize(doc: &gltf::Document, buffers: &[gltf::buffer::Data]) -> Result<SceneAsset> {
    let scene = doc.default_scene().or_else(|| doc.scenes().next());

    let mut asset = SceneAsset {
        name: scene.as_ref().and_then(|s| s.name()).map(str::to_owned),
        bounds: None,
        node_count: doc.nodes().count(),
        mesh_count: doc.meshes().count(),
        primitive_count: 0,
        vertex_count: 0,
    };

    match scene {
        Some(scene) => {
            for node in scene.nodes() {
                process_node(&node, buffers, &Mat4::IDENTITY, &mut asset)?;
            }
        }
        None => warn!("glTF file has no scenes"),
    }

    if asset.bounds.is_none() {
        warn!("No geometry found in glTF file");
    }

    info!(
        "glTF loaded: {} nodes, {} meshes, {} primitives, {} vertices",
        asset.node_count, asset.mesh_count, asset.primitive_count, asset.vertex_count
    );
    Ok(asset)
}

/// Recursively walks nodes, accumulating transformed vertex bounds
fn process_node(
    node: &gltf::Node,
    buffers: &[gltf::buffer::Data],
    parent_transform: &Mat4,
    asset: &mut SceneAsset,
) -> Result<()> {
    let local_transform = Mat4::from_cols_array_2d(&node.transform().matrix());
    let global_transform = *parent_transform * local_transform;

    if let Some(mesh) = node.mesh() {
        debug!("  mesh {:?}", mesh.name());
        for primitive in mesh.primitives() {
            let reader = primitive.reader(|buffer| buffers.get(buffer.index()).map(|d| &d.0[..]));
            let positions = reader
                .read_positions()
                .context("Mesh primitive has no positions")?;

            let points: Vec<Vec3> = positions
                .map(|p| global_transform.transform_point3(Vec3::from_array(p)))
                .collect();

            asset.primitive_count += 1;
            asset.vertex_count += points.len();

            if let Some(b) = AABB::from_points(points) {
                asset.bounds = Some(match asset.bounds {
                    Some(acc) => acc.union(&b),
                    None => b,
                });
            }
        }
    }

    for child in node.children() {
        process_node(&child, buffers, &global_transform, asset)?;
    }

    Ok(())
}
