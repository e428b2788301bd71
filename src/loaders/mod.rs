pub mod gltf;

pub use self::gltf::{load_scene_file, load_scene_slice, SceneAsset, SceneInstance};
