mod component;
mod game_object;
mod transform;

/// Shader pass render state, its sub-records, and ShaderLab keywords.
pub mod shader_state;

/// Generic component schema.
pub use component::Component;
/// Scene node schema and its component list entry.
pub use game_object::{ComponentPair, GameObject};
/// Shader pass render state.
pub use shader_state::SerializedShaderState;
/// Transform schema and its vector types.
pub use transform::{Quaternionf, Transform, Vector3f};
