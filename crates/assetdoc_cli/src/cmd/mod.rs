/// Dependency enumeration command.
pub mod deps;
/// YAML and JSON object export command.
pub mod export;
/// Scene hierarchy listing command.
pub mod hierarchy;
/// File-level information command.
pub mod info;
/// Root lookup command.
pub mod root;
/// Raw shader pass state decode command.
pub mod shader_state;

mod util;

#[cfg(test)]
mod test_support;
