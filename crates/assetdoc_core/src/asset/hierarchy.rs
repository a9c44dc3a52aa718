use std::collections::HashSet;

use crate::asset::{AssetError, GameObject, Object, ObjectInfo, ObjectLookup, Result, Transform};

/// View `node` as a scene node or fail with [`AssetError::NotAGameObject`].
pub fn as_game_object(node: &Object) -> Result<&GameObject> {
	node.downcast_ref::<GameObject>().ok_or(AssetError::NotAGameObject {
		path_id: node.path_id(),
		class_id: node.class_id(),
	})
}

/// First component of `node` that weak-resolves to a transform-capable object.
pub fn transform_of<'a, L: ObjectLookup + ?Sized>(node: &'a Object, lookup: &'a L) -> Result<Option<(&'a Object, &'a Transform)>> {
	let game_object = as_game_object(node)?;
	Ok(game_object.components.iter().find_map(|pair| {
		let component = pair.component.try_find(node.file(), lookup)?;
		if !component.class_id().is_transform() {
			return None;
		}
		Some((component, component.downcast_ref::<Transform>()?))
	}))
}

/// Collect a scene node, its components, and every descendant subtree.
///
/// Output is depth-first pre-order: the node, its resolvable components in
/// stored order, then each child subtree in transform child order. Components
/// that do not resolve are skipped; child links must resolve.
///
/// Recursion depth grows with tree depth, so pathologically deep inputs can
/// exhaust the stack.
pub fn collect_hierarchy<'a, L: ObjectLookup + ?Sized>(root: &'a Object, lookup: &'a L) -> Result<Vec<&'a Object>> {
	let mut out = Vec::new();
	let mut visited = HashSet::new();
	collect_node(root, lookup, &mut out, &mut visited)?;
	Ok(out)
}

fn collect_node<'a, L: ObjectLookup + ?Sized>(node: &'a Object, lookup: &'a L, out: &mut Vec<&'a Object>, visited: &mut HashSet<ObjectInfo>) -> Result<()> {
	let game_object = as_game_object(node)?;
	if !visited.insert(node.info()) {
		return Err(AssetError::HierarchyCycle { path_id: node.path_id() });
	}
	out.push(node);

	let mut transform = None;
	for pair in &game_object.components {
		let Some(component) = pair.component.try_find(node.file(), lookup) else {
			continue;
		};
		out.push(component);
		if transform.is_none() && component.class_id().is_transform() {
			transform = component.downcast_ref::<Transform>().map(|body| (component, body));
		}
	}

	let (transform_object, transform) = transform.ok_or(AssetError::MissingTransform { path_id: node.path_id() })?;
	for child in &transform.children {
		let (child_object, child) = child.find_with_object(transform_object.file(), lookup)?;
		let child_node = child.game_object.erase().find(child_object.file(), lookup)?;
		collect_node(child_node, lookup, out, visited)?;
	}
	Ok(())
}

/// Walk weak parent links up from `node`'s transform.
///
/// Returns the topmost transform and the number of steps taken.
fn walk_to_root<'a, L: ObjectLookup + ?Sized>(node: &'a Object, lookup: &'a L) -> Result<(&'a Object, &'a Transform, usize)> {
	let (mut object, mut transform) = transform_of(node, lookup)?.ok_or(AssetError::MissingTransform { path_id: node.path_id() })?;
	let mut visited = HashSet::from([object.info()]);
	let mut depth = 0;

	while let Some((parent_object, parent)) = transform.father.try_find_with_object(object.file(), lookup) {
		if !visited.insert(parent_object.info()) {
			return Err(AssetError::ParentCycle {
				path_id: parent_object.path_id(),
			});
		}
		object = parent_object;
		transform = parent;
		depth += 1;
	}

	Ok((object, transform, depth))
}

/// Scene node owning the topmost transform above `node`; `node` itself for a root.
pub fn get_root<'a, L: ObjectLookup + ?Sized>(node: &'a Object, lookup: &'a L) -> Result<&'a Object> {
	let (object, transform, _) = walk_to_root(node, lookup)?;
	transform.game_object.erase().find(object.file(), lookup)
}

/// Number of parent steps from `node` to its root (`0` for a root).
pub fn get_root_depth<'a, L: ObjectLookup + ?Sized>(node: &'a Object, lookup: &'a L) -> Result<usize> {
	let (_, _, depth) = walk_to_root(node, lookup)?;
	Ok(depth)
}
