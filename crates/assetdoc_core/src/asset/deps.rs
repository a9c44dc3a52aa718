use std::collections::{HashSet, VecDeque};

use crate::asset::{Object, ObjectLookup, Result};

/// Policy for non-null references that fail to resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingMode {
	/// Omit silently.
	Skip,
	/// Omit and emit a warning.
	#[default]
	Log,
	/// Yield the resolution error.
	Error,
}

impl MissingMode {
	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Skip => "skip",
			Self::Log => "log",
			Self::Error => "error",
		}
	}
}

/// Runtime switches for dependency enumeration.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyOptions {
	/// What to do with references that do not resolve.
	pub on_missing: MissingMode,
}

/// Lazily resolve every reference held by `object`, in field order.
///
/// Null references are omitted. Other misses follow `options.on_missing`.
/// Duplicates are not suppressed.
pub fn fetch_dependencies<'a, L: ObjectLookup + ?Sized>(
	object: &'a Object,
	lookup: &'a L,
	options: DependencyOptions,
) -> impl Iterator<Item = Result<&'a Object>> + 'a {
	let file = object.file();
	object.references().filter_map(move |reference| {
		if reference.is_null() {
			return None;
		}
		match reference.find(file, lookup) {
			Ok(found) => Some(Ok(found)),
			Err(err) => match options.on_missing {
				MissingMode::Skip => None,
				MissingMode::Log => {
					log::warn!("{object} ({}): unresolved dependency {reference:?}: {err}", object.path_id());
					None
				}
				MissingMode::Error => Some(Err(err)),
			},
		}
	})
}

/// Every object transitively reachable from `root`, `root` first.
///
/// Breadth-first in order of first discovery; each object appears once.
pub fn collect_reachable<'a, L: ObjectLookup + ?Sized>(root: &'a Object, lookup: &'a L, options: DependencyOptions) -> Result<Vec<&'a Object>> {
	let mut seen = HashSet::from([root.info()]);
	let mut out = vec![root];
	let mut queue = VecDeque::from([root]);

	while let Some(object) = queue.pop_front() {
		for dependency in fetch_dependencies(object, lookup, options) {
			let dependency = dependency?;
			if seen.insert(dependency.info()) {
				out.push(dependency);
				queue.push_back(dependency);
			}
		}
	}

	Ok(out)
}
