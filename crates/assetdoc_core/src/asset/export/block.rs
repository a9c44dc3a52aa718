use std::fmt::{self, Write as _};

/// Tab-indented line sink for block-format text.
#[derive(Debug, Clone, Default)]
pub struct BlockWriter {
	out: String,
	depth: usize,
}

impl BlockWriter {
	/// Writer whose lines start at `depth` tabs.
	pub fn new(depth: usize) -> Self {
		Self { out: String::new(), depth }
	}

	/// Current tab depth.
	pub fn depth(&self) -> usize {
		self.depth
	}

	/// Write one indented line.
	pub fn line(&mut self, args: fmt::Arguments<'_>) {
		for _ in 0..self.depth {
			self.out.push('\t');
		}
		// Writing into a String cannot fail.
		let _ = self.out.write_fmt(args);
		self.out.push('\n');
	}

	/// Write `name {` and indent following lines.
	pub fn open_group(&mut self, name: &str) {
		self.line(format_args!("{name} {{"));
		self.depth += 1;
	}

	/// Dedent and write the closing brace.
	pub fn close_group(&mut self) {
		self.depth = self.depth.saturating_sub(1);
		self.line(format_args!("}}"));
	}

	/// Return whether nothing has been written.
	pub fn is_empty(&self) -> bool {
		self.out.is_empty()
	}

	/// Finish and return the text.
	pub fn finish(self) -> String {
		self.out
	}
}
