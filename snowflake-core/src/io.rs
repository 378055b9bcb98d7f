use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Reads a whole file, returning `None` if it does not exist.
pub(crate) fn read_if_exists<P: AsRef<Path>>(filename: P) -> io::Result<Option<Vec<u8>>> {
	match fs::read(filename) {
		Ok(bytes) => Ok(Some(bytes)),
		Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
		Err(e) => Err(e),
	}
}

/// Builds the path of a temporary sibling file used for atomic writes.
///
/// Example:
/// `data/snowflakes.bin` → `data/snowflakes.bin.tmp`
pub(crate) fn build_temporary_path<P: AsRef<Path>>(target: P) -> io::Result<PathBuf> {
	let target = target.as_ref();

	let file_name = target
		.file_name()
		.ok_or_else(|| io::Error::new(io::ErrorKind::InvalidInput, "Target path has no filename"))?;

	let mut temporary = file_name.to_os_string();
	temporary.push(".tmp");

	Ok(target.with_file_name(temporary))
}

/// Replaces the contents of `target` with `bytes`.
///
/// - Writes to a temporary sibling, then renames it over the target
/// - Creates missing parent directories
///
/// Readers either see the previous contents or the new ones, never a
/// partially written file.
pub(crate) fn write_atomically<P: AsRef<Path>>(target: P, bytes: &[u8]) -> io::Result<()> {
	let target = target.as_ref();

	if let Some(parent) = target.parent().filter(|p| !p.as_os_str().is_empty()) {
		fs::create_dir_all(parent)?;
	}

	let temporary = build_temporary_path(target)?;
	fs::write(&temporary, bytes)?;
	fs::rename(&temporary, target)
}
