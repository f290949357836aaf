//! Flash save files on disk

use std::path::Path;

use anyhow::{Context, Result, bail};
use hoenn_codec::{GameVersion, SaveFile};

/// Smallest flash size the games write
const FLASH_64K: usize = 0x1_0000;

/// Load a `.sav` file and pick its live slot.
///
/// Section checksums are verified; a mismatch is logged rather than
/// rejected, since emulator saves often carry stale padding sections.
/// Returns the version guessed from the contents alongside the save.
pub fn load_save(path: impl AsRef<Path>) -> Result<(SaveFile, GameVersion)> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).with_context(|| format!("Failed to read save {}", path.display()))?;
    if bytes.len() < FLASH_64K {
        bail!("{} is {} bytes, too small for a flash save", path.display(), bytes.len());
    }

    let save = SaveFile::parse(&bytes).with_context(|| format!("Failed to parse save {}", path.display()))?;
    if let Err(e) = save.verify() {
        tracing::warn!(path = %path.display(), error = %e, "save checksum mismatch");
    }
    let version = save.guess_version();
    tracing::debug!(
        path = %path.display(),
        slot = save.active_slot,
        save_index = save.save_index,
        %version,
        "loaded save"
    );
    Ok((save, version))
}
