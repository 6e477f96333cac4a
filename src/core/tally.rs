// texture-resizer/src/core/tally.rs
use std::fmt::Write as _;

/// What happened to a single file that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileOutcome {
    Skipped { width: u32, height: u32 },
    Resized { from: (u32, u32), to: (u32, u32) },
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Tally {
    pub resized: usize,
    pub skipped: usize,
    pub errored: usize,
}

impl Tally {
    pub fn record<E>(&mut self, outcome: &std::result::Result<FileOutcome, E>) {
        match outcome {
            Ok(FileOutcome::Resized { .. }) => self.resized += 1,
            Ok(FileOutcome::Skipped { .. }) => self.skipped += 1,
            Err(_) => self.errored += 1,
        }
    }

    pub fn summary(&self, max_size: u32) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "=== Resize Complete ===");
        let _ = writeln!(out, "Resized: {}", self.resized);
        let _ = writeln!(out, "Skipped: {}", self.skipped);
        let _ = writeln!(out, "Errors: {}", self.errored);

        if self.resized > 0 {
            let _ = writeln!(
                out,
                "\n✓ All textures are now {}x{} (down from 4K)",
                max_size, max_size
            );
        }

        out
    }
}
