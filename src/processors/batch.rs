// texture-resizer/src/processors/batch.rs
use super::probe::{HighResSample, ResolutionProbe};
use super::Loader;
use crate::core::{
    ConfirmMode, FileOutcome, ImageProcessor, ImageToolError, ProcessConfig, Result, Tally,
};
use crate::utils::{display_name, format_dimensions, has_extension};
use indicatif::{ProgressBar, ProgressStyle};
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    Completed(Tally),
    /// Operator declined to continue; no file was touched.
    Cancelled,
}

pub struct BatchProcessor {
    config: ProcessConfig,
    processor: ImageProcessor,
    probe: ResolutionProbe,
    loader: Loader,
}

impl BatchProcessor {
    pub fn new(config: ProcessConfig) -> Result<Self> {
        config.validate()?;

        let processor = ImageProcessor::new(&config);
        let probe = ResolutionProbe::new(config.high_res_threshold, config.sample_size);

        Ok(Self {
            config,
            processor,
            probe,
            loader: Loader::new(),
        })
    }

    /// Whole pipeline. `confirm` is only called when the probe finds no
    /// high-resolution file and the config asks for a prompt.
    pub fn run<F>(&self, confirm: F) -> Result<RunOutcome>
    where
        F: FnOnce() -> io::Result<bool>,
    {
        self.validate_source()?;
        let paths = self.collect_image_paths()?;

        println!(
            "Found {} {} files...",
            paths.len(),
            self.config.extension.to_uppercase()
        );
        println!("Source: {}", self.config.source_dir.display());
        println!("Target: {}\n", self.config.target_dir.display());

        match self.probe(&paths) {
            Some(sample) => println!(
                "Found 4K file: {} ({})",
                sample.name(),
                format_dimensions((sample.width, sample.height))
            ),
            None => {
                println!("⚠️  Warning: No 4K files detected in source directory.");
                println!(
                    "   Current files appear to be {}x{} or smaller.",
                    self.config.max_size, self.config.max_size
                );
                println!("   Please specify the correct path to your original 4K textures.\n");

                if self.config.confirm == ConfirmMode::Prompt && !confirm()? {
                    log::info!("Run cancelled at confirmation prompt");
                    return Ok(RunOutcome::Cancelled);
                }
            }
        }

        let tally = self.process_files(&paths)?;
        Ok(RunOutcome::Completed(tally))
    }

    pub fn validate_source(&self) -> Result<()> {
        let dir = &self.config.source_dir;
        if !dir.is_dir() {
            return Err(ImageToolError::DirectoryNotFound(dir.clone()));
        }
        Ok(())
    }

    /// Direct children only, sorted by name.
    pub fn collect_image_paths(&self) -> Result<Vec<PathBuf>> {
        let dir = &self.config.source_dir;

        let paths: Vec<PathBuf> = WalkDir::new(dir)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    log::warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter(|entry| has_extension(entry.path(), &self.config.extension))
            .map(|entry| entry.into_path())
            .collect();

        if paths.is_empty() {
            return Err(ImageToolError::NoFilesFound {
                dir: dir.clone(),
                extension: self.config.extension.trim_start_matches('.').to_string(),
            });
        }

        log::debug!("Collected {} candidates from {}", paths.len(), dir.display());
        Ok(paths)
    }

    pub fn probe(&self, paths: &[PathBuf]) -> Option<HighResSample> {
        self.probe.find_high_res(paths)
    }

    /// Sequential main loop. Per-file failures are reported and counted, never
    /// propagated; only failing to create the target directory aborts.
    pub fn process_files(&self, paths: &[PathBuf]) -> Result<Tally> {
        std::fs::create_dir_all(&self.config.target_dir)?;

        let pb = self.create_progress_bar(paths.len());
        let mut tally = Tally::default();

        for input_path in paths {
            let name = display_name(input_path);
            pb.set_message(name.clone());

            let outcome = self.process_one(input_path, &pb);
            match &outcome {
                Ok(FileOutcome::Skipped { width, height }) => pb.suspend(|| {
                    println!(
                        "✓ {}: Already {} (no resize needed)",
                        name,
                        format_dimensions((*width, *height))
                    )
                }),
                Ok(FileOutcome::Resized { to, .. }) => pb.suspend(|| {
                    println!("✓ {}: Resized to {}", name, format_dimensions(*to))
                }),
                Err(e) => {
                    log::warn!("Failed to process {}: {}", input_path.display(), e);
                    pb.suspend(|| println!("✗ Error processing {}: {}", name, e));
                }
            }

            tally.record(&outcome);
            pb.inc(1);
        }

        pb.finish_and_clear();
        Ok(tally)
    }

    fn process_one(&self, input_path: &Path, pb: &ProgressBar) -> Result<FileOutcome> {
        let output_path = self.config.target_path_for(input_path)?;

        // Header read first so the "Resizing" line precedes the slow part.
        if let Ok(dims) = self.loader.dimensions(input_path) {
            if self.processor.resizer().needs_resize(dims.0, dims.1) {
                pb.suspend(|| {
                    println!(
                        "Resizing {}: {} → max {}px...",
                        display_name(input_path),
                        format_dimensions(dims),
                        self.config.max_size
                    )
                });
            }
        }

        self.processor.process(input_path, &output_path)
    }

    fn create_progress_bar(&self, total: usize) -> ProgressBar {
        let pb = ProgressBar::new(total as u64);
        let style = ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
        )
        .map(|style| style.progress_chars("#>-"))
        .unwrap_or_else(|_| ProgressStyle::default_bar());
        pb.set_style(style);
        pb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn png(dir: &Path, name: &str, w: u32, h: u32) {
        RgbaImage::new(w, h).save(dir.join(name)).unwrap();
    }

    fn batch(dir: &Path, max: u32) -> BatchProcessor {
        let config = ProcessConfig {
            optimize_png: false,
            ..ProcessConfig::in_place(dir)
        }
        .with_max_size(max)
        .with_confirm(ConfirmMode::AssumeYes);
        BatchProcessor::new(config).unwrap()
    }

    #[test]
    fn enumeration_is_flat_sorted_and_case_insensitive() {
        let dir = tempfile::tempdir().unwrap();
        png(dir.path(), "b.PNG", 2, 2);
        png(dir.path(), "a.png", 2, 2);
        std::fs::write(dir.path().join("notes.txt"), "x").unwrap();
        std::fs::create_dir(dir.path().join("nested")).unwrap();
        png(&dir.path().join("nested"), "deep.png", 2, 2);

        let names: Vec<String> = batch(dir.path(), 8)
            .collect_image_paths()
            .unwrap()
            .iter()
            .map(|p| display_name(p))
            .collect();
        assert_eq!(names, vec!["a.png", "b.PNG"]);
    }

    #[test]
    fn missing_directory_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let gone = dir.path().join("gone");
        let err = batch(&gone, 8).validate_source().unwrap_err();
        assert!(matches!(err, ImageToolError::DirectoryNotFound(p) if p == gone));
    }

    #[test]
    fn a_file_is_not_a_source_directory() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("a.png");
        png(dir.path(), "a.png", 2, 2);
        assert!(batch(&file, 8).validate_source().is_err());
    }

    #[test]
    fn empty_directory_has_no_files() {
        let dir = tempfile::tempdir().unwrap();
        let err = batch(dir.path(), 8).collect_image_paths().unwrap_err();
        assert!(matches!(err, ImageToolError::NoFilesFound { ref extension, .. } if extension == "png"));
        assert_eq!(err.to_string(), format!("No PNG files found in {}", dir.path().display()));
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        let config = ProcessConfig::default().with_max_size(0);
        assert!(BatchProcessor::new(config).is_err());
    }

    #[test]
    fn prompt_is_bypassed_when_assuming_yes() {
        let dir = tempfile::tempdir().unwrap();
        png(dir.path(), "a.png", 4, 4);

        let outcome = batch(dir.path(), 8)
            .run(|| panic!("confirmation must not be requested"))
            .unwrap();
        assert_eq!(
            outcome,
            RunOutcome::Completed(Tally {
                resized: 0,
                skipped: 1,
                errored: 0
            })
        );
    }
}
