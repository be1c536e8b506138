//! Generation engine
//!
//! Walks the registry in order and, for every category whose target file
//! exists, generates the block and appends it. Categories are processed one
//! at a time; a missing target is reported through [`RunEvent::Missing`] and
//! skipped, a write failure ends the run.

use crate::{
    appender::{AppendOutcome, BlockSink, FileAppender},
    config::NumberingMode,
    numbering::NumberingScheme,
    registry::{CategoryEntry, CategoryRegistry},
    templates,
    types::{Category, CategoryOutcome, GeneratedBlock, GenerationReport, OutcomeStatus},
    Result,
};
use std::path::Path;

/// Per-run switches
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunOptions {
    /// Generate but do not write
    pub dry_run: bool,
    /// Restrict the run to these categories (empty means all)
    pub only: Vec<Category>,
}

impl RunOptions {
    fn includes(&self, category: Category) -> bool {
        self.only.is_empty() || self.only.contains(&category)
    }
}

/// Progress notifications, in the order they happen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunEvent<'a> {
    /// About to generate `count` tests for an existing target
    Generating { category: Category, count: usize, target: &'a Path },
    /// Block appended
    Appended { category: Category, count: usize, target: &'a Path },
    /// Target file absent; category skipped
    Missing { category: Category, target: &'a Path },
    /// Dry run: the text that would have been appended
    Preview { category: Category, target: &'a Path, block: &'a str },
}

/// Orchestrates registry, templates and appender
#[derive(Debug)]
pub struct GenerationEngine<S> {
    registry: CategoryRegistry,
    appender: FileAppender<S>,
    options: RunOptions,
}

impl<S: BlockSink> GenerationEngine<S> {
    pub fn new(registry: CategoryRegistry, sink: S) -> Self {
        Self {
            registry,
            appender: FileAppender::new(sink),
            options: RunOptions::default(),
        }
    }

    pub fn with_options(mut self, options: RunOptions) -> Self {
        self.options = options;
        self
    }

    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    pub fn sink(&self) -> &S {
        self.appender.sink()
    }

    /// Run without observing progress
    pub fn run(&mut self) -> Result<GenerationReport> {
        self.run_with(|_| {})
    }

    /// Run, reporting each step to `on_event`
    pub fn run_with<F>(&mut self, mut on_event: F) -> Result<GenerationReport>
    where
        F: FnMut(&RunEvent<'_>),
    {
        let mut report = GenerationReport::default();
        let entries: Vec<CategoryEntry> = self
            .registry
            .entries()
            .iter()
            .filter(|entry| self.options.includes(entry.category))
            .cloned()
            .collect();

        for entry in entries {
            let outcome = self.process(&entry, &mut on_event)?;
            report.push(outcome);
        }

        tracing::info!(
            categories = report.categories.len(),
            tests_added = report.tests_added,
            "generation finished"
        );
        Ok(report)
    }

    /// Numbering for `entry`, honoring the registry's numbering mode
    pub fn numbering_for(&self, entry: &CategoryEntry) -> Result<NumberingScheme> {
        let scheme = entry.numbering();
        match self.registry.numbering_mode() {
            NumberingMode::Fixed => Ok(scheme),
            NumberingMode::ContinueFromFile => {
                let target = self.registry.target_path(entry.category);
                match self.appender.sink().read(&target)? {
                    Some(existing) => scheme.continuing_after(&existing, entry.required_count),
                    None => Ok(scheme),
                }
            }
        }
    }

    fn process<F>(&mut self, entry: &CategoryEntry, on_event: &mut F) -> Result<CategoryOutcome>
    where
        F: FnMut(&RunEvent<'_>),
    {
        let category = entry.category;
        let count = entry.required_count;
        let target = self.registry.target_path(category);

        let skipped = |first_number| CategoryOutcome {
            category,
            target: target.clone(),
            requested: count,
            first_number,
            status: OutcomeStatus::Skipped,
        };

        if !self.appender.target_exists(&target) {
            tracing::info!(%category, target = %target.display(), "target file not found, skipping");
            on_event(&RunEvent::Missing { category, target: &target });
            return Ok(skipped(entry.starting_offset));
        }

        on_event(&RunEvent::Generating { category, count, target: &target });
        let numbering = self.numbering_for(entry)?;
        let block: GeneratedBlock = templates::generate(category, numbering, count);
        let text = block.render();
        tracing::debug!(%category, count, first = numbering.offset(), bytes = text.len(), "generated block");

        let status = if self.options.dry_run {
            on_event(&RunEvent::Preview { category, target: &target, block: &text });
            OutcomeStatus::Previewed
        } else {
            match self.appender.append_block(&target, &text)? {
                AppendOutcome::Appended { bytes } => {
                    tracing::info!(%category, count, bytes, target = %target.display(), "appended tests");
                    on_event(&RunEvent::Appended { category, count, target: &target });
                    OutcomeStatus::Appended
                }
                AppendOutcome::Missing => {
                    tracing::info!(%category, target = %target.display(), "target file disappeared, skipping");
                    on_event(&RunEvent::Missing { category, target: &target });
                    return Ok(skipped(numbering.offset()));
                }
            }
        };

        Ok(CategoryOutcome {
            category,
            target: target.clone(),
            requested: count,
            first_number: numbering.offset(),
            status,
        })
    }
}
