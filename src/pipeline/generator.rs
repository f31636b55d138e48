/*!
 * Pipeline orchestrator coordinating the four generation stages.
 *
 * Runs splitter, template parameterizer, translator, and assembler in
 * strict sequence over one markup document. Any stage failure aborts the
 * run with no output; the caller only writes the generated header when
 * `generate` returns successfully, so a failed run never leaves a
 * partial output file behind.
 */

use std::time::Instant;

use log::{debug, info};

use crate::errors::AppError;
use crate::region::Region;
use crate::table::TableStore;

use super::assembler;
use super::splitter;
use super::template;
use super::translator::Translator;

/// Configuration for the generation pipeline.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Fixed source language code, emitted as the default branch
    pub source_language: String,

    /// Required prefix of region marker names
    pub marker_prefix: String,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            source_language: "en".to_string(),
            marker_prefix: "HTTP_".to_string(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new pipeline configuration.
    pub fn new(source_language: &str, marker_prefix: &str) -> Self {
        Self {
            source_language: source_language.to_string(),
            marker_prefix: marker_prefix.to_string(),
        }
    }
}

/// The four-stage generation pipeline over one markup document
pub struct Generator<'a> {
    /// Pipeline configuration
    config: GeneratorConfig,

    /// Injected translation table persistence
    store: &'a dyn TableStore,
}

impl<'a> Generator<'a> {
    /// Create a generator with the given configuration and table store.
    pub fn new(config: GeneratorConfig, store: &'a dyn TableStore) -> Self {
        Generator { config, store }
    }

    /// Run the full pipeline over `markup` and return the generated
    /// header text.
    pub fn generate(&self, markup: &str) -> Result<String, AppError> {
        if markup.trim().is_empty() {
            return Err(AppError::File(
                "markup input is empty, nothing to generate".to_string(),
            ));
        }

        let started = Instant::now();

        let regions = splitter::split(markup, &self.config.marker_prefix)?;
        debug!("split {} region(s) from markup", regions.len());

        let regions: Vec<Region> = regions.into_iter().map(template::parameterize).collect();

        let translator = Translator::new(self.store, &self.config.source_language);
        let localized = translator.translate(&regions)?;
        debug!(
            "expanded into {} localized region(s) including fragments",
            localized.len()
        );

        let output = assembler::assemble(&localized, &self.config.source_language)?;

        info!(
            "generated {} definitions block(s) from {} region(s) in {:?}",
            localized.len(),
            regions.len(),
            started.elapsed()
        );

        Ok(output)
    }
}
