/*!
 * # flashgen
 *
 * A build-time generator that turns an annotated HTML document into
 * conditionally-compiled C/C++ string constants for embedded targets.
 * String literals are emitted as PROGMEM constants together with macros
 * that assemble parameterized strings at the call site, wrapped in a
 * compile-time language-selection chain.
 *
 * ## Pipeline
 *
 * The generator is a strict four-stage pipeline; each stage consumes the
 * previous stage's complete output:
 *
 * 1. `pipeline::splitter` — extract named regions between paired
 *    `<!-- NAME -->` / `<!-- /NAME -->` comment markers
 * 2. `pipeline::template` — split `{param}`-bearing regions into literal
 *    chunks plus an ordered parameter list
 * 3. `pipeline::translator` — resolve `[[phrase]]` markers against the
 *    persisted translation table and replicate regions per language
 * 4. `pipeline::assembler` — emit the guarded PROGMEM constant/macro
 *    definitions, source language last as the default branch
 *
 * ## Architecture
 *
 * - `app_config`: Configuration management
 * - `region`: Region data model shared by the pipeline stages
 * - `table`: Translation table model and persistence (`TableStore`)
 * - `pipeline`: The four pipeline stages plus the orchestrating `Generator`
 * - `file_utils`: File system operations
 * - `errors`: Custom error types for the application
 *
 * ## License
 *
 * This project is licensed under the MIT License
 */

// Global lints configuration
// These lints will be allowed but not auto-fixed
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::redundant_closure_for_method_calls)]

// Public modules
pub mod app_config;
pub mod errors;
pub mod file_utils;
pub mod pipeline;
pub mod region;
pub mod table;

// Re-export main types for easier usage
pub use app_config::Config;
pub use errors::{AppError, AssembleError, SplitError, TableError};
pub use pipeline::{Generator, GeneratorConfig};
pub use region::{LocalizedRegion, Region, RegionBody};
pub use table::{JsonFileStore, MemoryStore, TableStore, TranslationTable};
