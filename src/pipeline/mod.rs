/*!
 * The four-stage generation pipeline.
 *
 * Stages run strictly in order; each consumes the previous stage's
 * complete output:
 * 1. **Splitter**: extract named regions between paired comment markers
 * 2. **Template**: split placeholder-bearing regions into chunks/params
 * 3. **Translator**: resolve phrases and replicate regions per language
 * 4. **Assembler**: emit guarded PROGMEM constant and macro definitions
 *
 * The whole pipeline is synchronous and runs to completion once per
 * build invocation; the translator's table read/write is the only side
 * effect.
 */

pub mod assembler;
pub mod generator;
pub mod splitter;
pub mod template;
pub mod translator;

// Re-export types used externally
pub use generator::{Generator, GeneratorConfig};
pub use translator::Translator;
