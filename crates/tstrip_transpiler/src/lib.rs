//! tstrip_transpiler: Per-file pipeline orchestration.
//!
//! One file runs the synchronous pipeline scan → parse → emit with its own
//! arena, scanner, parser, and emitter. Batches fan out across files with
//! rayon; the thread-safe interner is the only shared structure, so there
//! is no cross-file mutable state to coordinate.

use std::path::{Path, PathBuf};

use bumpalo::Bump;
use rayon::prelude::*;
use thiserror::Error;
use tstrip_ast::node::LanguageVariant;
use tstrip_core::intern::StringInterner;
use tstrip_diagnostics::DiagnosticCollection;
use tstrip_emitter::Emitter;
use tstrip_parser::{Parser, ParserOptions};

/// Options for a transpile run.
#[derive(Debug, Clone)]
pub struct TranspileOptions {
    /// Force JSX mode on or off. `None` derives it from the file extension
    /// (`.tsx` / `.jsx`).
    pub jsx: Option<bool>,
    /// Token budget for each speculative lookahead during disambiguation.
    pub max_lookahead: usize,
}

impl Default for TranspileOptions {
    fn default() -> Self {
        Self {
            jsx: None,
            max_lookahead: 256,
        }
    }
}

/// The result of transpiling one file.
///
/// On fatal errors the output text is still produced (not discarded) but
/// the result is marked invalid; callers must not treat the text as
/// equivalent JavaScript.
pub struct TranspileOutput {
    pub file_name: String,
    pub js: String,
    pub diagnostics: DiagnosticCollection,
}

impl TranspileOutput {
    pub fn is_valid(&self) -> bool {
        !self.diagnostics.has_errors()
    }
}

#[derive(Debug, Error)]
pub enum TranspileError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Transpile a single source buffer.
pub fn transpile_source(
    file_name: &str,
    source_text: &str,
    options: &TranspileOptions,
) -> TranspileOutput {
    let interner = StringInterner::new();
    transpile_with_interner(&interner, file_name, source_text, options)
}

fn transpile_with_interner(
    interner: &StringInterner,
    file_name: &str,
    source_text: &str,
    options: &TranspileOptions,
) -> TranspileOutput {
    let jsx = options.jsx.unwrap_or_else(|| has_jsx_extension(file_name));
    let variant = if jsx {
        LanguageVariant::Jsx
    } else {
        LanguageVariant::Standard
    };

    let arena = Bump::new();
    let parser = Parser::new(
        &arena,
        interner,
        file_name,
        source_text,
        ParserOptions {
            variant,
            max_lookahead: options.max_lookahead,
        },
    );
    let (source_file, mut diagnostics) = parser.parse_source_file();

    let mut emitter = Emitter::new(interner);
    let js = emitter.emit_source_file(&source_file);

    diagnostics.sort();
    TranspileOutput {
        file_name: file_name.to_string(),
        js,
        diagnostics,
    }
}

/// Transpile a file from disk.
pub fn transpile_file(
    path: &Path,
    options: &TranspileOptions,
) -> Result<TranspileOutput, TranspileError> {
    let interner = StringInterner::new();
    transpile_file_with_interner(&interner, path, options)
}

fn transpile_file_with_interner(
    interner: &StringInterner,
    path: &Path,
    options: &TranspileOptions,
) -> Result<TranspileOutput, TranspileError> {
    let source_text = std::fs::read_to_string(path).map_err(|source| TranspileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(transpile_with_interner(
        interner,
        &path.to_string_lossy(),
        &source_text,
        options,
    ))
}

/// Transpile many files in parallel. Files are independent; results come
/// back in input order.
pub fn transpile_files(
    paths: &[PathBuf],
    options: &TranspileOptions,
) -> Vec<Result<TranspileOutput, TranspileError>> {
    let interner = StringInterner::new();
    paths
        .par_iter()
        .map(|path| transpile_file_with_interner(&interner, path, options))
        .collect()
}

/// Map an input path to its JavaScript output path.
pub fn output_path(input: &Path) -> PathBuf {
    let extension = input
        .extension()
        .map(|e| e.to_string_lossy().to_string())
        .unwrap_or_default();
    let replacement = match extension.as_str() {
        "tsx" | "jsx" => "jsx",
        "mts" => "mjs",
        "cts" => "cjs",
        _ => "js",
    };
    input.with_extension(replacement)
}

fn has_jsx_extension(file_name: &str) -> bool {
    file_name.ends_with(".tsx") || file_name.ends_with(".jsx")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_path_mapping() {
        assert_eq!(output_path(Path::new("a/b.ts")), PathBuf::from("a/b.js"));
        assert_eq!(output_path(Path::new("a/b.tsx")), PathBuf::from("a/b.jsx"));
        assert_eq!(output_path(Path::new("a/b.mts")), PathBuf::from("a/b.mjs"));
        assert_eq!(output_path(Path::new("a/b.cts")), PathBuf::from("a/b.cjs"));
    }

    #[test]
    fn test_jsx_defaults_from_extension() {
        let out = transpile_source("widget.tsx", "const x = <div a=\"1\" />;", &TranspileOptions::default());
        assert!(out.is_valid(), "{:?}", out.diagnostics.diagnostics());
        assert_eq!(out.js, "const x = <div a=\"1\" />;\n");
    }

    #[test]
    fn test_invalid_output_is_flagged_but_kept() {
        let out = transpile_source("bad.ts", "const x = ;", &TranspileOptions::default());
        assert!(!out.is_valid());
        assert!(!out.js.is_empty());
    }
}
