use std::fs;
use std::path::{Path, PathBuf};

use pagemark_core::{document_to_markdown, Document};

use crate::prelude::{eprintln, println, *};

#[derive(Debug, clap::Args, serde::Serialize, serde::Deserialize, Clone)]
pub struct ConvertOptions {
    /// Path to the page dump (JSON: `{ "pages": [...] }` with
    /// pdfplumber-style character records)
    pub input: PathBuf,

    /// Output path (default: the input path with an `.md` extension)
    #[arg(short, long, env = "PAGEMARK_OUTPUT")]
    pub output: Option<PathBuf>,

    /// Write the Markdown to stdout instead of a file
    #[arg(long)]
    pub stdout: bool,
}

pub fn convert(options: ConvertOptions) -> Result<()> {
    let document = load_document(&options.input)?;
    log::info!(
        "loaded {} page(s), {} table(s) from {}",
        document.pages.len(),
        document.pages.iter().map(|p| p.tables.len()).sum::<usize>(),
        options.input.display()
    );

    let markdown = document_to_markdown(&document);

    if options.stdout {
        println!("{}", markdown);
        return Ok(());
    }

    let output = options
        .output
        .unwrap_or_else(|| options.input.with_extension("md"));
    eprintln!(
        "Converting: {} -> {}",
        options.input.display(),
        output.display()
    );
    fs::write(&output, markdown).wrap_err_with(|| f!("Failed to write {}", output.display()))?;
    eprintln!("Done: wrote {}", output.display());

    Ok(())
}

fn load_document(path: &Path) -> Result<Document> {
    let raw =
        fs::read_to_string(path).map_err(|_| Error::InputNotFound(path.display().to_string()))?;
    let document: Document =
        serde_json::from_str(&raw).map_err(|e| Error::InvalidDump(e.to_string()))?;
    Ok(document)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write as _;

    #[test]
    fn load_document_reads_pdfplumber_vocabulary() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"pages": [{{"chars": [{{"text": "A", "x0": 72.0, "top": 96.0, "size": 12.0, "fontname": "Helvetica"}}], "tables": [[["H"], ["x"]]]}}]}}"#
        )
        .unwrap();

        let document = load_document(file.path()).unwrap();
        assert_eq!(document.pages.len(), 1);
        assert_eq!(document.pages[0].chars[0].text, "A");
        assert_eq!(document.pages[0].tables[0].len(), 2);
    }

    #[test]
    fn load_document_rejects_missing_files() {
        let err = load_document(Path::new("/nonexistent/dump.json")).unwrap_err();
        assert!(err.to_string().contains("Input not found"));
    }

    #[test]
    fn load_document_rejects_malformed_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        let err = load_document(file.path()).unwrap_err();
        assert!(err.to_string().contains("Invalid page dump"));
    }
}
