// Fri Oct 16 2026 - Alex

use crate::output::PatchOutput;
use std::fmt::Write as _;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportFormat {
    Text,
    Markdown,
}

pub struct ReportGenerator {
    format: ReportFormat,
    include_listing: bool,
}

impl ReportGenerator {
    pub fn new(format: ReportFormat) -> Self {
        Self {
            format,
            include_listing: true,
        }
    }

    pub fn with_listing(mut self, include: bool) -> Self {
        self.include_listing = include;
        self
    }

    pub fn generate(&self, output: &PatchOutput) -> String {
        match self.format {
            ReportFormat::Text => self.generate_text(output),
            ReportFormat::Markdown => self.generate_markdown(output),
        }
    }

    pub fn generate_to_file<P: AsRef<Path>>(&self, output: &PatchOutput, path: P) -> std::io::Result<()> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);
        writer.write_all(self.generate(output).as_bytes())?;
        writer.flush()
    }

    fn generate_text(&self, output: &PatchOutput) -> String {
        let report = &output.report;
        let mut text = String::new();

        let _ = writeln!(text, "Player Response Hook Report");
        let _ = writeln!(text, "===========================");
        let _ = writeln!(text);
        let _ = writeln!(text, "Fingerprint:        {}", output.fingerprint);
        let _ = writeln!(text, "Method:             {}", report.method);
        let _ = writeln!(text, "Highest register:   {}", report.registers.highest_needed_register);
        let _ = writeln!(text, "Register remap:     {}", if report.registers.needs_remap { "yes" } else { "no" });
        let _ = writeln!(text, "Hooks:              {}", report.hooks);
        let _ = writeln!(text, "Instructions added: {}", report.instructions_added);
        let _ = writeln!(text);

        let _ = writeln!(text, "Insertion order ({}):", report.insertion_order.len());
        for (idx, hook) in report.insertion_order.iter().enumerate() {
            let _ = writeln!(text, "  {}. {}", idx + 1, hook);
        }

        if self.include_listing {
            let _ = writeln!(text);
            let _ = writeln!(text, "Listing:");
            for (idx, line) in output.listing.iter().enumerate() {
                let _ = writeln!(text, "  {:04}: {}", idx, line);
            }
        }

        text
    }

    fn generate_markdown(&self, output: &PatchOutput) -> String {
        let report = &output.report;
        let mut md = String::new();

        let _ = writeln!(md, "# Player Response Hook Report");
        let _ = writeln!(md);
        let _ = writeln!(md, "| Field | Value |");
        let _ = writeln!(md, "|-------|-------|");
        let _ = writeln!(md, "| Fingerprint | {} |", output.fingerprint);
        let _ = writeln!(md, "| Method | `{}` |", report.method);
        let _ = writeln!(md, "| Highest register | {} |", report.registers.highest_needed_register);
        let _ = writeln!(md, "| Register remap | {} |", report.registers.needs_remap);
        let _ = writeln!(md, "| Hooks | {} |", report.hooks);
        let _ = writeln!(md, "| Instructions added | {} |", report.instructions_added);
        let _ = writeln!(md);

        let _ = writeln!(md, "## Insertion Order");
        let _ = writeln!(md);
        for hook in &report.insertion_order {
            let _ = writeln!(md, "1. `{}`", hook);
        }

        if self.include_listing {
            let _ = writeln!(md);
            let _ = writeln!(md, "## Listing");
            let _ = writeln!(md);
            let _ = writeln!(md, "```smali");
            for line in &output.listing {
                let _ = writeln!(md, "{}", line);
            }
            let _ = writeln!(md, "```");
        }

        md
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bytecode::parse_listing;
    use crate::hooks::HookCategory;
    use crate::injection::PlayerResponseHook;
    use crate::fingerprint::{ResolutionCache, Signature};
    use crate::method::{MethodHandle, MethodPool};

    fn output() -> PatchOutput {
        let params: Vec<String> = (0..13).map(|_| "Ljava/lang/Object;".to_string()).collect();
        let mut pool = MethodPool::from_methods(vec![MethodHandle::new("Lplayer/Builder;", "build", "V")
            .with_parameters(&params)
            .with_register_count(16)
            .with_instructions(parse_listing(&["return-void"]).unwrap())])
        .unwrap();

        let mut patch = PlayerResponseHook::default();
        patch
            .resolve(&Signature::new("Builder").with_return_type("V"), &pool, &ResolutionCache::new())
            .unwrap();
        patch
            .register_hook(HookCategory::VideoId, "Lhooks/H;->onVideoId(Ljava/lang/String;Z)V")
            .unwrap();
        let report = patch.finalize(&mut pool).unwrap();

        let id = patch.target().unwrap().method;
        PatchOutput::new("Builder", report, pool.get(id).unwrap())
    }

    #[test]
    fn test_text_report() {
        let text = ReportGenerator::new(ReportFormat::Text).generate(&output());
        assert!(text.contains("Lplayer/Builder;->build("));
        assert!(text.contains("Register remap:     no"));
        assert!(text.contains("1. Lhooks/H;->onVideoId(Ljava/lang/String;Z)V"));
        assert!(text.contains("0001: return-void"));
    }

    #[test]
    fn test_markdown_without_listing() {
        let md = ReportGenerator::new(ReportFormat::Markdown)
            .with_listing(false)
            .generate(&output());
        assert!(md.starts_with("# Player Response Hook Report"));
        assert!(md.contains("| Hooks | 1 |"));
        assert!(!md.contains("```smali"));
    }
}
