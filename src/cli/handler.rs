// Fri Oct 16 2026 - Alex

use super::args::{Args, Command, FingerprintsArgs, MatchArgs, PatchArgs};
use crate::config::PatchConfig;
use crate::fingerprint::{FingerprintDatabase, FingerprintMatcher, ResolutionCache};
use crate::injection::PlayerResponseHook;
use crate::method::MethodPool;
use crate::output::{JsonSerializer, MatchOutput, PatchOutput, ReportFormat, ReportGenerator};
use anyhow::Context;
use colored::Colorize;

pub struct CommandHandler {
    quiet: bool,
}

impl CommandHandler {
    pub fn new() -> Self {
        Self { quiet: false }
    }

    pub fn execute(mut self, args: Args) -> anyhow::Result<()> {
        self.quiet = args.quiet;
        if args.no_color {
            colored::control::set_override(false);
        }

        self.setup_logging(&args)?;

        match args.command {
            Command::Patch(patch_args) => self.handle_patch(patch_args),
            Command::Match(match_args) => self.handle_match(match_args),
            Command::Fingerprints(list_args) => self.handle_fingerprints(list_args),
        }
    }

    fn setup_logging(&self, args: &Args) -> anyhow::Result<()> {
        let level = match args.log_level.to_lowercase().as_str() {
            "trace" => log::LevelFilter::Trace,
            "debug" => log::LevelFilter::Debug,
            "info" => log::LevelFilter::Info,
            "warn" => log::LevelFilter::Warn,
            "error" => log::LevelFilter::Error,
            "off" => log::LevelFilter::Off,
            _ => log::LevelFilter::Info,
        };

        env_logger::Builder::new()
            .filter_level(level)
            .format_timestamp(None)
            .try_init()
            .context("Failed to initialize logger")?;

        Ok(())
    }

    fn load_database(&self, config: Option<&std::path::Path>) -> anyhow::Result<FingerprintDatabase> {
        match config {
            Some(path) => {
                let config = PatchConfig::load(path)
                    .with_context(|| format!("Failed to load config {:?}", path))?;
                Ok(config.database())
            }
            None => Ok(FingerprintDatabase::with_default_fingerprints()),
        }
    }

    fn handle_patch(&self, args: PatchArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let config = PatchConfig::load(&args.config)
            .with_context(|| format!("Failed to load config {:?}", args.config))?;
        config.validate()?;

        let mut pool = MethodPool::load(&args.pool)
            .with_context(|| format!("Failed to load method pool {:?}", args.pool))?;

        let db = config.database();
        let signature = config.target_signature(&db)?;

        let cache = ResolutionCache::with_matcher(FingerprintMatcher::new().with_parallel(config.parallel_scan));
        let mut patch = PlayerResponseHook::new(config.layout);
        patch
            .resolve(&signature, &pool, &cache)
            .with_context(|| format!("Failed to resolve fingerprint '{}'", signature.name()))?;

        config.register_hooks(&mut patch)?;
        let report = patch.finalize(&mut pool)?;

        let target = patch
            .target()
            .and_then(|t| pool.get(t.method))
            .ok_or_else(|| anyhow::anyhow!("Resolved target vanished from the pool"))?;
        let output = PatchOutput::new(signature.name(), report, target);

        JsonSerializer::new()
            .with_pretty_print(!args.compact)
            .serialize_to_file(&output, &args.output)?;

        if let Some(path) = &args.markdown_output {
            ReportGenerator::new(ReportFormat::Markdown).generate_to_file(&output, path)?;
        }

        if let Some(path) = &args.pool_output {
            std::fs::write(path, pool.to_json()?)
                .with_context(|| format!("Failed to write method pool {:?}", path))?;
        }

        if !self.quiet {
            println!(
                "{} Hooked {}",
                "[+]".green(),
                output.report.method.cyan()
            );
            println!(
                "{} {} hook(s), {} instruction(s) added, remap {}",
                "[+]".green(),
                output.report.hooks,
                output.report.instructions_added,
                if output.report.registers.needs_remap { "yes".yellow() } else { "no".normal() }
            );
            println!("{} Output written to: {}", "[+]".green(), args.output.display());
        }

        Ok(())
    }

    fn handle_match(&self, args: MatchArgs) -> anyhow::Result<()> {
        args.validate().map_err(|e| anyhow::anyhow!(e))?;

        let db = self.load_database(args.config.as_deref())?;
        let signature = db
            .get(&args.fingerprint)
            .ok_or_else(|| anyhow::anyhow!("Unknown fingerprint: {}", args.fingerprint))?;

        let pool = MethodPool::load(&args.pool)
            .with_context(|| format!("Failed to load method pool {:?}", args.pool))?;

        let matcher = FingerprintMatcher::new().with_parallel(!args.sequential);
        let mut output = MatchOutput::new(signature.name());
        for id in matcher.find_all(signature, &pool) {
            if let Some(method) = pool.get(id) {
                output.push(id, method);
            }
        }

        if self.quiet {
            println!("{}", JsonSerializer::new().serialize(&output)?);
            return Ok(());
        }

        let status = match output.matches.len() {
            0 => "no match".red(),
            1 => "unique".green(),
            _ => "ambiguous".yellow(),
        };
        println!("{} {} ({})", "Fingerprint".bold(), signature.name().cyan(), status);
        for entry in &output.matches {
            println!("  #{:<6} {} [{} instructions]", entry.id, entry.method, entry.instructions);
        }

        Ok(())
    }

    fn handle_fingerprints(&self, args: FingerprintsArgs) -> anyhow::Result<()> {
        let db = self.load_database(args.config.as_deref())?;

        for (name, entry) in db.sorted() {
            if let Some(category) = &args.category {
                if &entry.category != category {
                    continue;
                }
            }

            if self.quiet {
                println!("{}", name);
                continue;
            }

            println!("{} [{}]", name.cyan(), entry.category.yellow());
            if let Some(description) = &entry.description {
                println!("    {}", description);
            }
            println!("    {}", entry.signature.to_string().dimmed());
        }

        Ok(())
    }
}

impl Default for CommandHandler {
    fn default() -> Self {
        Self::new()
    }
}
