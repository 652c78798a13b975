use clap::{Parser, Subcommand};
use decomment_core::{DEFAULT_JAVA_ROOT, DEFAULT_JAVASCRIPT_ROOT, ScanGroup, StripOptions, StripStrategy};
use std::path::PathBuf;

#[derive(Debug, Parser, Clone)]
pub struct DecommentArgs {
    #[clap(
        long,
        value_name = "DIR",
        default_value = DEFAULT_JAVA_ROOT,
        help = "Root of the Java source tree (*.java)"
    )]
    pub java_root: PathBuf,

    #[clap(
        long,
        value_name = "DIR",
        default_value = DEFAULT_JAVASCRIPT_ROOT,
        help = "Root of the JavaScript source tree (*.js, *.jsx)"
    )]
    pub js_root: PathBuf,

    #[clap(
        long,
        help = "Skip comment markers inside string, character and template literals"
    )]
    pub literal_aware: bool,

    #[clap(long, help = "Report what would change without writing any file")]
    pub dry_run: bool,

    #[clap( long, value_name = "PATTERN", help = "Glob pattern, relative to each root, for files/directories to exclude [multiple allowed]", action = clap::ArgAction::Append )]
    pub exclude: Vec<String>,

    #[clap(short, long, action = clap::ArgAction::Count, help = "Increase log verbosity (-v info, -vv debug, -vvv trace)")]
    pub verbose: u8,
}

impl DecommentArgs {
    pub fn scan_groups(&self) -> Vec<ScanGroup> {
        vec![
            ScanGroup::java(self.java_root.clone()),
            ScanGroup::javascript(self.js_root.clone()),
        ]
    }

    pub fn strip_options(&self) -> StripOptions {
        StripOptions {
            strategy: if self.literal_aware {
                StripStrategy::LiteralAware
            } else {
                StripStrategy::Pattern
            },
            dry_run: self.dry_run,
            exclude: self.exclude.clone(),
        }
    }
}

#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    #[clap(about = "Generate shell completion scripts")]
    Completion(CompletionArgs),
}

#[derive(Debug, Parser, Clone)]
pub struct CompletionArgs {
    #[clap(value_parser = clap::value_parser!(clap_complete::Shell))]
    pub shell: clap_complete::Shell,
}

#[derive(Debug, Parser, Clone)]
#[clap(
    name = "decomment",
    version,
    about = "Strip // and /* */ comments from Java and JavaScript sources in place",
    long_about = "Walks the Java and JavaScript source trees and removes line and block comments,\noverwriting each file in place. There is no backup: commit your work first.",
    propagate_version = true
)]
pub struct CliArgs {
    #[clap(subcommand)]
    pub command: Option<Command>,

    #[clap(flatten)]
    pub main_opts: DecommentArgs,
}
