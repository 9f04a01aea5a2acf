mod model;
mod parser;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing::info;

use model::ProfileDocument;

#[derive(Parser)]
#[command(name = "cv_extract", about = "Structured profile extraction from LaTeX CV files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse CV files and write one JSON document per input
    Parse {
        /// Input .tex files
        #[arg(required = true)]
        inputs: Vec<PathBuf>,
        /// Output directory (default: next to each input)
        #[arg(short, long)]
        out_dir: Option<PathBuf>,
    },
    /// Print a human-readable overview of one CV
    Summary {
        /// Input .tex file
        input: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Parse { inputs, out_dir } => {
            let results: Vec<anyhow::Result<PathBuf>> = inputs
                .par_iter()
                .map(|input| parse_one(input, out_dir.as_deref()))
                .collect();

            let mut failed = 0usize;
            for (input, result) in inputs.iter().zip(results) {
                match result {
                    Ok(path) => println!("{} -> {}", input.display(), path.display()),
                    Err(err) => {
                        failed += 1;
                        eprintln!("{}: {:#}", input.display(), err);
                    }
                }
            }
            if failed > 0 {
                anyhow::bail!("{} of {} inputs failed", failed, inputs.len());
            }
            Ok(())
        }
        Commands::Summary { input } => {
            let doc = load_and_parse(&input)?;
            print_summary(&doc);
            Ok(())
        }
    }
}

fn load_and_parse(input: &Path) -> anyhow::Result<ProfileDocument> {
    let text = fs::read_to_string(input)
        .with_context(|| format!("CV file not readable at {}", input.display()))?;
    let origin = input.file_name().and_then(|n| n.to_str());
    info!(input = %input.display(), "parsing CV");
    Ok(parser::parse_document(&text, origin))
}

fn parse_one(input: &Path, out_dir: Option<&Path>) -> anyhow::Result<PathBuf> {
    let doc = load_and_parse(input)?;

    let mut out_path = match out_dir {
        Some(dir) => dir.join(input.file_name().unwrap_or_default()),
        None => input.to_path_buf(),
    };
    out_path.set_extension("json");
    if let Some(dir) = out_path.parent() {
        fs::create_dir_all(dir)
            .with_context(|| format!("cannot create output directory {}", dir.display()))?;
    }

    let json = serde_json::to_string_pretty(&doc)?;
    fs::write(&out_path, json)
        .with_context(|| format!("cannot write {}", out_path.display()))?;
    Ok(out_path)
}

fn print_summary(doc: &ProfileDocument) {
    println!("Variant: {:?}", doc.variant);

    println!("\nPersonal:");
    let field = |v: &Option<String>| v.clone().unwrap_or_else(|| "-".into());
    println!("  Name:     {}", field(&doc.personal.full_name));
    println!("  Title:    {}", field(&doc.personal.title));
    println!("  Location: {}", field(&doc.personal.location));
    println!("  Email:    {}", field(&doc.personal.email));
    println!("  GitHub:   {}", field(&doc.github_url));
    println!("  LinkedIn: {}", field(&doc.linkedin_url));

    if !doc.experience.is_empty() {
        println!("\nExperience:");
        for (i, exp) in doc.experience.iter().enumerate() {
            println!(
                "  {}. {} @ {} ({})",
                i + 1,
                exp.position,
                exp.company,
                exp.period
            );
            if !exp.technologies.is_empty() {
                println!("     [{}]", exp.technologies.join(", "));
            }
        }
    }

    if let Some(edu) = doc.primary_education() {
        println!("\nEducation:");
        println!("  {} - {} ({})", edu.degree, edu.institution, edu.period);
        if !edu.gpa.is_empty() {
            println!("  GPA: {}", edu.gpa);
        }
    }

    if !doc.skills.is_empty() {
        println!("\nSkills:");
        for cat in &doc.skills {
            println!("  {}: {}", cat.title, cat.skills.join(", "));
        }
    }

    if !doc.projects.is_empty() {
        println!("\nProjects:");
        for p in &doc.projects {
            println!("  - {}", p.title);
        }
    }

    if !doc.services.is_empty() {
        println!("\nServices:");
        for s in &doc.services {
            println!("  - {}", s.title);
        }
    }

    if !doc.languages.is_empty() {
        println!("\nLanguages:");
        for l in &doc.languages {
            println!("  {}: {}", l.language, l.level);
        }
    }
}
