use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::Deserialize;

/// Crates the domain layer must never depend on
const DOMAIN_FORBIDDEN_DEPS: &[&str] = &["dioxus", "reqwest", "tokio", "gloo-net", "web-sys"];

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    match args.next().as_deref() {
        Some("arch-check") => arch_check(),
        Some(cmd) => anyhow::bail!("Unknown xtask command: {cmd}"),
        None => anyhow::bail!("Usage: cargo xtask <command>\n\nCommands:\n  arch-check"),
    }
}

#[derive(Deserialize)]
struct Metadata {
    packages: Vec<Package>,
    workspace_root: PathBuf,
}

#[derive(Deserialize)]
struct Package {
    name: String,
    dependencies: Vec<Dependency>,
}

#[derive(Deserialize)]
struct Dependency {
    name: String,
}

/// A source rule: files under `dir` must not match `pattern`
struct ImportRule {
    dir: &'static str,
    pattern: &'static str,
    reason: &'static str,
}

const IMPORT_RULES: &[ImportRule] = &[
    ImportRule {
        dir: "crates/domain/src",
        pattern: r"\b(dioxus|reqwest|tokio|gloo_net|web_sys)::",
        reason: "domain stays free of I/O and UI",
    },
    ImportRule {
        dir: "crates/player/src/application",
        pattern: r"crate::(infrastructure|ui|presentation)\b",
        reason: "application depends on ports only",
    },
    ImportRule {
        dir: "crates/player/src/ports",
        pattern: r"crate::(infrastructure|application|ui|presentation)\b",
        reason: "ports depend on the domain only",
    },
];

fn arch_check() -> anyhow::Result<()> {
    let output = std::process::Command::new("cargo")
        .args(["metadata", "--format-version", "1", "--no-deps"])
        .output()
        .context("running cargo metadata")?;

    if !output.status.success() {
        anyhow::bail!("cargo metadata failed")
    }

    let metadata: Metadata =
        serde_json::from_slice(&output.stdout).context("parsing cargo metadata")?;

    let mut violations = Vec::new();

    if let Some(domain) = metadata.packages.iter().find(|p| p.name == "dunder-domain") {
        for dep in &domain.dependencies {
            if DOMAIN_FORBIDDEN_DEPS.contains(&dep.name.as_str()) {
                violations.push(format!("dunder-domain depends on {}", dep.name));
            }
        }
    }

    for rule in IMPORT_RULES {
        let re = regex_lite::Regex::new(rule.pattern).context("compiling import rule")?;
        let dir = metadata.workspace_root.join(rule.dir);
        for file in rust_files(&dir)? {
            let source = std::fs::read_to_string(&file)
                .with_context(|| format!("reading {}", file.display()))?;
            // test modules may reach for in-memory adapters
            let production = source.lines().take_while(|l| l.trim() != "#[cfg(test)]");
            for (line_no, line) in production.enumerate() {
                if re.is_match(line) {
                    violations.push(format!(
                        "{}:{}: {} ({})",
                        file.display(),
                        line_no + 1,
                        line.trim(),
                        rule.reason
                    ));
                }
            }
        }
    }

    if violations.is_empty() {
        println!("arch-check: ok");
        return Ok(());
    }

    for violation in &violations {
        eprintln!("{violation}");
    }
    anyhow::bail!("arch-check found {} violation(s)", violations.len())
}

fn rust_files(dir: &Path) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    if !dir.exists() {
        return Ok(files);
    }
    for entry in std::fs::read_dir(dir).with_context(|| format!("listing {}", dir.display()))? {
        let path = entry?.path();
        if path.is_dir() {
            files.extend(rust_files(&path)?);
        } else if path.extension().is_some_and(|ext| ext == "rs") {
            files.push(path);
        }
    }
    Ok(files)
}
