//! Template materialization into the destination directory.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use glob::Pattern;
use owo_colors::{OwoColorize, Stream};
use tracing::debug;
use walkdir::WalkDir;

use crate::manifest::PackageManifest;

/// Name of the bundled framework variant; also the subdirectory the starter
/// files land in.
const STARTER_VARIANT: &str = "express";

/// Subdirectories created empty under the variant root.
const STARTER_EXTRA_DIRS: &[&str] = &["uploads"];

/// One source section of the bundled starter: the subdirectory it populates
/// under the variant root (empty for the root itself) and the glob that
/// selects its files.
struct Section {
    dir: &'static str,
    pattern: &'static str,
}

const STARTER_SECTIONS: &[Section] = &[
    Section { dir: "domain-configuration", pattern: "*.yml" },
    Section { dir: "impl", pattern: "*.ts" },
    Section { dir: "config", pattern: "*.json" },
    Section { dir: "", pattern: "README.md" },
];

/// One bundled file: the section it belongs to, its base name, and its
/// compile-time embedded contents.
struct StarterEntry {
    section: &'static str,
    name: &'static str,
    contents: &'static str,
}

const STARTER_ENTRIES: &[StarterEntry] = &[
    StarterEntry {
        section: "domain-configuration",
        name: "car.yml",
        contents: include_str!("../assets/express/domain-configuration/car.yml"),
    },
    StarterEntry {
        section: "domain-configuration",
        name: "driver.yml",
        contents: include_str!("../assets/express/domain-configuration/driver.yml"),
    },
    StarterEntry {
        section: "impl",
        name: "app.ts",
        contents: include_str!("../assets/express/impl/app.ts"),
    },
    StarterEntry {
        section: "impl",
        name: "domain-definition.ts",
        contents: include_str!("../assets/express/impl/domain-definition.ts"),
    },
    StarterEntry {
        section: "impl",
        name: "seed.ts",
        contents: include_str!("../assets/express/impl/seed.ts"),
    },
    StarterEntry {
        section: "config",
        name: "default.json",
        contents: include_str!("../assets/express/config/default.json"),
    },
    StarterEntry {
        section: "",
        name: "README.md",
        contents: include_str!("../assets/express/README.md"),
    },
];

/// The two materialization variants behind one capability: a verbatim copy
/// of an on-disk template tree, or the bundled starter with its filtered
/// sections and generated manifest.
pub enum Template {
    Tree(PathBuf),
    Starter,
}

impl Template {
    /// Materialize the template into `dest` and print the next steps.
    ///
    /// Every directory created and file written is reported on stdout. Any
    /// filesystem failure is fatal; a partially populated destination is
    /// left as-is.
    pub fn materialize(&self, app_name: &str, dest: &Path) -> Result<()> {
        match self {
            Template::Tree(root) => copy_tree(root, dest)?,
            Template::Starter => materialize_starter(app_name, dest)?,
        }
        print_next_steps(self, dest);
        Ok(())
    }
}

/// Recursively copy `root` into `dest`, preserving relative structure.
fn copy_tree(root: &Path, dest: &Path) -> Result<()> {
    debug!(root = %root.display(), "copying template tree");
    create_dir_reported(dest)?;

    for entry in WalkDir::new(root) {
        let entry = entry.context("failed to walk template directory")?;
        if !entry.file_type().is_file() {
            continue;
        }
        let rel = entry
            .path()
            .strip_prefix(root)
            .context("template file outside template root")?;
        let target = dest.join(rel);
        if let Some(parent) = target.parent() {
            create_dir_reported(parent)?;
        }
        fs::copy(entry.path(), &target)
            .with_context(|| format!("failed to copy {}", rel.display()))?;
        report_create(&target);
    }

    Ok(())
}

/// Write the bundled starter: filtered section copies, the extra empty
/// directories, then the generated `package.json`.
fn materialize_starter(app_name: &str, dest: &Path) -> Result<()> {
    debug!(%app_name, "materializing bundled starter");
    create_dir_reported(dest)?;
    let variant_root = dest.join(STARTER_VARIANT);
    create_dir_reported(&variant_root)?;

    for section in STARTER_SECTIONS {
        let pattern = Pattern::new(section.pattern)
            .with_context(|| format!("invalid section pattern {}", section.pattern))?;
        let section_dir = if section.dir.is_empty() {
            variant_root.clone()
        } else {
            variant_root.join(section.dir)
        };
        create_dir_reported(&section_dir)?;

        for entry in STARTER_ENTRIES
            .iter()
            .filter(|e| e.section == section.dir && pattern.matches(e.name))
        {
            let target = section_dir.join(entry.name);
            fs::write(&target, entry.contents)
                .with_context(|| format!("failed to write {}", target.display()))?;
            report_create(&target);
        }
    }

    for extra in STARTER_EXTRA_DIRS {
        create_dir_reported(&variant_root.join(extra))?;
    }

    let manifest_path = dest.join("package.json");
    let manifest = PackageManifest::new(app_name).render()?;
    fs::write(&manifest_path, manifest)
        .with_context(|| format!("failed to write {}", manifest_path.display()))?;
    report_create(&manifest_path);

    Ok(())
}

/// Create `dir` (and parents) if needed, reporting it only when it did not
/// exist before.
fn create_dir_reported(dir: &Path) -> Result<()> {
    if dir.is_dir() {
        return Ok(());
    }
    fs::create_dir_all(dir)
        .with_context(|| format!("failed to create directory {}", dir.display()))?;
    report_create(dir);
    Ok(())
}

fn report_create(path: &Path) {
    println!("   create : {}", path.display());
}

fn print_next_steps(template: &Template, dest: &Path) {
    let start = match template {
        Template::Tree(_) => "npm start",
        Template::Starter => "npm run start",
    };

    println!();
    println!(
        "   {}",
        "change directory:".if_supports_color(Stream::Stdout, |t| t.cyan())
    );
    println!("     $ cd {}", dest.display());
    println!();
    println!(
        "   {}",
        "install dependencies:".if_supports_color(Stream::Stdout, |t| t.cyan())
    );
    println!("     $ npm install");
    println!();
    println!(
        "   {}",
        "run the app:".if_supports_color(Stream::Stdout, |t| t.cyan())
    );
    println!("     $ {start}");
    println!();
}
