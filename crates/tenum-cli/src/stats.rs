//! # Stats Subcommand
//!
//! Reports what the global registry has materialised: the number of
//! enumeration types it holds and, per catalogue enumeration, whether it is
//! built and how many instances it has.
//!
//! Enumerations are built lazily, so a fresh process reports nothing built
//! unless `--build` is given.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tenum_core::Registry;

use crate::catalog::CatalogName;
use crate::output::{to_json, OutputFormat};

/// Arguments for the stats subcommand.
#[derive(Args, Debug)]
pub struct StatsArgs {
    /// Materialise every catalogue enumeration before reporting.
    #[arg(long)]
    pub build: bool,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

/// Registry snapshot.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Stats {
    /// Enumeration types the global registry has seen.
    pub types: usize,
    pub enumerations: Vec<EnumerationStats>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnumerationStats {
    pub name: &'static str,
    pub built: bool,
    /// Instance count; only reported once built, since counting would build.
    pub instances: Option<usize>,
}

/// Execute the stats subcommand.
pub fn run_stats(args: &StatsArgs) -> Result<u8> {
    let stats = collect(args.build);
    println!("{}", render_stats(&stats, args.format)?);
    Ok(0)
}

/// Snapshot the global registry, building the catalogue first if `build`.
pub fn collect(build: bool) -> Stats {
    if build {
        for name in CatalogName::all() {
            name.rows();
        }
    }

    let enumerations = CatalogName::all()
        .iter()
        .map(|name| {
            let built = name.is_built();
            EnumerationStats {
                name: name.as_str(),
                built,
                instances: built.then(|| name.rows().len()),
            }
        })
        .collect();

    let stats = Stats {
        types: Registry::global().len(),
        enumerations,
    };
    tracing::debug!(types = stats.types, "registry stats collected");
    stats
}

pub fn render_stats(stats: &Stats, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Json => to_json(stats),
        OutputFormat::Text => {
            let mut lines = vec![format!("types: {}", stats.types)];
            for e in &stats.enumerations {
                let instances = e
                    .instances
                    .map_or_else(|| "-".to_string(), |n| n.to_string());
                let state = if e.built { "built" } else { "not built" };
                lines.push(format!("{:<12} {state:<9}  {instances}", e.name));
            }
            Ok(lines.join("\n"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_materialises_catalogue() {
        let stats = collect(true);
        assert!(stats.types >= CatalogName::all().len());
        let counts: Vec<_> = stats
            .enumerations
            .iter()
            .map(|e| (e.name, e.built, e.instances))
            .collect();
        assert_eq!(
            counts,
            vec![
                ("http-status", true, Some(13)),
                ("currency", true, Some(6)),
                ("weekday", true, Some(7)),
            ]
        );
    }

    #[test]
    fn test_render_text() {
        let stats = Stats {
            types: 1,
            enumerations: vec![
                EnumerationStats {
                    name: "weekday",
                    built: true,
                    instances: Some(7),
                },
                EnumerationStats {
                    name: "currency",
                    built: false,
                    instances: None,
                },
            ],
        };
        assert_eq!(
            render_stats(&stats, OutputFormat::Text).unwrap(),
            "types: 1\nweekday      built      7\ncurrency     not built  -"
        );
    }

    #[test]
    fn test_render_json() {
        let stats = Stats {
            types: 0,
            enumerations: vec![EnumerationStats {
                name: "weekday",
                built: false,
                instances: None,
            }],
        };
        let json: serde_json::Value =
            serde_json::from_str(&render_stats(&stats, OutputFormat::Json).unwrap()).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "types": 0,
                "enumerations": [{"name": "weekday", "built": false, "instances": null}]
            })
        );
    }
}
