//! Icon data generation and auditing.
//!
//! `generate` scans the public SVG asset folders and rebuilds the JSON table compiled into
//! `icon_catalog`; `--check` only verifies the checked-in table is current. `audit` cross-checks
//! the table against the asset tree and the runtime naming rules.

use crate::runtime::config::ConfigLoader;
use crate::runtime::context::CommandContext;
use crate::runtime::error::{XtaskError, XtaskResult};
use crate::XtaskCommand;
use chrono::{SecondsFormat, Utc};
use icon_catalog::names::{fa_identifier, fixed_asset_folder};
use icon_catalog::{icon_data_key, validate_dynamic_name, IconData, IconDataTable, IconStyle};
use platform_host::parse_svg_asset;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_PATH: &str = "tools/icons.toml";
const PUBLIC_PREFIX: &str = "/icons/";

/// `cargo xtask icons ...`
pub struct IconsCommand;

/// Supported `cargo xtask icons` subcommands.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum IconsOptions {
    /// Rebuild the data table; with `check`, only compare.
    Generate {
        /// Fail instead of writing when the table is out of date.
        check: bool,
    },
    /// Report inconsistencies between data, assets and names.
    Audit,
    /// Usage text.
    Help,
}

/// `tools/icons.toml`.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct IconToolConfig {
    /// Workspace-relative folder holding `<style>/<name>.svg` assets.
    pub asset_root: PathBuf,
    /// Workspace-relative path of the generated JSON table.
    pub data_output: PathBuf,
    /// Asset folders to scan, in precedence order for duplicate keys.
    pub styles: Vec<String>,
}

impl Default for IconToolConfig {
    fn default() -> Self {
        Self {
            asset_root: PathBuf::from("public/icons"),
            data_output: PathBuf::from("crates/icon_catalog/data/icon-data.json"),
            styles: ["solid", "light", "brands", "regular", "app", "kpis"]
                .into_iter()
                .map(String::from)
                .collect(),
        }
    }
}

impl IconToolConfig {
    fn validate(&self) -> XtaskResult<()> {
        if self.styles.is_empty() {
            return Err(XtaskError::config("icon tool config lists no asset styles")
                .with_hint("add e.g. `styles = [\"solid\", \"light\"]` to tools/icons.toml"));
        }
        for style in &self.styles {
            let plain = !style.is_empty()
                && style
                    .chars()
                    .all(|ch| ch.is_ascii_lowercase() || ch.is_ascii_digit() || ch == '-');
            if !plain {
                return Err(XtaskError::config(format!(
                    "asset style `{style}` must be a plain lowercase folder name"
                )));
            }
        }
        Ok(())
    }
}

impl XtaskCommand for IconsCommand {
    type Options = IconsOptions;

    fn parse(args: &[String]) -> XtaskResult<Self::Options> {
        parse_icons_options(args)
    }

    fn run(ctx: &CommandContext, options: Self::Options) -> XtaskResult<()> {
        if options == IconsOptions::Help {
            print_icons_usage();
            return Ok(());
        }
        let config = ConfigLoader::<IconToolConfig>::new(ctx.root(), CONFIG_PATH).load_or_default()?;
        config.validate()?;
        match options {
            IconsOptions::Generate { check } => icons_generate(ctx, &config, check),
            IconsOptions::Audit => icons_audit(ctx, &config),
            IconsOptions::Help => Ok(()),
        }
    }
}

fn parse_icons_options(args: &[String]) -> XtaskResult<IconsOptions> {
    let rest = args.get(1..).unwrap_or_default();
    match args.first().map(String::as_str) {
        None | Some("help" | "--help" | "-h") => Ok(IconsOptions::Help),
        Some("generate") => {
            let mut check = false;
            for arg in rest {
                match arg.as_str() {
                    "--check" => check = true,
                    other => {
                        return Err(XtaskError::validation(format!(
                            "unknown icons generate flag: {other}"
                        )))
                    }
                }
            }
            Ok(IconsOptions::Generate { check })
        }
        Some("audit") if rest.is_empty() => Ok(IconsOptions::Audit),
        Some("audit") => Err(XtaskError::validation("icons audit takes no arguments")),
        Some(other) => Err(XtaskError::validation(format!(
            "unknown icons subcommand: {other}"
        ))),
    }
}

pub(crate) fn print_icons_usage() {
    eprintln!(
        "Usage: cargo xtask icons <subcommand>\n\
         \n\
         Subcommands:\n\
           generate [--check]   Rebuild the icon data table from SVG assets (--check: verify only)\n\
           audit                Report missing assets, untracked assets, stale entries and bad names\n\
         \n\
         Configuration: tools/icons.toml (asset_root, data_output, styles)\n"
    );
}

/// An asset the scan could not turn into a table entry.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SkippedAsset {
    /// Asset file.
    pub path: PathBuf,
    /// Why it was skipped.
    pub reason: String,
}

/// Result of scanning the asset tree.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconScan {
    /// Entries keyed like the runtime table.
    pub table: IconDataTable,
    /// Files that produced no entry.
    pub skipped: Vec<SkippedAsset>,
}

/// Table key for an asset file, as the runtime composes it for that folder.
///
/// `light` and `regular` assets get their style suffix. Solid, brand, app and KPI assets use the
/// bare `fa<Pascal>` identifier.
pub fn asset_key(style: &str, stem: &str) -> String {
    let folder_style = IconStyle::from_token(style).unwrap_or(IconStyle::Solid);
    icon_data_key(&fa_identifier(stem), folder_style)
}

fn svg_files(dir: &Path) -> XtaskResult<Vec<PathBuf>> {
    if !dir.is_dir() {
        return Ok(Vec::new());
    }
    let mut files = fs::read_dir(dir)
        .map_err(|err| XtaskError::io(format!("failed to list {}: {err}", dir.display())))?
        .filter_map(|entry| entry.ok().map(|entry| entry.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "svg"))
        .collect::<Vec<_>>();
    files.sort();
    Ok(files)
}

/// Scans `<asset_root>/<style>/*.svg` for every configured style.
///
/// Unparsable files and duplicate keys are recorded in [`IconScan::skipped`]; the first folder in
/// `styles` wins a duplicate key.
pub fn scan_icon_assets(asset_root: &Path, styles: &[String]) -> XtaskResult<IconScan> {
    let mut entries: Vec<(String, IconData)> = Vec::new();
    let mut skipped = Vec::new();

    for style in styles {
        for path in svg_files(&asset_root.join(style))? {
            let (Some(stem), Some(file_name)) = (
                path.file_stem().and_then(|stem| stem.to_str()),
                path.file_name().and_then(|name| name.to_str()),
            ) else {
                skipped.push(SkippedAsset {
                    path: path.clone(),
                    reason: "file name is not valid UTF-8".into(),
                });
                continue;
            };
            if let Some(fixed) = fixed_asset_folder(stem).filter(|fixed| *fixed != style.as_str()) {
                skipped.push(SkippedAsset {
                    path: path.clone(),
                    reason: format!("`{stem}` always resolves to the {fixed} folder"),
                });
                continue;
            }
            let key = asset_key(style, stem);
            if entries.iter().any(|(existing, _)| existing == &key) {
                skipped.push(SkippedAsset {
                    path: path.clone(),
                    reason: format!("duplicate key {key}"),
                });
                continue;
            }
            let body = fs::read_to_string(&path).map_err(|err| {
                XtaskError::io(format!("failed to read asset: {err}")).with_path(&path)
            })?;
            match parse_svg_asset(&body) {
                Ok(asset) => entries.push((
                    key,
                    IconData {
                        width: asset.width,
                        height: asset.height,
                        path: asset.first_path.unwrap_or_default(),
                        url: Some(format!("{PUBLIC_PREFIX}{style}/{file_name}")),
                    },
                )),
                Err(err) => skipped.push(SkippedAsset {
                    path: path.clone(),
                    reason: err.to_string(),
                }),
            }
        }
    }

    Ok(IconScan {
        table: IconDataTable::from_entries(entries),
        skipped,
    })
}

/// Serialized form written to `data_output`.
pub fn render_icon_table(table: &IconDataTable) -> XtaskResult<String> {
    Ok(format!("{}\n", table.to_json_pretty()?))
}

fn report_skipped(scan: &IconScan) {
    for skipped in &scan.skipped {
        eprintln!("warning: skipped {}: {}", skipped.path.display(), skipped.reason);
    }
}

fn icons_generate(ctx: &CommandContext, config: &IconToolConfig, check: bool) -> XtaskResult<()> {
    let asset_root = ctx.root().join(&config.asset_root);
    let output = ctx.root().join(&config.data_output);

    let scan = ctx
        .workflow()
        .run_timed_stage("Icon data: scan SVG assets", || {
            scan_icon_assets(&asset_root, &config.styles)
        })?;
    report_skipped(&scan);
    let rendered = render_icon_table(&scan.table)?;

    if check {
        return ctx.workflow().run_timed_stage("Icon data: compare", || {
            let current = fs::read_to_string(&output).unwrap_or_default();
            if current == rendered {
                println!("icon data is current ({} entries)", scan.table.len());
                Ok(())
            } else {
                Err(XtaskError::validation("icon data is out of date")
                    .with_operation("icons generate --check")
                    .with_path(&output)
                    .with_hint("run `cargo xtask icons generate`"))
            }
        });
    }

    ctx.workflow().run_timed_stage("Icon data: write table", || {
        if let Some(parent) = output.parent() {
            fs::create_dir_all(parent).map_err(|err| {
                XtaskError::io(format!("failed to create output dir: {err}")).with_path(parent)
            })?;
        }
        fs::write(&output, &rendered).map_err(|err| {
            XtaskError::io(format!("failed to write icon data: {err}")).with_path(&output)
        })?;
        println!(
            "wrote {} icon entries to {} at {}",
            scan.table.len(),
            output.display(),
            Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true)
        );
        Ok(())
    })
}

/// Findings of `icons audit`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IconAuditReport {
    /// Entries whose asset URL points at no file, as `(key, url)`.
    pub missing_assets: Vec<(String, String)>,
    /// Scanned assets absent from the table.
    pub untracked_assets: Vec<String>,
    /// Entries whose data differs from a fresh scan.
    pub stale_entries: Vec<String>,
    /// Keys that fail runtime name validation.
    pub invalid_names: Vec<String>,
}

impl IconAuditReport {
    /// Total number of findings.
    pub fn issue_count(&self) -> usize {
        self.missing_assets.len()
            + self.untracked_assets.len()
            + self.stale_entries.len()
            + self.invalid_names.len()
    }

    /// Whether the audit found nothing.
    pub fn is_clean(&self) -> bool {
        self.issue_count() == 0
    }
}

/// Compares the checked-in table with a fresh scan of `asset_root`.
pub fn audit_icon_data(table: &IconDataTable, scan: &IconScan, asset_root: &Path) -> IconAuditReport {
    let mut report = IconAuditReport::default();

    for (key, data) in table.iter() {
        if !validate_dynamic_name(key) {
            report.invalid_names.push(key.to_string());
        }
        if let Some(url) = &data.url {
            let exists = url
                .strip_prefix(PUBLIC_PREFIX)
                .is_some_and(|relative| asset_root.join(relative).is_file());
            if !exists {
                report.missing_assets.push((key.to_string(), url.clone()));
                continue;
            }
        }
        if let Some(scanned) = scan.table.get(key) {
            if scanned != data {
                report.stale_entries.push(key.to_string());
            }
        }
    }
    for (key, _) in scan.table.iter() {
        if table.get(key).is_none() {
            report.untracked_assets.push(key.to_string());
        }
    }
    report
}

fn print_audit_report(report: &IconAuditReport) {
    for (key, url) in &report.missing_assets {
        println!("missing asset: {key} -> {url}");
    }
    for key in &report.untracked_assets {
        println!("untracked asset: {key}");
    }
    for key in &report.stale_entries {
        println!("stale entry: {key}");
    }
    for key in &report.invalid_names {
        println!("invalid icon name: {key}");
    }
}

fn icons_audit(ctx: &CommandContext, config: &IconToolConfig) -> XtaskResult<()> {
    let asset_root = ctx.root().join(&config.asset_root);
    let output = ctx.root().join(&config.data_output);

    let table = ctx.workflow().run_timed_stage("Icon audit: load table", || {
        let raw = fs::read_to_string(&output).map_err(|err| {
            XtaskError::io(format!("failed to read icon data: {err}")).with_path(&output)
        })?;
        IconDataTable::from_json(&raw)
            .map_err(|err| XtaskError::data(format!("invalid icon data: {err}")).with_path(&output))
    })?;
    let scan = ctx
        .workflow()
        .run_timed_stage("Icon audit: scan SVG assets", || {
            scan_icon_assets(&asset_root, &config.styles)
        })?;
    report_skipped(&scan);

    let report = audit_icon_data(&table, &scan, &asset_root);
    print_audit_report(&report);
    if report.is_clean() {
        println!("icon audit clean ({} entries)", table.len());
        Ok(())
    } else {
        Err(XtaskError::validation(format!(
            "icon audit found {} issue(s)",
            report.issue_count()
        ))
        .with_operation("icons audit"))
    }
}
