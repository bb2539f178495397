// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Kinchart-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Kinchart and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.


//! Kinchart CLI entrypoint.
//!
//! Runs a single controller cycle for a location and prints the resulting view. Datasets are
//! read as JSON (see [`kinchart::source::JsonDataLoader`]).

use std::cell::RefCell;
use std::error::Error;
use std::path::Path;
use std::rc::Rc;

use kinchart::embed::NoHostFrame;
use kinchart::services::{Navigator, NoChartExporter, TracingAnalytics};
use kinchart::source::JsonDataLoader;
use kinchart::{Controller, ControllerConfig, Location, Services, UploadPayload};
use tracing_subscriber::EnvFilter;

fn print_usage(program: &str) {
    eprintln!(
        "Usage:\n  {program} [<location>] [--config <file>] [--locale <tag>] [--gedcom <file>] [--wikitree-dir <dir>]\n\n<location> is a path with query string, e.g. `/view?url=tree.json&indi=I1`.\n--config reads controller settings from a JSON file.\n--gedcom attaches a dataset file as an upload (adds `file=<name>` when the location has none).\n--wikitree-dir serves WikiTree lookups from `<dir>/<id>.json`.\n\nLogging is controlled by RUST_LOG (default `info`)."
    );
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
struct CliOptions {
    location: Option<String>,
    config: Option<String>,
    locale: Option<String>,
    gedcom: Option<String>,
    wikitree_dir: Option<String>,
}

fn take_value(
    slot: &mut Option<String>,
    args: &mut impl Iterator<Item = String>,
) -> Result<(), ()> {
    if slot.is_some() {
        return Err(());
    }
    *slot = Some(args.next().ok_or(())?);
    Ok(())
}

fn parse_options(mut args: impl Iterator<Item = String>) -> Result<CliOptions, ()> {
    let mut options = CliOptions::default();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--config" => take_value(&mut options.config, &mut args)?,
            "--locale" => take_value(&mut options.locale, &mut args)?,
            "--gedcom" => take_value(&mut options.gedcom, &mut args)?,
            "--wikitree-dir" => take_value(&mut options.wikitree_dir, &mut args)?,
            _ if arg.starts_with('-') => return Err(()),
            _ => {
                if options.location.is_some() {
                    return Err(());
                }
                options.location = Some(arg);
            }
        }
    }

    Ok(options)
}

/// Navigator that only remembers where the controller wanted to go.
#[derive(Debug, Default)]
struct LoggingNavigator {
    target: RefCell<Option<String>>,
}

impl Navigator for LoggingNavigator {
    fn push(&self, location: Location) {
        tracing::info!(href = %location.href(), "navigate");
        *self.target.borrow_mut() = Some(location.href());
    }

    fn replace(&self, location: Location) {
        tracing::info!(href = %location.href(), "redirect");
        *self.target.borrow_mut() = Some(location.href());
    }
}

fn load_config(options: &CliOptions) -> Result<ControllerConfig, Box<dyn Error>> {
    let mut config = match options.config.as_deref() {
        Some(path) => ControllerConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => ControllerConfig::default(),
    };
    if let Some(locale) = &options.locale {
        config.locale = locale.clone();
    }
    Ok(config)
}

fn build_location(options: &CliOptions, config: &ControllerConfig) -> Result<Location, Box<dyn Error>> {
    let location = options
        .location
        .as_deref()
        .map(Location::parse)
        .unwrap_or_else(|| Location::new(config.chart_path.clone(), ""));

    let Some(path) = options.gedcom.as_deref() else {
        return Ok(location);
    };
    let gedcom = std::fs::read_to_string(path)?;
    let location = if location.param("file").is_some() {
        location
    } else {
        let name = Path::new(path)
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_owned());
        location.with_params(&[("file", name)])
    };
    Ok(location.with_state(UploadPayload {
        gedcom,
        images: Default::default(),
    }))
}

fn main() {
    let result = (|| -> Result<(), Box<dyn Error>> {
        let mut args = std::env::args();
        let program = args.next().unwrap_or_else(|| "kinchart".to_owned());

        let options = match parse_options(args) {
            Ok(options) => options,
            Err(()) => {
                print_usage(&program);
                std::process::exit(2);
            }
        };

        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
            )
            .with_writer(std::io::stderr)
            .init();

        let config = load_config(&options)?;
        let location = build_location(&options, &config)?;

        let loader = match options.wikitree_dir.as_deref() {
            Some(dir) => JsonDataLoader::new().with_wikitree_dir(dir),
            None => JsonDataLoader::new(),
        };
        let navigator = Rc::new(LoggingNavigator::default());
        let services = Services {
            loader: Rc::new(loader),
            navigator: navigator.clone(),
            host: Rc::new(NoHostFrame),
            analytics: Rc::new(TracingAnalytics),
            exporter: Rc::new(NoChartExporter),
        };

        let runtime = tokio::runtime::Builder::new_current_thread().enable_all().build()?;
        let (mut controller, _triggers) = Controller::new(config, services);
        let outcome = runtime.block_on(controller.update(location));
        tracing::debug!(?outcome, "cycle finished");

        println!("{}", controller.view());
        if let Some(target) = navigator.target.borrow().as_deref() {
            println!("-> {target}");
        }
        Ok(())
    })();

    if let Err(err) = result {
        eprintln!("kinchart: {err}");
        std::process::exit(1);
    }
}
