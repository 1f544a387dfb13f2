use tracing::info;
use tracing_subscriber::EnvFilter;

use iconscale::{ScaleParams, process_directory};

use super::args::CliArgs;
use super::errors::AppError;

/// Defaults, then the config file, then explicit flags.
pub fn resolve_params(args: &CliArgs) -> Result<ScaleParams, AppError> {
    let mut params = match &args.config {
        Some(path) => ScaleParams::from_json_file(path).map_err(|source| AppError::Config {
            path: path.clone(),
            source,
        })?,
        None => ScaleParams::default(),
    };

    if let Some(sizes) = &args.sizes {
        params.sizes = sizes.clone();
    }
    if let Some(suffix) = &args.suffix {
        params.source_suffix = suffix.clone();
    }
    if let Some(template) = &args.template {
        params.output_template = template.clone();
    }
    if let Some(filter) = args.filter {
        params.filter = filter;
    }
    if let Some(output_dir) = &args.output_dir {
        params.output_dir = Some(output_dir.clone());
    }
    if args.keep_going {
        params.continue_on_error = true;
    }

    Ok(params)
}

pub fn run(args: CliArgs) -> Result<(), Box<dyn std::error::Error>> {
    if args.log {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }

    if !args.dir.is_dir() {
        return Err(AppError::NotADirectory {
            path: args.dir.clone(),
        }
        .into());
    }

    let params = resolve_params(&args)?;
    info!("Sizes: {:?}, filter: {}", params.sizes, params.filter);

    let report = process_directory(&args.dir, &params)?;
    if report.errors > 0 {
        return Err(AppError::BatchFailed {
            errors: report.errors,
        }
        .into());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use iconscale::ResampleFilter;
    use std::path::PathBuf;

    #[test]
    fn no_flags_gives_defaults() {
        let args = CliArgs::parse_from(["iconscale"]);
        assert_eq!(args.dir, PathBuf::from("."));
        assert_eq!(resolve_params(&args).unwrap(), ScaleParams::default());
    }

    #[test]
    fn flags_override_defaults() {
        let args = CliArgs::parse_from([
            "iconscale",
            "icons",
            "--sizes",
            "20,10",
            "--suffix",
            "_40.png",
            "--filter",
            "lanczos3",
            "-o",
            "out",
            "--keep-going",
        ]);
        let params = resolve_params(&args).unwrap();
        assert_eq!(args.dir, PathBuf::from("icons"));
        assert_eq!(params.sizes, vec![20, 10]);
        assert_eq!(params.source_suffix, "_40.png");
        assert_eq!(params.output_template, "_{size}.png");
        assert_eq!(params.filter, ResampleFilter::Lanczos3);
        assert_eq!(params.output_dir, Some(PathBuf::from("out")));
        assert!(params.continue_on_error);
    }

    #[test]
    fn flags_override_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("iconscale.json");
        std::fs::write(&config, r#"{ "sizes": [8], "filter": "nearest" }"#).unwrap();

        let args = CliArgs::parse_from([
            "iconscale",
            "--config",
            config.to_str().unwrap(),
            "--filter",
            "bilinear",
        ]);
        let params = resolve_params(&args).unwrap();
        assert_eq!(params.sizes, vec![8]);
        assert_eq!(params.filter, ResampleFilter::Bilinear);
    }

    #[test]
    fn broken_config_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("broken.json");
        std::fs::write(&config, "{ sizes: ").unwrap();

        let args = CliArgs::parse_from(["iconscale", "--config", config.to_str().unwrap()]);
        assert!(matches!(
            resolve_params(&args),
            Err(AppError::Config { .. })
        ));
    }

    #[test]
    fn run_fails_when_a_source_fails_with_keep_going() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("x_64.png"), b"not a png").unwrap();

        let args = CliArgs::parse_from(["iconscale", dir.path().to_str().unwrap(), "--keep-going"]);
        let err = run(args).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::BatchFailed { errors: 1 })
        ));
    }

    #[test]
    fn run_fails_fast_on_a_corrupt_source() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("x_64.png"), b"not a png").unwrap();

        let args = CliArgs::parse_from(["iconscale", dir.path().to_str().unwrap()]);
        let err = run(args).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<iconscale::Error>(),
            Some(iconscale::Error::Decode { .. })
        ));
    }

    #[test]
    fn run_rejects_a_file_as_dir() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("icon_64.png");
        std::fs::write(&file, b"").unwrap();

        let args = CliArgs::parse_from(["iconscale", file.to_str().unwrap()]);
        let err = run(args).unwrap_err();

        assert!(matches!(
            err.downcast_ref::<AppError>(),
            Some(AppError::NotADirectory { .. })
        ));
    }

    #[test]
    fn run_succeeds_on_an_empty_dir() {
        let dir = tempfile::tempdir().unwrap();
        let args = CliArgs::parse_from(["iconscale", dir.path().to_str().unwrap()]);
        assert!(run(args).is_ok());
    }
}
