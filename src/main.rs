// SPDX-License-Identifier: MPL-2.0
use iced_preview::app::{self, Flags};
use std::process::ExitCode;

const USAGE: &str = "\
usage: iced_preview [--preview|--no-preview] [--class NAME] [--scale F] [--config-dir DIR] <url-or-path>...";

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let flags = match parse_flags(args) {
        Ok(flags) => flags,
        Err(err) => {
            tracing::error!(error = %err, "invalid arguments");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };

    match app::run(flags) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "iced_preview exited with an error");
            ExitCode::FAILURE
        }
    }
}

fn parse_flags(mut args: pico_args::Arguments) -> Result<Flags, pico_args::Error> {
    let no_preview = args.contains("--no-preview");
    // `--preview` is the default; accept it so scripts can be explicit.
    if args.contains("--preview") && no_preview {
        return Err(pico_args::Error::ArgumentParsingFailed {
            cause: "--preview and --no-preview are mutually exclusive".to_string(),
        });
    }

    let class_name = args.opt_value_from_str("--class")?;
    let scale = args.opt_value_from_str("--scale")?;
    let config_dir = args.opt_value_from_str("--config-dir")?;

    let urls = args
        .finish()
        .into_iter()
        .map(|arg| arg.to_string_lossy().into_owned())
        .collect();

    Ok(Flags {
        urls,
        preview: !no_preview,
        class_name,
        scale,
        config_dir,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;

    fn parse(args: &[&str]) -> Result<Flags, pico_args::Error> {
        parse_flags(pico_args::Arguments::from_vec(
            args.iter().map(OsString::from).collect(),
        ))
    }

    #[test]
    fn preview_is_enabled_by_default() {
        let flags = parse(&["a.png", "b.png"]).expect("valid args");
        assert!(flags.preview);
        assert_eq!(flags.urls, vec!["a.png".to_string(), "b.png".to_string()]);
    }

    #[test]
    fn options_are_parsed() {
        let flags = parse(&["--no-preview", "--class", "avatar", "--scale", "0.5", "a.png"])
            .expect("valid args");
        assert!(!flags.preview);
        assert_eq!(flags.class_name.as_deref(), Some("avatar"));
        assert_eq!(flags.scale, Some(0.5));
        assert_eq!(flags.urls, vec!["a.png".to_string()]);
    }

    #[test]
    fn explicit_preview_flag_is_accepted() {
        assert!(parse(&["--preview", "a.png"]).expect("valid args").preview);
    }

    #[test]
    fn conflicting_preview_flags_are_rejected() {
        assert!(matches!(
            parse(&["--preview", "--no-preview", "a.png"]),
            Err(pico_args::Error::ArgumentParsingFailed { .. })
        ));
    }

    #[test]
    fn bad_scale_is_rejected() {
        assert!(parse(&["--scale", "big", "a.png"]).is_err());
    }
}
