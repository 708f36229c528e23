#![windows_subsystem = "windows"]

use std::{error::Error, path::PathBuf, process, sync::Arc};

use iced::{Settings, Size};
use tracing::{error, info};

use cryptopower_ui::{component::text, font};

use cryptopower_gui::{
    app::{config::Config, App},
    dir::CryptopowerDirectory,
    logger,
    wallet::HotWallet,
    VERSION,
};

const DEFAULT_WALLET_NAME: &str = "default";
/// Environment variable holding the wallet passphrase, kept out of the
/// command line so it does not show in the process list.
const PASSPHRASE_ENV: &str = "CRYPTOPOWER_PASSPHRASE";

#[derive(Debug, PartialEq)]
enum Arg {
    DatadirPath(CryptopowerDirectory),
    WalletName(String),
}

fn parse_args(args: Vec<String>) -> Result<Vec<Arg>, Box<dyn Error>> {
    let mut res = Vec::new();

    if args.len() > 1 && (args[1] == "--version" || args[1] == "-v") {
        eprintln!("{}", VERSION);
        process::exit(1);
    }

    if args.len() > 1 && (args[1] == "--help" || args[1] == "-h") {
        eprintln!(
            r#"
Usage: CRYPTOPOWER_PASSPHRASE=<PASSPHRASE> cryptopower-gui [OPTIONS]

Back up the seed phrase of a new in-memory wallet, encrypted with the
passphrase read from the CRYPTOPOWER_PASSPHRASE environment variable.

Options:
    --datadir <PATH>    Path of cryptopower datadir
    --wallet <NAME>     Name of the wallet
    -v, --version       Display cryptopower-gui version
    -h, --help          Print help
        "#
        );
        process::exit(1);
    }

    let mut args = args.into_iter().skip(1);
    while let Some(arg) = args.next() {
        let mut value = || {
            args.next()
                .ok_or_else(|| format!("missing arg to {}", arg))
        };
        match arg.as_str() {
            "--datadir" => res.push(Arg::DatadirPath(CryptopowerDirectory::new(
                PathBuf::from(value()?),
            ))),
            "--wallet" => res.push(Arg::WalletName(value()?)),
            _ => return Err(format!("unknown argument {}", arg).into()),
        }
    }

    Ok(res)
}

fn wallet_passphrase(value: Option<String>) -> Result<String, Box<dyn Error>> {
    match value {
        Some(passphrase) if !passphrase.is_empty() => Ok(passphrase),
        _ => Err(format!("missing {}, see --help", PASSPHRASE_ENV).into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let mut datadir = None;
    let mut wallet_name = DEFAULT_WALLET_NAME.to_string();
    for arg in parse_args(std::env::args().collect())? {
        match arg {
            Arg::DatadirPath(path) => datadir = Some(path),
            Arg::WalletName(name) => wallet_name = name,
        }
    }
    let passphrase = wallet_passphrase(std::env::var(PASSPHRASE_ENV).ok())?;

    let datadir = match datadir {
        Some(datadir) => datadir,
        None => CryptopowerDirectory::new_default()?,
    };
    datadir.init()?;

    let config = Config::load(&datadir)?;
    let log_level = match logger::parse_log_level()? {
        Some(level) => level,
        None => config.log_level()?,
    };
    logger::setup_logger(log_level, &datadir)?;
    info!("Starting cryptopower-gui v{}", VERSION);

    let wallet = HotWallet::generate(wallet_name, &passphrase)?;

    let settings = Settings {
        id: Some("Cryptopower".to_string()),
        antialiasing: false,
        default_text_size: text::P1_SIZE.into(),
        default_font: font::REGULAR,
        ..Default::default()
    };

    let window_settings = iced::window::Settings {
        min_size: Some(Size {
            width: 360.0,
            height: 500.0,
        }),
        ..Default::default()
    };

    if let Err(e) = iced::application(App::title, App::update, App::view)
        .theme(App::theme)
        .subscription(App::subscription)
        .settings(settings)
        .window(window_settings)
        .run_with(move || App::new(Arc::new(wallet)))
    {
        error!("{}", e);
        Err(format!("Failed to launch UI: {}", e).into())
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(line: &str) -> Vec<String> {
        std::iter::once("cryptopower-gui")
            .chain(line.split(' ').filter(|a| !a.is_empty()))
            .map(|a| a.to_string())
            .collect()
    }

    #[test]
    fn test_parse_args() {
        assert_eq!(parse_args(args("")).unwrap(), Vec::new());
        assert!(parse_args(args("--meth")).is_err());
        assert!(parse_args(args("--datadir")).is_err());
        assert!(parse_args(args("--datadir hello --wallet")).is_err());
        assert_eq!(
            parse_args(args("--datadir hello --wallet main")).unwrap(),
            vec![
                Arg::DatadirPath(CryptopowerDirectory::new(PathBuf::from("hello"))),
                Arg::WalletName("main".to_string()),
            ]
        );
        // Values are never taken for options.
        assert_eq!(
            parse_args(args("--wallet --datadir")).unwrap(),
            vec![Arg::WalletName("--datadir".to_string())]
        );
        // The passphrase is not accepted on the command line.
        assert!(parse_args(args("--passphrase secret")).is_err());
    }

    #[test]
    fn passphrase_from_environment() {
        assert_eq!(
            wallet_passphrase(Some("secret".to_string())).unwrap(),
            "secret"
        );
        assert!(wallet_passphrase(Some(String::new())).is_err());
        assert!(wallet_passphrase(None).is_err());
    }
}
