use std::{
    io,
    path::{Path, PathBuf},
    process::{Command, Stdio},
    sync::Arc,
    time::{SystemTime, UNIX_EPOCH},
};

use rand::{rngs::StdRng, Rng, SeedableRng};
use tracing::error;

use cryptopower_ui::{icon::TicketIcon, theme::Theme};

use super::{
    error::Error,
    input::{Click, Editor},
    prompt,
};
use crate::wallet::{shannon_entropy, Transaction, Wallet, ERR_INVALID_PASSPHRASE};

/// Message shown to the user for an error.
pub fn translate_err(err: &Error) -> String {
    let msg = err.to_string();
    if msg == ERR_INVALID_PASSPHRASE {
        prompt::INVALID_PASSPHRASE.to_string()
    } else {
        msg
    }
}

/// Returns true if none of the editors is empty.
pub fn editors_not_empty(editors: &[&Editor]) -> bool {
    editors.iter().all(|editor| !editor.text().is_empty())
}

/// Non-cryptographic random number, do not use it for key material.
pub fn generate_random_number() -> u64 {
    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default();
    StdRng::seed_from_u64(seed).gen()
}

/// Wallets that are locked and have not discovered their accounts yet.
pub fn locked_wallets<W: Wallet + ?Sized>(wallets: &[Arc<W>]) -> Vec<Arc<W>> {
    wallets
        .iter()
        .filter(|w| w.is_locked() && !w.has_discovered_accounts())
        .cloned()
        .collect()
}

pub fn create_click_gestures(count: usize) -> Vec<Click> {
    vec![Click::default(); count]
}

/// Returns true if the list mixes transactions of different wallets, in
/// which case each row must be labelled with its wallet name.
///
/// Only neighbouring transactions are compared, a transaction without
/// wallet name never differs from the next one.
pub fn show_label(txs: &[Transaction]) -> bool {
    txs.windows(2).any(|pair| {
        !pair[0].wallet_name.is_empty() && pair[0].wallet_name != pair[1].wallet_name
    })
}

#[derive(Debug, thiserror::Error)]
pub enum OpenUrlError {
    #[error("Opening a url is not supported on {0}")]
    UnsupportedPlatform(String),
    #[error("Failed to launch {program}: {source}")]
    Launch {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Command opening `url` in the default browser of the given operating
/// system, named as in [`std::env::consts::OS`].
pub fn url_launch_command(os: &str, url: &str) -> Result<Command, OpenUrlError> {
    let mut cmd = match os {
        "linux" => Command::new("xdg-open"),
        "windows" => {
            let mut cmd = Command::new("rundll32");
            cmd.arg("url.dll,FileProtocolHandler");
            cmd
        }
        "macos" => Command::new("open"),
        os => return Err(OpenUrlError::UnsupportedPlatform(os.to_string())),
    };
    cmd.arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null());
    Ok(cmd)
}

/// Launches the default browser on `url`. The browser process is not
/// waited for.
pub fn open_url(url: &str) -> Result<(), OpenUrlError> {
    let mut cmd = url_launch_command(std::env::consts::OS, url)?;
    cmd.spawn().map(|_| ()).map_err(|source| OpenUrlError::Launch {
        program: cmd.get_program().to_string_lossy().into_owned(),
        source,
    })
}

pub fn go_to_url(url: &str) {
    if let Err(e) = open_url(url) {
        error!("Failed to open {}: {}", url, e);
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PasswordStrength {
    /// Fill of the strength bar, between 0 and 100.
    pub progress: f32,
    pub color: iced::Color,
}

/// Estimates the strength of a password from its Shannon entropy, a 4 bits
/// per character password fills the bar.
pub fn compute_password_strength(password: &str, theme: &Theme) -> PasswordStrength {
    let strength = shannon_entropy(password) / 4.0 * 100.0;
    PasswordStrength {
        progress: strength.clamp(0.0, 100.0) as f32,
        color: theme.colors.text.success,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TicketStatus {
    Unmined,
    Immature,
    Live,
    Voted,
    Missed,
    Expired,
    Revoked,
}

impl TicketStatus {
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "UNMINED" => Some(Self::Unmined),
            "IMMATURE" => Some(Self::Immature),
            "LIVE" => Some(Self::Live),
            "VOTED" => Some(Self::Voted),
            "MISSED" => Some(Self::Missed),
            "EXPIRED" => Some(Self::Expired),
            "REVOKED" => Some(Self::Revoked),
            _ => None,
        }
    }

    pub fn style(self, theme: &Theme) -> TicketStatusStyle {
        let tickets = &theme.colors.tickets;
        let (icon, palette) = match self {
            Self::Unmined => (TicketIcon::Unmined, tickets.pending),
            Self::Immature => (TicketIcon::Immature, tickets.pending),
            Self::Live => (TicketIcon::Live, tickets.live),
            Self::Voted => (TicketIcon::Voted, tickets.voted),
            Self::Missed => (TicketIcon::Missed, tickets.inactive),
            Self::Expired => (TicketIcon::Expired, tickets.inactive),
            Self::Revoked => (TicketIcon::Revoked, tickets.revoked),
        };
        TicketStatusStyle {
            icon,
            color: palette.foreground,
            background: palette.background,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TicketStatusStyle {
    pub icon: TicketIcon,
    pub color: iced::Color,
    pub background: iced::Color,
}

pub fn ticket_status_icon(theme: &Theme, label: &str) -> Option<TicketStatusStyle> {
    TicketStatus::from_label(label).map(|status| status.style(theme))
}

/// Returns true if any editor was submitted since the last call. Every
/// editor is drained, so a submit is reported once.
pub fn handle_submit_event(editors: &mut [&mut Editor]) -> bool {
    editors
        .iter_mut()
        .fold(false, |submitted, editor| editor.take_submits() > 0 || submitted)
}

#[derive(Debug, thiserror::Error)]
pub enum PathError {
    #[error("Failed to get the executable path: {0}")]
    Executable(io::Error),
    #[error("Failed to resolve symlinks: {0}")]
    Symlink(io::Error),
    #[error("{0} has no parent directory")]
    NoParent(PathBuf),
}

/// Directory of the running executable, symlinks resolved.
pub fn get_absolute_path() -> Result<PathBuf, PathError> {
    let exe = std::env::current_exe().map_err(PathError::Executable)?;
    executable_dir(&exe)
}

pub fn executable_dir(path: &Path) -> Result<PathBuf, PathError> {
    let resolved = path.canonicalize().map_err(PathError::Symlink)?;
    match resolved.parent() {
        Some(parent) => Ok(parent.to_path_buf()),
        None => Err(PathError::NoParent(resolved)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wallet::{mock::MockWallet, WalletError};

    #[test]
    fn translate_errors() {
        assert_eq!(
            translate_err(&Error::Wallet(WalletError::InvalidPassphrase)),
            "Invalid passphrase"
        );
        assert_eq!(
            translate_err(&Error::Wallet(WalletError::Randomness("no entropy".into()))),
            "Error related to getting randomness: no entropy"
        );
        assert_eq!(
            translate_err(&Error::Unexpected("boom".into())),
            "Unexpected error: boom"
        );
    }

    #[test]
    fn non_empty_editors() {
        assert!(editors_not_empty(&[]));

        let mut a = Editor::new();
        let mut b = Editor::new();
        a.set_text("pass".to_string());
        assert!(editors_not_empty(&[&a]));
        assert!(!editors_not_empty(&[&a, &b]));
        b.set_text(" ".to_string());
        assert!(editors_not_empty(&[&a, &b]));
    }

    #[test]
    fn random_numbers() {
        let a = generate_random_number();
        std::thread::sleep(std::time::Duration::from_millis(1));
        assert_ne!(a, generate_random_number());
    }

    #[test]
    fn filter_locked_wallets() {
        let wallets: Vec<Arc<dyn Wallet>> = vec![
            Arc::new(MockWallet::with_status("locked", true, false)),
            Arc::new(MockWallet::with_status("locked-discovered", true, true)),
            Arc::new(MockWallet::with_status("unlocked", false, false)),
            Arc::new(MockWallet::with_status("unlocked-discovered", false, true)),
            Arc::new(MockWallet::with_status("locked-2", true, false)),
        ];
        let names: Vec<String> = locked_wallets(&wallets)
            .iter()
            .map(|w| w.name().to_string())
            .collect();
        assert_eq!(names, vec!["locked", "locked-2"]);
        assert!(locked_wallets::<dyn Wallet>(&[]).is_empty());
    }

    #[test]
    fn click_gestures_are_independent() {
        let mut clicks = create_click_gestures(3);
        assert_eq!(clicks.len(), 3);
        clicks[1].press();
        assert!(!clicks[0].clicked());
        assert!(clicks[1].clicked());
        assert!(!clicks[2].clicked());
        assert!(create_click_gestures(0).is_empty());
    }

    #[test]
    fn cross_wallet_labels() {
        let txs = |names: &[&str]| -> Vec<Transaction> {
            names
                .iter()
                .enumerate()
                .map(|(i, name)| Transaction::new(format!("{:064x}", i), *name))
                .collect()
        };
        assert!(!show_label(&[]));
        assert!(!show_label(&txs(&["a"])));
        assert!(!show_label(&txs(&["a", "a", "a"])));
        assert!(show_label(&txs(&["a", "b"])));
        assert!(show_label(&txs(&["a", "b", "a"])));
        assert!(show_label(&txs(&["a", "a", "b", "b"])));

        // An unnamed wallet is not a previous wallet.
        assert!(!show_label(&txs(&["", "a"])));
        assert!(!show_label(&txs(&["", "", "a"])));
        assert!(show_label(&txs(&["a", ""])));
        assert!(show_label(&txs(&["", "a", "b"])));
    }

    #[test]
    fn url_commands() {
        let url = "https://docs.decred.org";
        let args = |cmd: &Command| -> Vec<String> {
            cmd.get_args()
                .map(|a| a.to_string_lossy().into_owned())
                .collect()
        };

        let cmd = url_launch_command("linux", url).unwrap();
        assert_eq!(cmd.get_program(), "xdg-open");
        assert_eq!(args(&cmd), vec![url]);

        let cmd = url_launch_command("windows", url).unwrap();
        assert_eq!(cmd.get_program(), "rundll32");
        assert_eq!(args(&cmd), vec!["url.dll,FileProtocolHandler", url]);

        let cmd = url_launch_command("macos", url).unwrap();
        assert_eq!(cmd.get_program(), "open");
        assert_eq!(args(&cmd), vec![url]);

        match url_launch_command("plan9", url) {
            Err(OpenUrlError::UnsupportedPlatform(os)) => assert_eq!(os, "plan9"),
            res => panic!("unexpected result: {:?}", res),
        }
    }

    #[test]
    fn password_strength() {
        let theme = Theme::default();
        let empty = compute_password_strength("", &theme);
        assert_eq!(empty.progress, 0.0);
        assert_eq!(empty.color, theme.colors.text.success);

        // 2 bits of entropy per character.
        let half = compute_password_strength("abcd", &theme);
        assert!((half.progress - 50.0).abs() < f32::EPSILON);

        let strong = compute_password_strength("abcdefghijklmnopqrstuvwxyz0123456789", &theme);
        assert_eq!(strong.progress, 100.0);
        assert_eq!(strong.color, theme.colors.text.success);
    }

    #[test]
    fn ticket_statuses() {
        let theme = Theme::default();
        for (label, icon) in [
            ("UNMINED", TicketIcon::Unmined),
            ("IMMATURE", TicketIcon::Immature),
            ("LIVE", TicketIcon::Live),
            ("VOTED", TicketIcon::Voted),
            ("MISSED", TicketIcon::Missed),
            ("EXPIRED", TicketIcon::Expired),
            ("REVOKED", TicketIcon::Revoked),
        ] {
            let style = ticket_status_icon(&theme, label).unwrap();
            assert_eq!(style.icon, icon);
        }
        let voted = ticket_status_icon(&theme, "VOTED").unwrap();
        assert_eq!(voted.color, theme.colors.tickets.voted.foreground);
        assert_eq!(voted.background, theme.colors.tickets.voted.background);

        assert!(ticket_status_icon(&theme, "PENDING").is_none());
        assert!(ticket_status_icon(&theme, "live").is_none());
    }

    #[test]
    fn submit_events_are_drained() {
        let mut a = Editor::new();
        let mut b = Editor::new();
        assert!(!handle_submit_event(&mut []));
        assert!(!handle_submit_event(&mut [&mut a, &mut b]));

        a.submit();
        b.submit();
        assert!(handle_submit_event(&mut [&mut a, &mut b]));
        // Both queues were drained by the previous call.
        assert!(!handle_submit_event(&mut [&mut a, &mut b]));
    }

    #[test]
    fn executable_directory() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("bin");
        std::fs::create_dir(&bin).unwrap();
        let exe = bin.join("cryptopower");
        std::fs::write(&exe, b"").unwrap();

        assert_eq!(executable_dir(&exe).unwrap(), bin.canonicalize().unwrap());
        assert!(matches!(
            executable_dir(&dir.path().join("missing")),
            Err(PathError::Symlink(_))
        ));
        assert!(matches!(
            executable_dir(Path::new("/")),
            Err(PathError::NoParent(_))
        ));
        assert!(get_absolute_path().unwrap().is_dir());
    }

    #[cfg(unix)]
    #[test]
    fn executable_directory_through_symlinks() {
        let dir = tempfile::tempdir().unwrap();
        let bin = dir.path().join("bin");
        std::fs::create_dir(&bin).unwrap();
        let exe = bin.join("cryptopower");
        std::fs::write(&exe, b"").unwrap();

        let link = dir.path().join("link");
        std::os::unix::fs::symlink(&exe, &link).unwrap();
        assert_eq!(executable_dir(&link).unwrap(), bin.canonicalize().unwrap());

        let dangling = dir.path().join("dangling");
        std::os::unix::fs::symlink(dir.path().join("nowhere"), &dangling).unwrap();
        assert!(matches!(
            executable_dir(&dangling),
            Err(PathError::Symlink(_))
        ));
    }
}
