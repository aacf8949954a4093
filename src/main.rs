// nearest - jump back to the directories you actually use
//
// This is the main entry point. Takes one argument, prints the directory to cd into.

use anyhow::{Context, Result};
use nearest_lib::{
    shell::{init_script, Shell, ShellDetector},
    Config, Navigator, NearestError,
};
use std::env;
use std::ffi::{OsStr, OsString};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::debug;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Exit code for a malformed invocation
const USAGE_EXIT: u8 = 2;

/// What a single invocation should do
#[derive(Debug, PartialEq, Eq)]
enum Action<'a> {
    Jump(&'a str),
    Help,
    Version,
    Init(Option<&'a str>),
    Usage,
}

fn main() -> Result<ExitCode> {
    init_logging();

    let args: Vec<OsString> = env::args_os().skip(1).collect();

    match parse_args(&args)? {
        Action::Help => {
            println!("{}", usage());
            Ok(ExitCode::SUCCESS)
        }
        Action::Version => {
            println!("nearest v{}", env!("CARGO_PKG_VERSION"));
            Ok(ExitCode::SUCCESS)
        }
        Action::Init(shell) => handle_init(shell),
        Action::Jump(argument) => handle_jump(argument),
        Action::Usage => {
            // Wrong argument count. Don't touch the list.
            eprintln!("{}", usage());
            Ok(ExitCode::from(USAGE_EXIT))
        }
    }
}

// stdout is reserved for the path, so logs go to stderr
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

// Count first, so a bad argument in a wrong-sized invocation still gets usage
fn parse_args(args: &[OsString]) -> std::result::Result<Action<'_>, NearestError> {
    match args {
        [single] => Ok(match utf8(single)? {
            "-h" | "--help" => Action::Help,
            "-V" | "--version" => Action::Version,
            "--init" => Action::Init(None),
            argument => Action::Jump(argument),
        }),
        [flag, shell] if flag == "--init" => Ok(Action::Init(Some(utf8(shell)?))),
        _ => Ok(Action::Usage),
    }
}

fn utf8(arg: &OsStr) -> std::result::Result<&str, NearestError> {
    arg.to_str().ok_or_else(|| {
        NearestError::InvalidArgument(format!(
            "argument is not valid UTF-8: {}",
            arg.to_string_lossy()
        ))
    })
}

fn handle_jump(argument: &str) -> Result<ExitCode> {
    let config = Config::from_home()?;
    let cwd = env::current_dir().context("Could not read the current directory")?;
    debug!(list = %config.storage_path.display(), cwd = %cwd.display(), "starting");

    let navigator = Navigator::new(&config, cwd);

    match navigator.navigate(argument) {
        Ok(target) => {
            println!("{}", target);
            Ok(ExitCode::SUCCESS)
        }
        Err(e @ NearestError::NoMatch(_)) => {
            eprintln!("{}", e.user_message());
            Ok(ExitCode::FAILURE)
        }
        Err(e) => Err(e).with_context(|| {
            format!(
                "Failed to update directory list at {}",
                config.storage_path.display()
            )
        }),
    }
}

fn handle_init(shell: Option<&str>) -> Result<ExitCode> {
    let shell: Shell = match shell {
        Some(name) => name.parse()?,
        None => ShellDetector::detect()?,
    };

    // Point the wrapper at this exact binary when we can
    let binary = env::current_exe().unwrap_or_else(|_| PathBuf::from("nearest"));

    print!("{}", init_script(shell, &binary));
    Ok(ExitCode::SUCCESS)
}

fn usage() -> String {
    format!(
        r#"nearest v{} - cd to the directory you meant

USAGE:
    nearest <directory>
    nearest --init [bash|zsh|fish|powershell]

ARGUMENTS:
    <directory>    An absolute path, a relative path containing a separator,
                   or the start of the name of a directory you used before

The most recently used directory whose name starts with <directory>
(ignoring case) is printed. If none matches, subdirectories of the
current directory are tried. The list lives in ~/Documents/cd-nearest.csv.

EXAMPLES:
    cd "$(nearest proj)"
    eval "$(nearest --init bash)"; cdn proj

OPTIONS:
    --init [shell]    Print a `cdn` shell function that wraps nearest
    -h, --help        Show this help
    -V, --version     Show version
"#,
        env!("CARGO_PKG_VERSION")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<OsString> {
        list.iter().map(OsString::from).collect()
    }

    #[test]
    fn test_no_arguments_is_usage() {
        assert_eq!(parse_args(&args(&[])).unwrap(), Action::Usage);
    }

    #[test]
    fn test_two_arguments_is_usage() {
        assert_eq!(parse_args(&args(&["a", "b"])).unwrap(), Action::Usage);
        assert_eq!(parse_args(&args(&["--init", "zsh", "x"])).unwrap(), Action::Usage);
    }

    #[test]
    fn test_single_argument_is_jump() {
        assert_eq!(parse_args(&args(&["proj"])).unwrap(), Action::Jump("proj"));
        assert_eq!(parse_args(&args(&["/abs/path"])).unwrap(), Action::Jump("/abs/path"));
    }

    #[test]
    fn test_flags() {
        assert_eq!(parse_args(&args(&["--help"])).unwrap(), Action::Help);
        assert_eq!(parse_args(&args(&["-h"])).unwrap(), Action::Help);
        assert_eq!(parse_args(&args(&["-V"])).unwrap(), Action::Version);
        assert_eq!(parse_args(&args(&["--init"])).unwrap(), Action::Init(None));
        assert_eq!(
            parse_args(&args(&["--init", "zsh"])).unwrap(),
            Action::Init(Some("zsh"))
        );
    }

    #[test]
    fn test_help_with_extra_argument_is_usage() {
        assert_eq!(parse_args(&args(&["--help", "x"])).unwrap(), Action::Usage);
    }

    #[cfg(unix)]
    #[test]
    fn test_non_utf8_argument() {
        use std::os::unix::ffi::OsStringExt;

        let bad = OsString::from_vec(vec![0x66, 0x6f, 0xff]);

        // Wrong count wins over bad encoding
        let two = vec![bad.clone(), OsString::from("extra")];
        assert_eq!(parse_args(&two).unwrap(), Action::Usage);

        match parse_args(&[bad]) {
            Err(NearestError::InvalidArgument(_)) => {}
            other => panic!("Expected InvalidArgument error, got {:?}", other),
        }
    }
}
