use std::env;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use pkgcode::app::{EditorSession, SessionOptions};
use pkgcode::kernel::services::adapters::{load_settings, LocalRemoteFileApi};
use pkgcode::kernel::services::ports::{RemoteFileApi, Settings};
use pkgcode::models::file_tree;
use pkgcode::views::explorer;

mod logging;

const SETTLE_TIMEOUT: Duration = Duration::from_secs(30);

fn usage() -> ExitCode {
    eprintln!("usage: pkgcode <dir|http-url> [tree | cat <path> | find <query>]");
    ExitCode::from(2)
}

fn main() -> ExitCode {
    let _logging = logging::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(source) = args.first() else {
        return usage();
    };

    let settings = load_settings().unwrap_or_default();
    let api = match open_api(source, &settings) {
        Ok(api) => api,
        Err(e) => {
            eprintln!("pkgcode: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut options = SessionOptions::from_settings(&settings);
    // The probe never writes.
    options.read_only = true;
    let mut session = match EditorSession::new(api, options) {
        Ok(session) => session,
        Err(e) => {
            tracing::error!(error = %e, "failed to start session");
            eprintln!("pkgcode: {e}");
            return ExitCode::FAILURE;
        }
    };

    if !session.run_until_idle(SETTLE_TIMEOUT) {
        eprintln!("pkgcode: timed out loading the file tree");
        return ExitCode::FAILURE;
    }
    if let Some(error) = session.tree_error() {
        eprintln!("pkgcode: {error}");
        return ExitCode::FAILURE;
    }

    let command = args.get(1).map(String::as_str).unwrap_or("tree");
    match (command, args.get(2)) {
        ("tree", _) => print_tree(&mut session),
        ("cat", Some(path)) => cat(&mut session, path),
        ("find", query) => {
            let query = query.map(String::as_str).unwrap_or("");
            for m in session.quick_open(query) {
                println!("{}", m.path);
            }
            ExitCode::SUCCESS
        }
        _ => usage(),
    }
}

fn open_api(source: &str, settings: &Settings) -> io::Result<Arc<dyn RemoteFileApi>> {
    if source.starts_with("http://") || source.starts_with("https://") {
        return open_http(source);
    }
    if source == "-" {
        if let Some(base_url) = settings.remote.base_url.as_deref() {
            return open_http(base_url);
        }
    }
    let root = std::path::PathBuf::from(source);
    if !root.is_dir() {
        return Err(io::Error::new(
            io::ErrorKind::NotFound,
            format!("{source} is not a directory"),
        ));
    }
    Ok(Arc::new(LocalRemoteFileApi::new(root)))
}

#[cfg(feature = "http")]
fn open_http(base_url: &str) -> io::Result<Arc<dyn RemoteFileApi>> {
    Ok(Arc::new(
        pkgcode::kernel::services::adapters::HttpRemoteFileApi::new(base_url),
    ))
}

#[cfg(not(feature = "http"))]
fn open_http(base_url: &str) -> io::Result<Arc<dyn RemoteFileApi>> {
    Err(io::Error::new(
        io::ErrorKind::Unsupported,
        format!("{base_url}: built without the `http` feature"),
    ))
}

fn print_tree(session: &mut EditorSession) -> ExitCode {
    let dirs: Vec<String> = file_tree::flatten_dirs(&session.state().tree)
        .into_iter()
        .map(str::to_string)
        .collect();
    for dir in dirs {
        session.toggle_expanded(&dir);
    }
    for row in explorer::rows(session.state()) {
        println!("{}", explorer::render_row(&row));
    }
    ExitCode::SUCCESS
}

fn cat(session: &mut EditorSession, path: &str) -> ExitCode {
    if let Err(e) = session.open_file(path) {
        eprintln!("pkgcode: {e}");
        return ExitCode::FAILURE;
    }
    session.run_until_idle(SETTLE_TIMEOUT);
    match session.state().document(path) {
        Some(doc) if !doc.is_loading() => {
            print!("{}", doc.buffer_content);
            ExitCode::SUCCESS
        }
        _ => {
            eprintln!("pkgcode: cannot read {path}");
            ExitCode::FAILURE
        }
    }
}
