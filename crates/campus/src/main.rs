use clap::{Parser, Subcommand};
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::path::Path;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "campus")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server.
    Serve,
    /// Print the OpenAPI document and exit.
    Openapi,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    match cli.command {
        Command::Serve => {
            tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug")),
                )
                .init();

            let port = std::env::var("CAMPUS_PORT")
                .ok()
                .and_then(|value| value.parse::<u16>().ok())
                .unwrap_or(4710);
            let addr = SocketAddr::new(IpAddr::V4(Ipv4Addr::LOCALHOST), port);

            let demo = std::env::var("CAMPUS_DEMO")
                .map(|value| value == "1" || value.eq_ignore_ascii_case("true"))
                .unwrap_or(false);

            let result = if demo {
                tracing::info!("demo mode: data is held in memory and lost on exit");
                let state = campus_serve::AppState {
                    provider: campus_serve::DemoStore::new(),
                };
                campus_serve::serve(state, addr).await
            } else {
                let db_path = std::env::var("CAMPUS_DB_PATH")
                    .unwrap_or_else(|_| ".campus/campus.db".to_string());
                if let Err(err) = ensure_parent_dir(&db_path) {
                    eprintln!("cannot create data directory for {db_path}: {err}");
                    std::process::exit(1);
                }
                let state = campus_serve::AppState {
                    provider: campus_serve::FileStore { db_path },
                };
                campus_serve::serve(state, addr).await
            };

            if let Err(err) = result {
                eprintln!("serve error: {err}");
            }
        }
        Command::Openapi => {
            let spec = campus_serve::openapi::generate_spec();
            println!("{spec}");
        }
    }
}

fn ensure_parent_dir(db_path: &str) -> std::io::Result<()> {
    match Path::new(db_path).parent() {
        // A bare file name has an empty parent; nothing to create.
        Some(parent) if !parent.as_os_str().is_empty() => std::fs::create_dir_all(parent),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::ensure_parent_dir;

    #[test]
    fn creates_missing_parent_directories() {
        let base = std::env::temp_dir().join(format!("campus-cli-{}", std::process::id()));
        let _ = std::fs::remove_dir_all(&base);
        let db_path = base.join("nested").join("campus.db");
        ensure_parent_dir(db_path.to_str().unwrap()).unwrap();
        assert!(db_path.parent().unwrap().is_dir());
        let _ = std::fs::remove_dir_all(&base);
    }

    #[test]
    fn bare_file_name_needs_no_directory() {
        assert!(ensure_parent_dir("campus.db").is_ok());
    }
}
