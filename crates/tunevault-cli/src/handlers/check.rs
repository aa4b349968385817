//! Check the tools and directories an acquisition pass depends on.

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::bootstrap::CliContext;

// ANSI color codes
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

/// Execute the check command.
///
/// Probes the pieces a pass needs before it starts: the external curl
/// binary the netease transport shells out to, a writable data
/// directory, and a reachable database.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    println!("{}Checking the acquisition environment...{}", BOLD, RESET);
    println!();

    let mut failures = 0u32;

    // curl on PATH (netease downloads shell out to it)
    let curl = &ctx.config.provider.curl_program;
    match which::which(curl) {
        Ok(path) => print_ok(curl, &path.display().to_string()),
        Err(_) => {
            print_failed(curl, "not found on PATH; netease downloads will fail");
            failures += 1;
        }
    }

    // data directory writable (blobs land beneath it)
    match probe_writable(&ctx.config.data_dir) {
        Ok(()) => print_ok("data dir", &ctx.config.data_dir.display().to_string()),
        Err(err) => {
            print_failed(
                "data dir",
                &format!("{}: {err}", ctx.config.data_dir.display()),
            );
            failures += 1;
        }
    }

    // database reachable
    match ctx.songs.stats().await {
        Ok(_) => print_ok("database", &ctx.config.database_path.display().to_string()),
        Err(err) => {
            print_failed("database", &err.to_string());
            failures += 1;
        }
    }

    println!();
    if failures == 0 {
        println!(
            "{}✓ Everything an acquisition pass needs is in place.{}",
            GREEN, RESET
        );
        Ok(())
    } else {
        anyhow::bail!("{failures} check(s) failed")
    }
}

fn print_ok(name: &str, detail: &str) {
    println!("{}✓{} {:<10} {}", GREEN, RESET, name, detail);
}

fn print_failed(name: &str, detail: &str) {
    println!("{}✗{} {:<10} {}", RED, RESET, name, detail);
}

/// Write and remove a probe file to prove the directory is writable.
fn probe_writable(dir: &Path) -> std::io::Result<()> {
    let probe = dir.join(".tunevault-write-probe");
    fs::write(&probe, b"probe")?;
    fs::remove_file(&probe)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::bootstrap::testing;
    use tunevault_provider::ProviderConfig;

    #[cfg(unix)]
    #[tokio::test]
    async fn all_probes_pass_with_a_resolvable_program() {
        let (ctx, _dir) =
            testing::context_with(ProviderConfig::default().with_curl_program("sh")).await;
        execute(&ctx).await.unwrap();
    }

    #[tokio::test]
    async fn missing_external_program_fails_the_check() {
        let (ctx, _dir) = testing::context_with(
            ProviderConfig::default().with_curl_program("no-such-downloader"),
        )
        .await;
        assert!(execute(&ctx).await.is_err());
    }

    #[test]
    fn writable_probe_accepts_a_temp_dir() {
        let dir = tempfile::tempdir().unwrap();
        probe_writable(dir.path()).unwrap();
    }
}
