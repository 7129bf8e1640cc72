use std::io::Write;

use anyhow::Context;

use subhunter::config::EnumConfig;
use subhunter::discover::crtsh::CrtShSource;
use subhunter::enumerate::enumerate;
use subhunter::output::write_results;

use crate::cli::Cli;

fn print_ascii_logo() {
    println!(
        r#"
         ____  _   _ ____  _   _ _   _ _   _ _____ _____ ____
        / ___|| | | | __ )| | | | | | | \ | |_   _| ____|  _ \
        \___ \| | | |  _ \| |_| | | | |  \| | | | |  _| | |_) |
         ___) | |_| | |_) |  _  | |_| | |\  | | | | |___|  _ <
        |____/ \___/|____/|_| |_|\___/|_| \_| |_| |_____|_| \_\

                  Certificate-Transparency Subdomain Finder
    "#
    );
}

pub async fn run_from_cli(cli: Cli) -> anyhow::Result<()> {
    // Configure logging based on global flags. Keep external crates
    // (reqwest/hyper) at INFO so debug runs stay readable.
    use tracing_subscriber::EnvFilter;
    let crate_level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else {
        "warn"
    };
    let filter_str = format!("subhunter={crate_level},reqwest=info,hyper=info,h2=info");
    let env_filter = EnvFilter::try_new(&filter_str).unwrap_or_else(|_| EnvFilter::new(crate_level));
    match cli.log.as_deref() {
        Some(path) => {
            let file = open_log_file(path)?;
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_ansi(false)
                .with_target(false)
                .with_writer(file)
                .init();
        }
        None => {
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_ansi(true)
                .with_target(false)
                .init();
        }
    }

    let cfg = EnumConfig {
        domain: cli.domain.trim().to_lowercase(),
        recursive: cli.recursive,
        include_wildcards: cli.wildcard,
        exclude_wildcards: cli.exclude_wildcards,
        extensions: EnumConfig::parse_extensions(cli.extensions.as_deref()),
        rate_limit: EnumConfig::parse_seconds("rate-limit", cli.rate_limit)?,
        timeout: EnumConfig::parse_seconds("timeout", cli.timeout)?,
        user_agent: cli.user_agent.clone(),
        max_queries: cli.max_queries,
        technique: cli.technique,
    };
    cfg.validate()?;

    if !cli.no_banner {
        print_ascii_logo();
    }
    println!("[>] Target: {}", cfg.domain);
    if cfg.recursive {
        println!("[~] Recursing into wildcard results");
    }
    if !cfg.extensions.is_empty() {
        println!("[~] Extension filter: {}", cfg.extensions.join(", "));
    }

    if cli.interactive && !confirm_run(&cfg)? {
        println!("[·] Aborted before any queries were issued");
        return Ok(());
    }

    tracing::info!(
        domain = %cfg.domain,
        recursive = cfg.recursive,
        include_wildcards = cfg.include_wildcards,
        exclude_wildcards = cfg.exclude_wildcards,
        max_queries = cfg.max_queries,
        "starting enumeration"
    );

    let source = CrtShSource::new(&cfg)?;
    let result = enumerate(&source, &cfg).await?;

    for subdomain in &result.subdomains {
        println!("[+] {subdomain}");
    }
    println!(
        "\n[·] {} subdomains from {} queries ({} failed branches{})",
        result.subdomains.len(),
        result.queries_issued,
        result.failed_branches,
        if result.capped { ", query cap hit" } else { "" }
    );

    if let Some(path) = cli.output.as_deref() {
        write_results(&result.subdomains, cli.format, Some(path))?;
        println!("[·] Saved to {}", path.display());
    }

    Ok(())
}

fn open_log_file(path: &std::path::Path) -> anyhow::Result<std::sync::Mutex<std::fs::File>> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("cannot open log file {}", path.display()))?;
    Ok(std::sync::Mutex::new(file))
}

fn confirm_run(cfg: &EnumConfig) -> anyhow::Result<bool> {
    println!(
        "\nAbout to query crt.sh for '{}' (timeout {:.1}s, delay {:.1}s per request).",
        cfg.domain,
        cfg.timeout.as_secs_f64(),
        cfg.rate_limit.as_secs_f64()
    );
    print!("Proceed? [y/N] ");
    std::io::stdout().flush()?;
    let mut line = String::new();
    std::io::stdin().read_line(&mut line)?;
    Ok(matches!(line.trim(), "y" | "Y" | "yes" | "YES"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_file_is_created() {
        let dir = std::env::temp_dir().join("subhunter-log-test");
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("run.log");
        assert!(open_log_file(&path).is_ok());
        assert!(path.exists());
        std::fs::remove_file(&path).ok();
    }

    #[test]
    fn unwritable_log_path_is_an_error() {
        let err = open_log_file(std::path::Path::new("/nonexistent-dir/run.log")).unwrap_err();
        assert!(err.to_string().contains("cannot open log file"));
    }
}
