use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// 兩個執行檔各自的 target，`warn!`/`error!` 不能被預設過濾掉
const BINARY_TARGETS: [&str; 2] = ["convert", "toml_convert"];

fn default_directives(verbose: bool, level: Option<&str>) -> String {
    let level = level.unwrap_or(if verbose { "debug" } else { "info" });
    let mut directives = format!("record_convert={}", level);
    for target in BINARY_TARGETS {
        directives.push_str(&format!(",{}={}", target, level));
    }
    directives.push_str(",warn");
    directives
}

fn default_filter(verbose: bool, level: Option<&str>) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directives(verbose, level)))
}

/// `level` 來自設定檔，優先於 `verbose`；`RUST_LOG` 則優先於兩者
pub fn init_logger(verbose: bool, level: Option<&str>, json: bool) {
    let filter = default_filter(verbose, level);
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_writer(std::io::stderr)
                    .json(),
            )
            .init();
    } else {
        registry
            .with(
                tracing_subscriber::fmt::layer()
                    .with_target(false)
                    .with_thread_ids(false)
                    .with_file(false)
                    .with_line_number(false)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .init();
    }
}
