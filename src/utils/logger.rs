use anyhow::Result;
use std::fmt::Display;
use tracing::{error, warn};
use tracing::{level_filters::LevelFilter, Subscriber};
use tracing_subscriber::{prelude::*, EnvFilter};

// A simple way to log without interrupting fluency
pub trait LogMe<T> {
    fn log_warn<C: Display + Send + Sync + 'static>(self, context_msg: C) -> anyhow::Result<T>;
    fn log_error<C: Display + Send + Sync + 'static>(self, context_msg: C) -> anyhow::Result<T>;
}

// Will log a warning in case of error
// WARN {context_msg}: {cause}
impl<T, Error: Into<anyhow::Error> + Display + Send + Sync + 'static> LogMe<T>
    for Result<T, Error>
{
    fn log_warn<C: Display + Send + Sync + 'static>(self, context_msg: C) -> anyhow::Result<T> {
        match self {
            Err(e) => {
                let ae: anyhow::Error = e.into();
                let ae = ae.context(context_msg);
                warn!("{:#}", ae);
                Err(ae)
            }
            Ok(t) => Ok(t),
        }
    }

    fn log_error<C: Display + Send + Sync + 'static>(self, context_msg: C) -> anyhow::Result<T> {
        match self {
            Err(e) => {
                let ae: anyhow::Error = e.into();
                let ae = ae.context(context_msg);
                error!("{:#}", ae);
                Err(ae)
            }
            Ok(t) => Ok(t),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TracingMode {
    /// Human readable lines
    Full,
    /// One JSON object per event, for log collectors
    Json,
}

impl TracingMode {
    pub fn from_log_format(log_format: &str) -> Self {
        match log_format {
            "json" => TracingMode::Json,
            _ => TracingMode::Full,
        }
    }
}

/// Setup tracing - stderr subscriber, stdout is left to command output.
/// Defaults to INFO, hyper and reqwest internals stay at INFO unless RUST_LOG names them.
pub fn setup_tracing(mode: TracingMode) -> Result<()> {
    let mut filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env()?;

    let var = std::env::var("RUST_LOG").unwrap_or("".to_string());
    if !var.contains("hyper") {
        filter = filter.add_directive("hyper=info".parse()?);
    }
    if !var.contains("reqwest") {
        filter = filter.add_directive("reqwest=info".parse()?);
    }

    // Can't use match inline because these are different return types
    match mode {
        TracingMode::Full => register_global_subscriber(
            filter,
            tracing_subscriber::fmt::layer().with_writer(std::io::stderr),
        ),
        TracingMode::Json => register_global_subscriber(
            filter,
            tracing_subscriber::fmt::layer()
                .event_format(tracing_subscriber::fmt::format().json())
                .with_writer(std::io::stderr),
        ),
    };

    Ok(())
}

fn register_global_subscriber<T, S>(filter: EnvFilter, fmt_layer: T)
where
    S: Subscriber,
    T: tracing_subscriber::Layer<S> + Send + Sync,
    tracing_subscriber::filter::Filtered<T, tracing_subscriber::EnvFilter, S>:
        tracing_subscriber::Layer<tracing_subscriber::Registry>,
{
    tracing_subscriber::registry()
        .with(fmt_layer.with_filter(filter))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format() {
        assert_eq!(TracingMode::from_log_format("json"), TracingMode::Json);
        assert_eq!(TracingMode::from_log_format("full"), TracingMode::Full);
        assert_eq!(TracingMode::from_log_format(""), TracingMode::Full);
    }

    #[test_log::test]
    fn test_log_me_keeps_error_and_adds_context() {
        let res: Result<(), std::io::Error> = Err(std::io::Error::other("connection reset"));

        let err = res.log_warn("getting transaction stream").unwrap_err();

        assert_eq!(
            format!("{:#}", err),
            "getting transaction stream: connection reset"
        );
        assert!(err.downcast_ref::<std::io::Error>().is_some());
    }

    #[test]
    fn test_log_me_passes_ok_through() {
        let res: Result<u64, std::io::Error> = Ok(7);
        assert_eq!(res.log_error("unused").unwrap(), 7);
    }
}
